// src/classify/classify_taxa.rs

use super::TaxonomyIndex;
use crate::error::{DaError, Result};
use crate::types::{DomainPresence, TaxonToken};

/// Outcome of scanning one DA's taxa list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaxaScan {
    pub presence: DomainPresence,
    /// Tokens examined before the list ran out or all three superkingdoms were seen.
    pub scanned: usize,
    /// Tokens whose accession and species code were both unknown.
    pub unresolved: usize,
}

/// Marks which superkingdoms a comma-separated taxa list covers.
///
/// Each token is resolved by accession first, then by species code. The scan
/// stops as soon as all three superkingdoms are present, so tokens after that
/// point are never parsed. `line_no` is only used for error messages.
pub fn classify_taxa(
    taxa: &str,
    index: &TaxonomyIndex,
    diagnostics: bool,
    line_no: usize,
) -> Result<TaxaScan> {
    let mut scan = TaxaScan::default();

    for taxon in taxa.split(',') {
        let token = TaxonToken::parse(taxon).ok_or_else(|| DaError::MalformedTaxon {
            line: line_no,
            token: taxon.to_string(),
        })?;
        scan.scanned += 1;

        match index.resolve(token.accession, token.species_code) {
            Some(label) => {
                if let Some(sk) = label.superkingdom() {
                    scan.presence.mark(sk);
                }
            }
            None => {
                scan.unresolved += 1;
                if diagnostics {
                    log::warn!(
                        "No taxonomy information found for either {} nor {}",
                        token.accession,
                        token.species_code
                    );
                }
            }
        }

        // have we already found all 3 domains?
        if scan.presence.is_complete() {
            break;
        }
    }
    Ok(scan)
}

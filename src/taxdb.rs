//src/taxdb.rs

use ahash::AHashMap;
use std::io::BufRead;
use std::path::Path;

use crate::error::{DaError, InputKind, Result};
use crate::input::open_reader;
use crate::types::DomainLabel;

pub type SpeciesMap = AHashMap<String, DomainLabel>;
pub type AccessionMap = AHashMap<String, DomainLabel>;

const SPECIES_FIELD: usize = 0;
const ACCESSION_FIELD: usize = 6;
const DOMAIN_FIELD: usize = 7;

/// Species-code and accession lookups into superkingdom labels.
///
/// Built once from the taxonomy info file and read-only afterwards.
#[derive(Debug, Default, Clone)]
pub struct TaxonomyIndex {
    pub species: SpeciesMap,
    pub accessions: AccessionMap,
}

impl TaxonomyIndex {
    /// Parses a taxonomy info file in the format:
    /// ```text
    /// SPECIES_CODE\tKingdom\tTaxon_Node\tScientific name\tCommon name\tSynonym\tAccession\tsuperkingdom[\t...]
    /// ```
    /// Every row overwrites earlier entries for the same key, so the last row wins.
    /// A row with fewer than 8 fields is an error.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut index = TaxonomyIndex::default();

        for (i, line_result) in reader.lines().enumerate() {
            let line_no = i + 1;
            let line = line_result.map_err(|source| DaError::Read {
                kind: InputKind::Taxonomy,
                line: line_no,
                source,
            })?;
            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() <= DOMAIN_FIELD {
                return Err(DaError::MissingField {
                    kind: InputKind::Taxonomy,
                    line: line_no,
                    field: DOMAIN_FIELD,
                    found: fields.len(),
                });
            }

            let domain = DomainLabel::parse(fields[DOMAIN_FIELD]);
            index
                .species
                .insert(fields[SPECIES_FIELD].to_string(), domain.clone());
            index
                .accessions
                .insert(fields[ACCESSION_FIELD].to_string(), domain);
        }
        Ok(index)
    }

    /// Accession first, species code second. `None` if neither key is known.
    pub fn resolve(&self, accession: &str, species_code: &str) -> Option<&DomainLabel> {
        self.accessions
            .get(accession)
            .or_else(|| self.species.get(species_code))
    }
}

/// Loads the taxonomy index from `filepath`, logging key counts when `diagnostics` is set.
pub fn parse_taxonomy<P: AsRef<Path>>(filepath: P, diagnostics: bool) -> Result<TaxonomyIndex> {
    let filepath = filepath.as_ref();
    let index = TaxonomyIndex::from_reader(open_reader(filepath)?)?;
    if diagnostics {
        log::debug!(
            "Found {} species codes in {}",
            index.species.len(),
            filepath.display()
        );
        log::debug!(
            "Found {} accessions in {}",
            index.accessions.len(),
            filepath.display()
        );
    }
    Ok(index)
}

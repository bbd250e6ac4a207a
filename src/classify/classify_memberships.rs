// src/classify/classify_memberships.rs

use indicatif::ProgressBar;
use std::io::{BufRead, Write};

use super::classify_stats::ClassifyStats;
use super::classify_taxa::classify_taxa;
use super::{DaSubset, TaxonomyIndex};
use crate::error::{DaError, InputKind, Result};
use crate::types::DaBreadthRow;

const DA_FIELD: usize = 0;
const TAXA_FIELD: usize = 3;

/// Streams a DA membership table and writes one breadth row per processed DA.
///
/// Expected input:
/// ```text
/// DA\tDomains\tCollapsed_Domains\tTaxa      <- header, always discarded
/// <da>\t<unused>\t<unused>\t<tok>,<tok>,...
/// ```
/// The output header is written before the first row. When `subset` is
/// `Some`, rows whose DA is not in it are skipped before any other field is
/// looked at. Every other row produces output, even with breadth 0.
pub fn classify_memberships<R: BufRead, W: Write>(
    reader: R,
    index: &TaxonomyIndex,
    subset: Option<&DaSubset>,
    diagnostics: bool,
    progress: &ProgressBar,
    out: &mut W,
) -> Result<ClassifyStats> {
    let mut stats = ClassifyStats::default();
    writeln!(out, "{}", DaBreadthRow::HEADER)?;

    for (i, line_result) in reader.lines().enumerate() {
        let line_no = i + 1;
        let line = line_result.map_err(|source| DaError::Read {
            kind: InputKind::Membership,
            line: line_no,
            source,
        })?;
        if line_no == 1 {
            continue;
        }
        stats.rows_read += 1;

        let fields: Vec<&str> = line.split('\t').collect();
        let da = fields[DA_FIELD];
        if let Some(subset) = subset {
            if !subset.contains(da) {
                stats.rows_filtered += 1;
                continue;
            }
        }

        let taxa = fields.get(TAXA_FIELD).ok_or(DaError::MissingField {
            kind: InputKind::Membership,
            line: line_no,
            field: TAXA_FIELD,
            found: fields.len(),
        })?;

        let scan = classify_taxa(taxa, index, diagnostics, line_no)?;
        let row = DaBreadthRow {
            da: da.to_string(),
            presence: scan.presence,
        };
        writeln!(out, "{row}")?;
        stats.record(&row, &scan);
        progress.inc(1);
    }

    Ok(stats)
}

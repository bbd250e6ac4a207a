// src/classify/classify_stats.rs

use super::classify_taxa::TaxaScan;
use crate::types::DaBreadthRow;

/// Counters collected while streaming the membership file.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct ClassifyStats {
    /// Data rows read after the header.
    pub rows_read: usize,
    /// Rows dropped because their DA is not in the subset.
    pub rows_filtered: usize,
    /// Result rows written.
    pub rows_written: usize,
    /// Taxon tokens examined (tokens skipped by the early exit are not counted).
    pub taxa_scanned: usize,
    pub taxa_unresolved: usize,
    /// How many written rows had breadth 0, 1, 2 and 3.
    pub breadth_counts: [usize; 4],
}

impl ClassifyStats {
    pub fn record(&mut self, row: &DaBreadthRow, scan: &TaxaScan) {
        self.rows_written += 1;
        self.taxa_scanned += scan.scanned;
        self.taxa_unresolved += scan.unresolved;
        self.breadth_counts[row.breadth() as usize] += 1;
    }

    /// Rows with a breadth of at least two.
    pub fn multi_domain(&self) -> usize {
        self.breadth_counts[2] + self.breadth_counts[3]
    }

    pub fn log_summary(&self) {
        log::debug!(
            "Processed {} DAs ({} read, {} filtered out)",
            self.rows_written,
            self.rows_read,
            self.rows_filtered
        );
        log::debug!(
            "Scanned {} taxa, {} without taxonomy information",
            self.taxa_scanned,
            self.taxa_unresolved
        );
        log::debug!(
            "Breadth 0/1/2/3: {}/{}/{}/{} ({} span more than one domain)",
            self.breadth_counts[0],
            self.breadth_counts[1],
            self.breadth_counts[2],
            self.breadth_counts[3],
            self.multi_domain()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DomainPresence, Superkingdom};

    #[test]
    fn test_record_tallies_breadth() {
        let mut stats = ClassifyStats::default();

        let mut presence = DomainPresence::default();
        presence.mark(Superkingdom::Archaea);
        presence.mark(Superkingdom::Eukaryota);
        let scan = TaxaScan {
            presence,
            scanned: 4,
            unresolved: 1,
        };
        let row = DaBreadthRow {
            da: "DA1".into(),
            presence,
        };
        stats.record(&row, &scan);

        let empty = DaBreadthRow {
            da: "DA2".into(),
            presence: DomainPresence::default(),
        };
        stats.record(&empty, &TaxaScan::default());

        assert_eq!(stats.rows_written, 2);
        assert_eq!(stats.taxa_scanned, 4);
        assert_eq!(stats.taxa_unresolved, 1);
        assert_eq!(stats.breadth_counts, [1, 0, 1, 0]);
        assert_eq!(stats.multi_domain(), 1);
    }
}

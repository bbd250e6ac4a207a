pub mod classify_memberships;
pub mod classify_stats;
pub mod classify_taxa;

pub use classify_memberships::classify_memberships;
pub use classify_stats::ClassifyStats;
pub use classify_taxa::{classify_taxa, TaxaScan};

use super::subset::DaSubset;
use super::taxdb::TaxonomyIndex;

use ahash::AHashSet;
use std::io::BufRead;
use std::path::Path;

use crate::error::{DaError, InputKind, Result};
use crate::input::open_reader;

/// The DAs of interest. Lines starting with `#` are comments; otherwise the
/// first whitespace-delimited token of each line is a DA identifier.
#[derive(Debug, Default, Clone)]
pub struct DaSubset {
    das: AHashSet<String>,
}

impl DaSubset {
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut das = AHashSet::new();
        for (i, line_result) in reader.lines().enumerate() {
            let line = line_result.map_err(|source| DaError::Read {
                kind: InputKind::Subset,
                line: i + 1,
                source,
            })?;
            if line.starts_with('#') {
                continue;
            }
            let da = line.split_whitespace().next().ok_or(DaError::MissingField {
                kind: InputKind::Subset,
                line: i + 1,
                field: 0,
                found: 0,
            })?;
            das.insert(da.to_string());
        }
        Ok(DaSubset { das })
    }

    pub fn contains(&self, da: &str) -> bool {
        self.das.contains(da)
    }

    pub fn len(&self) -> usize {
        self.das.len()
    }

    pub fn is_empty(&self) -> bool {
        self.das.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for DaSubset {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        DaSubset {
            das: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Loads the subset file if one was given. `None` means every DA is kept.
pub fn parse_subset<P: AsRef<Path>>(
    filepath: Option<P>,
    diagnostics: bool,
) -> Result<Option<DaSubset>> {
    let Some(filepath) = filepath else {
        return Ok(None);
    };
    let filepath = filepath.as_ref();
    let subset = DaSubset::from_reader(open_reader(filepath)?)?;
    if diagnostics {
        log::debug!("Found {} DAs in {}", subset.len(), filepath.display());
    }
    Ok(Some(subset))
}

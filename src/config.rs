use std::path::PathBuf;

/// Everything one run needs. Built by the CLI, or directly by library callers.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// DA membership table: header line, then `DA\tDomains\tCollapsed_Domains\tTaxa`.
    pub membership_path: PathBuf,
    /// Taxonomy info table; columns 1, 7 and 8 are used.
    pub taxonomy_path: PathBuf,
    /// Optional list of DAs to keep.
    pub subset_path: Option<PathBuf>,
    /// Write progress and unresolved-lookup diagnostics to stderr.
    pub diagnostics: bool,
    /// Draw a spinner on stderr while streaming the membership file.
    pub progress: bool,
}

impl Config {
    pub fn new<M: Into<PathBuf>, T: Into<PathBuf>>(membership_path: M, taxonomy_path: T) -> Self {
        Self {
            membership_path: membership_path.into(),
            taxonomy_path: taxonomy_path.into(),
            ..Self::default()
        }
    }

    pub fn with_subset<S: Into<PathBuf>>(mut self, subset_path: S) -> Self {
        self.subset_path = Some(subset_path.into());
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: bool) -> Self {
        self.diagnostics = diagnostics;
        self
    }
}

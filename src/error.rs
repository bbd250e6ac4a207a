//src/error.rs

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DaError>;

/// Which input a line came from, for error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Taxonomy,
    Subset,
    Membership,
}

impl std::fmt::Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            InputKind::Taxonomy => "taxonomy info",
            InputKind::Subset => "DA subset",
            InputKind::Membership => "DA membership",
        })
    }
}

#[derive(Debug, Error)]
pub enum DaError {
    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error reading {kind} file at line {line}: {source}")]
    Read {
        kind: InputKind,
        line: usize,
        #[source]
        source: std::io::Error,
    },

    /// A row has fewer fields than the column we need.
    #[error("{kind} file line {line}: missing field {field} (found {found} fields)")]
    MissingField {
        kind: InputKind,
        line: usize,
        field: usize,
        found: usize,
    },

    #[error("DA membership file line {line}: malformed taxon token {token:?}")]
    MalformedTaxon { line: usize, token: String },

    #[error("failed to write output: {0}")]
    Write(#[from] std::io::Error),
}

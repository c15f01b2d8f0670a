use std::path::PathBuf;

use correlate::CorrelateError;
use thiserror::Error;

/// Failure surfaced by the [`crate::Correlator`] facade.
///
/// The facade keeps its last good correlations and cache contents whenever
/// one of these is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CorrelatorError {
    #[error("correlation failed: {0}")]
    Correlate(#[from] CorrelateError),
    /// Scoring panicked; carries the panic message.
    #[error("correlation panicked: {0}")]
    Panicked(String),
}

/// Errors raised while loading a dataset from JSON.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read {path}: {source}", path = path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {what}: {source}")]
    Parse {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

use signals::SignalError;
use thiserror::Error;

/// Errors produced by the correlation layer.
///
/// Data-quality problems in jobs, programs, or contacts are never errors;
/// only configuration problems are reported here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CorrelateError {
    /// Invalid correlation configuration.
    #[error("invalid correlation config: {0}")]
    InvalidConfig(String),
    /// Signal point tables failed validation.
    #[error(transparent)]
    Signals(#[from] SignalError),
}

// Central Error Type for the Library

use thiserror::Error;

/// Library-level error type
///
/// The two-binding exchanges are total and never produce one of these.
/// Errors only come from the indexed forms and from strategy parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExchangeError {
    #[error("Index out of bounds: {index} (len {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Unknown strategy: {0} (expected copy or move)")]
    UnknownStrategy(String),
}

/// Result type alias using ExchangeError
pub type Result<T> = std::result::Result<T, ExchangeError>;

//! Error types shared across the crate.

use thiserror::Error;

/// Errors produced by matrix operations, decoder construction, and the
/// simulation driver.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed input: non-rectangular matrix literals, incompatible shapes,
    /// an information-bit count the generator matrix cannot support, or an
    /// invalid sigma range.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Indexed access outside a container's declared shape. Indicates a
    /// programming defect rather than a recoverable runtime condition.
    #[error("Index out of range: {0}")]
    IndexOutOfRange(String),

    /// I/O failure while persisting sweep results.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `EfError` where they need
//! to surface configuration problems.

use thiserror::Error;

/// The top-level error type for `ef-core`.
#[derive(Debug, Error)]
pub enum EfError {
    #[error("configuration error: {0}")]
    Config(String),

    #[cfg(feature = "serde")]
    #[error("configuration parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `ef-core`.
pub type EfResult<T> = Result<T, EfError>;

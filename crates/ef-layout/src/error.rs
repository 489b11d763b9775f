//! Layout error type.

use thiserror::Error;

/// Errors produced by `ef-layout`.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// The layout is missing an element every simulation needs.
    #[error("{0}")]
    InvalidLayout(&'static str),

    #[error("layout parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type LayoutResult<T> = Result<T, LayoutError>;

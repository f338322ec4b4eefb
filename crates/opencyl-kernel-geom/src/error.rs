//! Error types for shape queries.

use thiserror::Error;

/// Errors returned by shape operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeomError {
    /// The operation exists in the API but has no implementation yet.
    #[error("not implemented: {0}")]
    NotImplemented(&'static str),
}

/// Result type for geometry operations.
pub type Result<T> = std::result::Result<T, GeomError>;

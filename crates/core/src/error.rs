//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// The engine distinguishes exactly two failure classes: a request that is
/// structurally unusable (rejected before any matching begins), and an
/// unexpected failure inside the engine (contained at the entry point).
/// Item-level data problems (unparseable prices, empty titles) are never
/// errors; they surface only as absence from results.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The request payload failed structural validation (missing required
    /// fields, wrong types).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An unexpected failure inside the engine, contained at the request
    /// boundary.
    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

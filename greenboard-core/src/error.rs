//! Error types for GREENBOARD runs.
//!
//! Fatal errors only: a run either completes with a full structured result
//! or aborts with one of these. Per-field and per-cell problems are
//! `Diagnostic` values (see `diag`), never errors.

use thiserror::Error;

/// Fatal pipeline errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardError {
    /// The grid collection could not be obtained at all. No partial result
    /// is produced.
    #[error("grid source unavailable: {reason}")]
    SourceUnavailable { reason: String },

    /// The grid collection was obtained but is not decodable.
    #[error("grid collection in '{path}' is malformed: {reason}")]
    MalformedCollection { path: String, reason: String },
}

/// Result alias for fatal pipeline outcomes.
pub type BoardResult<T> = Result<T, BoardError>;

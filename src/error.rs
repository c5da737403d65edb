//! Error types for the sort visualizer.
//!
//! The sorting procedures themselves cannot fail on well-formed input. The
//! only runtime-checked precondition is counting sort's bounded value range;
//! the remaining variants come from the outer surfaces (configuration,
//! CLI parsing and report export).

use thiserror::Error;

/// A specialized `Result` type for visualizer operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the sort visualizer.
#[derive(Debug, Error)]
pub enum Error {
    /// Counting sort was asked to allocate a counts buffer wider than allowed.
    #[error("value range {range} exceeds the counting sort limit of {limit}")]
    RangeTooLarge { range: u64, limit: u64 },

    /// A dataset could not be parsed or violates the configured limits.
    #[error("invalid dataset: {0}")]
    InvalidDataset(String),

    /// An algorithm name did not match any known procedure.
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

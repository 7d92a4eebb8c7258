use thiserror::Error;

/// Errors surfaced by the core indexing pipeline.
///
/// Per-file and per-call failures (`ParseFailure`, `ExtractorInvariantViolation`,
/// `ResolutionFailure`) are *not* represented here — those are non-fatal and are
/// tallied in [`crate::stats::Statistics`] instead. This enum is reserved for
/// failures that abort the current unit of work (a file, a batch, a config load).
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("domain config error: {0}")]
    Config(String),

    #[error("CST adapter error: {0}")]
    Cst(String),

    #[error("extraction failed for {path}: {reason}")]
    Extraction { path: String, reason: String },

    #[error("sink error: {0}")]
    Sink(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;

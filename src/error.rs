use thiserror::Error;

/// Fatal errors for the run. Per-page and per-chunk network failures are
/// not represented here; they are logged and mapped to empty data at the
/// call site so one bad company never aborts the batch.
#[derive(Error, Debug)]
pub enum FinderError {
    #[error("missing required environment variable {0}")]
    MissingEnv(&'static str),
    #[error("invalid input line (expected `Name (URL)`): {0}")]
    InvalidLine(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize results: {0}")]
    Serialize(#[from] serde_json::Error),
}

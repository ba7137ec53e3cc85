use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ArremateError {
    #[error("text extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("document '{name}' yielded no pages")]
    EmptyDocument { name: String },

    #[error("failed to read ledger at {path}: {reason}")]
    LedgerUnreadable { path: PathBuf, reason: String },

    #[error("notices directory not found: {0}")]
    NoticesDirMissing(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

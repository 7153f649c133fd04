use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum BriefError {
    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("none of the begin patterns {patterns:?} selected a page")]
    BeginPatternNotFound { patterns: Vec<String> },

    #[error("end pattern '{pattern}' did not select a page")]
    EndPatternNotFound { pattern: String },

    #[error("invalid page range {begin}..={end} (document has {page_count} pages)")]
    InvalidPageRange {
        begin: usize,
        end: usize,
        page_count: usize,
    },

    #[error("no table detected on page {page}")]
    NoTableDetected { page: usize },

    #[error("no known column schema for a {columns}-column table: {detail}")]
    UnknownSchema { columns: usize, detail: String },

    #[error("file name '{file_name}' does not carry a 4-digit year (digits found: '{digits}')")]
    InvalidYear { file_name: String, digits: String },

    #[error("failed to load config from {path}: {reason}")]
    ConfigLoad { path: PathBuf, reason: String },

    #[error("invalid config: {0}")]
    ConfigInvalid(String),

    #[error("invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

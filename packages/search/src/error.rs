//! Error types for constitution search.
//!
//! Every stage fails as a whole: a `SearchError` means the caller gets no
//! results at all, never a shortened list.

use thiserror::Error;

/// Main error type for the search library.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The document could not be opened or one of its pages could not be read.
    #[error("Failed to load document {document}: {reason}")]
    DocumentLoadFailed { document: String, reason: String },

    /// The document loaded but nothing addressable was recognized in it.
    #[error("No {unit} were parsed from the document")]
    NoStructureParsed { unit: &'static str },

    /// Empty or whitespace-only query.
    #[error("Please enter a search term or article number")]
    InvalidQuery,

    /// Start page outside the document.
    #[error("Invalid start page {start_page}: document has {page_count} page(s)")]
    InvalidStartPage { start_page: usize, page_count: usize },

    /// Unusable configuration value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl SearchError {
    /// Build a `DocumentLoadFailed` from any displayable cause.
    pub fn load_failed(document: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::DocumentLoadFailed {
            document: document.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

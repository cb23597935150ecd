//! Configuration constants, validation and session settings.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};

/// Well-known location of the source document, relative to the working directory.
pub const DEFAULT_DOCUMENT_PATH: &str = "Constitution of the Republic of Uganda.pdf";

/// Default first page to extract (1-based).
pub const DEFAULT_START_PAGE: usize = 1;

/// First page after the table of contents in the published constitution.
///
/// Pass this as the start page to keep the contents listing, which repeats
/// every article title, out of the index.
pub const CONSTITUTION_BODY_START_PAGE: usize = 27;

/// Text wrap width for terminal output.
pub const TEXT_WRAP_WIDTH: usize = 100;

/// Web search endpoint used for the "search the web instead" fallback.
pub const WEB_SEARCH_URL: &str = "https://www.google.com/search";

/// Environment variable overriding the document path.
pub const ENV_DOCUMENT: &str = "CONSTITUTION_PDF";

/// Environment variable overriding the start page.
pub const ENV_START_PAGE: &str = "CONSTITUTION_START_PAGE";

/// Environment variable selecting the indexing strategy.
pub const ENV_STRATEGY: &str = "CONSTITUTION_STRATEGY";

/// Validate a search query, returning it trimmed.
///
/// # Examples
/// ```
/// use constitution_search::config::validate_query;
///
/// assert_eq!(validate_query("  life ").unwrap(), "life");
/// assert!(validate_query("   ").is_err());
/// ```
pub fn validate_query(query: &str) -> Result<&str> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        Err(SearchError::InvalidQuery)
    } else {
        Ok(trimmed)
    }
}

/// Validate a 1-based start page against the document's page count.
///
/// # Examples
/// ```
/// use constitution_search::config::validate_start_page;
///
/// assert!(validate_start_page(1, 10).is_ok());
/// assert!(validate_start_page(10, 10).is_ok());
/// assert!(validate_start_page(0, 10).is_err());
/// assert!(validate_start_page(11, 10).is_err());
/// ```
pub fn validate_start_page(start_page: usize, page_count: usize) -> Result<()> {
    if (1..=page_count).contains(&start_page) {
        Ok(())
    } else {
        Err(SearchError::InvalidStartPage {
            start_page,
            page_count,
        })
    }
}

/// Build a web search URL for a query, as a fallback to the local index.
///
/// # Examples
/// ```
/// use constitution_search::config::web_search_url;
///
/// assert_eq!(
///     web_search_url("21"),
///     "https://www.google.com/search?q=Ugandan%20law%20on%20article%28s%29%2021"
/// );
/// ```
pub fn web_search_url(query: &str) -> String {
    let phrase = format!("Ugandan law on article(s) {}", query.trim());
    format!("{WEB_SEARCH_URL}?q={}", urlencoding::encode(&phrase))
}

/// How the extracted text is indexed for a session.
///
/// The two strategies produce different result shapes and are never mixed
/// within one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum IndexStrategy {
    /// Numbered articles with titles and numbered clauses.
    #[default]
    Articles,

    /// Flat sentences annotated with offsets and pages.
    Sentences,
}

impl IndexStrategy {
    /// Get the configuration string for this strategy.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Articles => "articles",
            Self::Sentences => "sentences",
        }
    }
}

impl fmt::Display for IndexStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IndexStrategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "articles" | "article" => Ok(Self::Articles),
            "sentences" | "sentence" => Ok(Self::Sentences),
            other => Err(SearchError::InvalidConfig(format!(
                "unknown strategy '{other}', expected 'articles' or 'sentences'"
            ))),
        }
    }
}

/// Settings for one search session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Path to the source PDF.
    pub document: PathBuf,

    /// First page to extract (1-based).
    pub start_page: usize,

    /// Indexing strategy.
    pub strategy: IndexStrategy,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            document: PathBuf::from(DEFAULT_DOCUMENT_PATH),
            start_page: DEFAULT_START_PAGE,
            strategy: IndexStrategy::default(),
        }
    }
}

impl SearchConfig {
    /// Load settings from the process environment, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(document) = lookup(ENV_DOCUMENT).filter(|v| !v.trim().is_empty()) {
            config.document = PathBuf::from(document);
        }

        if let Some(raw) = lookup(ENV_START_PAGE) {
            config.start_page = raw.trim().parse().map_err(|_| {
                SearchError::InvalidConfig(format!("{ENV_START_PAGE} must be a page number, got '{raw}'"))
            })?;
        }

        if let Some(raw) = lookup(ENV_STRATEGY) {
            config.strategy = raw.parse()?;
        }

        Ok(config)
    }

    /// Override the document path.
    #[must_use]
    pub fn with_document(mut self, document: impl Into<PathBuf>) -> Self {
        self.document = document.into();
        self
    }

    /// Override the start page.
    #[must_use]
    pub fn with_start_page(mut self, start_page: usize) -> Self {
        self.start_page = start_page;
        self
    }

    /// Override the indexing strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: IndexStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

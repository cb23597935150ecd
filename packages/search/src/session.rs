//! A search session over one loaded document.
//!
//! Loading runs extraction and indexing once; searches borrow the session
//! immutably. Loading another document means building a new session, so a
//! search can never observe a half-replaced corpus.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::{validate_query, SearchConfig};
use crate::corpus::Corpus;
use crate::error::Result;
use crate::extract::{extract_text, DocumentSource, PdfDocument};
use crate::locator::PageLocator;
use crate::query::search;
use crate::types::MatchRecord;

/// One loaded and indexed document.
#[derive(Debug, Clone)]
pub struct Session {
    document: PathBuf,
    corpus: Corpus,
}

impl Session {
    /// Open the configured PDF, extract its text and index it.
    pub fn load(config: &SearchConfig) -> Result<Self> {
        let pdf = PdfDocument::open(&config.document)?;
        Self::from_source(&pdf, &config.document, config)
    }

    /// Build a session from any document source.
    ///
    /// `document` is the path reported in page locators.
    pub fn from_source<S>(source: &S, document: &Path, config: &SearchConfig) -> Result<Self>
    where
        S: DocumentSource + ?Sized,
    {
        let extracted = extract_text(source, config.start_page)?;
        let corpus = Corpus::build(extracted, config.strategy)?;
        info!(
            document = %document.display(),
            strategy = %config.strategy,
            units = corpus.len(),
            "session ready"
        );
        Ok(Self {
            document: document.to_path_buf(),
            corpus,
        })
    }

    /// Validate `query` and search the corpus.
    pub fn search(&self, query: &str) -> Result<Vec<MatchRecord>> {
        let query = validate_query(query)?;
        let results = search(query, &self.corpus);
        info!(query, results = results.len(), "search finished");
        Ok(results)
    }

    /// Jump-to-page locator for a match.
    #[must_use]
    pub fn locate(&self, record: &MatchRecord) -> PageLocator {
        PageLocator::new(&self.document, record.page_index())
    }

    #[must_use]
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }
}

//! The indexed corpus for one loaded document.

use tracing::info;

use crate::config::IndexStrategy;
use crate::error::{Result, SearchError};
use crate::extract::ExtractedText;
use crate::parse::{parse_articles, sentences};
use crate::types::{ArticleMap, SentenceRecord};

/// Structure recognized in the extracted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Index {
    /// Articles keyed by number.
    Articles(ArticleMap),

    /// Sentences are produced lazily from the text; only the count is kept.
    Sentences { count: usize },
}

/// Extracted text plus the index built over it with one strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    extracted: ExtractedText,
    index: Index,
}

impl Corpus {
    /// Index `extracted` with `strategy`.
    ///
    /// Fails with `NoStructureParsed` when nothing is recognized.
    pub fn build(extracted: ExtractedText, strategy: IndexStrategy) -> Result<Self> {
        let index = match strategy {
            IndexStrategy::Articles => {
                let articles = parse_articles(&extracted.text);
                if articles.is_empty() {
                    return Err(SearchError::NoStructureParsed { unit: "articles" });
                }
                Index::Articles(articles)
            }
            IndexStrategy::Sentences => {
                let count = sentences(&extracted.text).count();
                if count == 0 {
                    return Err(SearchError::NoStructureParsed { unit: "sentences" });
                }
                Index::Sentences { count }
            }
        };

        let corpus = Self { extracted, index };
        info!(
            strategy = %corpus.strategy(),
            units = corpus.len(),
            "indexed corpus"
        );
        Ok(corpus)
    }

    /// Strategy this corpus was indexed with.
    #[must_use]
    pub fn strategy(&self) -> IndexStrategy {
        match self.index {
            Index::Articles(_) => IndexStrategy::Articles,
            Index::Sentences { .. } => IndexStrategy::Sentences,
        }
    }

    /// Number of indexed units (articles or sentences).
    #[must_use]
    pub fn len(&self) -> usize {
        match &self.index {
            Index::Articles(articles) => articles.len(),
            Index::Sentences { count } => *count,
        }
    }

    /// Always false: building fails when nothing is recognized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn extracted(&self) -> &ExtractedText {
        &self.extracted
    }

    #[must_use]
    pub fn index(&self) -> &Index {
        &self.index
    }

    /// Sentences of the text with their physical pages, in document order.
    pub fn sentence_records(&self) -> impl Iterator<Item = SentenceRecord> + '_ {
        sentences(&self.extracted.text).map(|sentence| SentenceRecord {
            text: sentence.text.to_string(),
            start_offset: sentence.start_offset,
            page: self.extracted.page_index_for_offset(sentence.start_offset),
        })
    }
}

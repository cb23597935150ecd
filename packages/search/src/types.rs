//! Core data types for the constitution index.
//!
//! These types represent the addressable units recognized in the extracted
//! text (articles, clauses, sentences) and the match records produced by a
//! search.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A numbered sub-provision of an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clause {
    /// Clause text, trimmed.
    pub content: String,

    /// Byte offset of the clause marker in the extracted text.
    pub offset: usize,
}

impl Clause {
    /// Create a new clause.
    #[must_use]
    pub fn new(content: impl Into<String>, offset: usize) -> Self {
        Self {
            content: content.into(),
            offset,
        }
    }
}

/// Clauses of one article keyed by clause number, iterated in ascending order.
pub type Clauses = BTreeMap<u32, Clause>;

/// A numbered top-level provision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Article number.
    pub number: u32,

    /// Heading, trimmed. Never contains a period.
    pub title: String,

    /// Clauses scoped to this article.
    pub clauses: Clauses,

    /// Byte offset of the article header in the extracted text.
    pub offset: usize,
}

impl Article {
    /// Create an article without clauses.
    #[must_use]
    pub fn new(number: u32, title: impl Into<String>, offset: usize) -> Self {
        Self {
            number,
            title: title.into(),
            clauses: Clauses::new(),
            offset,
        }
    }

    /// Add clauses to this article.
    #[must_use]
    pub fn with_clauses(mut self, clauses: Clauses) -> Self {
        self.clauses = clauses;
        self
    }
}

/// Articles keyed by number, iterated in ascending order.
pub type ArticleMap = BTreeMap<u32, Article>;

/// A sentence located in the extracted text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceRecord {
    /// Sentence text including its terminator, trimmed.
    pub text: String,

    /// Byte offset of the first character of `text`.
    pub start_offset: usize,

    /// Zero-based physical page the sentence starts on.
    pub page: usize,
}

/// A single search result.
///
/// `page_index` is the zero-based physical page; use
/// [`PageLocator`](crate::locator::PageLocator) to present it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchRecord {
    /// Whole article: matched by number or by heading.
    Article {
        article_number: u32,
        title: String,
        clauses: Clauses,
        page_index: usize,
    },

    /// One clause whose content contains the query.
    Clause {
        article_number: u32,
        title: String,
        clause_number: u32,
        content: String,
        page_index: usize,
    },

    /// One sentence containing the query.
    Sentence {
        sentence: String,
        offset: usize,
        page_index: usize,
    },
}

impl MatchRecord {
    /// Zero-based physical page this match was extracted from.
    #[must_use]
    pub fn page_index(&self) -> usize {
        match self {
            Self::Article { page_index, .. }
            | Self::Clause { page_index, .. }
            | Self::Sentence { page_index, .. } => *page_index,
        }
    }

    /// Article number, if this is an article or clause match.
    #[must_use]
    pub fn article_number(&self) -> Option<u32> {
        match self {
            Self::Article { article_number, .. } | Self::Clause { article_number, .. } => {
                Some(*article_number)
            }
            Self::Sentence { .. } => None,
        }
    }

    /// Clause number, if this is a clause match.
    #[must_use]
    pub fn clause_number(&self) -> Option<u32> {
        match self {
            Self::Clause { clause_number, .. } => Some(*clause_number),
            _ => None,
        }
    }

    /// Whether this record covers a whole article.
    #[must_use]
    pub fn is_article(&self) -> bool {
        matches!(self, Self::Article { .. })
    }
}

impl From<SentenceRecord> for MatchRecord {
    fn from(sentence: SentenceRecord) -> Self {
        Self::Sentence {
            sentence: sentence.text,
            offset: sentence.start_offset,
            page_index: sentence.page,
        }
    }
}

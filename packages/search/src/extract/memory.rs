//! In-memory document source.

use std::collections::BTreeSet;

use super::DocumentSource;
use crate::error::{Result, SearchError};

/// A document whose pages are already available as text fragments.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    name: String,
    pages: Vec<Vec<String>>,
    unreadable: BTreeSet<usize>,
}

impl MemoryDocument {
    /// Create an empty document.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Create a document with one single-fragment page per entry.
    #[must_use]
    pub fn from_pages(name: impl Into<String>, pages: impl IntoIterator<Item = impl Into<String>>) -> Self {
        pages
            .into_iter()
            .fold(Self::new(name), |doc, page| doc.with_page([page]))
    }

    /// Append a page made of the given fragments.
    #[must_use]
    pub fn with_page(mut self, fragments: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.pages
            .push(fragments.into_iter().map(Into::into).collect());
        self
    }

    /// Make reading `page` (1-based) fail, as a damaged page would.
    #[must_use]
    pub fn with_unreadable_page(mut self, page: usize) -> Self {
        self.unreadable.insert(page);
        self
    }
}

impl DocumentSource for MemoryDocument {
    fn name(&self) -> &str {
        &self.name
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_fragments(&self, page: usize) -> Result<Vec<String>> {
        if self.unreadable.contains(&page) {
            return Err(SearchError::load_failed(
                &self.name,
                format!("page {page} could not be read"),
            ));
        }

        page.checked_sub(1)
            .and_then(|index| self.pages.get(index))
            .cloned()
            .ok_or_else(|| SearchError::load_failed(&self.name, format!("no page {page}")))
    }
}

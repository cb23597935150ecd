//! Jump-to-page locators.
//!
//! Pages are zero-based everywhere inside the crate. `PageLocator` is the one
//! place they become the one-based page numbers a viewer expects.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use url::Url;

use crate::error::{Result, SearchError};

/// Enough information for a PDF viewer to open the document at a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLocator {
    /// Path of the source document.
    pub document: PathBuf,

    /// One-based page number.
    pub page: usize,

    /// Optional term for the viewer to search for on open.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
}

impl PageLocator {
    /// Locator for a zero-based page index.
    #[must_use]
    pub fn new(document: impl Into<PathBuf>, page_index: usize) -> Self {
        Self {
            document: document.into(),
            page: page_index + 1,
            term: None,
        }
    }

    /// Locator for a one-based page number as typed by a user.
    pub fn from_page_number(document: impl Into<PathBuf>, page: usize) -> Result<Self> {
        let page_index = page
            .checked_sub(1)
            .ok_or_else(|| SearchError::InvalidConfig("page numbers start at 1".to_string()))?;
        Ok(Self::new(document, page_index))
    }

    /// Attach a search term.
    #[must_use]
    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        self.term = (!term.trim().is_empty()).then_some(term);
        self
    }

    /// Zero-based page index.
    #[must_use]
    pub fn page_index(&self) -> usize {
        self.page - 1
    }

    /// `file://` URL with PDF open parameters (`#page=N`, optional `search=`).
    pub fn to_url(&self) -> Result<Url> {
        let absolute = std::path::absolute(&self.document)?;
        let mut url = Url::from_file_path(&absolute).map_err(|()| {
            SearchError::InvalidConfig(format!(
                "cannot build a file URL for {}",
                absolute.display()
            ))
        })?;

        let mut fragment = format!("page={}", self.page);
        if let Some(term) = &self.term {
            fragment.push_str("&search=");
            fragment.push_str(&urlencoding::encode(term));
        }
        url.set_fragment(Some(&fragment));
        Ok(url)
    }
}

impl fmt::Display for PageLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#page={}", self.document.display(), self.page)
    }
}

//! Text extraction: turn per-page text fragments into one buffer plus a
//! page offset table.
//!
//! Pages are joined in page order. Fragments within a page are joined with a
//! single space and every page is followed by a newline, so each page
//! occupies at least one byte and the offset table is strictly increasing.

mod memory;
mod pdf;

use std::ops::Range;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::validate_start_page;
use crate::error::{Result, SearchError};

pub use memory::MemoryDocument;
pub use pdf::PdfDocument;

/// A paged document that can hand out the text fragments of each page.
pub trait DocumentSource {
    /// Human-readable name used in error messages.
    fn name(&self) -> &str;

    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Text fragments of a page (1-based), in the order the source returns them.
    ///
    /// Implementations fail with `SearchError::DocumentLoadFailed`.
    fn page_fragments(&self, page: usize) -> Result<Vec<String>>;
}

/// Start offsets of every extracted page plus the end-of-text sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageOffsets(Vec<usize>);

impl PageOffsets {
    /// Offsets as a slice; `offsets[0] == 0` and the last entry is the text length.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Number of extracted pages.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Byte range of page `index` (zero-based, relative to the first extracted page).
    #[must_use]
    pub fn page_range(&self, index: usize) -> Option<Range<usize>> {
        Some(*self.0.get(index)?..*self.0.get(index + 1)?)
    }

    /// Index of the extracted page whose text window contains `offset`.
    ///
    /// This is one less than the first index whose start exceeds `offset`,
    /// clamped to the extracted pages. An offset equal to a page start maps
    /// to that page.
    #[must_use]
    pub fn page_for_offset(&self, offset: usize) -> usize {
        let index = self.0.partition_point(|&start| start <= offset).saturating_sub(1);
        index.min(self.page_count().saturating_sub(1))
    }
}

/// Output of one extraction pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    /// Concatenated text of all extracted pages.
    pub text: String,

    /// Where each extracted page begins in `text`.
    pub offsets: PageOffsets,

    /// Physical page (1-based) of the first extracted page.
    pub first_page: usize,
}

impl ExtractedText {
    /// Zero-based physical page index containing `offset`.
    ///
    /// Accounts for pages skipped before `first_page`.
    #[must_use]
    pub fn page_index_for_offset(&self, offset: usize) -> usize {
        self.first_page.saturating_sub(1) + self.offsets.page_for_offset(offset)
    }

    /// Text of one physical page (zero-based), if it was extracted.
    #[must_use]
    pub fn page_text(&self, page_index: usize) -> Option<&str> {
        let relative = page_index.checked_sub(self.first_page.saturating_sub(1))?;
        let range = self.offsets.page_range(relative)?;
        self.text.get(range)
    }
}

/// Extract the text of `source` from `start_page` (1-based) to the last page.
///
/// Fails atomically: any unreadable page aborts the whole pass and no partial
/// buffer is returned.
pub fn extract_text<S>(source: &S, start_page: usize) -> Result<ExtractedText>
where
    S: DocumentSource + ?Sized,
{
    let page_count = source.page_count();
    if page_count == 0 {
        return Err(SearchError::load_failed(source.name(), "document has no pages"));
    }
    validate_start_page(start_page, page_count)?;

    let mut text = String::new();
    let mut offsets = Vec::with_capacity(page_count - start_page + 2);
    offsets.push(0);

    for page in start_page..=page_count {
        let fragments = source.page_fragments(page)?;
        debug!(page, fragments = fragments.len(), "extracted page");

        text.push_str(&fragments.join(" "));
        text.push('\n');
        offsets.push(text.len());
    }

    info!(
        document = source.name(),
        pages = offsets.len() - 1,
        bytes = text.len(),
        "extracted document text"
    );

    Ok(ExtractedText {
        text,
        offsets: PageOffsets(offsets),
        first_page: start_page,
    })
}

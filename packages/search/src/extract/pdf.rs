//! PDF document source backed by lopdf.
//!
//! A page's fragments are the strings shown by the text operators of its
//! content stream, in stream order, decoded with the encoding of the font
//! selected by the preceding `Tf`.

use std::collections::BTreeMap;
use std::path::Path;

use lopdf::content::Content;
use lopdf::{Document, Object, ObjectId};
use tracing::debug;

use super::DocumentSource;
use crate::error::{Result, SearchError};

/// Kerning adjustments in a `TJ` array below this are treated as word gaps.
const WORD_GAP_THRESHOLD: f32 = -100.0;

/// Composite font encoding lopdf does not decode.
const IDENTITY_H: &str = "Identity-H";

/// A PDF loaded into memory.
pub struct PdfDocument {
    name: String,
    document: Document,
    pages: Vec<ObjectId>,
}

impl PdfDocument {
    /// Open a PDF file.
    pub fn open(path: &Path) -> Result<Self> {
        let name = path.display().to_string();
        let document = Document::load(path).map_err(|e| SearchError::load_failed(&name, e))?;
        Ok(Self::from_document(name, document))
    }

    /// Load a PDF from bytes.
    pub fn from_bytes(name: impl Into<String>, bytes: &[u8]) -> Result<Self> {
        let name = name.into();
        let document = Document::load_mem(bytes).map_err(|e| SearchError::load_failed(&name, e))?;
        Ok(Self::from_document(name, document))
    }

    fn from_document(name: String, document: Document) -> Self {
        // get_pages is keyed by page number, so values come out in page order
        let pages: Vec<ObjectId> = document.get_pages().into_values().collect();
        debug!(document = %name, pages = pages.len(), "opened PDF");
        Self {
            name,
            document,
            pages,
        }
    }
}

impl DocumentSource for PdfDocument {
    fn name(&self) -> &str {
        &self.name
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_fragments(&self, page: usize) -> Result<Vec<String>> {
        let page_id = *page
            .checked_sub(1)
            .and_then(|index| self.pages.get(index))
            .ok_or_else(|| SearchError::load_failed(&self.name, format!("no page {page}")))?;

        let encodings: BTreeMap<Vec<u8>, &str> = self
            .document
            .get_page_fonts(page_id)
            .into_iter()
            .map(|(name, font)| (name, font.get_font_encoding()))
            .collect();

        let content = self
            .document
            .get_page_content(page_id)
            .map_err(|e| SearchError::load_failed(&self.name, format!("page {page}: {e}")))?;
        let content = Content::decode(&content)
            .map_err(|e| SearchError::load_failed(&self.name, format!("page {page}: {e}")))?;

        let mut encoding = None;
        let mut fragments = Vec::new();
        for op in &content.operations {
            let fragment = match op.operator.as_str() {
                "Tf" => {
                    encoding = op
                        .operands
                        .first()
                        .and_then(|operand| operand.as_name().ok())
                        .and_then(|font| encodings.get(font).copied());
                    None
                }
                "Tj" | "'" | "\"" => op
                    .operands
                    .last()
                    .and_then(|operand| string_operand(operand, encoding)),
                "TJ" => op
                    .operands
                    .first()
                    .and_then(|operand| array_operand(operand, encoding)),
                _ => None,
            };
            fragments.extend(fragment.filter(|fragment| !fragment.is_empty()));
        }

        Ok(fragments)
    }
}

/// Decode a shown string with the encoding of the current font.
///
/// Simple font encodings go through lopdf. Text shown without a resolvable
/// font, or with an `Identity-H` font that lopdf cannot map, falls back to
/// [`decode_pdf_string`].
fn decode_shown(encoding: Option<&str>, bytes: &[u8]) -> String {
    match encoding {
        // TODO: map Identity-H glyph IDs through the font's ToUnicode CMap
        None | Some(IDENTITY_H) => decode_pdf_string(bytes),
        Some(encoding) => Document::decode_text(Some(encoding), bytes),
    }
}

/// Decode a PDF string object without font information.
///
/// Tries UTF-16BE (with byte order mark), then UTF-8, then falls back to
/// Latin-1, which never fails.
fn decode_pdf_string(bytes: &[u8]) -> String {
    if let Some(body) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let units: Vec<u16> = body
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        if let Ok(text) = String::from_utf16(&units) {
            return text;
        }
    }

    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => bytes.iter().map(|&b| char::from(b)).collect(),
    }
}

fn string_operand(operand: &Object, encoding: Option<&str>) -> Option<String> {
    match operand {
        Object::String(bytes, _) => Some(decode_shown(encoding, bytes)),
        _ => None,
    }
}

fn array_operand(operand: &Object, encoding: Option<&str>) -> Option<String> {
    let Object::Array(items) = operand else {
        return None;
    };

    let mut text = String::new();
    for item in items {
        match item {
            Object::String(bytes, _) => text.push_str(&decode_shown(encoding, bytes)),
            Object::Integer(n) if (*n as f32) < WORD_GAP_THRESHOLD => text.push(' '),
            Object::Real(n) if *n < WORD_GAP_THRESHOLD => text.push(' '),
            _ => {}
        }
    }
    Some(text)
}

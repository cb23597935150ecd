//! Query highlighting.
//!
//! The pattern is always built from the escaped query, so regex
//! metacharacters in user input are matched literally. Query and text are
//! both NFC-normalized first, as the query engine does when matching.

use regex::{Regex, RegexBuilder};
use unicode_normalization::UnicodeNormalization;

use crate::error::{Result, SearchError};

/// Marks every case-insensitive occurrence of a query in a text.
#[derive(Debug, Clone)]
pub struct Highlighter {
    pattern: Regex,
}

impl Highlighter {
    /// Build a highlighter for `query`.
    pub fn new(query: &str) -> Result<Self> {
        let query: String = query.trim().nfc().collect();
        if query.is_empty() {
            return Err(SearchError::InvalidQuery);
        }

        let pattern = RegexBuilder::new(&regex::escape(&query))
            .case_insensitive(true)
            .build()
            .map_err(|_| SearchError::InvalidQuery)?;
        Ok(Self { pattern })
    }

    /// Rewrite every occurrence of the query in `text` with `mark`.
    ///
    /// The returned text is NFC-normalized.
    pub fn highlight(&self, text: &str, mark: impl Fn(&str) -> String) -> String {
        let text: String = text.nfc().collect();
        self.pattern
            .replace_all(&text, |caps: &regex::Captures<'_>| mark(&caps[0]))
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strong(text: &str) -> String {
        format!("**{text}**")
    }

    #[test]
    fn test_highlight_case_insensitive() {
        let highlighter = Highlighter::new("life").unwrap();
        assert_eq!(
            highlighter.highlight("Life and LIFE and life", strong),
            "**Life** and **LIFE** and **life**"
        );
    }

    #[test]
    fn test_highlight_escapes_metacharacters() {
        let highlighter = Highlighter::new("(a).*").unwrap();
        assert_eq!(
            highlighter.highlight("clause (a).* and (a)xyz", strong),
            "clause **(a).*** and (a)xyz"
        );
        assert_eq!(highlighter.highlight("anything at all", strong), "anything at all");
    }

    #[test]
    fn test_highlight_keeps_replacement_syntax_literal() {
        let highlighter = Highlighter::new("$1").unwrap();
        assert_eq!(highlighter.highlight("costs $1 only", strong), "costs **$1** only");
    }

    #[test]
    fn test_highlight_decomposed_query_in_composed_text() {
        let highlighter = Highlighter::new("cafe\u{0301}").unwrap();
        assert_eq!(
            highlighter.highlight("Caf\u{00E9} rules", strong),
            "**Caf\u{00E9}** rules"
        );
    }

    #[test]
    fn test_highlight_composed_query_in_decomposed_text() {
        let highlighter = Highlighter::new("caf\u{00E9}").unwrap();
        assert_eq!(
            highlighter.highlight("CAFE\u{0301} rules", strong),
            "**CAF\u{00C9}** rules"
        );
    }

    #[test]
    fn test_blank_query_rejected() {
        assert!(matches!(Highlighter::new("  "), Err(SearchError::InvalidQuery)));
    }
}

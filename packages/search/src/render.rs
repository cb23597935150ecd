//! Plain-text presentation of match records.

use console::style;
use textwrap::{fill, Options};

use crate::config::TEXT_WRAP_WIDTH;
use crate::highlight::Highlighter;
use crate::locator::PageLocator;
use crate::types::MatchRecord;

/// Message shown for an empty result list.
pub const NO_RESULTS: &str = "No results found.";

/// Renders match records for a terminal.
#[derive(Debug, Clone)]
pub struct Renderer {
    highlighter: Highlighter,
    width: usize,
    styled: bool,
}

impl Renderer {
    /// Create a renderer highlighting `highlighter`'s query, with terminal styling.
    #[must_use]
    pub fn new(highlighter: Highlighter) -> Self {
        Self {
            highlighter,
            width: TEXT_WRAP_WIDTH,
            styled: true,
        }
    }

    /// Enable or disable ANSI styling. Unstyled output marks matches as `**match**`.
    #[must_use]
    pub fn with_styling(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    /// Set the wrap width.
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Render a result list, each record followed by its locator.
    pub fn render_all<'a>(
        &self,
        records: impl IntoIterator<Item = (&'a MatchRecord, PageLocator)>,
    ) -> String {
        let blocks: Vec<String> = records
            .into_iter()
            .map(|(record, locator)| self.render(record, &locator))
            .collect();

        if blocks.is_empty() {
            NO_RESULTS.to_string()
        } else {
            blocks.join("\n\n")
        }
    }

    /// Render one record.
    #[must_use]
    pub fn render(&self, record: &MatchRecord, locator: &PageLocator) -> String {
        let mut lines = Vec::new();

        match record {
            MatchRecord::Article {
                article_number,
                title,
                clauses,
                ..
            } => {
                lines.push(self.heading(*article_number, title));
                for (number, clause) in clauses {
                    lines.push(self.wrap(&format!("({number}) {}", clause.content)));
                }
            }
            MatchRecord::Clause {
                article_number,
                title,
                clause_number,
                content,
                ..
            } => {
                lines.push(self.heading(*article_number, title));
                let content = self.mark(content);
                lines.push(self.wrap(&format!("({clause_number}) {content}")));
            }
            MatchRecord::Sentence { sentence, .. } => {
                lines.push(self.wrap(&format!("Page {}: {}", locator.page, self.mark(sentence))));
            }
        }

        lines.push(self.dim(&format!("  {locator}")));
        lines.join("\n")
    }

    fn heading(&self, number: u32, title: &str) -> String {
        let heading = format!("Article {number}: {}", self.mark(title));
        if self.styled {
            style(heading).bold().to_string()
        } else {
            heading
        }
    }

    fn mark(&self, text: &str) -> String {
        if self.styled {
            self.highlighter
                .highlight(text, |m| style(m).yellow().bold().to_string())
        } else {
            self.highlighter.highlight(text, |m| format!("**{m}**"))
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.styled {
            style(text).dim().to_string()
        } else {
            text.to_string()
        }
    }

    fn wrap(&self, text: &str) -> String {
        fill(text, Options::new(self.width).subsequent_indent("    "))
    }
}

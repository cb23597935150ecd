//! Sentence splitting.
//!
//! A sentence is a run of characters other than `.`, `!` and `?` followed by
//! exactly one of them. There is no abbreviation handling: "Govt. of Uganda."
//! is two sentences.

const TERMINATORS: [char; 3] = ['.', '!', '?'];

/// A sentence borrowed from the extracted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence<'a> {
    /// Sentence text including its terminator, trimmed.
    pub text: &'a str,

    /// Byte offset of the first character of `text`.
    pub start_offset: usize,
}

/// Lazy iterator over the sentences of a text, in document order.
#[derive(Debug, Clone)]
pub struct Sentences<'a> {
    text: &'a str,
    pos: usize,
}

/// Split `text` into sentences lazily.
#[must_use]
pub fn sentences(text: &str) -> Sentences<'_> {
    Sentences { text, pos: 0 }
}

impl<'a> Iterator for Sentences<'a> {
    type Item = Sentence<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let rest = &self.text[self.pos..];
            let Some(terminator) = rest.find(TERMINATORS) else {
                // Trailing text without a terminator is not a sentence.
                self.pos = self.text.len();
                return None;
            };

            let run = &rest[..terminator];
            let run_start = self.pos;
            self.pos += terminator + 1;

            let body = run.trim_start();
            if body.trim_end().is_empty() {
                continue;
            }

            let start_offset = run_start + (run.len() - body.len());
            return Some(Sentence {
                text: &self.text[start_offset..self.pos],
                start_offset,
            });
        }
    }
}

//! Structural parsing of extracted text.
//!
//! Two mutually exclusive indexing strategies are available:
//!
//! - [`parse_articles`]: numbered articles with titles and numbered clauses
//! - [`sentences`]: flat sentences with their byte offsets

mod articles;
mod sentences;

pub use articles::parse_articles;
pub use sentences::{sentences, Sentence, Sentences};

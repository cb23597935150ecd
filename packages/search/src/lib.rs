//! Constitution Search - find articles, clauses and sentences in the
//! Constitution of the Republic of Uganda.
//!
//! The text of the PDF is extracted once per session, indexed either as
//! numbered articles with clauses or as flat sentences, and searched by
//! article number or literal, case-insensitive text. Every match carries the
//! page it came from so a viewer can jump to it.
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//!
//! use constitution_search::extract::MemoryDocument;
//! use constitution_search::{SearchConfig, Session};
//!
//! let document = MemoryDocument::from_pages(
//!     "constitution",
//!     ["5. Right to Life. (1) Everyone has a right to life."],
//! );
//! let session =
//!     Session::from_source(&document, Path::new("constitution.pdf"), &SearchConfig::default())
//!         .unwrap();
//!
//! let results = session.search("5").unwrap();
//! assert_eq!(results.len(), 1);
//! assert_eq!(session.locate(&results[0]).page, 1);
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Constants, validation and session settings
//! - [`error`]: Error types and Result alias
//! - [`extract`]: Document sources and text extraction with page offsets
//! - [`parse`]: Article/clause and sentence recognition
//! - [`corpus`]: Extracted text plus the index built over it
//! - [`query`]: Query engine
//! - [`highlight`]: Literal query highlighting
//! - [`locator`]: Jump-to-page locators
//! - [`render`]: Terminal rendering of results
//! - [`session`]: One loaded document
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod corpus;
pub mod error;
pub mod extract;
pub mod highlight;
pub mod locator;
pub mod parse;
pub mod query;
pub mod render;
pub mod session;
pub mod types;

// Re-export main entry points
pub use query::search;
pub use session::Session;

// Re-export commonly used items
pub use config::{validate_query, IndexStrategy, SearchConfig};
pub use corpus::Corpus;
pub use error::{Result, SearchError};
pub use locator::PageLocator;
pub use types::{Article, ArticleMap, Clause, MatchRecord, SentenceRecord};

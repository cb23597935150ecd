//! Query engine.
//!
//! Results come back in document order: ascending article number, then
//! ascending clause number, or ascending sentence offset. There is no
//! relevance scoring.

use unicode_normalization::UnicodeNormalization;

use crate::corpus::{Corpus, Index};
use crate::extract::ExtractedText;
use crate::types::{ArticleMap, MatchRecord};

/// Search `corpus` for `query`.
///
/// The query is expected to be validated (non-blank) by the caller; see
/// [`validate_query`](crate::config::validate_query).
pub fn search(query: &str, corpus: &Corpus) -> Vec<MatchRecord> {
    match corpus.index() {
        Index::Articles(articles) => search_articles(query, articles, corpus.extracted()),
        Index::Sentences { .. } => search_sentences(query, corpus),
    }
}

/// Search articles by number, heading or clause text.
///
/// A query that is exactly an existing article number returns that one
/// article and nothing else. Any other query is a case-insensitive substring
/// match: an article-level match for each matching heading, and a
/// clause-level match for each matching clause.
pub fn search_articles(
    query: &str,
    articles: &ArticleMap,
    extracted: &ExtractedText,
) -> Vec<MatchRecord> {
    if let Some(article) = query
        .trim()
        .parse::<u32>()
        .ok()
        .and_then(|number| articles.get(&number))
    {
        return vec![MatchRecord::Article {
            article_number: article.number,
            title: article.title.clone(),
            clauses: article.clauses.clone(),
            page_index: extracted.page_index_for_offset(article.offset),
        }];
    }

    let needle = Needle::new(query);
    let mut results = Vec::new();

    for article in articles.values() {
        if needle.found_in(&article.title) {
            results.push(MatchRecord::Article {
                article_number: article.number,
                title: article.title.clone(),
                clauses: article.clauses.clone(),
                page_index: extracted.page_index_for_offset(article.offset),
            });
        }

        for (number, clause) in &article.clauses {
            if needle.found_in(&clause.content) {
                results.push(MatchRecord::Clause {
                    article_number: article.number,
                    title: article.title.clone(),
                    clause_number: *number,
                    content: clause.content.clone(),
                    page_index: extracted.page_index_for_offset(clause.offset),
                });
            }
        }
    }

    results
}

fn search_sentences(query: &str, corpus: &Corpus) -> Vec<MatchRecord> {
    let needle = Needle::new(query);
    corpus
        .sentence_records()
        .filter(|sentence| needle.found_in(&sentence.text))
        .map(MatchRecord::from)
        .collect()
}

/// Fold text for case-insensitive comparison.
#[must_use]
pub fn fold_case(text: &str) -> String {
    text.nfc().collect::<String>().to_lowercase()
}

/// A query prepared for literal, case-insensitive substring tests.
struct Needle(String);

impl Needle {
    fn new(query: &str) -> Self {
        Self(fold_case(query))
    }

    fn found_in(&self, haystack: &str) -> bool {
        fold_case(haystack).contains(&self.0)
    }
}

//! Article and clause recognition.
//!
//! An article header is `<number>. <title>.` followed by a clause marker
//! `(<number>)`. The title runs to the first period, so a heading that
//! contains an abbreviation such as "Govt." is cut short or, when no clause
//! marker follows the cut, not recognized at all. An article's body runs from
//! its first clause marker to the next header; inside it each clause runs
//! from `(<number>)` plus whitespace to the next marker.
//!
//! Scanning is a forward state machine over byte positions, so the work per
//! candidate header is bounded by the distance to the next period.

use std::ops::Range;

use tracing::{debug, info, warn};

use crate::types::{Article, ArticleMap, Clause, Clauses};

/// A recognized article header.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Header {
    number: u32,
    title: Range<usize>,
    start: usize,
    body_start: usize,
}

/// Header scanner states.
#[derive(Debug)]
enum HeaderState {
    /// Looking for `<digits>.<whitespace>` at a token boundary.
    SeekingArticleNumber,

    /// Title runs from `title_start` to the first period.
    ReadingTitle {
        number: u32,
        start: usize,
        title_start: usize,
    },

    /// After the title's period: optional whitespace, then `(<digits>)`.
    ExpectingFirstClause {
        number: u32,
        start: usize,
        title: Range<usize>,
    },
}

/// Clause scanner states.
#[derive(Debug)]
enum ClauseState {
    /// Looking for `(<digits>)<whitespace>`.
    ReadingClauses,

    /// Content runs from `content_start` to the next marker or the body end.
    ReadingClauseBody {
        number: u32,
        marker_start: usize,
        content_start: usize,
    },
}

/// Parse every article in `text`, keyed by article number.
///
/// A repeated article number keeps the later occurrence. Articles whose body
/// holds no usable clause block are kept with no clauses.
pub fn parse_articles(text: &str) -> ArticleMap {
    let headers = scan_headers(text);
    let mut articles = ArticleMap::new();

    for (i, header) in headers.iter().enumerate() {
        let body_end = headers.get(i + 1).map_or(text.len(), |next| next.start);
        let clauses = scan_clauses(text, header.body_start..body_end);
        let title = text[header.title.clone()].trim();

        debug!(
            number = header.number,
            title,
            clauses = clauses.len(),
            "parsed article"
        );

        let article = Article::new(header.number, title, header.start).with_clauses(clauses);
        if let Some(previous) = articles.insert(header.number, article) {
            warn!(
                number = header.number,
                previous_offset = previous.offset,
                offset = header.start,
                "article number repeated, keeping the later one"
            );
        }
    }

    info!(articles = articles.len(), "parsed articles");
    articles
}

fn scan_headers(text: &str) -> Vec<Header> {
    let bytes = text.as_bytes();
    let mut headers = Vec::new();
    let mut state = HeaderState::SeekingArticleNumber;
    let mut pos = 0;

    loop {
        state = match state {
            HeaderState::SeekingArticleNumber => {
                let Some(start) = next_number_candidate(text, pos) else {
                    break;
                };
                let digits_end = digits_end(bytes, start);
                pos = digits_end;

                match parse_number(&text[start..digits_end]) {
                    Some(number)
                        if bytes.get(digits_end) == Some(&b'.')
                            && starts_with_whitespace(&text[digits_end + 1..]) =>
                    {
                        HeaderState::ReadingTitle {
                            number,
                            start,
                            title_start: skip_whitespace(text, digits_end + 1),
                        }
                    }
                    _ => HeaderState::SeekingArticleNumber,
                }
            }

            HeaderState::ReadingTitle {
                number,
                start,
                title_start,
            } => match text[title_start..].find('.') {
                Some(len) if !text[title_start..title_start + len].trim().is_empty() => {
                    pos = title_start + len + 1;
                    HeaderState::ExpectingFirstClause {
                        number,
                        start,
                        title: title_start..title_start + len,
                    }
                }
                _ => {
                    pos = start + 1;
                    HeaderState::SeekingArticleNumber
                }
            },

            HeaderState::ExpectingFirstClause {
                number,
                start,
                title,
            } => {
                let marker_start = skip_whitespace(text, pos);
                if clause_marker_at(bytes, marker_start, bytes.len()).is_some() {
                    headers.push(Header {
                        number,
                        title,
                        start,
                        body_start: marker_start,
                    });
                    pos = marker_start;
                } else {
                    pos = start + 1;
                }
                HeaderState::SeekingArticleNumber
            }
        };
    }

    headers
}

fn scan_clauses(text: &str, body: Range<usize>) -> Clauses {
    let mut clauses = Clauses::new();
    let mut state = ClauseState::ReadingClauses;
    let mut pos = body.start;

    loop {
        state = match state {
            ClauseState::ReadingClauses => {
                let Some((marker_start, number, marker_end)) = next_marker(text, pos, body.end)
                else {
                    break;
                };
                pos = marker_end;

                if marker_end < body.end && starts_with_whitespace(&text[marker_end..body.end]) {
                    ClauseState::ReadingClauseBody {
                        number,
                        marker_start,
                        content_start: marker_end,
                    }
                } else {
                    ClauseState::ReadingClauses
                }
            }

            ClauseState::ReadingClauseBody {
                number,
                marker_start,
                content_start,
            } => {
                let content_end = next_marker(text, content_start, body.end)
                    .map_or(body.end, |(next_start, _, _)| next_start);
                let content = text[content_start..content_end].trim();
                if !content.is_empty()
                    && clauses
                        .insert(number, Clause::new(content, marker_start))
                        .is_some()
                {
                    warn!(
                        number,
                        offset = marker_start,
                        "clause number repeated, keeping the later one"
                    );
                }
                pos = content_end;
                ClauseState::ReadingClauses
            }
        };
    }

    clauses
}

/// Next ASCII digit at or after `from` that is not preceded by an alphanumeric.
fn next_number_candidate(text: &str, from: usize) -> Option<usize> {
    let mut prev = text[..from].chars().next_back();
    for (i, c) in text[from..].char_indices() {
        if c.is_ascii_digit() && !prev.is_some_and(char::is_alphanumeric) {
            return Some(from + i);
        }
        prev = Some(c);
    }
    None
}

/// Next `(<digits>)` marker in `text[from..end]`: `(start, number, end)`.
fn next_marker(text: &str, from: usize, end: usize) -> Option<(usize, u32, usize)> {
    let bytes = text.as_bytes();
    text[from..end]
        .match_indices('(')
        .find_map(|(i, _)| {
            let start = from + i;
            clause_marker_at(bytes, start, end).map(|(number, marker_end)| (start, number, marker_end))
        })
}

/// `(<digits>)` starting exactly at `start`: `(number, end)`.
fn clause_marker_at(bytes: &[u8], start: usize, end: usize) -> Option<(u32, usize)> {
    if bytes.get(start) != Some(&b'(') {
        return None;
    }
    let digits_start = start + 1;
    let digits_end = digits_end(bytes, digits_start);
    if digits_end >= end || bytes[digits_end] != b')' {
        return None;
    }
    let digits = std::str::from_utf8(&bytes[digits_start..digits_end]).ok()?;
    let number = parse_number(digits)?;
    Some((number, digits_end + 1))
}

fn digits_end(bytes: &[u8], start: usize) -> usize {
    start
        + bytes[start.min(bytes.len())..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
}

/// Positive number from a run of ASCII digits.
fn parse_number(digits: &str) -> Option<u32> {
    digits.parse::<u32>().ok().filter(|&n| n > 0)
}

fn starts_with_whitespace(text: &str) -> bool {
    text.chars().next().is_some_and(char::is_whitespace)
}

fn skip_whitespace(text: &str, from: usize) -> usize {
    let rest = &text[from..];
    from + (rest.len() - rest.trim_start().len())
}

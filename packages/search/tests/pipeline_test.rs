//! End-to-end tests: PDF on disk to match records and locators.

mod common;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use constitution_search::extract::{extract_text, DocumentSource, PdfDocument};
use constitution_search::{IndexStrategy, MatchRecord, SearchConfig, SearchError, Session};

use common::{build_encoded_pdf, write_pdf, CONSTITUTION_PAGES};

fn config_for(dir: &TempDir) -> SearchConfig {
    let path = write_pdf(dir.path(), "constitution.pdf", CONSTITUTION_PAGES);
    SearchConfig::default().with_document(path)
}

#[test]
fn test_pdf_fragments_are_read_in_order() {
    let dir = TempDir::new().unwrap();
    let path = write_pdf(dir.path(), "constitution.pdf", CONSTITUTION_PAGES);

    let pdf = PdfDocument::open(&path).unwrap();
    assert_eq!(pdf.page_count(), 3);
    assert_eq!(
        pdf.page_fragments(2).unwrap(),
        vec![
            "5. Right to Life.".to_string(),
            "(1) Everyone has a right to life.".to_string(),
            "(2) No one shall be deprived of life intentionally.".to_string(),
        ]
    );
}

#[test]
fn test_pdf_extraction_offsets() {
    let dir = TempDir::new().unwrap();
    let path = write_pdf(dir.path(), "constitution.pdf", CONSTITUTION_PAGES);
    let pdf = PdfDocument::open(&path).unwrap();

    let extracted = extract_text(&pdf, 1).unwrap();
    let offsets = extracted.offsets.as_slice();
    assert_eq!(offsets.len(), 4);
    assert_eq!(offsets[0], 0);
    assert!(offsets.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(offsets[3], extracted.text.len());
    assert!(extracted.text.starts_with("CONTENTS 5. Right to Life. 6. Equality.\n"));
}

#[test]
fn test_win_ansi_text_is_decoded_through_font_encoding() {
    let pages = vec![vec![
        b"1. Sovereignty of the people.".as_slice(),
        b"(1) All power belongs to Uganda\x92s people \x96 who exercise it.".as_slice(),
    ]];
    let pdf = PdfDocument::from_bytes(
        "constitution.pdf",
        &build_encoded_pdf(&pages, Some("WinAnsiEncoding")),
    )
    .unwrap();

    assert_eq!(
        pdf.page_fragments(1).unwrap(),
        vec![
            "1. Sovereignty of the people.".to_string(),
            "(1) All power belongs to Uganda\u{2019}s people \u{2013} who exercise it.".to_string(),
        ]
    );

    let session = Session::from_source(
        &pdf,
        std::path::Path::new("constitution.pdf"),
        &SearchConfig::default(),
    )
    .unwrap();
    let results = session.search("Uganda\u{2019}s").unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].clause_number(), Some(1));
}

#[test]
fn test_unresolved_font_falls_back_to_byte_decoding() {
    let pages = vec![vec!["5. Right to Life.".as_bytes(), "(1) Caf\u{e9} rules.".as_bytes()]];
    let pdf = PdfDocument::from_bytes("constitution.pdf", &build_encoded_pdf(&pages, None)).unwrap();

    assert_eq!(
        pdf.page_fragments(1).unwrap(),
        vec!["5. Right to Life.".to_string(), "(1) Caf\u{e9} rules.".to_string()]
    );
}

#[test]
fn test_article_lookup_from_pdf() {
    let dir = TempDir::new().unwrap();
    let session = Session::load(&config_for(&dir)).unwrap();

    let results = session.search("5").unwrap();
    assert_eq!(results.len(), 1);
    let MatchRecord::Article { title, clauses, .. } = &results[0] else {
        panic!("expected article match, got {:?}", results[0]);
    };
    assert_eq!(title, "Right to Life");
    assert_eq!(clauses[&2].content, "No one shall be deprived of life intentionally.");
    assert_eq!(session.locate(&results[0]).page, 2);
}

#[test]
fn test_keyword_search_from_pdf() {
    let dir = TempDir::new().unwrap();
    let session = Session::load(&config_for(&dir)).unwrap();

    let results = session.search("DISCRIMINATION").unwrap();
    let summary: Vec<(Option<u32>, Option<u32>, usize)> = results
        .iter()
        .map(|r| (r.article_number(), r.clause_number(), session.locate(r).page))
        .collect();
    assert_eq!(summary, vec![(Some(6), None, 3)]);

    let results = session.search("discriminated").unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].clause_number(), Some(2));
}

#[test]
fn test_start_page_keeps_physical_page_numbers() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir).with_start_page(2);
    let session = Session::load(&config).unwrap();

    let results = session.search("equal before").unwrap();
    assert_eq!(results.len(), 1);
    let locator = session.locate(&results[0]);
    assert_eq!(locator.page, 3);

    // The locator's page holds the matched text.
    let page_text = session
        .corpus()
        .extracted()
        .page_text(locator.page_index())
        .unwrap();
    assert!(page_text.contains("All persons are equal before and under the law."));
}

#[test]
fn test_sentence_strategy_from_pdf() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir).with_strategy(IndexStrategy::Sentences);
    let session = Session::load(&config).unwrap();

    let results = session.search("deprived").unwrap();
    assert_eq!(results.len(), 1);
    let MatchRecord::Sentence {
        sentence, offset, ..
    } = &results[0]
    else {
        panic!("expected sentence match, got {:?}", results[0]);
    };
    assert_eq!(sentence, "(2) No one shall be deprived of life intentionally.");
    assert_eq!(session.locate(&results[0]).page, 2);

    let text = &session.corpus().extracted().text;
    assert!(text[*offset..].starts_with("(2) No one shall be deprived"));
}

#[test]
fn test_repeated_search_is_identical() {
    let dir = TempDir::new().unwrap();
    let session = Session::load(&config_for(&dir)).unwrap();
    assert_eq!(session.search("life").unwrap(), session.search("life").unwrap());
}

#[test]
fn test_corrupt_pdf_fails_to_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.pdf");
    std::fs::write(&path, b"%PDF-1.7 this is not really a PDF").unwrap();

    let result = Session::load(&SearchConfig::default().with_document(path));
    assert!(matches!(result, Err(SearchError::DocumentLoadFailed { .. })));
}

#[test]
fn test_document_without_articles() {
    let dir = TempDir::new().unwrap();
    let path = write_pdf(
        dir.path(),
        "notes.pdf",
        &[&["These are notes.", "Nothing numbered here."]],
    );

    let result = Session::load(&SearchConfig::default().with_document(path));
    assert!(matches!(
        result,
        Err(SearchError::NoStructureParsed { unit: "articles" })
    ));
}

#[test]
fn test_start_page_beyond_document() {
    let dir = TempDir::new().unwrap();
    let result = Session::load(&config_for(&dir).with_start_page(27));
    assert!(matches!(
        result,
        Err(SearchError::InvalidStartPage {
            start_page: 27,
            page_count: 3
        })
    ));
}

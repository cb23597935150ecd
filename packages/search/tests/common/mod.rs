//! Shared helpers: build small PDFs with lopdf.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, Stream, StringFormat};

/// Pages of a miniature constitution: table of contents, then two pages of articles.
pub const CONSTITUTION_PAGES: &[&[&str]] = &[
    &["CONTENTS", "5. Right to Life.", "6. Equality."],
    &[
        "5. Right to Life.",
        "(1) Everyone has a right to life.",
        "(2) No one shall be deprived of life intentionally.",
    ],
    &[
        "6. Equality and freedom from discrimination.",
        "(1) All persons are equal before and under the law.",
        "(2) A person shall not be discriminated against.",
    ],
];

fn literal(bytes: &[u8]) -> Object {
    Object::String(bytes.to_vec(), StringFormat::Literal)
}

/// Build a PDF whose pages show the given fragments, one text operator each.
///
/// Every second fragment is written with `TJ` instead of `Tj`. Pages carry
/// no font resources, so the text is shown without a known encoding.
pub fn build_pdf(pages: &[&[&str]]) -> Vec<u8> {
    let pages: Vec<Vec<&[u8]>> = pages
        .iter()
        .map(|fragments| fragments.iter().map(|f| f.as_bytes()).collect())
        .collect();
    build_encoded_pdf(&pages, None)
}

/// Build a PDF showing raw string bytes with font `F1`.
///
/// With `encoding`, every page declares `F1` as Helvetica with that
/// `/Encoding`; without it, `F1` is left unresolved.
pub fn build_encoded_pdf(pages: &[Vec<&[u8]>], encoding: Option<&str>) -> Vec<u8> {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();
    let mut page_ids = Vec::new();

    let resources_id = encoding.map(|encoding| {
        let font_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Font".to_vec())),
            ("Subtype", Object::Name(b"Type1".to_vec())),
            ("BaseFont", Object::Name(b"Helvetica".to_vec())),
            ("Encoding", Object::Name(encoding.as_bytes().to_vec())),
        ]));
        doc.add_object(Dictionary::from_iter(vec![(
            "Font",
            Object::Dictionary(Dictionary::from_iter(vec![("F1", Object::Reference(font_id))])),
        )]))
    });

    for fragments in pages {
        let mut operations = vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec![Object::Name(b"F1".to_vec()), Object::Integer(12)]),
            Operation::new("Td", vec![Object::Integer(72), Object::Integer(720)]),
        ];
        for (i, fragment) in fragments.iter().enumerate() {
            if i % 2 == 0 {
                operations.push(Operation::new("Tj", vec![literal(fragment)]));
            } else {
                operations.push(Operation::new("TJ", vec![Object::Array(vec![literal(fragment)])]));
            }
            operations.push(Operation::new("Td", vec![Object::Integer(0), Object::Integer(-14)]));
        }
        operations.push(Operation::new("ET", vec![]));

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(
            Dictionary::new(),
            content.encode().expect("encode content"),
        ));

        let mut page = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(612),
                    Object::Integer(792),
                ]),
            ),
            ("Contents", Object::Reference(content_id)),
        ]);
        if let Some(resources_id) = resources_id {
            page.set("Resources", Object::Reference(resources_id));
        }
        page_ids.push(doc.add_object(page));
    }

    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Count", Object::Integer(page_ids.len() as i64)),
        (
            "Kids",
            Object::Array(page_ids.iter().map(|id| Object::Reference(*id)).collect()),
        ),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).expect("save PDF");
    buffer
}

/// Write a PDF built from `pages` into `dir` and return its path.
pub fn write_pdf(dir: &Path, name: &str, pages: &[&[&str]]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, build_pdf(pages)).expect("write PDF");
    path
}

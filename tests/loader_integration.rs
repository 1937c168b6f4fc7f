mod common;

use doc_analyzer::Error;
use doc_analyzer::loader::{self, DocumentKind};

#[test]
fn txt_round_trips_exactly() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    let original = "Line one\n  indented — unicode ✓\r\nno trailing newline";
    std::fs::write(&path, original).unwrap();

    assert_eq!(loader::load(&path).unwrap(), original);
}

#[test]
fn uppercase_txt_extension_is_plain_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("NOTES.TXT");
    std::fs::write(&path, "shouting").unwrap();

    let doc = loader::load_document(&path).unwrap();
    assert_eq!(doc.kind(), DocumentKind::PlainText);
    assert_eq!(doc.pages().len(), 1);
    assert_eq!(doc.text(), "shouting");
}

#[test]
fn doc_extension_is_unsupported_whether_or_not_it_exists() {
    let dir = tempfile::tempdir().unwrap();
    let existing = dir.path().join("letter.doc");
    std::fs::write(&existing, "plain words").unwrap();
    let missing = dir.path().join("missing.doc");

    for path in [existing, missing] {
        let err = loader::load(&path).unwrap_err();
        assert!(
            matches!(err, Error::UnsupportedFormat { .. }),
            "{} gave {err}",
            path.display()
        );
    }
}

#[test]
fn missing_files_are_not_found() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["absent.txt", "absent.pdf"] {
        let err = loader::load(dir.path().join(name)).unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }), "{name} gave {err}");
        assert!(err.is_input_error());
    }
}

#[test]
fn invalid_utf8_text_is_read_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("binary.txt");
    std::fs::write(&path, [0xff, 0xfe, 0x00, 0x80]).unwrap();

    let err = loader::load(&path).unwrap_err();
    assert!(matches!(err, Error::Read { .. }), "got {err}");
}

#[test]
fn malformed_pdf_is_read_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.pdf");
    std::fs::write(&path, "Test PDF content").unwrap();

    let err = loader::load(&path).unwrap_err();
    match err {
        Error::Read { path: p, .. } => assert_eq!(p, path),
        other => panic!("expected read failure, got {other}"),
    }
}

#[test]
fn pdf_pages_are_concatenated_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("two_pages.pdf");
    common::write_pdf(&path, &["Alpha", "Bravo", "Charlie"]);

    let pdf = lopdf::Document::load(&path).unwrap();
    let expected: String = pdf
        .get_pages()
        .into_keys()
        .map(|n| pdf.extract_text(&[n]).unwrap())
        .collect();

    let doc = loader::load_document(&path).unwrap();
    assert_eq!(doc.kind(), DocumentKind::Pdf);
    assert_eq!(doc.pages().len(), 3);
    assert_eq!(doc.text(), expected);

    let text = loader::load(&path).unwrap();
    assert_eq!(text, expected);
    let a = text.find("Alpha").expect("first page text");
    let b = text.find("Bravo").expect("second page text");
    let c = text.find("Charlie").expect("third page text");
    assert!(a < b && b < c);
}

#[test]
fn pdf_without_text_loads_as_empty_pages() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blank.pdf");
    common::write_pdf(&path, &[""]);

    let text = loader::load(&path).unwrap();
    assert!(text.trim().is_empty(), "expected no text, got {text:?}");
}

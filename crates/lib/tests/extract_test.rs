//! # PDF Text Extraction Tests

use labnote::extract::{extract_text, extract_text_from_path};
use labnote::ProcessError;
use labnote_test_utils::build_minimal_pdf;
use labnote_test_utils::helpers::generate_test_pdf;
use std::io::Write;

/// A single page comes back exactly as drawn.
#[test]
fn test_extracts_single_page_text() {
    let pdf_data = build_minimal_pdf(&["WBC 5.5 (4-9)"]);
    let text = extract_text(&pdf_data).expect("extraction failed");
    assert_eq!(text, "WBC 5.5 (4-9)");
}

/// Multi-page output is the ordered concatenation of the per-page text,
/// with nothing inserted between pages.
#[test]
fn test_concatenates_pages_in_document_order() {
    let pages = [
        "CBC 17.07.2025: ",
        "WBC 5.5 (4-9), ",
        "RBC 4.8 (3.9-4.7)",
    ];
    let pdf_data = build_minimal_pdf(&pages);
    let text = extract_text(&pdf_data).expect("extraction failed");
    assert_eq!(text, pages.concat());
}

/// A document with no extractable text yields an empty string, not an error.
#[test]
fn test_text_free_document_yields_empty_string() {
    let pdf_data = build_minimal_pdf(&[""]);
    let text = extract_text(&pdf_data).expect("extraction failed");
    assert_eq!(text, "");
}

/// Bytes that are not a PDF fail with a document-read error.
#[test]
fn test_unparsable_input_is_a_document_read_error() {
    let result = extract_text(b"this is not a pdf document");
    assert!(matches!(result, Err(ProcessError::DocumentRead(_))));
}

/// A missing file surfaces as a document-read error, not a panic.
#[test]
fn test_missing_file_is_a_document_read_error() {
    let result = extract_text_from_path("/no/such/lab_report.pdf");
    assert!(matches!(result, Err(ProcessError::DocumentRead(_))));
}

/// Path-based extraction matches in-memory extraction of the same bytes.
#[test]
fn test_extracts_from_a_file_on_disk() {
    let pdf_data = build_minimal_pdf(&["Glucose 5.2 mmol/l (3.9-6.1)"]);

    let mut file = tempfile::NamedTempFile::new().expect("failed to create temp file");
    file.write_all(&pdf_data).expect("failed to write temp pdf");

    let text = extract_text_from_path(file.path()).expect("extraction failed");
    assert_eq!(text, "Glucose 5.2 mmol/l (3.9-6.1)");
}

/// Documents produced by the printpdf-based test generator parse cleanly.
#[test]
fn test_accepts_generated_documents() {
    let pdf_data = generate_test_pdf("The magic number is 42.").expect("pdf generation failed");
    assert!(extract_text(&pdf_data).is_ok());
}

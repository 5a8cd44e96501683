//! # PDF Text Extraction
//!
//! The leaf stage of the pipeline: turn a PDF document into a single plain
//! string, one page after another.

use crate::errors::ProcessError;
use pdf::file::FileOptions;
use std::path::Path;

/// Extracts text from all pages of a PDF, in page order.
///
/// Pages with no text operators contribute nothing, so a pure-image scan
/// yields an empty string rather than an error. No separators are inserted
/// beyond what each page's own content stream draws.
pub fn extract_text(pdf_data: &[u8]) -> Result<String, ProcessError> {
    let file = FileOptions::cached()
        .load(pdf_data)
        .map_err(|e| ProcessError::DocumentRead(e.to_string()))?;
    let resolver = file.resolver();
    let mut full_text = String::new();

    for page_num in 0..file.num_pages() {
        let page = file
            .get_page(page_num)
            .map_err(|e| ProcessError::DocumentRead(e.to_string()))?;
        if let Some(content) = &page.contents {
            let operations = content
                .operations(&resolver)
                .map_err(|e| ProcessError::DocumentRead(e.to_string()))?;
            for op in operations.iter() {
                if let pdf::content::Op::TextDraw { text } = op {
                    full_text.push_str(&text.to_string_lossy());
                }
            }
        }
    }
    Ok(full_text)
}

/// Reads a PDF from disk and extracts its text.
///
/// The file handle is scoped to this call and released before it returns,
/// on success and failure alike.
pub fn extract_text_from_path(path: impl AsRef<Path>) -> Result<String, ProcessError> {
    let pdf_data =
        std::fs::read(path.as_ref()).map_err(|e| ProcessError::DocumentRead(e.to_string()))?;
    extract_text(&pdf_data)
}

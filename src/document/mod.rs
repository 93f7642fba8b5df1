// src/document/mod.rs
use std::path::Path;

use lopdf::Document;

use crate::utils::error::DocumentError;

/// Loads a PDF and returns its complete text content as a single string,
/// page by page in document order, with page boundaries flattened (adjacent
/// pages' text is directly concatenated, no page-break marker).
///
/// Fails with `DocumentError::Open` if the file cannot be opened or parsed,
/// and `DocumentError::PageText` if any page's text cannot be decoded. Both
/// are fatal: the caller gets no partial text. The document handle is an
/// owned value, so it is released on every exit path including the error
/// ones.
pub fn load_text<P: AsRef<Path>>(path: P) -> Result<String, DocumentError> {
    let path = path.as_ref();
    tracing::info!("Loading document: {}", path.display());

    let document = Document::load(path).map_err(|source| DocumentError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let pages = document.get_pages();
    tracing::debug!("Document has {} page(s)", pages.len());

    let mut text = String::new();
    // get_pages() keys are 1-based page numbers; the BTreeMap iterates them
    // in document order.
    for page_number in pages.keys() {
        let page_text = document
            .extract_text(&[*page_number])
            .map_err(|source| DocumentError::PageText {
                page: *page_number,
                source,
            })?;
        text.push_str(&page_text);
    }

    tracing::debug!("Extracted {} bytes of text from {}", text.len(), path.display());
    Ok(text)
}

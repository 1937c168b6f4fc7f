//! Resolve a path on disk to the text that gets sent to the model.
//!
//! Only two formats are understood: UTF-8 plain text and PDF. The format is
//! picked from the extension once, before the file is touched, so an
//! unsupported extension is reported the same way whether or not the file
//! exists.

use crate::error::{Error, Result};
use lopdf::Document as PdfDocument;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    PlainText,
    Pdf,
}

impl DocumentKind {
    /// Pick the format from the path's extension, ignoring case.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "txt" => Ok(Self::PlainText),
            "pdf" => Ok(Self::Pdf),
            _ => Err(Error::UnsupportedFormat {
                extension: if extension.is_empty() {
                    extension
                } else {
                    format!(".{extension}")
                },
            }),
        }
    }
}

/// A loaded document: one entry per page, in document order.
///
/// Plain-text files are a single page.
#[derive(Debug, Clone)]
pub struct Document {
    path: PathBuf,
    kind: DocumentKind,
    pages: Vec<String>,
}

impl Document {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    /// Page texts joined with no separator.
    pub fn text(&self) -> String {
        self.pages.concat()
    }
}

/// Load a `.txt` or `.pdf` file and return its text.
pub fn load(path: impl AsRef<Path>) -> Result<String> {
    load_document(path).map(|doc| doc.text())
}

pub fn load_document(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref();
    let kind = DocumentKind::from_path(path)?;
    if !path.exists() {
        return Err(Error::NotFound {
            path: path.to_path_buf(),
        });
    }

    let pages = match kind {
        DocumentKind::PlainText => {
            vec![std::fs::read_to_string(path).map_err(|e| Error::read(path, e))?]
        }
        DocumentKind::Pdf => extract_pdf_pages(path)?,
    };
    debug!(path = %path.display(), ?kind, pages = pages.len(), "document loaded");

    Ok(Document {
        path: path.to_path_buf(),
        kind,
        pages,
    })
}

fn extract_pdf_pages(path: &Path) -> Result<Vec<String>> {
    let bytes = std::fs::read(path).map_err(|e| Error::read(path, e))?;
    let doc = PdfDocument::load_mem(&bytes).map_err(|e| Error::read(path, e))?;

    // get_pages is keyed by page number, so iteration is in document order.
    let mut pages = Vec::new();
    for page_num in doc.get_pages().into_keys() {
        let text = doc
            .extract_text(&[page_num])
            .map_err(|e| Error::read(path, format!("page {page_num}: {e}")))?;
        pages.push(text);
    }

    if pages.iter().all(|p| p.trim().is_empty()) {
        warn!(
            path = %path.display(),
            pages = pages.len(),
            "PDF contains no extractable text"
        );
    }
    Ok(pages)
}

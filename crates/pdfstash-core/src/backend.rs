//! The PDF text extraction seam.

use thiserror::Error;

/// Errors raised by a [`PdfBackend`].
#[derive(Error, Debug)]
pub enum BackendError {
    /// The byte stream could not be opened as a PDF document
    /// (malformed, not a PDF, or encrypted).
    #[error("failed to open PDF: {0}")]
    OpenError(String),
    /// The document opened but text extraction failed.
    #[error("failed to extract text: {0}")]
    ExtractionError(String),
}

/// Trait for PDF text extraction backends.
///
/// Implementors produce the per-page text of a document held in memory, in
/// document order. A page with no recoverable text layer (scanned images
/// without OCR, undecodable content) yields an empty string; only a failure
/// affecting the whole document is an error.
pub trait PdfBackend: Send + Sync {
    /// Extract the text of every page, in order.
    fn extract_pages(&self, data: &[u8]) -> Result<Vec<String>, BackendError>;
}

/// A scripted [`PdfBackend`] for tests: returns a fixed page list or a
/// fixed open failure, regardless of input.
pub struct MockBackend {
    pages: Vec<String>,
    error: Option<String>,
}

impl MockBackend {
    /// A backend that extracts the given page texts from any input.
    pub fn with_pages<S: Into<String>>(pages: Vec<S>) -> Self {
        Self {
            pages: pages.into_iter().map(Into::into).collect(),
            error: None,
        }
    }

    /// A backend that fails every call with `OpenError(message)`.
    pub fn failing(message: &str) -> Self {
        Self {
            pages: Vec::new(),
            error: Some(message.to_string()),
        }
    }
}

impl PdfBackend for MockBackend {
    fn extract_pages(&self, _data: &[u8]) -> Result<Vec<String>, BackendError> {
        match &self.error {
            Some(message) => Err(BackendError::OpenError(message.clone())),
            None => Ok(self.pages.clone()),
        }
    }
}

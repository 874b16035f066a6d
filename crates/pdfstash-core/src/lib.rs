//! Core types for the pdfstash upload pipeline: the PDF extraction seam,
//! the SQLite document store and the configuration file format.

use thiserror::Error;

pub mod backend;
pub mod config;
pub mod document;
pub mod store;

// Re-export for convenience
pub use backend::{BackendError, MockBackend, PdfBackend};
pub use document::ExtractedDocument;
pub use store::StoreError;

/// Failure of one upload request, split by stage so the HTTP boundary can
/// pick the user-facing message per category without re-deriving the cause.
///
/// `Display` is transparent: each variant renders as the underlying failure
/// text alone, leaving message framing to the boundary.
#[derive(Error, Debug)]
pub enum ProcessError {
    /// The request did not carry a usable file. The message is shown to
    /// the user as-is.
    #[error("{0}")]
    Validation(String),
    /// The document could not be opened or its text extracted.
    #[error("{0}")]
    Extraction(#[from] BackendError),
    /// The database connection or the insert failed.
    #[error("{0}")]
    Persistence(#[from] StoreError),
}

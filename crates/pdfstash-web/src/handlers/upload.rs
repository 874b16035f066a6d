use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::response::Html;

use pdfstash_core::{BackendError, ExtractedDocument, PdfBackend, ProcessError, StoreError, store};

use crate::state::AppState;
use crate::template;
use crate::upload::{self, UploadedFile};

const NO_FILE_SENT: &str = "No file sent.";
const NO_FILE_SELECTED: &str = "No file selected.";
const PROCESSING_ERROR_PREFIX: &str = "Error while processing or saving";

/// `POST /upload`: extract the uploaded PDF's text and store it.
///
/// Every outcome renders the result view with HTTP 200: the extracted text
/// on success, the validation message verbatim, or the catch-all
/// "Error while processing or saving: …" for extraction and persistence
/// failures alike.
pub async fn upload(State(state): State<Arc<AppState>>, multipart: Multipart) -> Html<String> {
    match process(&state, multipart).await {
        Ok(text) => template::render_result(&text),
        Err(ProcessError::Validation(message)) => template::render_result(&message),
        Err(err) => {
            tracing::error!(error = %err, "upload processing failed");
            template::render_result(&format!("{PROCESSING_ERROR_PREFIX}: {err}"))
        }
    }
}

async fn process(state: &Arc<AppState>, multipart: Multipart) -> Result<String, ProcessError> {
    let file = upload::read_pdf_field(multipart)
        .await
        .map_err(ProcessError::Validation)?
        .ok_or_else(|| ProcessError::Validation(NO_FILE_SENT.into()))?;

    if file.filename.is_empty() {
        return Err(ProcessError::Validation(NO_FILE_SELECTED.into()));
    }

    // Optional raw-upload retention; extraction always runs from memory.
    if let Some(dir) = &state.settings.upload_dir {
        save_raw_upload(dir, &file);
    }

    let document = extract_blocking(state.backend.clone(), file).await?;

    // Persistence runs only after extraction fully completed, so a failed
    // extraction never leaves a partial row behind.
    persist_blocking(state.settings.db_path.clone(), &document).await?;

    Ok(document.text)
}

/// Extract page texts on the blocking pool (the PDF backend is synchronous)
/// and assemble the document.
async fn extract_blocking(
    backend: Arc<dyn PdfBackend>,
    file: UploadedFile,
) -> Result<ExtractedDocument, ProcessError> {
    let UploadedFile { filename, data } = file;
    let pages = tokio::task::spawn_blocking(move || backend.extract_pages(&data))
        .await
        .map_err(|e| BackendError::ExtractionError(format!("task join error: {}", e)))??;
    Ok(ExtractedDocument::from_pages(filename, &pages))
}

/// Run the store insert on the blocking pool.
async fn persist_blocking(
    db_path: PathBuf,
    document: &ExtractedDocument,
) -> Result<(), ProcessError> {
    let filename = document.filename.clone();
    let text = document.text.clone();
    tokio::task::spawn_blocking(move || store::save_document(&db_path, &filename, &text))
        .await
        .map_err(|e| StoreError::Task(format!("task join error: {}", e)))??;
    Ok(())
}

/// Copy the raw upload bytes into the retention directory under the
/// client's filename, exactly as supplied. Failures are logged and do not
/// fail the request; this feature is independent of extraction.
fn save_raw_upload(dir: &Path, file: &UploadedFile) {
    let path = dir.join(&file.filename);
    match std::fs::write(&path, &file.data) {
        Ok(()) => tracing::debug!(path = %path.display(), "stored raw upload"),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to store raw upload")
        }
    }
}

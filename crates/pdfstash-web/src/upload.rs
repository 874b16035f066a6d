use axum::extract::Multipart;

/// An uploaded file pulled out of the multipart form, held in memory.
pub struct UploadedFile {
    /// Client-supplied filename, verbatim. Empty when the form was
    /// submitted without selecting a file.
    pub filename: String,
    pub data: Vec<u8>,
}

/// Read the `pdf` field from a multipart upload.
///
/// Returns `Ok(None)` when the form carries no `pdf` field at all. Read
/// failures on the field body are reported as plain messages for the
/// caller to surface.
pub async fn read_pdf_field(mut multipart: Multipart) -> Result<Option<UploadedFile>, String> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| format!("Failed to read form field: {}", e))?
    {
        if field.name() != Some("pdf") {
            // Ignore unknown fields
            let _ = field.bytes().await;
            continue;
        }

        let filename = field.file_name().unwrap_or("").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| format!("Failed to read file data: {}", e))?
            .to_vec();

        return Ok(Some(UploadedFile { filename, data }));
    }

    Ok(None)
}

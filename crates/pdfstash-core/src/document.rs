//! The extracted document assembled from per-page text.

/// One upload's extraction output: the original client filename (kept
/// verbatim, no path or extension validation) and the accumulated text.
#[derive(Debug, Clone)]
pub struct ExtractedDocument {
    pub filename: String,
    pub text: String,
}

impl ExtractedDocument {
    /// Concatenate page texts in order, appending a blank line (two
    /// newlines) after every page. A page with no text still contributes
    /// its separator, so an N-page document always ends with `"\n\n"`.
    pub fn from_pages(filename: String, pages: &[String]) -> Self {
        let mut text = String::new();
        for page in pages {
            text.push_str(page);
            text.push_str("\n\n");
        }
        Self { filename, text }
    }
}

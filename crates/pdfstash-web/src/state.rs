use std::sync::Arc;

use pdfstash_core::PdfBackend;
use pdfstash_core::config::Settings;

/// Shared application state accessible from all handlers.
pub struct AppState {
    pub settings: Settings,
    pub backend: Arc<dyn PdfBackend>,
}

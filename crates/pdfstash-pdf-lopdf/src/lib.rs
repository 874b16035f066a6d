use lopdf::Document;

use pdfstash_core::{BackendError, PdfBackend};

/// lopdf-based implementation of [`PdfBackend`].
///
/// The document is parsed entirely from the in-memory upload bytes; nothing
/// touches disk. Pages are extracted one at a time so a single undecodable
/// page degrades to an empty string instead of failing the whole document.
#[derive(Debug, Default)]
pub struct LopdfBackend;

impl LopdfBackend {
    pub fn new() -> Self {
        Self
    }
}

impl PdfBackend for LopdfBackend {
    fn extract_pages(&self, data: &[u8]) -> Result<Vec<String>, BackendError> {
        let doc = Document::load_mem(data).map_err(|e| BackendError::OpenError(e.to_string()))?;

        // No password plumbing exists; an encrypted document is an open
        // failure, same as malformed input.
        if doc.is_encrypted() {
            return Err(BackendError::OpenError("document is encrypted".into()));
        }

        let mut pages = Vec::new();
        for page_number in doc.get_pages().keys() {
            // A page without a text layer, or one lopdf cannot decode,
            // yields an empty string. The extractor appends a trailing
            // newline per page; trim it so page text carries no separator
            // of its own.
            let text = doc.extract_text(&[*page_number]).unwrap_or_default();
            pages.push(text.trim_end().to_string());
        }
        Ok(pages)
    }
}

#[cfg(test)]
mod tests {
    use lopdf::content::{Content, Operation};
    use lopdf::{Document, Object, Stream, dictionary};

    use super::*;

    /// Build an in-memory PDF with one page per entry in `page_texts`.
    /// An empty entry produces a page whose content stream has no text
    /// operators at all.
    fn build_pdf(page_texts: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for text in page_texts {
            let mut operations = Vec::new();
            if !text.is_empty() {
                operations.extend([
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ]);
            }
            let content = Content { operations };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buf = Vec::new();
        doc.save_to(&mut buf).unwrap();
        buf
    }

    #[test]
    fn extracts_pages_in_document_order() {
        let data = build_pdf(&["First page", "Second page", "Third page"]);
        let pages = LopdfBackend::new().extract_pages(&data).unwrap();
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0], "First page");
        assert_eq!(pages[1], "Second page");
        assert_eq!(pages[2], "Third page");
    }

    #[test]
    fn textless_page_yields_empty_string() {
        let data = build_pdf(&["Hello", ""]);
        let pages = LopdfBackend::new().extract_pages(&data).unwrap();
        assert_eq!(pages, vec!["Hello".to_string(), String::new()]);
    }

    #[test]
    fn non_pdf_bytes_fail_to_open() {
        let err = LopdfBackend::new()
            .extract_pages(b"this is not a pdf at all")
            .unwrap_err();
        assert!(matches!(err, BackendError::OpenError(_)));
    }

    #[test]
    fn truncated_pdf_fails_to_open() {
        let mut data = build_pdf(&["Hello"]);
        data.truncate(40);
        let err = LopdfBackend::new().extract_pages(&data).unwrap_err();
        assert!(matches!(err, BackendError::OpenError(_)));
    }
}

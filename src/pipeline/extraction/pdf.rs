use super::types::{PageOutcome, PdfBackend};
use super::ExtractionError;

/// PDF text backend using the pdf-extract crate.
/// Handles digital PDFs with embedded text layers.
pub struct PdfTextBackend;

impl PdfBackend for PdfTextBackend {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageOutcome>, ExtractionError> {
        let page_texts = pdf_extract::extract_text_from_mem_by_pages(pdf_bytes)
            .map_err(|e| ExtractionError::PdfParsing(e.to_string()))?;

        Ok(page_texts.into_iter().map(PageOutcome::Text).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a valid multi-page PDF with lopdf, one content stream per
    /// entry in `pages`.
    fn make_test_pdf(pages: &[&str]) -> Vec<u8> {
        use lopdf::dictionary;
        use lopdf::{Document, Object, Stream};

        let mut doc = Document::with_version("1.4");

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });

        let mut kids: Vec<Object> = Vec::new();
        let mut page_ids = Vec::new();
        for text in pages {
            let content = format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET");
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));

            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
                "Contents" => content_id,
                "Resources" => dictionary! {
                    "Font" => dictionary! { "F1" => font_id },
                },
            });
            kids.push(page_id.into());
            page_ids.push(page_id);
        }

        let pages_id = doc.add_object(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => pages.len() as i64,
        });

        for page_id in page_ids {
            if let Ok(Object::Dictionary(ref mut dict)) = doc.get_object_mut(page_id) {
                dict.set("Parent", pages_id);
            }
        }

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buf = Vec::new();
        doc.save_to(&mut buf).unwrap();
        buf
    }

    fn page_text(outcome: &PageOutcome) -> &str {
        match outcome {
            PageOutcome::Text(t) => t,
            PageOutcome::Failed(reason) => panic!("page failed: {reason}"),
        }
    }

    #[test]
    fn extracts_text_from_digital_pdf() {
        let pdf_bytes = make_test_pdf(&["Quarterly earnings review"]);
        let pages = PdfTextBackend.extract_pages(&pdf_bytes).unwrap();

        assert!(!pages.is_empty());
        let full: String = pages.iter().map(page_text).collect();
        assert!(
            full.contains("Quarterly") || full.contains("earnings"),
            "expected sample text, got: {full}"
        );
    }

    #[test]
    fn preserves_page_order() {
        let pdf_bytes = make_test_pdf(&["alpha page", "omega page"]);
        let pages = PdfTextBackend.extract_pages(&pdf_bytes).unwrap();

        assert_eq!(pages.len(), 2);
        assert!(page_text(&pages[0]).contains("alpha"));
        assert!(page_text(&pages[1]).contains("omega"));
    }

    #[test]
    fn invalid_pdf_returns_parsing_error() {
        let result = PdfTextBackend.extract_pages(b"not a pdf");
        assert!(matches!(result, Err(ExtractionError::PdfParsing(_))));
    }
}

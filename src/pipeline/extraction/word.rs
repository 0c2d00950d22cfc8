use std::io::{Cursor, Read};

use super::types::WordBackend;
use super::ExtractionError;

/// Word text backend for the DOCX container (ZIP + WordprocessingML).
///
/// Opens `word/document.xml` and scrapes the visible run text: `<w:t>`
/// contents, with paragraph ends and explicit breaks mapped to newlines
/// and `<w:tab/>` to a tab.
pub struct DocxTextBackend;

impl WordBackend for DocxTextBackend {
    fn extract_text(&self, doc_bytes: &[u8]) -> Result<String, ExtractionError> {
        let mut archive = zip::ZipArchive::new(Cursor::new(doc_bytes))
            .map_err(|e| ExtractionError::WordParsing(e.to_string()))?;

        let mut entry = archive
            .by_name("word/document.xml")
            .map_err(|e| ExtractionError::WordParsing(format!("missing word/document.xml: {e}")))?;

        let mut xml = String::new();
        entry
            .read_to_string(&mut xml)
            .map_err(|e| ExtractionError::Encoding(e.to_string()))?;

        Ok(scrape_document_xml(&xml))
    }
}

/// Pull visible text out of WordprocessingML. Only run text is kept;
/// all markup, properties, and embedded objects are dropped.
fn scrape_document_xml(xml: &str) -> String {
    let mut out = String::new();
    let mut in_text = false;
    let mut cursor = 0;

    while let Some(rel) = xml[cursor..].find('<') {
        let lt = cursor + rel;
        if in_text {
            out.push_str(&unescape(&xml[cursor..lt]));
        }
        let Some(rel_gt) = xml[lt..].find('>') else {
            break;
        };
        let gt = lt + rel_gt;
        let tag = &xml[lt + 1..gt];

        if (tag == "w:t" || tag.starts_with("w:t ")) && !tag.ends_with('/') {
            in_text = true;
        } else if tag == "/w:t" {
            in_text = false;
        } else if tag == "/w:p" {
            out.push('\n');
        } else if tag == "w:tab" || tag == "w:tab/" {
            // Exact match only: `<w:tab w:val=…/>` inside `<w:tabs>` is a
            // tab-stop definition, not a tab character in the text.
            out.push('\t');
        } else if tag.starts_with("w:br") {
            out.push('\n');
        }
        cursor = gt + 1;
    }

    while out.ends_with('\n') {
        out.pop();
    }
    out
}

/// Decode the five XML character entities. Unknown entities pass through
/// verbatim.
fn unescape(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        let replaced = [
            ("&amp;", '&'),
            ("&lt;", '<'),
            ("&gt;", '>'),
            ("&quot;", '"'),
            ("&apos;", '\''),
        ]
        .iter()
        .find(|(entity, _)| rest.starts_with(entity));
        match replaced {
            Some((entity, ch)) => {
                out.push(*ch);
                rest = &rest[entity.len()..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

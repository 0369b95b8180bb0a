//! PDF extraction: per-page text plus document metadata.

use std::collections::HashMap;

use tracing::warn;

use medcollab_core::types::{DocumentPage, ExtractedDocument};
use medcollab_core::{Error, Result};

/// Extract per-page text and document metadata from raw PDF bytes.
///
/// Unparseable bytes are a client error (`DocumentParse`). Metadata
/// extraction failure is non-fatal and yields an empty map.
pub fn extract_pdf(bytes: &[u8]) -> Result<ExtractedDocument> {
    let page_texts = pdf_extract::extract_text_from_mem_by_pages(bytes)
        .map_err(|e| Error::DocumentParse(format!("failed to extract text from PDF: {}", e)))?;

    if page_texts.is_empty() {
        return Err(Error::DocumentParse(
            "PDF contains no pages".to_string(),
        ));
    }

    let pages = page_texts
        .into_iter()
        .enumerate()
        .map(|(i, text)| DocumentPage {
            text: text.trim().to_string(),
            page_number: i + 1,
            metadata: HashMap::new(),
        })
        .collect();

    Ok(ExtractedDocument {
        pages,
        metadata: read_info_dictionary(bytes),
    })
}

/// Best-effort read of the PDF Info dictionary (Title, Author, ...).
fn read_info_dictionary(bytes: &[u8]) -> HashMap<String, String> {
    let doc = match lopdf::Document::load_mem(bytes) {
        Ok(doc) => doc,
        Err(e) => {
            warn!("Unreadable PDF metadata: {}", e);
            return HashMap::new();
        }
    };

    let info = match doc.trailer.get(b"Info") {
        Ok(lopdf::Object::Reference(id)) => doc
            .get_object(*id)
            .ok()
            .and_then(|obj| obj.as_dict().ok()),
        Ok(lopdf::Object::Dictionary(dict)) => Some(dict),
        _ => None,
    };

    let mut metadata = HashMap::new();
    if let Some(dict) = info {
        for (key, value) in dict.iter() {
            if let lopdf::Object::String(text, _) = value {
                metadata.insert(
                    String::from_utf8_lossy(key).to_string(),
                    String::from_utf8_lossy(text).to_string(),
                );
            }
        }
    }
    metadata
}

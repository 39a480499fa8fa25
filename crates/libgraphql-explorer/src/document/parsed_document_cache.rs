use crate::document::parse_document;
use crate::document::Document;

/// Remembers the most recently parsed query text and its [`Document`].
///
/// Holds at most one entry. Parse failures never escape: text that does not
/// parse yields the last good document (or the default document if nothing
/// has parsed yet).
#[derive(Clone, Debug, Default)]
pub struct ParsedDocumentCache {
    entry: Option<(String, Document)>,
}
impl ParsedDocumentCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached text, if anything has been parsed successfully so far.
    pub fn cached_text(&self) -> Option<&str> {
        self.entry.as_ref().map(|(text, _)| text.as_str())
    }

    pub fn get_or_default(&mut self, text: &str) -> Document {
        if let Some((cached_text, doc)) = &self.entry
            && cached_text == text {
            return doc.clone();
        }

        if text.trim().is_empty() {
            return Document::default_document();
        }

        match parse_document(text) {
            Ok(doc) => {
                self.entry = Some((text.to_string(), doc.clone()));
                doc
            },

            Err(err) => {
                log::debug!("Falling back after failing to parse query text: {err}");
                match &self.entry {
                    Some((_, previous_doc)) => previous_doc.clone(),
                    None => Document::default_document(),
                }
            },
        }
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}

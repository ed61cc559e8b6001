use super::types::{MatchFilter, SearchRequest};

/// Document field holding the transcript fragment text.
pub(crate) const TRANSCRIPT_TEXT_FIELD: &str = "transcript_text";

/// Maps free text to a structured search request.
///
/// The translation is fixed: one match clause on the transcript text
/// field, capped at the configured result size.
#[derive(Debug, Clone)]
pub struct QueryTranslator {
    size: usize,
}

impl QueryTranslator {
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    pub fn translate(&self, text: &str) -> SearchRequest {
        SearchRequest {
            filter: MatchFilter {
                field: TRANSCRIPT_TEXT_FIELD.to_string(),
                value: text.to_string(),
            },
            size: self.size,
        }
    }
}

use serde_json::{json, Value};

/// Builder for a `_search` request body: a single match clause plus an
/// optional `_source` projection and a result-size cap.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    field: String,
    value: String,
    source_fields: Vec<String>,
    size: usize,
}

impl SearchQuery {
    pub fn matching(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
            source_fields: Vec::new(),
            size: 10,
        }
    }

    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Restrict `_source` to the given document fields.
    pub fn with_source_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.source_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub(crate) fn body(&self) -> Value {
        let mut body = json!({
            "query": {
                "match": {
                    (self.field.as_str()): self.value.clone(),
                }
            },
            "size": self.size,
        });

        if !self.source_fields.is_empty() {
            body["_source"] = json!({ "includes": self.source_fields });
        }

        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_match_body() {
        let query = SearchQuery::matching("transcript_text", "ice cream").with_size(25);
        let body = query.body();

        assert_eq!(body["query"]["match"]["transcript_text"], "ice cream");
        assert_eq!(body["size"], 25);
        assert!(body.get("_source").is_none());
    }

    #[test]
    fn builds_source_projection() {
        let query = SearchQuery::matching("transcript_text", "q")
            .with_source_fields(["show_id", "episode_id"]);
        let body = query.body();

        assert_eq!(body["_source"]["includes"][0], "show_id");
        assert_eq!(body["_source"]["includes"][1], "episode_id");
    }
}

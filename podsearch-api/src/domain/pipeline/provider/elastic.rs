//! Hit provider backed by the transcript search engine.

use async_trait::async_trait;
use transcript_search::{SearchClient, SearchFetchError, SearchQuery};

use crate::domain::pipeline::traits::{HitProvider, PipelineError, Result};
use crate::domain::pipeline::types::{Hit, SearchRequest};

/// Document fields projected out of the index for each hit.
const SOURCE_FIELDS: [&str; 5] = [
    "show_id",
    "episode_id",
    "transcript_text",
    "start_time",
    "end_time",
];

pub struct ElasticHitProvider {
    client: SearchClient,
    index: String,
}

impl ElasticHitProvider {
    pub fn new(client: SearchClient, index: impl Into<String>) -> Self {
        Self {
            client,
            index: index.into(),
        }
    }
}

#[async_trait]
impl HitProvider for ElasticHitProvider {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<Hit>> {
        let query = SearchQuery::matching(
            request.filter.field.as_str(),
            request.filter.value.as_str(),
        )
        .with_size(request.size)
        .with_source_fields(SOURCE_FIELDS);

        let hits = self
            .client
            .search(&self.index, &query)
            .await
            .map_err(|e| match e {
                SearchFetchError::Unauthorized => {
                    PipelineError::SearchUnavailable("unauthorized".to_string())
                }
                other => PipelineError::SearchUnavailable(other.to_string()),
            })?;

        Ok(hits.into_iter().map(Hit::from).collect())
    }
}

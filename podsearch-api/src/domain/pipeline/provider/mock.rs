//! Mock hit provider for testing.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::pipeline::traits::{HitProvider, PipelineError, Result};
use crate::domain::pipeline::types::{Hit, SearchRequest};

/// Mock provider returning a canned hit list, in the order given.
///
/// Records every request so tests can assert what reached the provider.
#[derive(Clone, Default)]
pub struct MockHitProvider {
    hits: Vec<Hit>,
    fail_with: Option<String>,
    requests: Arc<Mutex<Vec<SearchRequest>>>,
}

impl MockHitProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hits(mut self, hits: Vec<Hit>) -> Self {
        self.hits = hits;
        self
    }

    /// Fail every call with a search provider error.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            fail_with: Some(message.into()),
            ..Self::default()
        }
    }

    /// Requests observed so far.
    pub fn requests(&self) -> Vec<SearchRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HitProvider for MockHitProvider {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<Hit>> {
        self.requests.lock().unwrap().push(request.clone());

        if let Some(message) = &self.fail_with {
            return Err(PipelineError::SearchUnavailable(message.clone()));
        }

        Ok(self.hits.clone())
    }
}

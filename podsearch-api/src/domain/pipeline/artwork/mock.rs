//! Mock artwork provider for testing.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::pipeline::traits::{ArtworkProvider, PipelineError, Result};
use crate::domain::pipeline::types::{ArtworkImage, EpisodeArtwork};

/// Mock artwork provider with canned per-id responses.
///
/// Records every batch it is asked for, so tests can assert both the call
/// count and the exact ids requested.
#[derive(Clone, Default)]
pub struct MockArtworkProvider {
    responses: HashMap<String, EpisodeArtwork>,
    fail_with: Option<String>,
    batches: Arc<Mutex<Vec<Vec<String>>>>,
    call_count: Arc<AtomicUsize>,
}

impl MockArtworkProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canned artwork for one episode id, image URLs largest-first.
    pub fn with_images<I, S>(mut self, episode_id: &str, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let images = urls
            .into_iter()
            .map(|url| ArtworkImage { url: url.into() })
            .collect();
        self.responses
            .insert(episode_id.to_string(), EpisodeArtwork { images });
        self
    }

    /// Fail every call with a catalog error.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            fail_with: Some(message.into()),
            ..Self::default()
        }
    }

    /// Get the number of times `batch_lookup` was called.
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Id batches observed so far.
    pub fn batches(&self) -> Vec<Vec<String>> {
        self.batches.lock().unwrap().clone()
    }
}

#[async_trait]
impl ArtworkProvider for MockArtworkProvider {
    async fn batch_lookup(&self, ids: &[String]) -> Result<HashMap<String, EpisodeArtwork>> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.batches.lock().unwrap().push(ids.to_vec());

        if let Some(message) = &self.fail_with {
            return Err(PipelineError::CatalogUnavailable(message.clone()));
        }

        Ok(ids
            .iter()
            .filter_map(|id| {
                self.responses
                    .get(id)
                    .map(|artwork| (id.clone(), artwork.clone()))
            })
            .collect())
    }
}

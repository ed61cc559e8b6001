//! Trait definitions for the pipeline's external collaborators.
//!
//! These traits enable dependency injection and easy testing through mocking.

use std::collections::HashMap;

use async_trait::async_trait;

use super::types::{EpisodeArtwork, Hit, SearchRequest};

/// Error type for pipeline operations.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("search query must not be empty")]
    EmptyQuery,

    #[error("no metadata for episode '{0}'")]
    MetadataMissing(String),

    #[error("search provider error: {0}")]
    SearchUnavailable(String),

    #[error("episode catalog error: {0}")]
    CatalogUnavailable(String),
}

pub type Result<T> = std::result::Result<T, PipelineError>;

/// Ranked-hit provider over the transcript index.
#[async_trait]
pub trait HitProvider: Send + Sync {
    /// Execute the structured request, returning hits in relevance order.
    async fn search(&self, request: &SearchRequest) -> Result<Vec<Hit>>;
}

/// Batched artwork lookup against the external episode catalog.
#[async_trait]
pub trait ArtworkProvider: Send + Sync {
    /// Resolve a batch of episode ids in one call.
    ///
    /// Ids the catalog cannot resolve are simply missing from the map;
    /// only transport or auth failures are errors.
    async fn batch_lookup(&self, ids: &[String]) -> Result<HashMap<String, EpisodeArtwork>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Verify traits are object-safe (can be used as trait objects)
    fn _assert_hit_provider_object_safe(_: &dyn HitProvider) {}
    fn _assert_artwork_provider_object_safe(_: &dyn ArtworkProvider) {}
}

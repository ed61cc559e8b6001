//! Artwork provider backed by the external episode catalog.

use std::collections::HashMap;

use async_trait::async_trait;
use episode_catalog::{CatalogClient, CatalogFetchError};

use crate::domain::pipeline::traits::{ArtworkProvider, PipelineError, Result};
use crate::domain::pipeline::types::{ArtworkImage, EpisodeArtwork};

pub struct SpotifyArtworkProvider {
    client: CatalogClient,
}

impl SpotifyArtworkProvider {
    pub fn new(client: CatalogClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ArtworkProvider for SpotifyArtworkProvider {
    async fn batch_lookup(&self, ids: &[String]) -> Result<HashMap<String, EpisodeArtwork>> {
        let entries = self.client.episodes(ids).await.map_err(|e| match e {
            CatalogFetchError::Unauthorized => {
                PipelineError::CatalogUnavailable("unauthorized".to_string())
            }
            other => PipelineError::CatalogUnavailable(other.to_string()),
        })?;

        // Null entries mark ids the catalog could not resolve; dropping
        // them here turns them into plain absences for the enricher.
        Ok(entries
            .into_iter()
            .flatten()
            .map(|episode| {
                let images = episode
                    .images
                    .into_iter()
                    .map(|image| ArtworkImage { url: image.url })
                    .collect();
                (episode.id, EpisodeArtwork { images })
            })
            .collect())
    }
}

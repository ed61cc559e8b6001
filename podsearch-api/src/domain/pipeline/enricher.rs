//! Artwork enrichment via the external episode catalog.

use itertools::Itertools;

use super::traits::{ArtworkProvider, Result};
use super::types::{EpisodeArtwork, EpisodeAggregate};

/// Attach artwork to aggregates with a single batched catalog lookup.
///
/// The id batch is the unique set of episode ids in encounter order, so
/// the number of round-trips stays at one per request regardless of hit
/// count. Ids the catalog does not resolve leave their aggregates
/// untouched; only a failure of the batch call itself is an error.
pub async fn enrich<A>(episodes: &mut [EpisodeAggregate], artwork: &A) -> Result<()>
where
    A: ArtworkProvider + ?Sized,
{
    if episodes.is_empty() {
        return Ok(());
    }

    let ids: Vec<String> = episodes
        .iter()
        .map(|episode| episode.episode_id.clone())
        .unique()
        .collect();

    let resolved = artwork.batch_lookup(&ids).await?;

    for episode in episodes.iter_mut() {
        if let Some(art) = resolved.get(&episode.episode_id) {
            episode.picture_uri = medium_image(art);
        }
    }

    Ok(())
}

/// Medium rendition: the second entry of the largest-first image list,
/// falling back to the only rendition when the catalog has just one.
fn medium_image(artwork: &EpisodeArtwork) -> Option<String> {
    artwork
        .images
        .get(1)
        .or_else(|| artwork.images.first())
        .map(|image| image.url.clone())
}

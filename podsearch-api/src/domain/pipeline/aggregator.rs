//! Grouping of ranked hits into per-episode aggregates.

use std::collections::HashMap;

use super::metadata::MetadataStore;
use super::traits::{PipelineError, Result};
use super::types::{EpisodeAggregate, Hit, Snippet};

/// Group hits into one aggregate per distinct episode.
///
/// Hits are consumed in the order received and never re-sorted, so the
/// output order is the order each episode id was first seen; for a
/// relevance-ranked input that puts the episode with the best hit first.
/// Metadata is joined exactly once, when the aggregate is created.
/// Duplicate hits are kept as separate snippets.
///
/// A hit whose episode id is absent from the metadata table fails the
/// whole request; every downstream field depends on the join.
pub fn aggregate(hits: Vec<Hit>, metadata: &MetadataStore) -> Result<Vec<EpisodeAggregate>> {
    let mut episodes: Vec<EpisodeAggregate> = Vec::new();
    let mut by_id: HashMap<String, usize> = HashMap::new();

    for hit in hits {
        let slot = match by_id.get(&hit.episode_id) {
            Some(&slot) => slot,
            None => {
                let record = metadata
                    .lookup(&hit.episode_id)
                    .ok_or_else(|| PipelineError::MetadataMissing(hit.episode_id.clone()))?;
                episodes.push(EpisodeAggregate::new(&hit, record));
                by_id.insert(hit.episode_id.clone(), episodes.len() - 1);
                episodes.len() - 1
            }
        };
        episodes[slot].snippets.push(Snippet::from(hit));
    }

    Ok(episodes)
}

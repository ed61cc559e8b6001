//! Projection of the canonical aggregates into the wire contract.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::types::{EpisodeAggregate, Snippet};

/// Wire shape the formatter projects into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseShape {
    /// Flat list of enriched episodes (canonical contract)
    #[default]
    Episodes,
    /// Legacy two-level show list plus the parallel flat result list
    Shows,
}

/// A formatted search response in one of the two supported shapes.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum SearchResponse {
    Episodes(EpisodeListResponse),
    Shows(ShowListResponse),
}

#[derive(Debug, Clone, Serialize)]
pub struct EpisodeListResponse {
    pub episodes: Vec<EpisodeAggregate>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShowListResponse {
    pub shows: Vec<ShowGroup>,
    pub unformatted_results: Vec<FlatResult>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShowGroup {
    pub show_id: String,
    pub show_name: String,
    pub show_description: String,
    pub publisher: String,
    pub episodes: Vec<ShowEpisode>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShowEpisode {
    pub episode_id: String,
    pub episode_name: String,
    pub episode_description: String,
    pub language: String,
    pub rss_link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture_uri: Option<String>,
    pub transcript_snippets: Vec<Snippet>,
}

/// One snippet with its full show and episode context repeated.
#[derive(Debug, Clone, Serialize)]
pub struct FlatResult {
    pub show_id: String,
    pub episode_id: String,
    pub transcript_text: String,
    pub start_time: f64,
    pub end_time: f64,
    pub score: f64,
    pub episode_name: String,
    pub episode_description: String,
    pub language: String,
    pub rss_link: String,
    pub show_name: String,
    pub show_description: String,
    pub publisher: String,
}

/// Project aggregates into the configured wire shape.
///
/// Encounter order of shows, of episodes within a show, and of snippets
/// within an episode is preserved; nothing is filtered or re-ranked.
pub fn format(episodes: Vec<EpisodeAggregate>, shape: ResponseShape) -> SearchResponse {
    match shape {
        ResponseShape::Episodes => SearchResponse::Episodes(EpisodeListResponse { episodes }),
        ResponseShape::Shows => SearchResponse::Shows(project_shows(episodes)),
    }
}

fn project_shows(episodes: Vec<EpisodeAggregate>) -> ShowListResponse {
    let mut shows: Vec<ShowGroup> = Vec::new();
    let mut by_show: HashMap<String, usize> = HashMap::new();
    let mut unformatted_results = Vec::new();

    for episode in episodes {
        let slot = match by_show.get(&episode.show_id) {
            Some(&slot) => slot,
            None => {
                shows.push(ShowGroup {
                    show_id: episode.show_id.clone(),
                    show_name: episode.show_name.clone(),
                    show_description: episode.show_description.clone(),
                    publisher: episode.publisher.clone(),
                    episodes: Vec::new(),
                });
                by_show.insert(episode.show_id.clone(), shows.len() - 1);
                shows.len() - 1
            }
        };

        for snippet in &episode.snippets {
            unformatted_results.push(FlatResult {
                show_id: episode.show_id.clone(),
                episode_id: episode.episode_id.clone(),
                transcript_text: snippet.transcript_text.clone(),
                start_time: snippet.start_time,
                end_time: snippet.end_time,
                score: snippet.relevance_score,
                episode_name: episode.episode_name.clone(),
                episode_description: episode.episode_description.clone(),
                language: episode.language.clone(),
                rss_link: episode.rss_link.clone(),
                show_name: episode.show_name.clone(),
                show_description: episode.show_description.clone(),
                publisher: episode.publisher.clone(),
            });
        }

        shows[slot].episodes.push(ShowEpisode {
            episode_id: episode.episode_id,
            episode_name: episode.episode_name,
            episode_description: episode.episode_description,
            language: episode.language,
            rss_link: episode.rss_link,
            picture_uri: episode.picture_uri,
            transcript_snippets: episode.snippets,
        });
    }

    ShowListResponse {
        shows,
        unformatted_results,
    }
}

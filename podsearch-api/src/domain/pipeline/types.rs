//! Core types for the search pipeline.

use serde::Serialize;

/// One scored transcript fragment from the search provider.
#[derive(Debug, Clone)]
pub struct Hit {
    pub show_id: String,
    pub episode_id: String,
    pub transcript_text: String,
    /// Offset of the fragment within the episode, in seconds
    pub start_time: f64,
    pub end_time: f64,
    pub relevance_score: f64,
}

impl From<transcript_search::TranscriptHit> for Hit {
    fn from(hit: transcript_search::TranscriptHit) -> Self {
        Self {
            show_id: hit.show_id,
            episode_id: hit.episode_id,
            transcript_text: hit.transcript_text,
            start_time: hit.start_time,
            end_time: hit.end_time,
            relevance_score: hit.relevance_score,
        }
    }
}

/// Structured search request produced by the query translator.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub filter: MatchFilter,
    /// Result-size cap forwarded to the engine
    pub size: usize,
}

/// Single-field match clause. Opaque to the pipeline; interpreted by the
/// hit provider.
#[derive(Debug, Clone)]
pub struct MatchFilter {
    pub field: String,
    pub value: String,
}

/// One metadata row, keyed externally by episode id.
///
/// Built once at startup from the delimited source and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataRecord {
    pub show_name: String,
    pub show_description: String,
    pub publisher: String,
    pub language: String,
    pub rss_link: String,
    pub episode_uri: String,
    pub episode_name: String,
    pub episode_description: String,
}

/// One transcript snippet inside an episode.
#[derive(Debug, Clone, Serialize)]
pub struct Snippet {
    pub transcript_text: String,
    pub start_time: f64,
    pub end_time: f64,
    #[serde(rename = "score")]
    pub relevance_score: f64,
}

impl From<Hit> for Snippet {
    fn from(hit: Hit) -> Self {
        Self {
            transcript_text: hit.transcript_text,
            start_time: hit.start_time,
            end_time: hit.end_time,
            relevance_score: hit.relevance_score,
        }
    }
}

/// Canonical aggregate: one entry per distinct episode, snippets in the
/// order their hits arrived.
///
/// Created the first time an episode id is seen among the hits; later hits
/// for the same id only append to `snippets`. `picture_uri` stays `None`
/// until the enricher resolves it.
#[derive(Debug, Clone, Serialize)]
pub struct EpisodeAggregate {
    pub show_id: String,
    pub episode_id: String,
    pub show_name: String,
    pub show_description: String,
    pub publisher: String,
    pub episode_name: String,
    pub episode_description: String,
    pub language: String,
    pub rss_link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture_uri: Option<String>,
    pub snippets: Vec<Snippet>,
}

impl EpisodeAggregate {
    pub(crate) fn new(hit: &Hit, record: &MetadataRecord) -> Self {
        Self {
            show_id: hit.show_id.clone(),
            episode_id: hit.episode_id.clone(),
            show_name: record.show_name.clone(),
            show_description: record.show_description.clone(),
            publisher: record.publisher.clone(),
            episode_name: record.episode_name.clone(),
            episode_description: record.episode_description.clone(),
            language: record.language.clone(),
            rss_link: record.rss_link.clone(),
            picture_uri: None,
            snippets: Vec::new(),
        }
    }
}

/// Artwork for one episode as resolved by the catalog.
#[derive(Debug, Clone, Default)]
pub struct EpisodeArtwork {
    /// Renditions ordered largest-first
    pub images: Vec<ArtworkImage>,
}

#[derive(Debug, Clone)]
pub struct ArtworkImage {
    pub url: String,
}

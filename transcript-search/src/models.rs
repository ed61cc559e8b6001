use serde::Deserialize;

/// One scored transcript fragment, in the order the engine ranked it.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptHit {
    pub show_id: String,
    pub episode_id: String,
    pub transcript_text: String,
    pub start_time: f64,
    pub end_time: f64,
    pub relevance_score: f64,
}

/// Top-level `_search` response envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    pub hits: HitsEnvelope,
}

#[derive(Debug, Deserialize)]
pub(crate) struct HitsEnvelope {
    pub hits: Vec<HitEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct HitEntry {
    #[serde(rename = "_score")]
    pub score: f64,
    #[serde(rename = "_source")]
    pub source: HitSource,
}

/// The projected document fields requested via `_source.includes`.
#[derive(Debug, Deserialize)]
pub(crate) struct HitSource {
    pub show_id: String,
    pub episode_id: String,
    pub transcript_text: String,
    pub start_time: f64,
    pub end_time: f64,
}

impl From<HitEntry> for TranscriptHit {
    fn from(entry: HitEntry) -> Self {
        Self {
            show_id: entry.source.show_id,
            episode_id: entry.source.episode_id,
            transcript_text: entry.source.transcript_text,
            start_time: entry.source.start_time,
            end_time: entry.source.end_time,
            relevance_score: entry.score,
        }
    }
}

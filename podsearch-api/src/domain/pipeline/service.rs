//! Search service running the full request-scoped pipeline pass.

use std::sync::Arc;

use super::aggregator::aggregate;
use super::enricher::enrich;
use super::formatter::{format, ResponseShape, SearchResponse};
use super::metadata::MetadataStore;
use super::traits::{ArtworkProvider, HitProvider, PipelineError, Result};
use super::translator::QueryTranslator;

/// Configuration for the search service.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Result-size cap forwarded to the search provider
    pub result_size: usize,
    /// Wire shape the formatter projects into
    pub response_shape: ResponseShape,
    /// Ship unenriched results instead of failing the request when the
    /// catalog batch call cannot be completed
    pub degrade_without_artwork: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            result_size: 10,
            response_shape: ResponseShape::Episodes,
            degrade_without_artwork: false,
        }
    }
}

/// One query, one linear pass: translate → search → aggregate → enrich →
/// format. No state survives the request.
///
/// # Type Parameters
///
/// * `P` - ranked-hit provider over the transcript index
/// * `A` - batched artwork lookup against the episode catalog
pub struct SearchService<P, A>
where
    P: HitProvider,
    A: ArtworkProvider,
{
    translator: QueryTranslator,
    hits: P,
    artwork: A,
    metadata: Arc<MetadataStore>,
    config: ServiceConfig,
}

impl<P, A> SearchService<P, A>
where
    P: HitProvider,
    A: ArtworkProvider,
{
    pub fn new(hits: P, artwork: A, metadata: Arc<MetadataStore>, config: ServiceConfig) -> Self {
        Self {
            translator: QueryTranslator::new(config.result_size),
            hits,
            artwork,
            metadata,
            config,
        }
    }

    /// Create a search service with default configuration.
    #[allow(dead_code)]
    pub fn with_defaults(hits: P, artwork: A, metadata: Arc<MetadataStore>) -> Self {
        Self::new(hits, artwork, metadata, ServiceConfig::default())
    }

    /// Execute a search query.
    ///
    /// An empty (or all-whitespace) query is rejected before any
    /// collaborator is called. A query that matches nothing returns an
    /// empty result list, not an error.
    pub async fn search(&self, query: &str) -> Result<SearchResponse> {
        let query = query.trim();
        if query.is_empty() {
            return Err(PipelineError::EmptyQuery);
        }

        let request = self.translator.translate(query);
        let hits = self.hits.search(&request).await?;
        tracing::debug!(hits = hits.len(), "search provider answered");

        let mut episodes = aggregate(hits, &self.metadata)?;

        match enrich(&mut episodes, &self.artwork).await {
            Ok(()) => {}
            Err(err @ PipelineError::CatalogUnavailable(_))
                if self.config.degrade_without_artwork =>
            {
                tracing::warn!(error = %err, "catalog unavailable, serving results without artwork");
            }
            Err(err) => return Err(err),
        }

        Ok(format(episodes, self.config.response_shape))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pipeline::artwork::MockArtworkProvider;
    use crate::domain::pipeline::provider::MockHitProvider;
    use crate::domain::pipeline::types::Hit;

    fn metadata() -> Arc<MetadataStore> {
        let table = "\
Show A\tAbout A\tPub A\ten\thttps://rss.a\tspotify:episode:1\tEp One\tFirst\tep_1
Show A\tAbout A\tPub A\ten\thttps://rss.a\tspotify:episode:2\tEp Two\tSecond\tep_2
Show B\tAbout B\tPub B\tsv\thttps://rss.b\tspotify:episode:3\tEp Three\tThird\tep_3
";
        Arc::new(MetadataStore::from_reader(table.as_bytes()).unwrap())
    }

    fn hit(show_id: &str, episode_id: &str, score: f64) -> Hit {
        Hit {
            show_id: show_id.to_string(),
            episode_id: episode_id.to_string(),
            transcript_text: format!("snippet at {score}"),
            start_time: 5.0,
            end_time: 35.0,
            relevance_score: score,
        }
    }

    fn episodes_of(response: SearchResponse) -> Vec<crate::domain::pipeline::types::EpisodeAggregate> {
        match response {
            SearchResponse::Episodes(body) => body.episodes,
            SearchResponse::Shows(_) => panic!("expected episodes shape"),
        }
    }

    #[tokio::test]
    async fn empty_query_is_rejected_before_searching() {
        let hits = MockHitProvider::new();
        let service =
            SearchService::with_defaults(hits.clone(), MockArtworkProvider::new(), metadata());

        let err = service.search("   ").await.unwrap_err();
        assert!(matches!(err, PipelineError::EmptyQuery));
        assert!(hits.requests().is_empty());
    }

    #[tokio::test]
    async fn zero_hits_return_an_empty_list() {
        let service = SearchService::with_defaults(
            MockHitProvider::new(),
            MockArtworkProvider::new(),
            metadata(),
        );

        let episodes = episodes_of(service.search("nothing matches").await.unwrap());
        assert!(episodes.is_empty());
    }

    #[tokio::test]
    async fn query_is_translated_with_the_configured_size() {
        let hits = MockHitProvider::new();
        let config = ServiceConfig {
            result_size: 25,
            ..ServiceConfig::default()
        };
        let service =
            SearchService::new(hits.clone(), MockArtworkProvider::new(), metadata(), config);

        service.search("  ice cream  ").await.unwrap();

        let requests = hits.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].filter.value, "ice cream");
        assert_eq!(requests[0].size, 25);
    }

    #[tokio::test]
    async fn interleaved_hits_group_without_resorting() {
        let provider = MockHitProvider::new().with_hits(vec![
            hit("show_a", "ep_1", 0.9),
            hit("show_a", "ep_2", 0.8),
            hit("show_a", "ep_1", 0.7),
        ]);
        let service =
            SearchService::with_defaults(provider, MockArtworkProvider::new(), metadata());

        let episodes = episodes_of(service.search("q").await.unwrap());

        assert_eq!(episodes.len(), 2);
        assert_eq!(episodes[0].episode_id, "ep_1");
        assert_eq!(episodes[0].snippets.len(), 2);
        assert_eq!(episodes[0].snippets[0].relevance_score, 0.9);
        assert_eq!(episodes[0].snippets[1].relevance_score, 0.7);
        assert_eq!(episodes[1].episode_id, "ep_2");
        assert_eq!(episodes[1].snippets.len(), 1);
    }

    #[tokio::test]
    async fn catalog_is_called_once_with_unique_ids() {
        let provider = MockHitProvider::new().with_hits(vec![
            hit("show_a", "ep_1", 0.9),
            hit("show_a", "ep_2", 0.8),
            hit("show_a", "ep_1", 0.7),
            hit("show_b", "ep_3", 0.6),
            hit("show_a", "ep_2", 0.5),
        ]);
        let artwork = MockArtworkProvider::new();
        let service = SearchService::with_defaults(provider, artwork.clone(), metadata());

        service.search("q").await.unwrap();

        assert_eq!(artwork.call_count(), 1);
        assert_eq!(artwork.batches(), vec![vec!["ep_1", "ep_2", "ep_3"]]);
    }

    #[tokio::test]
    async fn artwork_is_attached_where_resolved() {
        let provider = MockHitProvider::new()
            .with_hits(vec![hit("show_a", "ep_1", 0.9), hit("show_a", "ep_2", 0.8)]);
        let artwork = MockArtworkProvider::new()
            .with_images("ep_1", ["https://img/640.jpg", "https://img/300.jpg"]);
        let service = SearchService::with_defaults(provider, artwork, metadata());

        let episodes = episodes_of(service.search("q").await.unwrap());

        assert_eq!(
            episodes[0].picture_uri.as_deref(),
            Some("https://img/300.jpg")
        );
        assert!(episodes[1].picture_uri.is_none());
    }

    #[tokio::test]
    async fn unknown_episode_id_fails_the_request() {
        let provider = MockHitProvider::new().with_hits(vec![hit("show_x", "ep_404", 0.9)]);
        let service =
            SearchService::with_defaults(provider, MockArtworkProvider::new(), metadata());

        let err = service.search("q").await.unwrap_err();
        assert!(matches!(err, PipelineError::MetadataMissing(id) if id == "ep_404"));
    }

    #[tokio::test]
    async fn search_provider_failure_propagates() {
        let provider = MockHitProvider::failing("engine down");
        let service =
            SearchService::with_defaults(provider, MockArtworkProvider::new(), metadata());

        let err = service.search("q").await.unwrap_err();
        assert!(matches!(err, PipelineError::SearchUnavailable(_)));
    }

    #[tokio::test]
    async fn catalog_failure_fails_the_request_by_default() {
        let provider = MockHitProvider::new().with_hits(vec![hit("show_a", "ep_1", 0.9)]);
        let artwork = MockArtworkProvider::failing("connection refused");
        let service = SearchService::with_defaults(provider, artwork, metadata());

        let err = service.search("q").await.unwrap_err();
        assert!(matches!(err, PipelineError::CatalogUnavailable(_)));
    }

    #[tokio::test]
    async fn catalog_failure_degrades_when_configured() {
        let provider = MockHitProvider::new().with_hits(vec![hit("show_a", "ep_1", 0.9)]);
        let artwork = MockArtworkProvider::failing("connection refused");
        let config = ServiceConfig {
            degrade_without_artwork: true,
            ..ServiceConfig::default()
        };
        let service = SearchService::new(provider, artwork, metadata(), config);

        let episodes = episodes_of(service.search("q").await.unwrap());

        assert_eq!(episodes.len(), 1);
        assert!(episodes[0].picture_uri.is_none());
    }

    #[tokio::test]
    async fn shows_shape_is_projected_when_configured() {
        let provider = MockHitProvider::new()
            .with_hits(vec![hit("show_a", "ep_1", 0.9), hit("show_b", "ep_3", 0.8)]);
        let config = ServiceConfig {
            response_shape: ResponseShape::Shows,
            ..ServiceConfig::default()
        };
        let service =
            SearchService::new(provider, MockArtworkProvider::new(), metadata(), config);

        let response = service.search("q").await.unwrap();
        let SearchResponse::Shows(body) = response else {
            panic!("expected shows shape");
        };

        assert_eq!(body.shows.len(), 2);
        assert_eq!(body.shows[0].show_id, "show_a");
        assert_eq!(body.unformatted_results.len(), 2);
    }
}

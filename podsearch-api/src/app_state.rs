use std::sync::Arc;

use episode_catalog::CatalogClient;
use transcript_search::{Credentials, SearchClient};

use crate::config::Settings;
use crate::domain::pipeline::{
    artwork::SpotifyArtworkProvider, provider::ElasticHitProvider, MetadataStore, SearchService,
    ServiceConfig,
};

pub type AppSearchService = SearchService<ElasticHitProvider, SpotifyArtworkProvider>;

#[derive(Clone)]
pub struct AppState {
    search_service: Arc<AppSearchService>,
}

impl AppState {
    pub fn new(config: &Settings, metadata: MetadataStore) -> Self {
        let search_client = SearchClient::new(
            config.search.base_url.clone(),
            Credentials::new(
                config.search.username.clone(),
                config.search.password.clone(),
            ),
        );
        let hits = ElasticHitProvider::new(search_client, config.search.index.clone());

        let catalog_client = CatalogClient::new(
            config.catalog.base_url.clone(),
            config.catalog.access_token.clone(),
        );
        let artwork = SpotifyArtworkProvider::new(catalog_client);

        let service_config = ServiceConfig {
            result_size: config.search.result_size,
            response_shape: config.pipeline.response_shape,
            degrade_without_artwork: config.pipeline.degrade_without_artwork,
        };

        Self {
            search_service: Arc::new(SearchService::new(
                hits,
                artwork,
                Arc::new(metadata),
                service_config,
            )),
        }
    }

    pub fn search_service(&self) -> &AppSearchService {
        &self.search_service
    }
}

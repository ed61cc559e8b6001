use thiserror::Error;

use crate::models::EpisodesResponse;
use crate::CatalogEpisode;

/// Client for the external episode catalog's batch lookup endpoint.
///
/// The bearer token is handed in ready to use; acquiring and refreshing it
/// is the caller's concern.
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            access_token: access_token.into(),
        }
    }

    /// Look up a batch of episode ids in a single request.
    ///
    /// The returned list is aligned with `ids`: `None` marks an id the
    /// catalog answered with an explicit `null`.
    pub async fn episodes(
        &self,
        ids: &[String],
    ) -> Result<Vec<Option<CatalogEpisode>>, CatalogFetchError> {
        let url = format!("{}/episodes", self.base_url.trim_end_matches('/'));
        tracing::debug!(batch_size = ids.len(), "fetching catalog episodes");

        let resp = self
            .http
            .get(&url)
            .query(&[("ids", ids.join(","))])
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(|e| CatalogFetchError::ResponseError(e.to_string()))?;

        if resp.status() == 401 || resp.status() == 403 {
            return Err(CatalogFetchError::Unauthorized);
        }
        if !resp.status().is_success() {
            return Err(CatalogFetchError::ResponseError(format!(
                "catalog answered with status {}",
                resp.status()
            )));
        }

        let response = resp.json::<EpisodesResponse>().await.map_err(|e| {
            CatalogFetchError::ParsingError(format!("Failed to parse response as JSON: {}", e))
        })?;

        Ok(response.episodes)
    }
}

#[derive(Error, Debug)]
pub enum CatalogFetchError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("ResponseError: {0}")]
    ResponseError(String),
    #[error("ParsingError: {0}")]
    ParsingError(String),
}

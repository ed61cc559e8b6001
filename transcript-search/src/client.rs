use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{SearchResponse, TranscriptHit};
use crate::SearchQuery;

/// Basic-auth credentials for the search engine.
#[derive(Debug, Clone)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

pub struct SearchClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Credentials,
}

impl SearchClient {
    pub fn new(base_url: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            credentials,
        }
    }

    async fn post<T: DeserializeOwned>(
        &self,
        url: impl AsRef<str>,
        body: &serde_json::Value,
    ) -> Result<T, SearchFetchError> {
        let resp = self
            .http
            .post(url.as_ref())
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .json(body)
            .send()
            .await
            .map_err(|e| SearchFetchError::ResponseError(e.to_string()))?;

        if resp.status() == 401 || resp.status() == 403 {
            return Err(SearchFetchError::Unauthorized);
        }
        if !resp.status().is_success() {
            return Err(SearchFetchError::ResponseError(format!(
                "search engine answered with status {}",
                resp.status()
            )));
        }

        let resp_data = resp.json::<T>().await.map_err(|e| {
            SearchFetchError::ParsingError(format!("Failed to parse response as JSON: {}", e))
        })?;

        Ok(resp_data)
    }

    /// Execute the query against `index`, returning hits in engine order
    /// (relevance-descending).
    pub async fn search(
        &self,
        index: &str,
        query: &SearchQuery,
    ) -> Result<Vec<TranscriptHit>, SearchFetchError> {
        let url = format!("{}/{}/_search", self.base_url.trim_end_matches('/'), index);
        tracing::debug!(%url, "executing transcript search");

        let response: SearchResponse = self.post(&url, &query.body()).await?;

        Ok(response.hits.hits.into_iter().map(TranscriptHit::from).collect())
    }
}

#[derive(Error, Debug)]
pub enum SearchFetchError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("ResponseError: {0}")]
    ResponseError(String),
    #[error("ParsingError: {0}")]
    ParsingError(String),
}

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::instrument;

use crate::{app_state::AppState, domain::pipeline::SearchResponse, routes::ApiError};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(search))
}

#[derive(Debug, Clone, Deserialize)]
struct SearchParams {
    #[serde(default)]
    q: String,
}

#[instrument(name = "GET /search", skip(app_state))]
async fn search(
    State(app_state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    let response = app_state.search_service().search(&params.q).await?;

    Ok(Json(response))
}

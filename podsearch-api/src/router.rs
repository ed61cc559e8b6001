use axum::{http::Method, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::{app_state::AppState, config::Settings, domain::pipeline::MetadataStore, routes};

pub fn create(config: &Settings, metadata: MetadataStore) -> Router<()> {
    let app_state = AppState::new(config, metadata);

    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_origin(Any);

    Router::new()
        .route("/", get(|| async { "podsearch api" }))
        .nest("/search", routes::search::router())
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}

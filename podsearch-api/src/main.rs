mod app_state;
mod config;
mod domain;
mod router;
mod routes;

use crate::config::read_config;
use crate::domain::pipeline::MetadataStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "podsearch_api=debug,tower_http=debug".into()),
        )
        .init();

    let config = read_config()?;

    let metadata = MetadataStore::load(&config.metadata.path)?;
    tracing::info!(episodes = metadata.len(), "metadata table loaded");

    let address = format!("{}:{}", config.application.host, config.application.port);
    let app = router::create(&config, metadata);

    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!("listening on {}", address);
    axum::serve(listener, app).await?;

    Ok(())
}

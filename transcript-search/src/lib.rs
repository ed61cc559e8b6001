mod client;
mod models;
mod query;

pub use client::*;
pub use models::TranscriptHit;
pub use query::SearchQuery;

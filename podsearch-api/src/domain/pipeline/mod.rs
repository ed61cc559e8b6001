//! Transcript search pipeline - grouping, metadata join and artwork enrichment.
//!
//! One request runs a single linear pass:
//!
//! `query text → translate → search → aggregate → enrich → format`
//!
//! The pipeline is built around trait abstractions for testability:
//!
//! - [`HitProvider`] - ranked transcript hits (search engine, mocks)
//! - [`ArtworkProvider`] - batched artwork lookup (episode catalog, mocks)
//!
//! The [`MetadataStore`] is loaded once at startup and joined against by
//! episode id while aggregating; it is never mutated afterwards, so it is
//! shared freely between concurrent requests. Everything else is
//! request-local.
//!
//! # Example
//!
//! ```ignore
//! use crate::domain::pipeline::{MetadataStore, SearchService, ServiceConfig};
//!
//! let metadata = Arc::new(MetadataStore::load("data/metadata.tsv")?);
//! let service = SearchService::new(hits, artwork, metadata, ServiceConfig::default());
//!
//! let response = service.search("ice cream").await?;
//! ```

mod aggregator;
mod enricher;
mod formatter;
mod metadata;
mod service;
mod traits;
mod translator;
mod types;

pub mod artwork;
pub mod provider;

// Re-export main types
pub use formatter::{ResponseShape, SearchResponse};
pub use metadata::{MetadataLoadError, MetadataStore};
pub use service::{SearchService, ServiceConfig};
pub use traits::{ArtworkProvider, HitProvider, PipelineError};
pub use types::Hit;

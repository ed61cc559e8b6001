//! Ranked-hit provider implementations.

mod elastic;
#[cfg(test)]
mod mock;

pub use elastic::ElasticHitProvider;
#[cfg(test)]
pub use mock::MockHitProvider;

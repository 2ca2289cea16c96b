//! The remote article source boundary: wire types, normalization, the HTTP
//! client, and the built-in fallback dataset.

pub mod client;
pub mod fallback;
pub mod normalize;
pub mod payload;

pub use client::{ApiError, NewsClient, DEFAULT_BASE_URL};
pub use fallback::{fallback_articles, FALLBACK_DELAY_MS};
pub use normalize::normalize;

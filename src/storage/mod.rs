//! Persistence layer: a small SQLite-backed key-value store.

mod db;

pub use db::{Database, DatabaseError};

/// Preference key for the theme variant (`"light"` | `"dark"`).
pub const THEME_KEY: &str = "theme";
/// Preference key for the serialized saved-article set (JSON array).
pub const SAVED_ARTICLES_KEY: &str = "saved.articles";

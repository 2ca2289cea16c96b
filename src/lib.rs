//! runway is a terminal reader for NYT Top Stories with category filtering,
//! keyword search, saved articles, and light/dark themes.
//!
//! When no API key is configured the app runs in demo mode against a small
//! built-in dataset, and the same dataset substitutes for failed fetches so
//! the view is never empty.

pub mod app;
pub mod article;
pub mod category;
pub mod config;
pub mod filter;
pub mod saved;
pub mod source;
pub mod storage;
pub mod store;
pub mod theme;
pub mod ui;
pub mod util;

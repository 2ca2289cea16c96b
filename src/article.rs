//! The canonical article record.
//!
//! Every article in the app goes through the normalizer
//! ([`crate::source::normalize`]) before it reaches this type, so all required
//! fields are guaranteed non-empty. The serde derives exist for the saved-set
//! round trip: the whole saved set is serialized as a JSON array under one
//! preference key.

use serde::{Deserialize, Serialize};

/// A normalized news article.
///
/// Immutable once created. `author_image_url` is the only optional field —
/// rendering treats its absence as "use an initials avatar", not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Source URI, or a positional `article-{n}` fallback unique within one fetch.
    pub id: String,
    pub title: String,
    /// Article summary. Named for the remote payload's `abstract` field,
    /// which is a reserved word in Rust.
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub byline: String,
    /// The remote source's topical grouping (e.g. "Fashion", "Arts").
    pub section: String,
    /// Date-only ISO string (`YYYY-MM-DD`), no time portion.
    pub published_date: String,
    /// Link to the full story; `"#"` when no real URL exists.
    pub url: String,
    /// Lead image URL, or a descriptive placeholder phrase when the source
    /// had no media. Never empty.
    pub image_url: String,
    /// Secondary thumbnail for the byline avatar, when the source had one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_image_url: Option<String>,
}

impl Article {
    /// Whether this article carries a real link (`Enter` opens the browser).
    pub fn has_real_url(&self) -> bool {
        !self.url.is_empty() && self.url != "#"
    }
}

//! The article normalizer: raw heterogeneous payload → canonical [`Article`].
//!
//! A pure transform over already-fetched data — no network access, no
//! retries. Entries with neither a title nor an abstract are dropped as
//! unusable; everything else is defaulted field by field so the invariant
//! "every produced Article has all required fields non-empty" holds even for
//! badly partial payloads.

use chrono::Utc;

use super::payload::{RawMedia, RawStory};
use crate::article::Article;

// Fallback values for missing source fields.
pub const FALLBACK_TITLE: &str = "Untitled";
pub const FALLBACK_ABSTRACT: &str = "No description available";
pub const FALLBACK_BYLINE: &str = "NY Times Staff";
pub const FALLBACK_SECTION: &str = "Fashion";
/// Descriptive placeholder phrase used when a story has no usable image.
/// Not a URL — the renderer treats it as alt text.
pub const PLACEHOLDER_IMAGE: &str = "fashion sustainable luxury";
/// Sentinel for a missing story link.
pub const URL_SENTINEL: &str = "#";
/// Prefix for synthetic ids assigned to stories without a source URI.
const SYNTHETIC_ID_PREFIX: &str = "article-";

/// Image formats preferred for the lead image, in priority order.
const LEAD_IMAGE_FORMATS: [&str; 2] = ["threeByTwoSmallAt2X", "superJumbo"];
/// Smaller formats used for the byline avatar thumbnail.
const THUMBNAIL_FORMATS: [&str; 2] = ["thumbLarge", "mediumThreeByTwo210"];

/// Normalize a raw result batch into canonical articles.
///
/// Synthetic ids are unique within this batch only; a later fetch restarts
/// the positional counter.
pub fn normalize(results: Vec<RawStory>) -> Vec<Article> {
    let total = results.len();
    let articles: Vec<Article> = results
        .into_iter()
        .filter(usable)
        .enumerate()
        .map(|(index, raw)| normalize_one(raw, index))
        .collect();

    if articles.len() < total {
        tracing::debug!(
            dropped = total - articles.len(),
            kept = articles.len(),
            "Dropped entries with neither title nor abstract"
        );
    }
    articles
}

/// Hard filter: an entry with neither title nor abstract is unusable.
/// Empty strings count as absent.
fn usable(raw: &RawStory) -> bool {
    let has_title = raw.title.as_deref().is_some_and(|s| !s.is_empty());
    let has_abstract = raw.abstract_text.as_deref().is_some_and(|s| !s.is_empty());
    has_title || has_abstract
}

fn normalize_one(raw: RawStory, index: usize) -> Article {
    let media = raw.multimedia.unwrap_or_default();
    let (image_url, author_image_url) = select_images(&media);

    Article {
        id: non_empty(raw.uri).unwrap_or_else(|| format!("{SYNTHETIC_ID_PREFIX}{index}")),
        title: non_empty(raw.title).unwrap_or_else(|| FALLBACK_TITLE.to_string()),
        abstract_text: non_empty(raw.abstract_text)
            .unwrap_or_else(|| FALLBACK_ABSTRACT.to_string()),
        byline: non_empty(raw.byline).unwrap_or_else(|| FALLBACK_BYLINE.to_string()),
        section: non_empty(raw.section).unwrap_or_else(|| FALLBACK_SECTION.to_string()),
        published_date: date_portion(raw.published_date.as_deref()),
        url: non_empty(raw.url).unwrap_or_else(|| URL_SENTINEL.to_string()),
        image_url,
        author_image_url,
    }
}

/// Pick the lead image and avatar thumbnail from the multimedia list.
///
/// Lead image: first entry with a preferred format, else the first entry at
/// all; an entry without a URL falls through to the placeholder. The avatar
/// uses a different, smaller format and stays `None` when nothing matches.
fn select_images(media: &[RawMedia]) -> (String, Option<String>) {
    let lead = media
        .iter()
        .find(|m| has_format(m, &LEAD_IMAGE_FORMATS))
        .or_else(|| media.first())
        .and_then(|m| non_empty(m.url.clone()));

    let thumbnail = media
        .iter()
        .find(|m| has_format(m, &THUMBNAIL_FORMATS))
        .and_then(|m| non_empty(m.url.clone()));

    (lead.unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()), thumbnail)
}

fn has_format(media: &RawMedia, formats: &[&str]) -> bool {
    media
        .format
        .as_deref()
        .is_some_and(|f| formats.contains(&f))
}

/// Date-only portion of a source timestamp: text before the first `T`.
/// Missing or empty timestamps become the current date.
fn date_portion(timestamp: Option<&str>) -> String {
    match timestamp {
        Some(ts) if !ts.is_empty() => ts.split('T').next().unwrap_or(ts).to_string(),
        _ => Utc::now().format("%Y-%m-%d").to_string(),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

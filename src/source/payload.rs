//! Raw wire types for the Top Stories payload.
//!
//! Every field is optional: the remote payload is treated as untrusted and
//! shapeless, and the normalizer decides what to default and what to drop.
//! `multimedia` is `Option<Vec<..>>` because the API serializes it as an
//! explicit `null` for some stories.

use serde::Deserialize;

/// Top-level response body for `GET /{section}.json`.
#[derive(Debug, Deserialize)]
pub struct SectionPayload {
    #[serde(default)]
    pub results: Vec<RawStory>,
}

/// One story as the remote source sends it.
#[derive(Debug, Default, Deserialize)]
pub struct RawStory {
    pub title: Option<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    pub byline: Option<String>,
    pub section: Option<String>,
    pub published_date: Option<String>,
    pub url: Option<String>,
    pub uri: Option<String>,
    pub multimedia: Option<Vec<RawMedia>>,
}

/// One multimedia entry attached to a story.
#[derive(Debug, Default, Deserialize)]
pub struct RawMedia {
    pub format: Option<String>,
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_payload_parses() {
        let payload: SectionPayload = serde_json::from_str(r#"{"results": []}"#).unwrap();
        assert!(payload.results.is_empty());
    }

    #[test]
    fn missing_results_defaults_to_empty() {
        let payload: SectionPayload = serde_json::from_str(r#"{"status": "OK"}"#).unwrap();
        assert!(payload.results.is_empty());
    }

    #[test]
    fn null_multimedia_parses() {
        let json = r#"{"results": [{"title": "T", "multimedia": null}]}"#;
        let payload: SectionPayload = serde_json::from_str(json).unwrap();
        assert!(payload.results[0].multimedia.is_none());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let json = r#"{"results": [{"title": "T", "des_facet": ["x"], "item_type": "Article"}]}"#;
        let payload: SectionPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.results[0].title.as_deref(), Some("T"));
    }
}

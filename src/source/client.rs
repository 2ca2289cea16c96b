//! HTTP client for the Top Stories API.
//!
//! One request per invocation: no retry loop, no request de-duplication, no
//! client-level timeout (a hung request simply holds the loading state).
//! Races between overlapping fetches are handled above this layer with a
//! generation token on the spawned task.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use url::Url;

use super::normalize::normalize;
use super::payload::SectionPayload;
use crate::article::Article;

/// Default API endpoint for section requests.
pub const DEFAULT_BASE_URL: &str = "https://api.nytimes.com/svc/topstories/v2";

/// Errors from one section fetch.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx HTTP response, with the status text the server sent.
    #[error("API error: {code} {text}")]
    Status { code: u16, text: String },
    /// Network-level error (DNS, connection, TLS).
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// Response body was not a valid section payload.
    #[error("Invalid response body: {0}")]
    Decode(String),
    /// The configured base URL could not be parsed.
    #[error("Invalid API base URL: {0}")]
    BaseUrl(String),
}

/// Client for the remote article source.
#[derive(Clone)]
pub struct NewsClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: SecretString,
}

impl NewsClient {
    /// Build a client for the given endpoint.
    ///
    /// The API key travels as a query parameter and is never logged; holding
    /// it as a `SecretString` keeps it out of Debug output too.
    pub fn new(base_url: &str, api_key: SecretString) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url).map_err(|e| ApiError::BaseUrl(e.to_string()))?;
        let http = reqwest::Client::builder()
            .build()
            .map_err(ApiError::Network)?;
        Ok(Self {
            http,
            base_url,
            api_key,
        })
    }

    /// Fetch and normalize one topical section.
    pub async fn fetch_section(&self, section: &str) -> Result<Vec<Article>, ApiError> {
        let url = format!(
            "{}/{}.json",
            self.base_url.as_str().trim_end_matches('/'),
            section
        );
        tracing::debug!(section = section, "Fetching top stories");

        let response = self
            .http
            .get(&url)
            .query(&[("api-key", self.api_key.expose_secret())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                code: status.as_u16(),
                text: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let payload: SectionPayload = response.json().await.map_err(|e| {
            if e.is_decode() {
                ApiError::Decode(e.to_string())
            } else {
                ApiError::Network(e)
            }
        })?;

        let articles = normalize(payload.results);
        tracing::info!(
            section = section,
            articles = articles.len(),
            "Section fetch complete"
        );
        Ok(articles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = NewsClient::new("not a url", SecretString::from("key"));
        assert!(matches!(result, Err(ApiError::BaseUrl(_))));
    }

    #[test]
    fn status_error_formats_code_and_text() {
        let err = ApiError::Status {
            code: 500,
            text: "Internal Server Error".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 500 Internal Server Error");
    }
}

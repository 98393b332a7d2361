// src/services/source.rs

//! Dataset sources.
//!
//! A source answers exactly one question: give me the university list.
//! `HttpSource` asks the configured URL; `StaticSource` hands back records
//! (or a failure) it was built with.

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{AppError, Result};
use crate::models::{SourceConfig, University};
use crate::utils::http;

/// Trait for dataset providers.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Location reported in logs and on the loaded `Dataset`.
    fn location(&self) -> &str;

    /// Fetch and decode the full record list.
    async fn fetch_json(&self) -> Result<Vec<University>>;
}

/// Fetches the dataset over HTTP.
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    /// Create a source from configuration.
    pub fn new(config: &SourceConfig) -> Result<Self> {
        let client = http::create_async_client(config)?;
        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }

    /// Create a source against a custom URL (for testing with wiremock).
    pub fn with_url(config: &SourceConfig, url: impl Into<String>) -> Result<Self> {
        let client = http::create_async_client(config)?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl DataSource for HttpSource {
    fn location(&self) -> &str {
        &self.url
    }

    async fn fetch_json(&self) -> Result<Vec<University>> {
        http::fetch_json(&self.client, &self.url).await
    }
}

/// Serves a fixed outcome.
pub struct StaticSource {
    location: String,
    outcome: std::result::Result<Vec<University>, String>,
}

impl StaticSource {
    /// A source that always returns these records.
    pub fn new(location: impl Into<String>, records: Vec<University>) -> Self {
        Self {
            location: location.into(),
            outcome: Ok(records),
        }
    }

    /// A source that always fails with this message.
    pub fn failing(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            outcome: Err(message.into()),
        }
    }

    /// Read records from a local JSON file once, up front.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let records = University::load_all(path)?;
        Ok(Self::new(path.display().to_string(), records))
    }
}

#[async_trait]
impl DataSource for StaticSource {
    fn location(&self) -> &str {
        &self.location
    }

    async fn fetch_json(&self) -> Result<Vec<University>> {
        self.outcome
            .clone()
            .map_err(|message| AppError::fetch(&self.location, message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn universities_json() -> serde_json::Value {
        serde_json::json!([
            {
                "name": "University of Toronto",
                "country": "Canada",
                "domains": ["utoronto.ca"],
                "alpha_two_code": "CA",
                "web_pages": ["https://www.utoronto.ca/"],
                "state-province": "Ontario"
            },
            {
                "name": "Stanford University",
                "country": "United States",
                "domains": ["stanford.edu"],
                "alpha_two_code": "US",
                "web_pages": ["https://www.stanford.edu/"],
                "state-province": null
            }
        ])
    }

    fn source_for(server: &MockServer) -> HttpSource {
        let url = format!("{}/world_universities_and_domains.json", server.uri());
        HttpSource::with_url(&SourceConfig::default(), url).unwrap()
    }

    #[tokio::test]
    async fn test_http_source_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/world_universities_and_domains.json"))
            .and(header("user-agent", "Mozilla/5.0 (compatible; unidomains/0.1)"))
            .respond_with(ResponseTemplate::new(200).set_body_json(universities_json()))
            .expect(1)
            .mount(&server)
            .await;

        let records = source_for(&server).fetch_json().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "University of Toronto");
        assert_eq!(records[1].domains, vec!["stanford.edu"]);
        assert_eq!(records[0].extra["alpha_two_code"], "CA");
    }

    #[tokio::test]
    async fn test_http_source_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = source_for(&server).fetch_json().await.unwrap_err();
        assert!(matches!(err, AppError::Fetch { .. }), "got {err:?}");
    }

    #[tokio::test]
    async fn test_http_source_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&server)
            .await;

        let err = source_for(&server).fetch_json().await.unwrap_err();
        assert!(matches!(err, AppError::Json(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_static_source_failing() {
        let source = StaticSource::failing("memory", "boom");
        let err = source.fetch_json().await.unwrap_err();
        assert_eq!(err.to_string(), "Fetch error for memory: boom");
    }

    #[tokio::test]
    async fn test_static_source_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, universities_json().to_string()).unwrap();

        let source = StaticSource::from_file(&path).unwrap();
        assert_eq!(source.location(), path.display().to_string());
        assert_eq!(source.fetch_json().await.unwrap().len(), 2);
    }
}

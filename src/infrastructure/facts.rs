//! # Random Fact Client
//!
//! Implements the `FactSource` trait against a "useless facts" style HTTP endpoint
//! that answers a GET with a JSON object carrying a `text` field.

use crate::domain::config::FactsConfig;
use crate::domain::traits::FactSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Response body of the fact endpoint; other fields are ignored.
#[derive(Debug, Deserialize)]
struct FactResponse {
    text: String,
}

pub struct FactsClient {
    client: Client,
    url: String,
}

impl FactsClient {
    pub fn new(config: &FactsConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }
}

#[async_trait]
impl FactSource for FactsClient {
    async fn random_fact(&self) -> Result<String, String> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| format!("Fact request failed: {e}"))?;

        response
            .json::<FactResponse>()
            .await
            .map(|body| body.text)
            .map_err(|e| format!("Invalid fact response: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fact_response_parses_text_field() {
        let body = r#"{
            "id": "3a9c0b1e",
            "text": "A group of flamingos is called a flamboyance.",
            "source": "djtech.net",
            "source_url": "http://www.djtech.net/humor/useless_facts.htm",
            "language": "en",
            "permalink": "https://uselessfacts.jsph.pl/api/v2/facts/3a9c0b1e"
        }"#;
        let parsed: FactResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.text, "A group of flamingos is called a flamboyance.");
    }

    #[test]
    fn test_fact_response_requires_text() {
        assert!(serde_json::from_str::<FactResponse>(r#"{"id": "x"}"#).is_err());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_an_error() {
        let client = FactsClient::new(&FactsConfig {
            url: "http://127.0.0.1:9/facts/random".to_string(),
            timeout_secs: 2,
        })
        .unwrap();
        assert!(client.random_fact().await.is_err());
    }
}

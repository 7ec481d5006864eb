//! HTTP transport for the batch driver

use super::errors::{DriverError, Result};
use super::runner::BatchTransport;
use crate::core::batch::AjaxEnvelope;
use crate::server::routes::admin::NonceResponse;
use crate::utils::error::ErrorResponse;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Where and how to reach the admin server
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Base URL of the admin server
    pub server: String,
    /// Operator API key
    pub api_key: String,
    /// Header carrying the API key
    pub api_key_header: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl TransportConfig {
    pub fn new(server: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            server: server.into(),
            api_key: api_key.into(),
            api_key_header: "X-Api-Key".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Posts batches to `/admin/ajax` with a token fetched from `/admin/nonce`
#[derive(Debug)]
pub struct AjaxTransport {
    client: reqwest::Client,
    ajax_url: Url,
    api_key: String,
    api_key_header: String,
    action: String,
    nonce: String,
    batch_size: usize,
}

impl AjaxTransport {
    /// Fetch a token for the operator and get ready to send
    pub async fn connect(config: TransportConfig) -> Result<Self> {
        let base = Url::parse(&config.server)
            .map_err(|e| DriverError::Config(format!("Invalid server URL {}: {}", config.server, e)))?;
        let nonce_url = endpoint(&base, "admin/nonce")?;
        let ajax_url = endpoint(&base, "admin/ajax")?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| DriverError::Config(format!("Failed to create HTTP client: {}", e)))?;

        debug!("Requesting token from {}", nonce_url);
        let response = client
            .get(nonce_url)
            .header(config.api_key_header.as_str(), config.api_key.as_str())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(DriverError::Application(
                serde_json::from_str::<ErrorResponse>(&body)
                    .map(|reply| reply.error.message)
                    .unwrap_or_else(|_| format!("Server refused the API key ({})", status)),
            ));
        }

        let issued: NonceResponse = serde_json::from_str(&body).map_err(|_| {
            DriverError::InvalidResponse(format!("HTTP {}: token reply is not JSON", status))
        })?;
        info!(
            "Connected to {} (action {}, server batch size {})",
            base, issued.action, issued.batch_size
        );

        Ok(Self {
            client,
            ajax_url,
            api_key: config.api_key,
            api_key_header: config.api_key_header,
            action: issued.action,
            nonce: issued.nonce,
            batch_size: issued.batch_size,
        })
    }

    /// Batch size the server suggests
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn action(&self) -> &str {
        &self.action
    }
}

#[async_trait]
impl BatchTransport for AjaxTransport {
    async fn send_batch(&self, urls: &[String]) -> Result<AjaxEnvelope> {
        let payload = serde_json::to_string(urls)
            .map_err(|e| DriverError::InvalidResponse(format!("Cannot encode batch: {}", e)))?;

        let response = self
            .client
            .post(self.ajax_url.clone())
            .header(self.api_key_header.as_str(), self.api_key.as_str())
            .form(&[
                ("action", self.action.as_str()),
                ("urls", payload.as_str()),
                ("_ajax_nonce", self.nonce.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!("Batch of {} answered with HTTP {}", urls.len(), status);

        serde_json::from_str(&body).map_err(|_| {
            DriverError::InvalidResponse(format!("HTTP {}: reply is not a JSON envelope", status))
        })
    }
}

fn endpoint(base: &Url, path: &str) -> Result<Url> {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let with_slash = format!("{}/", base.path());
        base.set_path(&with_slash);
    }
    base.join(path)
        .map_err(|e| DriverError::Config(format!("Invalid endpoint {}: {}", path, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_keeps_base_path() {
        let base = Url::parse("https://example.com/wp").unwrap();
        assert_eq!(
            endpoint(&base, "admin/ajax").unwrap().as_str(),
            "https://example.com/wp/admin/ajax"
        );

        let root = Url::parse("http://127.0.0.1:8000").unwrap();
        assert_eq!(
            endpoint(&root, "admin/nonce").unwrap().as_str(),
            "http://127.0.0.1:8000/admin/nonce"
        );
    }

    #[tokio::test]
    async fn test_invalid_server_url() {
        let err = AjaxTransport::connect(TransportConfig::new("not a url", "key"))
            .await
            .unwrap_err();
        assert!(matches!(err, DriverError::Config(_)));
    }
}

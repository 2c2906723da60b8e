//! Pluggable HTTP transport used by the translator

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use crate::core::errors::{Result, TranslationError};

/// Status and raw body of an HTTP response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw response body
    pub body: String,
}

impl TransportResponse {
    /// Response with the given status and body
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx status
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Minimal HTTP capability the translator needs: POST a JSON body
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// POST `body` to `url` with the given headers.
    ///
    /// Non-success statuses are returned as a normal response; only failures
    /// to complete the exchange are errors.
    async fn post_json(
        &self,
        url: &str,
        headers: &[(&str, String)],
        body: &serde_json::Value,
    ) -> Result<TransportResponse>;
}

/// Default transport backed by `reqwest`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport, optionally bounding every request by `timeout`
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .pool_idle_timeout(Some(Duration::from_secs(30)))
            .pool_max_idle_per_host(10);

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Wrap an existing client
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post_json(
        &self,
        url: &str,
        headers: &[(&str, String)],
        body: &serde_json::Value,
    ) -> Result<TransportResponse> {
        let mut request = self.client.post(url);
        for (name, value) in headers {
            request = request.header(*name, value.as_str());
        }

        let response = request
            .json(body)
            .send()
            .await
            .map_err(|e| TranslationError::NetworkError {
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TranslationError::NetworkError {
                message: e.to_string(),
            })?;

        debug!("POST {} -> {} ({} bytes)", url, status, body.len());

        Ok(TransportResponse { status, body })
    }
}

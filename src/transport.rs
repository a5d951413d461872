//! HTTP capability used by [`crate::AbnClient`]
//!
//! The client only needs a single GET returning status and body. Connection
//! pooling, TLS and timeouts live behind [`HttpTransport`]; the default
//! implementation is backed by `reqwest`.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

use crate::error::{ConfigError, TransportError};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Raw HTTP response: status code plus undecoded body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A single HTTP GET exchange
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// GET `path` relative to `base_url` with `query` appended.
    ///
    /// Any received response is `Ok`, whatever its status.
    async fn get(
        &self,
        base_url: &Url,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<HttpResponse, TransportError>;
}

/// Build the full request URL for `path` and `query`
pub fn request_url(
    base_url: &Url,
    path: &str,
    query: &[(&str, String)],
) -> Result<Url, TransportError> {
    let mut url = base_url.join(path)?;
    url.query_pairs_mut()
        .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
    Ok(url)
}

/// [`HttpTransport`] backed by a pooled `reqwest::Client`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, ConfigError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }

    /// Wrap an existing client, keeping its pool and settings
    pub fn with_client(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(
        &self,
        base_url: &Url,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<HttpResponse, TransportError> {
        let url = request_url(base_url, path, query)?;
        tracing::debug!(path, "ABR request");

        let response = self
            .http
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?;
        tracing::debug!(path, status, bytes = body.len(), "ABR response");

        Ok(HttpResponse {
            status,
            body: body.to_vec(),
        })
    }
}

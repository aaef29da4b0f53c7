use async_trait::async_trait;
use reqwest::Client;
use std::fmt::Debug;

/// Status and raw body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request never produced a response (DNS, connect, TLS, body read).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

#[async_trait]
pub trait HttpTransport: Send + Sync + Debug {
    async fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<HttpReply, TransportError>;
}

/// `reqwest` with its default timeouts.
///
/// Error text never carries the query string; it holds the API key.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    http: Client,
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<HttpReply, TransportError> {
        let res = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                TransportError(format!("Failed to send request to {url}: {}", e.without_url()))
            })?;

        let status = res.status().as_u16();
        let body = res
            .text()
            .await
            .map_err(|e| {
                TransportError(format!("Failed to read response body: {}", e.without_url()))
            })?;

        Ok(HttpReply { status, body })
    }
}

//! HTTP plumbing.
//!
//! The client assembles requests as plain data, headers included, before
//! handing them to the [`Transport`] trait, so a test double observes exactly
//! what would go on the wire.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::{Result, WordnikError};

/// Connect timeout. The service contract fixes this; there is no override.
pub(crate) const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Read timeout for the complete response.
pub(crate) const READ_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP verb of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// A fully assembled request described as plain data.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// Executes assembled requests.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs the round trip and returns the response body text.
    ///
    /// DELETE responses carry no body by contract; the body is discarded and
    /// `None` returned.
    async fn execute(&self, request: &ApiRequest) -> Result<Option<String>>;

    /// Fetches a raw resource (audio data) outside the XML surface.
    async fn download(&self, url: &str) -> Result<Vec<u8>>;
}

/// Transport backed by a shared `reqwest::Client` with the fixed timeouts.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(READ_TIMEOUT)
            .build()
            .expect("failed to create HTTP client");
        Self { client }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: &ApiRequest) -> Result<Option<String>> {
        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
            Method::Put => self.client.put(&request.url),
            Method::Delete => self.client.delete(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send().await.map_err(|e| {
            WordnikError::Transport(format!("error getting a response from the server: {e}"))
        })?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WordnikError::Transport(format!(
                "server returned HTTP {status}: {body}"
            )));
        }

        if request.method == Method::Delete {
            return Ok(None);
        }
        let text = response.text().await.map_err(|e| {
            WordnikError::Transport(format!("error reading the response body: {e}"))
        })?;
        Ok(Some(text))
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send().await.map_err(|e| {
            WordnikError::Transport(format!("error getting data from {url}: {e}"))
        })?;
        let status = response.status();
        if !status.is_success() {
            return Err(WordnikError::Transport(format!(
                "server returned HTTP {status} for {url}"
            )));
        }
        let bytes = response.bytes().await.map_err(|e| {
            WordnikError::Transport(format!("error reading data from {url}: {e}"))
        })?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_names() {
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Delete.as_str(), "DELETE");
    }
}

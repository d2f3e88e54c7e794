use tracing::trace;
use url::Url;

use super::error::ClientError;

/// Status and body of a completed GET request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Blocking GET used by the client. Implemented over reqwest in production;
/// tests substitute canned responses.
pub trait Transport {
    fn get(&self, url: &Url) -> Result<HttpResponse, ClientError>;
}

/// reqwest-backed transport. No timeout is configured here, reqwest's
/// default applies.
#[derive(Clone, Default)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &Url) -> Result<HttpResponse, ClientError> {
        let transport_error = |source| ClientError::Transport {
            url: url.to_string(),
            source,
        };

        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(transport_error)?;
        let status = response.status().as_u16();
        let body = response.text().map_err(transport_error)?;

        trace!(target: "api_client", "HTTP {} ({} bytes) from {}", status, body.len(), url);
        Ok(HttpResponse { status, body })
    }
}

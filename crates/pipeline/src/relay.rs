//! The relay seam: how the orchestrator reaches the generation endpoint.
//!
//! The relay is an external collaborator, so it sits behind a trait; tests
//! substitute an in-memory fake and production uses [`HttpRelay`] against
//! the `vidgen-api` server.

use async_trait::async_trait;
use vidgen_core::relay::{GenerateVideoRequest, GenerateVideoResponse};

/// Errors crossing the relay boundary.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// Network failure or a non-success HTTP status.
    #[error("Relay request failed: {0}")]
    Transport(String),

    /// A 2xx response whose body is not `{ "url": ... }`.
    #[error("Relay response could not be decoded: {0}")]
    InvalidResponse(String),
}

/// One-shot video generation through the relay.
#[async_trait]
pub trait RelayApi: Send + Sync {
    /// Submit the request and wait for the resulting video URL.
    async fn generate_video(&self, request: &GenerateVideoRequest) -> Result<String, RelayError>;
}

/// HTTP implementation against a running relay server.
pub struct HttpRelay {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRelay {
    /// Relay client for `{base_url}/api/v1/generate-video`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl RelayApi for HttpRelay {
    async fn generate_video(&self, request: &GenerateVideoRequest) -> Result<String, RelayError> {
        let url = format!("{}/api/v1/generate-video", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(RelayError::Transport(format!(
                "relay returned {status}: {body}"
            )));
        }

        let body: GenerateVideoResponse = response
            .json()
            .await
            .map_err(|e| RelayError::InvalidResponse(e.to_string()))?;
        Ok(body.url)
    }
}

//! HTTP client for the Replicate predictions API.

use crate::model::{KlingInput, Prediction, KLING_MODEL};

/// Production API base URL.
pub const DEFAULT_API_URL: &str = "https://api.replicate.com";

/// Errors from the Replicate REST layer.
#[derive(Debug, thiserror::Error)]
pub enum ReplicateError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Replicate returned a non-2xx status code.
    #[error("Replicate API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The response could not be interpreted as a finished video URL.
    #[error("Invalid response from Replicate API: {0}")]
    InvalidResponse(String),
}

/// Client for one Replicate endpoint (normally the public API).
pub struct ReplicateClient {
    client: reqwest::Client,
    base_url: String,
}

impl Default for ReplicateClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ReplicateClient {
    /// Client against the production API.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_API_URL)
    }

    /// Client against a custom base URL (tests, proxies).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Base URL this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Run one Kling prediction to completion and return the video URL.
    ///
    /// Sends `POST /v1/models/{model}/predictions` with `Prefer: wait` so
    /// the call blocks server-side until the prediction reaches a terminal
    /// state. The caller-supplied `token` authenticates the request; it is
    /// never stored on the client.
    pub async fn generate_video(
        &self,
        token: &str,
        input: &KlingInput,
    ) -> Result<String, ReplicateError> {
        let url = format!("{}/v1/models/{KLING_MODEL}/predictions", self.base_url);
        let body = serde_json::json!({ "input": input });

        tracing::debug!(model = KLING_MODEL, "Submitting prediction");

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .header("Prefer", "wait")
            .json(&body)
            .send()
            .await?;

        let prediction: Prediction = Self::parse_response(response).await?;

        tracing::info!(
            prediction_id = %prediction.id,
            status = %prediction.status,
            "Prediction finished"
        );

        prediction.video_url().map_err(ReplicateError::InvalidResponse)
    }

    /// Ensure a success status, then decode the JSON body.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ReplicateError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ReplicateError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json::<T>().await?)
    }
}

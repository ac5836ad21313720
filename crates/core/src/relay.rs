//! Wire DTOs shared between the relay server and its clients.
//!
//! The relay speaks camelCase JSON. These shapes are defined once here so
//! the orchestrator's HTTP client and the axum handler cannot drift apart.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/v1/generate-video`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateVideoRequest {
    /// Caller-supplied provider credential, forwarded per request.
    pub api_key: String,
    /// Start image as a `data:` URL.
    pub start_image: String,
    pub prompt: String,
    #[serde(default)]
    pub negative_prompt: Option<String>,
    /// Wire form of the aspect ratio (`16:9`, `9:16`, `1:1`).
    pub aspect_ratio: String,
    pub cfg_scale: f64,
}

/// Successful relay response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateVideoResponse {
    /// URL of the generated video artifact.
    pub url: String,
}

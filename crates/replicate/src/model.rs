//! Input and prediction types for the Kling image-to-video model.

use serde::{Deserialize, Serialize};
use vidgen_core::types::{AspectRatio, CfgScale};

/// Model slug submitted to Replicate.
pub const KLING_MODEL: &str = "kwaivgi/kling-v1.6-standard";

/// Fixed clip length in seconds; the model supports 5 or 10, we always ask
/// for 5.
pub const CLIP_DURATION_SECS: u32 = 5;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// The `input` object of a Kling prediction request.
///
/// Field names match the model's schema exactly (snake_case).
#[derive(Debug, Clone, Serialize)]
pub struct KlingInput {
    pub prompt: String,
    pub duration: u32,
    pub cfg_scale: f64,
    pub aspect_ratio: String,
    /// Empty string when no negative prompt was given; the model treats the
    /// two identically.
    pub negative_prompt: String,
    /// Start image as a `data:` URL.
    pub image: String,
}

impl KlingInput {
    /// Assemble the model input from validated request parameters.
    pub fn new(
        prompt: impl Into<String>,
        negative_prompt: Option<String>,
        aspect_ratio: AspectRatio,
        cfg_scale: CfgScale,
        image_data_url: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            duration: CLIP_DURATION_SECS,
            cfg_scale: cfg_scale.value(),
            aspect_ratio: aspect_ratio.as_str().to_string(),
            negative_prompt: negative_prompt.unwrap_or_default(),
            image: image_data_url.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Prediction
// ---------------------------------------------------------------------------

/// Terminal status for a successfully finished prediction.
pub const STATUS_SUCCEEDED: &str = "succeeded";

/// The subset of a Replicate prediction we care about.
#[derive(Debug, Clone, Deserialize)]
pub struct Prediction {
    pub id: String,
    pub status: String,
    /// For this model a string URI on success; other models return arrays
    /// or objects, which we reject.
    #[serde(default)]
    pub output: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

impl Prediction {
    /// Extract the video URL from a terminal prediction.
    ///
    /// Returns a description of what was wrong when the prediction did not
    /// succeed or its output is not a plain string.
    pub fn video_url(&self) -> Result<String, String> {
        if self.status != STATUS_SUCCEEDED {
            let detail = self
                .error
                .as_ref()
                .map(|e| format!(": {e}"))
                .unwrap_or_default();
            return Err(format!(
                "prediction {} finished with status '{}'{detail}",
                self.id, self.status
            ));
        }
        match &self.output {
            Some(serde_json::Value::String(url)) if !url.is_empty() => Ok(url.clone()),
            other => Err(format!(
                "prediction {} output is not a video URL: {other:?}",
                self.id
            )),
        }
    }
}

//! The ephemeral generation request assembled from user input.

use crate::error::CoreError;
use crate::types::{AspectRatio, CfgScale};

/// Maximum number of optional reference images per request.
pub const MAX_REFERENCE_IMAGES: usize = 4;

/// Everything the user supplies for one generation attempt.
///
/// Constructed when generation is triggered and discarded once the attempt
/// resolves; only the derived history entry is persisted. The start image
/// and reference images are attached through two distinct operations
/// ([`with_start_image`](Self::with_start_image) and
/// [`with_reference_images`](Self::with_reference_images)) rather than one
/// polymorphic upload path.
#[derive(Debug, Clone, Default)]
pub struct GenerationRequest {
    start_image: Vec<u8>,
    reference_images: Vec<Vec<u8>>,
    pub prompt: String,
    pub negative_prompt: Option<String>,
    pub aspect_ratio: AspectRatio,
    pub cfg_scale: CfgScale,
}

impl GenerationRequest {
    /// Create a request with the given prompt and default settings.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Self::default()
        }
    }

    /// Attach the required start image (single upload).
    pub fn with_start_image(mut self, bytes: Vec<u8>) -> Self {
        self.start_image = bytes;
        self
    }

    /// Attach optional reference images (multi upload, at most
    /// [`MAX_REFERENCE_IMAGES`]).
    ///
    /// Reference images are validated but not forwarded to the provider;
    /// the current model only consumes the start image.
    pub fn with_reference_images(mut self, images: Vec<Vec<u8>>) -> Self {
        self.reference_images = images;
        self
    }

    /// Set the negative prompt.
    pub fn with_negative_prompt(mut self, text: impl Into<String>) -> Self {
        self.negative_prompt = Some(text.into());
        self
    }

    /// Set the aspect ratio.
    pub fn with_aspect_ratio(mut self, ratio: AspectRatio) -> Self {
        self.aspect_ratio = ratio;
        self
    }

    /// Set the CFG scale.
    pub fn with_cfg_scale(mut self, scale: CfgScale) -> Self {
        self.cfg_scale = scale;
        self
    }

    /// Raw start image bytes.
    pub fn start_image(&self) -> &[u8] {
        &self.start_image
    }

    /// Validate that the request is complete enough to submit.
    ///
    /// - A start image must be attached.
    /// - The prompt must be non-empty after trimming.
    /// - At most [`MAX_REFERENCE_IMAGES`] reference images, none empty.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.start_image.is_empty() {
            return Err(CoreError::Validation(
                "Start image and prompt are required".to_string(),
            ));
        }
        if self.prompt.trim().is_empty() {
            return Err(CoreError::Validation(
                "Start image and prompt are required".to_string(),
            ));
        }
        if self.reference_images.len() > MAX_REFERENCE_IMAGES {
            return Err(CoreError::Validation(format!(
                "At most {MAX_REFERENCE_IMAGES} reference images are allowed, got {}",
                self.reference_images.len()
            )));
        }
        if self.reference_images.iter().any(|img| img.is_empty()) {
            return Err(CoreError::Validation(
                "Reference images must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

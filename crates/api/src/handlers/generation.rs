//! Handler for the video-generation relay route.
//!
//! Routes:
//! - `POST /generate-video` — forward one generation request to the provider

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use vidgen_core::encoding;
use vidgen_core::relay::{GenerateVideoRequest, GenerateVideoResponse};
use vidgen_core::types::{AspectRatio, CfgScale};
use vidgen_replicate::KlingInput;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/generate-video
///
/// Validates parameters, then issues exactly one blocking provider call with
/// the caller-supplied credential. The relay holds no state between calls
/// and performs no retries; a failed attempt is surfaced as-is.
pub async fn generate_video(
    State(state): State<AppState>,
    Json(input): Json<GenerateVideoRequest>,
) -> AppResult<impl IntoResponse> {
    if input.api_key.trim().is_empty() {
        return Err(AppError::BadRequest("API key is required".to_string()));
    }
    if input.start_image.is_empty() || input.prompt.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Start image and prompt are required".to_string(),
        ));
    }
    if !encoding::is_image_data_url(&input.start_image) {
        return Err(AppError::BadRequest(
            "Start image must be an image data URL".to_string(),
        ));
    }

    let aspect_ratio: AspectRatio = input.aspect_ratio.parse()?;
    let cfg_scale = CfgScale::new(input.cfg_scale)?;

    let model_input = KlingInput::new(
        input.prompt,
        input.negative_prompt,
        aspect_ratio,
        cfg_scale,
        input.start_image,
    );

    let url = state
        .provider
        .generate_video(&input.api_key, &model_input)
        .await?;

    tracing::info!(%url, "Generation relayed successfully");

    Ok(Json(GenerateVideoResponse { url }))
}

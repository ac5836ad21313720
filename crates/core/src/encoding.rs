//! Image-to-data-URL encoding for transport to the relay.
//!
//! The provider accepts the start image inline as a `data:` URL, so the
//! orchestrator converts the uploaded bytes once, up front, and the same
//! encoded form is stored verbatim in history entries.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::ImageFormat;

use crate::error::CoreError;

/// Maximum accepted upload size (10 MiB, matching the UI's stated limit).
pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

/// Encode raw image bytes into a `data:<mime>;base64,...` URL.
///
/// The format is sniffed from the magic bytes; only JPEG, PNG, and WebP are
/// accepted. Returns a validation error for empty, oversized, or
/// unrecognized payloads.
pub fn image_to_data_url(bytes: &[u8]) -> Result<String, CoreError> {
    if bytes.is_empty() {
        return Err(CoreError::Validation("Start image is empty".to_string()));
    }
    if bytes.len() > MAX_IMAGE_BYTES {
        return Err(CoreError::Validation(format!(
            "Start image is {} bytes, exceeding the {MAX_IMAGE_BYTES}-byte limit",
            bytes.len()
        )));
    }

    let mime = sniff_mime(bytes)?;
    Ok(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
}

/// Determine the MIME type from the image header.
fn sniff_mime(bytes: &[u8]) -> Result<&'static str, CoreError> {
    match image::guess_format(bytes) {
        Ok(ImageFormat::Jpeg) => Ok("image/jpeg"),
        Ok(ImageFormat::Png) => Ok("image/png"),
        Ok(ImageFormat::WebP) => Ok("image/webp"),
        Ok(other) => Err(CoreError::Validation(format!(
            "Unsupported image format {other:?}. Supported: JPG, PNG, WebP"
        ))),
        Err(_) => Err(CoreError::Validation(
            "Could not recognize image format. Supported: JPG, PNG, WebP".to_string(),
        )),
    }
}

/// Whether a string looks like an already-encoded image data URL.
///
/// Used by the relay for parameter validation; it deliberately checks only
/// the scheme prefix, not the payload.
pub fn is_image_data_url(value: &str) -> bool {
    value.starts_with("data:image/")
}

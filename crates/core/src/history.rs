//! History entries and the pure list operations over them.
//!
//! A [`HistoryEntry`] is the durable record of one successful generation.
//! Entries are immutable after creation; the only mutations are whole-entry
//! removal and clearing the list. Persistence lives in `vidgen-store` —
//! this module owns the entry shape and the ordering rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::request::GenerationRequest;
use crate::types::{AspectRatio, CfgScale};

/// One past generation: the request parameters plus the resulting video URL
/// and the encoded start image it was generated from.
///
/// Serialized with camelCase field names; this is both the persisted shape
/// and the shape handed to the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Millisecond-timestamp identifier, unique per entry.
    pub id: String,
    /// When the generation completed.
    pub timestamp: DateTime<Utc>,
    pub prompt: String,
    /// Empty string when no negative prompt was given.
    pub negative_prompt: String,
    pub aspect_ratio: AspectRatio,
    pub cfg_scale: CfgScale,
    /// URL of the generated video as returned by the relay.
    pub video_url: String,
    /// The original start image as a `data:` URL.
    pub start_image: String,
}

impl HistoryEntry {
    /// Build an entry for a generation that completed at `recorded_at`.
    ///
    /// The identifier is derived from the completion time (milliseconds
    /// since the epoch), matching the stored `timestamp`.
    pub fn from_request(
        recorded_at: DateTime<Utc>,
        request: &GenerationRequest,
        video_url: impl Into<String>,
        start_image_data_url: impl Into<String>,
    ) -> Self {
        Self {
            id: recorded_at.timestamp_millis().to_string(),
            timestamp: recorded_at,
            prompt: request.prompt.clone(),
            negative_prompt: request.negative_prompt.clone().unwrap_or_default(),
            aspect_ratio: request.aspect_ratio,
            cfg_scale: request.cfg_scale,
            video_url: video_url.into(),
            start_image: start_image_data_url.into(),
        }
    }

    /// Suggested download filename for this entry's video.
    pub fn download_file_name(&self) -> String {
        format!("ai-video-{}.mp4", self.id)
    }
}

// ---------------------------------------------------------------------------
// Pure list operations (newest-first invariant)
// ---------------------------------------------------------------------------

/// Prepend `entry`, keeping the list newest-first.
pub fn prepend(entries: &mut Vec<HistoryEntry>, entry: HistoryEntry) {
    entries.insert(0, entry);
}

/// Remove the entry with the given id. Returns `false` (and leaves the list
/// untouched) when no entry matches.
pub fn remove_entry(entries: &mut Vec<HistoryEntry>, id: &str) -> bool {
    let before = entries.len();
    entries.retain(|e| e.id != id);
    entries.len() != before
}

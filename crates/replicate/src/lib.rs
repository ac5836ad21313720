//! Replicate REST client for hosted video-generation models.
//!
//! Uses the blocking-prediction mode (`Prefer: wait`): the create-prediction
//! call holds the connection open until the model finishes and returns the
//! final artifact URL in the same response. Anything other than a terminal
//! succeeded prediction with a string output is treated as an invalid
//! response — there is no polling fallback.

pub mod client;
pub mod model;

pub use client::{ReplicateClient, ReplicateError};
pub use model::{KlingInput, Prediction};

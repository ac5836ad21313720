//! Domain types shared across the workspace: generation requests and their
//! validation rules, aspect-ratio and guidance-scale value types, data-URL
//! image encoding, synthetic progress state, history entries, and the wire
//! DTOs spoken between the orchestrator and the relay.
//!
//! This crate has no internal dependencies and stays runtime-agnostic; I/O
//! lives in the store, pipeline, and api crates.

pub mod encoding;
pub mod error;
pub mod history;
pub mod progress;
pub mod relay;
pub mod request;
pub mod types;

//! Relay server library.
//!
//! A stateless HTTP relay between the generation client and the hosted
//! video-generation provider: it validates parameters, forwards the request
//! with the caller-supplied credential, and translates provider errors. No
//! business state lives here. Exposed as a library so integration tests and
//! the binary entrypoint share the same building blocks.

pub mod config;
pub mod error;
pub mod handlers;
pub mod provider;
pub mod routes;
pub mod state;

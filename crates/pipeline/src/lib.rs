//! The generation request orchestrator.
//!
//! [`Generator`] drives one attempt end to end: validate the request, fetch
//! the stored credential, encode the start image, call the relay once while
//! a cosmetic progress ticker runs, and on success record a history entry.
//! A failed attempt is terminal — no retry, no partial success.

pub mod error;
pub mod orchestrator;
pub mod progress;
pub mod relay;

pub use error::GenerateError;
pub use orchestrator::{GenerationOutcome, Generator};
pub use progress::ProgressTicker;
pub use relay::{HttpRelay, RelayApi, RelayError};

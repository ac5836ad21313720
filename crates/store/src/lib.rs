//! Local persistence for the generation client.
//!
//! Everything durable goes through the [`kv::KvStore`] port — a minimal
//! `get/set/delete` over named keys — so the history and settings stores can
//! run against the real file-backed implementation or an in-memory fake in
//! tests. Repos are stateless and take the port by reference per call.

pub mod error;
pub mod history;
pub mod kv;
pub mod settings;

pub use error::StoreError;
pub use history::HistoryStore;
pub use kv::{FileKvStore, KvStore, MemoryKvStore};
pub use settings::{Language, SettingsStore};

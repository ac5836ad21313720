use std::sync::Arc;

use crate::config::ServerConfig;
use crate::provider::VideoProvider;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Upstream video-generation provider.
    pub provider: Arc<dyn VideoProvider>,
}

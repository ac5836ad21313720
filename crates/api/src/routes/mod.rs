pub mod health;

use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /generate-video    forward one generation request to the provider (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/generate-video", post(handlers::generation::generate_video))
}

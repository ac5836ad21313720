//! The provider seam behind the relay handler.
//!
//! Handlers talk to a [`VideoProvider`] trait object so integration tests
//! can substitute a scripted fake; production wires in [`ReplicateProvider`].

use async_trait::async_trait;
use vidgen_replicate::{KlingInput, ReplicateClient, ReplicateError};

/// One blocking video-generation call against the upstream provider.
#[async_trait]
pub trait VideoProvider: Send + Sync {
    /// Run the model with the caller's credential; resolves to the final
    /// video URL or an error — never an intermediate job state.
    async fn generate_video(&self, token: &str, input: &KlingInput)
        -> Result<String, ReplicateError>;
}

/// Production implementation over the Replicate REST API.
pub struct ReplicateProvider {
    client: ReplicateClient,
}

impl ReplicateProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: ReplicateClient::with_base_url(base_url),
        }
    }
}

#[async_trait]
impl VideoProvider for ReplicateProvider {
    async fn generate_video(
        &self,
        token: &str,
        input: &KlingInput,
    ) -> Result<String, ReplicateError> {
        self.client.generate_video(token, input).await
    }
}

use vidgen_store::StoreError;

use crate::relay::RelayError;

/// Terminal outcome of a failed generation attempt.
///
/// The first two variants are produced before any network traffic; the
/// transport and invalid-response variants cover everything after the relay
/// call was issued. None of them are retried.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// No start image or an empty prompt (or otherwise unusable input).
    #[error("Missing input: {0}")]
    MissingInput(String),

    /// No provider credential is stored.
    #[error("API key is required")]
    MissingCredential,

    /// Network failure or a non-success relay response.
    #[error("Failed to generate video: {0}")]
    Transport(String),

    /// The relay answered 2xx but not with a usable video URL.
    #[error("Invalid response from relay: {0}")]
    InvalidResponse(String),

    /// The local store failed while reading settings or recording history.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<RelayError> for GenerateError {
    fn from(err: RelayError) -> Self {
        match err {
            RelayError::Transport(msg) => GenerateError::Transport(msg),
            RelayError::InvalidResponse(msg) => GenerateError::InvalidResponse(msg),
        }
    }
}

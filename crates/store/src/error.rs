#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The underlying key-value medium failed (I/O, permissions, ...).
    #[error("Storage error: {0}")]
    Backend(String),

    /// A persisted value could not be decoded or encoded.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

//! Error types shared by the storage layer.
//!
//! Nothing here reaches the user: callers log these and fall back to the
//! documented defaults.

/// Error returned by [`crate::store::KeyValueStore::set`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing store could not be opened (private mode, sandboxed frame).
    #[error("storage is unavailable")]
    Unavailable,
    /// The store rejected the write, e.g. because the quota is exhausted.
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
    /// The value could not be serialized before writing.
    #[error("failed to encode `{key}`: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

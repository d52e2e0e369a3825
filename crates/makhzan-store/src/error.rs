//! # Store Error Types
//!
//! Failures from slot reads and writes.
//!
//! Malformed snapshot *content* is deliberately NOT an error anywhere in
//! this crate: the catalog recovers to empty and logs. Only real I/O and
//! serialization failures surface.

use thiserror::Error;

/// Persistence errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing a slot failed at the I/O level.
    ///
    /// ## When This Occurs
    /// - Storage directory not writable
    /// - Disk full
    /// - Permissions changed underneath the app
    #[error("Storage I/O failed for slot '{slot}': {source}")]
    Io {
        slot: String,
        #[source]
        source: std::io::Error,
    },

    /// Serializing the catalog for the snapshot failed.
    #[error("Snapshot serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl StoreError {
    /// Wraps an I/O error with its slot for context.
    pub fn io(slot: impl Into<String>, source: std::io::Error) -> Self {
        StoreError::Io {
            slot: slot.into(),
            source,
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

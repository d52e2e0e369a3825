//! # Storage Backend
//!
//! Named-slot storage: the moral equivalent of a key-value pair store with
//! two keys. The trait keeps the physical medium swappable: files on the
//! device in production, a HashMap in tests.
//!
//! ## Slot Semantics
//! - a slot holds one UTF-8 document, overwritten wholesale
//! - reading an absent slot is `Ok(None)`, never an error
//! - writes are atomic per slot (a crash mid-write keeps the old document)

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::trace;

use crate::error::{StoreError, StoreResult};

// =============================================================================
// Trait
// =============================================================================

/// A named-slot document store.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Reads a slot. Absent slots are `Ok(None)`.
    async fn read(&self, slot: &str) -> StoreResult<Option<String>>;

    /// Overwrites a slot wholesale.
    async fn write(&self, slot: &str, contents: &str) -> StoreResult<()>;

    /// Deletes a slot. Deleting an absent slot is a no-op.
    async fn remove(&self, slot: &str) -> StoreResult<()>;
}

// =============================================================================
// File Backend
// =============================================================================

/// Slot-per-file backend rooted in an app data directory.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Creates a backend rooted at `dir`. The directory is created lazily
    /// on the first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileBackend { dir: dir.into() }
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{slot}.json"))
    }
}

#[async_trait]
impl StorageBackend for FileBackend {
    async fn read(&self, slot: &str) -> StoreResult<Option<String>> {
        match tokio::fs::read_to_string(self.slot_path(slot)).await {
            Ok(contents) => {
                trace!(slot, bytes = contents.len(), "Slot read");
                Ok(Some(contents))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::io(slot, e)),
        }
    }

    async fn write(&self, slot: &str, contents: &str) -> StoreResult<()> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| StoreError::io(slot, e))?;

        // write-then-rename: a crash mid-write must leave the previous
        // snapshot intact
        let path = self.slot_path(slot);
        let tmp = self.dir.join(format!("{slot}.json.tmp"));
        tokio::fs::write(&tmp, contents)
            .await
            .map_err(|e| StoreError::io(slot, e))?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|e| StoreError::io(slot, e))?;

        trace!(slot, bytes = contents.len(), "Slot written");
        Ok(())
    }

    async fn remove(&self, slot: &str) -> StoreResult<()> {
        match tokio::fs::remove_file(self.slot_path(slot)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::io(slot, e)),
        }
    }
}

// =============================================================================
// Memory Backend
// =============================================================================

/// In-memory backend for tests and previews.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeds a slot, handy for malformed-snapshot tests.
    pub async fn seed(&self, slot: &str, contents: &str) {
        self.slots
            .lock()
            .await
            .insert(slot.to_string(), contents.to_string());
    }
}

#[async_trait]
impl StorageBackend for MemoryBackend {
    async fn read(&self, slot: &str) -> StoreResult<Option<String>> {
        Ok(self.slots.lock().await.get(slot).cloned())
    }

    async fn write(&self, slot: &str, contents: &str) -> StoreResult<()> {
        self.slots
            .lock()
            .await
            .insert(slot.to_string(), contents.to_string());
        Ok(())
    }

    async fn remove(&self, slot: &str) -> StoreResult<()> {
        self.slots.lock().await.remove(slot);
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

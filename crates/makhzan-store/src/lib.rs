//! # makhzan-store: Persistence Layer
//!
//! Local persistence for the catalog and the onboarding marker, behind a
//! named-slot backend so the physical storage (files on device, memory in
//! tests) stays swappable.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Catalog Lifecycle                                │
//! │                                                                         │
//! │  startup ──► CatalogStore::open ──► read slot once                      │
//! │                    │                   │                                │
//! │                    │                   ├─ missing ──► empty catalog     │
//! │                    │                   ├─ malformed ─► empty + warn     │
//! │                    │                   └─ valid ────► records in memory │
//! │                    ▼                                                    │
//! │  insert/update/remove ──► mutate in memory ──► persist whole snapshot   │
//! │                                                                         │
//! │  A store can only be obtained through `open`, so a persist can never    │
//! │  run before the initial load and clobber pre-existing data.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`backend`] - `StorageBackend` trait, file + in-memory implementations
//! - [`catalog`] - the catalog store itself
//! - [`onboarding`] - persisted one-shot onboarding flag
//! - [`error`] - store error types

pub mod backend;
pub mod catalog;
pub mod error;
pub mod onboarding;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use catalog::{CatalogStore, CATALOG_SLOT};
pub use error::{StoreError, StoreResult};
pub use onboarding::{OnboardingFlag, ONBOARDING_SLOT};

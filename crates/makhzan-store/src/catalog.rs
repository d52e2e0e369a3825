//! # Catalog Store
//!
//! The in-memory product catalog plus its persisted JSON snapshot.
//!
//! ## Load-Once, Persist-Always
//! The catalog is read from its slot exactly once, inside [`CatalogStore::open`].
//! Every mutation first updates memory, then writes the whole snapshot back.
//! Because a store can only be obtained through `open`, no code path can
//! persist before the initial load has happened.
//!
//! ## Malformed Snapshot Recovery
//! A snapshot that fails to parse is treated like a missing one: the catalog
//! starts empty and the incident is logged. Startup never fails on bad data.

use std::sync::Arc;

use tracing::{debug, info, warn};

use makhzan_core::Product;

use crate::backend::StorageBackend;
use crate::error::StoreResult;

/// Slot name for the catalog snapshot.
pub const CATALOG_SLOT: &str = "makhzan_catalog_v1";

// =============================================================================
// Catalog Store
// =============================================================================

/// The product catalog, ordered newest-first.
pub struct CatalogStore {
    backend: Arc<dyn StorageBackend>,
    products: Vec<Product>,
}

impl CatalogStore {
    /// Loads the catalog from its slot.
    ///
    /// Never fails: a missing slot yields an empty catalog, and a snapshot
    /// that does not parse is discarded with a warning rather than blocking
    /// startup. Read errors at the I/O level are treated the same way.
    pub async fn open(backend: Arc<dyn StorageBackend>) -> Self {
        let products = match backend.read(CATALOG_SLOT).await {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Product>>(&raw) {
                Ok(products) => products,
                Err(e) => {
                    warn!(error = %e, "Catalog snapshot is malformed, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "Catalog snapshot unreadable, starting empty");
                Vec::new()
            }
        };

        info!(count = products.len(), "Catalog loaded");
        CatalogStore { backend, products }
    }

    // ===== Reads =====

    /// All products, newest first.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Looks a product up by its id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// True when any product already carries `barcode`.
    pub fn barcode_taken(&self, barcode: &str) -> bool {
        self.products.iter().any(|p| p.barcode == barcode)
    }

    // ===== Mutations =====

    /// Inserts a new product at the front and persists.
    pub async fn insert(&mut self, product: Product) -> StoreResult<()> {
        debug!(id = %product.id, barcode = %product.barcode, "Inserting product");
        self.products.insert(0, product);
        self.persist().await
    }

    /// Replaces the product with `product.id`, keeping its position.
    ///
    /// Returns `Ok(false)` when no product has that id; nothing is written.
    pub async fn update(&mut self, product: Product) -> StoreResult<bool> {
        let Some(slot) = self.products.iter_mut().find(|p| p.id == product.id) else {
            return Ok(false);
        };
        *slot = product;
        self.persist().await?;
        Ok(true)
    }

    /// Removes the product with `id`.
    ///
    /// Returns `Ok(false)` when no product has that id; nothing is written.
    pub async fn remove(&mut self, id: &str) -> StoreResult<bool> {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        if self.products.len() == before {
            return Ok(false);
        }
        debug!(id, "Removed product");
        self.persist().await?;
        Ok(true)
    }

    /// Writes the whole catalog back to its slot.
    async fn persist(&self) -> StoreResult<()> {
        let snapshot = serde_json::to_string(&self.products)?;
        self.backend.write(CATALOG_SLOT, &snapshot).await?;
        debug!(count = self.products.len(), "Catalog persisted");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

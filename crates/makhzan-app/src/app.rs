//! # App Orchestrator
//!
//! The operations a UI shell invokes, wired across all lower crates.
//!
//! ## Operation Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         App Operations                                  │
//! │                                                                         │
//! │  create_product   validate ► normalize ► generate code ► insert         │
//! │  update_product   validate ► replace record (identity fields kept)      │
//! │  replace_image    normalize ► swap image (old image kept on failure)    │
//! │  delete_product   remove ► back to inventory                            │
//! │  begin_scan       permission gate ► camera session                      │
//! │  complete_scan    decoded code ► resolver ► detail view or LookupMiss   │
//! │  export_label     symbol + caption ► downloadable PNG                   │
//! │  search           name/barcode substring filter                         │
//! │  summary          item count + three newest                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every operation leaves the app in a navigable state; the worst outcome
//! of any failure is an error code and an unchanged catalog.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::info;

use makhzan_core::{codegen, resolve, validation, CoreError, Product, ProductDraft};
use makhzan_media::{normalize, render_label, Label};
use makhzan_scan::{CameraAccess, FrameDecoder, ScanEvent, ScanSession, Scanner};
use makhzan_store::{CatalogStore, OnboardingFlag, StorageBackend};

use crate::error::{AppError, AppResult};
use crate::gate::PermissionGate;
use crate::nav::{Nav, NavEvent, View};

// =============================================================================
// Home Summary
// =============================================================================

/// What the landing view shows.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeSummary {
    pub total_items: usize,
    /// The three newest items.
    pub recent: Vec<Product>,
}

// =============================================================================
// App
// =============================================================================

/// The application orchestrator.
pub struct App {
    catalog: CatalogStore,
    gate: PermissionGate,
    scanner: Scanner,
    nav: Nav,
    rng: StdRng,
}

impl App {
    /// Loads the catalog and wires the camera stack.
    ///
    /// Startup never fails: a missing or malformed catalog snapshot starts
    /// empty, and camera problems surface later, on the first scan attempt.
    pub async fn bootstrap(
        backend: Arc<dyn StorageBackend>,
        camera: Arc<dyn CameraAccess>,
        decoder: Arc<dyn FrameDecoder>,
    ) -> Self {
        let catalog = CatalogStore::open(Arc::clone(&backend)).await;
        let onboarding = OnboardingFlag::new(backend);
        let gate = PermissionGate::new(Arc::clone(&camera), onboarding);
        let scanner = Scanner::new(camera, decoder);

        info!(items = catalog.len(), "App ready");
        App {
            catalog,
            gate,
            scanner,
            nav: Nav::new(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Swaps in a seeded random source, for deterministic tests.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    // ===== Views =====

    /// The view the shell should render.
    pub fn view(&self) -> &View {
        self.nav.current()
    }

    /// Applies a navigation event from the shell.
    pub fn navigate(&mut self, event: NavEvent) -> bool {
        self.nav.apply(event)
    }

    /// The permission gate, for onboarding queries.
    pub fn gate(&self) -> &PermissionGate {
        &self.gate
    }

    // ===== Catalog reads =====

    /// All products, newest first.
    pub fn products(&self) -> &[Product] {
        self.catalog.products()
    }

    /// One product by id.
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.catalog.get(id)
    }

    /// Landing-view summary: total count and the three newest items.
    pub fn summary(&self) -> HomeSummary {
        HomeSummary {
            total_items: self.catalog.len(),
            recent: self.catalog.products().iter().take(3).cloned().collect(),
        }
    }

    /// Filters the inventory list by a name or barcode fragment.
    ///
    /// Blank queries return everything; both name and barcode matching
    /// ignore case.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let query = query.trim();
        if query.is_empty() {
            return self.catalog.products().iter().collect();
        }
        let lowered = query.to_lowercase();
        self.catalog
            .products()
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&lowered)
                    || p.barcode.to_lowercase().contains(&lowered)
            })
            .collect()
    }

    // ===== Catalog mutations =====

    /// Creates a product from a draft: validates, normalizes the photo,
    /// assigns a catalog-unique barcode, and lands on the inventory view.
    pub async fn create_product(&mut self, draft: ProductDraft) -> AppResult<Product> {
        validation::validate_draft(&draft)?;

        let normalized = normalize(&draft.raw_image)?;

        let catalog = &self.catalog;
        let barcode = codegen::generate_distinct(&mut self.rng, |code| catalog.barcode_taken(code))?;

        let product = Product::new(draft, barcode, normalized.data);
        info!(id = %product.id, barcode = %product.barcode, "Product created");

        self.catalog.insert(product.clone()).await?;
        self.nav.apply(NavEvent::OpenInventory);
        Ok(product)
    }

    /// Replaces a product's metadata.
    ///
    /// Identity fields never change through this path: `barcode`,
    /// `created_at`, and the stored image are carried over from the current
    /// record regardless of what the edited copy claims.
    pub async fn update_product(&mut self, edited: Product) -> AppResult<()> {
        validation::validate_name(&edited.name)?;
        validation::validate_price_cents(edited.price_cents)?;
        validation::validate_units_per_dozen(edited.units_per_dozen)?;
        validation::validate_size(&edited.size)?;
        validation::validate_color(&edited.color)?;
        validation::validate_description(&edited.description)?;

        let current = self
            .catalog
            .get(&edited.id)
            .ok_or_else(|| CoreError::ProductNotFound(edited.id.clone()))?;

        let replacement = Product {
            barcode: current.barcode.clone(),
            image: current.image.clone(),
            created_at: current.created_at,
            ..edited
        };

        let id = replacement.id.clone();
        if !self.catalog.update(replacement).await? {
            return Err(CoreError::ProductNotFound(id).into());
        }
        Ok(())
    }

    /// Re-normalizes new photo bytes into an existing record.
    ///
    /// On undecodable input the record keeps its previous image untouched.
    pub async fn replace_image(&mut self, id: &str, raw: &[u8]) -> AppResult<()> {
        let normalized = normalize(raw)?;

        let current = self
            .catalog
            .get(id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))?;

        let mut updated = current.clone();
        updated.image = normalized.data;
        self.catalog.update(updated).await?;
        Ok(())
    }

    /// Deletes a product and returns to the inventory view.
    pub async fn delete_product(&mut self, id: &str) -> AppResult<()> {
        if !self.catalog.remove(id).await? {
            return Err(CoreError::ProductNotFound(id.to_string()).into());
        }
        if matches!(self.nav.current(), View::ProductDetail { .. }) {
            self.nav.apply(NavEvent::OpenInventory);
        }
        Ok(())
    }

    // ===== Labels =====

    /// Renders the downloadable barcode label for a product.
    pub fn export_label(&self, id: &str) -> AppResult<Label> {
        let product = self
            .catalog
            .get(id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))?;
        Ok(render_label(&product.name, &product.barcode)?)
    }

    // ===== Scanning =====

    /// Settles camera permission and starts a scan session.
    ///
    /// The returned session delivers at most one decoded payload; feed its
    /// outcome to [`complete_scan`].
    ///
    /// [`complete_scan`]: App::complete_scan
    pub async fn begin_scan(&mut self) -> AppResult<ScanSession> {
        self.gate.ensure_access().await?;
        let session = self.scanner.start().await?;
        self.nav.apply(NavEvent::StartScan);
        Ok(session)
    }

    /// Resolves a finished scan session's outcome.
    ///
    /// A decoded code that matches lands on that product's detail view; a
    /// miss notifies via [`crate::ErrorCode::LookupMiss`] and returns home.
    /// A session that ended without a hit (cancelled) just returns home.
    pub fn complete_scan(&mut self, outcome: Option<ScanEvent>) -> AppResult<Option<Product>> {
        match outcome {
            Some(ScanEvent::Decoded(code)) => {
                match resolve(&code, self.catalog.products()) {
                    Some(product) => {
                        let product = product.clone();
                        info!(code = %code, id = %product.id, "Scan resolved");
                        self.nav.apply(NavEvent::OpenDetail {
                            product_id: product.id.clone(),
                        });
                        Ok(Some(product))
                    }
                    None => {
                        info!(code = %code, "Scan matched nothing");
                        self.nav.apply(NavEvent::GoHome);
                        Err(AppError::lookup_miss(&code))
                    }
                }
            }
            None => {
                self.nav.apply(NavEvent::GoHome);
                Ok(None)
            }
        }
    }
}

//! # Makhzan Application Library
//!
//! The top of the stack: everything a UI shell needs to run the catalog.
//!
//! ## Module Organization
//! ```text
//! makhzan_app/
//! ├── lib.rs          ◄─── You are here (wiring & logging setup)
//! ├── app.rs          ◄─── App orchestrator (the operations)
//! ├── gate.rs         ◄─── Camera permission gate + onboarding
//! ├── nav.rs          ◄─── View state machine
//! └── error.rs        ◄─── Boundary error taxonomy
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. init_tracing() ─────────────────────────────────────────────────►   │
//! │     • tracing-subscriber with env filter                                │
//! │     • Default: INFO, override with RUST_LOG                             │
//! │                                                                         │
//! │  2. Pick a storage directory, build a FileBackend ──────────────────►   │
//! │                                                                         │
//! │  3. App::bootstrap(backend, camera, decoder) ───────────────────────►   │
//! │     • Catalog loaded once (malformed snapshot = empty, never fatal)     │
//! │     • Permission gate + scanner wired, nothing probed yet               │
//! │                                                                         │
//! │  4. Shell renders App::view() and drives App operations ────────────►   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod app;
pub mod error;
pub mod gate;
pub mod nav;

pub use app::{App, HomeSummary};
pub use error::{AppError, AppResult, ErrorCode};
pub use gate::{remediation, PermissionGate};
pub use nav::{Nav, NavEvent, View};

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=makhzan=trace` - Show trace for makhzan crates only
/// - Default: INFO level
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,makhzan=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

//! # makhzan-scan: Camera Scanning
//!
//! Turns a stream of camera frames into at most one decoded barcode payload.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Scan Session                                    │
//! │                                                                         │
//! │  Scanner::start ──► open camera ──► pump frames through decoder         │
//! │        │                                  │                             │
//! │        │ (second start while              ├─ decode hit ──► emit once,  │
//! │        │  active: SessionActive)          │                close camera │
//! │        │                                  │                             │
//! │        ▼                                  └─ stop() ─────► close camera │
//! │  at most ONE active session                                             │
//! │  per scanner                              late hits after either path   │
//! │                                           are dropped, never delivered  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`camera`] - camera access trait, permission states, frames
//! - [`decoder`] - per-frame symbol decoding
//! - [`session`] - the session loop itself
//! - [`error`] - camera and session error types

pub mod camera;
pub mod decoder;
pub mod error;
pub mod session;

pub use camera::{CameraAccess, Frame, PermissionState};
pub use decoder::{FrameDecoder, RxingDecoder};
pub use error::{CameraError, ScanError, ScanResult};
pub use session::{ScanEvent, ScanSession, Scanner};

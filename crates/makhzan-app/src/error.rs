//! # App Error Type
//!
//! Unified boundary error for everything the UI shell invokes.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Error Flow in Makhzan                              │
//! │                                                                         │
//! │  UI Shell                       App Layer                               │
//! │  ────────                       ─────────                               │
//! │                                                                         │
//! │  create_product(draft)                                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐   │
//! │  │  Validation failed? ── ValidationError ──────────┐               │   │
//! │  │  Image undecodable? ── MediaError::Decode ───────┤               │   │
//! │  │  Snapshot unwritable? ─ StoreError ──────────────┼──► AppError   │   │
//! │  │  Camera refused? ────── CameraError ─────────────┘               │   │
//! │  └──────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  { "code": "IMAGE_DECODE", "message": "..." }                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every lower-layer failure is classified into a taxonomy code before it
//! reaches the presentation layer; no raw platform or library error crosses
//! this boundary unlabelled. Each camera failure keeps its own code because
//! the UI shows a distinct remediation screen per kind.

use serde::Serialize;

use makhzan_core::{CoreError, ValidationError};
use makhzan_media::MediaError;
use makhzan_scan::{CameraError, ScanError};
use makhzan_store::StoreError;

/// Boundary error returned from app operations.
///
/// ## Serialization
/// ```json
/// {
///   "code": "LOOKUP_MISS",
///   "message": "No product matches code 'ART-000000000'"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Taxonomy codes for boundary errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Camera access refused or revoked
    PermissionDenied,

    /// No camera hardware available
    DeviceNotFound,

    /// Camera claimed by another process
    DeviceBusy,

    /// Picked/captured bytes not decodable as an image
    ImageDecode,

    /// Scanned or typed code matches no record
    LookupMiss,

    /// Record with the given id does not exist
    NotFound,

    /// Input validation failed
    Validation,

    /// Persistence failed
    Storage,

    /// Anything that should not reach the user classified further
    Internal,
}

/// Result type for app operations.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Creates a new app error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    /// Creates a lookup-miss error for a scanned code.
    pub fn lookup_miss(code: &str) -> Self {
        AppError::new(
            ErrorCode::LookupMiss,
            format!("No product matches code '{code}'"),
        )
    }

    /// Creates a not-found error for a record id.
    pub fn not_found(id: &str) -> Self {
        AppError::new(ErrorCode::NotFound, format!("Product not found: {id}"))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::Validation, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::Internal, message)
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::validation(err.to_string())
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => AppError::not_found(&id),
            CoreError::BarcodeExhausted { attempts } => AppError::internal(format!(
                "Could not find a free barcode after {attempts} attempts"
            )),
            CoreError::Validation(e) => AppError::validation(e.to_string()),
        }
    }
}

impl From<MediaError> for AppError {
    fn from(err: MediaError) -> Self {
        match err {
            MediaError::Decode(reason) => AppError::new(
                ErrorCode::ImageDecode,
                format!("Image could not be read: {reason}"),
            ),
            MediaError::Encode(e) => {
                tracing::error!("Image encode failed: {}", e);
                AppError::internal("Image encoding failed")
            }
            MediaError::Symbol { payload, reason } => {
                tracing::error!(payload = %payload, "Symbol encode failed: {}", reason);
                AppError::internal("Barcode rendering failed")
            }
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        // Log the underlying cause but keep the displayed message generic
        tracing::error!("Persistence failed: {}", err);
        AppError::new(ErrorCode::Storage, "Saving your catalog failed")
    }
}

impl From<CameraError> for AppError {
    fn from(err: CameraError) -> Self {
        let code = match err {
            CameraError::PermissionDenied => ErrorCode::PermissionDenied,
            CameraError::DeviceNotFound => ErrorCode::DeviceNotFound,
            CameraError::DeviceBusy => ErrorCode::DeviceBusy,
        };
        AppError::new(code, err.to_string())
    }
}

impl From<ScanError> for AppError {
    fn from(err: ScanError) -> Self {
        match err {
            ScanError::Camera(e) => e.into(),
            ScanError::SessionActive | ScanError::SessionStopped => {
                AppError::internal(err.to_string())
            }
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_camera_kind_keeps_its_own_code() {
        assert_eq!(
            AppError::from(CameraError::PermissionDenied).code,
            ErrorCode::PermissionDenied
        );
        assert_eq!(
            AppError::from(CameraError::DeviceNotFound).code,
            ErrorCode::DeviceNotFound
        );
        assert_eq!(
            AppError::from(CameraError::DeviceBusy).code,
            ErrorCode::DeviceBusy
        );
    }

    #[test]
    fn test_decode_failure_maps_to_image_decode() {
        let err: AppError = MediaError::Decode("bad header".to_string()).into();
        assert_eq!(err.code, ErrorCode::ImageDecode);
        assert!(err.message.contains("bad header"));
    }

    #[test]
    fn test_codes_serialize_screaming_snake() {
        let err = AppError::lookup_miss("ART-000000000");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "LOOKUP_MISS");
    }
}

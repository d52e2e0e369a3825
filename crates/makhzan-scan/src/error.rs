//! # Scan Error Types
//!
//! Two layers of failure: the camera itself (hardware and permission) and
//! the session protocol (double-start, double-stop).
//!
//! Camera errors are kept as a closed set because the UI shows a distinct
//! remediation path for each one.

use thiserror::Error;

/// Failures opening or probing the device camera.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CameraError {
    /// The user or platform refused camera access.
    ///
    /// ## Behavior
    /// Not retryable in-app once the platform remembers the refusal; the
    /// gate layer surfaces settings guidance instead of retry.
    #[error("Camera permission denied")]
    PermissionDenied,

    /// No camera device is present.
    ///
    /// ## When This Occurs
    /// - Desktop machines without a webcam
    /// - Camera hardware disabled at the OS level
    #[error("No camera device found")]
    DeviceNotFound,

    /// A camera exists but another application holds it.
    #[error("Camera is busy in another application")]
    DeviceBusy,
}

/// Failures of the scan session protocol.
#[derive(Debug, Error)]
pub enum ScanError {
    /// A session is already running on this scanner.
    #[error("A scan session is already active")]
    SessionActive,

    /// The session was already stopped.
    #[error("Scan session already stopped")]
    SessionStopped,

    /// The camera failed underneath the session.
    #[error(transparent)]
    Camera(#[from] CameraError),
}

/// Result type for scan operations.
pub type ScanResult<T> = Result<T, ScanError>;

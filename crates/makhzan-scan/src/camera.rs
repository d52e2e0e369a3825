//! # Camera Access
//!
//! The seam between the session loop and real camera hardware. Production
//! wires a platform capture implementation behind [`CameraAccess`]; tests
//! wire scripted fakes.
//!
//! Frames arrive as raw luma planes because every symbol detector works on
//! luminance; color conversion belongs to the capture side.

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::error::CameraError;

// =============================================================================
// Permission
// =============================================================================

/// Platform camera-permission state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionState {
    /// Access granted; the camera can be opened.
    Granted,
    /// Access refused and remembered by the platform.
    Denied,
    /// Not yet decided; a request will show the platform prompt.
    Prompt,
}

// =============================================================================
// Frame
// =============================================================================

/// One captured camera frame as an 8-bit luma plane.
#[derive(Clone)]
pub struct Frame {
    /// Row-major luminance samples, `width * height` bytes.
    pub luma: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl std::fmt::Debug for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Frame({}x{})", self.width, self.height)
    }
}

// =============================================================================
// Camera Trait
// =============================================================================

/// Access to the device camera.
///
/// `open` hands back the receiving end of a frame channel; the capture side
/// stops producing when the session drops the receiver, and [`close`] forces
/// the hardware released immediately.
///
/// [`close`]: CameraAccess::close
#[async_trait]
pub trait CameraAccess: Send + Sync {
    /// Current permission state, without prompting.
    async fn permission(&self) -> PermissionState;

    /// Asks the platform for access, prompting if undecided.
    async fn request_permission(&self) -> Result<PermissionState, CameraError>;

    /// Opens the camera and starts frame capture.
    async fn open(&self) -> Result<mpsc::Receiver<Frame>, CameraError>;

    /// Releases the camera hardware.
    async fn close(&self);
}

//! # Permission Gate
//!
//! The camera-permission front door. Every scan attempt passes through
//! here first, so the session code can assume access has been settled.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Permission Gate Flow                               │
//! │                                                                         │
//! │  ensure_access()                                                        │
//! │       │                                                                 │
//! │       ├─ Granted ──────────────► mark onboarding complete ──► Ok        │
//! │       │                                                                 │
//! │       ├─ Prompt ──► request ──┬─ Granted ──► mark complete ──► Ok       │
//! │       │                       └─ Denied ───► PermissionDenied           │
//! │       │                                                                 │
//! │       └─ Denied ───────────────► PermissionDenied                       │
//! │                                  (UI shows remediation(), not retry)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The platform can revoke or grant access outside our request flow, so the
//! gate probes fresh state on every call instead of caching a grant.

use std::sync::Arc;

use tracing::{info, warn};

use makhzan_scan::{CameraAccess, CameraError, PermissionState};
use makhzan_store::OnboardingFlag;

use crate::error::AppResult;

/// Guards camera access and owns the onboarding marker.
pub struct PermissionGate {
    camera: Arc<dyn CameraAccess>,
    onboarding: OnboardingFlag,
}

impl PermissionGate {
    pub fn new(camera: Arc<dyn CameraAccess>, onboarding: OnboardingFlag) -> Self {
        PermissionGate { camera, onboarding }
    }

    /// True when the intro flow has never completed on this device.
    pub async fn needs_onboarding(&self) -> bool {
        !self.onboarding.is_complete().await
    }

    /// Settles camera access, prompting the user if the platform has not
    /// decided yet. On the first successful grant the onboarding marker is
    /// persisted so the intro flow never shows again.
    pub async fn ensure_access(&self) -> AppResult<()> {
        let state = match self.camera.permission().await {
            PermissionState::Granted => PermissionState::Granted,
            PermissionState::Denied => PermissionState::Denied,
            PermissionState::Prompt => {
                info!("Camera permission undecided, prompting");
                self.camera.request_permission().await?
            }
        };

        match state {
            PermissionState::Granted => {
                if !self.onboarding.is_complete().await {
                    // a failed marker write only re-shows the intro once
                    if let Err(e) = self.onboarding.mark_complete().await {
                        warn!(error = %e, "Could not persist onboarding marker");
                    }
                }
                Ok(())
            }
            PermissionState::Denied | PermissionState::Prompt => {
                warn!("Camera permission denied");
                Err(CameraError::PermissionDenied.into())
            }
        }
    }
}

/// Platform remediation guidance for each camera failure.
///
/// Denial is remembered by the platform, so an in-app retry is pointless;
/// the user has to flip the setting themselves and these strings tell them
/// where.
pub fn remediation(err: &CameraError) -> &'static str {
    match err {
        CameraError::PermissionDenied => {
            if cfg!(target_os = "macos") {
                "Open System Settings > Privacy & Security > Camera and enable access for this app, then try again."
            } else if cfg!(target_os = "windows") {
                "Open Settings > Privacy & security > Camera and allow camera access for this app, then try again."
            } else {
                "Enable camera access for this app in your system's privacy settings, then try again."
            }
        }
        CameraError::DeviceNotFound => {
            "No camera was found on this device. Connect a camera, or add products from saved photos instead."
        }
        CameraError::DeviceBusy => {
            "The camera appears to be in use by another application. Close it and try again."
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # Onboarding Flag
//!
//! One persisted boolean: has the camera-permission onboarding flow been
//! completed on this device. Stored in its own slot so clearing the catalog
//! never re-triggers onboarding, and vice versa.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::backend::StorageBackend;
use crate::error::StoreResult;

/// Slot name for the onboarding marker.
pub const ONBOARDING_SLOT: &str = "makhzan_onboarding_complete";

/// The persisted onboarding marker.
pub struct OnboardingFlag {
    backend: Arc<dyn StorageBackend>,
}

impl OnboardingFlag {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        OnboardingFlag { backend }
    }

    /// True once onboarding has completed on this device.
    ///
    /// Absence and read failure both mean "not complete": the worst outcome
    /// is showing the intro flow one extra time.
    pub async fn is_complete(&self) -> bool {
        match self.backend.read(ONBOARDING_SLOT).await {
            Ok(Some(raw)) => raw.trim() == "true",
            Ok(None) => false,
            Err(e) => {
                warn!(error = %e, "Onboarding flag unreadable, treating as incomplete");
                false
            }
        }
    }

    /// Marks onboarding complete.
    pub async fn mark_complete(&self) -> StoreResult<()> {
        self.backend.write(ONBOARDING_SLOT, "true").await?;
        debug!("Onboarding marked complete");
        Ok(())
    }

    /// Clears the marker, re-arming the intro flow.
    pub async fn reset(&self) -> StoreResult<()> {
        self.backend.remove(ONBOARDING_SLOT).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

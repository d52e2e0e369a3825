//! # Navigation Model
//!
//! An explicit finite-state view model, decoupled from rendering. The shell
//! asks "what view am I on" and feeds events; it never pokes view state
//! directly.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Navigation States                                 │
//! │                                                                         │
//! │               StartAdd ┌────────────┐ GoHome / saved                    │
//! │          ┌────────────►│ AddProduct ├──────────────┐                    │
//! │          │             └────────────┘              │                    │
//! │    ┌─────┴────┐                                    ▼                    │
//! │    │   Home   │◄──────────────────────────── ┌───────────┐              │
//! │    └─────┬────┘  GoHome                      │ Inventory │              │
//! │          │                                   └─────┬─────┘              │
//! │          │ StartScan                               │ OpenDetail         │
//! │          ▼                                         ▼                    │
//! │    ┌──────────┐  OpenDetail (scan hit)      ┌───────────────┐           │
//! │    │ Scanner  ├─────────────────────────────►│ ProductDetail │           │
//! │    └──────────┘                              └───────────────┘           │
//! │                                                                         │
//! │  GoHome is legal from every state. Any other event fired from a state   │
//! │  it is not wired to is ignored and logged, never a panic.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, warn};

// =============================================================================
// Views and Events
// =============================================================================

/// The view the shell should currently render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// Landing view: summary counts and the three newest items.
    Home,
    /// Product entry form.
    AddProduct,
    /// Live camera scanning view.
    Scanner,
    /// Full catalog list with search.
    Inventory,
    /// One product, with its barcode label.
    ProductDetail { product_id: String },
}

/// A navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    GoHome,
    StartAdd,
    StartScan,
    OpenInventory,
    OpenDetail { product_id: String },
}

// =============================================================================
// Navigator
// =============================================================================

/// Holds the current view and applies transitions.
#[derive(Debug)]
pub struct Nav {
    current: View,
}

impl Default for Nav {
    fn default() -> Self {
        Nav { current: View::Home }
    }
}

impl Nav {
    pub fn new() -> Self {
        Nav::default()
    }

    /// The view currently on screen.
    pub fn current(&self) -> &View {
        &self.current
    }

    /// Applies a navigation event.
    ///
    /// Returns `true` when the view changed. Events not wired from the
    /// current state leave it unchanged and log the attempt.
    pub fn apply(&mut self, event: NavEvent) -> bool {
        let next = match (&self.current, &event) {
            (_, NavEvent::GoHome) => Some(View::Home),
            (View::Home, NavEvent::StartAdd) => Some(View::AddProduct),
            (View::Home, NavEvent::StartScan) => Some(View::Scanner),
            (View::Home | View::AddProduct | View::ProductDetail { .. }, NavEvent::OpenInventory) => {
                Some(View::Inventory)
            }
            (View::Scanner | View::Inventory, NavEvent::OpenDetail { product_id }) => {
                Some(View::ProductDetail {
                    product_id: product_id.clone(),
                })
            }
            _ => None,
        };

        match next {
            Some(view) => {
                debug!(from = ?self.current, to = ?view, "Navigation");
                self.current = view;
                true
            }
            None => {
                warn!(state = ?self.current, event = ?event, "Ignored navigation event");
                false
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_home() {
        assert_eq!(*Nav::new().current(), View::Home);
    }

    #[test]
    fn test_home_to_scanner_to_detail() {
        let mut nav = Nav::new();
        assert!(nav.apply(NavEvent::StartScan));
        assert_eq!(*nav.current(), View::Scanner);

        assert!(nav.apply(NavEvent::OpenDetail {
            product_id: "p1".to_string()
        }));
        assert_eq!(
            *nav.current(),
            View::ProductDetail {
                product_id: "p1".to_string()
            }
        );
    }

    #[test]
    fn test_add_flow_lands_in_inventory() {
        let mut nav = Nav::new();
        nav.apply(NavEvent::StartAdd);
        assert!(nav.apply(NavEvent::OpenInventory));
        assert_eq!(*nav.current(), View::Inventory);
    }

    #[test]
    fn test_go_home_is_legal_everywhere() {
        let mut nav = Nav::new();
        nav.apply(NavEvent::StartScan);
        assert!(nav.apply(NavEvent::GoHome));
        assert_eq!(*nav.current(), View::Home);

        nav.apply(NavEvent::OpenInventory);
        nav.apply(NavEvent::OpenDetail {
            product_id: "p2".to_string(),
        });
        assert!(nav.apply(NavEvent::GoHome));
        assert_eq!(*nav.current(), View::Home);
    }

    #[test]
    fn test_illegal_event_is_ignored() {
        let mut nav = Nav::new();
        nav.apply(NavEvent::StartScan);
        // cannot open the entry form from the scanner
        assert!(!nav.apply(NavEvent::StartAdd));
        assert_eq!(*nav.current(), View::Scanner);
    }

    #[test]
    fn test_scanner_cannot_open_inventory_directly() {
        let mut nav = Nav::new();
        nav.apply(NavEvent::StartScan);
        assert!(!nav.apply(NavEvent::OpenInventory));
        assert_eq!(*nav.current(), View::Scanner);
    }
}

//! # Application State
//!
//! Core business state for Fuelcheck. This module contains domain state
//! only - no TUI-specific types. Presentation state (field buffers, focus,
//! spinner frame) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── screen: Screen                  // where the user is
//! └── error: Option<InvalidInput>     // blocking validation modal, if any
//! ```
//!
//! State changes only happen through `update(app, action)` in action.rs.

use crate::core::comparison::{ComparisonResult, InvalidInput};

/// The three screens, in the order the user meets them.
///
/// The Result variant carries its payload, so rendering the result screen
/// without a `ComparisonResult` is unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    /// Spinner shown while the app "boots"; replaced by Home after a fixed
    /// delay, with no way back.
    Loading,
    /// The price form. This is where the user spends their time.
    Home,
    /// Verdict display for one calculation.
    Result(ComparisonResult),
}

pub struct App {
    pub screen: Screen,
    /// Validation error awaiting dismissal. Only ever set on Home.
    pub error: Option<InvalidInput>,
}

impl App {
    pub fn new() -> Self {
        Self {
            screen: Screen::Loading,
            error: None,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

//! Application Model
//!
//! This module defines the owned state for the application, threaded
//! explicitly through the event loop:
//!
//! - **NavigationState**: Current directory, listing and cursor
//! - **UiModel**: Preferences and the one-shot clipboard banner
//!
//! Key principles:
//! - Clone + Debug: Can snapshot and compare state
//! - No services: All I/O lives in `App`
//! - Pure accessors: Helper methods are side-effect free

pub mod navigation;
pub mod types;
pub mod ui;

pub use navigation::NavigationState;
pub use types::*;
pub use ui::{Banner, UiModel};

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    /// Current directory, listing and cursor
    pub navigation: NavigationState,

    /// UI preferences and banner
    pub ui: UiModel,
}

impl Model {
    pub fn new(navigation: NavigationState, ui: UiModel) -> Self {
        Self { navigation, ui }
    }

    /// Currently highlighted entry (if any)
    pub fn selected_entry(&self) -> Option<&Entry> {
        self.navigation.selected()
    }
}

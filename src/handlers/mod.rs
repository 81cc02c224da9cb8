//! Event Handlers
//!
//! - keyboard: User keyboard input
//!
//! Handlers take `&mut App` and apply one event per call.

pub mod keyboard;

// Re-export for convenience
pub use keyboard::handle_key;

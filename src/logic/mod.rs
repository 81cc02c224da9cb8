//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - errors: Error formatting for on-screen messages
//! - layout: Scroll window calculations
//! - navigation: Cursor movement with wrapping
//! - path: Start path resolution, validation and parent lookup
//! - sorting: Listing sort order

pub mod errors;
pub mod layout;
pub mod navigation;
pub mod path;
pub mod sorting;

//! External Services
//!
//! This module contains services that interact with external systems:
//! - directory: Filesystem directory listings
//! - clipboard: System clipboard via an external command

pub mod clipboard;
pub mod directory;

// Re-export commonly used types for convenience
pub use clipboard::{ClipboardSink, CommandClipboard};
pub use directory::{DirectoryReader, FsDirectoryReader};

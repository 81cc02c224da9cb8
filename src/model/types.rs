//! Shared data types for the navigation model

use std::path::{Path, PathBuf};

/// One child of a directory listing
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// File name without any path separators
    pub name: String,
    /// Absolute path (parent directory joined with `name`)
    pub path: PathBuf,
    pub is_dir: bool,
}

impl Entry {
    /// Build an entry for `name` inside `parent`
    pub fn new(parent: &Path, name: impl Into<String>, is_dir: bool) -> Self {
        let name = name.into();
        let path = parent.join(&name);
        Self { name, path, is_dir }
    }
}

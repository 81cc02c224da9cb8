//! Directory listing service
//!
//! Reads one directory level from disk and returns it sorted. Nothing is
//! cached: every navigation re-reads the live filesystem.

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::logic::sorting::sort_entries;
use crate::model::Entry;

/// Source of directory listings
pub trait DirectoryReader {
    /// List the immediate children of `dir`, sorted directories-first
    fn list(&self, dir: &Path) -> Result<Vec<Entry>>;
}

/// Reads listings from the local filesystem
#[derive(Debug, Default, Clone, Copy)]
pub struct FsDirectoryReader;

impl DirectoryReader for FsDirectoryReader {
    fn list(&self, dir: &Path) -> Result<Vec<Entry>> {
        let mut entries = Vec::new();

        for dir_entry in fs::read_dir(dir)? {
            let dir_entry = match dir_entry {
                Ok(dir_entry) => dir_entry,
                Err(e) => {
                    log::warn!("Skipping unreadable entry in {:?}: {}", dir, e);
                    continue;
                }
            };

            let path = dir_entry.path();
            // Symlinks are classified by their target so linked directories can be entered
            let is_dir = match dir_entry.file_type() {
                Ok(file_type) if file_type.is_symlink() => {
                    fs::metadata(&path).map(|m| m.is_dir()).unwrap_or(false)
                }
                Ok(file_type) => file_type.is_dir(),
                Err(_) => false,
            };

            entries.push(Entry {
                name: dir_entry.file_name().to_string_lossy().into_owned(),
                path,
                is_dir,
            });
        }

        sort_entries(&mut entries);
        log::debug!("Listed {:?}: {} entries", dir, entries.len());
        Ok(entries)
    }
}

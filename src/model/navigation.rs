//! Navigation Model
//!
//! This sub-model contains all state related to navigation:
//! the current directory, its listing and the cursor.

use anyhow::Result;
use std::path::{Path, PathBuf};

use super::types::Entry;
use crate::logic;

/// Current directory, its listing, and the highlighted entry
///
/// Whenever `entries` is non-empty `cursor < entries.len()`; when it is
/// empty `cursor == 0`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationState {
    /// Absolute path of the directory being shown
    pub current_path: PathBuf,

    /// Sorted listing of `current_path`
    pub entries: Vec<Entry>,

    /// Index of the highlighted entry
    pub cursor: usize,

    /// Why the last listing read failed, if it did
    pub load_error: Option<String>,
}

impl NavigationState {
    /// Create state for `path` with no listing loaded yet
    pub fn new(path: PathBuf) -> Self {
        Self {
            current_path: path,
            entries: Vec::new(),
            cursor: 0,
            load_error: None,
        }
    }

    /// Switch to `path` with the result of listing it
    ///
    /// A failed listing leaves the view empty and keeps the error text for
    /// display. The cursor always returns to the top.
    pub fn replace_listing(&mut self, path: PathBuf, listing: Result<Vec<Entry>>) {
        self.current_path = path;
        match listing {
            Ok(entries) => {
                self.entries = entries;
                self.load_error = None;
            }
            Err(e) => {
                self.entries = Vec::new();
                self.load_error = Some(logic::errors::format_error_message(&e));
            }
        }
        self.cursor = 0;
    }

    pub fn current_path(&self) -> &Path {
        &self.current_path
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Currently highlighted entry, if any
    pub fn selected(&self) -> Option<&Entry> {
        self.entries.get(self.cursor)
    }

    /// Move the cursor up, wrapping from the first entry to the last
    pub fn move_up(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        self.cursor = logic::navigation::prev_cursor(self.cursor, self.entries.len());
    }

    /// Move the cursor down, wrapping from the last entry to the first
    pub fn move_down(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        self.cursor = logic::navigation::next_cursor(self.cursor, self.entries.len());
    }

    /// Reset a cursor that no longer addresses an entry
    pub fn clamp_cursor(&mut self) {
        self.cursor = logic::navigation::clamp_cursor(self.cursor, self.entries.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(names: &[&str]) -> NavigationState {
        let dir = PathBuf::from("/data");
        let entries = names
            .iter()
            .map(|name| Entry::new(&dir, *name, false))
            .collect();
        let mut state = NavigationState::new(PathBuf::from("/"));
        state.replace_listing(dir, Ok(entries));
        state
    }

    #[test]
    fn test_navigation_state_creation() {
        let state = NavigationState::new(PathBuf::from("/tmp"));
        assert_eq!(state.cursor, 0);
        assert!(state.is_empty());
        assert!(state.selected().is_none());
        assert!(state.load_error.is_none());
    }

    #[test]
    fn test_move_wraps_both_ways() {
        let mut state = state_with(&["a", "b", "c"]);
        state.move_up();
        assert_eq!(state.cursor, 2);
        state.move_down();
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_single_item_stays_put() {
        let mut state = state_with(&["only"]);
        state.move_down();
        assert_eq!(state.cursor, 0);
        state.move_up();
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_moves_on_empty_listing_are_noops() {
        let mut state = state_with(&[]);
        state.move_down();
        state.move_up();
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_replace_listing_resets_cursor() {
        let mut state = state_with(&["a", "b", "c"]);
        state.move_down();
        state.move_down();
        state.replace_listing(PathBuf::from("/other"), Ok(Vec::new()));
        assert_eq!(state.cursor, 0);
        assert_eq!(state.current_path(), Path::new("/other"));
    }

    #[test]
    fn test_failed_listing_is_empty_with_error() {
        let mut state = state_with(&["a", "b"]);
        state.move_down();
        state.replace_listing(
            PathBuf::from("/locked"),
            Err(anyhow::anyhow!("Permission denied (os error 13)")),
        );
        assert!(state.is_empty());
        assert_eq!(state.cursor, 0);
        assert_eq!(
            state.load_error.as_deref(),
            Some("Permission denied (os error 13)")
        );
    }

    #[test]
    fn test_clamp_cursor_after_shrink() {
        let mut state = state_with(&["a", "b", "c"]);
        state.cursor = 2;
        state.entries.truncate(1);
        state.clamp_cursor();
        assert_eq!(state.cursor, 0);
    }
}

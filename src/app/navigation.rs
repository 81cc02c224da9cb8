//! Navigation Methods
//!
//! Cursor movement and directory changes. Every directory change re-reads
//! the listing from the reader and puts the cursor back at the top.

use std::path::PathBuf;

use crate::logic;
use crate::App;

impl App {
    /// Switch to `path`, reading its listing
    ///
    /// A failed read leaves an empty listing with the error recorded for display.
    pub(crate) fn change_directory(&mut self, path: PathBuf) {
        let listing = self.reader.list(&path);
        if let Err(e) = &listing {
            log::warn!("Error reading directory {:?}: {:#}", path, e);
        } else {
            log::debug!("Entered {:?}", path);
        }
        self.model.navigation.replace_listing(path, listing);
    }

    pub fn move_up(&mut self) {
        self.model.navigation.move_up();
    }

    pub fn move_down(&mut self) {
        self.model.navigation.move_down();
    }

    /// Confirm the highlighted entry
    ///
    /// Directories are entered. Files have their absolute path copied to the
    /// clipboard and the result is shown as a banner.
    pub fn enter_selected(&mut self) {
        let Some(entry) = self.model.selected_entry() else {
            return;
        };
        let path = entry.path.clone();

        if entry.is_dir {
            self.change_directory(path);
        } else {
            self.copy_to_clipboard(path);
        }
    }

    /// Go to the parent directory; no-op at the filesystem root
    pub fn go_parent(&mut self) {
        let parent = logic::path::parent_dir(self.model.navigation.current_path());
        match parent {
            Some(parent) => self.change_directory(parent),
            None => log::debug!("Already at filesystem root"),
        }
    }
}

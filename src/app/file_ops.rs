//! File Operations
//!
//! Copies a file's absolute path to the clipboard.

use std::path::PathBuf;

use crate::logic;
use crate::model::Banner;
use crate::App;

impl App {
    /// Write `path` to the clipboard and queue the result banner
    ///
    /// Failures are never propagated: the banner carries the error text
    /// and navigation continues.
    pub(crate) fn copy_to_clipboard(&mut self, path: PathBuf) {
        let text = path.display().to_string();

        let banner = match self.clipboard.write_text(&text) {
            Ok(()) => Banner::Copied { path },
            Err(e) => {
                let error = logic::errors::format_error_message(&e);
                log::warn!("Failed to copy {} to clipboard: {}", text, error);
                Banner::CopyFailed { error }
            }
        };

        self.model.ui.show_banner(banner);
    }
}

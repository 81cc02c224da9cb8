//! UI Model
//!
//! This sub-model contains all state related to the user interface:
//! preferences and the one-shot clipboard banner.

use std::path::PathBuf;

/// Result of a clipboard write, shown once in place of the listing
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Banner {
    Copied { path: PathBuf },
    CopyFailed { error: String },
}

/// UI preferences and transient frames
#[derive(Clone, Debug)]
pub struct UiModel {
    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    /// Banner replacing the listing until the next keypress
    pub banner: Option<Banner>,

    /// Set when the user asked to exit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new(vim_mode: bool) -> Self {
        Self {
            vim_mode,
            banner: None,
            should_quit: false,
        }
    }

    pub fn show_banner(&mut self, banner: Banner) {
        self.banner = Some(banner);
    }

    /// Dismiss the banner, returning whether one was showing
    pub fn dismiss_banner(&mut self) -> bool {
        self.banner.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_is_one_shot() {
        let mut ui = UiModel::new(false);
        assert!(!ui.dismiss_banner());

        ui.show_banner(Banner::CopyFailed {
            error: "no clipboard".to_string(),
        });
        assert!(ui.dismiss_banner());
        assert!(ui.banner.is_none());
        assert!(!ui.dismiss_banner());
    }
}

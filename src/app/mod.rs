//! App Orchestration Methods
//!
//! `App` owns the model together with the services it talks to. Methods are
//! grouped by domain in submodules and orchestrate between:
//! - Model state (in src/model/)
//! - Services (directory reader, clipboard)
//! - Logic (pure business logic in src/logic/)
//!
//! Methods are kept as `impl App` but organized by functional domain
//! for better discoverability and maintainability.

mod event_loop;
pub(crate) mod file_ops;
pub(crate) mod navigation;

pub use event_loop::run_app;

use std::path::PathBuf;

use crate::config::Config;
use crate::model::{Model, NavigationState, UiModel};
use crate::services::{ClipboardSink, DirectoryReader};
use crate::ui::icons::IconRenderer;

pub struct App {
    pub model: Model,

    pub(crate) icon_renderer: IconRenderer,
    reader: Box<dyn DirectoryReader>,
    clipboard: Box<dyn ClipboardSink>,
}

impl App {
    /// Create the app and load the listing for `start_path`
    pub fn new(
        config: &Config,
        start_path: PathBuf,
        reader: Box<dyn DirectoryReader>,
        clipboard: Box<dyn ClipboardSink>,
    ) -> Self {
        let model = Model::new(
            NavigationState::new(start_path.clone()),
            UiModel::new(config.vim_mode),
        );

        let mut app = Self {
            model,
            icon_renderer: IconRenderer::new(config.icon_mode),
            reader,
            clipboard,
        };
        app.change_directory(start_path);
        app
    }
}

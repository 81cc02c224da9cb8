use crate::ui::icons::IconMode;

/// Runtime settings resolved from the command line
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Clipboard program and arguments; auto-detected when unset
    pub clipboard_command: Option<String>,
    pub vim_mode: bool,
    pub icon_mode: IconMode,
    pub debug: bool,
}

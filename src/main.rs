use anyhow::{Context, Result};
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::{env, fs::File};

use pathpick::{
    app::run_app,
    config::Config,
    logic,
    services::{CommandClipboard, FsDirectoryReader},
    terminal::{self, TerminalGuard},
    ui::icons::IconMode,
    utils, App,
};

/// Browse directories and copy a file's absolute path to the clipboard
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory to start in (default: current directory)
    path: Option<String>,

    /// Enable debug logging to <temp dir>/pathpick-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (hjkl, q)
    #[arg(long)]
    vim: bool,

    /// Clipboard command that reads text on stdin (default: auto-detect)
    #[arg(long, value_name = "COMMAND")]
    clipboard_command: Option<String>,

    /// Icon set for the listing
    #[arg(long, value_enum, default_value_t)]
    icons: IconMode,
}

impl Args {
    fn to_config(&self) -> Config {
        Config {
            clipboard_command: self.clipboard_command.clone(),
            vim_mode: self.vim,
            icon_mode: self.icons,
            debug: self.debug,
        }
    }
}

fn init_logging(debug: bool) {
    if !debug {
        return;
    }

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(utils::get_debug_log_path()) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }
}

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();
    let config = args.to_config();

    init_logging(config.debug);
    log::debug!("Debug mode enabled");

    // Resolve and validate the start directory before touching the terminal
    let cwd = env::current_dir().context("Error accessing path: current directory")?;
    let start_path = logic::path::resolve_start_path(args.path.as_deref(), &cwd);
    logic::path::validate_start_dir(&start_path)?;
    log::debug!("Starting in {:?}", start_path);

    let clipboard = match &config.clipboard_command {
        Some(command) => CommandClipboard::from_command_line(command)?,
        None => CommandClipboard::detect(),
    };
    log::debug!("Using clipboard command: {}", clipboard.describe());

    let mut app = App::new(
        &config,
        start_path,
        Box::new(FsDirectoryReader),
        Box::new(clipboard),
    );

    terminal::install_panic_hook();
    terminal::install_signal_handlers()?;

    // Setup terminal; the guard restores it on every way out of main
    let _guard = TerminalGuard;
    let mut tui = terminal::init()?;

    let result = run_app(&mut tui, &mut app);
    if let Err(e) = &result {
        log::error!("Event loop failed: {:#}", e);
    }

    // Restore before anyhow prints the error
    terminal::restore();
    result
}

//! Terminal setup and teardown
//!
//! Raw mode is entered once and released by a single idempotent
//! [`restore`] routine. It runs from the [`TerminalGuard`] drop, from the
//! panic hook, and after a termination signal ends the event loop, so the
//! user's terminal is never left raw.

use anyhow::Result;
use crossterm::{
    cursor::{MoveTo, Show},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

// Set while raw mode is active
static RAW_MODE_ACTIVE: AtomicBool = AtomicBool::new(false);

// Set by the signal handler, polled by the event loop
static TERMINATE_REQUESTED: AtomicBool = AtomicBool::new(false);

/// Enter raw mode and the alternate screen
pub fn init() -> Result<Tui> {
    enable_raw_mode()?;
    RAW_MODE_ACTIVE.store(true, Ordering::SeqCst);

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;
    Ok(terminal)
}

/// Return the terminal to cooperative mode; safe to call any number of times
pub fn restore() {
    if !RAW_MODE_ACTIVE.swap(false, Ordering::SeqCst) {
        return;
    }

    // Best effort: the process is exiting either way
    let mut stdout = io::stdout();
    let _ = execute!(stdout, Clear(ClearType::All), MoveTo(0, 0), LeaveAlternateScreen, Show);
    let _ = disable_raw_mode();
}

/// Restores the terminal when dropped, on every return path out of `main`
pub struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore();
    }
}

/// Restore the terminal before a panic message is printed, then exit with 1
pub fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore();
        original(info);
        std::process::exit(1);
    }));
}

/// Whether SIGINT, SIGTERM or SIGHUP has been received
pub fn termination_requested() -> bool {
    TERMINATE_REQUESTED.load(Ordering::SeqCst)
}

/// Ask the event loop to end after its current iteration
pub fn request_termination() {
    // Only an atomic store: this runs inside the signal handler
    TERMINATE_REQUESTED.store(true, Ordering::SeqCst);
}

#[cfg(unix)]
extern "C" fn on_terminate_signal(_signal: std::ffi::c_int) {
    request_termination();
}

/// Route termination signals into [`termination_requested`]
#[cfg(unix)]
pub fn install_signal_handlers() -> Result<()> {
    use nix::sys::signal::{sigaction, SaFlags, SigAction, SigHandler, SigSet, Signal};

    let action = SigAction::new(
        SigHandler::Handler(on_terminate_signal),
        SaFlags::empty(),
        SigSet::empty(),
    );
    for signal in [Signal::SIGINT, Signal::SIGTERM, Signal::SIGHUP] {
        // SAFETY: the handler only stores into an atomic
        unsafe { sigaction(signal, &action)? };
    }
    Ok(())
}

#[cfg(not(unix))]
pub fn install_signal_handlers() -> Result<()> {
    Ok(())
}

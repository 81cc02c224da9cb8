//! Event Loop
//!
//! One full clear-and-draw per event. Waiting for input wakes periodically
//! so a termination signal ends the loop cleanly.

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;

use crate::{handlers, terminal, ui, App};

// How often the loop wakes to notice a termination signal
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Run until the user exits or a termination signal arrives
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Full clear every frame, no incremental diffing
        terminal.clear()?;
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        // Block until a key or resize arrives, waking to check for signals
        loop {
            if terminal::termination_requested() {
                log::debug!("Termination signal received");
                return Ok(());
            }

            if event::poll(POLL_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) => {
                        handlers::handle_key(app, key);
                        break;
                    }
                    Event::Resize(_, _) => break,
                    _ => {}
                }
            }
        }

        if app.model.ui.should_quit {
            return Ok(());
        }
    }
}

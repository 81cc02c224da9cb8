//! Tests for the clipboard result banner
//!
//! Selecting a file writes its absolute path to the clipboard and shows a
//! one-shot banner. The next keypress only dismisses the banner: the
//! listing frame comes back exactly as it was.

use anyhow::{bail, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use std::cell::RefCell;
use std::fs;
use std::path::Path;
use std::rc::Rc;

use pathpick::config::Config;
use pathpick::handlers::handle_key;
use pathpick::model::Banner;
use pathpick::services::{ClipboardSink, FsDirectoryReader};
use pathpick::ui::{self, icons::IconMode, render::build_frame_lines};
use pathpick::App;

/// Clipboard that records every write
struct RecordingClipboard {
    writes: Rc<RefCell<Vec<String>>>,
}

impl ClipboardSink for RecordingClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.writes.borrow_mut().push(text.to_string());
        Ok(())
    }
}

/// Clipboard that always fails
struct FailingClipboard;

impl ClipboardSink for FailingClipboard {
    fn write_text(&mut self, _text: &str) -> Result<()> {
        bail!("no clipboard available")
    }
}

fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn ascii_config() -> Config {
    Config {
        icon_mode: IconMode::Ascii,
        ..Config::default()
    }
}

/// Helper: temp dir with one subdirectory and two files
fn create_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::create_dir(dir.path().join("docs")).unwrap();
    fs::write(dir.path().join("a.txt"), "a").unwrap();
    fs::write(dir.path().join("b.txt"), "b").unwrap();
    dir
}

fn draw(app: &mut App) -> String {
    let backend = TestBackend::new(200, 30);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::render(f, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn app_with(dir: &Path, clipboard: Box<dyn ClipboardSink>) -> App {
    App::new(&ascii_config(), dir.to_path_buf(), Box::new(FsDirectoryReader), clipboard)
}

#[test]
fn test_copy_success_shows_path_banner() {
    let dir = create_dir();
    let writes = Rc::new(RefCell::new(Vec::new()));
    let mut app = app_with(
        dir.path(),
        Box::new(RecordingClipboard {
            writes: Rc::clone(&writes),
        }),
    );

    // docs, a.txt, b.txt -> highlight b.txt
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    let listing_before = build_frame_lines(&app);

    press(&mut app, KeyCode::Enter);

    let expected = dir.path().join("b.txt");
    assert_eq!(*writes.borrow(), vec![expected.display().to_string()]);
    assert_eq!(
        app.model.ui.banner,
        Some(Banner::Copied {
            path: expected.clone()
        })
    );
    assert_eq!(app.model.navigation.cursor, 2);
    assert_eq!(app.model.navigation.current_path, dir.path());

    let frame = draw(&mut app);
    assert!(frame.contains("Copied to clipboard:"));
    assert!(frame.contains(&expected.display().to_string()));
    assert!(!frame.contains("Backspace"));

    // Any key returns to the unchanged listing; the key does not navigate
    press(&mut app, KeyCode::Down);
    assert!(app.model.ui.banner.is_none());
    assert_eq!(app.model.navigation.cursor, 2);
    assert_eq!(build_frame_lines(&app), listing_before);

    let frame = draw(&mut app);
    assert!(frame.contains("> [F] b.txt"));
    assert!(!frame.contains("Copied to clipboard"));
}

#[test]
fn test_copy_failure_shows_error_banner() {
    let dir = create_dir();
    let mut app = app_with(dir.path(), Box::new(FailingClipboard));

    press(&mut app, KeyCode::Down);
    let listing_before = build_frame_lines(&app);
    press(&mut app, KeyCode::Enter);

    assert_eq!(
        app.model.ui.banner,
        Some(Banner::CopyFailed {
            error: "no clipboard available".to_string()
        })
    );
    let frame = draw(&mut app);
    assert!(frame.contains("Failed to copy to clipboard: no clipboard available"));
    assert!(frame.contains("Press any key to return..."));

    press(&mut app, KeyCode::Char('x'));
    assert!(app.model.ui.banner.is_none());
    assert_eq!(build_frame_lines(&app), listing_before);
}

#[test]
fn test_exit_key_while_banner_showing_quits() {
    let dir = create_dir();
    let mut app = app_with(dir.path(), Box::new(FailingClipboard));

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert!(app.model.ui.banner.is_some());

    press(&mut app, KeyCode::Esc);
    assert!(app.model.ui.should_quit);
}

#[test]
fn test_listing_frame_layout() {
    let dir = create_dir();
    let mut app = app_with(dir.path(), Box::new(FailingClipboard));

    let frame = draw(&mut app);
    assert!(frame.contains(&format!("[D] {}", dir.path().display())));
    assert!(frame.contains("> [D] docs"));
    assert!(frame.contains("  [F] a.txt"));
    assert!(frame.contains("↑↓ Move | Enter Open/Copy | Backspace Up | Esc Exit"));
    assert!(!frame.contains("Showing"));
}

#[test]
fn test_render_clamps_stale_cursor() {
    let dir = create_dir();
    let mut app = app_with(dir.path(), Box::new(FailingClipboard));

    app.model.navigation.cursor = 2;
    app.model.navigation.entries.truncate(1);
    draw(&mut app);
    assert_eq!(app.model.navigation.cursor, 0);
}

#[test]
fn test_scrolled_listing_footer() {
    let dir = tempfile::tempdir().unwrap();
    for i in 0..40 {
        fs::write(dir.path().join(format!("f{:02}.txt", i)), "").unwrap();
    }
    let mut app = app_with(dir.path(), Box::new(FailingClipboard));
    for _ in 0..9 {
        press(&mut app, KeyCode::Down);
    }

    let frame = draw(&mut app);
    assert!(frame.contains("Showing 3-17 of 40 items (10/40)"));
    assert!(frame.contains("> [F] f09.txt"));
    assert!(!frame.contains("f01.txt"));
    assert!(!frame.contains("f17.txt"));
}

//! Listing frame
//!
//! Pure conversion of navigation state into the lines of a frame: header,
//! the visible scroll window of rows, and the scroll footer.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use super::icons::IconRenderer;
use crate::logic::layout::{is_scrolled, scroll_window, ScrollWindow, MAX_VISIBLE_ITEMS};
use crate::logic::navigation::clamp_cursor;
use crate::model::{Entry, NavigationState};

/// Footer text for a scrolled listing, 1-based
pub fn scroll_footer_text(window: ScrollWindow, total: usize, cursor: usize) -> String {
    format!(
        "Showing {}-{} of {} items ({}/{})",
        window.start + 1,
        window.end,
        total,
        cursor + 1,
        total
    )
}

fn build_header_line(state: &NavigationState, icons: &IconRenderer) -> Line<'static> {
    Line::from(Span::styled(
        format!("{} {}", icons.header_icon(), state.current_path.display()),
        Style::default()
            .fg(icons.theme().header_color)
            .add_modifier(Modifier::BOLD),
    ))
}

fn build_row(entry: &Entry, selected: bool, icons: &IconRenderer) -> Line<'static> {
    let name = if selected {
        Span::styled(
            entry.name.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::raw(entry.name.clone())
    };

    Line::from(vec![
        icons.marker(selected),
        Span::raw(" "),
        icons.entry_icon(entry.is_dir),
        Span::raw(" "),
        name,
    ])
}

/// Build every line of the normal listing frame
pub fn build_listing_lines(state: &NavigationState, icons: &IconRenderer) -> Vec<Line<'static>> {
    let mut lines = vec![Line::default(), build_header_line(state, icons), Line::default()];

    if let Some(error) = &state.load_error {
        lines.push(Line::from(Span::styled(
            format!("  Error reading directory: {}", error),
            Style::default().fg(Color::Red),
        )));
    }

    if state.entries.is_empty() {
        lines.push(Line::from(Span::styled(
            "  (Empty directory)",
            Style::default().fg(Color::DarkGray),
        )));
        return lines;
    }

    let total = state.entries.len();
    let cursor = clamp_cursor(state.cursor, total);
    let window = scroll_window(total, cursor, MAX_VISIBLE_ITEMS);

    for (index, entry) in state.entries[window.start..window.end].iter().enumerate() {
        let actual_index = window.start + index;
        lines.push(build_row(entry, actual_index == cursor, icons));
    }

    if is_scrolled(total, MAX_VISIBLE_ITEMS) {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("  {}", scroll_footer_text(window, total, cursor)),
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines
}

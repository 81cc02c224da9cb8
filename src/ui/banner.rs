use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::model::Banner;

/// Build the one-shot clipboard result frame
pub fn build_banner_lines(banner: &Banner) -> Vec<Line<'static>> {
    let mut lines = vec![Line::default()];

    match banner {
        Banner::Copied { path } => {
            let style = Style::default().fg(Color::Green).add_modifier(Modifier::BOLD);
            lines.push(Line::from(Span::styled("✓ Copied to clipboard:", style)));
            lines.push(Line::from(Span::styled(
                path.display().to_string(),
                Style::default().fg(Color::Green),
            )));
        }
        Banner::CopyFailed { error } => {
            lines.push(Line::from(Span::styled(
                format!("✗ Failed to copy to clipboard: {}", error),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
        }
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Press any key to return...",
        Style::default().fg(Color::DarkGray),
    )));
    lines
}

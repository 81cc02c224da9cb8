use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(vim_mode: bool) -> Vec<Span<'static>> {
    let bindings: [(&'static str, &'static str); 4] = if vim_mode {
        [
            ("j/k", "Move"),
            ("l/Enter", "Open/Copy"),
            ("h/Backspace", "Up"),
            ("q/Esc", "Exit"),
        ]
    } else {
        [
            ("↑↓", "Move"),
            ("Enter", "Open/Copy"),
            ("Backspace", "Up"),
            ("Esc", "Exit"),
        ]
    };

    let mut hotkey_spans = vec![];
    for (idx, (key, action)) in bindings.into_iter().enumerate() {
        if idx > 0 {
            hotkey_spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }
        hotkey_spans.push(Span::styled(key, Style::default().fg(Color::Yellow)));
        hotkey_spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(Color::Gray),
        ));
    }

    hotkey_spans
}

/// Build the static key legend shown under the listing
pub fn build_legend_line(vim_mode: bool) -> Line<'static> {
    Line::from(build_hotkey_spans(vim_mode))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans_to_text(spans: &[Span]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_default_legend() {
        let text = spans_to_text(&build_hotkey_spans(false));
        assert_eq!(text, "↑↓ Move | Enter Open/Copy | Backspace Up | Esc Exit");
    }

    #[test]
    fn test_vim_legend() {
        let text = spans_to_text(&build_hotkey_spans(true));
        assert_eq!(
            text,
            "j/k Move | l/Enter Open/Copy | h/Backspace Up | q/Esc Exit"
        );
    }
}

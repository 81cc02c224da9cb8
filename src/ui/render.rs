use ratatui::{
    text::Line,
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

use super::{banner, legend, listing};
use crate::App;

/// Main render function - draws either the banner or the listing frame
pub fn render(f: &mut Frame, app: &mut App) {
    let area = f.area();

    // Listing may have shrunk under us
    app.model.navigation.clamp_cursor();

    // Nothing from the previous frame survives
    f.render_widget(Clear, area);

    let lines = build_frame_lines(app);
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

/// All lines of the frame the app currently shows
pub fn build_frame_lines(app: &App) -> Vec<Line<'static>> {
    if let Some(banner) = &app.model.ui.banner {
        return banner::build_banner_lines(banner);
    }

    let mut lines = listing::build_listing_lines(&app.model.navigation, &app.icon_renderer);
    lines.push(Line::default());
    lines.push(legend::build_legend_line(app.model.ui.vim_mode));
    lines
}

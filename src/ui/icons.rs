use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

/// Icon display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum IconMode {
    #[default]
    Emoji, // 📂 header, 📁/📄 rows, ➜ marker
    Ascii, // [D]/[F] rows, > marker, for terminals without emoji fonts
}

/// Icon theme using terminal colors (respects user's terminal theme)
#[derive(Debug, Clone)]
pub struct IconTheme {
    pub header_color: Color,
    pub folder_color: Color,
    pub file_color: Color,
    pub marker_color: Color,
}

impl Default for IconTheme {
    fn default() -> Self {
        Self {
            header_color: Color::Cyan,
            folder_color: Color::Blue,
            file_color: Color::White,
            marker_color: Color::Green,
        }
    }
}

/// Produces the styled glyphs used in listing rows
#[derive(Debug, Clone)]
pub struct IconRenderer {
    mode: IconMode,
    theme: IconTheme,
}

impl IconRenderer {
    pub fn new(mode: IconMode) -> Self {
        Self {
            mode,
            theme: IconTheme::default(),
        }
    }

    pub fn theme(&self) -> &IconTheme {
        &self.theme
    }

    /// Icon placed before the current path in the header
    pub fn header_icon(&self) -> &'static str {
        match self.mode {
            IconMode::Emoji => "📂",
            IconMode::Ascii => "[D]",
        }
    }

    /// Directory/file indicator for a row
    pub fn entry_icon(&self, is_dir: bool) -> Span<'static> {
        let (glyph, color) = match (self.mode, is_dir) {
            (IconMode::Emoji, true) => ("📁", self.theme.folder_color),
            (IconMode::Emoji, false) => ("📄", self.theme.file_color),
            (IconMode::Ascii, true) => ("[D]", self.theme.folder_color),
            (IconMode::Ascii, false) => ("[F]", self.theme.file_color),
        };
        Span::styled(glyph, Style::default().fg(color))
    }

    /// Selection marker; blank padding of the same width on other rows
    pub fn marker(&self, selected: bool) -> Span<'static> {
        if !selected {
            return Span::raw(" ");
        }
        let glyph = match self.mode {
            IconMode::Emoji => "➜",
            IconMode::Ascii => ">",
        };
        Span::styled(
            glyph,
            Style::default()
                .fg(self.theme.marker_color)
                .add_modifier(Modifier::BOLD),
        )
    }
}

// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - icons: Icon rendering (emoji and ASCII) with theme colors
// - listing: Header, scroll window rows and scroll footer
// - legend: Renders hotkey legend
// - banner: Renders the one-shot clipboard result frame
// - render: Main orchestration function that coordinates all rendering

pub mod banner;
pub mod icons;
pub mod legend;
pub mod listing;
pub mod render;

// Re-export main render function for convenience
pub use render::render;

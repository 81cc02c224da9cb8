//! Scroll window calculations
//!
//! When a listing holds more entries than fit on screen, only a contiguous
//! window around the cursor is drawn.

/// Maximum number of listing rows drawn at once
pub const MAX_VISIBLE_ITEMS: usize = 15;

/// Half-open range `[start, end)` of listing rows to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollWindow {
    pub start: usize,
    pub end: usize,
}

impl ScrollWindow {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }
}

/// Compute the visible window, centering the cursor when the listing overflows
///
/// `start = clamp(cursor - capacity/2, 0, list_len - capacity)`
pub fn scroll_window(list_len: usize, cursor: usize, capacity: usize) -> ScrollWindow {
    if list_len <= capacity {
        return ScrollWindow { start: 0, end: list_len };
    }

    let start = cursor
        .saturating_sub(capacity / 2)
        .min(list_len - capacity);

    ScrollWindow {
        start,
        end: start + capacity,
    }
}

/// Whether the listing is larger than what fits on screen
pub fn is_scrolled(list_len: usize, capacity: usize) -> bool {
    list_len > capacity
}

//! Cursor movement logic
//!
//! Pure functions for calculating cursor indices with wrapping behavior.
//! An empty listing always yields cursor 0.

/// Keep a cursor inside the listing
///
/// Returns the cursor unchanged when it addresses an entry, otherwise 0.
///
/// # Examples
/// ```
/// use pathpick::logic::navigation::clamp_cursor;
///
/// assert_eq!(clamp_cursor(2, 5), 2);
/// assert_eq!(clamp_cursor(5, 5), 0);
/// assert_eq!(clamp_cursor(3, 0), 0);
/// ```
pub fn clamp_cursor(cursor: usize, list_len: usize) -> usize {
    if cursor < list_len {
        cursor
    } else {
        0
    }
}

/// Calculate the next cursor index with wrapping
///
/// Advances to the next entry. From the last entry wraps to the first.
///
/// # Examples
/// ```
/// use pathpick::logic::navigation::next_cursor;
///
/// // Empty list
/// assert_eq!(next_cursor(0, 0), 0);
///
/// // Normal progression
/// assert_eq!(next_cursor(0, 3), 1);
/// assert_eq!(next_cursor(1, 3), 2);
///
/// // Wrapping at end
/// assert_eq!(next_cursor(2, 3), 0);
/// ```
pub fn next_cursor(cursor: usize, list_len: usize) -> usize {
    if list_len == 0 {
        return 0;
    }

    (clamp_cursor(cursor, list_len) + 1) % list_len
}

/// Calculate the previous cursor index with wrapping
///
/// Moves to the previous entry. From the first entry wraps to the last.
///
/// # Examples
/// ```
/// use pathpick::logic::navigation::prev_cursor;
///
/// // Empty list
/// assert_eq!(prev_cursor(0, 0), 0);
///
/// // Normal progression
/// assert_eq!(prev_cursor(2, 3), 1);
/// assert_eq!(prev_cursor(1, 3), 0);
///
/// // Wrapping at beginning
/// assert_eq!(prev_cursor(0, 3), 2);
/// ```
pub fn prev_cursor(cursor: usize, list_len: usize) -> usize {
    if list_len == 0 {
        return 0;
    }

    (clamp_cursor(cursor, list_len) + list_len - 1) % list_len
}

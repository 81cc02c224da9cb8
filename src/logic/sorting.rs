//! Listing sort order
//!
//! Directories come before files. Within each group names follow Unicode
//! collation (root locale, tertiary strength): accents and case are
//! secondary to the base letters, and the lowercase spelling wins a tie.
//! A final code point comparison keeps the order total.

use icu_collator::{Collator, CollatorOptions, Strength};
use std::cmp::Ordering;

use crate::model::Entry;

thread_local! {
    static COLLATOR: Option<Collator> = build_collator();
}

fn build_collator() -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Tertiary);
    Collator::try_new(&Default::default(), options)
        .map_err(|e| log::warn!("Unicode collation unavailable, using case-folded order: {}", e))
        .ok()
}

/// Compare two names with Unicode collation, lowercase before uppercase on ties
pub fn compare_names(a: &str, b: &str) -> Ordering {
    COLLATOR
        .with(|collator| match collator {
            Some(collator) => collator.compare(a, b),
            None => a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| b.cmp(a)),
        })
        .then_with(|| a.cmp(b))
}

/// Compare two entries: directories first, then by name
pub fn compare_entries(a: &Entry, b: &Entry) -> Ordering {
    b.is_dir
        .cmp(&a.is_dir)
        .then_with(|| compare_names(&a.name, &b.name))
}

/// Sort a listing in place
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(compare_entries);
}

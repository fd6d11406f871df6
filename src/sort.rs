//! Display ordering for the packing list.
//!
//! Sorting is a read-only projection: the canonical sequence keeps insertion
//! order, and every mode returns a fresh vector. Both non-trivial modes rely
//! on `sort_by`/`sort_by_key` being stable so equal-key items keep their
//! relative input order across repeated sorts.

use crate::item::Item;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Selectable orderings for the list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Insertion order, unchanged.
    #[default]
    Input,
    /// Case-insensitive lexicographic order of descriptions, ascending.
    Description,
    /// Unpacked items first, packed items last.
    Packed,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [SortMode::Input, SortMode::Description, SortMode::Packed];

    pub fn label(self) -> &'static str {
        match self {
            SortMode::Input => "input",
            SortMode::Description => "description",
            SortMode::Packed => "packed",
        }
    }

    /// The mode after this one, wrapping around. Used to cycle from the UI.
    pub fn next(self) -> SortMode {
        match self {
            SortMode::Input => SortMode::Description,
            SortMode::Description => SortMode::Packed,
            SortMode::Packed => SortMode::Input,
        }
    }

    /// Parse a mode, degrading to [`SortMode::Input`] on unknown values.
    ///
    /// Unknown modes are a configuration mistake, not a reason to fail the
    /// session, so they are reported and the default ordering applies.
    pub fn parse_or_default(raw: &str) -> SortMode {
        raw.parse().unwrap_or_else(|_| {
            tracing::warn!(mode = raw, "unknown sort mode, falling back to input order");
            SortMode::Input
        })
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortMode {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "input" => Ok(SortMode::Input),
            "description" => Ok(SortMode::Description),
            "packed" => Ok(SortMode::Packed),
            other => Err(anyhow::anyhow!("unknown sort mode {other:?}")),
        }
    }
}

/// Produce the display ordering for `mode` without touching storage order.
pub fn sort_items(items: &[Item], mode: SortMode) -> Vec<Item> {
    let mut view = items.to_vec();
    match mode {
        SortMode::Input => {}
        SortMode::Description => {
            view.sort_by(|a, b| compare_descriptions(&a.description, &b.description));
        }
        SortMode::Packed => {
            // false < true, so unpacked items come first.
            view.sort_by_key(|item| item.packed);
        }
    }
    view
}

fn compare_descriptions(a: &str, b: &str) -> Ordering {
    // Case-insensitive comparison stands in for locale collation; the
    // case-sensitive tie-break keeps the ordering deterministic.
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

//! The packing-list entry and its id allocation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Smallest quantity the input control offers.
pub const QUANTITY_MIN: u8 = 1;
/// Largest quantity the input control offers.
pub const QUANTITY_MAX: u8 = 20;

/// Opaque item identifier, unique for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single packing-list entry.
///
/// Items are immutable once stored: toggling produces a replacement with the
/// same id, so an `Item` value can be shared freely between the store and any
/// derived views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub description: String,
    pub quantity: u8,
    pub packed: bool,
}

impl Item {
    /// Build a fresh, unpacked item. Callers validate the description before
    /// constructing (see `form::FormState::submit`).
    pub fn new(id: ItemId, description: impl Into<String>, quantity: u8) -> Self {
        Self {
            id,
            description: description.into(),
            quantity,
            packed: false,
        }
    }
}

/// Monotonic id source. Ids are never reused within a session, even after a
/// clear, so uniqueness holds without tracking live items.
#[derive(Debug, Default)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn allocate(&mut self) -> ItemId {
        self.next += 1;
        ItemId(self.next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_items_start_unpacked() {
        let mut ids = IdAllocator::default();
        let item = Item::new(ids.allocate(), "Passport", 2);
        assert_eq!(item.description, "Passport");
        assert_eq!(item.quantity, 2);
        assert!(!item.packed);
    }

    #[test]
    fn allocator_never_repeats() {
        let mut ids = IdAllocator::default();
        let first = ids.allocate();
        let second = ids.allocate();
        let third = ids.allocate();
        assert_ne!(first, second);
        assert_ne!(second, third);
        assert_ne!(first, third);
    }
}

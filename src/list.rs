//! Copy-on-write operations over the canonical item sequence.
//!
//! Every operation takes the current items as a slice and returns a fresh
//! vector; neither the sequence nor any stored item is mutated in place.
//! Delete and toggle are total over any id: a missing target is a no-op, not
//! an error.

use crate::item::{Item, ItemId};

/// Append a fully-formed item to the end of the sequence.
pub fn add_item(items: &[Item], item: Item) -> Vec<Item> {
    let mut next = items.to_vec();
    next.push(item);
    next
}

/// Remove the item with the matching id, if present.
pub fn delete_item(items: &[Item], id: ItemId) -> Vec<Item> {
    items.iter().filter(|item| item.id != id).cloned().collect()
}

/// Replace the matching item with a copy whose `packed` flag is inverted,
/// preserving its insertion position.
pub fn toggle_item(items: &[Item], id: ItemId) -> Vec<Item> {
    items
        .iter()
        .map(|item| {
            if item.id == id {
                Item {
                    packed: !item.packed,
                    ..item.clone()
                }
            } else {
                item.clone()
            }
        })
        .collect()
}

/// Empty the sequence when `confirmed`, otherwise return it unchanged.
/// Obtaining the confirmation is the caller's job; this function never
/// prompts.
pub fn clear_items(confirmed: bool, items: &[Item]) -> Vec<Item> {
    if confirmed {
        Vec::new()
    } else {
        items.to_vec()
    }
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;

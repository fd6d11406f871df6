//! End-to-end walkthrough of the checklist core over the library surface.

use faraway::form::FormState;
use faraway::item::IdAllocator;
use faraway::list::{add_item, clear_items, delete_item, toggle_item};
use faraway::sort::{sort_items, SortMode};
use faraway::stats::{compute_stats, PackingState};

fn type_description(form: &mut FormState, text: &str) {
    for c in text.chars() {
        form.push_char(c);
    }
}

#[test]
fn pack_for_a_trip() {
    let mut ids = IdAllocator::default();
    let mut form = FormState::default();
    let mut items = Vec::new();

    type_description(&mut form, "Passport");
    form.quantity_up();
    let passport = form.submit(&mut ids).expect("valid item");
    items = add_item(&items, passport.clone());

    type_description(&mut form, "Socks");
    for _ in 0..11 {
        form.quantity_up();
    }
    let socks = form.submit(&mut ids).expect("valid item");
    items = add_item(&items, socks.clone());
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].quantity, 12);

    items = toggle_item(&items, socks.id);
    assert!(!items[0].packed);
    assert!(items[1].packed);

    let stats = compute_stats(&items);
    assert_eq!(stats.state, PackingState::Partial);
    assert_eq!((stats.total, stats.packed, stats.percentage), (2, 1, 50));

    // Unpacked-then-packed is already the stored order, so the packed view
    // matches the canonical sequence.
    let view = sort_items(&items, SortMode::Packed);
    assert_eq!(view, items);

    items = delete_item(&items, passport.id);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].description, "Socks");
    let stats = compute_stats(&items);
    assert_eq!(stats.state, PackingState::Complete);
    assert_eq!(stats.percentage, 100);

    items = clear_items(false, &items);
    assert_eq!(items.len(), 1);
    items = clear_items(true, &items);
    assert!(items.is_empty());
    assert_eq!(compute_stats(&items).state, PackingState::Empty);
}

#[test]
fn rejected_drafts_never_reach_the_store() {
    let mut ids = IdAllocator::default();
    let mut form = FormState::default();
    assert!(form.submit(&mut ids).is_none());
}

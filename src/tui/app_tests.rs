use super::App;
use crate::sort::SortMode;
use crate::stats::PackingState;
use crate::tui::Focus;

fn app() -> App {
    App::new(SortMode::Input, true)
}

fn type_description(app: &mut App, text: &str) {
    for c in text.chars() {
        app.form.push_char(c);
    }
}

#[test]
fn pack_a_trip_end_to_end() {
    let mut app = app();
    assert_eq!(app.stats().state, PackingState::Empty);

    type_description(&mut app, "Passport");
    app.form.quantity_up();
    app.submit_form();
    type_description(&mut app, "Socks");
    for _ in 0..11 {
        app.form.quantity_up();
    }
    app.submit_form();

    app.focus = Focus::List;
    app.move_selection(1);
    app.toggle_selected();
    assert!(!app.items[0].packed);
    assert!(app.items[1].packed);

    let stats = app.stats();
    assert_eq!(stats.state, PackingState::Partial);
    assert_eq!((stats.total, stats.packed, stats.percentage), (2, 1, 50));

    // Unpacked before packed: already in that order, so the view matches
    // the canonical sequence.
    app.sort_mode = SortMode::Packed;
    let names: Vec<String> = app
        .visible_items()
        .iter()
        .map(|item| item.description.clone())
        .collect();
    assert_eq!(names, ["Passport", "Socks"]);

    app.sort_mode = SortMode::Input;
    app.move_selection(-1);
    app.delete_selected();
    assert_eq!(app.items.len(), 1);
    assert_eq!(app.items[0].description, "Socks");
    let stats = app.stats();
    assert_eq!(stats.state, PackingState::Complete);
    assert_eq!(stats.percentage, 100);
}

#[test]
fn rejected_submission_leaves_the_store_alone() {
    let mut app = app();
    app.submit_form();
    assert!(app.items.is_empty());
    assert_eq!(app.message.as_deref(), Some("type a description first"));
}

#[test]
fn clear_waits_for_confirmation() {
    let mut app = app();
    app.seed_demo_items();
    assert_eq!(app.items.len(), 3);

    app.request_clear();
    assert!(app.pending_clear);
    assert_eq!(app.items.len(), 3);

    app.cancel_pending_clear();
    assert!(!app.pending_clear);
    assert_eq!(app.items.len(), 3);

    app.request_clear();
    app.confirm_pending_clear();
    assert!(app.items.is_empty());
    assert_eq!(app.selected, 0);
}

#[test]
fn clear_skips_the_modal_when_configured_off() {
    let mut app = App::new(SortMode::Input, false);
    app.seed_demo_items();

    app.request_clear();
    assert!(!app.pending_clear);
    assert!(app.items.is_empty());
}

#[test]
fn clear_on_an_empty_list_just_reports() {
    let mut app = app();
    app.request_clear();
    assert!(!app.pending_clear);
    assert_eq!(app.message.as_deref(), Some("nothing to clear"));
}

#[test]
fn selection_follows_the_sorted_view() {
    let mut app = app();
    for name in ["banana", "Apple", "cherry"] {
        type_description(&mut app, name);
        app.submit_form();
    }
    app.sort_mode = SortMode::Description;

    // Visible order is Apple, banana, cherry; deleting the first visible
    // entry must remove "Apple", not "banana".
    app.selected = 0;
    app.delete_selected();
    let names: Vec<String> = app
        .items
        .iter()
        .map(|item| item.description.clone())
        .collect();
    assert_eq!(names, ["banana", "cherry"]);
}

#[test]
fn selection_clamps_after_deletions() {
    let mut app = app();
    app.seed_demo_items();
    app.selected = 2;

    app.delete_selected();
    assert_eq!(app.selected, 1);
    app.delete_selected();
    app.delete_selected();
    assert_eq!(app.selected, 0);
    assert!(app.items.is_empty());

    // Moving on an empty list stays pinned at zero.
    app.move_selection(1);
    assert_eq!(app.selected, 0);
}

#[test]
fn demo_seed_matches_the_tutorial_list() {
    let mut app = app();
    app.seed_demo_items();

    let summary: Vec<(String, u8, bool)> = app
        .items
        .iter()
        .map(|item| (item.description.clone(), item.quantity, item.packed))
        .collect();
    assert_eq!(
        summary,
        [
            ("Passports".to_string(), 2, false),
            ("Socks".to_string(), 12, false),
            ("Charger".to_string(), 1, true),
        ]
    );
    assert_eq!(app.stats().percentage, 33);
}

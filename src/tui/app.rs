//! Session state and the synchronous mutations behind each key action.

use super::Focus;
use crate::form::FormState;
use crate::item::{IdAllocator, Item, ItemId};
use crate::list::{add_item, clear_items, delete_item, toggle_item};
use crate::sort::{sort_items, SortMode};
use crate::stats::{compute_stats, Stats};

/// Starter items for `--demo` sessions.
const DEMO_ITEMS: &[(&str, u8, bool)] = &[
    ("Passports", 2, false),
    ("Socks", 12, false),
    ("Charger", 1, true),
];

pub(super) struct App {
    /// Canonical item sequence, insertion-ordered. Only ever replaced
    /// through the copy-on-write list operations.
    pub(super) items: Vec<Item>,
    pub(super) ids: IdAllocator,
    pub(super) form: FormState,
    pub(super) sort_mode: SortMode,
    pub(super) focus: Focus,
    /// Index into the sorted view, not into `items`.
    pub(super) selected: usize,
    /// Whether clearing asks for confirmation first (from settings).
    pub(super) confirm_clear: bool,
    /// A clear is pending and the confirmation modal is up.
    pub(super) pending_clear: bool,
    pub(super) message: Option<String>,
    pub(super) show_help: bool,
}

impl App {
    pub(super) fn new(sort_mode: SortMode, confirm_clear: bool) -> Self {
        Self {
            items: Vec::new(),
            ids: IdAllocator::default(),
            form: FormState::default(),
            sort_mode,
            focus: Focus::Form,
            selected: 0,
            confirm_clear,
            pending_clear: false,
            message: None,
            show_help: false,
        }
    }

    pub(super) fn seed_demo_items(&mut self) {
        for (description, quantity, packed) in DEMO_ITEMS {
            let item = Item::new(self.ids.allocate(), *description, *quantity);
            let id = item.id;
            self.items = add_item(&self.items, item);
            if *packed {
                self.items = toggle_item(&self.items, id);
            }
        }
    }

    /// The display ordering, recomputed from the canonical items every time.
    pub(super) fn visible_items(&self) -> Vec<Item> {
        sort_items(&self.items, self.sort_mode)
    }

    pub(super) fn stats(&self) -> Stats {
        compute_stats(&self.items)
    }

    fn selected_id(&self) -> Option<ItemId> {
        self.visible_items().get(self.selected).map(|item| item.id)
    }

    pub(super) fn submit_form(&mut self) {
        match self.form.submit(&mut self.ids) {
            Some(item) => {
                let label = item.description.clone();
                self.items = add_item(&self.items, item);
                self.set_message(format!("added {label}"));
            }
            None => self.set_message("type a description first".to_string()),
        }
    }

    pub(super) fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.items = toggle_item(&self.items, id);
        }
    }

    pub(super) fn delete_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.items = delete_item(&self.items, id);
            self.clamp_selection();
        }
    }

    /// Entry point for the clear action; the actual clear only happens once
    /// the caller-confirmed flag reaches `clear_items`.
    pub(super) fn request_clear(&mut self) {
        if self.items.is_empty() {
            self.set_message("nothing to clear".to_string());
            return;
        }
        if self.confirm_clear {
            self.pending_clear = true;
        } else {
            self.items = clear_items(true, &self.items);
            self.after_clear();
        }
    }

    pub(super) fn confirm_pending_clear(&mut self) {
        self.pending_clear = false;
        self.items = clear_items(true, &self.items);
        self.after_clear();
    }

    pub(super) fn cancel_pending_clear(&mut self) {
        self.pending_clear = false;
        self.items = clear_items(false, &self.items);
    }

    fn after_clear(&mut self) {
        self.selected = 0;
        self.set_message("list cleared".to_string());
    }

    pub(super) fn cycle_sort(&mut self) {
        self.sort_mode = self.sort_mode.next();
        self.set_message(format!("sorted by {}", self.sort_mode));
    }

    pub(super) fn switch_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Form => Focus::List,
            Focus::List => Focus::Form,
        };
    }

    pub(super) fn move_selection(&mut self, delta: isize) {
        let max = self.visible_items().len();
        if max == 0 {
            self.selected = 0;
            return;
        }
        let next = self.selected as isize + delta;
        self.selected = next.clamp(0, max as isize - 1) as usize;
    }

    fn clamp_selection(&mut self) {
        let max = self.visible_items().len();
        if max == 0 {
            self.selected = 0;
        } else if self.selected >= max {
            self.selected = max - 1;
        }
    }

    pub(super) fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub(super) fn set_message(&mut self, message: String) {
        self.message = Some(message);
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;

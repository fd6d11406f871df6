use crate::item::Item;

pub(super) fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len || max_len <= 3 {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max_len.saturating_sub(3)).collect();
    truncated.push_str("...");
    truncated
}

pub(super) fn item_label(item: &Item) -> String {
    format!("{} x {}", item.quantity, item.description)
}

pub(super) fn checkbox(item: &Item) -> &'static str {
    if item.packed {
        "[x]"
    } else {
        "[ ]"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{IdAllocator, Item};

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("a longer label", 10), "a longe...");
    }

    #[test]
    fn truncate_handles_multibyte_text() {
        assert_eq!(truncate_text("héllo wörld", 8), "héllo...");
    }

    #[test]
    fn labels_show_quantity_and_state() {
        let mut ids = IdAllocator::default();
        let item = Item::new(ids.allocate(), "Socks", 12);
        assert_eq!(item_label(&item), "12 x Socks");
        assert_eq!(checkbox(&item), "[ ]");
        let packed = Item {
            packed: true,
            ..item
        };
        assert_eq!(checkbox(&packed), "[x]");
    }
}

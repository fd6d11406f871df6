//! Aggregate progress derived from the current items.

use crate::item::Item;
use serde::Serialize;

/// Which of the three mutually exclusive footer states applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PackingState {
    /// No items yet; percentage is undefined rather than zero.
    Empty,
    /// Every item is packed.
    Complete,
    /// Somewhere in between.
    Partial,
}

/// Snapshot of list progress, recomputed in full on every change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub state: PackingState,
    pub total: usize,
    pub packed: usize,
    pub percentage: u8,
}

/// Reduce the current items to totals and a rounded percentage.
///
/// The empty list is reported as its own state so callers never see a
/// division by zero dressed up as "0% packed".
pub fn compute_stats(items: &[Item]) -> Stats {
    let total = items.len();
    let packed = items.iter().filter(|item| item.packed).count();
    if total == 0 {
        return Stats {
            state: PackingState::Empty,
            total: 0,
            packed: 0,
            percentage: 0,
        };
    }
    let percentage = ((packed as f64 * 100.0) / total as f64).round() as u8;
    let state = if percentage == 100 {
        PackingState::Complete
    } else {
        PackingState::Partial
    };
    Stats {
        state,
        total,
        packed,
        percentage,
    }
}

impl Stats {
    /// The user-facing progress sentence shown under the list.
    pub fn summary_line(&self) -> String {
        match self.state {
            PackingState::Empty => "Start adding some items to your packing list".to_string(),
            PackingState::Complete => "You got everything! Ready to go".to_string(),
            PackingState::Partial => format!(
                "You have {} items on your list, and you already have {} ({}%)",
                self.total, self.packed, self.percentage
            ),
        }
    }
}

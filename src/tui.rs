//! Interactive checklist shell.
//!
//! A single-threaded event loop hosts the pure core: key events mutate the
//! item sequence through the `list` operations, and the sorted view plus the
//! stats footer are recomputed from the current items on every draw.
mod app;
mod format;
mod text;
mod ui;
mod view;

use crate::cli::RootArgs;
use crate::config;
use crate::sort::SortMode;
use anyhow::Result;
use std::io::{self, IsTerminal};

const EVENT_POLL_MS: u64 = 200;

/// Which region receives key events.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Focus {
    /// The add form: characters edit the description, arrows the quantity.
    Form,
    /// The packing list: navigation and item operations.
    List,
}

/// Start a session, falling back to a text summary for non-TTY environments.
pub fn run(args: &RootArgs) -> Result<()> {
    let settings = config::load_settings(args.config.as_deref())?;
    let sort = args
        .sort
        .as_deref()
        .map(SortMode::parse_or_default)
        .unwrap_or(settings.sort);

    let mut app = app::App::new(sort, settings.confirm_clear);
    if args.demo {
        app.seed_demo_items();
    }

    if args.summary || !io::stdout().is_terminal() || !io::stdin().is_terminal() {
        return text::run_text_summary(&app, args.json);
    }
    ui::run_tui(app)
}

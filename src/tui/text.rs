//! Non-interactive summary output for `--summary` and non-TTY runs.

use super::app::App;
use super::format::{checkbox, item_label};
use anyhow::Result;

pub(super) fn run_text_summary(app: &App, json: bool) -> Result<()> {
    let items = app.visible_items();
    let stats = app.stats();

    if json {
        let payload = serde_json::json!({
            "sort": app.sort_mode.label(),
            "items": items,
            "stats": stats,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("sort: {}", app.sort_mode);
    for item in &items {
        println!("{} {}", checkbox(item), item_label(item));
    }
    println!("{}", stats.summary_line());
    Ok(())
}

//! CLI argument parsing.
//!
//! The CLI is intentionally thin: it selects a starting configuration and an
//! output mode, and everything else happens inside the interactive session.
use clap::Parser;
use std::path::PathBuf;

/// Root CLI entrypoint for the checklist.
#[derive(Parser, Debug)]
#[command(
    name = "faraway",
    version,
    about = "Terminal packing checklist",
    after_help = "Keys (list):\n  a      focus the add form\n  space  toggle packed\n  d      delete the selected item\n  s      cycle sort mode\n  c      clear the list (asks first)\n  ?      help\n\nExamples:\n  faraway\n  faraway --demo --sort packed\n  faraway --demo --summary --json"
)]
pub struct RootArgs {
    /// Initial sort mode: input, description, or packed
    #[arg(long, value_name = "MODE")]
    pub sort: Option<String>,

    /// Path to a settings JSON file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Seed the session with a few starter items
    #[arg(long)]
    pub demo: bool,

    /// Print a one-shot list and stats summary instead of starting the UI
    #[arg(long)]
    pub summary: bool,

    /// Emit machine-readable JSON output
    #[arg(long, requires = "summary")]
    pub json: bool,
}

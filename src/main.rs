use anyhow::Result;
use clap::Parser;
use faraway::cli::RootArgs;
use faraway::tui;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    init_tracing();
    let args = RootArgs::parse();
    tui::run(&args)
}

fn init_tracing() {
    // Logs go to stderr so they never fight the UI for stdout.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

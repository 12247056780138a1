//! Logging init: file under the XDG state dir, or stderr fallback.
//!
//! The CLI talks to the user on stdout (decisions, prompts), so diagnostics
//! go to a log file by default and never interleave with prompts.

use anyhow::Result;
use std::fs;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,linkgate_core=debug,linkgate_cli=debug"))
}

/// Initialize structured logging to `~/.local/state/linkgate/linkgate.log`.
/// On failure (e.g. state dir unwritable), returns Err so the caller can
/// fall back to stderr.
pub fn init_logging() -> Result<()> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("linkgate")?;
    let path = xdg_dirs.place_state_file("linkgate.log")?;

    let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    tracing::info!("linkgate logging initialized at {}", path.display());

    Ok(())
}

/// Initialize logging to stderr only (no file). Use when `init_logging`
/// fails so the CLI still reports problems somewhere.
pub fn init_logging_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

//! CLI for the linkgate handoff policy.

mod commands;
mod launcher;
mod prompt;

use anyhow::Result;
use clap::{Parser, Subcommand};
use linkgate_core::config::{self, LinkgateConfig};

use commands::{run_completions, run_decide, run_open, run_rules};

/// Top-level CLI for the linkgate handoff policy.
#[derive(Debug, Parser)]
#[command(name = "linkgate")]
#[command(about = "linkgate: decide which URLs leave the browser", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the policy decision for a URL without opening anything.
    Decide {
        /// URL exactly as the browser would navigate to it.
        url: String,
    },

    /// Evaluate a URL and carry the decision out, confirming on the terminal.
    Open {
        /// URL exactly as the browser would navigate to it.
        url: String,
        /// Accept every confirmation without prompting.
        #[arg(long)]
        yes: bool,
    },

    /// Show the built-in scheme and host tables.
    Rules,

    /// Generate shell completions to stdout.
    Completions {
        /// Shell to generate completions for.
        shell: clap_complete::Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Decide { url } => run_decide(&load_config()?, &url),
            CliCommand::Open { url, yes } => run_open(&load_config()?, &url, yes),
            CliCommand::Rules => run_rules(),
            // No config: completions must work on a fresh machine.
            CliCommand::Completions { shell } => run_completions(shell),
        }
    }
}

fn load_config() -> Result<LinkgateConfig> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

//! CLI adapter for docbatch
//!
//! Provides the command-line interface over the core pipeline. This
//! module depends on `core/` but `core/` knows nothing about it.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// docbatch - chunk source trees into JSON document batches
///
/// Point it at a directory of extracted source files and it emits
/// fixed-size JSON batch artifacts of overlap-linked text chunks,
/// ready for bulk upload to a search index.
#[derive(Parser, Debug)]
#[command(name = "docbatch")]
#[command(version)]
#[command(about = "Chunk extracted source trees into JSON document batches", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output for scripting
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Human
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Process an extracted source tree into batch artifacts
    Pack(commands::PackArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  docbatch completions bash > ~/.local/share/bash-completion/completions/docbatch
    ///   zsh:   docbatch completions zsh > ~/.zfunc/_docbatch
    ///   fish:  docbatch completions fish > ~/.config/fish/completions/docbatch.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;

    // Handle completions command early (doesn't need configuration)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    // Load configuration
    let config = Config::load()?;

    // Execute command
    match cli.command {
        Commands::Pack(args) => commands::pack::execute(args, config, cli.format),
        Commands::ShowConfig(args) => commands::config::execute(args, &config, cli.format),
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}

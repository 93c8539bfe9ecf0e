//! Config command - show current configuration

use crate::cli::OutputFormat;
use crate::core::config::Config;
use clap::Args;
use serde::Serialize;

/// Arguments for the show-config command
#[derive(Args, Debug)]
pub struct ConfigArgs {}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub chunking: ChunkingView,
    pub filter: FilterView,
    pub output: OutputView,
}

#[derive(Debug, Serialize)]
pub struct ChunkingView {
    pub chunk_size: usize,
    pub overlap: usize,
}

#[derive(Debug, Serialize)]
pub struct FilterView {
    pub extensions: String,
}

#[derive(Debug, Serialize)]
pub struct OutputView {
    pub batch_size: usize,
    pub output_dir: String,
}

/// Execute the show-config command
pub fn execute(
    _args: ConfigArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = ConfigResponse {
        chunking: ChunkingView {
            chunk_size: config.chunking.chunk_size,
            overlap: config.chunking.overlap,
        },
        filter: FilterView {
            extensions: config.filter.extensions.clone(),
        },
        output: OutputView {
            batch_size: config.output.batch_size,
            output_dir: config.output.output_dir.to_string_lossy().into_owned(),
        },
    };

    match format {
        OutputFormat::Human => {
            println!("Configuration:");
            println!("  chunking:");
            println!("    chunk_size: {}", response.chunking.chunk_size);
            println!("    overlap: {}", response.chunking.overlap);
            println!("  filter:");
            println!("    extensions: {}", response.filter.extensions);
            println!("  output:");
            println!("    batch_size: {}", response.output.batch_size);
            println!("    output_dir: {}", response.output.output_dir);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}

//! Configuration management for docbatch.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.
//! Validation happens before any file is processed: a bad chunking or
//! batching configuration aborts the run upfront instead of stalling
//! or failing halfway through.

use crate::core::error::{DocbatchError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub chunking: ChunkingConfig,
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Chunking configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChunkingConfig {
    /// Characters per chunk (not bytes!)
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Character overlap between consecutive chunks
    #[serde(default = "default_overlap")]
    pub overlap: usize,
}

/// File filtering configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FilterConfig {
    /// Comma-separated allow-list of extensions, each with its
    /// leading dot (e.g. ".cs,.js,.html")
    #[serde(default = "default_extensions")]
    pub extensions: String,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Maximum documents per batch artifact
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Directory batch and summary artifacts are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

// Default value functions
fn default_chunk_size() -> usize {
    8000
}

fn default_overlap() -> usize {
    200
}

fn default_batch_size() -> usize {
    1000
}

fn default_extensions() -> String {
    ".cs,.js,.ts,.html,.css,.json,.xml,.config,.md,.sql,.py".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./batches")
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            overlap: default_overlap(),
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            output_dir: default_output_dir(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| DocbatchError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// File locations, in order:
    /// 1. DOCBATCH_CONFIG env var
    /// 2. ./docbatch.toml
    /// 3. Defaults
    pub fn load() -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("DOCBATCH_CONFIG") {
            Self::from_file(config_path)?
        } else if Path::new("docbatch.toml").exists() {
            Self::from_file("docbatch.toml")?
        } else {
            Self::default()
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(chunk_size) = env::var("DOCBATCH_CHUNK_SIZE") {
            if let Ok(size) = chunk_size.parse() {
                self.chunking.chunk_size = size;
            }
        }
        if let Ok(overlap) = env::var("DOCBATCH_OVERLAP") {
            if let Ok(o) = overlap.parse() {
                self.chunking.overlap = o;
            }
        }
        if let Ok(batch_size) = env::var("DOCBATCH_BATCH_SIZE") {
            if let Ok(size) = batch_size.parse() {
                self.output.batch_size = size;
            }
        }
        if let Ok(extensions) = env::var("DOCBATCH_EXTENSIONS") {
            self.filter.extensions = extensions;
        }
        if let Ok(output_dir) = env::var("DOCBATCH_OUTPUT_DIR") {
            self.output.output_dir = PathBuf::from(output_dir);
        }
    }

    /// Validate configuration values
    ///
    /// An overlap at or above the chunk size would make the window
    /// advance non-positive and the chunk loop would never terminate,
    /// so it is rejected here before any file is touched.
    pub fn validate(&self) -> Result<()> {
        if self.chunking.chunk_size == 0 {
            return Err(DocbatchError::ConfigError(
                "Chunk size must be non-zero".to_string(),
            ));
        }

        if self.chunking.overlap >= self.chunking.chunk_size {
            return Err(DocbatchError::ConfigError(format!(
                "Overlap ({}) must be less than chunk size ({})",
                self.chunking.overlap, self.chunking.chunk_size
            )));
        }

        if self.output.batch_size == 0 {
            return Err(DocbatchError::ConfigError(
                "Batch size must be non-zero".to_string(),
            ));
        }

        if self.filter.extensions.trim().is_empty() {
            return Err(DocbatchError::ConfigError(
                "Extension allow-list must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Chunk size: {} chars", self.chunking.chunk_size);
        tracing::info!("  Overlap: {} chars", self.chunking.overlap);
        tracing::info!("  Batch size: {} documents", self.output.batch_size);
        tracing::info!("  Extensions: {}", self.filter.extensions);
        tracing::info!("  Output dir: {:?}", self.output.output_dir);
    }
}

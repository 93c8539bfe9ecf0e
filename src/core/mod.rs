//! Core domain logic (protocol-agnostic)
//!
//! This module contains all business logic that is independent of
//! the CLI adapter.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures
//! - **pipeline**: Filtering, chunking, and document building
//! - **batch**: Batch partitioning and artifact writing

pub mod batch;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod types;

// Re-export key types for convenience
pub use batch::BatchWriter;
pub use config::Config;
pub use error::{DocbatchError, Result};
pub use pipeline::Processor;

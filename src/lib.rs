//! docbatch - Document batching for search index upload
//!
//! Ingests a directory tree of extracted source files, filters them
//! by extension, splits oversized contents into overlapping text
//! windows, and emits the windows as uniformly-shaped documents
//! grouped into fixed-size JSON batch artifacts, plus one run
//! summary artifact.
//!
//! # Architecture
//!
//! The codebase is organized into two main modules:
//!
//! - **core**: Domain logic (adapter-agnostic)
//!   - config, error, types
//!   - pipeline (extension filter, chunker, document builder,
//!     file processor)
//!   - batch (partitioning and artifact writing)
//!
//! - **cli**: Command-line adapter (depends on core)
//!
//! # Key Properties
//!
//! - UTF-8 safe chunking (character-based, never panics)
//! - Per-file failure isolation (skips are counted, not fatal)
//! - Upfront configuration validation (a bad overlap can never hang
//!   the window loop)
//! - Positional batch partitioning (order in equals order out)

// Core domain logic (adapter-agnostic)
pub mod core;

// CLI adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::batch::BatchWriter;
pub use core::config::Config;
pub use core::error::{DocbatchError, Result};
pub use core::pipeline::{Chunker, DocumentBuilder, ExtensionFilter, Processor};
pub use core::types::*;

//! The chunking and document-building pipeline.
//!
//! Turns raw file content into indexable documents:
//!
//! - Extension allow-list filtering (case-insensitive)
//! - UTF-8 safe character-based chunking with overlap
//! - Document construction with derived metadata
//! - Per-file orchestration with explicit skip accounting
//!
//! # Safety
//!
//! The chunker slices on character boundaries via `char_indices()`,
//! so files containing emojis or other multi-byte sequences never
//! cause a panic.

pub mod builder;
pub mod chunker;
pub mod filter;
pub mod processor;
pub mod walker;

pub use builder::{DocumentBuilder, Stamper, SystemStamper};
pub use chunker::Chunker;
pub use filter::ExtensionFilter;
pub use processor::Processor;

//! Core data types for the docbatch pipeline.
//!
//! This module defines all data structures used throughout the
//! application: the indexable document, per-file processing outcomes,
//! run statistics, and the run summary artifact.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Derived metadata for a single document, computed from the chunk's
/// content (not the whole file).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Number of newline-delimited segments in the chunk
    pub lines_of_code: usize,

    /// UTF-8 byte length of the chunk
    pub size_bytes: usize,
}

/// The indexable record built from exactly one chunk plus file and
/// project metadata. Never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Globally unique identifier, generated fresh per chunk
    pub id: String,

    /// Path of the source file relative to the extraction root,
    /// forward-slash separators on every platform
    pub file_path: String,

    /// Base name of the source file, including extension
    pub file_name: String,

    /// Run-wide project label
    pub project_name: String,

    /// Run-wide project code
    pub project_code: String,

    /// The text of this chunk
    pub content: String,

    /// File extension without the leading dot
    pub file_type: String,

    /// Zero-based position of this chunk within its file
    pub chunk_index: usize,

    /// Number of chunks produced for this file
    pub total_chunks: usize,

    /// Document creation timestamp (UTC)
    pub created_at: DateTime<Utc>,

    /// Metadata derived from the chunk content
    pub metadata: DocumentMetadata,
}

/// Why a file was skipped instead of processed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Extension not in the configured allow-list (or missing)
    ExtensionNotAllowed,

    /// File could not be read as UTF-8 text
    Unreadable(String),

    /// File content was empty or all-whitespace
    EmptyContent,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::ExtensionNotAllowed => write!(f, "extension not allowed"),
            SkipReason::Unreadable(e) => write!(f, "unreadable: {e}"),
            SkipReason::EmptyContent => write!(f, "empty or whitespace-only content"),
        }
    }
}

/// Outcome of processing one file. Exactly one of processed/skipped
/// applies per file.
#[derive(Debug, Clone)]
pub enum FileOutcome {
    /// File passed every gate; one document per chunk
    Processed(Vec<Document>),

    /// File contributed nothing, with the reason
    Skipped(SkipReason),
}

/// Statistics from one pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunStats {
    /// Number of files that produced documents
    pub files_processed: usize,

    /// Number of files skipped (any reason)
    pub files_skipped: usize,

    /// Total documents created across all files
    pub documents_created: usize,

    /// Total batch artifacts written
    pub batches_written: usize,

    /// Run duration in milliseconds
    pub duration_ms: u64,
}

/// The single record describing aggregate outcomes of one run,
/// persisted after all batches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub project_name: String,
    pub project_code: String,
    pub total_documents: usize,
    pub total_batches: usize,
    pub created_at: DateTime<Utc>,

    /// Identifier of the source archive this run ingested
    pub source_archive: String,

    /// Resolved allow-list of extensions, leading dot included
    pub allowed_extensions: Vec<String>,
}

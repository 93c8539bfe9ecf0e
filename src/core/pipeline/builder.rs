//! Document construction from chunks.
//!
//! Converts one (file, chunk) pair into a fully-populated
//! [`Document`] with metadata derived from the chunk's content.
//! Identifier and timestamp generation live behind the [`Stamper`]
//! trait so the structural logic stays deterministic under test.

use std::path::Path;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::core::types::{Document, DocumentMetadata};

/// Source of fresh document identifiers and creation timestamps
pub trait Stamper {
    /// A globally unique identifier, fresh per call
    fn next_id(&mut self) -> String;

    /// Current instant; must be monotonically non-decreasing across
    /// calls on one thread
    fn now(&mut self) -> DateTime<Utc>;
}

/// UUID v4 ids and the system clock
#[derive(Debug, Default)]
pub struct SystemStamper;

impl Stamper for SystemStamper {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }

    fn now(&mut self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Builds [`Document`] records for one run
pub struct DocumentBuilder<S: Stamper = SystemStamper> {
    project_name: String,
    project_code: String,
    stamper: S,
}

impl DocumentBuilder<SystemStamper> {
    /// Create a builder using UUID v4 ids and the system clock
    pub fn new(project_name: &str, project_code: &str) -> Self {
        Self::with_stamper(project_name, project_code, SystemStamper)
    }
}

impl<S: Stamper> DocumentBuilder<S> {
    /// Create a builder with an explicit stamper (deterministic in
    /// tests)
    pub fn with_stamper(project_name: &str, project_code: &str, stamper: S) -> Self {
        Self {
            project_name: project_name.to_string(),
            project_code: project_code.to_string(),
            stamper,
        }
    }

    /// Build one document from a chunk of a file.
    ///
    /// `relative_path` is the file's path relative to the extraction
    /// root; it is normalized to forward slashes. Metadata is derived
    /// from the chunk's content, not the whole file.
    pub fn build(
        &mut self,
        relative_path: &Path,
        content: &str,
        chunk_index: usize,
        total_chunks: usize,
    ) -> Document {
        let file_path = normalize_separators(relative_path);
        let file_name = relative_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        let file_type = relative_path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_string();

        Document {
            id: self.stamper.next_id(),
            file_path,
            file_name,
            project_name: self.project_name.clone(),
            project_code: self.project_code.clone(),
            content: content.to_string(),
            file_type,
            chunk_index,
            total_chunks,
            created_at: self.stamper.now(),
            metadata: DocumentMetadata {
                // Newline-delimited segments, so a trailing newline
                // counts a final empty segment
                lines_of_code: content.split('\n').count(),
                size_bytes: content.len(),
            },
        }
    }
}

/// Render a relative path with forward-slash separators regardless of
/// host conventions.
fn normalize_separators(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

//! File processing and run orchestration.
//!
//! Coordinates the per-file workflow:
//! 1. Extension gate
//! 2. Read file contents
//! 3. Empty / whitespace gate
//! 4. Chunk text
//! 5. Build documents
//!
//! Each file yields exactly one [`FileOutcome`]; per-file failures
//! are skips, never run aborts. The whole-run orchestrator folds
//! outcomes into explicit counters rather than shared mutable state.

use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::pipeline::{
    builder::DocumentBuilder, chunker::Chunker, filter::ExtensionFilter, walker,
};
use crate::core::types::{Document, FileOutcome, RunStats, SkipReason};

/// Orchestrates the chunking pipeline for one run
pub struct Processor {
    filter: ExtensionFilter,
    chunker: Chunker,
    builder: DocumentBuilder,
}

impl Processor {
    /// Create a processor from run configuration.
    ///
    /// Fails upfront on invalid chunking configuration, before any
    /// file is touched.
    pub fn new(config: &Config, project_name: &str, project_code: &str) -> Result<Self> {
        Ok(Self {
            filter: ExtensionFilter::new(&config.filter.extensions),
            chunker: Chunker::new(config.chunking.chunk_size, config.chunking.overlap)?,
            builder: DocumentBuilder::new(project_name, project_code),
        })
    }

    /// The resolved extension allow-list for this run
    pub fn allowed_extensions(&self) -> Vec<String> {
        self.filter.allowed_extensions()
    }

    /// Process one file, returning its outcome.
    ///
    /// Exactly one of processed/skipped applies; a read failure is a
    /// skip with reason, not an error.
    pub fn process_file(&mut self, path: &Path, root: &Path) -> FileOutcome {
        if !self.filter.matches(path) {
            return FileOutcome::Skipped(SkipReason::ExtensionNotAllowed);
        }

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                let reason = if e.kind() == std::io::ErrorKind::InvalidData {
                    format!("not valid UTF-8: {e}")
                } else {
                    e.to_string()
                };
                tracing::warn!("Failed to read {:?}: {}", path, reason);
                return FileOutcome::Skipped(SkipReason::Unreadable(reason));
            }
        };

        if contents.trim().is_empty() {
            tracing::debug!("Skipping empty file: {:?}", path);
            return FileOutcome::Skipped(SkipReason::EmptyContent);
        }

        let relative = path.strip_prefix(root).unwrap_or(path);

        let chunks = self.chunker.chunk(&contents);
        let total_chunks = chunks.len();

        let documents = chunks
            .iter()
            .enumerate()
            .map(|(i, chunk)| self.builder.build(relative, chunk, i, total_chunks))
            .collect();

        FileOutcome::Processed(documents)
    }

    /// Process every file under `root` and return the full ordered
    /// document sequence plus run statistics.
    ///
    /// Files are processed one at a time in enumeration order.
    /// `batches_written` in the returned stats is zero; the batch
    /// writer fills it in.
    pub fn run(&mut self, root: &Path) -> Result<(Vec<Document>, RunStats)> {
        let start = Instant::now();

        tracing::info!("Starting file collection from {:?}", root);
        let files = walker::collect_files(root)?;
        tracing::info!("Found {} files to consider", files.len());

        let mut all_documents = Vec::new();
        let mut files_processed = 0;
        let mut files_skipped = 0;

        for (idx, file_path) in files.iter().enumerate() {
            if idx % 100 == 0 && idx > 0 {
                tracing::info!("Progress: {}/{} files", idx, files.len());
            }

            match self.process_file(file_path, root) {
                FileOutcome::Processed(documents) => {
                    tracing::debug!("Processed {:?} ({} chunks)", file_path, documents.len());
                    all_documents.extend(documents);
                    files_processed += 1;
                }
                FileOutcome::Skipped(reason) => {
                    tracing::debug!("Skipped {:?}: {}", file_path, reason);
                    files_skipped += 1;
                }
            }
        }

        let duration_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            "Processing complete: {} files processed, {} skipped, \
             {} documents created in {}ms",
            files_processed,
            files_skipped,
            all_documents.len(),
            duration_ms
        );

        let stats = RunStats {
            files_processed,
            files_skipped,
            documents_created: all_documents.len(),
            batches_written: 0, // Filled by the batch writer
            duration_ms,
        };

        Ok((all_documents, stats))
    }
}

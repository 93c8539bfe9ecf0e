//! Batch partitioning and artifact writing.
//!
//! Slices the global document sequence into contiguous, order-
//! preserving batches of at most `batch_size` documents and persists
//! each as one numbered JSON artifact. Partitioning is purely
//! positional: no reordering, no deduplication, no grouping by file
//! or project. After all batches, exactly one run summary artifact
//! is written.
//!
//! A failed write is fatal; batches already on disk stay there (no
//! rollback across artifacts).

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::core::error::{DocbatchError, Result};
use crate::core::types::{Document, RunSummary};

/// Writes batch and summary artifacts for one run
#[derive(Debug)]
pub struct BatchWriter {
    output_dir: PathBuf,
    project_code: String,
    batch_size: usize,
}

impl BatchWriter {
    /// Create a batch writer, creating the output directory if
    /// needed.
    ///
    /// Returns a configuration error for a zero batch size.
    pub fn new(output_dir: &Path, project_code: &str, batch_size: usize) -> Result<Self> {
        if batch_size == 0 {
            return Err(DocbatchError::ConfigError(
                "Batch size must be non-zero".to_string(),
            ));
        }

        fs::create_dir_all(output_dir).map_err(|e| {
            DocbatchError::BatchWriteFailed(format!(
                "cannot create output directory {}: {e}",
                output_dir.display()
            ))
        })?;

        Ok(Self {
            output_dir: output_dir.to_path_buf(),
            project_code: project_code.to_string(),
            batch_size,
        })
    }

    /// Artifact path for a zero-based batch number
    pub fn batch_path(&self, batch_number: usize) -> PathBuf {
        self.output_dir
            .join(format!("{}_batch_{:04}.json", self.project_code, batch_number))
    }

    /// Artifact path for the run summary
    pub fn summary_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("{}_summary.json", self.project_code))
    }

    /// Partition documents into batches and write each as one JSON
    /// array artifact. Returns the number of batches written.
    pub fn write_batches(&self, documents: &[Document]) -> Result<usize> {
        let mut batches_written = 0;

        for (batch_number, batch) in documents.chunks(self.batch_size).enumerate() {
            let path = self.batch_path(batch_number);
            let json = serde_json::to_string_pretty(batch)?;

            fs::write(&path, json).map_err(|e| {
                DocbatchError::BatchWriteFailed(format!("{}: {e}", path.display()))
            })?;

            tracing::info!(
                "Wrote batch {} ({} documents) to {:?}",
                batch_number,
                batch.len(),
                path
            );
            batches_written += 1;
        }

        Ok(batches_written)
    }

    /// Write the run summary artifact, after all batches.
    pub fn write_summary(
        &self,
        project_name: &str,
        total_documents: usize,
        total_batches: usize,
        source_archive: &str,
        allowed_extensions: Vec<String>,
    ) -> Result<RunSummary> {
        let summary = RunSummary {
            project_name: project_name.to_string(),
            project_code: self.project_code.clone(),
            total_documents,
            total_batches,
            created_at: Utc::now(),
            source_archive: source_archive.to_string(),
            allowed_extensions,
        };

        let path = self.summary_path();
        let json = serde_json::to_string_pretty(&summary)?;

        fs::write(&path, json)
            .map_err(|e| DocbatchError::BatchWriteFailed(format!("{}: {e}", path.display())))?;

        tracing::info!("Wrote run summary to {:?}", path);

        Ok(summary)
    }
}

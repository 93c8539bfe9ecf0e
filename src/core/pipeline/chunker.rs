//! UTF-8 safe sliding-window chunking.
//!
//! Splits file content into fixed-size overlapping windows measured
//! in **characters**, not bytes. All window boundaries come from
//! `char_indices()`, so a multi-byte UTF-8 sequence is never split
//! and slicing never panics.
//!
//! The window advance is `chunk_size - overlap`. A configuration
//! where that advance would be non-positive is rejected by
//! [`Chunker::new`] rather than looping forever.

use crate::core::error::{DocbatchError, Result};

/// UTF-8 safe sliding-window chunker.
#[derive(Debug, Clone)]
pub struct Chunker {
    /// Number of characters per chunk
    chunk_size: usize,

    /// Number of characters shared by consecutive chunks
    overlap: usize,
}

impl Chunker {
    /// Create a new chunker with the given configuration.
    ///
    /// Returns a configuration error if `chunk_size` is 0 or if
    /// `overlap >= chunk_size`.
    pub fn new(chunk_size: usize, overlap: usize) -> Result<Self> {
        if chunk_size == 0 {
            return Err(DocbatchError::ConfigError(
                "Chunk size must be non-zero".to_string(),
            ));
        }
        if overlap >= chunk_size {
            return Err(DocbatchError::ConfigError(format!(
                "Overlap ({overlap}) must be less than chunk size ({chunk_size})"
            )));
        }

        Ok(Self {
            chunk_size,
            overlap,
        })
    }

    /// Get the chunk size in characters.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Get the overlap size in characters.
    pub fn overlap(&self) -> usize {
        self.overlap
    }

    /// Split content into overlapping windows.
    ///
    /// Content that fits in one window is returned as a single
    /// verbatim element. Otherwise windows of `chunk_size` characters
    /// start at offset 0 and advance by `chunk_size - overlap`; the
    /// final window may be shorter. The union of all windows covers
    /// every character, and consecutive windows share exactly
    /// `overlap` characters (except possibly the final short one).
    pub fn chunk(&self, content: &str) -> Vec<String> {
        // Character count differs from byte length for multi-byte
        // input; the single-chunk fast path must compare characters.
        let char_indices: Vec<(usize, char)> = content.char_indices().collect();

        if char_indices.len() <= self.chunk_size {
            return vec![content.to_string()];
        }

        let mut chunks = Vec::new();
        let step = self.chunk_size - self.overlap;
        let mut char_start_idx = 0;

        while char_start_idx < char_indices.len() {
            let char_end_idx = (char_start_idx + self.chunk_size).min(char_indices.len());

            let byte_start = char_indices[char_start_idx].0;
            let byte_end = if char_end_idx < char_indices.len() {
                char_indices[char_end_idx].0
            } else {
                content.len()
            };

            chunks.push(content[byte_start..byte_end].to_string());

            char_start_idx += step;
        }

        chunks
    }
}

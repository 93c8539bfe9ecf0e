//! Extension allow-list filtering.
//!
//! Decides whether a file path's extension belongs to the configured
//! allow-list. This predicate gates every other pipeline step: a
//! non-matching file is skipped before it is even read.

use std::collections::HashSet;
use std::path::Path;

/// Case-insensitive extension allow-list predicate
#[derive(Debug, Clone)]
pub struct ExtensionFilter {
    /// Normalized extensions, lower-case, no leading dot
    allowed: HashSet<String>,
}

impl ExtensionFilter {
    /// Parse a comma-separated allow-list of extensions.
    ///
    /// Each entry carries its leading dot (e.g. `.cs,.js,.html`);
    /// entries without one are accepted too. Blank entries are
    /// ignored.
    pub fn new(extensions: &str) -> Self {
        let allowed = extensions
            .split(',')
            .map(|e| e.trim().trim_start_matches('.').to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();

        Self { allowed }
    }

    /// True iff the path's extension is in the allow-list.
    ///
    /// Matching is case-insensitive. A path with no extension never
    /// matches.
    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| self.allowed.contains(&e.to_lowercase()))
            .unwrap_or(false)
    }

    /// The normalized allow-list, leading dot restored, sorted
    pub fn allowed_extensions(&self) -> Vec<String> {
        let mut exts: Vec<String> = self.allowed.iter().map(|e| format!(".{e}")).collect();
        exts.sort();
        exts
    }
}

//! File system traversal.
//!
//! Walks the extraction root and yields regular files. Per-entry walk
//! errors (permission denied, dangling entries) are logged and
//! tolerated; only a root that cannot be accessed at all is fatal.
//! Enumeration order follows the filesystem and is not guaranteed to
//! be stable across runs.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::error::{DocbatchError, Result};

/// Collect all regular files under `root`.
///
/// Symlinks are not followed. Returns an error if `root` does not
/// exist or is not a directory.
pub fn collect_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(DocbatchError::InvalidPath(format!(
            "{} is not an accessible directory",
            root.display()
        )));
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(root).follow_links(false) {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_file() {
                    files.push(entry.path().to_path_buf());
                }
            }
            Err(e) => {
                // A failure to list the root itself means the whole
                // run has nothing to stand on; deeper entry errors
                // only lose that entry.
                if e.depth() == 0 {
                    return Err(DocbatchError::InvalidPath(format!(
                        "cannot read root directory {}: {e}",
                        root.display()
                    )));
                }
                tracing::warn!("Walk error: {}", e);
            }
        }
    }

    Ok(files)
}

// Test fixtures for integration testing

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use docbatch::core::types::{Document, RunSummary};

/// Synthetic extracted-archive tree for pipeline tests
#[allow(dead_code)] // Used across integration test modules
pub struct SourceTree {
    pub dir: TempDir,
    pub files: Vec<PathBuf>,
}

impl SourceTree {
    /// Create a small extracted tree resembling a web project export
    #[allow(dead_code)]
    pub fn small() -> Self {
        Self::with_files(&[
            ("src/Program.cs", "class Program {\n    static void Main() {}\n}\n"),
            ("src/Helpers.cs", "static class Helpers {\n    public static int Add(int a, int b) => a + b;\n}\n"),
            ("wwwroot/app.js", "function init() {\n    console.log('ready');\n}\n"),
            ("wwwroot/index.html", "<html><body>Hello</body></html>\n"),
            ("schema/tables.sql", "CREATE TABLE users (id INT PRIMARY KEY);\n"),
            ("README.md", "# Export\n\nExtracted project sources.\n"),
            ("bin/app.dll", "binary-ish content that should be filtered out"),
            ("notes/blank.cs", "   \n\n\t  \n"),
        ])
    }

    /// Create with custom files
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let dir = TempDir::new().unwrap();
        let mut paths = Vec::new();

        for (path, content) in files {
            let full_path = dir.path().join(path);
            if let Some(parent) = full_path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&full_path, content).unwrap();
            paths.push(full_path);
        }

        Self { dir, files: paths }
    }

    /// Root of the synthetic tree
    pub fn root(&self) -> &Path {
        self.dir.path()
    }
}

/// Read one batch artifact back as documents
#[allow(dead_code)]
pub fn read_documents(path: &Path) -> Vec<Document> {
    let json = fs::read_to_string(path).unwrap();
    serde_json::from_str(&json).unwrap()
}

/// Read the summary artifact
#[allow(dead_code)]
pub fn read_summary(path: &Path) -> RunSummary {
    let json = fs::read_to_string(path).unwrap();
    serde_json::from_str(&json).unwrap()
}

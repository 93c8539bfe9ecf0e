//! End-to-end pipeline tests over synthetic extracted trees

use std::collections::HashSet;

use docbatch::core::config::Config;
use docbatch::core::pipeline::Processor;

use crate::common::SourceTree;

fn config(extensions: &str, chunk_size: usize, overlap: usize) -> Config {
    let mut config = Config::default();
    config.filter.extensions = extensions.to_string();
    config.chunking.chunk_size = chunk_size;
    config.chunking.overlap = overlap;
    config
}

#[test]
fn small_tree_processes_allowed_files_only() {
    let tree = SourceTree::small();
    let config = config(".cs,.js,.html,.sql,.md", 8000, 200);
    let mut processor = Processor::new(&config, "Operator Support", "opsup").unwrap();

    let (documents, stats) = processor.run(tree.root()).unwrap();

    // 6 allowed files with content, 1 .dll filtered, 1 whitespace-only .cs
    assert_eq!(stats.files_processed, 6);
    assert_eq!(stats.files_skipped, 2);
    assert_eq!(documents.len(), 6);

    for doc in &documents {
        assert_eq!(doc.project_name, "Operator Support");
        assert_eq!(doc.project_code, "opsup");
        assert_eq!(doc.total_chunks, 1);
        assert!(!doc.content.trim().is_empty());
        assert!(!doc.file_path.contains('\\'));
    }
}

#[test]
fn document_ids_are_unique_across_run() {
    let tree = SourceTree::small();
    let config = config(".cs,.js,.html,.sql,.md", 20, 5);
    let mut processor = Processor::new(&config, "p", "c").unwrap();

    let (documents, _stats) = processor.run(tree.root()).unwrap();

    let ids: HashSet<_> = documents.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids.len(), documents.len());
}

#[test]
fn timestamps_non_decreasing_in_emission_order() {
    let tree = SourceTree::small();
    let config = config(".cs,.js,.html,.sql,.md", 20, 5);
    let mut processor = Processor::new(&config, "p", "c").unwrap();

    let (documents, _stats) = processor.run(tree.root()).unwrap();

    for pair in documents.windows(2) {
        assert!(pair[0].created_at <= pair[1].created_at);
    }
}

#[test]
fn oversized_file_chunks_with_overlap_links() {
    let content: String = (0..10_000).map(|i| ((i % 26) as u8 + b'a') as char).collect();
    let tree = SourceTree::with_files(&[("big.cs", &content)]);
    let config = config(".cs", 8000, 200);
    let mut processor = Processor::new(&config, "p", "c").unwrap();

    let (documents, stats) = processor.run(tree.root()).unwrap();

    assert_eq!(stats.files_processed, 1);
    assert_eq!(documents.len(), 2);
    assert_eq!(documents[0].content, content[0..8000]);
    assert_eq!(documents[1].content, content[7800..10_000]);
    for doc in &documents {
        assert_eq!(doc.total_chunks, 2);
        assert_eq!(doc.file_name, "big.cs");
        assert_eq!(doc.file_type, "cs");
    }
    assert_eq!(documents[0].chunk_index, 0);
    assert_eq!(documents[1].chunk_index, 1);
}

#[test]
fn chunk_metadata_derived_from_chunk_content() {
    let content = format!("{}\n{}", "a".repeat(90), "b".repeat(90));
    let tree = SourceTree::with_files(&[("two.cs", &content)]);
    let config = config(".cs", 100, 10);
    let mut processor = Processor::new(&config, "p", "c").unwrap();

    let (documents, _stats) = processor.run(tree.root()).unwrap();

    assert!(documents.len() > 1);
    for doc in &documents {
        assert_eq!(doc.metadata.size_bytes, doc.content.len());
        assert_eq!(doc.metadata.lines_of_code, doc.content.split('\n').count());
    }
}

#[test]
fn case_insensitive_extension_matching() {
    let tree = SourceTree::with_files(&[("Upper.CS", "content"), ("lower.cs", "content")]);
    let config = config(".cs", 8000, 200);
    let mut processor = Processor::new(&config, "p", "c").unwrap();

    let (_documents, stats) = processor.run(tree.root()).unwrap();

    assert_eq!(stats.files_processed, 2);
    assert_eq!(stats.files_skipped, 0);
}

#[test]
fn whitespace_only_file_is_skip_not_document() {
    let tree = SourceTree::with_files(&[("blank.cs", " \n \t \n")]);
    let config = config(".cs", 8000, 200);
    let mut processor = Processor::new(&config, "p", "c").unwrap();

    let (documents, stats) = processor.run(tree.root()).unwrap();

    assert!(documents.is_empty());
    assert_eq!(stats.files_processed, 0);
    assert_eq!(stats.files_skipped, 1);
}

#[test]
fn invalid_chunking_rejected_before_processing() {
    let config = config(".cs", 200, 200);
    let result = Processor::new(&config, "p", "c");
    assert!(result.is_err());
    assert!(result.err().unwrap().is_config_error());
}

#[test]
fn multibyte_content_round_trips() {
    let content = "fn main() { // 中文注释 🔥\n}\n".repeat(40);
    let tree = SourceTree::with_files(&[("unicode.cs", &content)]);
    let config = config(".cs", 100, 20);
    let mut processor = Processor::new(&config, "p", "c").unwrap();

    let (documents, _stats) = processor.run(tree.root()).unwrap();

    assert!(documents.len() > 1);
    // Dropping each chunk's 20-char leading overlap reconstructs the file
    let mut rebuilt = documents[0].content.clone();
    for doc in &documents[1..] {
        rebuilt.extend(doc.content.chars().skip(20));
    }
    assert_eq!(rebuilt, content);
}

//! Batch artifact tests: partitioning, ordering, summary totals

use tempfile::TempDir;

use docbatch::core::batch::BatchWriter;
use docbatch::core::config::Config;
use docbatch::core::pipeline::Processor;

use crate::common::{read_documents, read_summary, SourceTree};

fn config(extensions: &str, chunk_size: usize, overlap: usize) -> Config {
    let mut config = Config::default();
    config.filter.extensions = extensions.to_string();
    config.chunking.chunk_size = chunk_size;
    config.chunking.overlap = overlap;
    config
}

#[test]
fn end_to_end_artifacts_match_run() {
    let tree = SourceTree::small();
    let out = TempDir::new().unwrap();
    let config = config(".cs,.js,.html,.sql,.md", 8000, 200);

    let mut processor = Processor::new(&config, "Operator Support", "opsup").unwrap();
    let allowed = processor.allowed_extensions();
    let (documents, mut stats) = processor.run(tree.root()).unwrap();

    let writer = BatchWriter::new(out.path(), "opsup", 4).unwrap();
    stats.batches_written = writer.write_batches(&documents).unwrap();
    let summary = writer
        .write_summary(
            "Operator Support",
            documents.len(),
            stats.batches_written,
            "opsup-export.zip",
            allowed,
        )
        .unwrap();

    // 6 documents at batch size 4 -> batches of 4 and 2
    assert_eq!(stats.batches_written, 2);
    assert_eq!(read_documents(&writer.batch_path(0)).len(), 4);
    assert_eq!(read_documents(&writer.batch_path(1)).len(), 2);

    assert_eq!(summary.total_documents, 6);
    assert_eq!(summary.total_batches, 2);

    let persisted = read_summary(&writer.summary_path());
    assert_eq!(persisted.total_documents, 6);
    assert_eq!(persisted.total_batches, 2);
    assert_eq!(persisted.project_code, "opsup");
    assert_eq!(persisted.source_archive, "opsup-export.zip");
    assert!(persisted.allowed_extensions.contains(&".cs".to_string()));
}

#[test]
fn batches_preserve_global_emission_order() {
    let files: Vec<(String, String)> = (0..9)
        .map(|i| (format!("f{i}.cs"), format!("content number {i}")))
        .collect();
    let file_refs: Vec<(&str, &str)> = files
        .iter()
        .map(|(p, c)| (p.as_str(), c.as_str()))
        .collect();
    let tree = SourceTree::with_files(&file_refs);
    let out = TempDir::new().unwrap();
    let config = config(".cs", 8000, 200);

    let mut processor = Processor::new(&config, "p", "c").unwrap();
    let (documents, _stats) = processor.run(tree.root()).unwrap();

    let writer = BatchWriter::new(out.path(), "c", 2).unwrap();
    let batches = writer.write_batches(&documents).unwrap();
    assert_eq!(batches, 5);

    let mut rebuilt = Vec::new();
    for n in 0..batches {
        rebuilt.extend(read_documents(&writer.batch_path(n)));
    }

    assert_eq!(rebuilt.len(), documents.len());
    for (original, roundtrip) in documents.iter().zip(rebuilt.iter()) {
        assert_eq!(original.id, roundtrip.id);
        assert_eq!(original.content, roundtrip.content);
    }
}

#[test]
fn empty_tree_writes_summary_only() {
    let tree = SourceTree::with_files(&[("ignored.bin", "not text we index")]);
    let out = TempDir::new().unwrap();
    let config = config(".cs", 8000, 200);

    let mut processor = Processor::new(&config, "p", "c").unwrap();
    let allowed = processor.allowed_extensions();
    let (documents, _stats) = processor.run(tree.root()).unwrap();
    assert!(documents.is_empty());

    let writer = BatchWriter::new(out.path(), "c", 1000).unwrap();
    let batches = writer.write_batches(&documents).unwrap();
    writer
        .write_summary("p", 0, batches, "none.zip", allowed)
        .unwrap();

    assert_eq!(batches, 0);
    assert!(!writer.batch_path(0).exists());
    let summary = read_summary(&writer.summary_path());
    assert_eq!(summary.total_documents, 0);
    assert_eq!(summary.total_batches, 0);
}

#[test]
fn batch_documents_deserialize_with_full_shape() {
    let tree = SourceTree::with_files(&[("src/nested/item.sql", "SELECT 1;\nSELECT 2;\n")]);
    let out = TempDir::new().unwrap();
    let config = config(".sql", 8000, 200);

    let mut processor = Processor::new(&config, "Reports", "rpt").unwrap();
    let (documents, _stats) = processor.run(tree.root()).unwrap();

    let writer = BatchWriter::new(out.path(), "rpt", 10).unwrap();
    writer.write_batches(&documents).unwrap();

    let batch = read_documents(&writer.batch_path(0));
    assert_eq!(batch.len(), 1);
    let doc = &batch[0];
    assert!(!doc.id.is_empty());
    assert_eq!(doc.file_path, "src/nested/item.sql");
    assert_eq!(doc.file_name, "item.sql");
    assert_eq!(doc.file_type, "sql");
    assert_eq!(doc.project_name, "Reports");
    assert_eq!(doc.project_code, "rpt");
    assert_eq!(doc.chunk_index, 0);
    assert_eq!(doc.total_chunks, 1);
    // "SELECT 1;\nSELECT 2;\n" has three newline-delimited segments
    assert_eq!(doc.metadata.lines_of_code, 3);
    assert_eq!(doc.metadata.size_bytes, doc.content.len());
}

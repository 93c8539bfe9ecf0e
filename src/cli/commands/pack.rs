//! Pack command - process an extracted source tree into batch artifacts

use crate::cli::output::{colors, format_duration};
use crate::cli::OutputFormat;
use crate::core::batch::BatchWriter;
use crate::core::config::Config;
use crate::core::pipeline::Processor;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Arguments for the pack command
#[derive(Args, Debug)]
pub struct PackArgs {
    /// Root directory of the extracted archive
    pub root: PathBuf,

    /// Project name attached to every document
    #[arg(long, short = 'n')]
    pub project_name: String,

    /// Project code used in artifact names and document labels
    #[arg(long, short = 'c')]
    pub project_code: String,

    /// Comma-separated extension allow-list (e.g. ".cs,.js,.html")
    #[arg(long, short = 'e')]
    pub extensions: Option<String>,

    /// Characters per chunk
    #[arg(long)]
    pub chunk_size: Option<usize>,

    /// Overlap between chunks in characters
    #[arg(long)]
    pub overlap: Option<usize>,

    /// Maximum documents per batch artifact
    #[arg(long)]
    pub batch_size: Option<usize>,

    /// Directory to write batch and summary artifacts to
    #[arg(long, short = 'o')]
    pub output_dir: Option<PathBuf>,

    /// Identifier of the source archive recorded in the summary
    #[arg(long, default_value = "unknown")]
    pub source_archive: String,

    /// Suppress progress output
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

/// Pack result response
#[derive(Debug, Serialize)]
pub struct PackResponse {
    pub project_code: String,
    pub root: String,
    pub files_processed: usize,
    pub files_skipped: usize,
    pub documents_created: usize,
    pub batches_written: usize,
    pub duration_secs: f64,
    pub output_dir: String,
}

/// Execute the pack command
pub fn execute(
    args: PackArgs,
    mut config: Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    // Validate path
    let root = args.root.canonicalize().map_err(|e| {
        format!(
            "Invalid root '{}': {}. Make sure the extracted archive directory exists.",
            args.root.display(),
            e
        )
    })?;

    if !root.is_dir() {
        return Err(format!(
            "Root '{}' is not a directory. docbatch processes extracted directory trees, \
             not individual files or archives.",
            root.display()
        )
        .into());
    }

    // Validate project labels
    if args.project_name.trim().is_empty() {
        return Err("Project name cannot be empty.".into());
    }
    if args.project_code.is_empty() {
        return Err(
            "Project code cannot be empty. Provide a short label like 'opsup' or 'billing'.".into(),
        );
    }
    if !args
        .project_code
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(format!(
            "Project code '{}' contains invalid characters. \
             Use only letters, numbers, hyphens and underscores (it names the output files).",
            args.project_code
        )
        .into());
    }

    // Apply argument overrides on top of the loaded configuration
    if let Some(chunk_size) = args.chunk_size {
        config.chunking.chunk_size = chunk_size;
    }
    if let Some(overlap) = args.overlap {
        config.chunking.overlap = overlap;
    }
    if let Some(batch_size) = args.batch_size {
        config.output.batch_size = batch_size;
    }
    if let Some(extensions) = args.extensions {
        config.filter.extensions = extensions;
    }
    if let Some(output_dir) = args.output_dir {
        config.output.output_dir = output_dir;
    }

    // Reject bad chunking/batching configuration before touching any file
    config.validate().map_err(|e| e.message())?;
    config.log_config();

    if !args.quiet && format == OutputFormat::Human {
        eprintln!(
            "Packing {} as '{}'...",
            colors::file_path(&root.display().to_string()),
            colors::project_code(&args.project_code)
        );
    }

    // Run the pipeline
    let mut processor = Processor::new(&config, &args.project_name, &args.project_code)?;
    let allowed_extensions = processor.allowed_extensions();
    let (documents, mut stats) = processor.run(&root)?;

    // Partition and persist
    let writer = BatchWriter::new(
        &config.output.output_dir,
        &args.project_code,
        config.output.batch_size,
    )?;
    stats.batches_written = writer.write_batches(&documents)?;

    writer.write_summary(
        &args.project_name,
        documents.len(),
        stats.batches_written,
        &args.source_archive,
        allowed_extensions,
    )?;

    let duration_secs = stats.duration_ms as f64 / 1000.0;

    let response = PackResponse {
        project_code: args.project_code,
        root: root.to_string_lossy().into_owned(),
        files_processed: stats.files_processed,
        files_skipped: stats.files_skipped,
        documents_created: stats.documents_created,
        batches_written: stats.batches_written,
        duration_secs,
        output_dir: config.output.output_dir.to_string_lossy().into_owned(),
    };

    match format {
        OutputFormat::Human => {
            println!(
                "{} {} files ({} skipped) into {} documents, {} batches in {}",
                colors::success("Packed"),
                colors::number(&response.files_processed.to_string()),
                colors::number(&response.files_skipped.to_string()),
                colors::number(&response.documents_created.to_string()),
                colors::number(&response.batches_written.to_string()),
                colors::number(&format_duration(response.duration_secs))
            );
            println!(
                "Artifacts written to {}",
                colors::file_path(&response.output_dir)
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}

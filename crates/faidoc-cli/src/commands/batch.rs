//! Batch processing command for multiple uploaded documents.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::debug;

use faidoc_core::{DocumentParser, ProcessedDocument};

use super::process::{format_document, OutputFormat};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory for per-document files
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,
}

/// Aggregate report printed in JSON mode.
#[derive(Serialize)]
struct BatchReport {
    processed: usize,
    needs_review: usize,
    documents: Vec<ProcessedDocument>,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            matches!(ext.to_lowercase().as_str(), "pdf" | "png" | "jpg" | "jpeg" | "tiff")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    // Create output directory if specified
    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let parser = DocumentParser::from_config(&config.extraction);
    let mut documents = Vec::with_capacity(files.len());

    for path in &files {
        let filename = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();

        let result = parser.parse(&filename);
        documents.push(ProcessedDocument::from_extraction(filename, result));
        pb.inc(1);
    }

    pb.finish_with_message("Complete");

    // Write per-document outputs
    if let Some(ref output_dir) = args.output_dir {
        for (path, document) in files.iter().zip(&documents) {
            let output_name = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("document");

            let extension = match args.format {
                OutputFormat::Json => "json",
                OutputFormat::Csv => "csv",
                OutputFormat::Text => "txt",
            };

            let output_path = output_dir.join(format!("{}.{}", output_name, extension));
            let content = format_document(document, args.format, true)?;
            fs::write(&output_path, content)?;
            debug!("Wrote output to {}", output_path.display());
        }
    }

    // Generate summary if requested
    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &documents)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let needs_review = documents.iter().filter(|d| d.has_issues()).count();

    // Scriptable mode: dump the full report instead of the text summary
    if matches!(args.format, OutputFormat::Json) && args.output_dir.is_none() {
        let report = BatchReport {
            processed: documents.len(),
            needs_review,
            documents,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!();
    println!(
        "{} Processed {} documents",
        style("✓").green(),
        documents.len()
    );
    println!(
        "   {} clean, {} need review",
        style(documents.len() - needs_review).green(),
        style(needs_review).yellow()
    );

    let needing_review: Vec<_> = documents.iter().filter(|d| d.has_issues()).collect();

    if !needing_review.is_empty() {
        println!();
        println!("{}", style("Documents needing review:").yellow());
        for document in &needing_review {
            println!("  - {} ({} issues)", document.filename, document.issues.len());
        }
    }

    Ok(())
}

fn write_summary(path: &PathBuf, documents: &[ProcessedDocument]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["filename", "type", "status", "fields_extracted", "issues"])?;

    for document in documents {
        wtr.write_record([
            document.filename.as_str(),
            document.doc_type.as_str(),
            document.status.as_str(),
            &document.fields.len().to_string(),
            &document.issues.len().to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

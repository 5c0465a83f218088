//! Process command - run intake for a single uploaded document.

use std::fs;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use faidoc_core::{DocumentParser, ProcessedDocument};

/// Per-stage delay simulating upload latency.
const STAGE_DELAY: Duration = Duration::from_millis(150);

const STAGES: &[&str] = &[
    "Detecting document type",
    "Extracting fields",
    "Validating values",
];

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (PDF or image)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Show extraction confidence scores in text output
    #[arg(long)]
    show_confidence: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;

    // Check input file exists
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let extension = args
        .input
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    if !matches!(extension.as_str(), "pdf" | "png" | "jpg" | "jpeg" | "tiff") {
        anyhow::bail!("Unsupported file format: {}", extension);
    }

    let filename = args
        .input
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_string();

    info!("Processing file: {}", args.input.display());

    // Staged progress, standing in for the upload pipeline
    let pb = ProgressBar::new(STAGES.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    for stage in STAGES {
        pb.set_message(*stage);
        thread::sleep(STAGE_DELAY);
        pb.inc(1);
    }

    let parser = DocumentParser::from_config(&config.extraction);
    let result = parser.parse(&filename);
    let document = ProcessedDocument::from_extraction(filename, result);

    pb.finish_with_message("Done");

    if document.has_issues() {
        eprintln!("{}", style("Issues found:").yellow());
        for issue in &document.issues {
            eprintln!("  - {}", issue);
        }
    }

    // Format output
    let output = format_document(&document, args.format, args.show_confidence)?;

    // Write output
    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}

/// Render a processed document in the requested format.
pub fn format_document(
    document: &ProcessedDocument,
    format: OutputFormat,
    show_confidence: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(document)?),
        OutputFormat::Csv => format_document_csv(document),
        OutputFormat::Text => Ok(format_document_text(document, show_confidence)),
    }
}

fn format_document_csv(document: &ProcessedDocument) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["field", "value", "confidence"])?;
    for field in &document.fields {
        wtr.write_record([
            field.name.as_str(),
            field.value.as_str(),
            &field.confidence.to_string(),
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_document_text(document: &ProcessedDocument, show_confidence: bool) -> String {
    let mut output = String::new();

    output.push_str(&format!("Document: {}\n", document.filename));
    output.push_str(&format!("Type: {}\n", document.doc_type));
    output.push_str(&format!("Status: {}\n", document.status.as_str()));
    output.push('\n');

    output.push_str("Fields:\n");
    for field in &document.fields {
        if show_confidence {
            output.push_str(&format!(
                "  {}: {} ({}%)\n",
                field.name, field.value, field.confidence
            ));
        } else {
            output.push_str(&format!("  {}: {}\n", field.name, field.value));
        }
    }

    if !document.issues.is_empty() {
        output.push('\n');
        output.push_str("Issues:\n");
        for issue in &document.issues {
            output.push_str(&format!("  - {}\n", issue));
        }
    }

    output
}

//! Extract command - pull records out of a single document.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use recscan_core::pdf::{PdfTextSource, PlainTextSource, TextSource};
use recscan_core::RecordExtractor;

use super::load_config;
use super::output::{format_csv, format_text};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input file (PDF, or .txt read as plain text)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Show which template produced each record
    #[arg(long)]
    show_templates: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text listing
    Text,
}

pub fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let extension = args
        .input
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    info!("Processing file: {}", args.input.display());

    let text = match extension.as_str() {
        "txt" => PlainTextSource.read_text(&args.input)?,
        _ => PdfTextSource::new(config.pdf).read_text(&args.input)?,
    };

    if text.trim().is_empty() {
        println!(
            "{} No extractable text found in {}",
            style("⚠").yellow(),
            args.input.display()
        );
        return Ok(());
    }

    let result = RecordExtractor::new().extract(&text);
    info!(
        "Extracted {} record(s), {} duplicate(s) removed",
        result.records.len(),
        result.duplicates_removed
    );

    let output = match args.format {
        OutputFormat::Json if args.show_templates => serde_json::to_string_pretty(&result.matches)?,
        OutputFormat::Json => serde_json::to_string_pretty(&result.records)?,
        OutputFormat::Csv => format_csv(&result.records)?,
        OutputFormat::Text => format_text(&result.matches, args.show_templates),
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Wrote {} record(s) to {}",
            style("✓").green(),
            result.records.len(),
            output_path.display()
        );
    } else if output.ends_with('\n') {
        print!("{}", output);
    } else {
        println!("{}", output);
    }

    Ok(())
}

//! Run command - scan a folder of PDFs and write one table.

use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use tracing::debug;

use recscan_core::models::TableFormat;
use recscan_core::pdf::PdfTextSource;
use recscan_core::{FileOutcome, FileReport, ScanError, Scanner};

use super::load_config;
use super::output::write_table;

/// Arguments for the run command.
#[derive(Args)]
pub struct RunArgs {
    /// Folder containing the documents [default: pdfs]
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output table path [default: final_output.csv]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output table format
    #[arg(short, long, value_enum)]
    format: Option<TableFormatArg>,

    /// Document extension to pick up [default: pdf]
    #[arg(short, long)]
    extension: Option<String>,

    /// Do not draw a progress bar
    #[arg(long)]
    no_progress: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum TableFormatArg {
    /// Comma-separated values
    Csv,
    /// JSON array
    Json,
}

impl From<TableFormatArg> for TableFormat {
    fn from(arg: TableFormatArg) -> Self {
        match arg {
            TableFormatArg::Csv => TableFormat::Csv,
            TableFormatArg::Json => TableFormat::Json,
        }
    }
}

pub fn run(args: RunArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = load_config(config_path)?;
    if let Some(input) = args.input {
        config.input.folder = input;
    }
    if let Some(output) = args.output {
        config.output.path = output;
    }
    if let Some(format) = args.format {
        config.output.format = format.into();
    }
    if let Some(extension) = args.extension {
        config.input.extension = extension.trim_start_matches('.').to_string();
    }

    let kind = config.input.extension.to_uppercase();
    let scanner = Scanner::new(PdfTextSource::new(config.pdf.clone()))
        .with_extension(config.input.extension.clone());

    let files = match scanner.discover(&config.input.folder) {
        Ok(files) => files,
        Err(ScanError::NoInputFolder(folder)) => {
            println!("{} Folder '{}' not found.", style("✗").red(), folder.display());
            return Ok(());
        }
        Err(ScanError::NoInputFiles { .. }) => {
            println!("{} No {} files found.", style("ℹ").blue(), kind);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    println!(
        "{} Found {} {} file(s). Processing...",
        style("ℹ").blue(),
        files.len(),
        kind
    );

    let pb = ProgressBar::new(files.len() as u64);
    if args.no_progress {
        pb.set_draw_target(ProgressDrawTarget::hidden());
    }
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let report = scanner.scan_files(&files, |file| {
        pb.suspend(|| print_file_report(file));
        pb.inc(1);
    });
    pb.finish_and_clear();

    let records = report.into_records();
    if records.is_empty() {
        println!(
            "{} No records extracted from any {}.",
            style("⚠").yellow(),
            kind
        );
        return Ok(());
    }

    write_table(&config.output.path, &records, config.output.format)?;
    debug!("Wrote {} rows in {:?}", records.len(), start.elapsed());

    println!("{} Extraction complete.", style("✓").green());
    println!(
        "   {} record(s) from {} file(s) in {:?}",
        style(records.len()).green(),
        files.len(),
        start.elapsed()
    );
    println!("Output saved as: {}", config.output.path.display());

    Ok(())
}

fn print_file_report(file: &FileReport) {
    println!("Processing: {}", file.file_name());
    match &file.outcome {
        FileOutcome::Extracted(count) => {
            println!("  Extracted {} record(s)", count);
        }
        FileOutcome::Empty => {
            println!(
                "  {} No extractable text found in this document.",
                style("⚠").yellow()
            );
        }
        FileOutcome::ReadFailed(reason) => {
            println!(
                "  {} Error reading {}: {}",
                style("✗").red(),
                file.path.display(),
                reason
            );
        }
    }
}

//! Core library for extracting person records from PDF text.
//!
//! This crate provides:
//! - Text sources (PDF via lopdf/pdf-extract, plain text files)
//! - A fixed bank of record templates (label, narrative, slash, key-value)
//! - Record extraction with order-preserving deduplication
//! - Folder scanning that aggregates records across documents

pub mod error;
pub mod extract;
pub mod models;
pub mod pdf;
pub mod scan;

pub use error::{PdfError, RecscanError, Result, ScanError};
pub use extract::{extract_records, ExtractionResult, RecordExtractor, Template, TemplateMatch};
pub use models::config::RecscanConfig;
pub use models::record::Record;
pub use pdf::{extract_text, PdfExtractor, PlainTextSource, TextSource};
pub use scan::{FileOutcome, FileReport, ScanReport, Scanner};

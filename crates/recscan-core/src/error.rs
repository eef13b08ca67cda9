//! Error types for the recscan-core library.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the recscan library.
#[derive(Error, Debug)]
pub enum RecscanError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Folder scanning error.
    #[error("scan error: {0}")]
    Scan(#[from] ScanError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised while turning a document into text.
#[derive(Error, Debug)]
pub enum PdfError {
    /// The file could not be read from disk.
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Errors related to input folder discovery.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The input folder does not exist.
    #[error("folder '{}' not found", .0.display())]
    NoInputFolder(PathBuf),

    /// The input folder holds no document with the expected extension.
    #[error("no .{extension} files found in '{}'", .folder.display())]
    NoInputFiles { folder: PathBuf, extension: String },

    /// The folder path could not be turned into a search pattern.
    #[error("invalid input pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

impl ScanError {
    /// Whether this condition ends a run quietly rather than as a failure.
    pub fn is_graceful(&self) -> bool {
        matches!(self, Self::NoInputFolder(_) | Self::NoInputFiles { .. })
    }
}

/// Result type for the recscan library.
pub type Result<T> = std::result::Result<T, RecscanError>;

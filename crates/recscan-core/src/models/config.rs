//! Configuration structures for a recscan run.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{RecscanError, Result};

/// Main configuration for recscan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecscanConfig {
    /// Input folder configuration.
    pub input: InputConfig,

    /// Output table configuration.
    pub output: OutputConfig,

    /// PDF text extraction configuration.
    pub pdf: PdfConfig,
}

/// Where documents are read from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Folder scanned for documents.
    pub folder: PathBuf,

    /// Document extension, matched case-insensitively (without the dot).
    pub extension: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            folder: PathBuf::from("pdfs"),
            extension: "pdf".to_string(),
        }
    }
}

/// Output table format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableFormat {
    /// Comma-separated table with a `Name,Age,City,Email` header.
    #[default]
    Csv,
    /// JSON array of records.
    Json,
}

/// Where and how the aggregated table is written.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output file path.
    pub path: PathBuf,

    /// Output format.
    pub format: TableFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("final_output.csv"),
            format: TableFormat::Csv,
        }
    }
}

/// PDF processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Try the empty password on encrypted documents.
    pub decrypt_with_empty_password: bool,

    /// Run pdf-extract over the whole document when per-page extraction yields nothing.
    pub fallback_to_pdf_extract: bool,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            decrypt_with_empty_password: true,
            fallback_to_pdf_extract: true,
        }
    }
}

impl RecscanConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            RecscanError::Config(format!("{}: {}", path.display(), e))
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| RecscanError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

//! Data models: records and configuration.

pub mod config;
pub mod record;

pub use config::{InputConfig, OutputConfig, PdfConfig, RecscanConfig, TableFormat};
pub use record::{Record, RECORD_COLUMNS};

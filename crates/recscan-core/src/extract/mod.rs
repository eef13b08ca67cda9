//! Record extraction module.

mod extractor;
pub mod rules;

pub use extractor::{ExtractionResult, RecordExtractor};
pub use rules::{FieldOrder, Template, TemplateMatch};

use crate::models::record::Record;

/// Extract unique `(Name, Age, City, Email)` records from text.
///
/// Runs all five templates in bank order, reorders the city-first narrative
/// captures, and drops exact duplicates while keeping first-seen order.
pub fn extract_records(text: &str) -> Vec<Record> {
    RecordExtractor::new().extract_records(text)
}

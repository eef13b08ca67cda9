//! Document text sources.

mod extractor;

pub use extractor::{PdfContent, PdfExtractor, PdfPage, PdfTextSource};

#[cfg(test)]
pub(crate) use extractor::tests::{build_pdf, build_pdf_with_undeclared_font};

use std::path::Path;

use tracing::warn;

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Something that turns a file into text.
pub trait TextSource {
    /// Read the full text of the document at `path`.
    fn read_text(&self, path: &Path) -> Result<String>;
}

impl<T: TextSource + ?Sized> TextSource for &T {
    fn read_text(&self, path: &Path) -> Result<String> {
        (**self).read_text(path)
    }
}

/// Text source for UTF-8 text files.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextSource;

impl TextSource for PlainTextSource {
    fn read_text(&self, path: &Path) -> Result<String> {
        Ok(std::fs::read_to_string(path)?)
    }
}

/// Extract the text of a PDF, or an empty string if it cannot be read.
///
/// The failure is logged. Callers cannot tell an unreadable document from
/// one without text; both mean there is nothing to extract.
pub fn extract_text(path: &Path) -> String {
    match PdfTextSource::default().read_text(path) {
        Ok(text) => text,
        Err(e) => {
            warn!("Error reading {}: {}", path.display(), e);
            String::new()
        }
    }
}

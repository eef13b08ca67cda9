//! PDF text extraction using lopdf and pdf-extract.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use lopdf::Document;
use tracing::{debug, trace};

use super::{Result, TextSource};
use crate::error::PdfError;
use crate::models::config::PdfConfig;

/// PDF text extractor backed by lopdf.
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
    config: PdfConfig,
}

/// Extracted content from a PDF.
#[derive(Debug, Clone)]
pub struct PdfContent {
    /// Concatenated text of all pages.
    pub text: String,
    /// Pages with their content.
    pub pages: Vec<PdfPage>,
}

/// Content from a single PDF page.
#[derive(Debug, Clone)]
pub struct PdfPage {
    /// Page number (1-indexed).
    pub number: u32,
    /// Extracted text from this page.
    pub text: String,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self::with_config(PdfConfig::default())
    }

    pub fn with_config(config: PdfConfig) -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
            config,
        }
    }

    /// Load a PDF from bytes.
    pub fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        if doc.is_encrypted() {
            if !self.config.decrypt_with_empty_password || doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            // pdf-extract needs the decrypted bytes for the fallback path
            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }

    /// Load a PDF from a file.
    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        let data = std::fs::read(path)?;
        self.load(&data)
    }

    /// Get the number of pages in the PDF.
    pub fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    /// Extract text from a specific page.
    pub fn extract_page_text(&self, page: u32) -> Result<String> {
        let doc = self.document()?;
        doc.extract_text(&[page])
            .map_err(|e| PdfError::TextExtraction(format!("page {}: {}", page, e)))
    }

    /// Extract every page, in page order.
    ///
    /// A page that fails to decode is kept with empty text.
    pub fn extract_content(&self) -> Result<PdfContent> {
        let doc = self.document()?;

        let mut pages = Vec::new();
        let mut text = String::new();

        for page_num in doc.get_pages().into_keys() {
            let page_text = match self.extract_page_text(page_num) {
                Ok(t) => t,
                Err(e) => {
                    debug!("Skipping page {}: {}", page_num, e);
                    String::new()
                }
            };

            let page_text = page_text.trim_end_matches(['\r', '\n']).to_string();
            trace!("Page {}: {} chars", page_num, page_text.len());

            if !page_text.is_empty() {
                text.push_str(&page_text);
                text.push('\n');
            }

            pages.push(PdfPage {
                number: page_num,
                text: page_text,
            });
        }

        Ok(PdfContent { text, pages })
    }

    /// Extract text from the entire PDF.
    ///
    /// Pages are joined in order, each followed by a newline. When no page
    /// yields text, pdf-extract gets a pass over the whole document.
    pub fn extract_text(&self) -> Result<String> {
        let content = self.extract_content()?;
        if !content.text.is_empty() || !self.config.fallback_to_pdf_extract {
            return Ok(content.text);
        }

        debug!(
            "No text on any of {} page(s) from lopdf, falling back to pdf-extract",
            content.pages.len()
        );

        // pdf-extract panics on some malformed documents instead of returning an error
        let raw_data = &self.raw_data;
        match panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(raw_data))) {
            Ok(result) => result.map_err(|e| PdfError::TextExtraction(e.to_string())),
            Err(payload) => Err(PdfError::TextExtraction(format!(
                "pdf-extract panicked: {}",
                panic_message(payload.as_ref())
            ))),
        }
    }

    fn document(&self) -> Result<&Document> {
        self.document
            .as_ref()
            .ok_or_else(|| PdfError::Parse("No document loaded".to_string()))
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown cause")
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Text source reading PDF files, one extractor per document.
#[derive(Debug, Clone, Default)]
pub struct PdfTextSource {
    config: PdfConfig,
}

impl PdfTextSource {
    pub fn new(config: PdfConfig) -> Self {
        Self { config }
    }
}

impl TextSource for PdfTextSource {
    fn read_text(&self, path: &Path) -> Result<String> {
        let mut extractor = PdfExtractor::with_config(self.config.clone());
        extractor.load_file(path)?;
        trace!("{}: {} page(s)", path.display(), extractor.page_count());
        extractor.extract_text()
    }
}

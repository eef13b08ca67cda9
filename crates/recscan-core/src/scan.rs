//! Folder scanning: run the extractor over every document in a folder.

use std::path::{Path, PathBuf};

use glob::{glob_with, MatchOptions, Pattern};
use tracing::{debug, info, warn};

use crate::error::ScanError;
use crate::extract::RecordExtractor;
use crate::models::record::Record;
use crate::pdf::TextSource;

/// What happened to a single document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Text was extracted and searched; holds the unique record count, possibly zero.
    Extracted(usize),
    /// The document had no non-whitespace text.
    Empty,
    /// The document could not be read.
    ReadFailed(String),
}

/// Per-document result.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: FileOutcome,
    /// Unique records of this document in discovery order.
    pub records: Vec<Record>,
}

impl FileReport {
    /// File name for display, falling back to the full path.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Result of scanning a folder.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// Reports in processing order.
    pub files: Vec<FileReport>,
}

impl ScanReport {
    /// All records across files, in discovery order.
    ///
    /// The same record found in two files appears twice.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.files.iter().flat_map(|f| f.records.iter())
    }

    pub fn into_records(self) -> Vec<Record> {
        self.files.into_iter().flat_map(|f| f.records).collect()
    }

    pub fn record_count(&self) -> usize {
        self.files.iter().map(|f| f.records.len()).sum()
    }

    pub fn failed(&self) -> impl Iterator<Item = &FileReport> {
        self.files
            .iter()
            .filter(|f| matches!(f.outcome, FileOutcome::ReadFailed(_)))
    }
}

/// List documents in `folder` whose name ends in `.{extension}`, ignoring case.
///
/// The list is sorted by path so results are stable across platforms.
pub fn discover_documents(folder: &Path, extension: &str) -> Result<Vec<PathBuf>, ScanError> {
    if !folder.exists() {
        return Err(ScanError::NoInputFolder(folder.to_path_buf()));
    }

    let pattern = format!(
        "{}/*.{}",
        Pattern::escape(&folder.to_string_lossy()),
        Pattern::escape(extension)
    );
    let options = MatchOptions {
        case_sensitive: false,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    };

    let mut files: Vec<PathBuf> = glob_with(&pattern, options)?
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .collect();
    files.sort();

    if files.is_empty() {
        return Err(ScanError::NoInputFiles {
            folder: folder.to_path_buf(),
            extension: extension.to_string(),
        });
    }

    debug!("Found {} document(s) in {}", files.len(), folder.display());
    Ok(files)
}

/// Read one document and extract its records.
///
/// Read failures and empty documents are reported in the outcome; they never
/// abort the caller.
pub fn scan_document<S>(path: &Path, source: &S, extractor: &RecordExtractor) -> FileReport
where
    S: TextSource + ?Sized,
{
    let text = match source.read_text(path) {
        Ok(text) => text,
        Err(e) => {
            warn!("Error reading {}: {}", path.display(), e);
            return FileReport {
                path: path.to_path_buf(),
                outcome: FileOutcome::ReadFailed(e.to_string()),
                records: Vec::new(),
            };
        }
    };

    if text.trim().is_empty() {
        info!("No extractable text in {}", path.display());
        return FileReport {
            path: path.to_path_buf(),
            outcome: FileOutcome::Empty,
            records: Vec::new(),
        };
    }

    let result = extractor.extract(&text);
    debug!(
        "{}: {} record(s) in {}ms",
        path.display(),
        result.records.len(),
        result.processing_time_ms
    );

    FileReport {
        path: path.to_path_buf(),
        outcome: FileOutcome::Extracted(result.records.len()),
        records: result.records,
    }
}

/// Sequential folder scanner.
pub struct Scanner<S> {
    source: S,
    extractor: RecordExtractor,
    extension: String,
}

impl<S: TextSource> Scanner<S> {
    /// Create a scanner for `.pdf` documents.
    pub fn new(source: S) -> Self {
        Self {
            source,
            extractor: RecordExtractor::new(),
            extension: "pdf".to_string(),
        }
    }

    /// Set the document extension (without the dot).
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// List the documents this scanner would process.
    pub fn discover(&self, folder: &Path) -> Result<Vec<PathBuf>, ScanError> {
        discover_documents(folder, &self.extension)
    }

    /// Process `files` one at a time, calling `on_file` after each.
    pub fn scan_files<F>(&self, files: &[PathBuf], mut on_file: F) -> ScanReport
    where
        F: FnMut(&FileReport),
    {
        let mut report = ScanReport::default();

        for path in files {
            let file_report = scan_document(path, &self.source, &self.extractor);
            on_file(&file_report);
            report.files.push(file_report);
        }

        info!(
            "Scanned {} file(s), {} record(s), {} read failure(s)",
            report.files.len(),
            report.record_count(),
            report.failed().count()
        );
        report
    }

    /// Discover and process every document in `folder`.
    pub fn scan<F>(&self, folder: &Path, on_file: F) -> Result<ScanReport, ScanError>
    where
        F: FnMut(&FileReport),
    {
        let files = self.discover(folder)?;
        Ok(self.scan_files(&files, on_file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;

    use pretty_assertions::assert_eq;

    use crate::error::PdfError;
    use crate::pdf::{build_pdf, build_pdf_with_undeclared_font, PdfTextSource};

    /// Serves canned text keyed by file name.
    struct FakeSource {
        texts: HashMap<String, Option<String>>,
    }

    impl FakeSource {
        fn new(entries: &[(&str, Option<&str>)]) -> Self {
            Self {
                texts: entries
                    .iter()
                    .map(|(name, text)| (name.to_string(), text.map(str::to_string)))
                    .collect(),
            }
        }
    }

    impl TextSource for FakeSource {
        fn read_text(&self, path: &Path) -> crate::pdf::Result<String> {
            let name = path.file_name().unwrap().to_string_lossy().into_owned();
            match self.texts.get(&name) {
                Some(Some(text)) => Ok(text.clone()),
                _ => Err(PdfError::Parse(format!("cannot open {}", name))),
            }
        }
    }

    fn touch(dir: &Path, names: &[&str]) {
        for name in names {
            fs::write(dir.join(name), b"").unwrap();
        }
    }

    #[test]
    fn test_discover_missing_folder() {
        let dir = tempfile::tempdir().unwrap();
        let err = discover_documents(&dir.path().join("pdfs"), "pdf").unwrap_err();
        assert!(matches!(err, ScanError::NoInputFolder(_)));
        assert!(err.is_graceful());
    }

    #[test]
    fn test_discover_no_matching_files() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), &["notes.txt", "pdf", "report.pdf.bak"]);

        let err = discover_documents(dir.path(), "pdf").unwrap_err();
        assert!(matches!(err, ScanError::NoInputFiles { .. }));
        assert!(err.is_graceful());
    }

    #[test]
    fn test_discover_is_case_insensitive_and_sorted() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), &["b.pdf", "A.PDF", "c.Pdf", "notes.txt"]);

        let files = discover_documents(dir.path(), "pdf").unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["A.PDF", "b.pdf", "c.Pdf"]);
    }

    #[test]
    fn test_scan_aggregates_without_cross_file_dedup() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), &["a.pdf", "b.pdf"]);

        let line = "Name: Asha | Age: 30 | City: Pune | Email: asha@x.com";
        let source = FakeSource::new(&[("a.pdf", Some(line)), ("b.pdf", Some(line))]);

        let report = Scanner::new(source).scan(dir.path(), |_| {}).unwrap();
        let records = report.into_records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], records[1]);
    }

    #[test]
    fn test_scan_orders_records_by_file() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), &["2.pdf", "1.pdf"]);

        let source = FakeSource::new(&[
            ("1.pdf", Some("Ravi Kumar / 25 / Kochi / ravi@mail.com")),
            ("2.pdf", Some("Name: Asha | Age: 30 | City: Pune | Email: asha@x.com")),
        ]);

        let report = Scanner::new(source).scan(dir.path(), |_| {}).unwrap();
        let names: Vec<&str> = report.records().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Ravi Kumar", "Asha"]);
    }

    #[test]
    fn test_scan_reports_empty_and_failed_files() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), &["broken.pdf", "blank.pdf", "people.pdf", "nothing.pdf"]);

        let source = FakeSource::new(&[
            ("broken.pdf", None),
            ("blank.pdf", Some("  \n\t \n")),
            ("people.pdf", Some("Customer Priya Menon lives in Bangalore and she is 19 years old, priya@mail.com")),
            ("nothing.pdf", Some("Quarterly report, nothing personal here.")),
        ]);

        let mut seen = Vec::new();
        let report = Scanner::new(source)
            .scan(dir.path(), |f| seen.push((f.file_name(), f.records.len())))
            .unwrap();

        assert_eq!(
            seen,
            vec![
                ("blank.pdf".to_string(), 0),
                ("broken.pdf".to_string(), 0),
                ("nothing.pdf".to_string(), 0),
                ("people.pdf".to_string(), 1),
            ]
        );

        let outcomes: Vec<&FileOutcome> = report.files.iter().map(|f| &f.outcome).collect();
        assert_eq!(outcomes[0], &FileOutcome::Empty);
        assert!(matches!(outcomes[1], FileOutcome::ReadFailed(_)));
        assert_eq!(outcomes[2], &FileOutcome::Extracted(0));
        assert_eq!(outcomes[3], &FileOutcome::Extracted(1));
        assert_eq!(report.record_count(), 1);
        assert_eq!(report.failed().count(), 1);
    }

    #[test]
    fn test_scan_with_no_records_completes() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), &["memo.pdf"]);

        let source = FakeSource::new(&[("memo.pdf", Some("Meeting moved to Friday."))]);
        let report = Scanner::new(source).scan(dir.path(), |_| {}).unwrap();
        assert_eq!(report.files.len(), 1);
        assert!(report.into_records().is_empty());
    }

    #[test]
    fn test_scan_custom_extension() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), &["a.pdf", "b.TXT"]);

        let source = FakeSource::new(&[("b.TXT", Some("Ravi Kumar / 25 / Kochi / ravi@mail.com"))]);
        let scanner = Scanner::new(source).with_extension("txt");
        let files = scanner.discover(dir.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(scanner.scan_files(&files, |_| {}).record_count(), 1);
    }

    #[test]
    fn test_scan_real_pdfs() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("people.pdf"),
            build_pdf(&["Name: Asha | Age: 30 | City: Pune | Email: asha@x.com"]),
        )
        .unwrap();
        fs::write(dir.path().join("corrupt.pdf"), b"not a pdf").unwrap();

        let report = Scanner::new(PdfTextSource::default())
            .scan(dir.path(), |_| {})
            .unwrap();

        assert!(matches!(report.files[0].outcome, FileOutcome::ReadFailed(_)));
        assert_eq!(
            report.into_records(),
            vec![Record::new("Asha", "30", "Pune", "asha@x.com")]
        );
    }

    #[test]
    fn test_scan_survives_pdf_with_undeclared_font() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a_bad_font.pdf"), build_pdf_with_undeclared_font()).unwrap();
        fs::write(
            dir.path().join("b_people.pdf"),
            build_pdf(&["Ravi Kumar / 25 / Kochi / ravi@mail.com"]),
        )
        .unwrap();

        let report = Scanner::new(PdfTextSource::default())
            .scan(dir.path(), |_| {})
            .unwrap();

        assert_eq!(report.files.len(), 2);
        assert!(matches!(report.files[0].outcome, FileOutcome::ReadFailed(_)));
        assert_eq!(report.files[1].outcome, FileOutcome::Extracted(1));
        assert_eq!(
            report.into_records(),
            vec![Record::new("Ravi Kumar", "25", "Kochi", "ravi@mail.com")]
        );
    }
}

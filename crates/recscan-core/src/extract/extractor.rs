//! Record extractor running the whole template bank over a text.

use std::collections::HashSet;
use std::time::Instant;

use tracing::{debug, trace};

use crate::models::record::Record;

use super::rules::{Template, TemplateMatch};

/// Result of running the extractor over one text.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Unique records in discovery order.
    pub records: Vec<Record>,
    /// Provenance of each surviving record (parallel to `records`).
    pub matches: Vec<TemplateMatch>,
    /// Raw match count per template, before deduplication.
    pub per_template: Vec<(Template, usize)>,
    /// Number of matches dropped as exact duplicates.
    pub duplicates_removed: usize,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Applies every template in bank order and merges the results.
///
/// The extractor holds no state between calls, so the same text always
/// yields the same records in the same order.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordExtractor;

impl RecordExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract unique records with per-template statistics.
    pub fn extract(&self, text: &str) -> ExtractionResult {
        let start = Instant::now();

        let mut all_matches = Vec::new();
        let mut per_template = Vec::with_capacity(Template::ALL.len());

        for template in Template::ALL {
            let found = template.find_all(text);
            debug!("Template {} ({}) matched {} time(s)", template.number(), template, found.len());
            for m in &found {
                trace!("{} at {:?}: {}", template, m.position, m.record);
            }
            per_template.push((template, found.len()));
            all_matches.extend(found);
        }

        let raw_count = all_matches.len();
        let matches = first_by_record(all_matches, |m| &m.record);
        let duplicates_removed = raw_count - matches.len();
        let records = matches.iter().map(|m| m.record.clone()).collect();

        debug!(
            "Extracted {} unique record(s) from {} match(es), {} duplicate(s) removed",
            matches.len(),
            raw_count,
            duplicates_removed
        );

        ExtractionResult {
            records,
            matches,
            per_template,
            duplicates_removed,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }

    /// Unique matches with provenance, in discovery order.
    pub fn extract_matches(&self, text: &str) -> Vec<TemplateMatch> {
        self.extract(text).matches
    }

    /// Unique records in discovery order.
    pub fn extract_records(&self, text: &str) -> Vec<Record> {
        self.extract(text).records
    }
}

/// Keep the first occurrence of each distinct record, preserving order.
fn first_by_record<T, F>(items: Vec<T>, record: F) -> Vec<T>
where
    F: Fn(&T) -> &Record,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(record(item).clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_label_based_record() {
        let text = "Customer list\nName: Asha | Age: 30 | City: Pune | Email: asha@x.com\n";
        let records = RecordExtractor::new().extract_records(text);
        assert_eq!(records, vec![Record::new("Asha", "30", "Pune", "asha@x.com")]);
    }

    #[test]
    fn test_narrative_record_is_reordered() {
        let text = "Customer Priya Menon lives in Bangalore and she is 19 years old, priya@mail.com";
        let records = RecordExtractor::new().extract_records(text);
        assert_eq!(
            records,
            vec![Record::new("Priya Menon", "19", "Bangalore", "priya@mail.com")]
        );
    }

    #[test]
    fn test_idempotent() {
        let text = "Name: Asha | Age: 30 | City: Pune | Email: asha@x.com\n\
                    Meera Nair, aged 28 lives in Kochi, reach her at meera.nair@mail.com\n\
                    Customer Priya Menon lives in Bangalore and she is 19 years old, priya@mail.com";
        let extractor = RecordExtractor::new();
        let first = extractor.extract_records(text);
        let second = extractor.extract_records(text);
        assert_eq!(first.len(), 3);
        assert_eq!(first, second);
    }

    #[test]
    fn test_same_fact_from_two_templates_kept_once() {
        // Matches both the label-based and the key-value template.
        let text = "Name= Ravi Kumar | Age= 25 | City= Kochi | Email= ravi@mail.com";
        let result = RecordExtractor::new().extract(text);

        assert_eq!(
            result.records,
            vec![Record::new("Ravi Kumar", "25", "Kochi", "ravi@mail.com")]
        );
        assert_eq!(result.duplicates_removed, 1);
        assert_eq!(result.matches[0].template, Template::LabelBased);
        assert!(result.per_template.contains(&(Template::KeyValue, 1)));
    }

    #[test]
    fn test_duplicate_keeps_first_position() {
        let text = "Name: Asha | Age: 30 | City: Pune | Email: asha@x.com\n\
                    Name= Ravi Kumar | Age= 25 | City= Kochi | Email= ravi@mail.com";
        let records = RecordExtractor::new().extract_records(text);
        assert_eq!(
            records,
            vec![
                Record::new("Asha", "30", "Pune", "asha@x.com"),
                Record::new("Ravi Kumar", "25", "Kochi", "ravi@mail.com"),
            ]
        );
    }

    #[test]
    fn test_template_precedence_beats_text_position() {
        // The slash record comes first in the text but template 1 runs first.
        let text = "Sara Thomas / 33 / Goa / sara@mail.com\n\
                    Name: Asha | Age: 30 | City: Pune | Email: asha@x.com";
        let records = RecordExtractor::new().extract_records(text);
        assert_eq!(
            records,
            vec![
                Record::new("Asha", "30", "Pune", "asha@x.com"),
                Record::new("Sara Thomas", "33", "Goa", "sara@mail.com"),
            ]
        );
    }

    #[test]
    fn test_case_differences_are_distinct() {
        let text = "Name: Ravi Kumar | Age: 25 | City: Kochi | Email: ravi@mail.com\n\
                    Name: Ravi Kumar | Age: 25 | City: kochi | Email: ravi@mail.com\n\
                    Name: Ravi Kumar | Age: 25 | City: Kochi | Email: ravi@mail.com";
        let records = RecordExtractor::new().extract_records(text);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].city, "Kochi");
        assert_eq!(records[1].city, "kochi");
    }

    #[test]
    fn test_partial_records_contribute_nothing() {
        let text = "Name: Asha | Age: 30 | City: Pune\n\
                    Name = Ravi Kumar, Age = 25, City = Kochi\n\
                    Customer Priya Menon lives in Bangalore and she is 19 years old";
        let result = RecordExtractor::new().extract(text);
        assert!(result.records.is_empty());
        assert!(result.per_template.iter().all(|(_, count)| *count == 0));
    }

    #[test]
    fn test_narrative_templates_disagree_on_age() {
        // Template 2 takes the age after "aged", template 5 the first number after the city.
        let text = "Meera Nair, aged 28 lives in Kochi, flat 12, meera@mail.com";
        let result = RecordExtractor::new().extract(text);

        assert_eq!(
            result.records,
            vec![
                Record::new("Meera Nair", "28", "Kochi", "meera@mail.com"),
                Record::new("Meera Nair", "12", "Kochi", "meera@mail.com"),
            ]
        );
        assert_eq!(result.matches[0].template, Template::SentenceNarrative);
        assert_eq!(result.matches[1].template, Template::NarrativeCityFirst);
        assert_eq!(result.duplicates_removed, 0);
        assert!(result.per_template.contains(&(Template::SentenceNarrative, 1)));
        assert!(result.per_template.contains(&(Template::NarrativeCityFirst, 1)));
    }

    #[test]
    fn test_no_text() {
        assert!(RecordExtractor::new().extract_records("").is_empty());
    }

    #[test]
    fn test_first_by_record_is_stable() {
        let a = Record::new("A", "1", "X", "a@x.com");
        let b = Record::new("B", "2", "Y", "b@x.com");
        let deduped = first_by_record(vec![a.clone(), b.clone(), a.clone(), b.clone(), a.clone()], |r| r);
        assert_eq!(deduped, vec![a, b]);
    }
}

//! The fixed bank of record templates.
//!
//! Each template is a stateless regex rule for one way of writing a person
//! record. Every template runs over the whole text; overlapping hits between
//! templates are left for deduplication.

pub mod patterns;

use std::fmt;

use regex::Regex;
use serde::Serialize;

use crate::models::record::Record;
use patterns::{KEY_VALUE, LABEL_BASED, NARRATIVE_CITY_FIRST, SENTENCE_NARRATIVE, SLASH_SEPARATED};

/// One record layout the extractor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Template {
    /// `Name: X | Age: Y | City: Z | Email: W`
    LabelBased,
    /// `X, aged Y ... in Z ... W`
    SentenceNarrative,
    /// `X / Y / Z / W`
    SlashSeparated,
    /// `Name = X ... Age = Y ... City = Z ... Email = W`
    KeyValue,
    /// `Customer X ... in Z ... Y ... W`
    NarrativeCityFirst,
}

/// Order in which a template captures the four fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOrder {
    NameAgeCityEmail,
    NameCityAgeEmail,
}

impl FieldOrder {
    /// Build a record from captures given in this order.
    pub fn arrange(self, [first, second, third, fourth]: [&str; 4]) -> Record {
        match self {
            Self::NameAgeCityEmail => Record::new(first, second, third, fourth),
            Self::NameCityAgeEmail => Record::new(first, third, second, fourth),
        }
    }
}

impl Template {
    /// All templates in application order.
    pub const ALL: [Template; 5] = [
        Template::LabelBased,
        Template::SentenceNarrative,
        Template::SlashSeparated,
        Template::KeyValue,
        Template::NarrativeCityFirst,
    ];

    /// 1-based position in the bank.
    pub fn number(self) -> u8 {
        match self {
            Self::LabelBased => 1,
            Self::SentenceNarrative => 2,
            Self::SlashSeparated => 3,
            Self::KeyValue => 4,
            Self::NarrativeCityFirst => 5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::LabelBased => "label-based",
            Self::SentenceNarrative => "sentence-narrative",
            Self::SlashSeparated => "slash-separated",
            Self::KeyValue => "key-value",
            Self::NarrativeCityFirst => "narrative-city-first",
        }
    }

    pub fn field_order(self) -> FieldOrder {
        match self {
            Self::NarrativeCityFirst => FieldOrder::NameCityAgeEmail,
            _ => FieldOrder::NameAgeCityEmail,
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            Self::LabelBased => &*LABEL_BASED,
            Self::SentenceNarrative => &*SENTENCE_NARRATIVE,
            Self::SlashSeparated => &*SLASH_SEPARATED,
            Self::KeyValue => &*KEY_VALUE,
            Self::NarrativeCityFirst => &*NARRATIVE_CITY_FIRST,
        }
    }

    /// Find every non-overlapping match, left to right.
    ///
    /// Records come back already in `(Name, Age, City, Email)` order.
    pub fn find_all(self, text: &str) -> Vec<TemplateMatch> {
        let order = self.field_order();

        self.pattern()
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let record = order.arrange([&caps[1], &caps[2], &caps[3], &caps[4]]);
                Some(TemplateMatch {
                    record,
                    template: self,
                    position: (whole.start(), whole.end()),
                    source: whole.as_str().to_string(),
                })
            })
            .collect()
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A record together with where it came from.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateMatch {
    /// Normalized record.
    pub record: Record,
    /// Template that matched.
    pub template: Template,
    /// Byte span of the match in the source text.
    pub position: (usize, usize),
    /// Matched text.
    pub source: String,
}

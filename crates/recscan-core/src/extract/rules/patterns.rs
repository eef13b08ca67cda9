//! Compiled regex patterns for the record templates.

use lazy_static::lazy_static;
use regex::Regex;

/// Labels accepted for the city field.
pub const CITY_LABELS: &[&str] = &["City", "Location"];

/// Labels accepted for the email field.
pub const EMAIL_LABELS: &[&str] = &["Email", "Mail ID"];

/// Email address shape shared by the free-text templates.
pub const EMAIL_ADDRESS: &str = r"[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9.-]+";

fn alternation(labels: &[&str]) -> String {
    labels
        .iter()
        .map(|label| regex::escape(label))
        .collect::<Vec<_>>()
        .join("|")
}

lazy_static! {
    // Name: X | Age: Y | City: Z | Email: W  (":" or "=")
    pub static ref LABEL_BASED: Regex = Regex::new(&format!(
        r"(?i)Name[:=]\s*(.*?)\s*\|\s*Age[:=]\s*(\d+)\s*\|\s*(?:{city})[:=]\s*(.*?)\s*\|\s*(?:{email})[:=]\s*([^\s|]+)",
        city = alternation(CITY_LABELS),
        email = alternation(EMAIL_LABELS),
    )).unwrap();

    // Meera Nair, aged 28 lives in Kochi ... meera@mail.com
    pub static ref SENTENCE_NARRATIVE: Regex = Regex::new(&format!(
        r"([A-Z][a-z]+(?:\s[A-Z][a-z]+)?),?\s*(?:aged\s*(\d+)).*?(?:at|in)\s*([A-Z][a-z]+).*?({email})",
        email = EMAIL_ADDRESS,
    )).unwrap();

    // Ravi Kumar / 25 / Kochi / ravi@mail.com
    pub static ref SLASH_SEPARATED: Regex = Regex::new(&format!(
        r"([A-Z][a-z]+\s[A-Z][a-z]+)\s*/\s*(\d+).*?/\s*([A-Z][a-z]+).*?/\s*({email})",
        email = EMAIL_ADDRESS,
    )).unwrap();

    // Name = X ... Age = Y ... Location = Z ... Mail ID = W
    pub static ref KEY_VALUE: Regex = Regex::new(&format!(
        r"(?i)Name\s*=\s*([A-Z][a-z]+\s[A-Z][a-z]+).*?Age\s*=\s*(\d+).*?(?:{city})\s*=\s*([A-Z][a-z]+).*?(?:{label})\s*=\s*({email})",
        city = alternation(CITY_LABELS),
        label = alternation(EMAIL_LABELS),
        email = EMAIL_ADDRESS,
    )).unwrap();

    // Customer Priya Menon lives in Bangalore and she is 19 years old, priya@mail.com
    // Captures come out as (name, city, age, email).
    pub static ref NARRATIVE_CITY_FIRST: Regex = Regex::new(&format!(
        r"(?:Customer\s+)?([A-Z][a-z]+\s[A-Z][a-z]+).*?(?:in|at)\s*([A-Z][a-z]+).*?(\d{{2}}).*?({email})",
        email = EMAIL_ADDRESS,
    )).unwrap();
}

//! Person record extracted from document text.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Column names of the output table, in field order.
pub const RECORD_COLUMNS: [&str; 4] = ["Name", "Age", "City", "Email"];

/// A person record as `(Name, Age, City, Email)`.
///
/// Fields hold the raw matched substrings. Nothing is parsed or normalized:
/// the age stays a digit string and case is preserved, so two records are
/// equal only when every field matches character for character.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Record {
    /// Person name.
    #[serde(rename = "Name")]
    pub name: String,

    /// Age as matched (digits).
    #[serde(rename = "Age")]
    pub age: String,

    /// City or location.
    #[serde(rename = "City")]
    pub city: String,

    /// Email address.
    #[serde(rename = "Email")]
    pub email: String,
}

impl Record {
    pub fn new(
        name: impl Into<String>,
        age: impl Into<String>,
        city: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age: age.into(),
            city: city.into(),
            email: email.into(),
        }
    }

    /// Fields in table column order.
    pub fn fields(&self) -> [&str; 4] {
        [&self.name, &self.age, &self.city, &self.email]
    }
}

impl From<(String, String, String, String)> for Record {
    fn from((name, age, city, email): (String, String, String, String)) -> Self {
        Self { name, age, city, email }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {}",
            self.name, self.age, self.city, self.email
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_follow_column_order() {
        let record = Record::new("Asha", "30", "Pune", "asha@x.com");
        assert_eq!(record.fields(), ["Asha", "30", "Pune", "asha@x.com"]);
    }

    #[test]
    fn test_equality_is_case_sensitive() {
        let a = Record::new("Ravi Kumar", "25", "Kochi", "ravi@mail.com");
        let b = Record::new("Ravi Kumar", "25", "kochi", "ravi@mail.com");
        assert_ne!(a, b);
    }

    #[test]
    fn test_serializes_with_column_names() {
        let record = Record::new("Asha", "30", "Pune", "asha@x.com");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["Name"], "Asha");
        assert_eq!(json["Age"], "30");
        assert_eq!(json["City"], "Pune");
        assert_eq!(json["Email"], "asha@x.com");
    }
}

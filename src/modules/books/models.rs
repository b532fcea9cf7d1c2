use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A catalog entry. The ISBN is the primary key and never changes after
/// creation; the update path overwrites every other field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "PascalCase")]
pub struct Book {
    /// ISBN-13 in `ddd-dddddddddd` form
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub short_description: String,
    pub page_count: i64,
    pub release_date: NaiveDate,
}

/// One field-level rejection, serialized as `{propertyName, errorMessage}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationFailure {
    pub property_name: String,
    pub error_message: String,
}

impl ValidationFailure {
    pub fn new(property_name: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self {
            property_name: property_name.into(),
            error_message: error_message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_serializes_with_camel_case_fields() {
        let book = Book {
            isbn: "123-4567890123".to_string(),
            title: "T".to_string(),
            author: "A".to_string(),
            short_description: "d".to_string(),
            page_count: 420,
            release_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        };

        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["isbn"], "123-4567890123");
        assert_eq!(json["shortDescription"], "d");
        assert_eq!(json["pageCount"], 420);
        assert_eq!(json["releaseDate"], "2023-01-01");
    }

    #[test]
    fn validation_failure_uses_wire_field_names() {
        let failure = ValidationFailure::new("isbn", "Value was not a valid ISBN-13");
        let json = serde_json::to_value(&failure).unwrap();

        assert_eq!(json["propertyName"], "isbn");
        assert_eq!(json["errorMessage"], "Value was not a valid ISBN-13");
    }
}

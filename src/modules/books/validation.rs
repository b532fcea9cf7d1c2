use once_cell::sync::Lazy;
use regex::Regex;

use super::models::{Book, ValidationFailure};

/// ISBN-13 shape: three digits, a hyphen, ten digits.
static ISBN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{3}-\d{10}$").expect("ISBN pattern must compile"));

/// Check every field rule and collect the failures. An empty result means
/// the book is valid. Pure function over its input.
pub fn validate(book: &Book) -> Vec<ValidationFailure> {
    let mut failures = Vec::new();

    if !ISBN_PATTERN.is_match(&book.isbn) {
        failures.push(ValidationFailure::new(
            "isbn",
            "Value was not a valid ISBN-13",
        ));
    }

    if book.title.is_empty() {
        failures.push(ValidationFailure::new("title", "Title must not be empty"));
    }

    if book.author.is_empty() {
        failures.push(ValidationFailure::new("author", "Author must not be empty"));
    }

    if book.page_count <= 0 {
        failures.push(ValidationFailure::new(
            "pageCount",
            "PageCount must be greater than 0",
        ));
    }

    failures
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_book() -> Book {
        Book {
            isbn: "123-4567890123".to_string(),
            title: "The testing book".to_string(),
            author: "Mateusz".to_string(),
            short_description: "Please work".to_string(),
            page_count: 420,
            release_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        }
    }

    #[test]
    fn valid_book_passes() {
        assert!(validate(&sample_book()).is_empty());
    }

    #[test]
    fn malformed_isbn_is_rejected() {
        for isbn in ["Invalid", "1234567890123", "12-34567890123", "123-456"] {
            let mut book = sample_book();
            book.isbn = isbn.to_string();

            let failures = validate(&book);
            assert_eq!(failures.len(), 1, "isbn {isbn:?} should fail");
            assert_eq!(failures[0].property_name, "isbn");
            assert_eq!(failures[0].error_message, "Value was not a valid ISBN-13");
        }
    }

    #[test]
    fn empty_title_and_author_are_rejected() {
        let mut book = sample_book();
        book.title = String::new();
        book.author = String::new();

        let failures = validate(&book);
        let fields: Vec<_> = failures.iter().map(|f| f.property_name.as_str()).collect();
        assert_eq!(fields, vec!["title", "author"]);
    }

    #[test]
    fn non_positive_page_count_is_rejected() {
        for count in [0, -1] {
            let mut book = sample_book();
            book.page_count = count;

            let failures = validate(&book);
            assert_eq!(failures.len(), 1);
            assert_eq!(failures[0].property_name, "pageCount");
        }
    }

    #[test]
    fn failures_accumulate_across_fields() {
        let mut book = sample_book();
        book.isbn = "Invalid".to_string();
        book.title = String::new();
        book.page_count = 0;

        assert_eq!(validate(&book).len(), 3);
    }
}

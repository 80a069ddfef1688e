//! Record Module
//!
//! The book record stored in the catalog.

use serde::{Deserialize, Serialize};

/// A single catalog entry
///
/// `isbn` is the identifying key and must be unique within a store.
/// Missing JSON fields decode to empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub isbn: String,

    /// Opaque date string, compared lexicographically
    pub release_date: String,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
        release_date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            release_date: release_date.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let book: Book = serde_json::from_str(r#"{"title":"Dune","extra":1}"#).unwrap();
        assert_eq!(book.title, "Dune");
        assert_eq!(book.isbn, "");
        assert_eq!(book.release_date, "");
    }

    #[test]
    fn test_json_field_names() {
        let book = Book::new("Dune", "Herbert", "978-0441013593", "1965-08-01");
        let value = serde_json::to_value(&book).unwrap();
        assert_eq!(value["isbn"], "978-0441013593");
        assert_eq!(value["release_date"], "1965-08-01");
    }
}

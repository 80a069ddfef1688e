//! Query criteria
//!
//! Value type describing one search: filters, sort directive and page window.

use serde::{Deserialize, Deserializer, Serialize};

/// Field a query result is ordered by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[default]
    Title,
    Author,
    Isbn,
    ReleaseDate,
}

impl SortField {
    /// Parse a field name, case-insensitively
    ///
    /// Unknown or empty names fall back to `Title`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "author" => SortField::Author,
            "isbn" | "key" => SortField::Isbn,
            "release_date" => SortField::ReleaseDate,
            _ => SortField::Title,
        }
    }
}

impl<'de> Deserialize<'de> for SortField {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(SortField::parse).unwrap_or_default())
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Anything other than "desc" (any case) is ascending
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("desc") {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        }
    }
}

impl<'de> Deserialize<'de> for SortOrder {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(SortOrder::parse).unwrap_or_default())
    }
}

/// Search criteria as accepted by `POST /books/get-by-criteria`
///
/// Empty filter strings count as absent. `page` and `limit` are kept raw;
/// coercion happens in [`Window::new`](super::Window::new).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Criteria {
    pub title: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub release_date: Option<String>,
    pub sort_by: SortField,
    pub order: SortOrder,
    #[serde(deserialize_with = "zero_if_null")]
    pub page: i64,
    #[serde(deserialize_with = "zero_if_null")]
    pub limit: i64,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, needle: impl Into<String>) -> Self {
        self.title = Some(needle.into());
        self
    }

    pub fn author(mut self, needle: impl Into<String>) -> Self {
        self.author = Some(needle.into());
        self
    }

    pub fn isbn(mut self, isbn: impl Into<String>) -> Self {
        self.isbn = Some(isbn.into());
        self
    }

    pub fn release_date(mut self, date: impl Into<String>) -> Self {
        self.release_date = Some(date.into());
        self
    }

    pub fn sort_by(mut self, field: SortField) -> Self {
        self.sort_by = field;
        self
    }

    pub fn order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    pub fn page(mut self, page: i64) -> Self {
        self.page = page;
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }
}

fn zero_if_null<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or(0))
}

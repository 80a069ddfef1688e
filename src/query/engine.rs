//! Query engine
//!
//! Runs the filter → sort → paginate pipeline over borrowed records and
//! clones only the books that land in the final window.

use std::borrow::Cow;
use std::cmp::Reverse;

use super::{Criteria, SortField, SortOrder, Window};
use crate::record::Book;

/// Compiled filter predicates
///
/// Title and author needles are lowercased once here instead of per book.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    title: Option<String>,
    author: Option<String>,
    isbn: Option<String>,
    release_date: Option<String>,
}

impl Filter {
    pub fn compile(criteria: &Criteria) -> Self {
        Self {
            title: active(&criteria.title).map(str::to_lowercase),
            author: active(&criteria.author).map(str::to_lowercase),
            isbn: active(&criteria.isbn).map(str::to_owned),
            release_date: active(&criteria.release_date).map(str::to_owned),
        }
    }

    /// True when no predicate is active
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.isbn.is_none()
            && self.release_date.is_none()
    }

    /// AND of all active predicates
    pub fn matches(&self, book: &Book) -> bool {
        if let Some(needle) = &self.title {
            if !book.title.to_lowercase().contains(needle.as_str()) {
                return false;
            }
        }
        if let Some(needle) = &self.author {
            if !book.author.to_lowercase().contains(needle.as_str()) {
                return false;
            }
        }
        if let Some(isbn) = &self.isbn {
            if book.isbn != *isbn {
                return false;
            }
        }
        if let Some(date) = &self.release_date {
            if book.release_date != *date {
                return false;
            }
        }
        true
    }
}

/// Run a criteria query over `books`
///
/// `books` is consumed in its natural order; that order decides ties after
/// sorting.
pub fn run<'a, I>(books: I, criteria: &Criteria) -> Vec<Book>
where
    I: IntoIterator<Item = &'a Book>,
{
    let filter = Filter::compile(criteria);
    let mut matched: Vec<&'a Book> = books.into_iter().filter(|b| filter.matches(b)).collect();

    sort(&mut matched, criteria.sort_by, criteria.order);

    Window::new(criteria.page, criteria.limit)
        .slice(&matched)
        .iter()
        .map(|b| (*b).clone())
        .collect()
}

/// Stable sort; descending inverts the key rather than the output so equal
/// keys keep their incoming order in both directions.
fn sort<'a>(books: &mut [&'a Book], field: SortField, order: SortOrder) {
    match order {
        SortOrder::Asc => books.sort_by_cached_key(|b| sort_key(*b, field)),
        SortOrder::Desc => books.sort_by_cached_key(|b| Reverse(sort_key(*b, field))),
    }
}

fn sort_key(book: &Book, field: SortField) -> Cow<'_, str> {
    match field {
        SortField::Title => Cow::Owned(book.title.to_lowercase()),
        SortField::Author => Cow::Owned(book.author.to_lowercase()),
        SortField::Isbn => Cow::Borrowed(book.isbn.as_str()),
        SortField::ReleaseDate => Cow::Borrowed(book.release_date.as_str()),
    }
}

fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

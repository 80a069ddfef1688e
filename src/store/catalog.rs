//! Store implementation
//!
//! BTreeMap-based catalog with RwLock for concurrency.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use parking_lot::RwLock;

use crate::error::{LibrisError, Result};
use crate::query::{self, Criteria, Window};
use crate::record::Book;

/// In-memory book catalog keyed by ISBN
///
/// Every method takes the lock exactly once and performs no I/O while
/// holding it.
#[derive(Debug, Default)]
pub struct Store {
    books: RwLock<BTreeMap<String, Book>>,
}

impl Store {
    /// Create a new empty Store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new book (write lock)
    ///
    /// Fails with `AlreadyExists` if the ISBN is taken; the stored book is
    /// left untouched.
    pub fn create(&self, book: Book) -> Result<()> {
        let mut books = self.books.write();
        match books.entry(book.isbn.clone()) {
            Entry::Occupied(_) => Err(LibrisError::AlreadyExists(book.isbn)),
            Entry::Vacant(slot) => {
                slot.insert(book);
                Ok(())
            }
        }
    }

    /// Get a book by ISBN (read lock)
    pub fn get(&self, isbn: &str) -> Option<Book> {
        self.books.read().get(isbn).cloned()
    }

    /// Replace the book stored under `isbn` (write lock)
    ///
    /// An empty `book.isbn` inherits `isbn`. A different non-empty ISBN is
    /// rejected with `KeyMismatch`. Returns the stored book.
    pub fn update(&self, isbn: &str, mut book: Book) -> Result<Book> {
        let mut books = self.books.write();
        let slot = books
            .get_mut(isbn)
            .ok_or_else(|| LibrisError::NotFound(isbn.to_string()))?;

        if book.isbn.is_empty() {
            book.isbn = isbn.to_string();
        } else if book.isbn != isbn {
            return Err(LibrisError::KeyMismatch {
                path: isbn.to_string(),
                body: book.isbn,
            });
        }

        *slot = book.clone();
        Ok(book)
    }

    /// Remove a book (write lock), returning it
    pub fn delete(&self, isbn: &str) -> Result<Book> {
        self.books
            .write()
            .remove(isbn)
            .ok_or_else(|| LibrisError::NotFound(isbn.to_string()))
    }

    /// List one page of books in ISBN order (read lock)
    pub fn get_all(&self, page: i64, limit: i64) -> Vec<Book> {
        let window = Window::new(page, limit);
        self.books
            .read()
            .values()
            .skip(window.offset())
            .take(window.limit())
            .cloned()
            .collect()
    }

    /// Filtered, sorted, paginated search (read lock)
    pub fn query(&self, criteria: &Criteria) -> Vec<Book> {
        let books = self.books.read();
        query::run(books.values(), criteria)
    }

    /// Number of stored books
    pub fn len(&self) -> usize {
        self.books.read().len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.books.read().is_empty()
    }
}

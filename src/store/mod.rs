//! Store Module
//!
//! Concurrent in-memory owner of all catalog records.
//!
//! ## Responsibilities
//! - Enforce ISBN uniqueness on create
//! - Full-replace updates with an immutable key
//! - Multi-reader / single-writer access
//! - Listing and criteria queries over a consistent snapshot
//!
//! ## Data Structure Choice
//! BTreeMap wrapped in a parking_lot RwLock:
//! - Listing walks keys in ascending ISBN order, so pages are stable
//!   between calls on an unchanged catalog
//! - Readers never observe a half-written record: every mutation is a
//!   single map operation under the write guard

mod catalog;

pub use catalog::Store;

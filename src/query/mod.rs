//! Query Module
//!
//! Filter, sort and paginate over catalog records.
//!
//! ## Pipeline
//! ```text
//! all books ──► Filter (AND of active predicates)
//!           ──► stable sort on one field (asc / desc)
//!           ──► Window (page, limit)
//! ```
//!
//! The order is fixed: windows are always cut from the filtered and sorted
//! sequence, never from the raw collection.

mod criteria;
mod engine;
mod window;

pub use criteria::{Criteria, SortField, SortOrder};
pub use engine::{run, Filter};
pub use window::{Window, DEFAULT_LIMIT};

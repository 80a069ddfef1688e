//! Audit Module
//!
//! Best-effort, append-only audit trail of catalog mutations.
//!
//! ## Responsibilities
//! - Accept messages without blocking request handlers
//! - Write one message per line from a single background thread
//! - Drop (and count) messages when the queue is saturated
//!
//! ## File Format
//! ```text
//! Book created: 978-0441013593
//! Book updated: 978-0441013593
//! Book deleted: 978-0441013593
//! ```
//!
//! The file is truncated when the log starts. Nothing in the catalog
//! depends on a message reaching disk.

mod writer;

pub use writer::AuditLog;

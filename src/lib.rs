//! # Libris
//!
//! An in-memory book catalog served over HTTP, with:
//! - Create / read / update / delete by ISBN
//! - Filtered, sorted, paginated search
//! - Multi-reader / single-writer concurrency model
//! - Best-effort asynchronous audit log
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      HTTP Server                            │
//! │                  (axum + tokio)                             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                   Route Handlers                            │
//! │          (decode body, map errors to status)                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │    Store    │          │  Audit Log  │
//!   │  (RwLock)   │          │  (channel)  │
//!   └──────┬──────┘          └─────────────┘
//!          │
//!          ▼
//!   ┌─────────────┐
//!   │    Query    │
//!   │ filter/sort │
//!   │  /paginate  │
//!   └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod query;
pub mod store;
pub mod audit;
pub mod protocol;
pub mod network;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{LibrisError, Result};
pub use config::Config;
pub use record::Book;
pub use query::{Criteria, SortField, SortOrder};
pub use store::Store;
pub use audit::AuditLog;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Libris
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

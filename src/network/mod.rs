//! Network Module
//!
//! HTTP surface over the catalog.
//!
//! ## Architecture
//! - axum router on the tokio multi-thread runtime
//! - Handlers call the Store, then enqueue audit messages
//! - Store calls are short critical sections and run inline

mod routes;
mod server;

pub use routes::{router, AppState};
pub use server::Server;

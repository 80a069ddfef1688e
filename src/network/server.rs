//! HTTP Server
//!
//! Binds the listener and serves the router until shutdown is signalled.

use std::future::Future;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

use super::routes::{router, AppState};
use crate::audit::AuditLog;
use crate::config::Config;
use crate::error::Result;
use crate::store::Store;

/// HTTP server for Libris
pub struct Server {
    config: Config,
    state: AppState,
}

impl Server {
    /// Create a new server with the given config, store and audit log
    pub fn new(config: Config, store: Arc<Store>, audit: Arc<AuditLog>) -> Self {
        Self {
            config,
            state: AppState::new(store, audit),
        }
    }

    /// Build the router (for testing)
    pub fn router(&self) -> Router {
        router(self.state.clone())
    }

    /// Bind the configured listen address
    pub async fn bind(&self) -> Result<TcpListener> {
        let addr = self.config.socket_addr()?;
        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Listening on http://{}", listener.local_addr()?);
        Ok(listener)
    }

    /// Serve requests on `listener` until `shutdown` resolves
    ///
    /// In-flight requests are allowed to finish.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("Server stopped accepting connections");
        Ok(())
    }

    /// Bind and serve (blocking until shutdown)
    pub async fn run<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = self.bind().await?;
        self.serve(listener, shutdown).await
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

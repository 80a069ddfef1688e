//! Configuration for Libris
//!
//! Centralized configuration with sensible defaults.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::{LibrisError, Result};

/// Main configuration for a Libris server
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// HTTP listen address (host:port)
    pub listen_addr: String,

    // -------------------------------------------------------------------------
    // Audit Log Configuration
    // -------------------------------------------------------------------------
    /// Plain-text audit file, truncated on startup
    pub audit_log_path: PathBuf,

    /// Messages the audit queue holds before new ones are dropped
    pub audit_queue_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            audit_log_path: PathBuf::from("log.txt"),
            audit_queue_capacity: 100,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Parse the listen address
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.listen_addr.parse().map_err(|e| {
            LibrisError::Config(format!("invalid listen address '{}': {}", self.listen_addr, e))
        })
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the HTTP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    /// Set the audit log file path
    pub fn audit_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.audit_log_path = path.into();
        self
    }

    /// Set the audit queue capacity (clamped to at least 1)
    pub fn audit_queue_capacity(mut self, capacity: usize) -> Self {
        self.config.audit_queue_capacity = capacity.max(1);
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

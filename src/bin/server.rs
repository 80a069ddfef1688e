//! Libris Server Binary
//!
//! Starts the HTTP server for Libris.

use std::sync::Arc;

use clap::Parser;
use libris::network::Server;
use libris::{AuditLog, Config, Store};
use tracing_subscriber::{fmt, EnvFilter};

/// Libris Server
#[derive(Parser, Debug)]
#[command(name = "libris-server")]
#[command(about = "In-memory book catalog over HTTP")]
#[command(version)]
struct Args {
    /// Listen address (host:port)
    #[arg(short, long, default_value = "0.0.0.0:8080")]
    listen: String,

    /// Audit log file (truncated on startup)
    #[arg(short, long, default_value = "log.txt")]
    audit_log: String,

    /// Audit queue capacity before messages are dropped
    #[arg(short = 'q', long, default_value = "100")]
    audit_queue: usize,
}

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,libris=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("Libris Server v{}", libris::VERSION);
    tracing::info!("Audit log: {}", args.audit_log);
    tracing::info!("Listen address: {}", args.listen);

    // Build config from args
    let config = Config::builder()
        .listen_addr(&args.listen)
        .audit_log_path(&args.audit_log)
        .audit_queue_capacity(args.audit_queue)
        .build();

    // Start audit log
    let audit = match AuditLog::start(&config.audit_log_path, config.audit_queue_capacity) {
        Ok(log) => Arc::new(log),
        Err(e) => {
            tracing::error!("Failed to initialize audit log: {}", e);
            std::process::exit(1);
        }
    };

    let store = Arc::new(Store::new());
    let server = Server::new(config, store, Arc::clone(&audit));

    if let Err(e) = server.run(shutdown_signal()).await {
        tracing::error!("Server error: {}", e);
        audit.stop();
        std::process::exit(1);
    }

    // Flush queued audit messages before exiting
    audit.stop();
    if audit.dropped() > 0 {
        tracing::warn!("{} audit messages were dropped", audit.dropped());
    }

    tracing::info!("Server stopped");
}

/// Resolves on Ctrl+C
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received Ctrl+C, initiating shutdown..."),
        Err(e) => {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

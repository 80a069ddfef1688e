//! Audit Log Writer
//!
//! Bounded crossbeam channel drained by one writer thread.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread::{self, JoinHandle};

use crossbeam::channel::{self, Receiver, Sender, TrySendError};
use parking_lot::{Mutex, RwLock};

use crate::error::Result;

/// Handle to a running audit log
///
/// Created with [`AuditLog::start`] and shut down with [`AuditLog::stop`]
/// (or on drop). Safe to share across threads behind an `Arc`.
pub struct AuditLog {
    /// Log file location
    path: PathBuf,

    /// Producer side of the queue; `None` once stopped
    sender: RwLock<Option<Sender<String>>>,

    /// Background writer thread
    worker: Mutex<Option<JoinHandle<()>>>,

    /// Messages rejected because the queue was full or closed
    dropped: AtomicU64,
}

impl AuditLog {
    /// Truncate `path` and start the writer thread
    ///
    /// Fails if the file cannot be created; later write errors are only
    /// reported through tracing.
    pub fn start(path: impl AsRef<Path>, capacity: usize) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&path)?;

        let (sender, receiver) = channel::bounded(capacity.max(1));

        let worker_path = path.clone();
        let worker = thread::Builder::new()
            .name("libris-audit".to_string())
            .spawn(move || drain(receiver, file, &worker_path))?;

        tracing::debug!("Audit log started at {}", path.display());

        Ok(Self {
            path,
            sender: RwLock::new(Some(sender)),
            worker: Mutex::new(Some(worker)),
            dropped: AtomicU64::new(0),
        })
    }

    /// Enqueue a message without blocking
    ///
    /// Returns `false` if the message was dropped.
    pub fn log(&self, message: impl Into<String>) -> bool {
        let guard = self.sender.read();
        let Some(sender) = guard.as_ref() else {
            self.dropped.fetch_add(1, Ordering::Relaxed);
            return false;
        };

        match sender.try_send(message.into()) {
            Ok(()) => true,
            Err(TrySendError::Full(message)) => {
                self.dropped.fetch_add(1, Ordering::Relaxed);
                tracing::warn!("Audit queue full, dropping message: {}", message);
                false
            }
            Err(TrySendError::Disconnected(message)) => {
                self.dropped.fetch_add(1, Ordering::Relaxed);
                tracing::warn!("Audit writer gone, dropping message: {}", message);
                false
            }
        }
    }

    /// Close the queue and wait for queued messages to be written
    ///
    /// Calling this more than once is a no-op.
    pub fn stop(&self) {
        // Dropping the only sender disconnects the channel, which ends the
        // writer loop once the queue is drained.
        self.sender.write().take();

        if let Some(worker) = self.worker.lock().take() {
            if worker.join().is_err() {
                tracing::error!("Audit writer thread panicked");
            }
            tracing::debug!("Audit log stopped");
        }
    }

    /// Number of messages dropped so far
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    /// Get the log file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for AuditLog {
    fn drop(&mut self) {
        self.stop();
    }
}

impl std::fmt::Debug for AuditLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuditLog")
            .field("path", &self.path)
            .field("dropped", &self.dropped())
            .finish()
    }
}

/// Writer loop: one line per message, flushed immediately
fn drain(receiver: Receiver<String>, file: File, path: &Path) {
    let mut writer = BufWriter::new(file);

    for message in receiver {
        if let Err(e) = write_line(&mut writer, &message) {
            tracing::error!("Failed to write audit log {}: {}", path.display(), e);
        }
    }
}

fn write_line<W: Write>(writer: &mut W, message: &str) -> std::io::Result<()> {
    writer.write_all(message.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()
}

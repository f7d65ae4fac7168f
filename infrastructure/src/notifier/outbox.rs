//! JSONL outbox notifier.
//!
//! Each message is appended as one JSON line with `timestamp`, `to` and
//! `body`, for a separate delivery process to pick up. File writes run on
//! the blocking pool so a stalled disk cannot hold up the runtime.

use super::checked_address;
use async_trait::async_trait;
use sos_application::{Notifier, NotifyError};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Append-only outbox file. Thread-safe via `Mutex<BufWriter<File>>`.
pub struct OutboxNotifier {
    writer: Arc<Mutex<BufWriter<File>>>,
    path: PathBuf,
}

impl OutboxNotifier {
    /// Open (or create) the outbox at `path`, creating parent directories.
    pub fn open(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            writer: Arc::new(Mutex::new(BufWriter::new(file))),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl Notifier for OutboxNotifier {
    async fn send(&self, address: &str, body: &str) -> Result<(), NotifyError> {
        let address = checked_address(address)?;

        let record = serde_json::json!({
            "timestamp": chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            "to": address,
            "body": body,
        });
        let line = serde_json::to_string(&record)
            .map_err(|e| NotifyError::DeliveryFailed(e.to_string()))?;

        let writer = Arc::clone(&self.writer);
        let write = tokio::task::spawn_blocking(move || -> Result<(), String> {
            let mut writer = writer
                .lock()
                .map_err(|_| "outbox lock poisoned".to_string())?;
            writeln!(writer, "{}", line)
                .and_then(|_| writer.flush())
                .map_err(|e| e.to_string())
        });

        match write.await {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => Err(NotifyError::DeliveryFailed(format!(
                "{}: {}",
                self.path.display(),
                e
            ))),
            Err(e) => Err(NotifyError::DeliveryFailed(format!(
                "outbox write did not complete: {}",
                e
            ))),
        }
    }
}

impl Drop for OutboxNotifier {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

//! File-per-value timer state.
//!
//! Three small text files hold everything that survives between
//! invocations: the interval end-time, the completed count and the
//! watcher pid. Each accessor does a single whole-file read or write.

use chrono::{DateTime, Local, SecondsFormat, Utc};
use std::path::Path;

use super::config::StorePaths;
use crate::error::StoreError;

/// Persisted timer store.
#[derive(Debug, Clone)]
pub struct TimerStore {
    paths: StorePaths,
}

impl TimerStore {
    pub fn new(paths: StorePaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &StorePaths {
        &self.paths
    }

    // ── End time ─────────────────────────────────────────────────────

    /// Absent when the file is missing, empty or unparsable.
    pub fn read_end_time(&self) -> Option<DateTime<Utc>> {
        let content = std::fs::read_to_string(&self.paths.end_time).ok()?;
        let content = content.trim();
        if content.is_empty() {
            return None;
        }
        match DateTime::parse_from_rfc3339(content) {
            Ok(t) => Some(t.with_timezone(&Utc)),
            Err(e) => {
                tracing::debug!(error = %e, "ignoring unparsable end time");
                None
            }
        }
    }

    /// Writing `None` leaves an empty file behind.
    pub fn write_end_time(&self, end: Option<DateTime<Utc>>) -> Result<(), StoreError> {
        let content = end
            .map(|t| {
                t.with_timezone(&Local)
                    .to_rfc3339_opts(SecondsFormat::Secs, true)
            })
            .unwrap_or_default();
        write_file(&self.paths.end_time, &content)
    }

    // ── Completed count ──────────────────────────────────────────────

    /// Read the completed count, initialising a missing file to 0.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, the default
    /// cannot be written, or the file holds something other than a
    /// non-negative integer.
    pub fn read_completed(&self) -> Result<u32, StoreError> {
        let path = &self.paths.completed;
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "initialising completed count");
                write_file(path, "0")?;
                b"0".to_vec()
            }
            Err(source) => {
                return Err(StoreError::ReadFailed {
                    path: path.clone(),
                    source,
                })
            }
        };

        let corrupt = || StoreError::CorruptCount {
            path: path.clone(),
            content: String::from_utf8_lossy(&bytes).into_owned(),
        };
        let content = std::str::from_utf8(&bytes).map_err(|_| corrupt())?;
        let normalized = content.replace("\r\n", " ").replace('\n', " ");
        normalized.trim().parse::<u32>().map_err(|_| corrupt())
    }

    pub fn write_completed(&self, count: u32) -> Result<(), StoreError> {
        write_file(&self.paths.completed, &count.to_string())
    }

    // ── Watcher pid (best effort) ────────────────────────────────────

    pub fn read_watcher_pid(&self) -> Option<u32> {
        let content = std::fs::read_to_string(&self.paths.watcher_pid).ok()?;
        content.trim().parse().ok()
    }

    pub fn write_watcher_pid(&self, pid: u32) {
        if let Err(e) = std::fs::write(&self.paths.watcher_pid, pid.to_string()) {
            tracing::warn!(error = %e, pid, "could not record watcher pid");
        }
    }

    pub fn clear_watcher_pid(&self) {
        match std::fs::remove_file(&self.paths.watcher_pid) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(error = %e, "could not clear watcher pid"),
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<(), StoreError> {
    std::fs::write(path, content).map_err(|source| StoreError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })
}

//! Per-invocation timer configuration.
//!
//! Built once at startup and handed to the dispatcher and the watcher:
//! - Work, break and reminder durations
//! - Watcher polling interval
//! - Locations of the three state files
//!
//! Durations are fixed; there is no settings file.

use chrono::Duration;
use std::path::{Path, PathBuf};

use super::state_dir;

/// Locations of the persisted timer state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorePaths {
    /// Interval end-time (RFC 3339) or empty.
    pub end_time: PathBuf,
    /// Number of completed pomodoros.
    pub completed: PathBuf,
    /// Process id of the running watcher.
    pub watcher_pid: PathBuf,
}

impl StorePaths {
    /// The standard file names inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            end_time: dir.join(".pomodoro"),
            completed: dir.join(".pomodoro_done"),
            watcher_pid: dir.join(".pomodoro.pid"),
        }
    }
}

/// Timer configuration.
#[derive(Debug, Clone)]
pub struct TimerConfig {
    pub work: Duration,
    pub break_time: Duration,
    pub remind_every: Duration,
    /// Sleep between watcher checks.
    pub poll_every: std::time::Duration,
    pub paths: StorePaths,
}

fn default_work() -> Duration {
    Duration::minutes(30)
}
fn default_break() -> Duration {
    Duration::minutes(5)
}
fn default_remind_every() -> Duration {
    Duration::minutes(5)
}
fn default_poll_every() -> std::time::Duration {
    std::time::Duration::from_secs(5)
}

impl TimerConfig {
    /// Default durations with state files under `dir`.
    pub fn with_dir(dir: &Path) -> Self {
        Self {
            work: default_work(),
            break_time: default_break(),
            remind_every: default_remind_every(),
            poll_every: default_poll_every(),
            paths: StorePaths::in_dir(dir),
        }
    }

    /// Load from the environment (see [`state_dir`]).
    pub fn load() -> Self {
        Self::with_dir(&state_dir())
    }

    /// Work duration in whole minutes, for user-facing text.
    pub fn work_minutes(&self) -> i64 {
        self.work.num_minutes()
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self::load()
    }
}

mod config;
pub mod timer_store;

pub use config::{StorePaths, TimerConfig};
pub use timer_store::TimerStore;

use std::path::PathBuf;

/// Returns the directory holding the pomodoro state files.
///
/// Set POMODORO_HOME to keep the files somewhere other than `$HOME`.
/// Falls back to the current directory when no home can be determined.
pub fn state_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os("POMODORO_HOME").filter(|v| !v.is_empty()) {
        return PathBuf::from(dir);
    }
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

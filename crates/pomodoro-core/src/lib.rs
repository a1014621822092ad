//! # Pomodoro Core Library
//!
//! Business logic for a status-bar pomodoro timer. Every command is a
//! short-lived process; nothing lives in memory between invocations.
//!
//! ## Architecture
//!
//! - **Store**: three small files under the home directory hold the
//!   interval end-time, the completed count and the watcher pid
//! - **Dispatcher**: plans a command against the loaded state, then applies
//!   the resulting effects in order
//! - **Watcher**: a detached `beep` process that raises the completion
//!   alarm and keeps reminding until it is killed
//! - **Status**: renders the one-line status-bar string
//!
//! ## Key Components
//!
//! - [`Dispatcher`]: command execution
//! - [`TimerStore`]: persisted state
//! - [`TimerConfig`]: durations and file locations
//! - [`Sinks`]: notification, speech, multiplexer and process collaborators

pub mod error;
pub mod events;
pub mod sinks;
pub mod storage;
pub mod timer;

pub use error::{CoreError, StoreError};
pub use events::Effect;
pub use sinks::Sinks;
pub use storage::{StorePaths, TimerConfig, TimerStore};
pub use timer::{format_status, Command, Dispatcher, Phase, StatusSnapshot, TimerState};

use chrono::{DateTime, Utc};

use crate::sinks::Urgency;

/// Every command resolves to an ordered list of effects.
/// The dispatcher plans them; the executor applies them in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Persist a new end-time (`None` clears it).
    WriteEndTime { end_time: Option<DateTime<Utc>> },
    Notify {
        title: String,
        body: String,
        urgency: Urgency,
    },
    /// Kill the recorded watcher, if any, and forget its pid.
    TerminateWatcher,
    /// Launch a fresh watcher and record its pid.
    SpawnWatcher,
    RefreshDisplay,
    ResetCompleted,
    /// Take back one completion, never going below zero.
    DecrementCompleted,
    /// Become the watcher. Does not return while the watcher lives.
    RunWatcher,
}

//! Command dispatcher.
//!
//! Each invocation of the program runs exactly one command against the
//! persisted state:
//!
//! ```text
//! load state -> plan(state, command) -> apply effects in order -> reply
//! ```
//!
//! Planning is pure; all I/O happens while applying the effects, so the
//! end-time is always on disk before a watcher is spawned.

use chrono::{DateTime, Utc};

use super::status::{format_status, StatusSnapshot};
use super::watcher::Watcher;
use crate::error::{CoreError, Result};
use crate::events::Effect;
use crate::sinks::{Sinks, Urgency};
use crate::storage::{TimerConfig, TimerStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Status,
    Stop,
    Clear,
    Reset,
    Cancel,
    /// Run as the watcher process.
    Beep,
}

/// The world as a command sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerState {
    pub end_time: Option<DateTime<Utc>>,
    pub now: DateTime<Utc>,
}

impl TimerState {
    /// True once the tracked interval is over, or when none is tracked.
    pub fn elapsed(&self) -> bool {
        self.end_time.map_or(true, |end| self.now >= end)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Silent,
    Text(String),
    /// Render the status line once the effects are applied.
    Status,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub reply: Reply,
    pub effects: Vec<Effect>,
}

/// Decide what a command does, without touching anything.
pub fn plan(state: &TimerState, command: Command, config: &TimerConfig) -> Plan {
    use Effect::*;

    let text = |s: &str| Reply::Text(s.to_string());
    match command {
        Command::Start => {
            let message = format!("Timer started, {} minutes remaining", config.work_minutes());
            Plan {
                effects: vec![
                    WriteEndTime {
                        end_time: Some(state.now + config.work),
                    },
                    Notify {
                        title: "Pomodoro".into(),
                        body: message.clone(),
                        urgency: Urgency::Normal,
                    },
                    TerminateWatcher,
                    SpawnWatcher,
                    RefreshDisplay,
                ],
                reply: Reply::Text(message),
            }
        }
        Command::Status => Plan {
            reply: Reply::Status,
            effects: Vec::new(),
        },
        Command::Stop | Command::Clear => Plan {
            reply: if command == Command::Stop {
                text("Pomodoro stop!")
            } else {
                text("Pomodoro cleared!")
            },
            effects: vec![
                WriteEndTime { end_time: None },
                TerminateWatcher,
                RefreshDisplay,
            ],
        },
        Command::Reset => Plan {
            reply: text("Pomodoro reset!"),
            effects: vec![ResetCompleted, TerminateWatcher, RefreshDisplay],
        },
        Command::Cancel => {
            let mut effects = Vec::with_capacity(3);
            if state.elapsed() {
                effects.push(DecrementCompleted);
            }
            effects.extend([TerminateWatcher, RefreshDisplay]);
            Plan {
                reply: text("Pomodoro cancel!"),
                effects,
            }
        }
        Command::Beep => Plan {
            reply: Reply::Silent,
            effects: vec![RunWatcher],
        },
    }
}

/// Applies planned effects against the store and the sinks.
pub struct Dispatcher {
    config: TimerConfig,
    store: TimerStore,
    sinks: Sinks,
}

impl Dispatcher {
    pub fn new(config: TimerConfig, sinks: Sinks) -> Self {
        let store = TimerStore::new(config.paths.clone());
        Self {
            config,
            store,
            sinks,
        }
    }

    pub fn store(&self) -> &TimerStore {
        &self.store
    }

    pub fn state_at(&self, now: DateTime<Utc>) -> TimerState {
        TimerState {
            end_time: self.store.read_end_time(),
            now,
        }
    }

    /// Run one command and return the line to print, if any.
    ///
    /// # Errors
    ///
    /// Returns an error when the end-time or completed count cannot be
    /// persisted, the completed count is corrupt, or a watcher cannot be
    /// spawned.
    pub fn run(&self, command: Command, now: DateTime<Utc>) -> Result<Option<String>> {
        let state = self.state_at(now);
        let plan = plan(&state, command, &self.config);
        tracing::debug!(?command, ?state, effects = plan.effects.len(), "dispatching");

        for effect in &plan.effects {
            self.apply(effect)?;
        }

        Ok(match plan.reply {
            Reply::Silent => None,
            Reply::Text(text) => Some(text),
            Reply::Status => {
                let line = self.status_line(&state)?;
                (!line.is_empty()).then_some(line)
            }
        })
    }

    /// Structured status; `None` when no interval is tracked.
    pub fn snapshot(&self, now: DateTime<Utc>) -> Result<Option<StatusSnapshot>> {
        let Some(end) = self.store.read_end_time() else {
            return Ok(None);
        };
        let completed = self.store.read_completed()?;
        Ok(Some(StatusSnapshot::at(
            end,
            now,
            completed,
            self.config.break_time,
        )))
    }

    fn status_line(&self, state: &TimerState) -> Result<String> {
        if state.end_time.is_none() {
            return Ok(String::new());
        }
        let completed = self.store.read_completed()?;
        Ok(format_status(
            state.end_time,
            state.now,
            completed,
            self.config.break_time,
        ))
    }

    fn apply(&self, effect: &Effect) -> Result<()> {
        match effect {
            Effect::WriteEndTime { end_time } => self.store.write_end_time(*end_time)?,
            Effect::Notify {
                title,
                body,
                urgency,
            } => self.sinks.notifier.notify(title, body, *urgency),
            Effect::TerminateWatcher => self.terminate_watcher(),
            Effect::SpawnWatcher => {
                let pid = self
                    .sinks
                    .watchers
                    .spawn()
                    .map_err(CoreError::WatcherSpawn)?;
                tracing::debug!(pid, "spawned watcher");
                self.store.write_watcher_pid(pid);
            }
            Effect::RefreshDisplay => self.sinks.multiplexer.refresh(),
            Effect::ResetCompleted => self.store.write_completed(0)?,
            Effect::DecrementCompleted => {
                let completed = self.store.read_completed()?;
                if completed > 0 {
                    self.store.write_completed(completed - 1)?;
                }
            }
            Effect::RunWatcher => {
                Watcher::new(&self.config, &self.store, &self.sinks).run()?;
            }
        }
        Ok(())
    }

    fn terminate_watcher(&self) {
        let Some(pid) = self.store.read_watcher_pid() else {
            return;
        };
        match self.sinks.watchers.terminate(pid) {
            Ok(()) => tracing::debug!(pid, "terminated watcher"),
            Err(e) => tracing::debug!(pid, error = %e, "watcher already gone"),
        }
        self.store.clear_watcher_pid();
    }
}

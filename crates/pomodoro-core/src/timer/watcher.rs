//! Background watcher.
//!
//! Runs as its own process (`pomodoro beep`), spawned by `start` and killed
//! by the next `start`, `stop`, `clear`, `reset` or `cancel`. It never
//! exits on its own while an interval is tracked.
//!
//! ## State Transitions
//!
//! ```text
//! Waiting --(now >= end)--> Break --(now > end + break)--> Reminding
//!         [Completed alarm]        [first Remind alarm]    [Remind every period]
//! ```
//!
//! The machine is polled at a fixed interval; each transition fires its
//! alarm once no matter how many polls land past the threshold.

use chrono::{DateTime, Duration, Utc};

use crate::error::Result;
use crate::sinks::{Sinks, Urgency};
use crate::storage::{TimerConfig, TimerStore};

pub const DONE_MESSAGE: &str = "Pomodoro done, take a break!";
pub const REMIND_MESSAGE: &str = "It's too late, please start a new pomodoro!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatcherState {
    Waiting,
    Break,
    Reminding { next_at: DateTime<Utc> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alarm {
    Completed,
    Remind,
}

/// Pure watcher state machine; the caller feeds it the current time.
#[derive(Debug, Clone)]
pub struct WatcherMachine {
    end: DateTime<Utc>,
    break_time: Duration,
    remind_every: Duration,
    state: WatcherState,
}

impl WatcherMachine {
    pub fn new(end: DateTime<Utc>, break_time: Duration, remind_every: Duration) -> Self {
        Self {
            end,
            break_time,
            remind_every,
            state: WatcherState::Waiting,
        }
    }

    pub fn state(&self) -> WatcherState {
        self.state
    }

    /// Advance to `now`. Returns the alarm to raise, if any.
    pub fn tick(&mut self, now: DateTime<Utc>) -> Option<Alarm> {
        match self.state {
            WatcherState::Waiting if now >= self.end => {
                self.state = WatcherState::Break;
                Some(Alarm::Completed)
            }
            WatcherState::Break if now > self.end + self.break_time => {
                self.state = WatcherState::Reminding {
                    next_at: now + self.remind_every,
                };
                Some(Alarm::Remind)
            }
            WatcherState::Reminding { next_at } if now >= next_at => {
                self.state = WatcherState::Reminding {
                    next_at: now + self.remind_every,
                };
                Some(Alarm::Remind)
            }
            _ => None,
        }
    }
}

/// The watcher process body.
pub struct Watcher<'a> {
    config: &'a TimerConfig,
    store: &'a TimerStore,
    sinks: &'a Sinks,
}

impl<'a> Watcher<'a> {
    pub fn new(config: &'a TimerConfig, store: &'a TimerStore, sinks: &'a Sinks) -> Self {
        Self {
            config,
            store,
            sinks,
        }
    }

    /// Poll until killed. Returns immediately when no interval is tracked,
    /// forgetting its own pid so nobody signals it later.
    ///
    /// # Errors
    ///
    /// Returns an error if the completed count cannot be updated.
    pub fn run(&self) -> Result<()> {
        let Some(end) = self.store.read_end_time() else {
            tracing::debug!("no interval tracked, watcher exiting");
            if self.store.read_watcher_pid() == Some(std::process::id()) {
                self.store.clear_watcher_pid();
            }
            return Ok(());
        };
        tracing::info!(%end, "watcher started");

        let mut machine = WatcherMachine::new(end, self.config.break_time, self.config.remind_every);
        loop {
            std::thread::sleep(self.config.poll_every);
            if let Some(alarm) = machine.tick(Utc::now()) {
                self.fire(alarm)?;
            }
        }
    }

    /// Raise one alarm through the sinks.
    pub fn fire(&self, alarm: Alarm) -> Result<()> {
        tracing::info!(?alarm, "watcher alarm");
        match alarm {
            Alarm::Completed => {
                self.sinks.multiplexer.display_message(DONE_MESSAGE);
                self.sinks
                    .notifier
                    .notify("Pomodoro", DONE_MESSAGE, Urgency::Normal);
                self.sinks.announcer.announce(DONE_MESSAGE);

                let completed = self.store.read_completed()?;
                self.store.write_completed(completed.saturating_add(1))?;
                self.sinks.multiplexer.refresh();
            }
            Alarm::Remind => {
                self.sinks
                    .notifier
                    .notify("Pomodoro", REMIND_MESSAGE, Urgency::Critical);
                self.sinks.announcer.announce(REMIND_MESSAGE);
            }
        }
        Ok(())
    }
}

//! Status-bar rendering.
//!
//! Turns an end-time, the current time and the completed count into the
//! one-line string the multiplexer status bar polls for.
//!
//! ## Phases
//!
//! ```text
//! now <= end                  -> work     "3|▼ 12 work "
//! end < now <= end + break    -> break    "3|▼ 2 break"
//! now > end + break           -> overdue  "3|▲ 4 !!!"
//! ```
//!
//! The phase is picked from the exact duration; the displayed minutes are
//! rounded to the nearest whole minute, halves to even.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Work,
    Break,
    Overdue,
}

/// Where the tracked interval stands at a given instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusSnapshot {
    pub phase: Phase,
    /// Minutes left (work, break) or minutes past the break (overdue).
    pub minutes: i64,
    pub completed: u32,
    pub end_time: DateTime<Utc>,
}

impl StatusSnapshot {
    pub fn at(end: DateTime<Utc>, now: DateTime<Utc>, completed: u32, break_time: Duration) -> Self {
        let remaining = end - now;
        let (phase, minutes) = if remaining >= Duration::zero() {
            (Phase::Work, round_minutes(remaining))
        } else {
            let excess = now - end;
            if excess <= break_time {
                (Phase::Break, round_minutes(break_time - excess))
            } else {
                (Phase::Overdue, round_minutes(excess - break_time))
            }
        };
        Self {
            phase,
            minutes,
            completed,
            end_time: end,
        }
    }
}

impl fmt::Display for StatusSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.phase {
            Phase::Work => write!(f, "{}|▼ {} work ", self.completed, self.minutes),
            Phase::Break => write!(f, "{}|▼ {} break", self.completed, self.minutes),
            Phase::Overdue => write!(f, "{}|▲ {} !!!", self.completed, self.minutes),
        }
    }
}

/// Render the status line. Empty when no interval is tracked.
pub fn format_status(
    end: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    completed: u32,
    break_time: Duration,
) -> String {
    end.map(|end| StatusSnapshot::at(end, now, completed, break_time).to_string())
        .unwrap_or_default()
}

fn round_minutes(d: Duration) -> i64 {
    (d.num_milliseconds() as f64 / 60_000.0).round_ties_even() as i64
}

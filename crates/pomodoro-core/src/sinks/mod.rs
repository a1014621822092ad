//! Side-effect collaborators.
//!
//! Everything the timer does to the outside world goes through one of
//! these traits: desktop notifications, spoken announcements, the
//! terminal multiplexer and the watcher process. Only watcher spawning
//! can fail loudly; every other sink swallows its own errors.

mod desktop;
mod process;
mod tmux;

#[cfg(test)]
pub(crate) mod testing;

pub use desktop::{DesktopNotifier, SpeechAnnouncer};
pub use process::ProcessWatchers;
pub use tmux::Tmux;

pub const APP_NAME: &str = "tmux-pomodoro";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Normal,
    Critical,
}

pub trait Notifier {
    fn notify(&self, title: &str, body: &str, urgency: Urgency);
}

pub trait Announcer {
    fn announce(&self, text: &str);
}

pub trait Multiplexer {
    fn refresh(&self);
    fn display_message(&self, text: &str);
}

/// Out-of-process watcher lifecycle.
pub trait WatcherControl {
    /// Launch a detached watcher and return its pid.
    fn spawn(&self) -> std::io::Result<u32>;
    /// Unconditionally kill the watcher with this pid.
    fn terminate(&self, pid: u32) -> std::io::Result<()>;
}

/// The full set of collaborators, built once per invocation.
pub struct Sinks {
    pub notifier: Box<dyn Notifier>,
    pub announcer: Box<dyn Announcer>,
    pub multiplexer: Box<dyn Multiplexer>,
    pub watchers: Box<dyn WatcherControl>,
}

impl Sinks {
    /// Sinks backed by the desktop, the speech command, tmux and real processes.
    pub fn system() -> Self {
        Self {
            notifier: Box::new(DesktopNotifier),
            announcer: Box::new(SpeechAnnouncer::default()),
            multiplexer: Box::new(Tmux),
            watchers: Box::new(ProcessWatchers),
        }
    }
}

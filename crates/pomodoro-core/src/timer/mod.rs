mod dispatch;
mod status;
mod watcher;

pub use dispatch::{plan, Command, Dispatcher, Plan, Reply, TimerState};
pub use status::{format_status, Phase, StatusSnapshot};
pub use watcher::{Alarm, Watcher, WatcherMachine, WatcherState, DONE_MESSAGE, REMIND_MESSAGE};

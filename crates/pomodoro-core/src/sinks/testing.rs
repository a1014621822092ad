//! In-memory sinks that record every call.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use super::{Announcer, Multiplexer, Notifier, Sinks, Urgency, WatcherControl};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Notify(String),
    Announce(String),
    Refresh,
    Display(String),
    Spawn(u32),
    Terminate(u32),
}

#[derive(Clone, Default)]
pub struct Recorder {
    calls: Rc<RefCell<Vec<Call>>>,
    next_pid: Rc<RefCell<u32>>,
}

impl Recorder {
    pub fn new(first_pid: u32) -> Self {
        Self {
            calls: Rc::default(),
            next_pid: Rc::new(RefCell::new(first_pid)),
        }
    }

    pub fn sinks(&self) -> Sinks {
        Sinks {
            notifier: Box::new(self.clone()),
            announcer: Box::new(self.clone()),
            multiplexer: Box::new(self.clone()),
            watchers: Box::new(self.clone()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn terminations(&self) -> Vec<u32> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Terminate(pid) => Some(pid),
                _ => None,
            })
            .collect()
    }

    fn push(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl Notifier for Recorder {
    fn notify(&self, _title: &str, body: &str, _urgency: Urgency) {
        self.push(Call::Notify(body.to_string()));
    }
}

impl Announcer for Recorder {
    fn announce(&self, text: &str) {
        self.push(Call::Announce(text.to_string()));
    }
}

impl Multiplexer for Recorder {
    fn refresh(&self) {
        self.push(Call::Refresh);
    }

    fn display_message(&self, text: &str) {
        self.push(Call::Display(text.to_string()));
    }
}

impl WatcherControl for Recorder {
    fn spawn(&self) -> io::Result<u32> {
        let mut next = self.next_pid.borrow_mut();
        let pid = *next;
        *next += 1;
        self.push(Call::Spawn(pid));
        Ok(pid)
    }

    fn terminate(&self, pid: u32) -> io::Result<()> {
        self.push(Call::Terminate(pid));
        Ok(())
    }
}

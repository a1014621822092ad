use std::io;
use std::os::unix::process::CommandExt;
use std::process::{Command, Stdio};

use nix::sys::signal::{kill, Signal};
use nix::unistd::Pid;

use super::WatcherControl;

/// Argument that turns this executable into the watcher.
pub const WATCHER_ARG: &str = "beep";

/// Watchers as real child processes of this executable.
pub struct ProcessWatchers;

impl WatcherControl for ProcessWatchers {
    fn spawn(&self) -> io::Result<u32> {
        let exe = std::env::current_exe()?;
        // Own process group so the watcher outlives the invoking shell.
        let child = Command::new(exe)
            .arg(WATCHER_ARG)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .process_group(0)
            .spawn()?;
        Ok(child.id())
    }

    fn terminate(&self, pid: u32) -> io::Result<()> {
        let raw = i32::try_from(pid)
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "pid out of range"))?;
        kill(Pid::from_raw(raw), Signal::SIGKILL)?;
        Ok(())
    }
}

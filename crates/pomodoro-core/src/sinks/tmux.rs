use std::process::{Command, Stdio};

use super::Multiplexer;

/// Talks to the tmux server of the current session.
pub struct Tmux;

impl Tmux {
    fn run(args: &[&str]) {
        let result = Command::new("tmux")
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
        match result {
            Ok(status) if !status.success() => {
                tracing::debug!(?args, %status, "tmux command failed");
            }
            Ok(_) => {}
            Err(e) => tracing::debug!(?args, error = %e, "tmux not available"),
        }
    }
}

impl Multiplexer for Tmux {
    fn refresh(&self) {
        Self::run(&["refresh-client", "-S"]);
    }

    fn display_message(&self, text: &str) {
        Self::run(&["display-message", text]);
    }
}

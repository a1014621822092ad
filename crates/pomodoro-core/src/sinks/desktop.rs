use std::process::{Command, Stdio};

use notify_rust::Notification;

use super::{Announcer, Notifier, Urgency, APP_NAME};

/// Desktop notifications through the platform notification service.
pub struct DesktopNotifier;

#[cfg(all(unix, not(target_os = "macos")))]
impl From<Urgency> for notify_rust::Urgency {
    fn from(urgency: Urgency) -> Self {
        match urgency {
            Urgency::Normal => notify_rust::Urgency::Normal,
            Urgency::Critical => notify_rust::Urgency::Critical,
        }
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, title: &str, body: &str, urgency: Urgency) {
        let mut notification = Notification::new();
        notification.summary(title).body(body).appname(APP_NAME);
        #[cfg(all(unix, not(target_os = "macos")))]
        notification.urgency(urgency.into());
        #[cfg(not(all(unix, not(target_os = "macos"))))]
        let _ = urgency;

        if let Err(e) = notification.show() {
            tracing::warn!(error = %e, "desktop notification failed");
        }
    }
}

/// Speaks text aloud with the platform speech command.
pub struct SpeechAnnouncer {
    program: &'static str,
}

impl Default for SpeechAnnouncer {
    fn default() -> Self {
        let program = if cfg!(target_os = "macos") { "say" } else { "spd-say" };
        Self { program }
    }
}

impl Announcer for SpeechAnnouncer {
    fn announce(&self, text: &str) {
        let result = Command::new(self.program)
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
        if let Err(e) = result {
            tracing::debug!(error = %e, program = self.program, "announcement skipped");
        }
    }
}

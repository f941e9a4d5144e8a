//! Desktop notification side channel.
//!
//! Delivery is best effort: a missing `notify-send` or a failing
//! notification daemon never affects the run.

use std::process::{Command, Stdio};

/// Title shown on every desktop notification
pub const NOTIFICATION_TITLE: &str = "Reward Video";

/// Best-effort message delivery.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Sends notifications through `notify-send`.
#[derive(Debug, Clone)]
pub struct DesktopNotifier {
    program: String,
}

impl DesktopNotifier {
    pub fn new() -> Self {
        Self::with_program("notify-send")
    }

    pub fn with_program(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }
}

impl Default for DesktopNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, message: &str) {
        let result = Command::new(&self.program)
            .args([NOTIFICATION_TITLE, message])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
        if let Err(e) = result {
            log::debug!("Notification via {} unavailable: {}", self.program, e);
        }
    }
}

/// Drops every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&self, _message: &str) {}
}

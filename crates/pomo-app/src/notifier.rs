//! Desktop notifications via an external command
//!
//! Notifications are fire-and-forget: the command runs on a detached tokio
//! task, and failures are logged but never reach the UI or the event loop.

use std::process::Stdio;

use tokio::process::Command;
use tokio::task::JoinHandle;

use pomo_core::prelude::*;

use crate::config::NotifySettings;

/// Runs the configured notification command with a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notifier {
    enabled: bool,
    command: String,
    args: Vec<String>,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::from_settings(&NotifySettings::default())
    }
}

impl Notifier {
    pub fn from_settings(settings: &NotifySettings) -> Self {
        Self {
            enabled: settings.enabled && !settings.command.trim().is_empty(),
            command: settings.command.clone(),
            args: settings.args.clone(),
        }
    }

    /// A notifier that never runs anything
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            command: String::new(),
            args: Vec::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Program and arguments that would be run for `message`
    pub fn command_line(&self, message: &str) -> Vec<String> {
        let mut line = Vec::with_capacity(self.args.len() + 2);
        line.push(self.command.clone());
        line.extend(self.args.iter().cloned());
        line.push(message.to_string());
        line
    }

    /// Send a notification on a detached task.
    ///
    /// Must be called from within a tokio runtime. Returns `None` when
    /// notifications are disabled.
    pub fn notify(&self, message: &str) -> Option<JoinHandle<()>> {
        if !self.enabled {
            trace!("Notifications disabled, dropping: {}", message);
            return None;
        }

        let command = self.command.clone();
        let args = self.args.clone();
        let message = message.to_string();

        Some(tokio::spawn(async move {
            if let Err(e) = run_notify_command(&command, &args, &message).await {
                warn!("Notification failed: {}", e);
            }
        }))
    }
}

/// Run the notification command to completion
async fn run_notify_command(command: &str, args: &[String], message: &str) -> Result<()> {
    debug!("Notify: {} {:?} {:?}", command, args, message);

    let status = Command::new(command)
        .args(args)
        .arg(message)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .map_err(|e| Error::notify(format!("failed to run '{}': {}", command, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(Error::notify(format!("'{}' exited with {}", command, status)))
    }
}

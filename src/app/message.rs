// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::dashboard;
use crate::ui::notifications;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Dashboard(dashboard::Message),
    Notification(notifications::NotificationMessage),
}

/// Application messages carried by toast action buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Undo the last "save job".
    UndoSave,
    /// Mark the profile as complete.
    CompleteProfile,
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `NGURRA_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}

// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle events.

use crate::ui::notifications::Variant;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Why a notification left the active set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DismissReason {
    /// `hide(id)` called by application code.
    Explicit,
    /// The toast's dismiss button was pressed.
    User,
    /// The auto-hide deadline passed.
    Timer,
    /// Escape key, most recent toast only.
    Escape,
    /// The toast's action button was pressed.
    Action,
}

impl DismissReason {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DismissReason::Explicit => "explicit",
            DismissReason::User => "user",
            DismissReason::Timer => "timer",
            DismissReason::Escape => "escape",
            DismissReason::Action => "action",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    NotificationShown { id: String, variant: Variant },
    /// `show` was called with an id that is already active.
    DuplicateSuppressed { id: String },
    /// Dropped from the front of the stack to respect the visible cap.
    NotificationEvicted { id: String },
    NotificationDismissed { id: String, reason: DismissReason },
    /// A non-fatal problem surfaced to the user, identified by its i18n key.
    Warning { key: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticEvent {
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
        }
    }

    /// Returns the notification id this event refers to, if any.
    #[must_use]
    pub fn notification_id(&self) -> Option<&str> {
        match &self.kind {
            DiagnosticEventKind::NotificationShown { id, .. }
            | DiagnosticEventKind::DuplicateSuppressed { id }
            | DiagnosticEventKind::NotificationEvicted { id }
            | DiagnosticEventKind::NotificationDismissed { id, .. } => Some(id),
            DiagnosticEventKind::Warning { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_flat_type_tag() {
        let event = DiagnosticEvent::new(DiagnosticEventKind::NotificationDismissed {
            id: "notif_abc".to_string(),
            reason: DismissReason::Escape,
        });
        let json = serde_json::to_value(&event).expect("serializable");

        assert_eq!(json["type"], "notification_dismissed");
        assert_eq!(json["id"], "notif_abc");
        assert_eq!(json["reason"], "escape");
        assert!(json["timestamp"].is_string());
    }

    #[test]
    fn notification_id_is_none_for_warnings() {
        let warning = DiagnosticEvent::new(DiagnosticEventKind::Warning {
            key: "notification-config-load-error".to_string(),
        });
        let shown = DiagnosticEvent::new(DiagnosticEventKind::NotificationShown {
            id: "x".to_string(),
            variant: Variant::Info,
        });

        assert_eq!(warning.notification_id(), None);
        assert_eq!(shown.notification_id(), Some("x"));
    }
}

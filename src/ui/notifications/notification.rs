// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! [`NotificationOptions`] is what callers hand to `show`; the store turns
//! it into a [`Notification`] with a resolved id and timer.

use crate::ui::design_tokens::palette;
use iced::Color;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, Instant};

/// Prefix of every generated notification id.
pub const ID_PREFIX: &str = "notif_";

/// Identifier of a notification, unique within the active set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NotificationId(String);

impl NotificationId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Generates a random id of the form `notif_<base-36 suffix>`.
    #[must_use]
    pub fn generate() -> Self {
        let suffix: u64 = rand::rng().random();
        Self(format!("{ID_PREFIX}{}", to_base36(suffix)))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NotificationId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for NotificationId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}

/// Visual flavour of a toast. Purely presentational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Info,
    Success,
    Error,
    Warning,
}

impl Variant {
    /// Accent color for the toast border.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Variant::Info => palette::INFO_500,
            Variant::Success => palette::SUCCESS_500,
            Variant::Error => palette::ERROR_500,
            Variant::Warning => palette::WARNING_500,
        }
    }

    /// Glyph shown at the start of the toast.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Variant::Info => "ℹ",
            Variant::Success => "✓",
            Variant::Error => "✖",
            Variant::Warning => "⚠",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Info => "info",
            Variant::Success => "success",
            Variant::Error => "error",
            Variant::Warning => "warning",
        }
    }
}

/// How long a toast stays up before hiding itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoHide {
    /// Use the store's configured default (3 s unless configured).
    #[default]
    Default,
    After(Duration),
    /// Stay until dismissed explicitly.
    Never,
}

/// Inline call-to-action. `on_press` is the application's own message,
/// handed back by the provider when the button is pressed.
#[derive(Debug, Clone, PartialEq)]
pub struct Action<A> {
    pub label: String,
    pub on_press: A,
}

/// Descriptor passed to `show`. Only the message is required.
#[derive(Debug, Clone)]
pub struct NotificationOptions<A> {
    pub(super) id: Option<NotificationId>,
    pub(super) message: String,
    pub(super) variant: Variant,
    pub(super) auto_hide: AutoHide,
    pub(super) action: Option<Action<A>>,
    pub(super) test_id: Option<String>,
}

impl<A> NotificationOptions<A> {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            id: None,
            message: message.into(),
            variant: Variant::default(),
            auto_hide: AutoHide::default(),
            action: None,
            test_id: None,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message).variant(Variant::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message).variant(Variant::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message).variant(Variant::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message).variant(Variant::Error)
    }

    /// Supplies the id. Showing an id that is already active is a no-op.
    #[must_use]
    pub fn id(mut self, id: impl Into<NotificationId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn auto_hide(mut self, duration: Duration) -> Self {
        self.auto_hide = AutoHide::After(duration);
        self
    }

    #[must_use]
    pub fn sticky(mut self) -> Self {
        self.auto_hide = AutoHide::Never;
        self
    }

    #[must_use]
    pub fn action(mut self, label: impl Into<String>, on_press: A) -> Self {
        self.action = Some(Action {
            label: label.into(),
            on_press,
        });
        self
    }

    #[must_use]
    pub fn test_id(mut self, test_id: impl Into<String>) -> Self {
        self.test_id = Some(test_id.into());
        self
    }

    #[must_use]
    pub fn requested_id(&self) -> Option<&NotificationId> {
        self.id.as_ref()
    }
}

/// An active toast. Never edited after creation.
#[derive(Debug, Clone)]
pub struct Notification<A> {
    id: NotificationId,
    message: String,
    variant: Variant,
    auto_hide: Option<Duration>,
    action: Option<Action<A>>,
    test_id: Option<String>,
    created_at: Instant,
}

impl<A> Notification<A> {
    /// Resolves `options` into an entry. `options.id` is ignored in favour of `id`.
    pub(super) fn from_options(
        id: NotificationId,
        options: NotificationOptions<A>,
        default_auto_hide: Duration,
        created_at: Instant,
    ) -> Self {
        let auto_hide = match options.auto_hide {
            AutoHide::Default => Some(default_auto_hide),
            AutoHide::After(duration) => Some(duration),
            AutoHide::Never => None,
        };
        Self {
            id,
            message: options.message,
            variant: options.variant,
            auto_hide,
            action: options.action,
            test_id: options.test_id,
            created_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> &NotificationId {
        &self.id
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// `None` for sticky toasts.
    #[must_use]
    pub fn auto_hide(&self) -> Option<Duration> {
        self.auto_hide
    }

    #[must_use]
    pub fn action(&self) -> Option<&Action<A>> {
        self.action.as_ref()
    }

    pub fn into_action(self) -> Option<Action<A>> {
        self.action
    }

    #[must_use]
    pub fn test_id(&self) -> Option<&str> {
        self.test_id.as_deref()
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// When the auto-hide timer fires, if it has one.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.auto_hide.map(|duration| self.created_at + duration)
    }

    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.deadline().is_some_and(|deadline| deadline <= now)
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Notification provider owned by the application root.
//!
//! The provider wraps the store with everything the UI tree needs: the
//! public `show`/`hide` entry points, message handling for the toast stack,
//! the Escape listener and the auto-hide tick. The root owns it by value,
//! so there is no way to reach `show` without a provider in scope.

use super::keyboard;
use super::manager::Manager;
use super::notification::{NotificationId, NotificationOptions};
use super::toast;
use crate::config::{NotificationsConfig, ToastPosition, AUTO_HIDE_TICK_MS, DEFAULT_AUTO_HIDE_MS};
use crate::diagnostics::{DiagnosticsHandle, DismissReason};
use crate::i18n::fluent::I18n;
use iced::{time, Element, Subscription};
use std::time::{Duration, Instant};

/// Messages produced by the toast stack and the provider's subscriptions.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss button pressed on a toast.
    Dismiss(NotificationId),
    /// Action button pressed on a toast.
    ActionPressed(NotificationId),
    /// Escape pressed: dismiss the most recent toast.
    DismissLast,
    /// Periodic check of auto-hide deadlines.
    Tick(Instant),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub default_auto_hide: Duration,
    pub position: ToastPosition,
    pub escape_dismisses: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_auto_hide: Duration::from_millis(DEFAULT_AUTO_HIDE_MS),
            position: ToastPosition::default(),
            escape_dismisses: true,
        }
    }
}

impl From<&NotificationsConfig> for Settings {
    fn from(config: &NotificationsConfig) -> Self {
        Self {
            default_auto_hide: config.auto_hide(),
            position: config.position.unwrap_or_default(),
            escape_dismisses: config.escape_dismisses.unwrap_or(true),
        }
    }
}

#[derive(Debug)]
pub struct Provider<A> {
    manager: Manager<A>,
    settings: Settings,
}

impl<A> Default for Provider<A> {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl<A> Provider<A> {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            manager: Manager::with_default_auto_hide(settings.default_auto_hide),
            settings,
        }
    }

    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.manager.set_diagnostics(handle);
    }

    /// Shows a toast. See [`Manager::show`].
    pub fn show(&mut self, options: NotificationOptions<A>) -> NotificationId {
        self.manager.show(options)
    }

    /// Hides a toast. Unknown ids are ignored.
    pub fn hide(&mut self, id: &NotificationId) -> bool {
        self.manager.hide(id)
    }

    /// Applies a toast-stack message.
    ///
    /// Returns the action payload when an action button was pressed; the
    /// toast is hidden in that case too.
    pub fn update(&mut self, message: Message) -> Option<A> {
        match message {
            Message::Dismiss(id) => {
                self.manager.dismiss(&id, DismissReason::User);
                None
            }
            Message::ActionPressed(id) => self
                .manager
                .dismiss(&id, DismissReason::Action)
                .and_then(super::Notification::into_action)
                .map(|action| action.on_press),
            Message::DismissLast => {
                self.manager.dismiss_last();
                None
            }
            Message::Tick(now) => {
                self.manager.tick_at(now);
                None
            }
        }
    }

    /// Read-only access to the store.
    #[must_use]
    pub fn manager(&self) -> &Manager<A> {
        &self.manager
    }

    #[must_use]
    pub fn settings(&self) -> Settings {
        self.settings
    }

    /// Escape listener (when enabled) plus the auto-hide tick while any
    /// toast has a pending timer.
    pub fn subscription(&self) -> Subscription<Message> {
        let escape = if self.settings.escape_dismisses {
            keyboard::escape_listener()
        } else {
            Subscription::none()
        };

        let tick = if self.manager.has_pending_timers() {
            time::every(Duration::from_millis(AUTO_HIDE_TICK_MS)).map(Message::Tick)
        } else {
            Subscription::none()
        };

        Subscription::batch([escape, tick])
    }

    /// Renders the toast stack overlay.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        toast::view_overlay(&self.manager, self.settings.position, i18n)
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! A small in-memory store of short-lived messages with a provider that
//! renders them as a stack in a corner of the window.
//!
//! - [`notification`] - `Notification`, `NotificationOptions`, `Variant`
//! - [`manager`] - the store: dedup by id, three visible at most, timers
//! - [`provider`] - `show`/`hide` entry points, messages and subscriptions
//! - [`toast`] - toast and overlay rendering
//!
//! # Usage
//!
//! ```ignore
//! use ngurra_toasts::ui::notifications::{NotificationOptions, Provider};
//!
//! let mut toasts: Provider<MyAction> = Provider::default();
//! toasts.show(NotificationOptions::success("Job saved").action("Undo", MyAction::Undo));
//!
//! // update:  if let Some(action) = toasts.update(msg) { ... }
//! // view:    stack![content, toasts.view(&i18n).map(Message::Toast)]
//! // subscription: toasts.subscription().map(Message::Toast)
//! ```

mod keyboard;
pub mod manager;
pub mod notification;
pub mod provider;
pub mod toast;

pub use manager::{Manager, MAX_VISIBLE};
pub use notification::{
    Action, AutoHide, Notification, NotificationId, NotificationOptions, Variant,
};
pub use provider::{Message as NotificationMessage, Provider, Settings};

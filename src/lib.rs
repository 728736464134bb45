// SPDX-License-Identifier: MPL-2.0
//! `ngurra_toasts` coordinates toast notifications for the Ngurra Pathways
//! desktop client.
//!
//! The core is [`ui::notifications`]: a bounded FIFO store of short-lived
//! messages, a provider owned by the application root, a toast stack
//! renderer and a window-level Escape listener. Around it sit Fluent
//! localization, TOML preferences and an in-memory diagnostics log.

#![doc(html_root_url = "https://docs.rs/ngurra_toasts/0.1.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod i18n;
pub mod ui;

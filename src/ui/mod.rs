// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Elm-style "state down, messages up": each screen exposes a `view`
//! taking a `ViewContext` and emits its own `Message` type.
//!
//! - [`notifications`] - Toast store, provider and rendering
//! - [`dashboard`] - Community dashboard with recent activity
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod dashboard;
pub mod design_tokens;
pub mod notifications;
pub mod theming;

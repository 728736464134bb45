// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The dashboard fills the window; the toast stack is layered above it.

use super::{AppAction, Message};
use crate::config::ACTIVITY_PANEL_ROWS;
use crate::diagnostics::DiagnosticsCollector;
use crate::i18n::fluent::I18n;
use crate::ui::dashboard;
use crate::ui::notifications::Provider;
use iced::widget::{stack, Container};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub notifications: &'a Provider<AppAction>,
    pub diagnostics: &'a DiagnosticsCollector,
    pub saved_jobs: usize,
    pub profile_complete: bool,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = dashboard::view(dashboard::ViewContext {
        i18n: ctx.i18n,
        saved_jobs: ctx.saved_jobs,
        profile_complete: ctx.profile_complete,
        activity: ctx.diagnostics.recent(ACTIVITY_PANEL_ROWS).collect(),
    })
    .map(Message::Dashboard);

    let base = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill);

    let toasts = ctx.notifications.view(ctx.i18n).map(Message::Notification);

    stack![base, toasts].into()
}

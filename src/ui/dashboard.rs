// SPDX-License-Identifier: MPL-2.0
//! Community dashboard screen.
//!
//! A handful of platform actions (save a job, apply, RSVP, upload a
//! resume) that each raise a toast, plus a panel listing recent
//! notification activity from the diagnostics log.

use crate::diagnostics::{DiagnosticEvent, DiagnosticEventKind};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, palette, radius, sizing, spacing, typography};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, rule, scrollable, Column, Container, Row, Text},
    Border, Element, Length, Theme,
};

/// Data needed to render the dashboard.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub saved_jobs: usize,
    pub profile_complete: bool,
    /// Newest first.
    pub activity: Vec<&'a DiagnosticEvent>,
}

/// Messages emitted by the dashboard buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    SaveJob,
    ApplyForRole,
    RsvpEvent,
    UploadResume,
    CheckProfile,
}

#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(ctx.i18n.tr("dashboard-title")).size(typography::TITLE_MD))
        .push(Text::new(ctx.i18n.tr("dashboard-subtitle")).size(typography::BODY));

    let actions = Row::new()
        .spacing(spacing::XS)
        .push(action_button(ctx.i18n, "dashboard-save-job", Message::SaveJob))
        .push(action_button(ctx.i18n, "dashboard-apply", Message::ApplyForRole))
        .push(action_button(ctx.i18n, "dashboard-rsvp", Message::RsvpEvent))
        .push(action_button(ctx.i18n, "dashboard-upload", Message::UploadResume))
        .push(action_button(
            ctx.i18n,
            "dashboard-profile-reminder",
            Message::CheckProfile,
        ));

    let saved = ctx.saved_jobs.to_string();
    let profile_key = if ctx.profile_complete {
        "dashboard-profile-complete"
    } else {
        "dashboard-profile-incomplete"
    };
    let status = Row::new()
        .spacing(spacing::LG)
        .align_y(Vertical::Center)
        .push(
            Text::new(
                ctx.i18n
                    .tr_with_args("dashboard-saved-count", &[("count", saved.as_str())]),
            )
            .size(typography::BODY),
        )
        .push(Text::new(ctx.i18n.tr(profile_key)).size(typography::BODY));

    let hint = Text::new(ctx.i18n.tr("dashboard-escape-hint"))
        .size(typography::CAPTION)
        .color(palette::GRAY_400);

    let content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::LG)
        .align_x(Horizontal::Left)
        .padding(spacing::LG)
        .push(header)
        .push(actions)
        .push(status)
        .push(hint)
        .push(rule::horizontal(1))
        .push(activity_panel(&ctx));

    scrollable(content).into()
}

fn action_button<'a>(i18n: &I18n, key: &str, message: Message) -> Element<'a, Message> {
    button(Text::new(i18n.tr(key)).size(typography::BODY))
        .on_press(message)
        .padding([spacing::XS, spacing::SM])
        .into()
}

fn activity_panel<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut rows = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(ctx.i18n.tr("activity-title")).size(typography::TITLE_SM));

    if ctx.activity.is_empty() {
        rows = rows.push(
            Text::new(ctx.i18n.tr("activity-empty"))
                .size(typography::BODY)
                .color(palette::GRAY_400),
        );
    }

    for event in &ctx.activity {
        let time = event
            .timestamp
            .with_timezone(&chrono::Local)
            .format("%H:%M:%S")
            .to_string();
        rows = rows.push(
            Row::new()
                .spacing(spacing::SM)
                .align_y(Vertical::Center)
                .push(
                    Text::new(time)
                        .size(typography::CAPTION)
                        .color(palette::GRAY_400),
                )
                .push(Text::new(describe(event, ctx.i18n)).size(typography::BODY)),
        );
    }

    Container::new(rows)
        .width(Length::Fixed(sizing::ACTIVITY_PANEL_WIDTH))
        .padding(spacing::MD)
        .style(|theme: &Theme| container::Style {
            border: Border {
                color: theme.extended_palette().background.strong.color,
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            ..Default::default()
        })
        .into()
}

/// One-line, localized summary of a diagnostic event.
#[must_use]
pub fn describe(event: &DiagnosticEvent, i18n: &I18n) -> String {
    match &event.kind {
        DiagnosticEventKind::NotificationShown { id, variant } => i18n.tr_with_args(
            "activity-shown",
            &[("id", id.as_str()), ("variant", variant.as_str())],
        ),
        DiagnosticEventKind::DuplicateSuppressed { id } => {
            i18n.tr_with_args("activity-duplicate", &[("id", id.as_str())])
        }
        DiagnosticEventKind::NotificationEvicted { id } => {
            i18n.tr_with_args("activity-evicted", &[("id", id.as_str())])
        }
        DiagnosticEventKind::NotificationDismissed { id, reason } => i18n.tr_with_args(
            "activity-dismissed",
            &[("id", id.as_str()), ("reason", reason.as_str())],
        ),
        DiagnosticEventKind::Warning { key } => {
            i18n.tr_with_args("activity-warning", &[("key", key.as_str())])
        }
    }
}

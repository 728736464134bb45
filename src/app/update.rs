// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the dashboard and the toast stack.

use super::{AppAction, Message};
use crate::i18n::fluent::I18n;
use crate::ui::dashboard;
use crate::ui::notifications::{NotificationMessage, NotificationOptions, Provider};
use iced::Task;
use std::time::Duration;

/// Fixed ids for toasts that should never stack up on repeated clicks.
pub const JOB_SAVED_ID: &str = "job-saved";
pub const RSVP_ID: &str = "rsvp-confirmed";
pub const PROFILE_REMINDER_ID: &str = "profile-reminder";
pub const UPLOAD_FAILED_ID: &str = "upload-failed";

/// The profile reminder stays up longer than the default.
const PROFILE_REMINDER_AUTO_HIDE: Duration = Duration::from_secs(8);

/// Mutable view of the app state touched by the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub notifications: &'a mut Provider<AppAction>,
    pub saved_jobs: &'a mut usize,
    pub profile_complete: &'a mut bool,
}

pub fn handle_dashboard_message(
    ctx: &mut UpdateContext<'_>,
    message: dashboard::Message,
) -> Task<Message> {
    let i18n = ctx.i18n;
    match message {
        dashboard::Message::SaveJob => {
            *ctx.saved_jobs += 1;
            ctx.notifications.show(
                NotificationOptions::success(i18n.tr("notification-job-saved"))
                    .id(JOB_SAVED_ID)
                    .action(i18n.tr("notification-action-undo"), AppAction::UndoSave)
                    .test_id("toast-job-saved"),
            );
        }
        dashboard::Message::ApplyForRole => {
            ctx.notifications.show(NotificationOptions::success(
                i18n.tr("notification-application-sent"),
            ));
        }
        dashboard::Message::RsvpEvent => {
            ctx.notifications.show(
                NotificationOptions::info(i18n.tr("notification-rsvp-confirmed")).id(RSVP_ID),
            );
        }
        dashboard::Message::UploadResume => {
            // Errors stay until the user acknowledges them.
            ctx.notifications.show(
                NotificationOptions::error(i18n.tr("notification-upload-failed"))
                    .id(UPLOAD_FAILED_ID)
                    .sticky(),
            );
        }
        dashboard::Message::CheckProfile => {
            if *ctx.profile_complete {
                ctx.notifications.show(NotificationOptions::info(
                    i18n.tr("notification-profile-completed"),
                ));
            } else {
                ctx.notifications.show(
                    NotificationOptions::warning(i18n.tr("notification-profile-reminder"))
                        .id(PROFILE_REMINDER_ID)
                        .auto_hide(PROFILE_REMINDER_AUTO_HIDE)
                        .action(
                            i18n.tr("notification-action-complete-profile"),
                            AppAction::CompleteProfile,
                        ),
                );
            }
        }
    }
    Task::none()
}

pub fn handle_notification_message(
    ctx: &mut UpdateContext<'_>,
    message: NotificationMessage,
) -> Task<Message> {
    if let Some(action) = ctx.notifications.update(message) {
        apply_action(ctx, action);
    }
    Task::none()
}

fn apply_action(ctx: &mut UpdateContext<'_>, action: AppAction) {
    let i18n = ctx.i18n;
    match action {
        AppAction::UndoSave => {
            *ctx.saved_jobs = ctx.saved_jobs.saturating_sub(1);
            ctx.notifications.show(NotificationOptions::info(
                i18n.tr("notification-job-unsaved"),
            ));
        }
        AppAction::CompleteProfile => {
            *ctx.profile_complete = true;
            ctx.notifications.show(NotificationOptions::success(
                i18n.tr("notification-profile-completed"),
            ));
        }
    }
}

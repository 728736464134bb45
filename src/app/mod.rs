// SPDX-License-Identifier: MPL-2.0
//! Application root.
//!
//! `App` owns the notification provider, the diagnostics collector and the
//! dashboard state. Every toast in the shell goes through the provider
//! owned here; the provider's subscriptions (Escape listener, auto-hide
//! tick) live exactly as long as the application does.

mod message;
pub mod paths;
mod update;
mod view;

pub use message::{AppAction, Flags, Message};

use crate::config;
use crate::diagnostics::DiagnosticsCollector;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{NotificationOptions, Provider, Settings};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Id of the greeting toast shown at startup.
pub const WELCOME_ID: &str = "welcome";

pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    notifications: Provider<AppAction>,
    diagnostics: DiagnosticsCollector,
    saved_jobs: usize,
    profile_complete: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("visible_toasts", &self.notifications.manager().len())
            .field("saved_jobs", &self.saved_jobs)
            .field("profile_complete", &self.profile_complete)
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::with_settings(I18n::default(), ThemeMode::System, Settings::default())
    }
}

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants a `Fn` boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn with_settings(i18n: I18n, theme_mode: ThemeMode, settings: Settings) -> Self {
        let diagnostics = DiagnosticsCollector::default();
        let mut notifications = Provider::new(settings);
        notifications.set_diagnostics(diagnostics.handle());

        Self {
            i18n,
            theme_mode,
            notifications,
            diagnostics,
            saved_jobs: 0,
            profile_complete: false,
        }
    }

    /// Loads config, picks the locale and greets the user.
    ///
    /// A config that fails to load is replaced by defaults and reported as
    /// a warning toast.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) =
            config::load_with_override(flags.config_dir.map(PathBuf::from));
        let i18n = I18n::new(flags.lang, &config);

        let mut app = Self::with_settings(
            i18n,
            config.general.theme_mode,
            Settings::from(&config.notifications),
        );

        if let Some(key) = config_warning {
            app.diagnostics.handle().log_warning(key.as_str());
            let text = app.i18n.tr(&key);
            app.notifications.show(NotificationOptions::warning(text));
        }

        let welcome = app.i18n.tr("notification-welcome");
        app.notifications
            .show(NotificationOptions::info(welcome).id(WELCOME_ID));
        app.diagnostics.process_pending();

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        self.notifications.subscription().map(Message::Notification)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            notifications: &mut self.notifications,
            saved_jobs: &mut self.saved_jobs,
            profile_complete: &mut self.profile_complete,
        };

        let task = match message {
            Message::Dashboard(msg) => update::handle_dashboard_message(&mut ctx, msg),
            Message::Notification(msg) => update::handle_notification_message(&mut ctx, msg),
        };

        self.diagnostics.process_pending();
        task
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            notifications: &self.notifications,
            diagnostics: &self.diagnostics,
            saved_jobs: self.saved_jobs,
            profile_complete: self.profile_complete,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{DiagnosticEventKind, DismissReason};
    use crate::ui::dashboard;
    use crate::ui::notifications::{NotificationId, NotificationMessage, Variant};
    use std::fs;
    use std::time::{Duration, Instant};
    use tempfile::tempdir;

    fn visible_ids(app: &App) -> Vec<String> {
        app.notifications
            .manager()
            .visible()
            .map(|n| n.id().to_string())
            .collect()
    }

    fn press(app: &mut App, message: dashboard::Message) {
        let _ = app.update(Message::Dashboard(message));
    }

    fn toast(app: &mut App, message: NotificationMessage) {
        let _ = app.update(Message::Notification(message));
    }

    #[test]
    fn new_greets_user_with_welcome_toast() {
        let dir = tempdir().expect("temp dir");
        let (app, _task) = App::new(Flags {
            lang: Some("en-US".into()),
            config_dir: Some(dir.path().to_string_lossy().into_owned()),
        });

        assert_eq!(visible_ids(&app), vec![WELCOME_ID]);
        assert!(!app.diagnostics.is_empty());
    }

    #[test]
    fn broken_config_shows_warning_toast_first() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join("settings.toml"), "not = [valid").expect("write config");

        let (app, _task) = App::new(Flags {
            lang: Some("en-US".into()),
            config_dir: Some(dir.path().to_string_lossy().into_owned()),
        });

        let variants: Vec<Variant> = app
            .notifications
            .manager()
            .visible()
            .map(|n| n.variant())
            .collect();
        assert_eq!(variants, vec![Variant::Warning, Variant::Info]);
        assert!(app.diagnostics.iter().any(|e| matches!(
            &e.kind,
            DiagnosticEventKind::Warning { key } if key == "notification-config-load-error"
        )));
    }

    #[test]
    fn config_settings_reach_the_provider() {
        let dir = tempdir().expect("temp dir");
        fs::write(
            dir.path().join("settings.toml"),
            "[notifications]\nauto_hide_ms = 1000\nescape_dismisses = false\n",
        )
        .expect("write config");

        let (app, _task) = App::new(Flags {
            lang: None,
            config_dir: Some(dir.path().to_string_lossy().into_owned()),
        });

        let settings = app.notifications.settings();
        assert_eq!(settings.default_auto_hide, Duration::from_millis(1000));
        assert!(!settings.escape_dismisses);
    }

    #[test]
    fn repeated_save_keeps_one_toast() {
        let mut app = App::default();
        press(&mut app, dashboard::Message::SaveJob);
        press(&mut app, dashboard::Message::SaveJob);

        assert_eq!(visible_ids(&app), vec![update::JOB_SAVED_ID]);
        assert_eq!(app.saved_jobs, 2);
    }

    #[test]
    fn undo_action_reverts_save() {
        let mut app = App::default();
        press(&mut app, dashboard::Message::SaveJob);

        toast(
            &mut app,
            NotificationMessage::ActionPressed(NotificationId::from(update::JOB_SAVED_ID)),
        );

        assert_eq!(app.saved_jobs, 0);
        assert!(!app
            .notifications
            .manager()
            .contains(&NotificationId::from(update::JOB_SAVED_ID)));
        let last = app
            .notifications
            .manager()
            .visible()
            .last()
            .map(|n| n.message().to_string());
        assert_eq!(last, Some(app.i18n.tr("notification-job-unsaved")));
    }

    #[test]
    fn profile_reminder_action_completes_profile() {
        let mut app = App::default();
        press(&mut app, dashboard::Message::CheckProfile);
        toast(
            &mut app,
            NotificationMessage::ActionPressed(NotificationId::from(update::PROFILE_REMINDER_ID)),
        );

        assert!(app.profile_complete);
    }

    #[test]
    fn burst_of_actions_caps_stack_at_three() {
        let mut app = App::default();
        press(&mut app, dashboard::Message::SaveJob);
        press(&mut app, dashboard::Message::ApplyForRole);
        press(&mut app, dashboard::Message::RsvpEvent);
        press(&mut app, dashboard::Message::UploadResume);

        let ids = visible_ids(&app);
        assert_eq!(ids.len(), 3);
        assert!(!ids.contains(&update::JOB_SAVED_ID.to_string()));
        assert_eq!(ids.last().map(String::as_str), Some(update::UPLOAD_FAILED_ID));
    }

    #[test]
    fn escape_then_tick_flow() {
        let mut app = App::default();
        press(&mut app, dashboard::Message::ApplyForRole);
        press(&mut app, dashboard::Message::UploadResume);

        toast(&mut app, NotificationMessage::DismissLast);
        assert_eq!(app.notifications.manager().len(), 1);

        toast(
            &mut app,
            NotificationMessage::Tick(Instant::now() + Duration::from_secs(60)),
        );
        assert!(app.notifications.manager().is_empty());

        assert!(app.diagnostics.iter().any(|e| matches!(
            &e.kind,
            DiagnosticEventKind::NotificationDismissed { reason: DismissReason::Escape, id }
                if id == update::UPLOAD_FAILED_ID
        )));
    }

    #[test]
    fn sticky_upload_error_survives_ticks() {
        let mut app = App::default();
        press(&mut app, dashboard::Message::UploadResume);

        toast(
            &mut app,
            NotificationMessage::Tick(Instant::now() + Duration::from_secs(3600)),
        );
        assert_eq!(visible_ids(&app), vec![update::UPLOAD_FAILED_ID]);
    }

    #[test]
    fn title_is_localized() {
        let app = App::default();
        assert_eq!(app.title(), app.i18n.tr("window-title"));
    }
}

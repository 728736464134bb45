// SPDX-License-Identifier: MPL-2.0
//! Notification store.
//!
//! The `Manager` keeps the ordered, capacity-bounded list of active
//! notifications (oldest first). It is the only place the list changes:
//! `show` appends and evicts from the front, `hide`/`dismiss` remove by id,
//! `dismiss_last` pops the newest entry and `tick_at` expires timers.

use super::notification::{Notification, NotificationId, NotificationOptions};
use crate::config::DEFAULT_AUTO_HIDE_MS;
use crate::diagnostics::{DiagnosticEventKind, DiagnosticsHandle, DismissReason};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Maximum number of notifications active at once.
pub const MAX_VISIBLE: usize = 3;

#[derive(Debug)]
pub struct Manager<A> {
    /// Active notifications, oldest first.
    visible: VecDeque<Notification<A>>,
    default_auto_hide: Duration,
    diagnostics: Option<DiagnosticsHandle>,
}

impl<A> Default for Manager<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Manager<A> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_default_auto_hide(Duration::from_millis(DEFAULT_AUTO_HIDE_MS))
    }

    /// Creates a store whose `AutoHide::Default` resolves to `default_auto_hide`.
    #[must_use]
    pub fn with_default_auto_hide(default_auto_hide: Duration) -> Self {
        Self {
            visible: VecDeque::with_capacity(MAX_VISIBLE + 1),
            default_auto_hide,
            diagnostics: None,
        }
    }

    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    #[must_use]
    pub fn default_auto_hide(&self) -> Duration {
        self.default_auto_hide
    }

    /// Shows a notification and returns its id.
    ///
    /// If `options` carries an id that is already active, nothing changes
    /// and that id is returned. Otherwise the entry is appended (with a
    /// generated id if none was given) and the oldest entries are evicted
    /// until at most [`MAX_VISIBLE`] remain.
    pub fn show(&mut self, options: NotificationOptions<A>) -> NotificationId {
        self.show_at(options, Instant::now())
    }

    /// [`Manager::show`] with an explicit creation time for the auto-hide timer.
    pub fn show_at(&mut self, mut options: NotificationOptions<A>, now: Instant) -> NotificationId {
        let id = match options.id.take() {
            Some(id) if self.contains(&id) => {
                self.log(DiagnosticEventKind::DuplicateSuppressed {
                    id: id.to_string(),
                });
                return id;
            }
            Some(id) => id,
            None => self.fresh_id(),
        };

        let notification =
            Notification::from_options(id.clone(), options, self.default_auto_hide, now);
        self.log(DiagnosticEventKind::NotificationShown {
            id: id.to_string(),
            variant: notification.variant(),
        });
        self.visible.push_back(notification);

        while self.visible.len() > MAX_VISIBLE {
            if let Some(evicted) = self.visible.pop_front() {
                self.log(DiagnosticEventKind::NotificationEvicted {
                    id: evicted.id().to_string(),
                });
            }
        }

        id
    }

    /// Removes the notification with `id`. Unknown ids are ignored.
    ///
    /// Returns `true` if something was removed.
    pub fn hide(&mut self, id: &NotificationId) -> bool {
        self.dismiss(id, DismissReason::Explicit).is_some()
    }

    /// Removes the notification with `id`, recording why.
    pub(crate) fn dismiss(
        &mut self,
        id: &NotificationId,
        reason: DismissReason,
    ) -> Option<Notification<A>> {
        let pos = self.visible.iter().position(|n| n.id() == id)?;
        let removed = self.visible.remove(pos)?;
        self.log_dismissed(&removed, reason);
        Some(removed)
    }

    /// Removes the most recently added notification, if any.
    pub(crate) fn dismiss_last(&mut self) -> Option<Notification<A>> {
        let removed = self.visible.pop_back()?;
        self.log_dismissed(&removed, DismissReason::Escape);
        Some(removed)
    }

    /// Expires every notification whose auto-hide deadline has passed.
    pub fn tick(&mut self) -> usize {
        self.tick_at(Instant::now())
    }

    /// [`Manager::tick`] against an explicit clock. Returns how many expired.
    pub fn tick_at(&mut self, now: Instant) -> usize {
        let expired: Vec<NotificationId> = self
            .visible
            .iter()
            .filter(|n| n.is_expired(now))
            .map(|n| n.id().clone())
            .collect();

        for id in &expired {
            self.dismiss(id, DismissReason::Timer);
        }
        expired.len()
    }

    /// Active notifications, oldest first.
    pub fn visible(&self) -> impl DoubleEndedIterator<Item = &Notification<A>> + ExactSizeIterator {
        self.visible.iter()
    }

    #[must_use]
    pub fn get(&self, id: &NotificationId) -> Option<&Notification<A>> {
        self.visible.iter().find(|n| n.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: &NotificationId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Whether any active notification is waiting on an auto-hide timer.
    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        self.visible.iter().any(|n| n.deadline().is_some())
    }

    fn fresh_id(&self) -> NotificationId {
        loop {
            let id = NotificationId::generate();
            if !self.contains(&id) {
                return id;
            }
        }
    }

    fn log_dismissed(&self, notification: &Notification<A>, reason: DismissReason) {
        self.log(DiagnosticEventKind::NotificationDismissed {
            id: notification.id().to_string(),
            reason,
        });
    }

    fn log(&self, kind: DiagnosticEventKind) {
        if let Some(handle) = &self.diagnostics {
            handle.log(kind);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticsCollector;
    use crate::ui::notifications::Variant;

    type Options = NotificationOptions<()>;

    fn messages(manager: &Manager<()>) -> Vec<&str> {
        manager.visible().map(Notification::message).collect()
    }

    #[test]
    fn new_manager_is_empty() {
        let manager: Manager<()> = Manager::new();
        assert!(manager.is_empty());
        assert_eq!(manager.len(), 0);
        assert_eq!(manager.default_auto_hide(), Duration::from_millis(3000));
    }

    #[test]
    fn show_applies_defaults() {
        let mut manager = Manager::new();
        let id = manager.show(Options::new("hello"));

        let notification = manager.get(&id).expect("notification should be active");
        assert_eq!(notification.variant(), Variant::Info);
        assert_eq!(notification.auto_hide(), Some(Duration::from_millis(3000)));
        assert!(id.as_str().starts_with("notif_"));
    }

    #[test]
    fn empty_message_is_accepted() {
        let mut manager = Manager::new();
        let id = manager.show(Options::new(""));
        assert_eq!(manager.get(&id).map(Notification::message), Some(""));
    }

    #[test]
    fn fourth_notification_evicts_the_first() {
        let mut manager = Manager::new();
        for message in ["A", "B", "C", "D"] {
            manager.show(Options::new(message));
        }
        assert_eq!(messages(&manager), vec!["B", "C", "D"]);
    }

    #[test]
    fn length_never_exceeds_cap_and_eviction_is_fifo() {
        let mut manager = Manager::new();
        let mut shown = Vec::new();

        for i in 0..20 {
            let message = format!("m{i}");
            manager.show(Options::new(message.clone()));
            shown.push(message);

            assert!(manager.len() <= MAX_VISIBLE);
            let expected: Vec<&str> = shown
                .iter()
                .rev()
                .take(MAX_VISIBLE)
                .rev()
                .map(String::as_str)
                .collect();
            assert_eq!(messages(&manager), expected);
        }
    }

    #[test]
    fn duplicate_id_is_a_no_op() {
        let mut manager = Manager::new();
        let first = manager.show(Options::new("first").id("x"));
        let second = manager.show(Options::new("second").id("x"));

        assert_eq!(first, NotificationId::new("x"));
        assert_eq!(second, first);
        assert_eq!(manager.len(), 1);
        assert_eq!(messages(&manager), vec!["first"]);
    }

    #[test]
    fn duplicate_id_does_not_reorder() {
        let mut manager = Manager::new();
        manager.show(Options::new("A").id("a"));
        manager.show(Options::new("B"));
        manager.show(Options::new("A again").id("a"));

        assert_eq!(messages(&manager), vec!["A", "B"]);
    }

    #[test]
    fn id_can_be_reused_after_dismissal() {
        let mut manager = Manager::new();
        let id = manager.show(Options::new("first").id("x"));
        assert!(manager.hide(&id));

        manager.show(Options::new("second").id("x"));
        assert_eq!(messages(&manager), vec!["second"]);
    }

    #[test]
    fn evicted_id_can_be_shown_again() {
        let mut manager = Manager::new();
        manager.show(Options::new("old").id("x"));
        for message in ["B", "C", "D"] {
            manager.show(Options::new(message));
        }
        assert!(!manager.contains(&NotificationId::new("x")));

        manager.show(Options::new("new").id("x"));
        assert_eq!(messages(&manager), vec!["C", "D", "new"]);
    }

    #[test]
    fn hide_removes_exactly_one_and_keeps_order() {
        let mut manager = Manager::new();
        manager.show(Options::new("A"));
        let b = manager.show(Options::new("B"));
        manager.show(Options::new("C"));

        assert!(manager.hide(&b));
        assert_eq!(messages(&manager), vec!["A", "C"]);
    }

    #[test]
    fn hide_unknown_id_is_a_no_op() {
        let mut manager = Manager::new();
        manager.show(Options::new("A"));

        assert!(!manager.hide(&NotificationId::new("missing")));
        assert_eq!(messages(&manager), vec!["A"]);
    }

    #[test]
    fn dismiss_last_removes_most_recent() {
        let mut manager = Manager::new();
        for message in ["A", "B", "C"] {
            manager.show(Options::new(message));
        }

        let removed = manager.dismiss_last().expect("one should be removed");
        assert_eq!(removed.message(), "C");
        assert_eq!(messages(&manager), vec!["A", "B"]);
    }

    #[test]
    fn dismiss_last_on_empty_is_a_no_op() {
        let mut manager: Manager<()> = Manager::new();
        assert!(manager.dismiss_last().is_none());
        assert!(manager.is_empty());
    }

    #[test]
    fn tick_expires_only_due_notifications() {
        let mut manager = Manager::new();
        let start = Instant::now();
        manager.show_at(Options::new("short").auto_hide(Duration::from_millis(100)), start);
        manager.show_at(Options::new("default"), start);
        manager.show_at(Options::error("sticky").sticky(), start);

        assert_eq!(manager.tick_at(start + Duration::from_millis(50)), 0);
        assert_eq!(manager.tick_at(start + Duration::from_millis(100)), 1);
        assert_eq!(messages(&manager), vec!["default", "sticky"]);

        assert_eq!(manager.tick_at(start + Duration::from_secs(3)), 1);
        assert_eq!(messages(&manager), vec!["sticky"]);
        assert!(!manager.has_pending_timers());
    }

    #[test]
    fn removed_notification_timer_cannot_fire() {
        let mut manager = Manager::new();
        let start = Instant::now();
        let id = manager.show_at(Options::new("gone"), start);
        manager.hide(&id);
        let later = manager.show_at(Options::new("later"), start + Duration::from_secs(2));

        // The first timer would have fired here; the second has not.
        assert_eq!(manager.tick_at(start + Duration::from_secs(3)), 0);
        assert!(manager.contains(&later));
    }

    #[test]
    fn custom_default_auto_hide_is_used() {
        let mut manager = Manager::with_default_auto_hide(Duration::from_secs(10));
        let id = manager.show(Options::new("slow"));
        assert_eq!(
            manager.get(&id).and_then(Notification::auto_hide),
            Some(Duration::from_secs(10))
        );
    }

    #[test]
    fn lifecycle_is_reported_to_diagnostics() {
        let mut collector = DiagnosticsCollector::default();
        let mut manager = Manager::new();
        manager.set_diagnostics(collector.handle());

        manager.show(Options::new("A").id("a"));
        manager.show(Options::new("dup").id("a"));
        for message in ["B", "C", "D"] {
            manager.show(Options::new(message));
        }
        manager.dismiss_last();
        collector.process_pending();

        let kinds: Vec<&DiagnosticEventKind> = collector.iter().map(|e| &e.kind).collect();
        assert!(kinds.contains(&&DiagnosticEventKind::DuplicateSuppressed {
            id: "a".to_string()
        }));
        assert!(kinds.contains(&&DiagnosticEventKind::NotificationEvicted {
            id: "a".to_string()
        }));
        assert!(matches!(
            collector.iter().last().map(|e| &e.kind),
            Some(DiagnosticEventKind::NotificationDismissed {
                reason: DismissReason::Escape,
                ..
            })
        ));
    }
}

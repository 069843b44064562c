// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` creates notifications, appends them to the shared
//! [`Container`], arms their deferred callbacks and performs the two-phase
//! removal (mark as closing, detach after [`REMOVAL_DELAY`]).
//!
//! Time only advances through [`Manager::tick`]. Every operation has an `_at`
//! variant taking the current instant so hosts and tests control the clock.

use super::category::CategoryRegistry;
use super::notification::{Notification, NotificationId, State};
use super::request::{normalize, NotificationRequest, ShowArgs};
use super::timers::{Timer, TimerKind, Timers};
use crate::config::{NotificationsConfig, AVERAGE_GLYPH_WIDTH_RATIO};
use crate::error::NotificationError;
use crate::ui::design_tokens::{sizing, spacing, typography};
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Delay between the closing marker and detachment from the container.
pub const REMOVAL_DELAY: Duration = Duration::from_millis(300);

/// Identifier of the shared container element.
pub const CONTAINER_ID: &str = "notification-container";

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID (close control or caller handle).
    Dismiss(NotificationId),
    /// Dismiss the oldest notification that is still open (keyboard).
    DismissOldest,
    /// Run every deferred callback due at this instant.
    Tick(Instant),
}

/// Decides whether a rendered message is wider than its toast.
pub trait TextMeasure: fmt::Debug {
    fn overflows(&self, notification: &Notification) -> bool;
}

/// Width estimate based on character count and an average glyph width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatedWidth {
    /// Average advance of one character, in logical pixels.
    pub glyph_width: f32,
    /// Total toast width, in logical pixels.
    pub toast_width: f32,
}

impl EstimatedWidth {
    #[must_use]
    pub fn for_toast_width(toast_width: f32) -> Self {
        Self {
            glyph_width: typography::BODY * AVERAGE_GLYPH_WIDTH_RATIO,
            toast_width,
        }
    }

    /// Width left for the message once icon, close control and padding are laid out.
    #[must_use]
    pub fn text_area(&self, with_close_control: bool) -> f32 {
        let mut chrome = sizing::ICON_MD + spacing::XXS * 2.0 + spacing::SM * 3.0;
        if with_close_control {
            chrome += sizing::CLOSE_BUTTON_WIDTH + spacing::SM;
        }
        (self.toast_width - chrome).max(0.0)
    }
}

impl Default for EstimatedWidth {
    fn default() -> Self {
        Self::for_toast_width(sizing::TOAST_WIDTH)
    }
}

impl TextMeasure for EstimatedWidth {
    fn overflows(&self, notification: &Notification) -> bool {
        let chars = notification.message().chars().count() as f32;
        chars * self.glyph_width > self.text_area(notification.has_close_control())
    }
}

/// Ordered holder of every notification not yet detached, oldest first.
#[derive(Debug, Default)]
pub struct Container {
    notifications: Vec<Notification>,
}

impl Container {
    fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn id(&self) -> &'static str {
        CONTAINER_ID
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.notifications.iter().find(|n| n.id() == id)
    }

    /// Most recently appended notification.
    #[must_use]
    pub fn last(&self) -> Option<&Notification> {
        self.notifications.last()
    }

    /// Oldest notification not yet marked for removal.
    #[must_use]
    pub fn first_open(&self) -> Option<&Notification> {
        self.notifications.iter().find(|n| n.is_open())
    }

    fn get_mut(&mut self, id: NotificationId) -> Option<&mut Notification> {
        self.notifications.iter_mut().find(|n| n.id() == id)
    }

    fn push(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    fn remove(&mut self, id: NotificationId) -> Option<Notification> {
        let pos = self.notifications.iter().position(|n| n.id() == id)?;
        Some(self.notifications.remove(pos))
    }
}

/// Owns the container, the category registry and all pending callbacks.
#[derive(Debug)]
pub struct Manager {
    registry: CategoryRegistry,
    /// Created by the first successful `show`.
    container: Option<Container>,
    timers: Timers,
    measure: Box<dyn TextMeasure>,
    toast_width: f32,
}

impl Default for Manager {
    fn default() -> Self {
        Self::with_registry(CategoryRegistry::builtin())
    }
}

impl Manager {
    /// Creates a manager with the built-in categories.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_registry(registry: CategoryRegistry) -> Self {
        Self {
            registry,
            container: None,
            timers: Timers::new(),
            measure: Box::new(EstimatedWidth::default()),
            toast_width: sizing::TOAST_WIDTH,
        }
    }

    /// Builds a manager from the `[notifications]` settings section.
    #[must_use]
    pub fn from_config(config: &NotificationsConfig) -> Self {
        let toast_width = config.toast_width();
        let mut manager = Self::with_registry(config.registry())
            .with_text_measure(EstimatedWidth::for_toast_width(toast_width));
        manager.toast_width = toast_width;
        manager
    }

    /// Replaces the overflow measure.
    #[must_use]
    pub fn with_text_measure(mut self, measure: impl TextMeasure + 'static) -> Self {
        self.measure = Box::new(measure);
        self
    }

    /// Rendered width of each toast, in logical pixels.
    #[must_use]
    pub fn toast_width(&self) -> f32 {
        self.toast_width
    }

    #[must_use]
    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut CategoryRegistry {
        &mut self.registry
    }

    /// Shows a notification now. See [`Manager::show_at`].
    pub fn show(&mut self, args: impl Into<ShowArgs>) -> Result<NotificationId, NotificationError> {
        self.show_at(args, Instant::now())
    }

    /// Shows a notification, appending it as the newest child of the container.
    ///
    /// The request is fully validated first: on error the container is left
    /// untouched and no callback is armed. The returned handle may be ignored.
    pub fn show_at(
        &mut self,
        args: impl Into<ShowArgs>,
        now: Instant,
    ) -> Result<NotificationId, NotificationError> {
        let request = normalize(args.into())?;
        if request.message.is_empty() {
            return Err(NotificationError::MalformedRequest(
                "message is empty".to_string(),
            ));
        }

        let (category, style) = {
            let (name, style) = self.registry.resolve(&request.category)?;
            (name.to_string(), style.clone())
        };
        let request = NotificationRequest { category, ..request };

        let notification = Notification::new(request, style);
        let id = notification.id();

        // Overflow is measured on the next tick, after layout.
        self.timers.arm(now, TimerKind::MeasureOverflow, id);
        // A deadline past the clock's range never fires; the toast stays timed.
        if let Some(due) = notification
            .request()
            .auto_dismiss_delay()
            .and_then(|delay| now.checked_add(delay))
        {
            self.timers.arm(due, TimerKind::AutoDismiss, id);
        }

        debug!(
            ?id,
            category = notification.category(),
            delay_ms = notification.request().auto_dismiss_delay_ms,
            "notification shown"
        );

        self.container.get_or_insert_with(Container::new).push(notification);
        Ok(id)
    }

    /// Dismisses a notification now. See [`Manager::dismiss_at`].
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        self.dismiss_at(id, Instant::now())
    }

    /// Moves an open notification to closing and schedules its detachment.
    ///
    /// Returns `true` only for the call that performed the transition.
    /// Unknown, closing and removed notifications are ignored.
    pub fn dismiss_at(&mut self, id: NotificationId, now: Instant) -> bool {
        let Some(notification) = self.container.as_mut().and_then(|c| c.get_mut(id)) else {
            return false;
        };
        if !notification.begin_closing() {
            return false;
        }

        self.timers.arm(now + REMOVAL_DELAY, TimerKind::Detach, id);
        debug!(?id, "notification closing");
        true
    }

    /// Dismisses the oldest notification still open.
    pub fn dismiss_oldest_at(&mut self, now: Instant) -> Option<NotificationId> {
        let id = self.container.as_ref()?.first_open()?.id();
        self.dismiss_at(id, now).then_some(id)
    }

    /// Runs every callback due at or before `now`, in deadline order.
    ///
    /// Callbacks armed while ticking are scheduled from the deadline of the
    /// callback that armed them, so a removal following an auto-dismiss lands
    /// exactly `REMOVAL_DELAY` after the auto-dismiss deadline.
    ///
    /// Returns the notifications detached during this tick.
    pub fn tick(&mut self, now: Instant) -> Vec<NotificationId> {
        let mut removed = Vec::new();

        while let Some(timer) = self.timers.pop_due(now) {
            trace!(id = ?timer.id, kind = ?timer.kind, "timer fired");
            match timer.kind {
                TimerKind::AutoDismiss => {
                    self.dismiss_at(timer.id, timer.due);
                }
                TimerKind::Detach => {
                    if self.detach(timer.id) {
                        removed.push(timer.id);
                    }
                }
                TimerKind::MeasureOverflow => self.measure_overflow(timer.id),
            }
        }

        removed
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::DismissOldest => {
                self.dismiss_oldest_at(Instant::now());
            }
            Message::Tick(now) => {
                self.tick(*now);
            }
        }
    }

    fn detach(&mut self, id: NotificationId) -> bool {
        let Some(container) = self.container.as_mut() else {
            return false;
        };
        if container.get(id).map(Notification::state) != Some(State::Closing) {
            return false;
        }
        match container.remove(id) {
            Some(mut notification) => {
                notification.mark_removed();
                debug!(?id, "notification removed");
                true
            }
            None => false,
        }
    }

    fn measure_overflow(&mut self, id: NotificationId) {
        let Some(notification) = self.container.as_mut().and_then(|c| c.get_mut(id)) else {
            return;
        };
        if self.measure.overflows(notification) {
            notification.mark_scrolling();
        }
    }

    /// The shared container, once the first notification created it.
    #[must_use]
    pub fn container(&self) -> Option<&Container> {
        self.container.as_ref()
    }

    /// Notifications currently in the container, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.container.iter().flat_map(Container::iter)
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.container.as_ref().map_or(0, Container::len)
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        self.visible_count() > 0
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.container.as_ref()?.get(id)
    }

    /// Pending callbacks for one notification, earliest first.
    #[must_use]
    pub fn scheduled_for(&self, id: NotificationId) -> Vec<Timer> {
        self.timers.scheduled_for(id)
    }

    /// Deadline of the next pending callback, for hosts that sleep between ticks.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::request::NotificationOptions;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[derive(Debug)]
    struct AlwaysOverflows;

    impl TextMeasure for AlwaysOverflows {
        fn overflows(&self, _notification: &Notification) -> bool {
            true
        }
    }

    #[test]
    fn new_manager_has_no_container() {
        let manager = Manager::new();
        assert!(manager.container().is_none());
        assert_eq!(manager.visible_count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn show_creates_container_and_appends_open_notification() {
        let mut manager = Manager::new();
        let id = manager.show(("saved", "success", 1000_i64)).unwrap();

        let container = manager.container().expect("container created");
        assert_eq!(container.id(), CONTAINER_ID);
        assert_eq!(container.len(), 1);
        assert_eq!(container.last().map(Notification::id), Some(id));
        assert_eq!(manager.get(id).unwrap().state(), State::Open);
    }

    #[test]
    fn show_appends_in_call_order() {
        let mut manager = Manager::new();
        let ids: Vec<_> = ["a", "b", "c"]
            .into_iter()
            .map(|m| manager.show(m).unwrap())
            .collect();

        let order: Vec<_> = manager.visible().map(Notification::id).collect();
        assert_eq!(order, ids);
        assert_eq!(manager.container().unwrap().last().unwrap().id(), ids[2]);
    }

    #[test]
    fn persistent_notification_has_close_control_and_no_auto_dismiss() {
        let mut manager = Manager::new();
        let base = Instant::now();
        let id = manager.show_at(("x", "default", 0_i64), base).unwrap();

        assert!(manager.get(id).unwrap().has_close_control());
        let kinds: Vec<_> = manager.scheduled_for(id).iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![TimerKind::MeasureOverflow]);

        // Nothing ever removes it on its own.
        manager.tick(base + Duration::from_secs(3600));
        assert_eq!(manager.get(id).unwrap().state(), State::Open);
    }

    #[test]
    fn timed_notification_has_one_auto_dismiss_and_no_close_control() {
        let mut manager = Manager::new();
        let base = Instant::now();
        let id = manager.show_at(("x", "default", 5000_i64), base).unwrap();

        assert!(!manager.get(id).unwrap().has_close_control());
        let auto: Vec<_> = manager
            .scheduled_for(id)
            .into_iter()
            .filter(|t| t.kind == TimerKind::AutoDismiss)
            .collect();
        assert_eq!(auto.len(), 1);
        assert_eq!(auto[0].due, base + ms(5000));
    }

    #[test]
    fn auto_dismiss_closes_then_detaches_after_removal_delay() {
        let mut manager = Manager::new();
        let base = Instant::now();
        let id = manager.show_at(("x", "default", 5000_i64), base).unwrap();

        manager.tick(base + ms(4999));
        assert_eq!(manager.get(id).unwrap().state(), State::Open);

        manager.tick(base + ms(5000));
        let notification = manager.get(id).unwrap();
        assert_eq!(notification.state(), State::Closing);
        assert!(notification.class_names().contains(&"remove"));

        assert!(manager.tick(base + ms(5299)).is_empty());
        assert!(manager.get(id).is_some());

        assert_eq!(manager.tick(base + ms(5300)), vec![id]);
        assert!(manager.get(id).is_none());
        assert!(manager.container().unwrap().is_empty());
    }

    #[test]
    fn late_tick_runs_chained_removal_in_one_pass() {
        let mut manager = Manager::new();
        let base = Instant::now();
        let id = manager.show_at(("x", 100_i64), base).unwrap();

        assert_eq!(manager.tick(base + Duration::from_secs(10)), vec![id]);
        assert_eq!(manager.visible_count(), 0);
    }

    #[test]
    fn manual_dismiss_detaches_after_removal_delay() {
        let mut manager = Manager::new();
        let base = Instant::now();
        let id = manager.show_at("persist", base).unwrap();

        let closed_at = base + ms(1234);
        assert!(manager.dismiss_at(id, closed_at));
        assert_eq!(manager.get(id).unwrap().state(), State::Closing);

        assert!(manager.tick(closed_at + ms(299)).is_empty());
        assert_eq!(manager.tick(closed_at + REMOVAL_DELAY), vec![id]);
    }

    #[test]
    fn dismiss_is_idempotent() {
        let mut manager = Manager::new();
        let base = Instant::now();
        let id = manager.show_at(("x", 1000_i64), base).unwrap();

        assert!(manager.dismiss_at(id, base + ms(100)));
        assert!(!manager.dismiss_at(id, base + ms(150)));

        let detaches = manager
            .scheduled_for(id)
            .iter()
            .filter(|t| t.kind == TimerKind::Detach)
            .count();
        assert_eq!(detaches, 1);

        // Auto-dismiss fires after the manual close: still exactly one detach.
        let removed = manager.tick(base + Duration::from_secs(5));
        assert_eq!(removed, vec![id]);
        assert!(manager.scheduled_for(id).is_empty());
    }

    #[test]
    fn dismissing_removed_or_unknown_notification_is_noop() {
        let mut manager = Manager::new();
        let base = Instant::now();
        let unknown = NotificationId::new();
        assert!(!manager.dismiss_at(unknown, base));

        let id = manager.show_at("x", base).unwrap();
        manager.dismiss_at(id, base);
        manager.tick(base + REMOVAL_DELAY);

        assert!(!manager.dismiss_at(id, base + Duration::from_secs(1)));
        assert!(manager.scheduled_for(id).is_empty());
    }

    #[test]
    fn dismiss_oldest_skips_closing_notifications() {
        let mut manager = Manager::new();
        let base = Instant::now();
        let first = manager.show_at("first", base).unwrap();
        let second = manager.show_at("second", base).unwrap();
        let third = manager.show_at("third", base).unwrap();

        assert_eq!(manager.dismiss_oldest_at(base), Some(first));
        assert_eq!(manager.dismiss_oldest_at(base), Some(second));
        assert_eq!(manager.get(third).unwrap().state(), State::Open);
    }

    #[test]
    fn dismiss_oldest_with_nothing_open_is_noop() {
        let mut manager = Manager::new();
        assert_eq!(manager.dismiss_oldest_at(Instant::now()), None);
    }

    #[test]
    fn unknown_category_is_rejected_without_side_effects() {
        let mut manager = Manager::new();
        let result = manager.show(("x", "danger"));

        assert_eq!(
            result,
            Err(NotificationError::UnknownCategory("danger".into()))
        );
        assert!(manager.container().is_none());
        assert!(manager.next_deadline().is_none());
    }

    #[test]
    fn unknown_category_falls_back_when_configured() {
        use crate::ui::notifications::category::UnknownCategoryPolicy;

        let registry = CategoryRegistry::builtin().with_policy(UnknownCategoryPolicy::Fallback);
        let mut manager = Manager::with_registry(registry);
        let id = manager.show(("x", "danger")).unwrap();

        let notification = manager.get(id).unwrap();
        assert_eq!(notification.category(), "default");
        assert_eq!(notification.glyph(), "info");
    }

    #[test]
    fn empty_message_is_malformed() {
        let mut manager = Manager::new();
        assert!(matches!(
            manager.show(""),
            Err(NotificationError::MalformedRequest(_))
        ));
        assert!(matches!(
            manager.show(NotificationOptions::default()),
            Err(NotificationError::MalformedRequest(_))
        ));
        assert!(manager.container().is_none());
    }

    #[test]
    fn negative_delay_is_rejected() {
        let mut manager = Manager::new();
        assert_eq!(
            manager.show(("x", -5_i64)),
            Err(NotificationError::InvalidDelay(-5))
        );
    }

    #[test]
    fn overflow_marker_is_applied_on_next_tick() {
        let mut manager = Manager::new().with_text_measure(AlwaysOverflows);
        let base = Instant::now();
        let id = manager.show_at("wide", base).unwrap();

        assert!(!manager.get(id).unwrap().is_scrolling());
        manager.tick(base);
        assert!(manager.get(id).unwrap().is_scrolling());
        assert!(manager
            .get(id)
            .unwrap()
            .message_class_names()
            .contains(&"scrolling"));
    }

    #[test]
    fn short_message_is_not_scrolling() {
        let mut manager = Manager::new();
        let base = Instant::now();
        let id = manager.show_at("ok", base).unwrap();
        manager.tick(base);
        assert!(!manager.get(id).unwrap().is_scrolling());
    }

    #[test]
    fn estimated_width_flags_long_messages() {
        let mut manager = Manager::new();
        let base = Instant::now();
        let id = manager.show_at("x".repeat(400), base).unwrap();
        manager.tick(base);
        assert!(manager.get(id).unwrap().is_scrolling());
    }

    #[test]
    fn estimated_width_gives_timed_toasts_more_room() {
        let measure = EstimatedWidth::default();
        assert!(measure.text_area(false) > measure.text_area(true));
    }

    #[test]
    fn handle_message_dismiss_and_tick() {
        let mut manager = Manager::new();
        let id = manager.show("test").unwrap();

        manager.handle_message(&Message::Dismiss(id));
        assert_eq!(manager.get(id).unwrap().state(), State::Closing);

        manager.handle_message(&Message::Tick(Instant::now() + Duration::from_secs(1)));
        assert_eq!(manager.visible_count(), 0);
    }

    #[test]
    fn handle_message_dismiss_oldest() {
        let mut manager = Manager::new();
        let first = manager.show("first").unwrap();
        let second = manager.show("second").unwrap();

        manager.handle_message(&Message::DismissOldest);
        assert_eq!(manager.get(first).unwrap().state(), State::Closing);
        assert_eq!(manager.get(second).unwrap().state(), State::Open);
    }

    #[test]
    fn from_config_carries_toast_width() {
        let config = NotificationsConfig {
            toast_width: Some(480.0),
            ..NotificationsConfig::default()
        };
        assert_eq!(Manager::from_config(&config).toast_width(), 480.0);
        assert_eq!(Manager::new().toast_width(), sizing::TOAST_WIDTH);
    }

    #[test]
    fn huge_delay_stays_timed_without_close_control() {
        let mut manager = Manager::new();
        let request = NotificationRequest::new("later", "default", u64::MAX);
        let id = manager.show_at(request, Instant::now()).unwrap();

        let notification = manager.get(id).unwrap();
        assert!(!notification.has_close_control());
        assert_eq!(notification.request().auto_dismiss_delay_ms, u64::MAX);
    }
}

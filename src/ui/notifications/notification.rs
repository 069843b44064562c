// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! A [`Notification`] is one toast living in the container. It carries the
//! normalized request, the resolved category style and its lifecycle
//! [`State`]. Only the manager mutates it.

use super::category::CategoryStyle;
use super::request::NotificationRequest;

/// Class carried by every toast element.
pub const NOTIFICATION_CLASS: &str = "notification";
/// Class added once a toast starts closing.
pub const REMOVE_CLASS: &str = "remove";
/// Class carried by every message element.
pub const MESSAGE_CLASS: &str = "notif";
/// Class added to a message that overflows its toast.
pub const SCROLLING_CLASS: &str = "scrolling";

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Lifecycle state of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    /// Visible and waiting for a dismiss trigger.
    #[default]
    Open,
    /// Marked for removal; detached once the removal delay elapses.
    Closing,
    /// Detached from the container. Terminal.
    Removed,
}

/// A notification shown to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    request: NotificationRequest,
    style: CategoryStyle,
    state: State,
    scrolling: bool,
}

impl Notification {
    /// Creates an open notification from an already validated request.
    pub(crate) fn new(request: NotificationRequest, style: CategoryStyle) -> Self {
        Self {
            id: NotificationId::new(),
            request,
            style,
            state: State::Open,
            scrolling: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn request(&self) -> &NotificationRequest {
        &self.request
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.request.message
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.request.category
    }

    #[must_use]
    pub fn style(&self) -> &CategoryStyle {
        &self.style
    }

    /// Glyph identifier for the icon collaborator.
    #[must_use]
    pub fn glyph(&self) -> &str {
        &self.style.glyph
    }

    #[must_use]
    pub fn state(&self) -> State {
        self.state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == State::Open
    }

    /// Persistent toasts show a close control; timed ones never do.
    #[must_use]
    pub fn has_close_control(&self) -> bool {
        self.request.is_persistent()
    }

    /// Whether the "removing" marker is applied.
    #[must_use]
    pub fn is_removing(&self) -> bool {
        self.state != State::Open
    }

    #[must_use]
    pub fn is_scrolling(&self) -> bool {
        self.scrolling
    }

    /// Classes applied to the toast element.
    #[must_use]
    pub fn class_names(&self) -> Vec<&str> {
        let mut classes = vec![NOTIFICATION_CLASS, self.style.class.as_str()];
        if self.is_removing() {
            classes.push(REMOVE_CLASS);
        }
        classes
    }

    /// Classes applied to the message element.
    #[must_use]
    pub fn message_class_names(&self) -> Vec<&'static str> {
        if self.scrolling {
            vec![MESSAGE_CLASS, SCROLLING_CLASS]
        } else {
            vec![MESSAGE_CLASS]
        }
    }

    /// Open -> Closing. Returns `false` if already closing or removed.
    pub(crate) fn begin_closing(&mut self) -> bool {
        if self.state == State::Open {
            self.state = State::Closing;
            true
        } else {
            false
        }
    }

    pub(crate) fn mark_removed(&mut self) {
        self.state = State::Removed;
    }

    pub(crate) fn mark_scrolling(&mut self) {
        self.scrolling = true;
    }
}

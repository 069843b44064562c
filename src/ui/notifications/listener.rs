// SPDX-License-Identifier: MPL-2.0
//! Page-wide keyboard dismissal.
//!
//! Pressing Escape anywhere dismisses the oldest notification that is still
//! open. Notifications already closing are skipped, so repeated presses walk
//! the stack from oldest to newest, one toast per press.

use super::manager::{Manager, Message};
use super::notification::NotificationId;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, Subscription};
use std::time::Instant;

/// Routes the dismiss key to the manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissListener {
    enabled: bool,
}

impl Default for DismissListener {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl DismissListener {
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The only key this listener reacts to.
    #[must_use]
    pub fn is_dismiss_key(key: &Key) -> bool {
        matches!(key, Key::Named(Named::Escape))
    }

    /// Handles one key press. Returns the dismissed notification, if any.
    pub fn handle_key(
        &self,
        key: &Key,
        manager: &mut Manager,
        now: Instant,
    ) -> Option<NotificationId> {
        if !self.enabled || !Self::is_dismiss_key(key) {
            return None;
        }
        manager.dismiss_oldest_at(now)
    }

    /// Subscription emitting [`Message::DismissOldest`] for every Escape press.
    ///
    /// Presses are observed whether or not a widget captured them.
    pub fn subscription(&self) -> Subscription<Message> {
        if !self.enabled {
            return Subscription::none();
        }

        event::listen_with(|event, _status, _window| match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. })
                if Self::is_dismiss_key(&key) =>
            {
                Some(Message::DismissOldest)
            }
            _ => None,
        })
    }
}

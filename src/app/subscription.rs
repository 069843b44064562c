// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo application.

use super::Message;
use crate::ui::notifications::DismissListener;
use iced::{time, Subscription};
use std::time::Duration;

/// Interval between timer ticks while notifications are on screen.
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Routes Escape presses to the notification manager.
pub fn create_keyboard_subscription(listener: &DismissListener) -> Subscription<Message> {
    listener.subscription().map(Message::Notification)
}

/// Ticks only while something is on screen.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

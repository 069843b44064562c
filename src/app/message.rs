// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::ui::notifications;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Notification(notifications::NotificationMessage),
    /// Show a demo notification of the given category.
    Show {
        category: &'static str,
        timed: bool,
    },
    /// Show a message too long for one toast line.
    ShowLong,
    Tick(Instant), // Periodic tick driving notification timers
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override (e.g. "fr").
    pub lang: Option<String>,
    /// Optional config directory override.
    pub config_dir: Option<String>,
}

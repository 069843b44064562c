// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications stack in a shared container, oldest first. Each one either
//! auto-dismisses after a delay or stays until closed by hand (close button
//! or Escape). Dismissal is two-phase: the toast is marked for removal, then
//! detached [`REMOVAL_DELAY`] later.
//!
//! # Components
//!
//! - [`category`] - Category registry (glyph + style class per category)
//! - [`request`] - Normalization of the positional and options call shapes
//! - [`notification`] - Core `Notification` struct and its lifecycle state
//! - [`timers`] - Deferred callbacks driven by the host's clock
//! - [`manager`] - `Manager` owning the container and the lifecycle
//! - [`listener`] - Escape-key dismissal of the oldest open toast
//! - [`global`] - Process-wide `show_notification` entry point
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Usage
//!
//! ```ignore
//! use iced_toasts::ui::notifications::{Manager, NotificationOptions};
//!
//! let mut manager = Manager::new();
//!
//! // Persistent, closed by hand
//! manager.show("Connection lost")?;
//! // Error category, dismissed after 5 seconds
//! manager.show(("Upload failed", "error", 5000_i64))?;
//! // Options object
//! manager.show(NotificationOptions::new("Saved").category("success").delay_before_hide(3000))?;
//!
//! // From the host's periodic tick
//! manager.tick(now);
//!
//! // In your view function, render toasts
//! let toast_overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```

pub mod category;
pub mod global;
pub mod listener;
pub mod manager;
pub mod notification;
pub mod request;
pub mod timers;
pub mod toast;

pub use category::{CategoryRegistry, CategoryStyle, UnknownCategoryPolicy, DEFAULT_CATEGORY};
pub use global::show_notification;
pub use listener::DismissListener;
pub use manager::{
    Container, EstimatedWidth, Manager, Message as NotificationMessage, TextMeasure,
    CONTAINER_ID, REMOVAL_DELAY,
};
pub use notification::{Notification, NotificationId, State};
pub use request::{normalize, NotificationOptions, NotificationRequest, ShowArgs, TypeOrDelay};
pub use timers::{Timer, TimerKind};
pub use toast::Toast;

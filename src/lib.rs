// SPDX-License-Identifier: MPL-2.0
//! `iced_toasts` shows stackable toast notifications in an Iced application.
//!
//! Toasts are raised with a message, a category and an optional auto-dismiss
//! delay. They stack oldest first, expire on their own or wait for the close
//! button or the Escape key, and leave through a short removal phase.
//! See [`ui::notifications`] for the core and [`app`] for a demo host.

#![doc(html_root_url = "https://docs.rs/iced_toasts/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;

pub use ui::notifications::show_notification;

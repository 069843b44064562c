// SPDX-License-Identifier: MPL-2.0
//! Demo host application.
//!
//! The `App` struct wires the notification manager, the Escape listener and
//! localization into an Iced window, and translates button presses into
//! `show` calls using both call shapes.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};
pub use view::DEMO_CATEGORIES;

use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, DismissListener, NotificationOptions, ShowArgs};
use iced::{window, Element, Subscription, Task};
use std::fmt;
use std::time::Instant;

/// Auto-dismiss delay used by the demo's timed buttons.
pub const DEMO_TIMED_DELAY_MS: i64 = 5000;

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    /// Toast notification manager.
    notifications: notifications::Manager,
    listener: DismissListener,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("visible_notifications", &self.notifications.visible_count())
            .field("listener", &self.listener)
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            notifications: notifications::Manager::new(),
            listener: DismissListener::default(),
        }
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot closure; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings and localization, and reports a broken config file as a toast.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) =
            config::load_with_override(flags.config_dir.map(Into::into));
        let i18n = I18n::new(flags.lang, &config);

        let mut app = App {
            i18n,
            notifications: notifications::Manager::from_config(&config.notifications),
            listener: DismissListener::new(config.notifications.dismiss_on_escape()),
        };

        if let Some(key) = config_warning {
            let message = app.i18n.tr(&key);
            app.show((message.as_str(), "warning", DEMO_TIMED_DELAY_MS));
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_keyboard_subscription(&self.listener),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
            }
            Message::Show { category, timed } => {
                let text = self.i18n.tr(&format!("demo-message-{category}"));
                let delay = if timed { DEMO_TIMED_DELAY_MS } else { 0 };
                self.show((text.as_str(), category, delay));
            }
            Message::ShowLong => {
                let options = NotificationOptions::new(self.i18n.tr("demo-message-long"));
                self.show(options);
            }
            Message::Tick(now) => {
                self.notifications.tick(now);
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            notifications: &self.notifications,
        })
    }

    /// Shows a toast; caller errors are logged rather than rendered.
    fn show(&mut self, args: impl Into<ShowArgs>) {
        if let Err(err) = self.notifications.show_at(args, Instant::now()) {
            tracing::error!(%err, "failed to show notification");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::{NotificationMessage, State};
    use std::time::Duration;

    #[test]
    fn show_buttons_create_notifications_per_category() {
        let mut app = App::default();
        for category in DEMO_CATEGORIES {
            let _ = app.update(Message::Show {
                category,
                timed: false,
            });
        }

        let categories: Vec<&str> = app.notifications.visible().map(|n| n.category()).collect();
        assert_eq!(categories, DEMO_CATEGORIES.to_vec());
        assert!(app.notifications.visible().all(|n| n.has_close_control()));
    }

    #[test]
    fn timed_button_arms_auto_dismiss() {
        let mut app = App::default();
        let _ = app.update(Message::Show {
            category: "success",
            timed: true,
        });

        let notification = app.notifications.visible().next().unwrap();
        assert!(!notification.has_close_control());
        assert_eq!(notification.request().auto_dismiss_delay_ms, 5000);
    }

    #[test]
    fn dismiss_oldest_message_closes_first_toast() {
        let mut app = App::default();
        let _ = app.update(Message::Show {
            category: "default",
            timed: false,
        });
        let _ = app.update(Message::Show {
            category: "error",
            timed: false,
        });

        let _ = app.update(Message::Notification(NotificationMessage::DismissOldest));
        let states: Vec<State> = app.notifications.visible().map(|n| n.state()).collect();
        assert_eq!(states, vec![State::Closing, State::Open]);

        let _ = app.update(Message::Tick(Instant::now() + Duration::from_secs(1)));
        assert_eq!(app.notifications.visible_count(), 1);
    }

    #[test]
    fn long_message_is_marked_scrolling_after_tick() {
        let mut app = App::default();
        let _ = app.update(Message::ShowLong);
        let _ = app.update(Message::Tick(Instant::now()));

        let notification = app.notifications.visible().next().unwrap();
        assert!(notification.is_scrolling());
    }

    #[test]
    fn title_is_localized() {
        let app = App::default();
        assert!(!app.title().starts_with("MISSING"));
    }

    #[test]
    fn view_renders_with_and_without_toasts() {
        let mut app = App::default();
        let _ = app.view();
        let _ = app.update(Message::Show {
            category: "warning",
            timed: true,
        });
        let _ = app.view();
    }
}

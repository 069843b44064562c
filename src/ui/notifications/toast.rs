// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are the visual representation of notifications: a card with a
//! category-colored accent, a glyph, the message and, for persistent toasts,
//! a close button. The style and icon lookups below are keyed by the class
//! and glyph names the manager attaches.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{button, container, scrollable, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Accent color for a category style class.
#[must_use]
pub fn accent_for_class(class: &str) -> Color {
    match class {
        "default" => palette::INFO_500,
        "error" => palette::ERROR_500,
        "success" => palette::SUCCESS_500,
        "warning" => palette::WARNING_500,
        _ => palette::GRAY_400,
    }
}

/// Symbol drawn for a glyph identifier.
#[must_use]
pub fn glyph_symbol(glyph: &str) -> &'static str {
    match glyph {
        "info" => "ℹ",
        "error" => "✖",
        "success" => "✔",
        "warning" => "⚠",
        _ => "•",
    }
}

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view<'a>(
        notification: &'a Notification,
        i18n: &'a I18n,
        width: f32,
    ) -> Element<'a, Message> {
        let removing = notification.is_removing();
        let accent = fade(accent_for_class(&notification.style().class), removing);

        let icon_widget = Text::new(glyph_symbol(notification.glyph()))
            .size(sizing::ICON_MD)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent),
            });

        let message_text =
            Text::new(notification.message())
                .size(typography::BODY)
                .style(move |theme: &Theme| text::Style {
                    color: Some(fade(theme.palette().text, removing)),
                });

        // Overflowing messages scroll horizontally instead of wrapping.
        let message_widget: Element<'a, Message> = if notification.is_scrolling() {
            scrollable(message_text)
                .direction(Direction::Horizontal(Scrollbar::new()))
                .width(Length::Fill)
                .into()
        } else {
            message_text.into()
        };

        let mut content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(icon_widget).padding(spacing::XXS))
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            );

        if notification.has_close_control() {
            let label = Text::new(i18n.tr("notification-close")).size(typography::BODY_SM);
            let mut close_button = button(label)
                .padding(spacing::XXS)
                .style(close_button_style);
            // A closing toast keeps its button but no longer reacts to it.
            if !removing {
                close_button = close_button.on_press(Message::Dismiss(notification.id()));
            }
            content = content.push(close_button);
        }

        Container::new(content)
            .width(Length::Fixed(width))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent, removing))
            .into()
    }

    /// Renders every notification in the container, oldest at the top.
    ///
    /// Positions toasts in the bottom-right corner, stacked vertically.
    pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = manager
            .visible()
            .map(|notification| Self::view(notification, i18n, manager.toast_width()))
            .collect();

        if toasts.is_empty() {
            // Return an empty container that takes no space
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            let toast_column = Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right);

            Container::new(toast_column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Bottom)
                .padding(spacing::MD)
                .into()
        }
    }
}

fn fade(color: Color, removing: bool) -> Color {
    if removing {
        Color {
            a: color.a * opacity::CLOSING,
            ..color
        }
    } else {
        color
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color, removing: bool) -> container::Style {
    let bg_color = fade(theme.extended_palette().background.base.color, removing);

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: if removing { shadow::NONE } else { shadow::MD },
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the close button.
fn close_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover_border = iced::Border {
        color: palette::GRAY_400,
        width: border::WIDTH_SM,
        radius: radius::SM.into(),
    };

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: base.text,
            border: hover_border,
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: hover_border,
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: hover_border,
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

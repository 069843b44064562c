// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.
//!
//! One row of buttons per category, with the toast overlay stacked on top.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::{Manager, Toast};
use iced::widget::{button, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length};

/// Categories offered by the demo, in display order.
pub const DEMO_CATEGORIES: [&str; 4] = ["default", "error", "success", "warning"];

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub notifications: &'a Manager,
}

/// Renders the controls with the toast overlay on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let mut controls = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(i18n.tr("demo-heading")).size(typography::TITLE_MD));

    for category in DEMO_CATEGORIES {
        controls = controls.push(category_row(i18n, category));
    }

    controls = controls
        .push(button(Text::new(i18n.tr("demo-long-message"))).on_press(Message::ShowLong))
        .push(Text::new(i18n.tr("demo-escape-hint")).size(typography::BODY_SM));

    let base = Container::new(controls)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Left)
        .align_y(alignment::Vertical::Top)
        .padding(spacing::LG);

    let overlay = Toast::view_overlay(ctx.notifications, i18n).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base)
        .push(overlay)
        .into()
}

fn category_row<'a>(i18n: &'a I18n, category: &'static str) -> Element<'a, Message> {
    let label = Text::new(i18n.tr(&format!("category-{category}")))
        .size(typography::BODY)
        .width(Length::Fixed(120.0));

    Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(label)
        .push(button(Text::new(i18n.tr("demo-persistent"))).on_press(Message::Show {
            category,
            timed: false,
        }))
        .push(button(Text::new(i18n.tr("demo-timed"))).on_press(Message::Show {
            category,
            timed: true,
        }))
        .into()
}

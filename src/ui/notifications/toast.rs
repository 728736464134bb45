// SPDX-License-Identifier: MPL-2.0
//! Toast rendering.
//!
//! Each toast is a card with a variant glyph, the message, an optional
//! action button and a dismiss button. The stack is drawn as an overlay
//! anchored to the right edge of the window.

use super::manager::Manager;
use super::notification::Notification;
use super::provider::Message;
use crate::config::ToastPosition;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, text, tooltip, Column, Container, Row, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

/// Renders a single toast.
pub fn view<'a, A>(notification: &'a Notification<A>, i18n: &'a I18n) -> Element<'a, Message> {
    let variant = notification.variant();
    let accent = variant.color();
    let id = notification.id();

    let glyph = Text::new(variant.glyph())
        .size(sizing::TOAST_GLYPH)
        .color(accent);

    let message = Text::new(notification.message())
        .size(typography::BODY)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.palette().text),
        });

    let mut content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(glyph).padding(spacing::XXS))
        .push(
            Container::new(message)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        );

    if let Some(action) = notification.action() {
        content = content.push(
            button(Text::new(action.label.as_str()).size(typography::BODY))
                .on_press(Message::ActionPressed(id.clone()))
                .padding([spacing::XXS, spacing::XS])
                .style(move |theme: &Theme, status| action_button_style(theme, status, accent)),
        );
    }

    let dismiss = button(Text::new("✕").size(typography::BODY))
        .on_press(Message::Dismiss(id.clone()))
        .padding(spacing::XXS)
        .style(dismiss_button_style);

    content = content.push(tooltip(
        dismiss,
        Text::new(i18n.tr("toast-dismiss")).size(typography::CAPTION),
        tooltip::Position::Left,
    ));

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| toast_container_style(theme, accent))
        .into()
}

/// Renders every visible toast, oldest first, in the configured corner.
pub fn view_overlay<'a, A>(
    manager: &'a Manager<A>,
    position: ToastPosition,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    if manager.is_empty() {
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    let toasts: Vec<Element<'a, Message>> = manager
        .visible()
        .map(|notification| view(notification, i18n))
        .collect();

    let stack = Column::with_children(toasts)
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Right);

    Container::new(stack)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(vertical_alignment(position))
        .padding(spacing::MD)
        .into()
}

fn vertical_alignment(position: ToastPosition) -> alignment::Vertical {
    match position {
        ToastPosition::TopRight => alignment::Vertical::Top,
        ToastPosition::BottomRight => alignment::Vertical::Bottom,
    }
}

fn toast_container_style(theme: &Theme, accent: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(bg_color)),
        border: Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn hover_fill(status: button::Status) -> Option<Background> {
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_SUBTLE,
        button::Status::Pressed => opacity::OVERLAY_MEDIUM,
        button::Status::Active | button::Status::Disabled => return None,
    };
    Some(Background::Color(Color {
        a: alpha,
        ..palette::GRAY_400
    }))
}

fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let text_color = if status == button::Status::Disabled {
        Color {
            a: opacity::OVERLAY_MEDIUM,
            ..base.text
        }
    } else {
        base.text
    };

    button::Style {
        background: hover_fill(status),
        text_color,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

fn action_button_style(theme: &Theme, status: button::Status, accent: Color) -> button::Style {
    let base = theme.extended_palette().background.base;

    button::Style {
        background: hover_fill(status),
        text_color: base.text,
        border: Border {
            color: accent,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Theme toggle button shown in the navigation bar.
//!
//! The button displays the icon of the mode a press would switch to (sun
//! while dark, moon while light). The mode itself lives in the application
//! root; this component only reports the toggle request upward.

use crate::ui::design_tokens::{radius, sizing, spacing};
use crate::ui::icons;
use crate::ui::theming::ThemeMode;
use iced::widget::button;
use iced::{Border, Element, Theme};

/// Contextual data needed to render the toggle.
pub struct ViewContext {
    pub mode: ThemeMode,
}

/// Messages emitted by the toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Toggle,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Toggled,
}

/// Process a toggle message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::Toggle => Event::Toggled,
    }
}

/// Render the toggle as a pill-shaped icon button.
pub fn view<'a>(ctx: ViewContext) -> Element<'a, Message> {
    let icon = if ctx.mode.is_dark() {
        icons::sized(icons::sun(), sizing::ICON_SM)
    } else {
        icons::sized(icons::moon(), sizing::ICON_SM)
    };

    button(icon)
        .on_press(Message::Toggle)
        .padding(spacing::XS)
        .style(toggle_style)
        .into()
}

fn toggle_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette.primary.strong.color,
        _ => palette.primary.base.color,
    };

    button::Style {
        background: Some(background.into()),
        text_color: palette.primary.base.text,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_message_emits_toggled_event() {
        assert!(matches!(update(Message::Toggle), Event::Toggled));
    }

    #[test]
    fn toggle_view_renders_in_both_modes() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            let _element = view(ViewContext { mode });
        }
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Navigation bar with a hamburger disclosure panel.
//!
//! The top bar carries the wordmark, the hamburger button, and the theme
//! toggle; the toggle stays visible whether or not the panel is open. The
//! panel lists the screen links and the quote call-to-action, and every one
//! of them closes the panel as part of the same update.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theme_toggle;
use crate::ui::theming::ThemeMode;
use iced::alignment::Vertical;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Border, Element, Length, Theme};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub menu_open: bool,
    pub active_screen: Screen,
    pub theme_mode: ThemeMode,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    Navigate(Screen),
    RequestQuote,
    ThemeToggle(theme_toggle::Message),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(Screen),
    RequestQuote,
    ToggleTheme,
}

/// Process a navbar message and return the corresponding event.
///
/// Activating a link or the call-to-action closes the panel as a side
/// effect, in the same transition.
#[must_use]
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::CloseMenu => {
            *menu_open = false;
            Event::None
        }
        Message::Navigate(screen) => {
            *menu_open = false;
            Event::Navigate(screen)
        }
        Message::RequestQuote => {
            *menu_open = false;
            Event::RequestQuote
        }
        Message::ThemeToggle(message) => {
            let theme_toggle::Event::Toggled = theme_toggle::update(message);
            Event::ToggleTheme
        }
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);

    let top_bar = build_top_bar(&ctx);
    content = content.push(top_bar);

    if ctx.menu_open {
        let panel = build_disclosure_panel(&ctx);
        content = content.push(panel);
    }

    content.into()
}

/// Build the top bar with the hamburger button, wordmark, and theme toggle.
fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let menu_icon = if ctx.menu_open {
        icons::close()
    } else {
        icons::menu()
    };
    let menu_button = button(icons::sized(menu_icon, sizing::ICON_MD))
        .on_press(Message::ToggleMenu)
        .padding(spacing::XS);

    let wordmark = Text::new(ctx.i18n.tr("window-title")).size(typography::TITLE_MD);

    let toggle = theme_toggle::view(theme_toggle::ViewContext {
        mode: ctx.theme_mode,
    })
    .map(Message::ThemeToggle);

    let row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(menu_button)
        .push(Container::new(wordmark).width(Length::Fill))
        .push(toggle);

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::top_bar)
        .into()
}

/// Build the disclosure panel with the screen links and the quote CTA.
fn build_disclosure_panel<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let links = [
        (Screen::Home, "nav-home"),
        (Screen::Products, "nav-products"),
        (Screen::About, "nav-about"),
        (Screen::Contact, "nav-contact"),
    ];

    let mut column = Column::new().spacing(spacing::XXS);
    for (screen, key) in links {
        column = column.push(build_link(
            ctx.i18n.tr(key),
            screen == ctx.active_screen,
            Message::Navigate(screen),
        ));
    }

    let cta = button(Text::new(ctx.i18n.tr("nav-quote-button")).size(typography::BODY_LG))
        .on_press(Message::RequestQuote)
        .padding([spacing::SM, spacing::LG])
        .width(Length::Fill)
        .style(styles::button::primary);

    column = column.push(Container::new(cta).padding([spacing::SM, 0.0]));

    Container::new(column)
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(styles::container::disclosure_panel)
        .into()
}

/// Build a single navigation link.
fn build_link<'a>(label: String, active: bool, message: Message) -> Element<'a, Message> {
    let text = Text::new(label).size(typography::BODY_LG);

    button(text)
        .on_press(message)
        .padding([spacing::XS, spacing::SM])
        .width(Length::Fill)
        .style(move |theme, status| link_style(theme, status, active))
        .into()
}

/// Style function for navigation links.
fn link_style(theme: &Theme, status: button::Status, active: bool) -> button::Style {
    let palette = theme.extended_palette();

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(palette.background.strong.color.into()),
            text_color: palette.background.base.text,
            border: Border {
                radius: crate::ui::design_tokens::radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        _ => button::Style {
            background: None,
            text_color: if active {
                palette.primary.strong.color
            } else {
                palette.background.base.text
            },
            border: Border::default(),
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn toggle_menu_changes_state() {
        let mut menu_open = false;
        let event = update(Message::ToggleMenu, &mut menu_open);
        assert!(menu_open);
        assert!(matches!(event, Event::None));

        let event = update(Message::ToggleMenu, &mut menu_open);
        assert!(!menu_open);
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn navigation_closes_menu_and_emits_event() {
        let mut menu_open = true;
        let event = update(Message::Navigate(Screen::Products), &mut menu_open);
        assert!(!menu_open);
        assert!(matches!(event, Event::Navigate(Screen::Products)));
    }

    #[test]
    fn quote_cta_closes_menu_and_emits_event() {
        let mut menu_open = true;
        let event = update(Message::RequestQuote, &mut menu_open);
        assert!(!menu_open);
        assert!(matches!(event, Event::RequestQuote));
    }

    #[test]
    fn theme_toggle_leaves_menu_alone() {
        let mut menu_open = true;
        let event = update(
            Message::ThemeToggle(theme_toggle::Message::Toggle),
            &mut menu_open,
        );
        assert!(menu_open);
        assert!(matches!(event, Event::ToggleTheme));
    }

    #[test]
    fn navbar_view_renders() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            menu_open: false,
            active_screen: Screen::Home,
            theme_mode: ThemeMode::Dark,
        };
        let _element = view(ctx);
    }

    #[test]
    fn navbar_view_renders_with_menu_open() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            menu_open: true,
            active_screen: Screen::Products,
            theme_mode: ThemeMode::Light,
        };
        let _element = view(ctx);
    }
}

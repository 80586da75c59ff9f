// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the navbar, the active screen, and the overlay layers (detail
//! modal, toasts) as a stack. While the modal layer is present it is opaque
//! to the page below it, which is what suspends background scrolling.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::hero::{self, ViewContext as HeroViewContext};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications;
use crate::ui::product_gallery::{self, ViewContext as GalleryViewContext};
use crate::ui::product_modal;
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::alignment::Vertical;
use iced::widget::{button, scrollable, Column, Container, Row, Stack, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub theme_mode: ThemeMode,
    pub menu_open: bool,
    pub hero: &'a hero::State,
    pub gallery: &'a product_gallery::State,
    pub notifications: &'a notifications::Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        menu_open: ctx.menu_open,
        active_screen: ctx.screen,
        theme_mode: ctx.theme_mode,
    })
    .map(Message::Navbar);

    let screen_content: Element<'_, Message> = match ctx.screen {
        Screen::Home => view_home(&ctx),
        Screen::Products => view_products(&ctx),
        Screen::About => view_section(ctx.i18n, "about-title", "about-body"),
        Screen::Contact => view_contact(ctx.i18n),
    };

    let page = Column::new().push(navbar_view).push(
        Container::new(screen_content)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    let mut stack = Stack::new().push(page);

    // The modal overlays everything, navbar included, and swallows events
    // aimed below it.
    if let (Some(modal), Some(product)) = (ctx.gallery.modal(), ctx.gallery.selected_product()) {
        stack = stack.push(
            product_modal::view(product_modal::ViewContext {
                i18n: ctx.i18n,
                product,
                image_index: modal.image_index(),
            })
            .map(|message| Message::Gallery(product_gallery::Message::Modal(message))),
        );
    }

    if ctx.notifications.has_notifications() {
        stack = stack.push(ctx.notifications.view(ctx.i18n).map(Message::Notification));
    }

    stack.into()
}

/// Landing: hero banner followed by the product section.
fn view_home<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let hero_view = hero::view(HeroViewContext {
        i18n: ctx.i18n,
        state: ctx.hero,
    })
    .map(Message::Hero);

    let content = Column::new()
        .spacing(spacing::XL)
        .push(hero_view)
        .push(products_section(ctx));

    scrollable(content).into()
}

/// Direct access to the product section without the hero.
fn view_products<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    scrollable(products_section(ctx)).into()
}

fn products_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let gallery_view = product_gallery::view(GalleryViewContext {
        i18n: ctx.i18n,
        state: ctx.gallery,
    })
    .map(Message::Gallery);

    Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .push(Text::new(ctx.i18n.tr("gallery-title")).size(typography::TITLE_LG))
        .push(gallery_view)
        .into()
}

/// Static localized screen (About).
fn view_section<'a>(i18n: &'a I18n, title_key: &str, body_key: &str) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .push(Text::new(i18n.tr(title_key)).size(typography::TITLE_LG))
        .push(Text::new(i18n.tr(body_key)).size(typography::BODY_LG));

    scrollable(content).into()
}

/// Contact screen: static copy plus the site-wide quote CTA.
fn view_contact(i18n: &I18n) -> Element<'_, Message> {
    let cta = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(Text::new(i18n.tr("nav-quote-button")).size(typography::BODY_LG)),
    )
    .on_press(Message::QuoteRequested)
    .padding([spacing::SM, spacing::LG])
    .style(styles::button::primary);

    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .push(Text::new(i18n.tr("contact-title")).size(typography::TITLE_LG))
        .push(Text::new(i18n.tr("contact-body")).size(typography::BODY_LG))
        .push(cta);

    scrollable(content).into()
}

// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the main `handle_message` function and the
//! specialized handlers for the navbar, the gallery, and outbound links.
//! The scroll-lock flag is toggled here, in the same arms that create and
//! drop the modal state, so it can never drift from the modal's lifetime.

use super::{launcher, persistence, Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::hero;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::product_gallery::{self, Event as GalleryEvent};
use crate::ui::product_modal;
use crate::ui::theming::ThemeMode;
use iced::Task;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub screen: &'a mut Screen,
    pub theme_mode: &'a mut ThemeMode,
    pub menu_open: &'a mut bool,
    pub hero: &'a mut hero::State,
    pub gallery: &'a mut product_gallery::State,
    pub scroll_locked: &'a mut bool,
    pub quote_url: &'a str,
    pub notifications: &'a mut notifications::Manager,
}

/// Routes a top-level message to the owning component and applies the
/// resulting events to app state.
pub fn handle_message(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Navbar(message) => handle_navbar_message(ctx, message),
        Message::Hero(message) => {
            hero::update(ctx.hero, message);
            Task::none()
        }
        Message::Gallery(message) => handle_gallery_message(ctx, message),
        Message::Notification(message) => {
            ctx.notifications.update(message);
            Task::none()
        }
        Message::QuoteRequested => {
            let url = ctx.quote_url.to_string();
            open_external(ctx, &url)
        }
        Message::EscapePressed => {
            // The subscription only emits this while the modal is mounted,
            // but a message already in flight when it closed must still be
            // harmless.
            if ctx.gallery.is_modal_open() {
                handle_gallery_message(
                    ctx,
                    product_gallery::Message::Modal(product_modal::Message::CloseRequested),
                )
            } else {
                Task::none()
            }
        }
        Message::WindowResized(size) => {
            ctx.hero.set_viewport_width(size.width);
            ctx.gallery.set_viewport_width(size.width);
            Task::none()
        }
        Message::Tick(now) => {
            ctx.notifications.tick(now);
            Task::none()
        }
    }
}

/// Handles navbar messages and the events they raise.
fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match navbar::update(message, ctx.menu_open) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::Navigate(screen) => {
            *ctx.screen = screen;
            Task::none()
        }
        NavbarEvent::RequestQuote => {
            let url = ctx.quote_url.to_string();
            open_external(ctx, &url)
        }
        NavbarEvent::ToggleTheme => {
            *ctx.theme_mode = ctx.theme_mode.toggle();
            if let Some(key) = persistence::persist_preferences(*ctx.theme_mode, ctx.i18n) {
                ctx.notifications.push(Notification::warning(key));
            }
            Task::none()
        }
    }
}

/// Handles gallery messages; modal open/close keeps the scroll-lock flag in
/// step within the same transition.
fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: product_gallery::Message,
) -> Task<Message> {
    match product_gallery::update(ctx.gallery, message) {
        GalleryEvent::None => Task::none(),
        GalleryEvent::ModalOpened => {
            *ctx.scroll_locked = true;
            Task::none()
        }
        GalleryEvent::ModalClosed => {
            *ctx.scroll_locked = false;
            Task::none()
        }
        GalleryEvent::RequestQuote(url) => open_external(ctx, &url),
    }
}

/// Opens an outbound link, surfacing a failure as a warning toast.
fn open_external(ctx: &mut UpdateContext<'_>, url: &str) -> Task<Message> {
    if let Err(error) = launcher::open_in_browser(url) {
        eprintln!("Failed to open link: {:?}", error);
        ctx.notifications
            .push(Notification::warning("notification-link-open-error"));
    }
    Task::none()
}

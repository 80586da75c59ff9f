// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Subscriptions are re-derived from state on every cycle, so a listener
//! exists exactly while the state that wants it does: the Escape listener
//! only while the detail modal is up, the autoplay timers only while their
//! carousel wants to advance, the toast tick only while toasts are visible.

use super::Message;
use crate::ui::carousel;
use crate::ui::hero;
use crate::ui::product_gallery;
use iced::{event, keyboard, time, window, Subscription};
use std::time::Duration;

/// Creates the native event subscription.
///
/// Window resizes are always routed so carousel breakpoints stay current.
/// The keyboard listener for Escape is only installed while the detail
/// modal is mounted; once the modal closes the next subscription cycle
/// drops it, so no stale listener can fire.
pub fn create_event_subscription(modal_open: bool) -> Subscription<Message> {
    if modal_open {
        event::listen_with(|event, status, _window| match &event {
            event::Event::Window(window::Event::Resized(size)) => {
                Some(Message::WindowResized(*size))
            }
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            }) => match status {
                event::Status::Ignored => Some(Message::EscapePressed),
                event::Status::Captured => None,
            },
            _ => None,
        })
    } else {
        event::listen_with(|event, _status, _window| match &event {
            event::Event::Window(window::Event::Resized(size)) => {
                Some(Message::WindowResized(*size))
            }
            _ => None,
        })
    }
}

/// Creates the autoplay timers for the hero banner and the gallery.
///
/// A carousel whose driver is paused (hover) or stopped (interaction)
/// contributes no timer at all.
pub fn create_autoplay_subscription(
    hero: &hero::State,
    gallery: &product_gallery::State,
) -> Subscription<Message> {
    let mut subscriptions = Vec::new();

    if let Some(interval) = hero.carousel().autoplay_interval() {
        subscriptions.push(time::every(interval).map(|_| {
            Message::Hero(hero::Message::Carousel(carousel::Message::AutoplayTick))
        }));
    }
    if let Some(interval) = gallery.carousel().autoplay_interval() {
        subscriptions.push(time::every(interval).map(|_| {
            Message::Gallery(product_gallery::Message::Carousel(
                carousel::Message::AutoplayTick,
            ))
        }));
    }

    Subscription::batch(subscriptions)
}

/// Creates a periodic tick subscription for toast auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(500)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Non-blocking toasts in the bottom-right corner, used for degradations the
//! user should know about (unreadable settings, a catalog that failed to
//! load, a link that would not open). Warnings auto-dismiss after a few
//! seconds; errors stay until dismissed.
//!
//! Messages carry i18n keys, not text; keys resolve at render time so toasts
//! survive a locale switch.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, radius, sizing, spacing, typography};
use crate::ui::icons;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, Column, Container, Row, Text};
use iced::{Border, Element, Length, Theme};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Maximum number of toasts visible at once.
const MAX_VISIBLE: usize = 3;

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Severity level determines display duration and visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Informational message (3s duration).
    #[default]
    Info,
    /// Degradation that doesn't block the showcase (5s duration).
    Warning,
    /// Error requiring attention (manual dismiss).
    Error,
}

impl Severity {
    fn accent(self) -> iced::Color {
        use crate::ui::design_tokens::palette;
        match self {
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Auto-dismiss duration; `None` means manual dismiss.
    fn auto_dismiss(self) -> Option<Duration> {
        match self {
            Severity::Info => Some(Duration::from_secs(3)),
            Severity::Warning => Some(Duration::from_secs(5)),
            Severity::Error => None,
        }
    }
}

/// A toast to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message_key: String,
    created_at: Instant,
}

impl Notification {
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::next(),
            severity,
            message_key: message_key.into(),
            created_at: Instant::now(),
        }
    }

    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    pub fn id(&self) -> NotificationId {
        self.id
    }

    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    fn expired_at(&self, now: Instant) -> bool {
        self.severity
            .auto_dismiss()
            .is_some_and(|ttl| now.duration_since(self.created_at) >= ttl)
    }
}

/// Messages for notification state changes.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
}

/// Manages the toast queue and visible toasts.
#[derive(Debug, Default)]
pub struct Manager {
    /// Currently visible toasts (newest first).
    visible: VecDeque<Notification>,
    /// Queued toasts waiting for space.
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a toast, queueing it when `MAX_VISIBLE` are already showing.
    pub fn push(&mut self, notification: Notification) {
        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Dismisses a toast by ID. Returns `true` if it was found.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }
        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }
        false
    }

    /// Drops expired toasts. Driven by the periodic tick subscription, which
    /// only runs while toasts exist.
    pub fn tick(&mut self, now: Instant) {
        let expired: Vec<NotificationId> = self
            .visible
            .iter()
            .filter(|n| n.expired_at(now))
            .map(Notification::id)
            .collect();
        for id in expired {
            self.dismiss(id);
        }
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(id);
            }
        }
    }

    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            match self.queue.pop_front() {
                Some(notification) => self.visible.push_front(notification),
                None => break,
            }
        }
    }

    /// Renders the visible toasts anchored to the bottom-right corner.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let mut column = Column::new().spacing(spacing::XS);
        for notification in &self.visible {
            column = column.push(toast(notification, i18n));
        }

        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Right)
            .align_y(Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }
}

fn toast<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
    let accent = notification.severity.accent();

    let message = Text::new(i18n.tr(notification.message_key()))
        .size(typography::BODY)
        .width(Length::Fill);

    let dismiss = button(icons::sized(icons::close(), sizing::ICON_SM))
        .on_press(Message::Dismiss(notification.id()))
        .padding(spacing::XXS)
        .style(|_theme: &Theme, _status| button::Style::default());

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(message)
        .push(dismiss);

    Container::new(row)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| {
            let palette = theme.extended_palette();
            container::Style {
                background: Some(palette.background.weak.color.into()),
                text_color: Some(palette.background.base.text),
                border: Border {
                    color: accent,
                    width: border::WIDTH_MD,
                    radius: radius::MD.into(),
                },
                ..Default::default()
            }
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_shows_up_to_max_visible() {
        let mut manager = Manager::new();
        for _ in 0..5 {
            manager.push(Notification::warning("notification-config-load-error"));
        }
        assert_eq!(manager.visible().count(), MAX_VISIBLE);
        assert!(manager.has_notifications());
    }

    #[test]
    fn dismiss_promotes_from_queue() {
        let mut manager = Manager::new();
        for _ in 0..4 {
            manager.push(Notification::warning("notification-config-load-error"));
        }
        let first = manager.visible().next().expect("visible toast").id();
        assert!(manager.dismiss(first));
        assert_eq!(manager.visible().count(), MAX_VISIBLE);
    }

    #[test]
    fn dismiss_unknown_id_is_a_no_op() {
        let mut manager = Manager::new();
        manager.push(Notification::info("notification-config-load-error"));
        let bogus = NotificationId::next();
        assert!(!manager.dismiss(bogus));
        assert_eq!(manager.visible().count(), 1);
    }

    #[test]
    fn tick_expires_warnings_but_not_errors() {
        let mut manager = Manager::new();
        manager.push(Notification::warning("notification-config-load-error"));
        manager.push(Notification::error("notification-catalog-load-error"));

        let later = Instant::now() + Duration::from_secs(30);
        manager.tick(later);

        let remaining: Vec<&str> = manager.visible().map(Notification::message_key).collect();
        assert_eq!(remaining, vec!["notification-catalog-load-error"]);
    }

    #[test]
    fn toast_view_renders() {
        let mut manager = Manager::new();
        manager.push(Notification::warning("notification-config-load-error"));
        let i18n = I18n::default();
        let _element = manager.view(&i18n);
    }
}

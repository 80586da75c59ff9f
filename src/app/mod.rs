// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the showcase screens.
//!
//! The `App` struct wires together the domains (catalog content, carousels,
//! modal selection, localization, theming) and translates messages into side
//! effects like config persistence or browser launches. Policy decisions
//! (window sizing, persistence format, scroll-lock bookkeeping) stay close
//! to the main update loop so user-facing behavior is easy to audit.

pub mod config;
mod launcher;
mod message;
pub mod paths;
mod persistence;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::catalog::{self, Catalog};
use crate::i18n::fluent::I18n;
use crate::ui::carousel;
use crate::ui::hero;
use crate::ui::notifications;
use crate::ui::product_gallery;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::Path;
use std::time::Duration;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Root Iced application state that bridges UI components, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    theme_mode: ThemeMode,
    /// Whether the hamburger disclosure panel is open.
    menu_open: bool,
    hero: hero::State,
    gallery: product_gallery::State,
    /// Site-wide quote link used by the navigation and contact CTAs.
    quote_url: String,
    /// Background scrolling is suspended exactly while the modal is up.
    scroll_locked: bool,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("modal_open", &self.gallery.is_modal_open())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(mut flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_override(flags.config_dir.take());

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let config = config::Config::default();
        Self {
            i18n: I18n::default(),
            screen: Screen::Home,
            theme_mode: ThemeMode::default(),
            menu_open: false,
            hero: hero::State::new(Vec::new(), hero_options(&config)),
            gallery: product_gallery::State::new(Vec::new(), gallery_options(&config)),
            quote_url: String::new(),
            scroll_locked: false,
            notifications: notifications::Manager::new(),
        }
    }
}

/// Hero banner layout: one slide at a time, wrap-around, autoplay that
/// survives manual navigation.
fn hero_options(config: &config::Config) -> carousel::Options {
    let interval_secs = config
        .showcase
        .hero_interval_secs
        .unwrap_or(config::DEFAULT_HERO_INTERVAL_SECS);

    carousel::Options {
        align: carousel::Align::Center,
        loop_around: true,
        per_view: carousel::PerView::SINGLE,
        autoplay: Some(carousel::Autoplay {
            interval: Duration::from_secs(config::clamp_autoplay_interval(interval_secs)),
            resume_after_interaction: true,
        }),
    }
}

/// Gallery layout: responsive card strip; autoplay is off by default and,
/// when enabled, stops for good once the user navigates by hand.
fn gallery_options(config: &config::Config) -> carousel::Options {
    let autoplay = config
        .showcase
        .gallery_autoplay
        .unwrap_or(config::DEFAULT_GALLERY_AUTOPLAY)
        .then(|| {
            let interval_secs = config
                .showcase
                .gallery_interval_secs
                .unwrap_or(config::DEFAULT_GALLERY_INTERVAL_SECS);
            carousel::Autoplay {
                interval: Duration::from_secs(config::clamp_autoplay_interval(interval_secs)),
                resume_after_interaction: false,
            }
        });

    carousel::Options {
        align: carousel::Align::Start,
        loop_around: config
            .showcase
            .gallery_loop
            .unwrap_or(config::DEFAULT_GALLERY_LOOP),
        per_view: carousel::PerView::CARDS,
        autoplay,
    }
}

impl App {
    /// Initializes application state from persisted preferences and the
    /// catalog named by `Flags`.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };

        app.theme_mode = config.general.theme_mode;

        let catalog = match catalog::load(flags.catalog_dir.as_deref().map(Path::new)) {
            Ok(catalog) => catalog,
            Err(error) => {
                eprintln!("Failed to load catalog: {:?}", error);
                app.notifications.push(notifications::Notification::error(
                    "notification-catalog-load-error",
                ));
                Catalog::empty()
            }
        };

        let Catalog {
            quote_url,
            slides,
            products,
        } = catalog;
        app.hero = hero::State::new(slides, hero_options(&config));
        app.gallery = product_gallery::State::new(products, gallery_options(&config));
        app.quote_url = quote_url;

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        match self.gallery.selected_product() {
            Some(product) => format!("{} - {}", product.name, app_name),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        match self.theme_mode {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.gallery.is_modal_open());
        let autoplay_sub = subscription::create_autoplay_subscription(&self.hero, &self.gallery);
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());

        Subscription::batch([event_sub, autoplay_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            screen: &mut self.screen,
            theme_mode: &mut self.theme_mode,
            menu_open: &mut self.menu_open,
            hero: &mut self.hero,
            gallery: &mut self.gallery,
            scroll_locked: &mut self.scroll_locked,
            quote_url: &self.quote_url,
            notifications: &mut self.notifications,
        };
        update::handle_message(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            theme_mode: self.theme_mode,
            menu_open: self.menu_open,
            hero: &self.hero,
            gallery: &self.gallery,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::ui::navbar;
    use crate::ui::product_modal;
    use crate::ui::theme_toggle;
    use std::path::PathBuf;

    fn sample_products(count: usize) -> Vec<Product> {
        (0..count)
            .map(|i| Product {
                id: format!("product-{i}"),
                name: format!("Product {i}"),
                description: "A product.".into(),
                recommendation: "Use gently.".into(),
                badge: None,
                images: vec![
                    PathBuf::from(format!("images/p{i}-1.jpg")),
                    PathBuf::from(format!("images/p{i}-2.jpg")),
                    PathBuf::from(format!("images/p{i}-3.jpg")),
                ],
                quote_url: format!("https://example.test/quote/{i}"),
            })
            .collect()
    }

    fn test_app() -> App {
        let config = config::Config::default();
        let mut app = App::default();
        app.gallery = product_gallery::State::new(sample_products(3), gallery_options(&config));
        app.quote_url = "https://example.test/quote".into();
        app
    }

    fn open_modal(app: &mut App, index: usize) {
        let _ = app.update(Message::Gallery(product_gallery::Message::CardActivated(
            index,
        )));
    }

    #[test]
    fn default_theme_is_dark() {
        let app = App::default();
        assert_eq!(app.theme_mode, ThemeMode::Dark);
        assert!(matches!(app.theme(), Theme::Dark));
    }

    #[test]
    fn theme_toggle_twice_returns_to_original() {
        let mut app = test_app();
        let original = app.theme_mode;

        let toggle = Message::Navbar(navbar::Message::ThemeToggle(theme_toggle::Message::Toggle));
        let _ = app.update(toggle.clone());
        assert_ne!(app.theme_mode, original);

        let _ = app.update(toggle);
        assert_eq!(app.theme_mode, original);
    }

    #[test]
    fn opening_modal_locks_scroll_and_closing_restores_it() {
        let mut app = test_app();
        assert!(!app.scroll_locked);

        open_modal(&mut app, 1);
        assert!(app.scroll_locked);
        assert!(app.gallery.is_modal_open());

        let _ = app.update(Message::Gallery(product_gallery::Message::Modal(
            product_modal::Message::CloseRequested,
        )));
        assert!(!app.scroll_locked);
        assert!(!app.gallery.is_modal_open());
    }

    #[test]
    fn backdrop_press_restores_scroll_lock() {
        let mut app = test_app();
        open_modal(&mut app, 0);
        assert!(app.scroll_locked);

        let _ = app.update(Message::Gallery(product_gallery::Message::Modal(
            product_modal::Message::BackdropPressed,
        )));
        assert!(!app.scroll_locked);
    }

    #[test]
    fn escape_closes_modal_and_restores_scroll_lock() {
        let mut app = test_app();
        open_modal(&mut app, 2);
        assert!(app.scroll_locked);

        let _ = app.update(Message::EscapePressed);
        assert!(!app.scroll_locked);
        assert!(!app.gallery.is_modal_open());
    }

    #[test]
    fn escape_without_modal_is_a_no_op() {
        let mut app = test_app();
        let _ = app.update(Message::EscapePressed);
        assert!(!app.scroll_locked);
        assert!(!app.gallery.is_modal_open());
    }

    #[test]
    fn navigation_switches_screen_and_closes_menu() {
        let mut app = test_app();
        let _ = app.update(Message::Navbar(navbar::Message::ToggleMenu));
        assert!(app.menu_open);

        let _ = app.update(Message::Navbar(navbar::Message::Navigate(Screen::Contact)));
        assert_eq!(app.screen, Screen::Contact);
        assert!(!app.menu_open);
    }

    #[test]
    fn window_resize_reflows_the_gallery() {
        let mut app = test_app();
        let _ = app.update(Message::WindowResized(iced::Size::new(500.0, 800.0)));
        assert_eq!(app.gallery.carousel().per_view(), 1);

        let _ = app.update(Message::WindowResized(iced::Size::new(1280.0, 800.0)));
        assert_eq!(app.gallery.carousel().per_view(), 3);
    }

    #[test]
    fn quote_request_from_modal_keeps_it_open() {
        let mut app = test_app();
        open_modal(&mut app, 1);

        let _ = app.update(Message::Gallery(product_gallery::Message::Modal(
            product_modal::Message::RequestQuote,
        )));
        assert!(app.gallery.is_modal_open());
        assert!(app.scroll_locked);
        // The launcher is stubbed in tests; success raises no toast.
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn empty_quote_url_surfaces_a_warning() {
        let mut app = test_app();
        app.quote_url = String::new();

        let _ = app.update(Message::QuoteRequested);
        assert!(app.notifications.has_notifications());
    }

    #[test]
    fn title_includes_focused_product() {
        let mut app = test_app();
        assert_eq!(app.title(), app.i18n.tr("window-title"));

        open_modal(&mut app, 0);
        assert!(app.title().starts_with("Product 0"));
    }

    #[test]
    fn switching_product_resets_the_image_index() {
        let mut app = test_app();
        open_modal(&mut app, 0);
        let _ = app.update(Message::Gallery(product_gallery::Message::Modal(
            product_modal::Message::NextImage,
        )));
        assert_eq!(
            app.gallery.modal().map(product_modal::State::image_index),
            Some(1)
        );

        let _ = app.update(Message::EscapePressed);
        open_modal(&mut app, 1);
        assert_eq!(
            app.gallery.modal().map(product_modal::State::image_index),
            Some(0)
        );
    }

    #[test]
    fn app_view_renders_on_every_screen() {
        let mut app = test_app();
        for screen in [Screen::Home, Screen::Products, Screen::About, Screen::Contact] {
            app.screen = screen;
            let _element = app.view();
        }
    }

    #[test]
    fn app_view_renders_with_modal_open() {
        let mut app = test_app();
        open_modal(&mut app, 0);
        let _element = app.view();
    }
}

// SPDX-License-Identifier: MPL-2.0
use std::fs;
use tempfile::tempdir;
use vitrina::app::config::{self, Config};
use vitrina::catalog;
use vitrina::i18n::fluent::I18n;
use vitrina::ui::carousel::{self, Carousel};
use vitrina::ui::product_gallery::{self, Event};
use vitrina::ui::product_modal;
use vitrina::ui::theming::ThemeMode;

#[test]
fn theme_preference_round_trips_through_config_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let mut cfg = Config::default();
    assert_eq!(cfg.general.theme_mode, ThemeMode::Dark);

    // Toggle and persist, as the app does on every theme change.
    cfg.general.theme_mode = cfg.general.theme_mode.toggle();
    config::save_to_path(&cfg, &config_path).expect("Failed to save config");

    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    assert_eq!(loaded.general.theme_mode, ThemeMode::Light);

    // Toggling twice restores both the in-memory and persisted value.
    cfg.general.theme_mode = cfg.general.theme_mode.toggle();
    config::save_to_path(&cfg, &config_path).expect("Failed to save config");
    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let mut cfg = Config::default();
    cfg.general.language = Some("en-US".to_string());
    config::save_to_path(&cfg, &config_path).expect("Failed to write initial config file");

    let loaded = config::load_from_path(&config_path).expect("Failed to load config from path");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("nav-products"), "Products");

    cfg.general.language = Some("es".to_string());
    config::save_to_path(&cfg, &config_path).expect("Failed to write spanish config file");

    let loaded = config::load_from_path(&config_path).expect("Failed to load config from path");
    let i18n_es = I18n::new(None, &loaded);
    assert_eq!(i18n_es.current_locale().to_string(), "es");
    assert_eq!(i18n_es.tr("nav-products"), "Productos");
}

#[test]
fn catalog_drives_the_gallery_end_to_end() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(
        dir.path().join("catalog.toml"),
        r#"
            quote_url = "https://example.test/quote"

            [[products]]
            id = "vase"
            name = "Vase"
            description = "A vase."
            recommendation = "Handle with care."
            images = ["images/a.jpg", "images/b.jpg", "images/c.jpg"]
            quote_url = "https://example.test/quote/vase"

            [[products]]
            id = "bowl"
            name = "Bowl"
            description = "A bowl."
            recommendation = "Top rack only."
            images = ["images/d.jpg"]
            quote_url = "https://example.test/quote/bowl"
        "#,
    )
    .expect("Failed to write catalog");

    let catalog = catalog::load(Some(dir.path())).expect("Catalog should load");
    let mut gallery = product_gallery::State::new(
        catalog.products,
        carousel::Options {
            per_view: carousel::PerView::CARDS,
            ..carousel::Options::default()
        },
    );

    // Open the first product and page through its images: 0 -> 1 -> 2 -> 1.
    let event = product_gallery::update(&mut gallery, product_gallery::Message::CardActivated(0));
    assert_eq!(event, Event::ModalOpened);

    for _ in 0..2 {
        let _ = product_gallery::update(
            &mut gallery,
            product_gallery::Message::Modal(product_modal::Message::NextImage),
        );
    }
    let _ = product_gallery::update(
        &mut gallery,
        product_gallery::Message::Modal(product_modal::Message::PreviousImage),
    );
    assert_eq!(
        gallery.modal().map(product_modal::State::image_index),
        Some(1)
    );

    // Close, reopen the other product, and the pager is back at zero.
    let event = product_gallery::update(
        &mut gallery,
        product_gallery::Message::Modal(product_modal::Message::CloseRequested),
    );
    assert_eq!(event, Event::ModalClosed);

    let _ = product_gallery::update(&mut gallery, product_gallery::Message::CardActivated(1));
    assert_eq!(
        gallery.modal().map(product_modal::State::image_index),
        Some(0)
    );
    assert_eq!(
        gallery.selected_product().map(|p| p.id.as_str()),
        Some("bowl")
    );
}

#[test]
fn bounded_carousel_boundary_flags_across_all_positions() {
    let mut carousel = Carousel::new(4, carousel::Options::default());

    // First position: only forward navigation is possible.
    assert!(!carousel.can_scroll_previous());
    assert!(carousel.can_scroll_next());

    // Interior positions: both directions enabled.
    carousel.scroll_next();
    assert!(carousel.can_scroll_previous() && carousel.can_scroll_next());
    carousel.scroll_next();
    assert!(carousel.can_scroll_previous() && carousel.can_scroll_next());

    // Last position: only backward navigation is possible.
    carousel.scroll_next();
    assert!(carousel.can_scroll_previous());
    assert!(!carousel.can_scroll_next());
}

#[test]
fn loop_carousel_is_always_navigable() {
    let mut carousel = Carousel::new(
        3,
        carousel::Options {
            loop_around: true,
            ..carousel::Options::default()
        },
    );

    for _ in 0..6 {
        assert!(carousel.can_scroll_previous());
        assert!(carousel.can_scroll_next());
        carousel.scroll_next();
    }
    assert_eq!(carousel.index(), 0);
}

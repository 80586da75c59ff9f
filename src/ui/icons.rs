// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for inline SVG icons.
//!
//! Icons are small stroke-based SVGs embedded as byte literals and rendered
//! through the `svg` widget, which recolors `currentColor` from the theme so
//! a single source works in both light and dark mode. Handles are cached
//! with `OnceLock`.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance, not the
//! action context (e.g., `chevron_left` not `previous_image`).

use iced::widget::svg::{Handle, Svg};
use iced::Length;
use std::sync::OnceLock;

/// Macro to define an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $data:expr, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            let handle = HANDLE.get_or_init(|| Handle::from_memory($data));
            Svg::new(handle.clone())
        }
    };
}

macro_rules! icon_svg {
    ($body:literal) => {
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
            $body,
            "</svg>"
        )
        .as_bytes()
    };
}

define_icon!(
    menu,
    icon_svg!(r#"<line x1="4" y1="6" x2="20" y2="6"/><line x1="4" y1="12" x2="20" y2="12"/><line x1="4" y1="18" x2="20" y2="18"/>"#),
    "Menu icon: three horizontal bars (hamburger)."
);

define_icon!(
    close,
    icon_svg!(r#"<line x1="18" y1="6" x2="6" y2="18"/><line x1="6" y1="6" x2="18" y2="18"/>"#),
    "Close icon: diagonal cross."
);

define_icon!(
    chevron_left,
    icon_svg!(r#"<polyline points="15 18 9 12 15 6"/>"#),
    "Chevron pointing left."
);

define_icon!(
    chevron_right,
    icon_svg!(r#"<polyline points="9 18 15 12 9 6"/>"#),
    "Chevron pointing right."
);

define_icon!(
    arrow_left,
    icon_svg!(r#"<line x1="19" y1="12" x2="5" y2="12"/><polyline points="12 19 5 12 12 5"/>"#),
    "Arrow pointing left."
);

define_icon!(
    arrow_right,
    icon_svg!(r#"<line x1="5" y1="12" x2="19" y2="12"/><polyline points="12 5 19 12 12 19"/>"#),
    "Arrow pointing right."
);

define_icon!(
    sun,
    icon_svg!(r#"<circle cx="12" cy="12" r="4"/><line x1="12" y1="2" x2="12" y2="5"/><line x1="12" y1="19" x2="12" y2="22"/><line x1="2" y1="12" x2="5" y2="12"/><line x1="19" y1="12" x2="22" y2="12"/><line x1="4.9" y1="4.9" x2="7" y2="7"/><line x1="17" y1="17" x2="19.1" y2="19.1"/><line x1="4.9" y1="19.1" x2="7" y2="17"/><line x1="17" y1="7" x2="19.1" y2="4.9"/>"#),
    "Sun icon: circle with rays."
);

define_icon!(
    moon,
    icon_svg!(r#"<path d="M21 12.8A9 9 0 1 1 11.2 3 7 7 0 0 0 21 12.8z"/>"#),
    "Moon icon: crescent."
);

define_icon!(
    external_link,
    icon_svg!(r#"<path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"/><polyline points="15 3 21 3 21 9"/><line x1="10" y1="14" x2="21" y2="3"/>"#),
    "External link icon: box with outgoing arrow."
);

/// Resizes an icon to a square of `size` logical pixels.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

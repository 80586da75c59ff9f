// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::hero;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::product_gallery;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Hero(hero::Message),
    Gallery(product_gallery::Message),
    Notification(notifications::Message),
    /// The site-wide quote call-to-action (contact screen).
    QuoteRequested,
    /// Escape was pressed while the detail modal was up.
    EscapePressed,
    /// The window changed size; carousels re-resolve their breakpoints.
    WindowResized(iced::Size),
    /// Periodic tick for toast auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `es`, `en-US`).
    pub lang: Option<String>,
    /// Optional directory holding an external `catalog.toml`.
    pub catalog_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `VITRINA_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}

// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Localization uses the Fluent system: `.ftl` resources are embedded at
//! build time and the active locale is resolved from the CLI, the config
//! file, or the OS locale, in that order, falling back to `en-US`.

pub mod fluent;

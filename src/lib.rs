// SPDX-License-Identifier: MPL-2.0
//! `vitrina` is a product showcase application built with the Iced GUI
//! framework.
//!
//! It renders a catalog of products as a browsable gallery with a hero
//! banner, a focused detail view, light/dark theming persisted across
//! sessions, and internationalization with Fluent.

pub mod app;
pub mod catalog;
pub mod error;
pub mod i18n;
pub mod ui;

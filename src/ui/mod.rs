// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Components
//!
//! - [`hero`] - Full-width slide banner with captions and autoplay
//! - [`product_gallery`] - Card carousel that opens the detail modal
//! - [`product_modal`] - Focused product detail overlay with image paging
//! - [`navbar`] - Navigation bar with hamburger disclosure panel
//! - [`theme_toggle`] - Light/dark toggle hosted by the navbar
//!
//! # Shared Infrastructure
//!
//! - [`carousel`] - Viewport navigation state machine used by hero and gallery
//! - [`theming`] - Light/Dark theme mode management
//! - [`notifications`] - Toast notification system for user feedback
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`icons`] - Inline SVG icon rendering

pub mod carousel;
pub mod design_tokens;
pub mod hero;
pub mod icons;
pub mod navbar;
pub mod notifications;
pub mod product_gallery;
pub mod product_modal;
pub mod styles;
pub mod theme_toggle;
pub mod theming;

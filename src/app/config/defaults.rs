// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! Single source of truth for the tuning knobs of the showcase. Constants
//! are validated against each other at compile time.

/// Default seconds between automatic hero slide advances.
pub const DEFAULT_HERO_INTERVAL_SECS: u64 = 5;

/// Default seconds between automatic gallery advances (when enabled).
pub const DEFAULT_GALLERY_INTERVAL_SECS: u64 = 6;

/// Minimum allowed autoplay interval.
pub const MIN_AUTOPLAY_INTERVAL_SECS: u64 = 1;

/// Maximum allowed autoplay interval.
pub const MAX_AUTOPLAY_INTERVAL_SECS: u64 = 60;

/// Whether the product gallery advances by itself out of the box.
pub const DEFAULT_GALLERY_AUTOPLAY: bool = false;

/// Whether the product gallery wraps around at its ends.
pub const DEFAULT_GALLERY_LOOP: bool = true;

/// Ensures persisted intervals cannot request nonsensical timers.
pub fn clamp_autoplay_interval(secs: u64) -> u64 {
    secs.clamp(MIN_AUTOPLAY_INTERVAL_SECS, MAX_AUTOPLAY_INTERVAL_SECS)
}

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_AUTOPLAY_INTERVAL_SECS > 0);
    assert!(MAX_AUTOPLAY_INTERVAL_SECS > MIN_AUTOPLAY_INTERVAL_SECS);
    assert!(DEFAULT_HERO_INTERVAL_SECS >= MIN_AUTOPLAY_INTERVAL_SECS);
    assert!(DEFAULT_HERO_INTERVAL_SECS <= MAX_AUTOPLAY_INTERVAL_SECS);
    assert!(DEFAULT_GALLERY_INTERVAL_SECS >= MIN_AUTOPLAY_INTERVAL_SECS);
    assert!(DEFAULT_GALLERY_INTERVAL_SECS <= MAX_AUTOPLAY_INTERVAL_SECS);
};

// SPDX-License-Identifier: MPL-2.0
//! Carousel state machine shared by the hero banner and the product gallery.
//!
//! The carousel tracks the first visible item of a horizontal strip and keeps
//! its boundary flags consistent with that position after every transition.
//! Rendering lives with the components that embed it; this module only owns
//! navigation, wrap-around, breakpoint, and autoplay state.

use std::ops::Range;
use std::time::Duration;

/// Viewport widths at which the number of visible items changes.
pub mod breakpoints {
    /// Below this width a single item is shown.
    pub const COMPACT_MAX_WIDTH: f32 = 768.0;
    /// Below this width (and above compact) two items are shown.
    pub const MEDIUM_MAX_WIDTH: f32 = 1024.0;
}

/// Horizontal alignment of items inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Start,
    Center,
}

/// Items visible at once for each viewport class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PerView {
    pub compact: usize,
    pub medium: usize,
    pub wide: usize,
}

impl PerView {
    /// One item regardless of viewport width.
    pub const SINGLE: Self = Self {
        compact: 1,
        medium: 1,
        wide: 1,
    };

    /// Card layout: 1 / 2 / 3 items as the viewport widens.
    pub const CARDS: Self = Self {
        compact: 1,
        medium: 2,
        wide: 3,
    };

    /// Resolves the item count for a concrete viewport width.
    pub fn for_width(self, width: f32) -> usize {
        let count = if width < breakpoints::COMPACT_MAX_WIDTH {
            self.compact
        } else if width < breakpoints::MEDIUM_MAX_WIDTH {
            self.medium
        } else {
            self.wide
        };
        count.max(1)
    }
}

/// Autoplay driver configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Autoplay {
    /// Time between automatic advances.
    pub interval: Duration,
    /// When false, an explicit previous/next stops the driver permanently.
    pub resume_after_interaction: bool,
}

/// Layout configuration fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Options {
    pub align: Align,
    pub loop_around: bool,
    pub per_view: PerView,
    pub autoplay: Option<Autoplay>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            align: Align::Start,
            loop_around: false,
            per_view: PerView::SINGLE,
            autoplay: None,
        }
    }
}

/// Navigation and autoplay state for one scrolling viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    len: usize,
    index: usize,
    per_view: usize,
    options: Options,
    can_previous: bool,
    can_next: bool,
    hovered: bool,
    stopped: bool,
}

/// Messages consumed by [`Carousel::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Previous,
    Next,
    AutoplayTick,
    PointerEntered,
    PointerExited,
}

impl Carousel {
    /// Creates a carousel over `len` items with the wide-viewport item count.
    pub fn new(len: usize, options: Options) -> Self {
        let mut carousel = Self {
            len,
            index: 0,
            per_view: options.per_view.wide.max(1),
            options,
            can_previous: false,
            can_next: false,
            hovered: false,
            stopped: false,
        };
        carousel.sync();
        carousel
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Previous => {
                self.note_interaction();
                self.scroll_previous();
            }
            Message::Next => {
                self.note_interaction();
                self.scroll_next();
            }
            Message::AutoplayTick => {
                if self.autoplay_running() {
                    self.advance();
                }
            }
            Message::PointerEntered => self.hovered = true,
            Message::PointerExited => self.hovered = false,
        }
    }

    /// Moves one item towards the start; wraps in loop mode, no-op otherwise
    /// when the boundary flag is down.
    pub fn scroll_previous(&mut self) {
        if !self.can_previous {
            return;
        }
        if self.index == 0 {
            self.index = self.max_start();
        } else {
            self.index -= 1;
        }
        self.sync();
    }

    /// Moves one item towards the end; wraps in loop mode.
    pub fn scroll_next(&mut self) {
        if !self.can_next {
            return;
        }
        if self.index >= self.max_start() {
            self.index = 0;
        } else {
            self.index += 1;
        }
        self.sync();
    }

    /// Content changed: adopt the new length and re-derive flags.
    pub fn reinit(&mut self, len: usize) {
        self.len = len;
        self.sync();
    }

    /// Window resized: re-resolve the per-view breakpoint and flags.
    pub fn set_viewport_width(&mut self, width: f32) {
        self.per_view = self.options.per_view.for_width(width);
        self.sync();
    }

    /// Whether the autoplay driver should be ticking right now.
    pub fn autoplay_running(&self) -> bool {
        self.options.autoplay.is_some() && self.len > 1 && !self.hovered && !self.stopped
    }

    /// Interval for the autoplay timer, when the driver is running.
    pub fn autoplay_interval(&self) -> Option<Duration> {
        if self.autoplay_running() {
            self.options.autoplay.map(|autoplay| autoplay.interval)
        } else {
            None
        }
    }

    pub fn can_scroll_previous(&self) -> bool {
        self.can_previous
    }

    pub fn can_scroll_next(&self) -> bool {
        self.can_next
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn per_view(&self) -> usize {
        self.per_view
    }

    pub fn align(&self) -> Align {
        self.options.align
    }

    /// Indices of the items currently inside the viewport.
    pub fn visible_range(&self) -> Range<usize> {
        let end = (self.index + self.per_view).min(self.len);
        self.index..end
    }

    fn max_start(&self) -> usize {
        self.len.saturating_sub(self.per_view)
    }

    /// Autoplay step: always advances, returning to the start past the end
    /// even in bounded mode.
    fn advance(&mut self) {
        if self.len == 0 {
            return;
        }
        if self.index >= self.max_start() {
            self.index = 0;
        } else {
            self.index += 1;
        }
        self.sync();
    }

    fn note_interaction(&mut self) {
        if let Some(autoplay) = self.options.autoplay {
            if !autoplay.resume_after_interaction {
                self.stopped = true;
            }
        }
    }

    /// Re-derives the boundary flags from the current position. Called after
    /// every navigation, reinit, and viewport change so the flags never go
    /// stale.
    fn sync(&mut self) {
        if self.len == 0 {
            self.index = 0;
            self.can_previous = false;
            self.can_next = false;
            return;
        }
        if self.index > self.max_start() {
            self.index = self.max_start();
        }
        if self.options.loop_around {
            self.can_previous = true;
            self.can_next = true;
        } else {
            self.can_previous = self.index > 0;
            self.can_next = self.index < self.max_start();
        }
    }
}

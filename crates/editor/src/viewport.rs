//! Viewport scroll state.
//!
//! The viewport owns a 2D scroll offset: the top-left of the visible window
//! relative to the logical text canvas. Scroll events are the only thing that
//! mutates it. The offset is deliberately unclamped: it may go negative or
//! run past the content extent; the projector's visibility clip hides
//! whatever falls outside the window, so no bounds knowledge is needed here.

use crate::cell_metrics::CellMetrics;
use crate::geom::Vec2;

/// Lines scrolled per wheel notch.
///
/// A single named constant so the wheel sensitivity is auditable in one
/// place (see DESIGN.md).
pub const SCROLL_LINES_PER_NOTCH: i32 = 1;

/// Scroll state for the visible window.
#[derive(Debug, Clone, Copy, Default)]
pub struct Viewport {
    /// Top-left of the visible window in logical canvas pixels.
    pub scroll: Vec2,
}

impl Viewport {
    /// Creates a viewport at the canvas origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a vertical wheel delta, measured in notches.
    ///
    /// Positive `dy` scrolls the content up: the scroll offset increases by
    /// `dy * SCROLL_LINES_PER_NOTCH` line steps, and the projector subtracts
    /// the offset when translating logical cells to screen space, so glyphs
    /// move toward smaller screen y.
    pub fn apply_scroll_delta(&mut self, dy: i32, metrics: &CellMetrics) {
        self.scroll.y += dy * SCROLL_LINES_PER_NOTCH * metrics.line_step();
    }
}

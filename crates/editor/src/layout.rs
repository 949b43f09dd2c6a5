//! Layout projection: mapping buffer content onto the character grid.
//!
//! `PenWalk` is the single pen-position walk over the buffer. It visits every
//! offset `0..=len` (inclusive of `len` so the cursor position at the end of
//! the buffer is capturable), advancing a running pen through logical
//! (unscrolled) pixel space. Newlines advance the pen to the next line and
//! produce no drawable cell.
//!
//! Both [`Projection`] (what the renderer draws) and the hit tester (what a
//! click resolves to) are built on this one walk, so the rendered glyphs, the
//! visible cursor, and the clickable geometry always agree.

use direct_edit_buffer::TextBuffer;

use crate::cell_metrics::CellMetrics;
use crate::geom::{Rect, Vec2};
use crate::glyph_atlas;
use crate::viewport::Viewport;

/// One stop of the pen walk: the pen position *before* this offset's advance.
///
/// `byte` is `None` only for the final stop at `offset == len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PenStop {
    pub offset: usize,
    pub byte: Option<u8>,
    /// Logical (unscrolled) pen position.
    pub x: i32,
    pub y: i32,
}

/// The shared pen-position walk over a buffer's bytes.
#[derive(Debug, Clone)]
pub(crate) struct PenWalk<'a> {
    bytes: &'a [u8],
    metrics: CellMetrics,
    offset: usize,
    x: i32,
    y: i32,
    done: bool,
}

impl<'a> PenWalk<'a> {
    pub fn new(bytes: &'a [u8], metrics: CellMetrics) -> Self {
        Self {
            bytes,
            metrics,
            offset: 0,
            x: 0,
            y: 0,
            done: false,
        }
    }
}

impl Iterator for PenWalk<'_> {
    type Item = PenStop;

    fn next(&mut self) -> Option<PenStop> {
        if self.done {
            return None;
        }

        let offset = self.offset;
        if offset == self.bytes.len() {
            // Final stop: no byte, but the pen position is where the cursor
            // sits when it is at the end of the buffer.
            self.done = true;
            return Some(PenStop {
                offset,
                byte: None,
                x: self.x,
                y: self.y,
            });
        }

        let byte = self.bytes[offset];
        let stop = PenStop {
            offset,
            byte: Some(byte),
            x: self.x,
            y: self.y,
        };

        // The pen advances whether or not the cell ends up visible, so later
        // characters stay aligned under clipping.
        if byte == b'\n' {
            self.x = 0;
            self.y += self.metrics.line_step();
        } else {
            self.x += self.metrics.advance_x();
        }
        self.offset += 1;

        Some(stop)
    }
}

/// One drawable character cell in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphCell {
    /// The byte to display, already substituted for non-printables.
    pub byte: u8,
    /// Screen-space cell origin (scroll offset applied).
    pub x: i32,
    pub y: i32,
    /// The buffer offset this cell was projected from.
    pub offset: usize,
}

/// A lazy, finite, restartable projection of buffer content onto the grid.
///
/// Yields the visible cells in buffer order, clipped to a visible rectangle.
/// Newlines are consumed by the walk and never emitted. Re-create the
/// projection each frame; it holds no state beyond its iteration position.
#[derive(Debug)]
pub struct Projection<'a> {
    walk: PenWalk<'a>,
    scroll: Vec2,
    visible: Rect,
    metrics: CellMetrics,
}

impl<'a> Projection<'a> {
    /// Starts a projection of `buffer` through `viewport`, clipped to
    /// `visible`.
    pub fn new(
        buffer: &'a TextBuffer,
        viewport: &Viewport,
        visible: Rect,
        metrics: CellMetrics,
    ) -> Self {
        Self {
            walk: PenWalk::new(buffer.as_bytes(), metrics),
            scroll: viewport.scroll,
            visible,
            metrics,
        }
    }
}

impl Iterator for Projection<'_> {
    type Item = GlyphCell;

    fn next(&mut self) -> Option<GlyphCell> {
        loop {
            let stop = self.walk.next()?;
            let byte = stop.byte?; // final stop carries no cell

            if byte == b'\n' {
                continue;
            }

            let x = stop.x - self.scroll.x;
            let y = stop.y - self.scroll.y;
            let cell = Rect::new(x, y, self.metrics.cell_width(), self.metrics.cell_height());
            if !cell.intersects(&self.visible) {
                continue;
            }

            return Some(GlyphCell {
                byte: glyph_atlas::displayable(byte),
                x,
                y,
                offset: stop.offset,
            });
        }
    }
}

/// Returns the screen-space cell of the buffer's cursor.
///
/// Derived from the same pen walk as [`Projection`]; the cursor cell is the
/// pen position at the cursor offset, before that offset's advance.
pub fn cursor_cell(buffer: &TextBuffer, viewport: &Viewport, metrics: CellMetrics) -> Vec2 {
    let scroll = viewport.scroll;
    PenWalk::new(buffer.as_bytes(), metrics)
        .find(|stop| stop.offset == buffer.cursor())
        .map(|stop| Vec2::new(stop.x - scroll.x, stop.y - scroll.y))
        // The walk covers 0..=len and cursor <= len, so this is unreachable.
        .unwrap_or_default()
}

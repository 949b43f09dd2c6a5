//! The rendering boundary.
//!
//! The core never draws; it emits an ordered stream of calls against
//! [`RenderSink`] once per frame: `begin_frame`, zero or more glyphs in
//! projection order, the cursor highlight (over the glyphs), then `present`.
//! The platform renderer implements the trait; [`GridCapture`] is the
//! headless implementation used by the shell binary and the tests.

use crate::cell_metrics::CellMetrics;
use crate::glyph_atlas::{AtlasSlot, ATLAS_COLUMNS};

/// Receives one frame's worth of draw calls, in order.
pub trait RenderSink {
    /// Starts a new frame (clear the target).
    fn begin_frame(&mut self);

    /// Draws the glyph at `slot` with its cell origin at (`x`, `y`) in
    /// screen pixels.
    fn draw_glyph(&mut self, slot: AtlasSlot, x: i32, y: i32);

    /// Draws the cursor highlight with its cell origin at (`x`, `y`).
    /// Always called after every `draw_glyph` of the frame.
    fn draw_cursor(&mut self, x: i32, y: i32);

    /// Finishes the frame (present to the screen).
    fn present(&mut self);
}

/// One recorded sink call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkOp {
    Begin,
    Glyph { slot: AtlasSlot, x: i32, y: i32 },
    Cursor { x: i32, y: i32 },
    Present,
}

/// A recording render sink.
///
/// Keeps every call of the most recent frame in order, and can rasterize the
/// frame back into a character grid for headless display or assertions.
#[derive(Debug, Default)]
pub struct GridCapture {
    ops: Vec<SinkOp>,
}

impl GridCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded calls of the current frame, in order.
    pub fn ops(&self) -> &[SinkOp] {
        &self.ops
    }

    /// Returns the character a recorded glyph draw displays.
    pub fn glyph_char(slot: AtlasSlot) -> char {
        (b' ' + (slot.row * ATLAS_COLUMNS + slot.col) as u8) as char
    }

    /// Rasterizes the recorded frame into a `cols` x `rows` character grid.
    ///
    /// Pixel positions are mapped to grid cells through `metrics`; draws
    /// outside the grid are dropped. The cursor cell is overdrawn with `_`
    /// when it is empty, mirroring the highlight-over-glyph draw order.
    pub fn to_text_grid(&self, metrics: &CellMetrics, cols: usize, rows: usize) -> Vec<String> {
        let mut grid = vec![vec![' '; cols]; rows];
        let to_cell = |x: i32, y: i32| -> Option<(usize, usize)> {
            if x < 0 || y < 0 {
                return None;
            }
            let col = (x / metrics.advance_x()) as usize;
            let row = (y / metrics.line_step()) as usize;
            (col < cols && row < rows).then_some((col, row))
        };

        for op in &self.ops {
            match *op {
                SinkOp::Glyph { slot, x, y } => {
                    if let Some((col, row)) = to_cell(x, y) {
                        grid[row][col] = Self::glyph_char(slot);
                    }
                }
                SinkOp::Cursor { x, y } => {
                    if let Some((col, row)) = to_cell(x, y) {
                        if grid[row][col] == ' ' {
                            grid[row][col] = '_';
                        }
                    }
                }
                SinkOp::Begin | SinkOp::Present => {}
            }
        }

        grid.into_iter().map(|row| row.into_iter().collect()).collect()
    }
}

impl RenderSink for GridCapture {
    fn begin_frame(&mut self) {
        self.ops.clear();
        self.ops.push(SinkOp::Begin);
    }

    fn draw_glyph(&mut self, slot: AtlasSlot, x: i32, y: i32) {
        self.ops.push(SinkOp::Glyph { slot, x, y });
    }

    fn draw_cursor(&mut self, x: i32, y: i32) {
        self.ops.push(SinkOp::Cursor { x, y });
    }

    fn present(&mut self) {
        self.ops.push(SinkOp::Present);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph_atlas;

    #[test]
    fn test_glyph_char_round_trip() {
        for byte in b' '..=b'~' {
            assert_eq!(GridCapture::glyph_char(glyph_atlas::slot_for(byte)), byte as char);
        }
    }

    #[test]
    fn test_begin_frame_clears_previous_frame() {
        let mut sink = GridCapture::new();
        sink.begin_frame();
        sink.draw_glyph(glyph_atlas::slot_for(b'a'), 0, 0);
        sink.present();

        sink.begin_frame();
        assert_eq!(sink.ops(), &[SinkOp::Begin]);
    }

    #[test]
    fn test_text_grid_places_glyphs() {
        let metrics = CellMetrics::default();
        let mut sink = GridCapture::new();
        sink.begin_frame();
        sink.draw_glyph(glyph_atlas::slot_for(b'h'), 0, 0);
        sink.draw_glyph(glyph_atlas::slot_for(b'i'), metrics.advance_x(), 0);
        sink.draw_cursor(2 * metrics.advance_x(), 0);
        sink.present();

        let grid = sink.to_text_grid(&metrics, 4, 1);
        assert_eq!(grid[0], "hi_ ");
    }

    #[test]
    fn test_text_grid_drops_out_of_bounds() {
        let metrics = CellMetrics::default();
        let mut sink = GridCapture::new();
        sink.begin_frame();
        sink.draw_glyph(glyph_atlas::slot_for(b'x'), -metrics.advance_x(), 0);
        sink.draw_glyph(glyph_atlas::slot_for(b'y'), 100 * metrics.advance_x(), 0);
        sink.present();

        let grid = sink.to_text_grid(&metrics, 2, 1);
        assert_eq!(grid[0], "  ");
    }
}

//! Grid geometry configuration.
//!
//! One character occupies a fixed-size cell; these metrics define the pixel
//! footprint of that cell and the spacing between cells and lines. They are
//! configuration, not mutable state: construct once at startup and pass by
//! value (the struct is `Copy`).

/// Pixel geometry of one character cell.
///
/// The defaults reproduce the bundled 5x7 bitmap font drawn at 2x scale with
/// 1px horizontal and 2px vertical padding, which yields the classic 80x24
/// window at 960x432 pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellMetrics {
    /// Integer upscaling factor applied to every glyph.
    pub scale: i32,
    /// Unscaled glyph width in pixels.
    pub glyph_width: i32,
    /// Unscaled glyph height in pixels.
    pub glyph_height: i32,
    /// Unscaled horizontal padding between cells.
    pub x_padding: i32,
    /// Unscaled vertical padding between lines.
    pub y_padding: i32,
}

impl CellMetrics {
    /// Horizontal pen advance per character: `(glyph_width + x_padding) * scale`.
    pub fn advance_x(&self) -> i32 {
        (self.glyph_width + self.x_padding) * self.scale
    }

    /// Vertical pen advance per line: `(glyph_height + y_padding) * scale`.
    pub fn line_step(&self) -> i32 {
        (self.glyph_height + self.y_padding) * self.scale
    }

    /// Drawn glyph width in screen pixels (padding excluded).
    pub fn cell_width(&self) -> i32 {
        self.glyph_width * self.scale
    }

    /// Drawn glyph height in screen pixels (padding excluded).
    pub fn cell_height(&self) -> i32 {
        self.glyph_height * self.scale
    }

    /// The visible rectangle covering a grid of `cols` x `rows` cells.
    pub fn grid_rect(&self, cols: i32, rows: i32) -> crate::geom::Rect {
        crate::geom::Rect::new(0, 0, cols * self.advance_x(), rows * self.line_step())
    }
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self {
            scale: 2,
            glyph_width: 5,
            glyph_height: 7,
            x_padding: 1,
            y_padding: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_advances() {
        let m = CellMetrics::default();
        assert_eq!(m.advance_x(), 12); // (5 + 1) * 2
        assert_eq!(m.line_step(), 18); // (7 + 2) * 2
        assert_eq!(m.cell_width(), 10);
        assert_eq!(m.cell_height(), 14);
    }

    #[test]
    fn test_grid_rect_80x24() {
        let m = CellMetrics::default();
        let r = m.grid_rect(80, 24);
        assert_eq!((r.w, r.h), (960, 432));
    }
}

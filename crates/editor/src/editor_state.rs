//! Editor state and event dispatch.
//!
//! `Editor` is the owned context object tying the core together: the text
//! buffer, the viewport, and the cell metrics. Input events mutate it
//! sequentially (there is one thread of control, so every projection sees a
//! fully-updated buffer) and `render` walks the current state into an
//! ordered stream of sink calls.

use direct_edit_buffer::TextBuffer;
use direct_edit_input::{InputEvent, KeyCommand};

use crate::cell_metrics::CellMetrics;
use crate::geom::{Rect, Vec2};
use crate::glyph_atlas;
use crate::hit_test;
use crate::layout::{self, Projection};
use crate::render_sink::RenderSink;
use crate::viewport::Viewport;

/// Whether the event loop should keep running after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Continue,
    Quit,
}

/// The editor's complete mutable state.
#[derive(Debug, Default)]
pub struct Editor {
    buffer: TextBuffer,
    viewport: Viewport,
    metrics: CellMetrics,
}

impl Editor {
    /// Creates an editor with an empty buffer and the given cell metrics.
    pub fn new(metrics: CellMetrics) -> Self {
        Self {
            buffer: TextBuffer::new(),
            viewport: Viewport::new(),
            metrics,
        }
    }

    // ==================== Accessors ====================

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut TextBuffer {
        &mut self.buffer
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn metrics(&self) -> CellMetrics {
        self.metrics
    }

    // ==================== Event Dispatch ====================

    /// Applies one input event to the editor state.
    ///
    /// Editing and navigation events mutate the buffer, scrolls mutate the
    /// viewport, clicks resolve through hit-testing. Edge conditions
    /// (backspace at offset 0, arrows at the buffer ends, clicks outside all
    /// rows) are defined no-ops, not errors.
    pub fn handle_event(&mut self, event: InputEvent) -> EventOutcome {
        match event {
            InputEvent::TextInserted(bytes) => self.buffer.insert(&bytes),
            InputEvent::Key(KeyCommand::Enter) => self.buffer.insert(b"\n"),
            InputEvent::Key(KeyCommand::Backspace) => {
                self.buffer.delete_before_cursor();
            }
            InputEvent::Key(KeyCommand::Left) => self.buffer.move_left(),
            InputEvent::Key(KeyCommand::Right) => self.buffer.move_right(),
            InputEvent::Key(KeyCommand::Home) => self.buffer.move_to_line_start(),
            InputEvent::Key(KeyCommand::End) => self.buffer.move_to_line_end(),
            InputEvent::Scroll(delta) => {
                self.viewport.apply_scroll_delta(delta.dy, &self.metrics)
            }
            InputEvent::Click(point) => {
                let click = Vec2::new(point.x, point.y);
                if let Some(offset) =
                    hit_test::locate(click, &self.buffer, &self.viewport, self.metrics)
                {
                    self.buffer.set_cursor(offset);
                }
            }
            InputEvent::Quit => {
                log::info!("quit requested");
                return EventOutcome::Quit;
            }
        }

        EventOutcome::Continue
    }

    // ==================== Rendering ====================

    /// Emits one frame to the sink: glyphs in projection order, then the
    /// cursor highlight over them, then present.
    pub fn render<S: RenderSink>(&self, sink: &mut S, visible: Rect) {
        sink.begin_frame();

        for cell in Projection::new(&self.buffer, &self.viewport, visible, self.metrics) {
            sink.draw_glyph(glyph_atlas::slot_for(cell.byte), cell.x, cell.y);
        }

        let cursor = layout::cursor_cell(&self.buffer, &self.viewport, self.metrics);
        sink.draw_cursor(cursor.x, cursor.y);

        sink.present();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render_sink::{GridCapture, SinkOp};
    use direct_edit_input::{ClickPoint, ScrollDelta};

    fn editor() -> Editor {
        Editor::new(CellMetrics::default())
    }

    fn visible(editor: &Editor) -> Rect {
        editor.metrics().grid_rect(80, 24)
    }

    #[test]
    fn test_text_and_enter_events() {
        let mut ed = editor();
        ed.handle_event(InputEvent::text("ab"));
        ed.handle_event(InputEvent::Key(KeyCommand::Enter));
        ed.handle_event(InputEvent::text("cd"));
        assert_eq!(ed.buffer().content(), "ab\ncd");
    }

    #[test]
    fn test_backspace_event() {
        let mut ed = editor();
        ed.handle_event(InputEvent::text("abc"));
        ed.handle_event(InputEvent::Key(KeyCommand::Backspace));
        assert_eq!(ed.buffer().content(), "ab");
    }

    #[test]
    fn test_navigation_events() {
        let mut ed = editor();
        ed.handle_event(InputEvent::text("ab\ncd"));
        ed.handle_event(InputEvent::Key(KeyCommand::Home));
        assert_eq!(ed.buffer().cursor(), 3);
        ed.handle_event(InputEvent::Key(KeyCommand::End));
        assert_eq!(ed.buffer().cursor(), 5);
        ed.handle_event(InputEvent::Key(KeyCommand::Left));
        ed.handle_event(InputEvent::Key(KeyCommand::Left));
        assert_eq!(ed.buffer().cursor(), 3);
        ed.handle_event(InputEvent::Key(KeyCommand::Right));
        assert_eq!(ed.buffer().cursor(), 4);
    }

    #[test]
    fn test_scroll_event_moves_viewport_only() {
        let mut ed = editor();
        ed.handle_event(InputEvent::text("ab"));
        let cursor_before = ed.buffer().cursor();
        ed.handle_event(InputEvent::Scroll(ScrollDelta::new(2)));
        assert_eq!(ed.viewport().scroll.y, 2 * ed.metrics().line_step());
        assert_eq!(ed.buffer().cursor(), cursor_before);
    }

    #[test]
    fn test_click_event_places_cursor() {
        let mut ed = editor();
        ed.handle_event(InputEvent::text("ab\ncd"));
        let m = ed.metrics();
        // Click the 'd' (second column, second row).
        let outcome = ed.handle_event(InputEvent::Click(ClickPoint::new(
            m.advance_x(),
            m.line_step(),
        )));
        assert_eq!(outcome, EventOutcome::Continue);
        assert_eq!(ed.buffer().cursor(), 4);
    }

    #[test]
    fn test_click_outside_rows_keeps_cursor() {
        let mut ed = editor();
        ed.handle_event(InputEvent::text("ab"));
        let before = ed.buffer().cursor();
        ed.handle_event(InputEvent::Click(ClickPoint::new(0, 10_000)));
        assert_eq!(ed.buffer().cursor(), before);
    }

    #[test]
    fn test_quit_event() {
        let mut ed = editor();
        assert_eq!(ed.handle_event(InputEvent::Quit), EventOutcome::Quit);
    }

    #[test]
    fn test_render_frame_ordering() {
        let mut ed = editor();
        ed.handle_event(InputEvent::text("hi"));

        let mut sink = GridCapture::new();
        ed.render(&mut sink, visible(&ed));

        let ops = sink.ops();
        assert_eq!(ops.first(), Some(&SinkOp::Begin));
        assert_eq!(ops.last(), Some(&SinkOp::Present));

        // Cursor highlight comes after every glyph.
        let cursor_idx = ops
            .iter()
            .position(|op| matches!(op, SinkOp::Cursor { .. }))
            .unwrap();
        let last_glyph_idx = ops
            .iter()
            .rposition(|op| matches!(op, SinkOp::Glyph { .. }))
            .unwrap();
        assert!(cursor_idx > last_glyph_idx);
    }

    #[test]
    fn test_render_grid_contents() {
        let mut ed = editor();
        ed.handle_event(InputEvent::text("hi\nyo"));

        let mut sink = GridCapture::new();
        ed.render(&mut sink, visible(&ed));

        let m = ed.metrics();
        let grid = sink.to_text_grid(&m, 4, 3);
        assert_eq!(grid[0], "hi  ");
        assert_eq!(grid[1], "yo_ "); // cursor after the 'o'
        assert_eq!(grid[2], "    ");
    }

    #[test]
    fn test_render_scrolled_view() {
        let mut ed = editor();
        ed.handle_event(InputEvent::text("one\ntwo\nthree"));
        // One positive notch: the view moves one line further into the
        // document, so "one" slides above the window.
        ed.handle_event(InputEvent::Scroll(ScrollDelta::new(1)));

        let m = ed.metrics();
        let mut sink = GridCapture::new();
        // A one-row window now shows "two" at screen row 0.
        ed.render(&mut sink, m.grid_rect(80, 1));

        let shown: String = sink
            .ops()
            .iter()
            .filter_map(|op| match op {
                SinkOp::Glyph { slot, y: 0, .. } => Some(GridCapture::glyph_char(*slot)),
                _ => None,
            })
            .collect();
        assert_eq!(shown, "two");
    }
}

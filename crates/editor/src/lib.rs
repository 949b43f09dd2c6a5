//! direct-edit-core: the platform-free editor core for direct-edit.
//!
//! This crate turns buffer content into a character grid and input events
//! into buffer mutations. Everything here is pure and synchronous; the
//! platform shell supplies the window, the glyph bitmap, and the raw event
//! stream, and consumes frames through the [`RenderSink`] trait.
//!
//! # Overview
//!
//! - [`Editor`]: the owned context object (buffer + viewport + metrics),
//!   driven by [`InputEvent`](direct_edit_input::InputEvent)s.
//! - [`Projection`]: lazily projects the buffer onto screen-space glyph
//!   cells, clipped to a visible rectangle; [`cursor_cell`] reports where
//!   the cursor lands.
//! - [`hit_test::locate`]: resolves a click back to a buffer offset using
//!   the same pen walk the projection uses.
//! - [`glyph_atlas`]: the slot/source-rect contract with the external
//!   bitmap-font renderer.
//! - [`FramePacer`]: advisory draw pacing derived from the display refresh
//!   rate.
//! - [`content`]: startup seeding from a file, with a logged fallback to
//!   the default title.
//!
//! # Example
//!
//! ```
//! use direct_edit_core::{CellMetrics, Editor, GridCapture};
//! use direct_edit_input::InputEvent;
//!
//! let mut editor = Editor::new(CellMetrics::default());
//! editor.handle_event(InputEvent::text("hello"));
//!
//! let mut sink = GridCapture::new();
//! let visible = editor.metrics().grid_rect(80, 24);
//! editor.render(&mut sink, visible);
//!
//! let grid = sink.to_text_grid(&editor.metrics(), 80, 24);
//! assert!(grid[0].starts_with("hello_"));
//! ```

mod cell_metrics;
pub mod content;
mod editor_state;
mod frame_pacer;
pub mod geom;
pub mod glyph_atlas;
mod layout;
mod render_sink;
mod viewport;

pub use cell_metrics::CellMetrics;
pub use editor_state::{Editor, EventOutcome};
pub use frame_pacer::FramePacer;
pub use geom::{Rect, Vec2};
pub use layout::{cursor_cell, GlyphCell, Projection};
pub use render_sink::{GridCapture, RenderSink, SinkOp};
pub use viewport::{Viewport, SCROLL_LINES_PER_NOTCH};

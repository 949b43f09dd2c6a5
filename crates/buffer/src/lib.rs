//! direct-edit-buffer: the text buffer for the direct-edit editor.
//!
//! This crate provides a contiguous single-byte text buffer with an insertion
//! cursor, plus the shared line-boundary scan that the rest of the editor
//! builds on.
//!
//! # Overview
//!
//! The main type is [`TextBuffer`], which provides:
//! - Byte insertion and deletion at the cursor position
//! - Amortized reallocation with a bounded high-water mark
//! - Cursor movement operations (left, right, home, end)
//!
//! The [`lines`] module defines what a "line" is, exactly once. Navigation
//! inside this crate and the layout/hit-testing code downstream all use the
//! same scan, which is what keeps the visible cursor, the editable position,
//! and the rendered glyphs in agreement.
//!
//! # Example
//!
//! ```
//! use direct_edit_buffer::TextBuffer;
//!
//! let mut buffer = TextBuffer::from_str("ab\ncd");
//! buffer.set_cursor(4);
//! buffer.move_to_line_start();
//! assert_eq!(buffer.cursor(), 3);
//!
//! buffer.insert(b"X");
//! assert_eq!(buffer.content(), "ab\nXcd");
//! ```

pub mod lines;
mod text_buffer;

pub use text_buffer::{TextBuffer, GROWTH_STEP};

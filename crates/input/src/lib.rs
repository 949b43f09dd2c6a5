//! Input event types for keyboard, scroll, and click handling.
//!
//! These types abstract over window-system event details and provide a clean
//! Rust-native interface for the editor core. Translation from raw key
//! scancodes and text-input events is the platform shell's job; the core only
//! ever sees the discrete events defined here.

/// A discrete input event delivered to the editor core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Text typed by the user, already resolved to bytes by the input layer.
    TextInserted(Vec<u8>),
    /// A named editing/navigation key.
    Key(KeyCommand),
    /// A mouse wheel / trackpad scroll.
    Scroll(ScrollDelta),
    /// A pointer click in view coordinates.
    Click(ClickPoint),
    /// Request to quit the editor.
    Quit,
}

impl InputEvent {
    /// Creates a `TextInserted` event from a string.
    pub fn text(s: &str) -> Self {
        InputEvent::TextInserted(s.as_bytes().to_vec())
    }
}

/// Named key commands the core understands.
///
/// Printable characters arrive as [`InputEvent::TextInserted`] instead; this
/// enum covers only the keys with editing or navigation semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Return / Enter (inserts a newline)
    Enter,
    /// Backspace (deletes before the cursor)
    Backspace,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Home (start of line)
    Home,
    /// End (end of line)
    End,
}

/// Scroll delta from a mouse wheel or trackpad, in wheel notches.
///
/// Sign convention: positive `dy` scrolls the content up (the viewport's
/// scroll offset increases). The viewport applies the line-height scaling;
/// this type carries raw notches only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollDelta {
    /// Vertical scroll amount in wheel notches (positive = content up)
    pub dy: i32,
}

impl ScrollDelta {
    /// Creates a new vertical scroll delta.
    pub fn new(dy: i32) -> Self {
        Self { dy }
    }
}

/// A pointer click position in view coordinates (pixels from top-left).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickPoint {
    pub x: i32,
    pub y: i32,
}

impl ClickPoint {
    /// Creates a new click point.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_event() {
        let event = InputEvent::text("hi");
        assert_eq!(event, InputEvent::TextInserted(vec![b'h', b'i']));
    }

    #[test]
    fn test_scroll_delta_sign_is_preserved() {
        assert_eq!(ScrollDelta::new(-3).dy, -3);
        assert_eq!(ScrollDelta::new(2).dy, 2);
    }

    #[test]
    fn test_click_point() {
        let p = ClickPoint::new(10, 20);
        assert_eq!((p.x, p.y), (10, 20));
    }
}

//! The shared line-boundary scan.
//!
//! A "line" is a maximal run of bytes between `\n` boundaries (or the buffer
//! start/end). These two functions are the single definition of that rule:
//! cursor navigation, layout projection, and hit-testing all resolve line
//! boundaries through them, so the cursor, the editable position, and the
//! rendered glyphs can never disagree about where a line starts or ends.
//!
//! Lines are never cached; both scans are pure functions of the content at
//! the moment of use.

/// Returns the offset where the line containing `offset` starts.
///
/// Scans backward until the byte immediately before the scan position is a
/// `\n` (the line start is just after it), or until offset 0.
pub fn line_start(bytes: &[u8], offset: usize) -> usize {
    let mut pos = offset.min(bytes.len());
    while pos > 0 && bytes[pos - 1] != b'\n' {
        pos -= 1;
    }
    pos
}

/// Returns the offset where the line containing `offset` ends.
///
/// Scans forward to the line's terminating `\n`, or to the buffer length for
/// the last line. The returned offset points *at* the `\n`, not past it.
pub fn line_end(bytes: &[u8], offset: usize) -> usize {
    let mut pos = offset.min(bytes.len());
    while pos < bytes.len() && bytes[pos] != b'\n' {
        pos += 1;
    }
    pos
}

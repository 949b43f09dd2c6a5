//! Contiguous text buffer with an insertion cursor.
//!
//! The buffer stores single-byte characters in one flat allocation. Insertions
//! shift the tail right, deletions shift it left; the cursor always denotes an
//! insertion point (it sits *before* the byte at its offset). Storage grows by
//! a fixed step plus the inserted length and shrinks once the unused slack
//! crosses a high-water mark, bounding memory for long edit sessions.
//!
//! Growth and shrink never mutate the live storage in place: the new
//! allocation is fully populated before it is swapped in, so an aborting
//! allocator can never leave a half-shifted buffer observable.

use crate::lines;

/// How many extra bytes each grow adds beyond the inserted length, and the
/// unit the shrink path rounds capacity up to.
pub const GROWTH_STEP: usize = 100;

/// Slack threshold that triggers a shrink: once `capacity - len` exceeds
/// this, capacity is brought back down to `len + GROWTH_STEP`.
const SHRINK_SLACK: usize = GROWTH_STEP * 4;

/// A text buffer with cursor tracking.
///
/// Invariant after every operation: `0 <= cursor <= len <= capacity`.
///
/// The buffer maintains:
/// - Content storage in a single contiguous allocation
/// - `len`, the number of valid bytes at the front of the storage
/// - The cursor offset, always a valid insertion point
#[derive(Debug)]
pub struct TextBuffer {
    /// The backing allocation. Bytes at `[len..]` are dead slack.
    storage: Box<[u8]>,
    /// Number of valid bytes.
    len: usize,
    /// Cursor offset; points before the byte at this index.
    cursor: usize,
}

impl TextBuffer {
    /// Creates a new empty text buffer with no allocation.
    pub fn new() -> Self {
        Self {
            storage: Box::default(),
            len: 0,
            cursor: 0,
        }
    }

    /// Creates a text buffer seeded with the given content.
    ///
    /// Equivalent to inserting `content` into an empty buffer: the cursor
    /// ends up after the seeded text.
    ///
    /// Note: We don't implement `FromStr` because it requires returning
    /// `Result`, but seeding a TextBuffer cannot fail.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Self {
        let mut buffer = Self::new();
        buffer.insert(content.as_bytes());
        buffer
    }

    // ==================== Accessors ====================

    /// Returns the number of valid bytes in the buffer.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the allocated storage size in bytes.
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Returns the cursor offset (the current insertion point).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the byte at the given offset, or `None` past the end.
    pub fn byte_at(&self, offset: usize) -> Option<u8> {
        if offset < self.len {
            Some(self.storage[offset])
        } else {
            None
        }
    }

    /// Returns the buffer content as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.storage[..self.len]
    }

    /// Returns an iterator over the buffer's bytes.
    pub fn bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.as_bytes().iter().copied()
    }

    /// Returns the entire buffer content as a String (lossy outside ASCII).
    pub fn content(&self) -> String {
        String::from_utf8_lossy(self.as_bytes()).into_owned()
    }

    // ==================== Mutation ====================

    /// Inserts `bytes` at the cursor.
    ///
    /// Existing bytes at `[cursor, len)` shift right to make room; the cursor
    /// ends immediately after the inserted text. Grows the storage to
    /// `capacity + GROWTH_STEP + bytes.len()` when the insert would not fit.
    pub fn insert(&mut self, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }

        let new_len = self.len + bytes.len();
        if new_len > self.capacity() {
            // Grow path: build the post-insert image in a fresh allocation,
            // then swap. The old storage stays intact until the copy is done.
            let new_cap = self.capacity() + GROWTH_STEP + bytes.len();
            log::debug!("growing buffer storage to {} bytes", new_cap);

            let mut next = vec![0u8; new_cap].into_boxed_slice();
            next[..self.cursor].copy_from_slice(&self.storage[..self.cursor]);
            next[self.cursor..self.cursor + bytes.len()].copy_from_slice(bytes);
            next[self.cursor + bytes.len()..new_len]
                .copy_from_slice(&self.storage[self.cursor..self.len]);
            self.storage = next;
        } else {
            // In-place path: shift the tail out of the way, then copy in.
            self.storage
                .copy_within(self.cursor..self.len, self.cursor + bytes.len());
            self.storage[self.cursor..self.cursor + bytes.len()].copy_from_slice(bytes);
        }

        self.len = new_len;
        self.cursor += bytes.len();
        self.check_invariant();
    }

    /// Removes the byte immediately before the cursor (backspace).
    ///
    /// Returns `false` without touching the buffer when the cursor is at
    /// offset 0 or the buffer is empty. Shrinks the storage back to
    /// `len + GROWTH_STEP` once the slack exceeds `4 * GROWTH_STEP`.
    pub fn delete_before_cursor(&mut self) -> bool {
        if self.len == 0 || self.cursor == 0 {
            return false;
        }

        self.storage.copy_within(self.cursor..self.len, self.cursor - 1);
        self.len -= 1;
        self.cursor -= 1;

        if self.capacity() - self.len > SHRINK_SLACK {
            let new_cap = self.len + GROWTH_STEP;
            log::debug!("shrinking buffer storage to {} bytes", new_cap);

            let mut next = vec![0u8; new_cap].into_boxed_slice();
            next[..self.len].copy_from_slice(&self.storage[..self.len]);
            self.storage = next;
        }

        self.check_invariant();
        true
    }

    // ==================== Cursor Movement ====================

    /// Moves the cursor left by one byte. No-op at the start of the buffer.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the cursor right by one byte. No-op at the end of the buffer.
    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len);
    }

    /// Moves the cursor to the start of the current line (home).
    pub fn move_to_line_start(&mut self) {
        self.cursor = lines::line_start(self.as_bytes(), self.cursor);
    }

    /// Moves the cursor to the end of the current line (end).
    ///
    /// The cursor lands on the line's terminating `\n`, or at the buffer end
    /// for the last line.
    pub fn move_to_line_end(&mut self) {
        self.cursor = lines::line_end(self.as_bytes(), self.cursor);
    }

    /// Sets the cursor to the given offset, clamped to the buffer length.
    ///
    /// Used by hit-testing to place the cursor from a resolved click.
    pub fn set_cursor(&mut self, offset: usize) {
        self.cursor = offset.min(self.len);
    }

    // ==================== Invariant ====================

    /// Validates `cursor <= len <= capacity` (debug builds only).
    fn check_invariant(&self) {
        debug_assert!(
            self.cursor <= self.len,
            "cursor {} exceeds len {}",
            self.cursor,
            self.len
        );
        debug_assert!(
            self.len <= self.capacity(),
            "len {} exceeds capacity {}",
            self.len,
            self.capacity()
        );
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

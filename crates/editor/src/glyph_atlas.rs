//! Glyph atlas index mapping.
//!
//! The external renderer draws characters by copying sub-rectangles out of a
//! fixed bitmap font atlas. This module owns the contract with that renderer:
//! which atlas slot a byte maps to, and where that slot sits in the bitmap.
//!
//! The atlas covers printable ASCII (`' '..='~'`), laid out in 18 fixed
//! columns with a 1px border and 2px gutters between glyphs. Bytes outside
//! the printable range (other than `\n`, which never reaches the atlas) are
//! displayed as `?`, a display substitution only, never a content change.

/// Number of glyph columns in the atlas bitmap.
pub const ATLAS_COLUMNS: u32 = 18;

/// Unscaled glyph dimensions inside the atlas bitmap.
pub const ATLAS_GLYPH_WIDTH: u32 = 5;
pub const ATLAS_GLYPH_HEIGHT: u32 = 7;

/// Border around the atlas and gutter between glyphs, in bitmap pixels.
const ATLAS_BORDER: u32 = 1;
const ATLAS_GUTTER: u32 = 2;

/// The glyph substituted for non-printable bytes.
pub const FALLBACK_GLYPH: u8 = b'?';

/// A glyph's (column, row) slot in the atlas grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtlasSlot {
    pub col: u32,
    pub row: u32,
}

/// A sub-rectangle of the atlas bitmap, in bitmap pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtlasRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

/// Returns true if the byte has its own glyph in the atlas.
pub fn is_printable(byte: u8) -> bool {
    (b' '..=b'~').contains(&byte)
}

/// Maps a byte to the byte actually displayed for it.
///
/// Printable bytes pass through; everything else becomes [`FALLBACK_GLYPH`].
pub fn displayable(byte: u8) -> u8 {
    if is_printable(byte) {
        byte
    } else {
        FALLBACK_GLYPH
    }
}

/// Returns the atlas slot for a byte.
///
/// The glyph index is the byte's space-relative ordinal (`byte - b' '`);
/// non-printable bytes are substituted first.
pub fn slot_for(byte: u8) -> AtlasSlot {
    let index = (displayable(byte) - b' ') as u32;
    AtlasSlot {
        col: index % ATLAS_COLUMNS,
        row: index / ATLAS_COLUMNS,
    }
}

/// Returns the bitmap sub-rectangle for an atlas slot.
///
/// Each slot is one glyph plus its gutter: `x = border + col * (width +
/// gutter)`, same for rows.
pub fn source_rect(slot: AtlasSlot) -> AtlasRect {
    AtlasRect {
        x: ATLAS_BORDER + slot.col * (ATLAS_GLYPH_WIDTH + ATLAS_GUTTER),
        y: ATLAS_BORDER + slot.row * (ATLAS_GLYPH_HEIGHT + ATLAS_GUTTER),
        w: ATLAS_GLYPH_WIDTH,
        h: ATLAS_GLYPH_HEIGHT,
    }
}

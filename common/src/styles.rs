//! Fonts and pre-computed text styles.
//!
//! Text sizes are configured in pixels, but the display only has bitmap
//! fonts. [`font_for_size`] maps a requested size to the tallest available
//! font that does not exceed it.
//!
//! # Available Fonts (ascending height)
//!
//! `FONT_6X10`, `FONT_9X15`, `FONT_10X20`, then the `ProFont` family up to
//! 24pt for the large readout.

use embedded_graphics::mono_font::{
    MonoFont,
    ascii::{FONT_6X10, FONT_9X15, FONT_10X20},
};
use profont::{PROFONT_12_POINT, PROFONT_14_POINT, PROFONT_18_POINT, PROFONT_24_POINT};

// =============================================================================
// Font Selection
// =============================================================================

/// Small label font (6x10 pixels). Debug page text.
pub const LABEL_FONT: &MonoFont = &FONT_6X10;

/// Fonts considered by [`font_for_size`].
const SIZED_FONTS: [&MonoFont<'static>; 7] = [
    &FONT_6X10,
    &PROFONT_12_POINT,
    &PROFONT_14_POINT,
    &FONT_9X15,
    &FONT_10X20,
    &PROFONT_18_POINT,
    &PROFONT_24_POINT,
];

/// Tallest font whose glyph height fits in `size` pixels.
///
/// Sizes smaller than every font get the smallest one.
pub fn font_for_size(size: u32) -> &'static MonoFont<'static> {
    let mut best = SIZED_FONTS[0];
    for font in SIZED_FONTS {
        if font.character_size.height <= size && font.character_size.height >= best.character_size.height {
            best = font;
        }
    }
    best
}

//! Color constants for the speedometer.
//!
//! # Using Built-in `RgbColor` Trait Constants
//!
//! The `embedded_graphics` crate provides pre-defined color constants through the
//! `RgbColor` trait. Standard colors reuse them; only gauge-specific shades are
//! built by hand with `Rgb565::new(r, g, b)`.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! Configuration accepts packed `0xAARRGGBB` values (the format most UI
//! toolkits store colors in), see [`from_argb`].

use embedded_graphics::pixelcolor::{Rgb565, Rgb888, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black (0, 0, 0). Label and readout text.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Screen background.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red (31, 0, 0). Default arrow and high band color.
pub const RED: Rgb565 = Rgb565::RED;

/// Pure green (0, 63, 0). Default low band color.
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Pure yellow (31, 63, 0). Default medium band color.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

// =============================================================================
// Custom Colors (application-specific)
// =============================================================================

/// Mid gray for the background track behind the bands.
/// RGB565: (17, 34, 17) - roughly 0x888888.
pub const GRAY: Rgb565 = Rgb565::new(17, 34, 17);

/// Light gray for the slider track.
/// RGB565: (26, 52, 26) - roughly 0xCCCCCC.
pub const LIGHT_GRAY: Rgb565 = Rgb565::new(26, 52, 26);

/// Accent color for slider progress and thumb.
/// RGB565: (0, 32, 20) - teal.
pub const ACCENT: Rgb565 = Rgb565::new(0, 32, 20);

/// Orange for warnings on the debug page.
pub const ORANGE: Rgb565 = Rgb565::new(31, 32, 0);

// =============================================================================
// Packed Color Conversion
// =============================================================================

/// Convert a packed `0xAARRGGBB` color to Rgb565.
///
/// The alpha channel is dropped, the display has no blending.
pub fn from_argb(argb: u32) -> Rgb565 {
    let r = ((argb >> 16) & 0xFF) as u8;
    let g = ((argb >> 8) & 0xFF) as u8;
    let b = (argb & 0xFF) as u8;
    Rgb565::from(Rgb888::new(r, g, b))
}

//! Gauge configuration: fixed geometry constants and the per-instance config.
//!
//! # Fixed Geometry
//!
//! The dial is designed on a 500×500 base square. The background track is
//! drawn with a 36px stroke centered on the circle, so the widget reserves a
//! full stroke width on every side: the minimum size is `500 + 2 × 36 = 572`.
//!
//! # Per-instance Configuration
//!
//! [`GaugeConfig`] is a plain struct with documented defaults. It can be
//! built in code with the `const` builder methods:
//!
//! ```ignore
//! const CONFIG: GaugeConfig = GaugeConfig::new()
//!     .max_speed(240)
//!     .low_medium_border(80)
//!     .medium_high_border(180);
//! ```
//!
//! or parsed from `name=value` attributes with [`GaugeConfig::from_attributes`].
//!
//! # Validation
//!
//! Construction is permissive: a gauge built from a degenerate config draws
//! something odd but never panics. [`GaugeConfig::validate`] reports the
//! problems for hosts that want to reject or log them.

use core::fmt;

use embedded_graphics::pixelcolor::Rgb565;

use crate::colors::{GREEN, RED, YELLOW, from_argb};
use crate::resources::Resources;

// =============================================================================
// Fixed Geometry
// =============================================================================

/// Width of the base dial square.
pub const BASE_WIDTH: u32 = 500;

/// Height of the base dial square.
pub const BASE_HEIGHT: u32 = 500;

/// Stroke width of the gray background track.
pub const BACKGROUND_STROKE: u32 = 36;

/// Stroke width of the colored bands.
pub const BAND_STROKE: u32 = 24;

/// Stroke width of the pointer arrow.
pub const ARROW_STROKE: u32 = 8;

/// Smallest size the gauge asks for on either axis.
pub const MIN_SIZE: u32 = max_u32(BASE_WIDTH + 2 * BACKGROUND_STROKE, BASE_HEIGHT + 2 * BACKGROUND_STROKE);

const _: () = assert!(BAND_STROKE < BACKGROUND_STROKE);
const _: () = assert!(MIN_SIZE == 572);

const fn max_u32(
    a: u32,
    b: u32,
) -> u32 {
    if a > b { a } else { b }
}

// =============================================================================
// Defaults
// =============================================================================

/// Initial speed.
pub const DEFAULT_SPEED: i32 = 0;

/// Full-scale speed.
pub const DEFAULT_MAX_SPEED: i32 = 200;

/// Low/medium border. The medium/high border defaults to the max speed.
pub const DEFAULT_LOW_MEDIUM_BORDER: i32 = 0;

pub const DEFAULT_ARROW_COLOR: Rgb565 = RED;
pub const DEFAULT_LOW_SPEED_COLOR: Rgb565 = GREEN;
pub const DEFAULT_MEDIUM_SPEED_COLOR: Rgb565 = YELLOW;
pub const DEFAULT_HIGH_SPEED_COLOR: Rgb565 = RED;

// =============================================================================
// Gauge Configuration
// =============================================================================

/// Construction-time settings for a [`Speedometer`](crate::widgets::Speedometer).
///
/// `None` text sizes take the host's [`Resources`] defaults; a `None`
/// medium/high border follows `max_speed`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct GaugeConfig {
    pub speed: i32,
    pub max_speed: i32,
    pub low_medium_border: i32,
    pub medium_high_border: Option<i32>,
    pub arrow_color: Rgb565,
    pub low_speed_color: Rgb565,
    pub medium_speed_color: Rgb565,
    pub high_speed_color: Rgb565,
    pub text_size: Option<u32>,
    pub counter_text_size: Option<u32>,
}

impl GaugeConfig {
    /// Config with every field at its default.
    pub const fn new() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            max_speed: DEFAULT_MAX_SPEED,
            low_medium_border: DEFAULT_LOW_MEDIUM_BORDER,
            medium_high_border: None,
            arrow_color: DEFAULT_ARROW_COLOR,
            low_speed_color: DEFAULT_LOW_SPEED_COLOR,
            medium_speed_color: DEFAULT_MEDIUM_SPEED_COLOR,
            high_speed_color: DEFAULT_HIGH_SPEED_COLOR,
            text_size: None,
            counter_text_size: None,
        }
    }

    pub const fn speed(
        mut self,
        speed: i32,
    ) -> Self {
        self.speed = speed;
        self
    }

    pub const fn max_speed(
        mut self,
        max_speed: i32,
    ) -> Self {
        self.max_speed = max_speed;
        self
    }

    pub const fn low_medium_border(
        mut self,
        border: i32,
    ) -> Self {
        self.low_medium_border = border;
        self
    }

    pub const fn medium_high_border(
        mut self,
        border: i32,
    ) -> Self {
        self.medium_high_border = Some(border);
        self
    }

    pub const fn arrow_color(
        mut self,
        color: Rgb565,
    ) -> Self {
        self.arrow_color = color;
        self
    }

    pub const fn band_colors(
        mut self,
        low: Rgb565,
        medium: Rgb565,
        high: Rgb565,
    ) -> Self {
        self.low_speed_color = low;
        self.medium_speed_color = medium;
        self.high_speed_color = high;
        self
    }

    pub const fn text_size(
        mut self,
        size: u32,
    ) -> Self {
        self.text_size = Some(size);
        self
    }

    pub const fn counter_text_size(
        mut self,
        size: u32,
    ) -> Self {
        self.counter_text_size = Some(size);
        self
    }

    /// Medium/high border with the `max_speed` fallback applied.
    #[inline]
    pub const fn resolved_medium_high_border(&self) -> i32 {
        match self.medium_high_border {
            Some(border) => border,
            None => self.max_speed,
        }
    }

    /// Label text size with the resource fallback applied.
    #[inline]
    pub const fn resolved_text_size(
        &self,
        resources: &Resources,
    ) -> u32 {
        match self.text_size {
            Some(size) => size,
            None => resources.default_text_size,
        }
    }

    /// Readout text size with the resource fallback applied.
    #[inline]
    pub const fn resolved_counter_text_size(
        &self,
        resources: &Resources,
    ) -> u32 {
        match self.counter_text_size {
            Some(size) => size,
            None => resources.default_counter_text_size,
        }
    }

    /// Check the ordering `0 <= low/medium <= medium/high <= max_speed`.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        let max = self.max_speed;
        let low = self.low_medium_border;
        let high = self.resolved_medium_high_border();

        if max <= 0 {
            return Err(ConfigError::NonPositiveMaxSpeed(max));
        }
        if low < 0 || low > max {
            return Err(ConfigError::BorderOutOfRange { border: low, max });
        }
        if high < 0 || high > max {
            return Err(ConfigError::BorderOutOfRange { border: high, max });
        }
        if low > high {
            return Err(ConfigError::InvertedBorders { low_medium: low, medium_high: high });
        }
        Ok(())
    }

    /// Parse whitespace-separated `name=value` attributes over the defaults.
    ///
    /// Recognized names match the field names. Colors are `#RRGGBB` or
    /// `#AARRGGBB`, sizes are integers with an optional `px` or `dp` suffix.
    /// Bad entries are skipped and counted, their fields keep the default.
    pub fn from_attributes(source: &str) -> Parsed {
        let mut config = Self::new();
        let mut rejected = 0;
        let mut first_error = None;

        for entry in source.split_whitespace() {
            if let Err(err) = config.apply_attribute(entry) {
                rejected += 1;
                first_error.get_or_insert(err);
            }
        }

        Parsed { config, rejected, first_error }
    }

    fn apply_attribute(
        &mut self,
        entry: &str,
    ) -> Result<(), ParseError> {
        let (name, value) = entry.split_once('=').ok_or(ParseError::MissingValue)?;
        match name {
            "speed" => self.speed = parse_int(value)?,
            "max_speed" => self.max_speed = parse_int(value)?,
            "low_medium_border" => self.low_medium_border = parse_int(value)?,
            "medium_high_border" => self.medium_high_border = Some(parse_int(value)?),
            "arrow_color" => self.arrow_color = parse_color(value)?,
            "low_speed_color" => self.low_speed_color = parse_color(value)?,
            "medium_speed_color" => self.medium_speed_color = parse_color(value)?,
            "high_speed_color" => self.high_speed_color = parse_color(value)?,
            "text_size" => self.text_size = Some(parse_length(value)?),
            "counter_text_size" => self.counter_text_size = Some(parse_length(value)?),
            _ => return Err(ParseError::UnknownAttribute),
        }
        Ok(())
    }
}

impl Default for GaugeConfig {
    fn default() -> Self { Self::new() }
}

/// Result of [`GaugeConfig::from_attributes`].
#[derive(Clone, Copy, Debug)]
pub struct Parsed {
    pub config: GaugeConfig,
    /// Number of entries that were skipped.
    pub rejected: u32,
    /// The first problem encountered, if any.
    pub first_error: Option<ParseError>,
}

// =============================================================================
// Attribute Value Parsing
// =============================================================================

fn parse_int(value: &str) -> Result<i32, ParseError> { value.parse().map_err(|_| ParseError::InvalidNumber) }

fn parse_length(value: &str) -> Result<u32, ParseError> {
    let digits = value
        .strip_suffix("px")
        .or_else(|| value.strip_suffix("dp"))
        .unwrap_or(value);
    digits.parse().map_err(|_| ParseError::InvalidNumber)
}

fn parse_color(value: &str) -> Result<Rgb565, ParseError> {
    let hex = value.strip_prefix('#').ok_or(ParseError::InvalidColor)?;
    let raw = u32::from_str_radix(hex, 16).map_err(|_| ParseError::InvalidColor)?;
    match hex.len() {
        6 => Ok(from_argb(0xFF00_0000 | raw)),
        8 => Ok(from_argb(raw)),
        _ => Err(ParseError::InvalidColor),
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Reasons a config fails [`GaugeConfig::validate`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ConfigError {
    /// `max_speed` must be positive, the value mapping divides by it.
    NonPositiveMaxSpeed(i32),
    /// A border lies outside `[0, max_speed]`.
    BorderOutOfRange { border: i32, max: i32 },
    /// The low/medium border is above the medium/high border.
    InvertedBorders { low_medium: i32, medium_high: i32 },
}

impl fmt::Display for ConfigError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::NonPositiveMaxSpeed(max) => write!(f, "max speed {max} <= 0"),
            Self::BorderOutOfRange { border, max } => write!(f, "border {border} not in 0..={max}"),
            Self::InvertedBorders { low_medium, medium_high } => {
                write!(f, "borders inverted {low_medium}>{medium_high}")
            }
        }
    }
}

/// Reasons an attribute entry is skipped.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ParseError {
    /// Entry has no `=`.
    MissingValue,
    /// Name is not a gauge attribute.
    UnknownAttribute,
    /// Integer or length did not parse.
    InvalidNumber,
    /// Color is not `#RRGGBB` / `#AARRGGBB`.
    InvalidColor,
}

impl fmt::Display for ParseError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let msg = match self {
            Self::MissingValue => "attribute without value",
            Self::UnknownAttribute => "unknown attribute",
            Self::InvalidNumber => "invalid number",
            Self::InvalidColor => "invalid color",
        };
        f.write_str(msg)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

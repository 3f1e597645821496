//! Dial geometry: angle constants and value-to-angle mapping.
//!
//! Angles are degrees, 0° points right (3 o'clock) and positive angles turn
//! clockwise, matching the y-down screen coordinates of `embedded-graphics`.
//! The gauge opens at the bottom: the track starts just below the left
//! horizon (−190°) and ends just below the right horizon (11°).
//!
//! # Value Mapping
//!
//! ```text
//! sweep(x) = trunc(x × 201 / max)
//! ```
//!
//! The product is computed in `f32` and the conversion back to `i32` saturates,
//! so a zero `max` gives a sweep of `i32::MAX` or `i32::MIN` instead of a
//! division panic. Angles add that sweep to [`START_ANGLE`] with saturating
//! arithmetic: `arrow_angle(10, 0)` is `START_ANGLE + i32::MAX`, far past
//! [`END_ANGLE`].

use embedded_graphics::prelude::Point;

// =============================================================================
// Angle Constants
// =============================================================================

/// Angle where the track (and the lowest band) begins.
pub const START_ANGLE: i32 = -190;

/// Angle where the track (and the highest band) ends.
pub const END_ANGLE: i32 = 11;

/// Total angular extent of the track: 201°.
pub const TOTAL_SWEEP: i32 = END_ANGLE - START_ANGLE;

const _: () = assert!(START_ANGLE < END_ANGLE);
const _: () = assert!(TOTAL_SWEEP <= 360);

// =============================================================================
// Value Mapping
// =============================================================================

/// Angular extent covered by `value` on a dial whose full scale is `max`.
///
/// Truncates toward zero. Values outside `[0, max]` extrapolate past the
/// visible track.
#[inline]
pub fn sweep(
    value: i32,
    max: i32,
) -> i32 {
    (value as f32 * TOTAL_SWEEP as f32 / max as f32) as i32
}

/// Absolute angle of the pointer arrow for `value`.
#[inline]
pub fn arrow_angle(
    value: i32,
    max: i32,
) -> i32 {
    START_ANGLE.saturating_add(sweep(value, max))
}

// =============================================================================
// Band Layout
// =============================================================================

/// An arc segment: start angle and sweep, both in degrees.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ArcSpan {
    pub start: i32,
    pub sweep: i32,
}

impl ArcSpan {
    pub const fn new(
        start: i32,
        sweep: i32,
    ) -> Self {
        Self { start, sweep }
    }

    /// Angle where this segment ends.
    #[inline]
    pub const fn end(&self) -> i32 { self.start.saturating_add(self.sweep) }
}

/// The full background track.
pub const TRACK: ArcSpan = ArcSpan::new(START_ANGLE, TOTAL_SWEEP);

/// The three colored bands laid end to end over the track.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Bands {
    pub low: ArcSpan,
    pub medium: ArcSpan,
    pub high: ArcSpan,
}

impl Bands {
    /// Lay out the bands for the given borders.
    ///
    /// Each band starts where the previous one ends, the high band always
    /// ends at [`END_ANGLE`]. Inverted borders give a negative medium sweep.
    pub fn new(
        low_medium_border: i32,
        medium_high_border: i32,
        max: i32,
    ) -> Self {
        let low_deg = sweep(low_medium_border, max);
        let medium_deg = sweep(medium_high_border, max);

        let low = ArcSpan::new(START_ANGLE, low_deg);
        let medium = ArcSpan::new(low.end(), medium_deg.saturating_sub(low_deg));
        let high_start = medium.end();
        let high = ArcSpan::new(high_start, END_ANGLE.saturating_sub(high_start));

        Self { low, medium, high }
    }

    /// Sum of the three sweeps.
    #[inline]
    pub const fn total_sweep(&self) -> i32 {
        self.low
            .sweep
            .saturating_add(self.medium.sweep)
            .saturating_add(self.high.sweep)
    }
}

// =============================================================================
// Trigonometry
// =============================================================================

/// Point at `angle` degrees on a circle of `radius` around `center`.
pub fn point_on_circle(
    center: Point,
    radius: f32,
    angle: i32,
) -> Point {
    let radians = (angle as f32).to_radians();
    let dx = micromath::F32(radius * micromath::F32(radians).cos().0).round().0;
    let dy = micromath::F32(radius * micromath::F32(radians).sin().0).round().0;
    Point::new(center.x + dx as i32, center.y + dy as i32)
}

// =============================================================================
// Unit Tests
// =============================================================================

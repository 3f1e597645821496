//! Horizontal range-input slider.
//!
//! The slider owns an integer value in `[min, max]` and tells one listener
//! about every change. The listener is a plain `fn(&mut T, i32)` registered
//! with [`Slider::subscribe`]; the object it acts on is lent to the slider
//! only while an input is handled, so no shared ownership is needed:
//!
//! ```ignore
//! fn forward_speed(gauge: &mut Speedometer, speed: i32) { gauge.set_speed(speed); }
//!
//! let mut slider: Slider<Speedometer> = Slider::new(track, 0, 200);
//! slider.subscribe(forward_speed);
//! slider.handle(SliderInput::Step(5), &mut gauge);   // gauge.set_speed(5)
//! ```
//!
//! # Input Model
//!
//! | Input | Effect |
//! |-------|--------|
//! | `Step(n)` | value += n (keyboard) |
//! | `Press(p)` inside the hit area | start dragging, jump to `p.x` |
//! | `Drag(p)` while dragging | follow `p.x`, clamped to the track |
//! | `Release` | stop dragging |
//!
//! The listener fires only when the value actually moves.

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Circle, Line, PrimitiveStyle, Rectangle},
};

use crate::colors::{ACCENT, LIGHT_GRAY};

/// Thickness of the track line.
const TRACK_STROKE: u32 = 4;

/// Diameter of the thumb circle.
const THUMB_DIAMETER: u32 = 20;

/// Extra pixels above and below the track that still count as a press.
const HIT_SLOP: u32 = THUMB_DIAMETER / 2;

const TRACK_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(LIGHT_GRAY, TRACK_STROKE);
const PROGRESS_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(ACCENT, TRACK_STROKE);
const THUMB_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(ACCENT);

/// User input delivered to a [`Slider`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SliderInput {
    /// Move the value by a signed amount.
    Step(i32),
    /// Pointer pressed at a position.
    Press(Point),
    /// Pointer moved to a position.
    Drag(Point),
    /// Pointer released.
    Release,
}

/// Change listener: receives the listener's target and the new value.
pub type ChangeListener<T> = fn(&mut T, i32);

/// Integer slider drawn as a horizontal track with a round thumb.
pub struct Slider<T> {
    /// Area the track is centered in, horizontally spanning the full range.
    track: Rectangle,
    min: i32,
    max: i32,
    value: i32,
    dragging: bool,
    listener: Option<ChangeListener<T>>,
}

impl<T> Slider<T> {
    /// Create a slider at `min`. A reversed range is swapped.
    pub const fn new(
        track: Rectangle,
        min: i32,
        max: i32,
    ) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            track,
            min,
            max,
            value: min,
            dragging: false,
            listener: None,
        }
    }

    /// Register the change listener, replacing any previous one.
    pub fn subscribe(
        &mut self,
        listener: ChangeListener<T>,
    ) {
        self.listener = Some(listener);
    }

    #[inline]
    pub const fn value(&self) -> i32 { self.value }

    #[inline]
    pub const fn range(&self) -> (i32, i32) { (self.min, self.max) }

    #[inline]
    pub const fn is_dragging(&self) -> bool { self.dragging }

    #[inline]
    pub const fn track(&self) -> Rectangle { self.track }

    /// Set the value programmatically. Notifies the listener on change.
    ///
    /// Returns `true` if the value moved.
    pub fn set_value(
        &mut self,
        value: i32,
        target: &mut T,
    ) -> bool {
        let value = value.clamp(self.min, self.max);
        if value == self.value {
            return false;
        }
        self.value = value;
        if let Some(listener) = self.listener {
            listener(target, value);
        }
        true
    }

    /// Apply one input. Returns `true` if the value moved.
    pub fn handle(
        &mut self,
        input: SliderInput,
        target: &mut T,
    ) -> bool {
        match input {
            SliderInput::Step(delta) => self.set_value(self.value.saturating_add(delta), target),
            SliderInput::Press(point) => {
                if !self.hit_area().contains(point) {
                    return false;
                }
                self.dragging = true;
                self.set_value(self.value_at(point.x), target)
            }
            SliderInput::Drag(point) => {
                if !self.dragging {
                    return false;
                }
                self.set_value(self.value_at(point.x), target)
            }
            SliderInput::Release => {
                self.dragging = false;
                false
            }
        }
    }

    /// Track area grown vertically by the hit slop.
    fn hit_area(&self) -> Rectangle {
        Rectangle::new(
            self.track.top_left - Point::new(0, HIT_SLOP as i32),
            self.track.size + Size::new(0, 2 * HIT_SLOP),
        )
    }

    /// Pixel span of the track: distance between its first and last column.
    #[inline]
    const fn span(&self) -> i64 { self.track.size.width.saturating_sub(1) as i64 }

    /// Value under the horizontal position `x`, rounded to the nearest step.
    fn value_at(
        &self,
        x: i32,
    ) -> i32 {
        let span = self.span();
        if span == 0 {
            return self.min;
        }
        let offset = (i64::from(x) - i64::from(self.track.top_left.x)).clamp(0, span);
        let range = i64::from(self.max) - i64::from(self.min);
        (i64::from(self.min) + (offset * range + span / 2) / span) as i32
    }

    /// Horizontal position of the thumb center.
    fn thumb_x(&self) -> i32 {
        let range = i64::from(self.max) - i64::from(self.min);
        if range == 0 {
            return self.track.top_left.x;
        }
        let offset = (i64::from(self.value) - i64::from(self.min)) * self.span() / range;
        self.track.top_left.x + offset as i32
    }

    /// Draw track, progress and thumb. Display errors are ignored.
    pub fn draw<D>(
        &self,
        display: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        let y = self.track.center().y;
        let left = Point::new(self.track.top_left.x, y);
        let right = Point::new(self.track.top_left.x + self.span() as i32, y);
        let thumb = Point::new(self.thumb_x(), y);

        Line::new(left, right).into_styled(TRACK_STYLE).draw(display).ok();
        Line::new(left, thumb).into_styled(PROGRESS_STYLE).draw(display).ok();
        Circle::with_center(thumb, THUMB_DIAMETER)
            .into_styled(THUMB_STYLE)
            .draw(display)
            .ok();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

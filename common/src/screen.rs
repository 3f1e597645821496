//! Host screen: the gauge above a slider that drives it.
//!
//! # Layout
//!
//! ```text
//! ┌──────────────── 572 ────────────────┐
//! │                                     │
//! │            speedometer              │ 572
//! │                                     │
//! ├─────────────────────────────────────┤
//! │   ━━━━━━━━━━━━━●───────────────     │ 64  slider
//! └─────────────────────────────────────┘
//! ```
//!
//! The slider spans `0..=max_speed` and starts at the configured speed.
//! Every slider change calls [`forward_speed`], which hands the value to the
//! gauge unchanged.

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};

use crate::{
    colors::WHITE,
    config::{GaugeConfig, MIN_SIZE},
    layout::MeasureSpec,
    resources::Resources,
    widgets::{Slider, SliderInput, Speedometer},
};

// =============================================================================
// Layout Constants
// =============================================================================

/// Screen width: exactly one gauge wide.
pub const SCREEN_WIDTH: u32 = MIN_SIZE;

/// Height reserved below the gauge for the slider.
pub const SLIDER_AREA_HEIGHT: u32 = 64;

/// Screen height: gauge plus slider area.
pub const SCREEN_HEIGHT: u32 = MIN_SIZE + SLIDER_AREA_HEIGHT;

/// Horizontal inset of the slider track.
const SLIDER_INSET: u32 = 32;

/// Height of the slider track rectangle.
const SLIDER_TRACK_HEIGHT: u32 = 8;

/// Slider track, vertically centered in the slider area.
const SLIDER_TRACK: Rectangle = Rectangle::new(
    Point::new(
        SLIDER_INSET as i32,
        (MIN_SIZE + (SLIDER_AREA_HEIGHT - SLIDER_TRACK_HEIGHT) / 2) as i32,
    ),
    Size::new(SCREEN_WIDTH - 2 * SLIDER_INSET, SLIDER_TRACK_HEIGHT),
);

const SLIDER_AREA: Rectangle = Rectangle::new(Point::new(0, MIN_SIZE as i32), Size::new(SCREEN_WIDTH, SLIDER_AREA_HEIGHT));

const BACKGROUND: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(WHITE);

// =============================================================================
// Screen
// =============================================================================

/// Slider change listener: forward the value to the gauge.
pub fn forward_speed(
    gauge: &mut Speedometer,
    speed: i32,
) {
    gauge.set_speed(speed);
}

/// The gauge and the slider bound to it.
pub struct SpeedometerScreen {
    gauge: Speedometer,
    slider: Slider<Speedometer>,
    /// Size the gauge settled on during layout.
    gauge_size: Size,
}

impl SpeedometerScreen {
    pub fn new(
        config: &GaugeConfig,
        resources: Resources,
    ) -> Self {
        let mut gauge = Speedometer::with_resources(config, resources);
        let gauge_size = gauge.measure(MeasureSpec::AtMost(SCREEN_WIDTH), MeasureSpec::AtMost(MIN_SIZE));

        let max = gauge.max_speed().max(0);
        let mut slider = Slider::new(SLIDER_TRACK, 0, max);
        // Position the thumb before subscribing so the gauge keeps its configured speed
        slider.set_value(config.speed, &mut gauge);
        slider.subscribe(forward_speed);

        Self { gauge, slider, gauge_size }
    }

    #[inline]
    pub const fn gauge(&self) -> &Speedometer { &self.gauge }

    #[inline]
    pub const fn slider(&self) -> &Slider<Speedometer> { &self.slider }

    #[inline]
    pub const fn gauge_size(&self) -> Size { self.gauge_size }

    /// Route one input to the slider. Returns `true` if the value moved.
    pub fn handle(
        &mut self,
        input: SliderInput,
    ) -> bool {
        self.slider.handle(input, &mut self.gauge)
    }

    /// Whether the next frame needs painting.
    #[inline]
    pub const fn needs_redraw(&self) -> bool { self.gauge.redraw().is_pending() }

    /// Paint the whole screen and acknowledge pending redraws.
    ///
    /// Returns the number of requests this frame satisfied.
    pub fn draw<D>(
        &mut self,
        display: &mut D,
    ) -> u32
    where
        D: DrawTarget<Color = Rgb565>,
    {
        Rectangle::new(Point::zero(), self.gauge_size)
            .into_styled(BACKGROUND)
            .draw(display)
            .ok();
        SLIDER_AREA.into_styled(BACKGROUND).draw(display).ok();

        self.gauge.draw(display);
        self.slider.draw(display);

        self.gauge.redraw_mut().take()
    }
}

impl Default for SpeedometerScreen {
    fn default() -> Self { Self::new(&GaugeConfig::new(), Resources::DEFAULT) }
}

// =============================================================================
// Unit Tests
// =============================================================================

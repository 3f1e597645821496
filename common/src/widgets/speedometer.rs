//! Speedometer dial widget.
//!
//! A circular gauge with a gray background track, three colored speed bands,
//! min/max labels, a pointer arrow and a numeric readout.
//!
//! # Layout (widget-local coordinates, before the stroke translation)
//!
//! ```text
//!          ┌──────────── bounds ────────────┐
//!          │        ╭────────────────╮      │
//!          │      ╭╯   low │ medium   ╰╮    │
//!          │     ╱         120          ╲   │  readout at (w/2, h*0.5)
//!          │    │  0  ╲            200   │  │  labels at (w/6, h*0.7) and (w*3/4, h*0.7)
//!          │     ╲       ╲ arrow  high ╱    │
//!          └────────────────────────────────┘
//! ```
//!
//! # Draw Order
//!
//! | # | Command | Stroke | Color |
//! |---|---------|--------|-------|
//! | 1 | Background track (−190°, sweep 201°) | 36 | gray |
//! | 2 | Low, medium, high bands | 24 | configured |
//! | 3 | Min label `0`, max label `max_speed` | - | black |
//! | 4 | Pointer arrow | 8 | configured |
//! | 5 | Readout | - | black |
//!
//! The display is translated by half the background stroke before drawing so
//! the track is not clipped at the widget edge.
//!
//! # Degenerate Configuration
//!
//! Nothing here validates the config (see [`GaugeConfig::validate`]). A zero
//! `max_speed` saturates every angle, inverted borders give a negative medium
//! sweep; the widget still draws without panicking.

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb565,
    prelude::*,
    primitives::Rectangle,
    text::{Baseline, renderer::TextRenderer},
};

use crate::{
    colors::{BLACK, GRAY},
    config::{ARROW_STROKE, BACKGROUND_STROKE, BAND_STROKE, BASE_HEIGHT, BASE_WIDTH, GaugeConfig, MIN_SIZE},
    dial::{self, Bands, TRACK},
    layout::{MeasureSpec, resolve_size},
    render::RedrawRequests,
    resources::{Resources, ValueText},
    scene::{DrawCommand, Scene},
    styles::font_for_size,
};

/// Text color for labels and the readout.
const TEXT_COLOR: Rgb565 = BLACK;

/// Track color behind the bands.
const BACKGROUND_COLOR: Rgb565 = GRAY;

/// Value shown by the min label.
const MIN_LABEL_VALUE: i32 = 0;

/// Offset applied to the display so the track stroke stays inside the widget.
const STROKE_OFFSET: Point = Point::new((BACKGROUND_STROKE / 2) as i32, (BACKGROUND_STROKE / 2) as i32);

/// Speedometer render object.
///
/// Holds the gauge state and turns it into a [`Scene`]. It does not know
/// about windows or input; a host screen forwards values to [`set_speed`],
/// negotiates size through [`measure`] and calls [`draw`] when
/// [`redraw`](Self::redraw) is pending.
///
/// [`set_speed`]: Self::set_speed
/// [`measure`]: Self::measure
/// [`draw`]: Self::draw
#[derive(Clone, Debug)]
pub struct Speedometer {
    speed: i32,
    max_speed: i32,
    low_medium_border: i32,
    medium_high_border: i32,
    arrow_color: Rgb565,
    low_speed_color: Rgb565,
    medium_speed_color: Rgb565,
    high_speed_color: Rgb565,
    text_size: u32,
    counter_text_size: u32,

    resources: Resources,

    /// Dial area in widget-local coordinates, updated by `measure`.
    bounds: Rectangle,

    redraw: RedrawRequests,
}

impl Speedometer {
    /// Create a gauge using the default [`Resources`].
    pub fn new(config: &GaugeConfig) -> Self { Self::with_resources(config, Resources::DEFAULT) }

    /// Create a gauge with host-provided resources.
    pub fn with_resources(
        config: &GaugeConfig,
        resources: Resources,
    ) -> Self {
        let mut gauge = Self {
            speed: 0,
            max_speed: 0,
            low_medium_border: 0,
            medium_high_border: 0,
            arrow_color: BLACK,
            low_speed_color: BLACK,
            medium_speed_color: BLACK,
            high_speed_color: BLACK,
            text_size: 0,
            counter_text_size: 0,
            resources,
            bounds: Rectangle::new(Point::zero(), Size::new(BASE_WIDTH, BASE_HEIGHT)),
            redraw: RedrawRequests::new(),
        };
        gauge.apply(config);
        gauge
    }

    /// Replace every configured field, including the current speed.
    pub fn configure(
        &mut self,
        config: &GaugeConfig,
    ) {
        self.apply(config);
        self.redraw.request();
    }

    fn apply(
        &mut self,
        config: &GaugeConfig,
    ) {
        self.speed = config.speed;
        self.max_speed = config.max_speed;
        self.low_medium_border = config.low_medium_border;
        self.medium_high_border = config.resolved_medium_high_border();
        self.arrow_color = config.arrow_color;
        self.low_speed_color = config.low_speed_color;
        self.medium_speed_color = config.medium_speed_color;
        self.high_speed_color = config.high_speed_color;
        self.text_size = config.resolved_text_size(&self.resources);
        self.counter_text_size = config.resolved_counter_text_size(&self.resources);
    }

    // -------------------------------------------------------------------------
    // State
    // -------------------------------------------------------------------------

    /// Set the displayed speed and request a redraw.
    ///
    /// Every call records exactly one request, even if the value is unchanged.
    /// The value is not clamped: speeds outside `[0, max_speed]` point the
    /// arrow past the ends of the track.
    pub const fn set_speed(
        &mut self,
        speed: i32,
    ) {
        self.speed = speed;
        self.redraw.request();
    }

    #[inline]
    pub const fn speed(&self) -> i32 { self.speed }

    #[inline]
    pub const fn max_speed(&self) -> i32 { self.max_speed }

    #[inline]
    pub const fn borders(&self) -> (i32, i32) { (self.low_medium_border, self.medium_high_border) }

    #[inline]
    pub const fn bounds(&self) -> Rectangle { self.bounds }

    #[inline]
    pub const fn redraw(&self) -> &RedrawRequests { &self.redraw }

    #[inline]
    pub const fn redraw_mut(&mut self) -> &mut RedrawRequests { &mut self.redraw }

    /// Absolute angle of the pointer arrow.
    #[inline]
    pub fn arrow_angle(&self) -> i32 { dial::arrow_angle(self.speed, self.max_speed) }

    /// Current band layout.
    #[inline]
    pub fn bands(&self) -> Bands { Bands::new(self.low_medium_border, self.medium_high_border, self.max_speed) }

    // -------------------------------------------------------------------------
    // Layout
    // -------------------------------------------------------------------------

    /// Negotiate the widget size and recompute the draw bounds.
    ///
    /// The gauge asks for [`MIN_SIZE`] on both axes. The bounds are the
    /// measured area minus one background stroke width on each axis.
    pub fn measure(
        &mut self,
        width: MeasureSpec,
        height: MeasureSpec,
    ) -> Size {
        let size = Size::new(resolve_size(MIN_SIZE, width), resolve_size(MIN_SIZE, height));
        let bounds = Rectangle::new(
            Point::zero(),
            Size::new(
                size.width.saturating_sub(BACKGROUND_STROKE),
                size.height.saturating_sub(BACKGROUND_STROKE),
            ),
        );
        if bounds != self.bounds {
            self.bounds = bounds;
            self.redraw.request();
        }
        size
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Describe the current frame. Pure: no state changes.
    pub fn scene(&self) -> Scene {
        let mut scene = Scene::new(self.bounds);
        let bands = self.bands();

        scene.push(DrawCommand::Arc {
            span: TRACK,
            stroke: BACKGROUND_STROKE,
            color: BACKGROUND_COLOR,
        });
        scene.push(DrawCommand::Arc { span: bands.low, stroke: BAND_STROKE, color: self.low_speed_color });
        scene.push(DrawCommand::Arc {
            span: bands.medium,
            stroke: BAND_STROKE,
            color: self.medium_speed_color,
        });
        scene.push(DrawCommand::Arc { span: bands.high, stroke: BAND_STROKE, color: self.high_speed_color });

        let (w, h) = (self.bounds.size.width as f32, self.bounds.size.height as f32);

        scene.push(self.text_command(MIN_LABEL_VALUE, w / 6.0, h * 0.7, self.text_size));
        scene.push(self.text_command(self.max_speed, w / 4.0 * 3.0, h * 0.7, self.text_size));

        scene.push(DrawCommand::Needle {
            angle: self.arrow_angle(),
            stroke: ARROW_STROKE,
            color: self.arrow_color,
        });

        scene.push(self.text_command(self.speed, w / 2.0, h * 0.5, self.counter_text_size));

        scene
    }

    /// Text command for `value`, offset by half its measured box from the anchor.
    fn text_command(
        &self,
        value: i32,
        anchor_x: f32,
        anchor_y: f32,
        size: u32,
    ) -> DrawCommand {
        let text: ValueText = self.resources.format_speed(value);
        let style = MonoTextStyle::new(font_for_size(size), TEXT_COLOR);
        let text_box = style
            .measure_string(&text, Point::zero(), Baseline::Alphabetic)
            .bounding_box
            .size;

        let x = anchor_x - text_box.width as f32 / 2.0;
        let y = anchor_y - text_box.height as f32 / 2.0;

        DrawCommand::Text { text, position: Point::new(x as i32, y as i32), size, color: TEXT_COLOR }
    }

    /// Draw the current frame onto `display`.
    ///
    /// Does not acknowledge pending redraws; the host calls
    /// [`RedrawRequests::take`] once the frame is on screen.
    pub fn draw<D>(
        &self,
        display: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        let mut display = display.translated(STROKE_OFFSET);
        self.scene().draw(&mut display);
    }
}

impl Default for Speedometer {
    fn default() -> Self { Self::new(&GaugeConfig::new()) }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{GREEN, RED, WHITE, YELLOW};
    use crate::dial::{ArcSpan, END_ANGLE, START_ANGLE, TOTAL_SWEEP};
    use crate::test_support::Canvas;

    fn scenario_gauge() -> Speedometer {
        Speedometer::new(
            &GaugeConfig::new()
                .max_speed(200)
                .low_medium_border(60)
                .medium_high_border(140)
                .speed(100),
        )
    }

    fn texts(scene: &Scene) -> impl Iterator<Item = (&str, Point, u32)> {
        scene.commands().iter().filter_map(|c| match c {
            DrawCommand::Text { text, position, size, .. } => Some((text.as_str(), *position, *size)),
            _ => None,
        })
    }

    fn needle_angle(scene: &Scene) -> i32 {
        scene
            .commands()
            .iter()
            .find_map(|c| match c {
                DrawCommand::Needle { angle, .. } => Some(*angle),
                _ => None,
            })
            .unwrap()
    }

    // -------------------------------------------------------------------------
    // Construction
    // -------------------------------------------------------------------------

    #[test]
    fn test_defaults() {
        let gauge = Speedometer::default();
        assert_eq!(gauge.speed(), 0);
        assert_eq!(gauge.max_speed(), 200);
        assert_eq!(gauge.borders(), (0, 200));
        assert_eq!(gauge.bounds().size, Size::new(BASE_WIDTH, BASE_HEIGHT));
        assert!(gauge.redraw().is_pending(), "new gauge needs a first frame");
    }

    #[test]
    fn test_configure_replaces_fields() {
        let mut gauge = Speedometer::default();
        gauge.redraw_mut().take();
        gauge.configure(&GaugeConfig::new().max_speed(300).speed(42));
        assert_eq!(gauge.max_speed(), 300);
        assert_eq!(gauge.speed(), 42);
        assert_eq!(gauge.borders(), (0, 300));
        assert_eq!(gauge.redraw().pending(), 1);
    }

    #[test]
    fn test_text_sizes_fall_back_to_resources() {
        let resources = Resources { speed_value: "%d", default_text_size: 12, default_counter_text_size: 24 };
        let gauge = Speedometer::with_resources(&GaugeConfig::new(), resources);
        let scene = gauge.scene();
        let sizes: Vec<u32> = texts(&scene).map(|(_, _, size)| size).collect();
        assert_eq!(sizes, [12, 12, 24]);
    }

    // -------------------------------------------------------------------------
    // set_speed
    // -------------------------------------------------------------------------

    #[test]
    fn test_set_speed_requests_one_redraw_per_call() {
        let mut gauge = Speedometer::default();
        gauge.redraw_mut().take();

        gauge.set_speed(50);
        assert_eq!(gauge.redraw().pending(), 1);

        gauge.set_speed(50);
        gauge.set_speed(50);
        assert_eq!(gauge.redraw().pending(), 3, "identical values still request a redraw");
        assert_eq!(gauge.speed(), 50);
    }

    #[test]
    fn test_set_speed_is_idempotent() {
        let mut gauge = scenario_gauge();
        gauge.set_speed(75);
        let first = gauge.scene();
        gauge.set_speed(75);
        assert_eq!(gauge.scene(), first);
    }

    #[test]
    fn test_set_speed_does_not_clamp() {
        let mut gauge = Speedometer::default();
        gauge.set_speed(-30);
        assert_eq!(gauge.speed(), -30);
        assert!(gauge.arrow_angle() < START_ANGLE);

        gauge.set_speed(260);
        assert_eq!(gauge.speed(), 260);
        assert!(gauge.arrow_angle() > END_ANGLE);
    }

    // -------------------------------------------------------------------------
    // measure
    // -------------------------------------------------------------------------

    #[test]
    fn test_measure_unspecified_is_square_min_size() {
        let mut gauge = Speedometer::default();
        let size = gauge.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified);
        assert_eq!(size, Size::new(572, 572));
        assert_eq!(gauge.bounds(), Rectangle::new(Point::zero(), Size::new(536, 536)));
    }

    #[test]
    fn test_measure_respects_specs() {
        let mut gauge = Speedometer::default();
        let size = gauge.measure(MeasureSpec::Exactly(700), MeasureSpec::AtMost(400));
        assert_eq!(size, Size::new(700, 400));
        assert_eq!(gauge.bounds().size, Size::new(664, 364));

        let size = gauge.measure(MeasureSpec::AtMost(1000), MeasureSpec::AtMost(1000));
        assert_eq!(size, Size::new(572, 572), "at-most larger than desired keeps desired");
    }

    #[test]
    fn test_measure_tiny_size_saturates() {
        let mut gauge = Speedometer::default();
        gauge.measure(MeasureSpec::Exactly(10), MeasureSpec::Exactly(10));
        assert_eq!(gauge.bounds().size, Size::zero());
        gauge.scene();
    }

    #[test]
    fn test_measure_requests_redraw_only_on_change() {
        let mut gauge = Speedometer::default();
        gauge.redraw_mut().take();

        gauge.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified);
        assert_eq!(gauge.redraw().pending(), 1);

        gauge.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified);
        assert_eq!(gauge.redraw().pending(), 1, "same size, no new request");
    }

    // -------------------------------------------------------------------------
    // scene
    // -------------------------------------------------------------------------

    #[test]
    fn test_scene_draw_order() {
        let scene = scenario_gauge().scene();
        let kinds: Vec<&str> = scene
            .commands()
            .iter()
            .map(|c| match c {
                DrawCommand::Arc { .. } => "arc",
                DrawCommand::Needle { .. } => "needle",
                DrawCommand::Text { .. } => "text",
            })
            .collect();
        assert_eq!(kinds, ["arc", "arc", "arc", "arc", "text", "text", "needle", "text"]);
    }

    #[test]
    fn test_scene_scenario_arcs() {
        let scene = scenario_gauge().scene();
        let commands = scene.commands();

        assert_eq!(
            commands[0],
            DrawCommand::Arc { span: ArcSpan::new(-190, 201), stroke: 36, color: GRAY }
        );
        assert_eq!(commands[1], DrawCommand::Arc { span: ArcSpan::new(-190, 60), stroke: 24, color: GREEN });
        assert_eq!(commands[2], DrawCommand::Arc { span: ArcSpan::new(-130, 80), stroke: 24, color: YELLOW });
        assert_eq!(commands[3], DrawCommand::Arc { span: ArcSpan::new(-50, 61), stroke: 24, color: RED });
        assert_eq!(commands[6], DrawCommand::Needle { angle: -90, stroke: 8, color: RED });
    }

    #[test]
    fn test_scene_band_sweeps_sum_to_track() {
        let gauge = scenario_gauge();
        assert_eq!(gauge.bands().total_sweep(), TOTAL_SWEEP);
    }

    #[test]
    fn test_scene_zero_speed() {
        let gauge = Speedometer::new(&GaugeConfig::new().speed(0));
        let scene = gauge.scene();
        assert_eq!(needle_angle(&scene), START_ANGLE);
        let (readout, _, _) = texts(&scene).last().unwrap();
        assert_eq!(readout, "0");
    }

    #[test]
    fn test_scene_max_speed() {
        let gauge = Speedometer::new(&GaugeConfig::new().max_speed(200).speed(200));
        assert_eq!(needle_angle(&gauge.scene()), END_ANGLE);
    }

    #[test]
    fn test_scene_labels_and_readout_text() {
        let resources = Resources { speed_value: "%d km/h", ..Resources::DEFAULT };
        let gauge = Speedometer::with_resources(&GaugeConfig::new().max_speed(240).speed(88), resources);
        let scene = gauge.scene();
        let labels: Vec<&str> = texts(&scene).map(|(text, _, _)| text).collect();
        assert_eq!(labels, ["0 km/h", "240 km/h", "88 km/h"]);
    }

    #[test]
    fn test_scene_text_positions_center_on_anchor() {
        let mut gauge = Speedometer::new(&GaugeConfig::new().speed(100));
        gauge.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified);
        let scene = gauge.scene();
        let (w, h) = (536.0f32, 536.0f32);

        for ((text, position, size), (ax, ay)) in
            texts(&scene).zip([(w / 6.0, h * 0.7), (w * 0.75, h * 0.7), (w / 2.0, h * 0.5)])
        {
            let font = font_for_size(size);
            let text_w = font.character_size.width as f32 * text.len() as f32
                + font.character_spacing as f32 * (text.len() as f32 - 1.0);
            let text_h = font.character_size.height as f32;
            assert_eq!(position.x, (ax - text_w / 2.0) as i32, "x of {text}");
            assert_eq!(position.y, (ay - text_h / 2.0) as i32, "y of {text}");
        }
    }

    #[test]
    fn test_scene_zero_max_speed_does_not_panic() {
        let gauge = Speedometer::new(&GaugeConfig::new().max_speed(0).speed(10));
        let scene = gauge.scene();
        assert_eq!(needle_angle(&scene), START_ANGLE.saturating_add(i32::MAX));

        let mut canvas = Canvas::new(Size::new(600, 600));
        gauge.draw(&mut canvas);
    }

    // -------------------------------------------------------------------------
    // draw
    // -------------------------------------------------------------------------

    #[test]
    fn test_draw_stays_inside_measured_area() {
        const MARGIN: i32 = 10;
        let mut gauge = scenario_gauge();
        let size = gauge.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified);

        let mut canvas = Canvas::new(Size::new(size.width + 2 * MARGIN as u32, size.height + 2 * MARGIN as u32));
        gauge.draw(&mut canvas.translated(Point::new(MARGIN, MARGIN)));

        // Allow one pixel of rasterization rounding on each side
        let drawn = canvas.drawn_area().unwrap();
        assert!(
            drawn.top_left.x >= MARGIN - 1 && drawn.top_left.y >= MARGIN - 1,
            "track clipped at top/left: {drawn:?}"
        );
        let bottom_right = drawn.bottom_right().unwrap();
        assert!(
            bottom_right.x <= MARGIN + size.width as i32 && bottom_right.y <= MARGIN + size.height as i32,
            "drawing leaked outside the measured size: {drawn:?}"
        );
    }

    #[test]
    fn test_draw_paints_configured_colors() {
        let mut gauge = Speedometer::new(
            &GaugeConfig::new()
                .low_medium_border(60)
                .medium_high_border(140)
                .speed(100)
                .arrow_color(WHITE),
        );
        gauge.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified);

        let mut canvas = Canvas::new(Size::new(572, 572));
        gauge.draw(&mut canvas);

        assert!(canvas.count(GRAY) > 0, "track edges visible around the bands");
        assert!(canvas.count(GREEN) > 0);
        assert!(canvas.count(YELLOW) > 0);
        assert!(canvas.count(RED) > 0);
        assert!(canvas.count(WHITE) > 0, "arrow");
        assert!(canvas.count(BLACK) > 0, "labels and readout");
    }

    #[test]
    fn test_draw_does_not_acknowledge_redraw() {
        let gauge = Speedometer::default();
        let mut canvas = Canvas::new(Size::new(572, 572));
        gauge.draw(&mut canvas);
        assert!(gauge.redraw().is_pending());
    }
}

//! Drawing commands produced by a widget and executed on a display.
//!
//! A widget describes one frame as a [`Scene`]: an ordered list of
//! [`DrawCommand`]s in widget-local coordinates. Building the scene is pure,
//! which keeps the geometry testable without a display; [`Scene::draw`] then
//! rasterizes it with `embedded-graphics` primitives onto any
//! `DrawTarget<Color = Rgb565>`.
//!
//! Later commands are drawn over earlier ones.

use embedded_graphics::{
    geometry::Angle,
    mono_font::MonoTextStyle,
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Arc, Line, PrimitiveStyle, Rectangle},
    text::{Baseline, Text},
};
use heapless::Vec;

use crate::dial::{ArcSpan, point_on_circle};
use crate::resources::ValueText;
use crate::styles::font_for_size;

/// Maximum commands in one scene (track + 3 bands + 2 labels + arrow + readout).
pub const MAX_COMMANDS: usize = 8;

/// One drawing operation.
#[derive(Clone, PartialEq, Debug)]
pub enum DrawCommand {
    /// Open stroked arc on the dial circle.
    Arc { span: ArcSpan, stroke: u32, color: Rgb565 },
    /// Radial tick from the dial center to the circle at `angle`.
    Needle { angle: i32, stroke: u32, color: Rgb565 },
    /// Text with its left edge at `position.x` and baseline at `position.y`,
    /// in the font chosen by [`font_for_size`] for `size`.
    Text {
        text: ValueText,
        position: Point,
        size: u32,
        color: Rgb565,
    },
}

/// An ordered frame description for a dial inscribed in `bounds`.
#[derive(Clone, PartialEq, Debug)]
pub struct Scene {
    bounds: Rectangle,
    commands: Vec<DrawCommand, MAX_COMMANDS>,
}

impl Scene {
    /// Empty scene whose dial circle is inscribed in `bounds`.
    pub const fn new(bounds: Rectangle) -> Self {
        Self { bounds, commands: Vec::new() }
    }

    /// Append a command. Commands beyond [`MAX_COMMANDS`] are dropped.
    pub fn push(
        &mut self,
        command: DrawCommand,
    ) {
        self.commands.push(command).ok();
    }

    #[inline]
    pub fn commands(&self) -> &[DrawCommand] { &self.commands }

    #[inline]
    pub const fn bounds(&self) -> Rectangle { self.bounds }

    /// Diameter of the dial circle: the shorter side of the bounds.
    #[inline]
    pub const fn diameter(&self) -> u32 {
        let size = self.bounds.size;
        if size.width < size.height { size.width } else { size.height }
    }

    /// Center of the dial circle.
    #[inline]
    pub fn center(&self) -> Point { self.bounds.center() }

    /// Rasterize every command in order. Display errors are ignored.
    pub fn draw<D>(
        &self,
        display: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        let center = self.center();
        let diameter = self.diameter();

        for command in &self.commands {
            match command {
                DrawCommand::Arc { span, stroke, color } => {
                    Arc::with_center(
                        center,
                        diameter,
                        Angle::from_degrees(normalize_angle(span.start) as f32),
                        Angle::from_degrees(span.sweep.clamp(-360, 360) as f32),
                    )
                    .into_styled(PrimitiveStyle::with_stroke(*color, *stroke))
                    .draw(display)
                    .ok();
                }
                DrawCommand::Needle { angle, stroke, color } => {
                    let tip = point_on_circle(center, diameter as f32 / 2.0, normalize_angle(*angle));
                    Line::new(center, tip)
                        .into_styled(PrimitiveStyle::with_stroke(*color, *stroke))
                        .draw(display)
                        .ok();
                }
                DrawCommand::Text { text, position, size, color } => {
                    let style = MonoTextStyle::new(font_for_size(*size), *color);
                    Text::with_baseline(text, *position, style, Baseline::Alphabetic)
                        .draw(display)
                        .ok();
                }
            }
        }
    }
}

/// Fold an angle into `[0, 360)`. Saturated angles stay finite and exact.
#[inline]
const fn normalize_angle(angle: i32) -> i32 { angle.rem_euclid(360) }

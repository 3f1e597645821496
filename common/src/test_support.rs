//! In-memory display for host tests.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Records the last color written to each pixel; unwritten pixels are `None`.
pub struct Canvas {
    size: Size,
    pixels: Vec<Option<Rgb565>>,
}

impl Canvas {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            pixels: vec![None; (size.width * size.height) as usize],
        }
    }

    pub fn pixel(
        &self,
        point: Point,
    ) -> Option<Rgb565> {
        self.index(point).and_then(|i| self.pixels[i])
    }

    /// Number of pixels currently holding `color`.
    pub fn count(
        &self,
        color: Rgb565,
    ) -> usize {
        self.pixels.iter().filter(|p| **p == Some(color)).count()
    }

    /// Number of pixels inside `area` currently holding `color`.
    pub fn count_in(
        &self,
        color: Rgb565,
        area: Rectangle,
    ) -> usize {
        area.points().filter(|p| self.pixel(*p) == Some(color)).count()
    }

    /// Bounding box of every written pixel.
    pub fn drawn_area(&self) -> Option<Rectangle> {
        let mut points = self.bounding_box().points().filter(|p| self.pixel(*p).is_some());
        let first = points.next()?;
        let (mut min, mut max) = (first, first);
        for p in points {
            min = min.component_min(p);
            max = max.component_max(p);
        }
        Some(Rectangle::with_corners(min, max))
    }

    fn index(
        &self,
        point: Point,
    ) -> Option<usize> {
        if point.x < 0 || point.y < 0 {
            return None;
        }
        let (x, y) = (point.x as u32, point.y as u32);
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        Some((y * self.size.width + x) as usize)
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size { self.size }
}

impl DrawTarget for Canvas {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some(i) = self.index(point) {
                self.pixels[i] = Some(color);
            }
        }
        Ok(())
    }
}

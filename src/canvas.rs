//! Canvas allocation and scanline gradients.

use image::{Rgb, RgbImage};

/// Which way a channel ramps as rows go down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Weight `t = y / height`: `base` at the top, `base + span` at the bottom.
    Rising,
    /// Weight `1 - t`: `base + span` at the top, `base` at the bottom.
    Falling,
}

/// One channel of a gradient: `base + span * weight`, truncated toward zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ramp {
    /// Value the channel never goes below.
    pub base: u8,
    /// Distance covered over the full height.
    pub span: u8,
    /// Ramp direction.
    pub direction: Direction,
}

impl Ramp {
    /// Channel climbing from `base` as rows go down.
    #[must_use]
    pub const fn rising(base: u8, span: u8) -> Self {
        Self { base, span, direction: Direction::Rising }
    }

    /// Channel settling onto `base` as rows go down.
    #[must_use]
    pub const fn falling(base: u8, span: u8) -> Self {
        Self { base, span, direction: Direction::Falling }
    }

    fn value(&self, t: f64) -> u8 {
        let weight = match self.direction {
            Direction::Rising => t,
            Direction::Falling => 1.0 - t,
        };
        (f64::from(self.base) + f64::from(self.span) * weight).clamp(0.0, 255.0) as u8
    }
}

/// Per-scanline gradient, one ramp per RGB channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    /// Red, green and blue ramps.
    pub channels: [Ramp; 3],
}

impl Gradient {
    /// Colour of row `y` on a canvas `height` rows tall.
    #[must_use]
    pub fn color_at(&self, y: u32, height: u32) -> Rgb<u8> {
        let t = if height == 0 { 0.0 } else { f64::from(y) / f64::from(height) };
        let [r, g, b] = self.channels;
        Rgb([r.value(t), g.value(t), b.value(t)])
    }
}

/// Allocate a black canvas of the given size.
#[must_use]
pub fn new_canvas(width: u32, height: u32) -> RgbImage {
    RgbImage::new(width, height)
}

/// Overwrite every pixel of `canvas` with `gradient`.
pub fn paint_vertical_gradient(canvas: &mut RgbImage, gradient: &Gradient) {
    let height = canvas.height();
    for (y, row) in canvas.enumerate_rows_mut() {
        let color = gradient.color_at(y, height);
        for (_, _, pixel) in row {
            *pixel = color;
        }
    }
}

//! Typeface port: text metrics and glyph rasterisation.

use image::{Rgb, RgbImage};

/// A face that can measure and draw a run of text onto a canvas.
pub trait Typeface {
    /// Human-readable name, used in log output.
    fn name(&self) -> &str;

    /// Width and height in pixels of `text` rendered at `size_px`.
    fn measure(&self, text: &str, size_px: f32) -> (u32, u32);

    /// Draw `text` with its top-left corner at `(x, y)`. Pixels outside the
    /// canvas are clipped.
    fn draw(&self, canvas: &mut RgbImage, x: i32, y: i32, size_px: f32, color: Rgb<u8>, text: &str);
}

//! Drawing primitives and the compositor that applies them to a canvas.

use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use log::warn;

use crate::ports::Typeface;

/// Inclusive pixel bounding box `[x0, y0, x1, y1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BBox {
    /// Left column.
    pub x0: i32,
    /// Top row.
    pub y0: i32,
    /// Right column, inclusive.
    pub x1: i32,
    /// Bottom row, inclusive.
    pub y1: i32,
}

impl BBox {
    /// Box from its corner coordinates.
    #[must_use]
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Square box of side `2 * radius` centred on `(cx, cy)`.
    #[must_use]
    pub const fn around(cx: i32, cy: i32, radius: i32) -> Self {
        Self::new(cx - radius, cy - radius, cx + radius, cy + radius)
    }

    /// Pixel width, or `None` for an inverted box.
    #[must_use]
    pub fn width(&self) -> Option<u32> {
        u32::try_from(self.x1 - self.x0 + 1).ok().filter(|w| *w > 0)
    }

    /// Pixel height, or `None` for an inverted box.
    #[must_use]
    pub fn height(&self) -> Option<u32> {
        u32::try_from(self.y1 - self.y0 + 1).ok().filter(|h| *h > 0)
    }

    fn rect(&self) -> Option<Rect> {
        Some(Rect::at(self.x0, self.y0).of_size(self.width()?, self.height()?))
    }
}

/// Offset duplicate drawn underneath a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shadow {
    /// Offset in pixels, applied to both axes.
    pub offset: i32,
    /// Shadow colour.
    pub fill: Rgb<u8>,
}

/// A single line of text at a fixed position.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    /// The text to draw.
    pub text: String,
    /// Font size in pixels.
    pub size_px: f32,
    /// Top-left corner.
    pub origin: (i32, i32),
    /// Glyph colour.
    pub fill: Rgb<u8>,
    /// Optional drop shadow, drawn first.
    pub shadow: Option<Shadow>,
}

impl TextRun {
    /// A run horizontally centred on a canvas `canvas_width` wide, using the
    /// typeface's metrics.
    #[must_use]
    pub fn centered(
        typeface: &dyn Typeface,
        canvas_width: u32,
        y: i32,
        text: &str,
        size_px: f32,
        fill: Rgb<u8>,
    ) -> Self {
        let (text_width, _) = typeface.measure(text, size_px);
        Self {
            text: text.to_string(),
            size_px,
            origin: (centered_x(canvas_width, text_width), y),
            fill,
            shadow: None,
        }
    }

    /// Attach a drop shadow.
    #[must_use]
    pub fn with_shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = Some(shadow);
        self
    }

    /// Split into a shadow-only run (if any) and the run without its shadow.
    #[must_use]
    pub fn split_shadow(self) -> (Option<TextRun>, TextRun) {
        let shadow = self.shadow.map(|s| TextRun {
            text: self.text.clone(),
            size_px: self.size_px,
            origin: (self.origin.0 + s.offset, self.origin.1 + s.offset),
            fill: s.fill,
            shadow: None,
        });
        (shadow, TextRun { shadow: None, ..self })
    }
}

/// A drawing instruction, applied once.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Filled ellipse inscribed in the box.
    Ellipse {
        /// Bounding box.
        bounds: BBox,
        /// Fill colour.
        fill: Rgb<u8>,
    },
    /// Filled rectangle covering the box.
    Rect {
        /// Bounding box.
        bounds: BBox,
        /// Fill colour.
        fill: Rgb<u8>,
    },
    /// Rectangular outline drawn inward from the box edge.
    Frame {
        /// Outer edge of the frame.
        bounds: BBox,
        /// Stroke colour.
        stroke: Rgb<u8>,
        /// Stroke width in pixels.
        width: u32,
    },
    /// Text run.
    Text(TextRun),
}

/// Left edge that centres `text_width` on a canvas `canvas_width` wide.
///
/// Floor division; negative when the text is wider than the canvas.
#[must_use]
pub fn centered_x(canvas_width: u32, text_width: u32) -> i32 {
    (i64::from(canvas_width) - i64::from(text_width)).div_euclid(2) as i32
}

/// Draw `primitives` in order.
///
/// Shape-only scenes pass `None` for the typeface; text runs are then skipped.
pub fn compose(canvas: &mut RgbImage, primitives: &[Primitive], typeface: Option<&dyn Typeface>) {
    for primitive in primitives {
        draw(canvas, primitive, typeface);
    }
}

/// Draw a single primitive. Anything outside the canvas is clipped.
pub fn draw(canvas: &mut RgbImage, primitive: &Primitive, typeface: Option<&dyn Typeface>) {
    match primitive {
        Primitive::Ellipse { bounds, fill } => fill_ellipse(canvas, *bounds, *fill),
        Primitive::Rect { bounds, fill } => {
            if let Some(rect) = bounds.rect() {
                draw_filled_rect_mut(canvas, rect, *fill);
            }
        }
        Primitive::Frame { bounds, stroke, width } => draw_frame(canvas, *bounds, *stroke, *width),
        Primitive::Text(run) => {
            let Some(typeface) = typeface else {
                warn!("No typeface for text run {:?}, skipped", run.text);
                return;
            };
            if let Some(shadow) = run.shadow {
                let (x, y) = run.origin;
                typeface.draw(
                    canvas,
                    x + shadow.offset,
                    y + shadow.offset,
                    run.size_px,
                    shadow.fill,
                    &run.text,
                );
            }
            typeface.draw(canvas, run.origin.0, run.origin.1, run.size_px, run.fill, &run.text);
        }
    }
}

/// Fill every pixel whose centre lies inside the ellipse inscribed in the
/// box's outer pixel edges, so even spans reach `x1` and `y1`.
fn fill_ellipse(canvas: &mut RgbImage, bounds: BBox, fill: Rgb<u8>) {
    let (Some(w), Some(h)) = (bounds.width(), bounds.height()) else {
        return;
    };
    let (rx, ry) = (f64::from(w) / 2.0, f64::from(h) / 2.0);
    let (cx, cy) = (f64::from(bounds.x0) + rx, f64::from(bounds.y0) + ry);

    let x_start = bounds.x0.max(0);
    let y_start = bounds.y0.max(0);
    let x_end = bounds.x1.min(canvas.width() as i32 - 1);
    let y_end = bounds.y1.min(canvas.height() as i32 - 1);

    for y in y_start..=y_end {
        let dy = (f64::from(y) + 0.5 - cy) / ry;
        for x in x_start..=x_end {
            let dx = (f64::from(x) + 0.5 - cx) / rx;
            if dx * dx + dy * dy <= 1.0 {
                canvas.put_pixel(x as u32, y as u32, fill);
            }
        }
    }
}

fn draw_frame(canvas: &mut RgbImage, bounds: BBox, stroke: Rgb<u8>, width: u32) {
    let (Some(w), Some(h)) = (bounds.width(), bounds.height()) else {
        return;
    };
    if width == 0 {
        return;
    }
    if width * 2 >= w || width * 2 >= h {
        draw_filled_rect_mut(canvas, Rect::at(bounds.x0, bounds.y0).of_size(w, h), stroke);
        return;
    }

    let t = width as i32;
    let sides = [
        Rect::at(bounds.x0, bounds.y0).of_size(w, width),
        Rect::at(bounds.x0, bounds.y1 - t + 1).of_size(w, width),
        Rect::at(bounds.x0, bounds.y0).of_size(width, h),
        Rect::at(bounds.x1 - t + 1, bounds.y0).of_size(width, h),
    ];
    for side in sides {
        draw_filled_rect_mut(canvas, side, stroke);
    }
}

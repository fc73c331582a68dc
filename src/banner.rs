//! The 800×300 credits banner.

use image::{Rgb, RgbImage};

use crate::canvas::{new_canvas, paint_vertical_gradient, Gradient, Ramp};
use crate::primitive::{compose, BBox, Primitive, Shadow, TextRun};
use crate::ports::Typeface;

/// Banner width in pixels.
pub const WIDTH: u32 = 800;
/// Banner height in pixels.
pub const HEIGHT: u32 = 300;
/// File name under `public/images/`.
pub const FILE_NAME: &str = "banner.png";

/// Red at the top fading to teal-blue at the bottom.
pub const GRADIENT: Gradient = Gradient {
    channels: [Ramp::falling(0, 255), Ramp::rising(0, 200), Ramp::rising(0, 255)],
};

const TITLE: &str = "এই অ্যাপটি তৈরি করেছেন মামুন শাইখ";
const TITLE_SIZE: f32 = 40.0;
const TITLE_Y: i32 = 100;

const FEATURE: &str = "আরও অনেক নতুন ফিচার আসছে খুব শীঘ্রই...";
const FEATURE_SIZE: f32 = 30.0;
const FEATURE_Y: i32 = 180;

const TEXT_FILL: Rgb<u8> = Rgb([255, 255, 255]);
const SHADOW: Shadow = Shadow { offset: 2, fill: Rgb([50, 50, 50]) };

const BORDER: Rgb<u8> = Rgb([255, 215, 0]);
const BORDER_WIDTH: u32 = 10;

/// The banner's text runs, centred with `typeface`'s metrics.
#[must_use]
pub fn text_runs(typeface: &dyn Typeface) -> [TextRun; 2] {
    [
        TextRun::centered(typeface, WIDTH, TITLE_Y, TITLE, TITLE_SIZE, TEXT_FILL).with_shadow(SHADOW),
        TextRun::centered(typeface, WIDTH, FEATURE_Y, FEATURE, FEATURE_SIZE, TEXT_FILL)
            .with_shadow(SHADOW),
    ]
}

/// Foreground primitives in draw order: every shadow, then every main run,
/// then the border.
#[must_use]
pub fn banner_primitives(typeface: &dyn Typeface) -> Vec<Primitive> {
    let (shadows, mains): (Vec<_>, Vec<_>) =
        text_runs(typeface).into_iter().map(TextRun::split_shadow).unzip();

    shadows
        .into_iter()
        .flatten()
        .chain(mains)
        .map(Primitive::Text)
        .chain(std::iter::once(Primitive::Frame {
            bounds: BBox::new(0, 0, WIDTH as i32 - 1, HEIGHT as i32 - 1),
            stroke: BORDER,
            width: BORDER_WIDTH,
        }))
        .collect()
}

/// Render the banner.
#[must_use]
pub fn render_banner(typeface: &dyn Typeface) -> RgbImage {
    let mut canvas = new_canvas(WIDTH, HEIGHT);
    paint_vertical_gradient(&mut canvas, &GRADIENT);
    compose(&mut canvas, &banner_primitives(typeface), Some(typeface));
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::bitmap::BitmapTypeface;
    use crate::primitive::centered_x;

    #[test]
    fn exact_dimensions() {
        let banner = render_banner(&BitmapTypeface);
        assert_eq!(banner.dimensions(), (WIDTH, HEIGHT));
        assert_eq!(banner.pixels().count(), (WIDTH * HEIGHT) as usize);
    }

    #[test]
    fn gradient_channels_are_monotonic() {
        let mut prev = GRADIENT.color_at(0, HEIGHT);
        for y in 1..HEIGHT {
            let cur = GRADIENT.color_at(y, HEIGHT);
            assert!(cur[0] <= prev[0], "red rose at row {y}");
            assert!(cur[1] >= prev[1], "green fell at row {y}");
            assert!(cur[2] >= prev[2], "blue fell at row {y}");
            prev = cur;
        }
    }

    #[test]
    fn gradient_matches_channel_formulas_on_every_row() {
        for y in 0..HEIGHT {
            let t = f64::from(y) / f64::from(HEIGHT);
            let expected = Rgb([
                (255.0 * (1.0 - t)) as u8,
                (200.0 * t) as u8,
                (255.0 * t) as u8,
            ]);
            assert_eq!(GRADIENT.color_at(y, HEIGHT), expected, "row {y}");
        }
    }

    #[test]
    fn gradient_column_inside_border_is_monotonic() {
        // Rows between the border and the title carry only the gradient.
        let banner = render_banner(&BitmapTypeface);
        for y in (BORDER_WIDTH + 1)..TITLE_Y as u32 {
            let above = banner.get_pixel(15, y - 1);
            let here = banner.get_pixel(15, y);
            assert!(here[0] <= above[0]);
            assert!(here[1] >= above[1]);
            assert!(here[2] >= above[2]);
        }
    }

    #[test]
    fn border_is_gold_all_round() {
        let banner = render_banner(&BitmapTypeface);
        for (x, y) in [(0, 0), (799, 0), (0, 299), (799, 299), (400, 9), (400, 290), (9, 150)] {
            assert_eq!(*banner.get_pixel(x, y), BORDER, "pixel ({x}, {y})");
        }
        assert_ne!(*banner.get_pixel(10, 150), BORDER);
    }

    #[test]
    fn runs_are_centred_with_fallback_metrics() {
        let face = BitmapTypeface;
        let [title, feature] = text_runs(&face);
        let (tw, _) = face.measure(TITLE, TITLE_SIZE);
        let (fw, _) = face.measure(FEATURE, FEATURE_SIZE);
        assert_eq!(title.origin, (centered_x(WIDTH, tw), TITLE_Y));
        assert_eq!(feature.origin, (centered_x(WIDTH, fw), FEATURE_Y));
        assert!(title.origin.0 >= 0);
    }

    #[test]
    fn shadows_precede_main_text_and_border_is_last() {
        let prims = banner_primitives(&BitmapTypeface);
        assert_eq!(prims.len(), 5);
        let fills: Vec<_> = prims[..4]
            .iter()
            .map(|p| match p {
                Primitive::Text(run) => run.fill,
                other => panic!("expected text, got {other:?}"),
            })
            .collect();
        assert_eq!(fills, [SHADOW.fill, SHADOW.fill, TEXT_FILL, TEXT_FILL]);
        assert!(matches!(prims[4], Primitive::Frame { .. }));
    }

    #[test]
    fn rendering_is_deterministic() {
        assert_eq!(render_banner(&BitmapTypeface), render_banner(&BitmapTypeface));
    }
}

//! The 1200×600 night-sky mosque background.

use image::{Rgb, RgbImage};
use imageproc::filter::gaussian_blur_f32;
use log::debug;
use rand::Rng;

use crate::canvas::{new_canvas, paint_vertical_gradient, Gradient, Ramp};
use crate::primitive::{compose, BBox, Primitive};

/// Background width in pixels.
pub const WIDTH: u32 = 1200;
/// Background height in pixels.
pub const HEIGHT: u32 = 600;
/// File name under `public/images/`.
pub const FILE_NAME: &str = "masjid-bg.jpg";
/// Stars scattered when the config does not say otherwise.
pub const DEFAULT_STARS: usize = 200;

/// Deep blue sky, lighter at the top.
pub const GRADIENT: Gradient = Gradient {
    channels: [Ramp::falling(30, 20), Ramp::falling(40, 30), Ramp::falling(80, 60)],
};

const SILHOUETTE: Rgb<u8> = Rgb([10, 10, 20]);
const MOON: Rgb<u8> = Rgb([255, 255, 220]);
const MOON_RADIUS: i32 = 40;
const BLUR_SIGMA: f32 = 1.5;

/// Dome, minarets and minaret caps, in draw order.
#[must_use]
pub fn silhouette() -> Vec<Primitive> {
    let cx = (WIDTH / 2) as i32;
    let cy = (HEIGHT / 2) as i32;
    let ellipse = |bounds| Primitive::Ellipse { bounds, fill: SILHOUETTE };
    let rect = |bounds| Primitive::Rect { bounds, fill: SILHOUETTE };

    vec![
        ellipse(BBox::new(cx - 100, cy - 150, cx + 100, cy + 50)),
        rect(BBox::new(cx - 200, cy - 250, cx - 180, cy + 100)),
        rect(BBox::new(cx + 180, cy - 250, cx + 200, cy + 100)),
        ellipse(BBox::new(cx - 200, cy - 280, cx - 180, cy - 250)),
        ellipse(BBox::new(cx + 180, cy - 280, cx + 200, cy - 250)),
    ]
}

/// `count` stars over the upper half of a `width`×`height` sky.
///
/// Position, size (1..=3) and grey level (180..=255) come from `rng`.
pub fn star_field<R: Rng>(rng: &mut R, count: usize, width: u32, height: u32) -> Vec<Primitive> {
    let max_x = width as i32;
    let max_y = (height / 2) as i32;
    (0..count)
        .map(|_| {
            let x = rng.random_range(0..=max_x);
            let y = rng.random_range(0..=max_y);
            let size = rng.random_range(1..=3);
            let level: u8 = rng.random_range(180..=255);
            Primitive::Ellipse { bounds: BBox::new(x, y, x + size, y + size), fill: Rgb([level; 3]) }
        })
        .collect()
}

/// The moon, centred in the upper-left quarter.
#[must_use]
pub fn moon() -> Primitive {
    let bounds = BBox::around((WIDTH / 4) as i32, (HEIGHT / 4) as i32, MOON_RADIUS);
    Primitive::Ellipse { bounds, fill: MOON }
}

/// Every foreground primitive in draw order: silhouette, stars, moon.
pub fn scene<R: Rng>(rng: &mut R, stars: usize) -> Vec<Primitive> {
    let mut primitives = silhouette();
    primitives.extend(star_field(rng, stars, WIDTH, HEIGHT));
    primitives.push(moon());
    primitives
}

/// Render the background, blurred.
pub fn render_background<R: Rng>(rng: &mut R, stars: usize) -> RgbImage {
    let mut canvas = new_canvas(WIDTH, HEIGHT);
    paint_vertical_gradient(&mut canvas, &GRADIENT);

    let primitives = scene(rng, stars);
    debug!("Compositing {} primitives ({stars} stars)", primitives.len());
    compose(&mut canvas, &primitives, None);

    gaussian_blur_f32(&canvas, BLUR_SIGMA)
}

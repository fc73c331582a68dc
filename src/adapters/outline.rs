//! Outline fonts loaded from TrueType/OpenType files.

use std::path::Path;

use ab_glyph::{FontVec, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_text_mut, text_size};

use crate::error::FontLoadError;
use crate::ports::Typeface;

/// A scalable face rasterised with `ab_glyph`.
pub struct OutlineTypeface {
    name: String,
    font: FontVec,
}

impl OutlineTypeface {
    /// Load a font file from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid font.
    pub fn load(path: &Path) -> Result<Self, FontLoadError> {
        let data = std::fs::read(path)
            .map_err(|source| FontLoadError::Io { path: path.display().to_string(), source })?;
        let font = FontVec::try_from_vec(data)
            .map_err(|source| FontLoadError::Parse { path: path.display().to_string(), source })?;
        let name = path
            .file_stem()
            .map_or_else(|| path.display().to_string(), |s| s.to_string_lossy().into_owned());
        Ok(Self { name, font })
    }
}

impl Typeface for OutlineTypeface {
    fn name(&self) -> &str {
        &self.name
    }

    fn measure(&self, text: &str, size_px: f32) -> (u32, u32) {
        text_size(PxScale::from(size_px), &self.font, text)
    }

    fn draw(&self, canvas: &mut RgbImage, x: i32, y: i32, size_px: f32, color: Rgb<u8>, text: &str) {
        draw_text_mut(canvas, color, x, y, PxScale::from(size_px), &self.font, text);
    }
}

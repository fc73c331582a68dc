//! Output paths, directory creation and image encoding.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::RgbImage;
use log::debug;

use crate::error::AssetError;

/// Directory, relative to the project root, that receives every asset.
pub const OUTPUT_DIR: &str = "public/images";

/// Encoding for a generated asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Lossless PNG.
    Png,
    /// Baseline JPEG at the given quality (1..=100).
    Jpeg {
        /// Encoder quality.
        quality: u8,
    },
}

/// Validate a JPEG quality value.
///
/// # Errors
///
/// Returns an error if the value is outside 1..=100.
pub fn validate_quality(quality: u8) -> Result<u8, String> {
    if (1..=100).contains(&quality) {
        Ok(quality)
    } else {
        Err(format!("Unsupported JPEG quality {quality}. Valid: 1-100"))
    }
}

/// Path of `file_name` inside the output directory under `root`.
#[must_use]
pub fn resolve_output_path(root: &Path, file_name: &str) -> PathBuf {
    root.join(OUTPUT_DIR).join(file_name)
}

/// Encode `canvas` and write it to `path`, replacing any existing file.
///
/// Missing parent directories are created first.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be created, or encoding
/// fails.
pub fn save_canvas(canvas: &RgbImage, path: &Path, format: OutputFormat) -> Result<(), AssetError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }

    let mut writer = BufWriter::new(File::create(path)?);
    match format {
        OutputFormat::Png => canvas.write_with_encoder(PngEncoder::new(&mut writer))?,
        OutputFormat::Jpeg { quality } => {
            canvas.write_with_encoder(JpegEncoder::new_with_quality(&mut writer, quality))?;
        }
    }
    writer.flush()?;

    debug!("Wrote {}x{} {format:?} to {}", canvas.width(), canvas.height(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn checker(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            if (x + y) % 2 == 0 {
                Rgb([255, 215, 0])
            } else {
                Rgb([10, 10, 20])
            }
        })
    }

    #[test]
    fn output_path_layout() {
        let path = resolve_output_path(Path::new("/srv/site"), "banner.png");
        assert_eq!(path, PathBuf::from("/srv/site/public/images/banner.png"));
    }

    #[test]
    fn quality_bounds() {
        assert_eq!(validate_quality(95), Ok(95));
        assert!(validate_quality(1).is_ok());
        assert!(validate_quality(100).is_ok());
        assert!(validate_quality(0).is_err());
        assert!(validate_quality(101).is_err());
    }

    #[test]
    fn png_is_lossless_and_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = resolve_output_path(dir.path(), "banner.png");
        assert!(!path.parent().unwrap().exists());

        let canvas = checker(8, 4);
        save_canvas(&canvas, &path, OutputFormat::Png).unwrap();

        let data = std::fs::read(&path).unwrap();
        assert_eq!(&data[..8], &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);
        let decoded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(decoded, canvas);
    }

    #[test]
    fn jpeg_keeps_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = resolve_output_path(dir.path(), "masjid-bg.jpg");

        save_canvas(&checker(12, 6), &path, OutputFormat::Jpeg { quality: 95 }).unwrap();

        let data = std::fs::read(&path).unwrap();
        assert_eq!(&data[..2], &[0xFF, 0xD8]);
        let decoded = image::open(&path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (12, 6));
    }

    #[test]
    fn existing_file_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = resolve_output_path(dir.path(), "banner.png");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, vec![0u8; 100_000]).unwrap();

        save_canvas(&checker(2, 2), &path, OutputFormat::Png).unwrap();

        let len = std::fs::metadata(&path).unwrap().len();
        assert!(len > 0 && len < 100_000);
    }

    #[test]
    fn unwritable_target_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the output directory should be.
        let blocker = dir.path().join("public");
        std::fs::write(&blocker, b"").unwrap();

        let path = resolve_output_path(dir.path(), "banner.png");
        let err = save_canvas(&checker(2, 2), &path, OutputFormat::Png).unwrap_err();
        assert!(matches!(err, AssetError::Io(_)));
    }
}

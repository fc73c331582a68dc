//! Font resolution: preferred files first, then the built-in face.

use std::fmt;
use std::path::PathBuf;

use log::{debug, info, warn};

use crate::adapters::bitmap::BitmapTypeface;
use crate::adapters::outline::OutlineTypeface;
use crate::ports::Typeface;

/// Outcome of [`resolve_typeface`].
pub struct ResolvedTypeface {
    /// The face to draw with.
    pub typeface: Box<dyn Typeface>,
    /// `true` when no preferred font could be loaded.
    pub fallback: bool,
}

impl fmt::Debug for ResolvedTypeface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedTypeface")
            .field("typeface", &self.typeface.name())
            .field("fallback", &self.fallback)
            .finish()
    }
}

/// Try each candidate in order and return the first that loads, otherwise the
/// built-in bitmap face.
#[must_use]
pub fn resolve_typeface(candidates: &[PathBuf]) -> ResolvedTypeface {
    for path in candidates {
        match OutlineTypeface::load(path) {
            Ok(face) => {
                info!("Using font {}", path.display());
                return ResolvedTypeface { typeface: Box::new(face), fallback: false };
            }
            Err(e) => debug!("Font candidate rejected: {e}"),
        }
    }

    warn!("No preferred font available ({} tried), using built-in face", candidates.len());
    ResolvedTypeface { typeface: Box::new(BitmapTypeface), fallback: true }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_candidates_falls_back() {
        let resolved = resolve_typeface(&[]);
        assert!(resolved.fallback);
        assert_eq!(resolved.typeface.name(), "built-in 5x7");
    }

    #[test]
    fn debug_names_the_face() {
        let shown = format!("{:?}", resolve_typeface(&[]));
        assert!(shown.contains("built-in 5x7"), "{shown}");
        assert!(shown.contains("fallback: true"), "{shown}");
    }

    #[test]
    fn unreadable_candidates_fall_back() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.ttf");
        std::fs::write(&broken, b"not a font").unwrap();

        let resolved =
            resolve_typeface(&[PathBuf::from("/nonexistent/Kalpurush.ttf"), broken]);
        assert!(resolved.fallback);
        assert_eq!(resolved.typeface.measure("HELLO", 9.0), (29, 7));
    }
}

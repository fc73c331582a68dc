//! Configuration file loading with environment variable overrides.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Name of the config file looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "skyline-assets.toml";

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV_VAR: &str = "SKYLINE_ASSETS_CONFIG";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Preferred font files for the banner text.
    #[serde(default)]
    pub fonts: FontsConfig,

    /// Background generator settings.
    #[serde(default)]
    pub background: BackgroundConfig,
}

/// Preferred font files, tried in order before the built-in face.
#[derive(Debug, Deserialize)]
pub struct FontsConfig {
    /// Candidate font paths. Relative paths resolve against the project root.
    pub candidates: Vec<PathBuf>,
}

impl Default for FontsConfig {
    fn default() -> Self {
        Self {
            candidates: vec![
                PathBuf::from("fonts/Kalpurush.ttf"),
                PathBuf::from("C:/Windows/Fonts/Kalpurush.ttf"),
                PathBuf::from("/usr/share/fonts/truetype/kalpurush/Kalpurush.ttf"),
            ],
        }
    }
}

/// Background generator settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    /// Star field seed. `None` draws from the thread-local generator.
    pub seed: Option<u64>,
    /// JPEG quality, 1..=100.
    pub quality: u8,
    /// Number of stars scattered over the upper half of the sky.
    pub stars: usize,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self { seed: None, quality: 95, stars: crate::background::DEFAULT_STARS }
    }
}

impl Config {
    /// Load configuration from the given path, or return defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
        toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
    }

    /// Font candidates with relative entries anchored at `root`.
    #[must_use]
    pub fn font_candidates(&self, root: &Path) -> Vec<PathBuf> {
        self.fonts
            .candidates
            .iter()
            .map(|p| if p.is_relative() { root.join(p) } else { p.clone() })
            .collect()
    }
}

/// Discover the config file path using the resolution order:
/// 1. Explicit path (from `--config` flag)
/// 2. `SKYLINE_ASSETS_CONFIG` environment variable
/// 3. `<root>/skyline-assets.toml`
#[must_use]
pub fn discover_config_path(explicit: Option<&Path>, root: &Path) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }

    if let Ok(p) = std::env::var(CONFIG_ENV_VAR) {
        return PathBuf::from(p);
    }

    root.join(CONFIG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.fonts.candidates.len(), 3);
        assert_eq!(config.fonts.candidates[0], PathBuf::from("fonts/Kalpurush.ttf"));
        assert!(config.background.seed.is_none());
        assert_eq!(config.background.quality, 95);
        assert_eq!(config.background.stars, 200);
    }

    #[test]
    fn load_nonexistent_returns_defaults() {
        let config = Config::load(Path::new("/nonexistent/path/skyline-assets.toml")).unwrap();
        assert_eq!(config.background.quality, 95);
    }

    #[test]
    fn load_valid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(
            &path,
            r#"
[fonts]
candidates = ["assets/Custom.ttf", "/opt/fonts/Other.otf"]

[background]
seed = 42
quality = 80
stars = 50
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.fonts.candidates.len(), 2);
        assert_eq!(config.background.seed, Some(42));
        assert_eq!(config.background.quality, 80);
        assert_eq!(config.background.stars, 50);
    }

    #[test]
    fn partial_background_section_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[background]\nseed = 7\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.background.seed, Some(7));
        assert_eq!(config.background.quality, 95);
        assert_eq!(config.background.stars, 200);
        assert_eq!(config.fonts.candidates.len(), 3);
    }

    #[test]
    fn load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "this is not valid toml {{{").unwrap();

        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn relative_candidates_resolve_against_root() {
        let config = Config {
            fonts: FontsConfig {
                candidates: vec![PathBuf::from("fonts/a.ttf"), PathBuf::from("/abs/b.ttf")],
            },
            ..Config::default()
        };
        let resolved = config.font_candidates(Path::new("/project"));
        assert_eq!(resolved[0], PathBuf::from("/project/fonts/a.ttf"));
        assert_eq!(resolved[1], PathBuf::from("/abs/b.ttf"));
    }

    #[test]
    fn discover_explicit_path() {
        let path = discover_config_path(Some(Path::new("/tmp/my-config.toml")), Path::new("."));
        assert_eq!(path, PathBuf::from("/tmp/my-config.toml"));
    }
}

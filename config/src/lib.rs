//! TOML configuration for the archive reveal overlay.
//!
//! Every section and field is optional; anything left out keeps the value of
//! [`RevealTheme::default`].

use std::env;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use reveal_types::{GradientStops, RevealTheme, Rgb};

/// Overrides the config file location when set.
pub const CONFIG_PATH_ENV: &str = "ARCHIVE_REVEAL_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config at {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RevealConfig {
    pub palette: Option<PaletteConfig>,
    pub strings: Option<StringsConfig>,
    pub animation: Option<AnimationConfig>,
    pub app: Option<AppConfig>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaletteConfig {
    pub primary_start: Option<Rgb>,
    pub primary_end: Option<Rgb>,
    pub secondary_start: Option<Rgb>,
    pub secondary_end: Option<Rgb>,
    pub primary_track: Option<Rgb>,
    pub secondary_track: Option<Rgb>,
    pub badge: Option<Rgb>,
    pub label: Option<Rgb>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StringsConfig {
    /// Label while collapsed.
    pub swipe: Option<String>,
    /// Label while expanding.
    pub release: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnimationConfig {
    /// Shared duration of every reveal transition.
    pub duration_ms: Option<u64>,
    /// Settle every transition on the next frame.
    #[serde(default)]
    pub reduced_motion: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for the indicator arrows.
    #[serde(default)]
    pub ascii_only: bool,
}

impl RevealConfig {
    /// Load the config from [`config_path`]. A missing file is `Ok(None)`.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| {
            warn!(path = %path.display(), error = %source, "Failed to read config");
            ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Self::parse(&content).map_err(|source| {
            warn!(path = %path.display(), error = %source, "Failed to parse config");
            ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Theme with every configured value applied over the defaults.
    #[must_use]
    pub fn theme(&self) -> RevealTheme {
        let mut theme = RevealTheme::default();

        if let Some(palette) = &self.palette {
            let target = &mut theme.palette;
            target.primary_gradient = GradientStops::new(
                palette.primary_start.unwrap_or(target.primary_gradient.start),
                palette.primary_end.unwrap_or(target.primary_gradient.end),
            );
            target.secondary_gradient = GradientStops::new(
                palette
                    .secondary_start
                    .unwrap_or(target.secondary_gradient.start),
                palette.secondary_end.unwrap_or(target.secondary_gradient.end),
            );
            override_color(&mut target.primary_track, palette.primary_track);
            override_color(&mut target.secondary_track, palette.secondary_track);
            override_color(&mut target.badge, palette.badge);
            override_color(&mut target.label, palette.label);
        }

        if let Some(strings) = &self.strings {
            if let Some(swipe) = &strings.swipe {
                theme.strings.swipe.clone_from(swipe);
            }
            if let Some(release) = &strings.release {
                theme.strings.release.clone_from(release);
            }
        }

        if let Some(duration_ms) = self.animation.as_ref().and_then(|a| a.duration_ms) {
            theme.transition = Duration::from_millis(duration_ms);
        }

        theme
    }

    #[must_use]
    pub fn reduced_motion(&self) -> bool {
        self.animation.as_ref().is_some_and(|a| a.reduced_motion)
    }

    #[must_use]
    pub fn ascii_only(&self) -> bool {
        self.app.as_ref().is_some_and(|a| a.ascii_only)
    }
}

fn override_color(slot: &mut Rgb, value: Option<Rgb>) {
    if let Some(value) = value {
        *slot = value;
    }
}

/// `$ARCHIVE_REVEAL_CONFIG` if set, else `~/.archive-reveal/config.toml`.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    resolve_config_path(env::var_os(CONFIG_PATH_ENV), dirs::home_dir())
}

fn resolve_config_path(env_override: Option<OsString>, home: Option<PathBuf>) -> Option<PathBuf> {
    match env_override {
        Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
        _ => home.map(|home| home.join(".archive-reveal").join("config.toml")),
    }
}

//! Launcher configuration: defaults, YAML persistence, and environment
//! variable overrides.
//!
//! Covers:
//! - `load` / `save` (YAML file I/O with atomic write)
//! - Path helpers (`config_path`, `config_dir`)
//! - `URXVT_*` environment overrides applied after file load

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variables recognised as configuration overrides.
///
/// These mirror the variables the launcher has historically honoured; each
/// one, when set, takes precedence over the corresponding config file value.
/// CLI flags in turn take precedence over both.
pub const ENV_OVERRIDES: &[&str] = &[
    "URXVT_SIZE",
    "URXVT_FIXED_SIZE",
    "URXVT_ICON",
    "URXVT_ICON_PATH",
    "URXVT_TTF",
    "URXVT_BMP",
];

/// Launcher configuration.
///
/// All fields have sensible defaults so a missing config file never blocks a
/// launch. Sizes are pixel counts and must be positive (see
/// [`Config::validate`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default scalable font family (or comma-separated families) requested
    /// when no `--font` flag is given.
    pub font_family: String,

    /// Bitmap font family prepended ahead of everything when "prefer
    /// bitmap" is set.
    pub bitmap_family: String,

    /// Pixel size for scalable fonts.
    pub size: u32,

    /// Pixel size for the bitmap font. Bitmap faces only exist at fixed
    /// sizes, hence the separate knob.
    pub bitmap_size: u32,

    /// Window icon file name, looked up inside `icon_dir`.
    pub icon: String,

    /// Directory searched for the window icon.
    pub icon_dir: PathBuf,

    /// Perl extensions activated by default (`-pe` list).
    pub extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            font_family: "DejaVuSansMono Nerd Font Mono".to_string(),
            bitmap_family: "Misc Fixed".to_string(),
            size: 14,
            bitmap_size: 16,
            icon: "tilda.png".to_string(),
            icon_dir: dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("GNUstep/Library/Icons"),
            extensions: vec!["default".to_string(), "matcher".to_string()],
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory holding the launcher's config file.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("urxvt-launch")
    }

    /// Full path of the YAML config file.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }

    /// Load configuration from the default path, or create the default file
    /// on first run. Environment overrides are applied after the file is
    /// read, and the result is validated.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        let mut config = if path.exists() {
            log::info!("Loading existing config from {:?}", path);
            Self::load_from(&path)?
        } else {
            log::info!("Config file not found, creating default at {:?}", path);
            let config = Self::default();
            // First-run convenience only; a read-only config dir is not fatal.
            if let Err(e) = config.save_to(&path) {
                log::warn!("Failed to save default config: {e}");
            }
            config
        };
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from an explicit file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml_ng::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save configuration to the default path.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to an explicit file path.
    ///
    /// Writes to a temporary sibling file first and renames it into place so
    /// a crash mid-write never leaves a truncated config behind.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        let yaml = serde_yaml_ng::to_string(self).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        let tmp_path = path.with_extension("yaml.tmp");
        fs::write(&tmp_path, yaml).map_err(write_err)?;
        fs::rename(&tmp_path, path).map_err(write_err)
    }

    /// Apply `URXVT_*` environment-variable overrides (see [`ENV_OVERRIDES`]).
    pub fn apply_env_overrides(&mut self) {
        self.apply_env_overrides_from(|name| std::env::var(name).ok());
    }

    /// Apply overrides from an arbitrary lookup function.
    ///
    /// Split out from [`Config::apply_env_overrides`] so tests can inject
    /// values without mutating process-global environment state.
    pub fn apply_env_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("URXVT_SIZE") {
            Self::parse_size_override("URXVT_SIZE", &value, &mut self.size);
        }
        if let Some(value) = lookup("URXVT_FIXED_SIZE") {
            Self::parse_size_override("URXVT_FIXED_SIZE", &value, &mut self.bitmap_size);
        }
        if let Some(value) = lookup("URXVT_ICON") {
            self.icon = value;
        }
        if let Some(value) = lookup("URXVT_ICON_PATH") {
            self.icon_dir = PathBuf::from(value);
        }
        if let Some(value) = lookup("URXVT_TTF") {
            self.font_family = value;
        }
        if let Some(value) = lookup("URXVT_BMP") {
            self.bitmap_family = value;
        }
    }

    /// Parse a numeric override, keeping the existing value on bad input.
    fn parse_size_override(name: &str, value: &str, slot: &mut u32) {
        match value.trim().parse::<u32>() {
            Ok(parsed) => *slot = parsed,
            Err(_) => log::warn!("Ignoring unparseable {name}={value:?}, keeping {slot}"),
        }
    }

    /// Reject configurations that cannot produce a valid font directive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::InvalidSize {
                field: "size",
                size: self.size,
            });
        }
        if self.bitmap_size == 0 {
            return Err(ConfigError::InvalidSize {
                field: "bitmap_size",
                size: self.bitmap_size,
            });
        }
        Ok(())
    }

    /// Set the default font family (builder style).
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Set the scalable font pixel size (builder style).
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }
}

//! Configuration for the generator
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (themegen.toml, see `Config::config_path`)
//! 3. Built-in defaults (lowest priority)
//!
//! The resolved `Config` is passed to every component; nothing reads paths
//! from global state.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::theme::ThemeType;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod logging;

#[cfg(test)]
mod tests;

pub use logging::{FileLogging, LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Config file looked up in the working directory
pub const LOCAL_CONFIG: &str = "themegen.toml";

/// Default swatch image URL; `{hex}` is replaced by the upper-case hex code
pub const DEFAULT_SWATCH_URL: &str = "https://placehold.it/20/{hex}/?text=+";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the manifests and README template
    pub properties_dir: PathBuf,

    /// Color manifest filename (inside properties_dir)
    pub colors_manifest: String,

    /// Token rule manifest filename (inside properties_dir)
    pub tokens_manifest: String,

    /// README template filename (inside properties_dir)
    pub readme_template: String,

    /// Directory the theme file is written to
    pub themes_dir: PathBuf,

    /// Theme filename (inside themes_dir)
    pub theme_file: String,

    /// Where the generated README goes
    pub readme_path: PathBuf,

    /// `name` field of the theme document
    pub theme_name: String,

    /// `type` field of the theme document
    pub theme_type: ThemeType,

    /// Swatch image URL template for the README color table
    pub swatch_url: String,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            properties_dir: PathBuf::from("./properties"),
            colors_manifest: "colors.json".to_string(),
            tokens_manifest: "tokens.json".to_string(),
            readme_template: "README.template.md".to_string(),
            themes_dir: PathBuf::from("./themes"),
            theme_file: "generated-color-theme.json".to_string(),
            readme_path: PathBuf::from("./README.md"),
            theme_name: "Generated".to_string(),
            theme_type: ThemeType::Dark,
            swatch_url: DEFAULT_SWATCH_URL.to_string(),
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub properties_dir: Option<String>,
    pub colors_manifest: Option<String>,
    pub tokens_manifest: Option<String>,
    pub readme_template: Option<String>,
    pub themes_dir: Option<String>,
    pub theme_file: Option<String>,
    pub readme_path: Option<String>,
    pub theme_name: Option<String>,
    pub theme_type: Option<String>,
    pub swatch_url: Option<String>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Find the config file: $THEMEGEN_CONFIG, ./themegen.toml, then
    /// <config dir>/themegen/config.toml
    pub fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("THEMEGEN_CONFIG") {
            return Some(PathBuf::from(path));
        }

        let local = PathBuf::from(LOCAL_CONFIG);
        if local.exists() {
            return Some(local);
        }

        dirs::config_dir().map(|p| p.join("themegen").join("config.toml"))
    }

    /// Load file config if it exists.
    ///
    /// A missing file means defaults. A file that exists but can't be read or
    /// parsed is an error: a broken config should fail loudly, not fall back
    /// to defaults while the user debugs the wrong thing.
    pub(crate) fn load_file_config(path: &Path) -> Result<FileConfig> {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to read config file {}", path.display())),
        }
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn from_env() -> Result<Self> {
        let file = match Self::config_path() {
            Some(path) => Self::load_file_config(&path)?,
            None => FileConfig::default(),
        };
        Ok(Self::resolve(file, |key| std::env::var(key).ok()))
    }

    /// Merge a file config with environment lookups over the defaults
    pub(crate) fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        // Directories and output paths: env > file > default
        let properties_dir = env("THEMEGEN_PROPERTIES_DIR")
            .or(file.properties_dir)
            .map(PathBuf::from)
            .unwrap_or(defaults.properties_dir);

        let themes_dir = env("THEMEGEN_THEMES_DIR")
            .or(file.themes_dir)
            .map(PathBuf::from)
            .unwrap_or(defaults.themes_dir);

        let readme_path = env("THEMEGEN_README")
            .or(file.readme_path)
            .map(PathBuf::from)
            .unwrap_or(defaults.readme_path);

        let theme_name = env("THEMEGEN_THEME_NAME")
            .or(file.theme_name)
            .unwrap_or(defaults.theme_name);

        // File-only settings
        let theme_type = file
            .theme_type
            .map(|s| ThemeType::from_str(&s))
            .unwrap_or(defaults.theme_type);

        Self {
            properties_dir,
            colors_manifest: file.colors_manifest.unwrap_or(defaults.colors_manifest),
            tokens_manifest: file.tokens_manifest.unwrap_or(defaults.tokens_manifest),
            readme_template: file.readme_template.unwrap_or(defaults.readme_template),
            themes_dir,
            theme_file: file.theme_file.unwrap_or(defaults.theme_file),
            readme_path,
            theme_name,
            theme_type,
            swatch_url: file.swatch_url.unwrap_or(defaults.swatch_url),
            logging: LoggingConfig::resolve(file.logging, &env),
        }
    }

    /// Point every input and output at `root`, keeping the default layout.
    #[cfg(test)]
    pub fn rooted_at(root: &Path) -> Self {
        Self {
            properties_dir: root.join("properties"),
            themes_dir: root.join("themes"),
            readme_path: root.join("README.md"),
            ..Self::default()
        }
    }

    // ─── Derived paths ───────────────────────────────────────

    pub fn template_path(&self) -> PathBuf {
        self.properties_dir.join(&self.readme_template)
    }

    pub fn theme_path(&self) -> PathBuf {
        self.themes_dir.join(&self.theme_file)
    }
}

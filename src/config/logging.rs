//! `[logging]` section: stderr level and an optional rolling log file
//!
//! ```toml
//! [logging]
//! level = "debug"
//! file = "logs/themegen.log"   # rotated copies get a date suffix
//! rotation = "never"
//! ```

use serde::Deserialize;
use std::path::PathBuf;

/// How often the log file rolls over. Anything else in the config file is a
/// parse error, reported with the config path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    Hourly,
    #[default]
    Daily,
    Never,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Filter level for this crate (`RUST_LOG` still wins)
    pub level: String,
    /// JSON log file; stderr only when unset
    pub file: Option<PathBuf>,
    pub rotation: LogRotation,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
            rotation: LogRotation::Daily,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogging {
    pub level: Option<String>,
    pub file: Option<PathBuf>,
    pub rotation: Option<LogRotation>,
}

impl LoggingConfig {
    /// `THEMEGEN_LOG_FILE` > `[logging]` > defaults
    pub(crate) fn resolve(file: Option<FileLogging>, env: impl Fn(&str) -> Option<String>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            level: file.level.unwrap_or(defaults.level),
            file: env("THEMEGEN_LOG_FILE").map(PathBuf::from).or(file.file),
            rotation: file.rotation.unwrap_or(defaults.rotation),
        }
    }
}

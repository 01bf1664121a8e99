//! Database settings.
//!
//! Settings live in `~/.config/recordset/settings.toml` under a `[database]`
//! table:
//!
//! ```toml
//! [database]
//! path = "/var/lib/app/app.db"
//! foreign_keys = true
//! journal_mode = "WAL"
//! busy_timeout_ms = 5000
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

/// Environment variable overriding the database path.
pub const DATABASE_ENV: &str = "RECORDSET_DATABASE";

/// Database path used when nothing else is configured.
pub const DEFAULT_DATABASE: &str = "recordset.db";

/// How to open the database a default connection points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbConfig {
    pub path: PathBuf,
    #[serde(default = "default_foreign_keys")]
    pub foreign_keys: bool,
    /// Journal mode pragma; left untouched when `None`.
    #[serde(default = "default_journal_mode")]
    pub journal_mode: Option<String>,
    #[serde(default)]
    pub busy_timeout_ms: Option<u64>,
}

fn default_foreign_keys() -> bool {
    true
}

fn default_journal_mode() -> Option<String> {
    Some("WAL".to_string())
}

/// TOML settings file format.
#[derive(Debug, Deserialize)]
struct SettingsFile {
    database: Option<DbConfig>,
}

impl DbConfig {
    /// Settings for a database file, with default pragmas.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            foreign_keys: default_foreign_keys(),
            journal_mode: default_journal_mode(),
            busy_timeout_ms: None,
        }
    }

    /// Resolve settings using a priority chain:
    ///
    /// 1. `RECORDSET_DATABASE` environment variable (path only)
    /// 2. `[database]` table in `settings.toml`
    /// 3. `recordset.db` in the current directory
    pub fn load() -> Result<Self, SchemaError> {
        let from_file = match settings_path() {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => None,
        };

        if let Ok(path) = std::env::var(DATABASE_ENV) {
            let mut config = from_file.unwrap_or_else(|| Self::new(DEFAULT_DATABASE));
            config.path = PathBuf::from(path);
            return Ok(config);
        }

        Ok(from_file.unwrap_or_else(|| Self::new(DEFAULT_DATABASE)))
    }

    /// Read the `[database]` table from a settings file, if present.
    pub fn from_file(path: &Path) -> Result<Option<Self>, SchemaError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| SchemaError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&contents)
    }

    /// Parse the `[database]` table from settings text, if present.
    pub fn from_toml_str(contents: &str) -> Result<Option<Self>, SchemaError> {
        let settings: SettingsFile =
            toml::from_str(contents).map_err(|e| SchemaError::Config(e.to_string()))?;
        Ok(settings.database)
    }
}

/// Canonical settings file location: `~/.config/recordset/settings.toml`.
pub fn settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("recordset").join("settings.toml"))
}

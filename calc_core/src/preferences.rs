//! # User Preferences
//!
//! Persisted front-end settings: the light/dark theme and the last angle
//! mode. The engine never reads these; front ends load them at start-up,
//! apply the angle mode, and save whenever the user toggles either setting.
//!
//! ## File Format
//!
//! Pretty-printed JSON at `<config dir>/scicalc/preferences.json`:
//!
//! ```json
//! {
//!   "version": "0.1.0",
//!   "theme": "dark",
//!   "angle_mode": "radians"
//! }
//! ```
//!
//! Saves are atomic: write to `.tmp`, sync, then rename over the old file.
//!
//! ## Example
//!
//! ```rust,no_run
//! use calc_core::preferences::{load_or_default, save_preferences, ThemePreference};
//! use std::path::Path;
//!
//! let path = Path::new("preferences.json");
//! let mut prefs = load_or_default(path);
//! prefs.theme = ThemePreference::Dark;
//! save_preferences(&prefs, path)?;
//! # Ok::<(), calc_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calculations::AngleMode;
use crate::errors::{CalcError, CalcResult};

/// Current schema version for preferences files
pub const PREFERENCES_VERSION: &str = "0.1.0";

/// Directory name under the platform config dir
const APP_DIR: &str = "scicalc";

/// File name of the preferences file
const FILE_NAME: &str = "preferences.json";

/// Color scheme of the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn is_dark(&self) -> bool {
        matches!(self, ThemePreference::Dark)
    }

    /// The other theme
    pub fn toggled(&self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ThemePreference::Light => "Light Mode",
            ThemePreference::Dark => "Dark Mode",
        }
    }
}

/// Persisted user preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Schema version of the file
    pub version: String,

    #[serde(default)]
    pub theme: ThemePreference,

    #[serde(default)]
    pub angle_mode: AngleMode,
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            version: PREFERENCES_VERSION.to_string(),
            theme: ThemePreference::default(),
            angle_mode: AngleMode::default(),
        }
    }
}

/// Platform location of the preferences file, if a config dir exists.
pub fn default_preferences_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(FILE_NAME))
}

/// Save preferences with atomic write semantics.
///
/// Creates the parent directory if needed.
pub fn save_preferences(prefs: &Preferences, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(prefs).map_err(|e| CalcError::SerializationError {
        reason: e.to_string(),
    })?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                CalcError::file_error("create directory", parent.display().to_string(), e.to_string())
            })?;
        }
    }

    let tmp_path = path.with_extension("json.tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    debug!(path = %path.display(), "saved preferences");
    Ok(())
}

/// Load preferences from a file.
///
/// # Returns
///
/// * `Ok(Preferences)` - Successfully loaded
/// * `Err(CalcError::FileError)` - I/O error (including a missing file)
/// * `Err(CalcError::SerializationError)` - Invalid JSON
pub fn load_preferences(path: &Path) -> CalcResult<Preferences> {
    let mut file = File::open(path).map_err(|e| {
        CalcError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        CalcError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
        reason: format!("Invalid JSON in {}: {}", path.display(), e),
    })
}

/// Load preferences, falling back to defaults.
///
/// A missing file is the normal first-run case and is silent; any other
/// failure is logged before the defaults are used.
pub fn load_or_default(path: &Path) -> Preferences {
    if let Err(e) = fs::metadata(path) {
        if e.kind() == ErrorKind::NotFound {
            return Preferences::default();
        }
    }

    match load_preferences(path) {
        Ok(prefs) => prefs,
        Err(e) => {
            warn!(error = %e, "could not load preferences, using defaults");
            Preferences::default()
        }
    }
}

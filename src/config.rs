//! Renderer configuration.
//!
//! Optional JSON file at `<config dir>/boxmenu/config.json`:
//!
//! ```json
//! {
//!   "fallback_width": 100,
//!   "default_prompt": "> ",
//!   "clear_screen": false,
//!   "palette": { "title": "cyan", "error_message": "dark_red" }
//! }
//! ```
//!
//! Every field is optional. A missing file means all defaults.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{MenuError, Result};
use crate::layout::DEFAULT_PROMPT;
use crate::palette::{ColorToken, Palette};

/// Directory name under the platform config dir.
pub const CONFIG_DIR_NAME: &str = "boxmenu";

/// Config file name inside [`CONFIG_DIR_NAME`].
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Width assumed when the terminal cannot be queried.
pub const DEFAULT_FALLBACK_WIDTH: u16 = 80;

/// Renderer settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Width used for headless or redirected output.
    pub fallback_width: u16,
    /// Prompt drawn when a menu has an empty prompt.
    pub default_prompt: String,
    /// Clear the viewport before each render.
    pub clear_screen: bool,
    /// Color name overrides per token.
    pub palette: BTreeMap<ColorToken, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            fallback_width: DEFAULT_FALLBACK_WIDTH,
            default_prompt: DEFAULT_PROMPT.to_string(),
            clear_screen: true,
            palette: BTreeMap::new(),
        }
    }
}

impl UiConfig {
    /// Platform config file location, if a config dir exists.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load from an explicit path.
    ///
    /// # Errors
    /// [`MenuError::Config`] if the file cannot be read or is not valid JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| config_error(path, &e))?;
        let config: UiConfig =
            serde_json::from_str(&contents).map_err(|e| config_error(path, &e))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load from `path`, or return defaults if it does not exist.
    pub fn load_or_default_from(path: &Path) -> Result<Self> {
        match fs::metadata(path) {
            Ok(_) => Self::load(path),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(config_error(path, &e)),
        }
    }

    /// Load from the platform location, or return defaults.
    pub fn load_or_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_or_default_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Build the color table, applying overrides.
    ///
    /// # Errors
    /// [`MenuError::UnknownColor`] if an override names an unknown color.
    pub fn palette(&self) -> Result<Palette> {
        Palette::with_overrides(&self.palette)
    }
}

fn config_error(path: &Path, err: &dyn std::fmt::Display) -> MenuError {
    MenuError::Config {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}

// ============================================================================
// TESTS
// ============================================================================

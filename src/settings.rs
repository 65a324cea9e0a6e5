//! User settings, persisted as JSON in the platform config directory.
//!
//! Every field has a default, so a partial or older settings file still
//! loads. A malformed file is logged and replaced by defaults rather than
//! blocking startup.

use crate::constants::{
    DEFAULT_WINDOW_SIZE, EXPORT_PREFIX, JPEG_QUALITY, LARGE_SAVE_WARNING_BYTES,
    MAX_COMPRESSED_WIDTH, MAX_DISPLAY_SIZE,
};
use crate::error::BoardResult;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub viewport: ViewportSettings,
    pub media: MediaSettings,
    pub persistence: PersistenceSettings,
}

/// Initial geometry of the viewing surface.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportSettings {
    pub window_width: f64,
    pub window_height: f64,
    /// Reference content frame centered by "reset view"
    pub frame_width: f64,
    pub frame_height: f64,
}

/// Image compression and placement bounds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaSettings {
    /// Wider images are downscaled to this width before storage
    pub max_compressed_width: u32,
    /// Lossy re-encode quality, 1-100
    pub jpeg_quality: u8,
    /// Initial on-board size is bounded to this square
    pub max_display_size: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistenceSettings {
    /// Saves above this size ask for confirmation
    pub large_save_warning_bytes: usize,
    /// File name prefix for exported boards
    pub export_prefix: String,
    /// Answer assumed when the host cannot ask about including images
    pub include_images_by_default: bool,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_SIZE.0,
            window_height: DEFAULT_WINDOW_SIZE.1,
            frame_width: 0.0,
            frame_height: 0.0,
        }
    }
}

impl Default for MediaSettings {
    fn default() -> Self {
        Self {
            max_compressed_width: MAX_COMPRESSED_WIDTH,
            jpeg_quality: JPEG_QUALITY,
            max_display_size: MAX_DISPLAY_SIZE,
        }
    }
}

impl Default for PersistenceSettings {
    fn default() -> Self {
        Self {
            large_save_warning_bytes: LARGE_SAVE_WARNING_BYTES,
            export_prefix: EXPORT_PREFIX.to_string(),
            include_images_by_default: true,
        }
    }
}

impl Settings {
    /// Default location: `<config_dir>/visionboard/settings.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("visionboard").join("settings.json"))
    }

    /// Load from the default location, falling back to defaults.
    pub fn load() -> Self {
        match Self::default_path() {
            Some(path) => Self::load_or_default(&path),
            None => {
                debug!("No config directory on this platform, using default settings");
                Self::default()
            }
        }
    }

    /// Load from `path`, falling back to defaults on a missing or bad file.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(path = %path.display(), "Ignoring unreadable settings: {}", e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> BoardResult<Self> {
        let json = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&json)?;
        Ok(settings.sanitized())
    }

    pub fn save_to(&self, path: &Path) -> BoardResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Pull out-of-range values back to something usable.
    fn sanitized(mut self) -> Self {
        self.media.jpeg_quality = self.media.jpeg_quality.clamp(1, 100);
        self.media.max_compressed_width = self.media.max_compressed_width.max(1);
        if !(self.media.max_display_size > 0.0) {
            self.media.max_display_size = MAX_DISPLAY_SIZE;
        }
        self
    }
}

// Copyright 2025 Chris Custine
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Application configuration management.
//!
//! Persistent settings are stored in TOML via `confy`. Every field carries a
//! serde default so older or hand-edited files keep loading.

use std::path::PathBuf;
use std::time::Duration;

use goldfish_core::{FocusOptions, LatLng, FOCUS_ZOOM};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::map::tiles::{GSI_ATTRIBUTION, GSI_PALE_URL};

const APP_NAME: &str = "goldfish-map";
const CONFIG_NAME: &str = "config";

/// Application configuration stored in TOML format
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    /// Configuration schema version for migrations
    #[serde(default = "default_config_version")]
    pub config_version: u32,

    /// JSON file with location records (overridden by `--data`)
    #[serde(default)]
    pub data_path: Option<PathBuf>,

    /// Tile URL template with `{z}`, `{x}` and `{y}` placeholders
    #[serde(default = "default_tile_url")]
    pub tile_url: String,

    /// Attribution text shown for the tile provider
    #[serde(default = "default_tile_attribution")]
    pub tile_attribution: String,

    #[serde(default = "default_center_lat")]
    pub initial_center_lat: f64,

    #[serde(default = "default_center_lon")]
    pub initial_center_lon: f64,

    /// Zoom level at startup
    #[serde(default = "default_initial_zoom")]
    pub initial_zoom: f64,

    /// Zoom level used when a site is selected from the list
    #[serde(default = "default_focus_zoom")]
    pub focus_zoom: f64,

    /// Fly-to animation length in milliseconds
    #[serde(default = "default_fly_duration_ms")]
    pub fly_duration_ms: u64,

    /// Sidebar panel width in pixels
    #[serde(default = "default_sidebar_width")]
    pub sidebar_width: f32,

    /// Font file with Japanese glyphs; system fonts are probed when unset
    #[serde(default)]
    pub cjk_font_path: Option<PathBuf>,
}

// Default value functions for serde
fn default_config_version() -> u32 {
    1
}

fn default_tile_url() -> String {
    GSI_PALE_URL.to_string()
}

fn default_tile_attribution() -> String {
    GSI_ATTRIBUTION.to_string()
}

fn default_center_lat() -> f64 {
    36.2048
}

fn default_center_lon() -> f64 {
    138.2529
}

fn default_initial_zoom() -> f64 {
    5.0
}

fn default_focus_zoom() -> f64 {
    FOCUS_ZOOM
}

fn default_fly_duration_ms() -> u64 {
    1500
}

fn default_sidebar_width() -> f32 {
    340.0
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config_version: default_config_version(),
            data_path: None,
            tile_url: default_tile_url(),
            tile_attribution: default_tile_attribution(),
            initial_center_lat: default_center_lat(),
            initial_center_lon: default_center_lon(),
            initial_zoom: default_initial_zoom(),
            focus_zoom: default_focus_zoom(),
            fly_duration_ms: default_fly_duration_ms(),
            sidebar_width: default_sidebar_width(),
            cjk_font_path: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from disk
    pub fn load() -> Result<Self, confy::ConfyError> {
        confy::load(APP_NAME, CONFIG_NAME)
    }

    /// Load configuration, falling back to defaults when the file is unreadable
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            warn!("Failed to load configuration, using defaults: {}", e);
            Self::default()
        })
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<(), confy::ConfyError> {
        confy::store(APP_NAME, CONFIG_NAME, self)
    }

    /// Get the config file path for display to user
    pub fn get_config_path() -> Result<PathBuf, confy::ConfyError> {
        confy::get_configuration_file_path(APP_NAME, CONFIG_NAME)
    }

    #[must_use]
    pub fn initial_center(&self) -> LatLng {
        LatLng::new(self.initial_center_lat, self.initial_center_lon)
    }

    /// How the map moves when a site is picked from the list
    #[must_use]
    pub fn focus_options(&self) -> FocusOptions {
        FocusOptions {
            zoom: self.focus_zoom,
            duration: Duration::from_millis(self.fly_duration_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_focus_constants() {
        let config = AppConfig::default();
        assert_eq!(config.focus_options(), FocusOptions::default());
        assert_eq!(config.initial_center(), LatLng::new(36.2048, 138.2529));
        assert!(config.data_path.is_none());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"focus_zoom": 12.0, "sidebar_width": 280.0}"#).unwrap();
        assert!((config.focus_zoom - 12.0).abs() < f64::EPSILON);
        assert!((config.sidebar_width - 280.0).abs() < f32::EPSILON);
        assert_eq!(config.tile_url, GSI_PALE_URL);
        assert_eq!(config.fly_duration_ms, 1500);
    }
}

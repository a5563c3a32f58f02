//! Player configuration shared through the component context.

use serde::{Deserialize, Serialize};

pub const DEFAULT_CATALOG_LOCATION: &str = "albums.json";
pub const DEFAULT_VOLUME: f64 = 0.8;
pub const FALLBACK_MESSAGE: &str = "Music coming soon.";
pub const AUDIO_ELEMENT_ID: &str = "bluemania-audio";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Where the catalog document lives. Relative locations resolve against
    /// the page in the browser and against the working directory natively.
    pub catalog_location: String,
    /// Volume applied to the media element before anything plays (0.0 - 1.0).
    pub initial_volume: f64,
    /// Shown in place of the album grid when there is nothing to browse.
    pub fallback_message: String,
    pub audio_element_id: String,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            catalog_location: DEFAULT_CATALOG_LOCATION.to_string(),
            initial_volume: DEFAULT_VOLUME,
            fallback_message: FALLBACK_MESSAGE.to_string(),
            audio_element_id: AUDIO_ELEMENT_ID.to_string(),
        }
    }
}

impl PlayerConfig {
    pub fn initial_volume(&self) -> f64 {
        normalize_volume(self.initial_volume)
    }
}

/// Clamps a volume into 0.0 - 1.0, treating anything above 1.0 as a
/// percentage written by mistake.
pub fn normalize_volume(value: f64) -> f64 {
    if !value.is_finite() {
        return DEFAULT_VOLUME;
    }
    let value = if value > 1.0 { value / 100.0 } else { value };
    value.clamp(0.0, 1.0)
}

//! Engine tunables pushed by the host as JSON
//!
//! Every field is defaulted so the host can send a partial object (or
//! nothing at all). The current settings serialize back out through
//! `to_json` for the host's settings form.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    /// Generation steps per second. 0 pauses the simulation (the clock
    /// never fires).
    #[serde(default = "default_speed_hz")]
    pub speed_hz: f64,

    /// When true, painting writes DEAD instead of ALIVE.
    #[serde(default)]
    pub erase_mode: bool,

    /// Startup cells-to-pixels scale; clamped to the camera's range.
    #[serde(default = "default_initial_zoom")]
    pub initial_zoom: f32,

    /// Zoom change per wheel-delta unit.
    #[serde(default = "default_zoom_sensitivity")]
    pub zoom_sensitivity: f32,

    /// Probability a cell comes up ALIVE on randomize.
    #[serde(default = "default_randomize_density")]
    pub randomize_density: f32,
}

fn default_speed_hz() -> f64 { 10.0 }
fn default_initial_zoom() -> f32 { 10.0 }
fn default_zoom_sensitivity() -> f32 { 0.01 }
fn default_randomize_density() -> f32 { 0.5 }

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            speed_hz: default_speed_hz(),
            erase_mode: false,
            initial_zoom: default_initial_zoom(),
            zoom_sensitivity: default_zoom_sensitivity(),
            randomize_density: default_randomize_density(),
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

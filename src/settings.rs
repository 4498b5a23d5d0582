//! Game settings
//!
//! Behavior toggles for the simulation and main loop. Built in code; the
//! `BRICKS_SETTINGS` environment variable may carry a JSON override.

use serde::{Deserialize, Serialize};

use crate::consts::FRAME_INTERVAL_MS;

/// Environment variable holding optional settings as inline JSON
pub const SETTINGS_ENV: &str = "BRICKS_SETTINGS";

/// Shortest accepted step interval (ms)
pub const MIN_FRAME_INTERVAL_MS: f32 = 1.0;

/// Response to a hit whose heading falls in the (45°, 135°) band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TopBandResponse {
    /// Invert horizontal velocity and place the ball left of the block
    #[default]
    Horizontal,
    /// Invert vertical velocity and place the ball left of the block
    Vertical,
}

/// How Left/Right input changes paddle velocity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaddleSteering {
    /// Each processed input adds one speed increment (held keys keep speeding up)
    #[default]
    Accumulate,
    /// Each processed input sets velocity to exactly one speed increment
    Direct,
}

impl PaddleSteering {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaddleSteering::Accumulate => "accumulate",
            PaddleSteering::Direct => "direct",
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub top_band: TopBandResponse,
    pub steering: PaddleSteering,
    /// Fixed simulation interval in ms
    pub frame_interval_ms: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            top_band: TopBandResponse::Horizontal,
            steering: PaddleSteering::Accumulate,
            frame_interval_ms: FRAME_INTERVAL_MS,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    /// Parse an override, or defaults if it is invalid
    pub fn from_override(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", SETTINGS_ENV);
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings in {}: {}", SETTINGS_ENV, e);
                Self::default()
            }
        }
    }

    /// Defaults, overridden by `BRICKS_SETTINGS` when it is set
    pub fn load() -> Self {
        match std::env::var(SETTINGS_ENV) {
            Ok(json) => Self::from_override(&json),
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Replace a non-positive interval with the default and raise a tiny one
    /// to the minimum
    fn sanitized(mut self) -> Self {
        let interval = self.frame_interval_ms;
        if interval.is_nan() || interval <= 0.0 {
            log::warn!(
                "frame_interval_ms {} is not positive, using {}",
                interval,
                FRAME_INTERVAL_MS
            );
            self.frame_interval_ms = FRAME_INTERVAL_MS;
        } else if interval < MIN_FRAME_INTERVAL_MS {
            log::warn!(
                "frame_interval_ms {} is too short, using {}",
                interval,
                MIN_FRAME_INTERVAL_MS
            );
            self.frame_interval_ms = MIN_FRAME_INTERVAL_MS;
        }
        self
    }
}

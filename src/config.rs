use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::WordTimeError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordTimeConfig {
    /// Rate the audio was decoded at; used to turn a sample count into seconds.
    pub sample_rate_hz: u32,
    /// Added to the character total before dividing a gap, so an all-empty run
    /// does not divide by zero.
    pub interpolation_epsilon: f64,
}

impl WordTimeConfig {
    pub const DEFAULT_SAMPLE_RATE_HZ: u32 = 16_000;
    pub const DEFAULT_INTERPOLATION_EPSILON: f64 = 1e-6;

    pub fn load(path: &Path) -> Result<Self, WordTimeError> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| WordTimeError::io("read word-time config", e))?;
        serde_json::from_str(&data).map_err(|e| WordTimeError::json("parse word-time config", e))
    }

    pub fn audio_duration_sec(&self, sample_count: usize) -> f64 {
        let rate = if self.sample_rate_hz == 0 {
            Self::DEFAULT_SAMPLE_RATE_HZ
        } else {
            self.sample_rate_hz
        };
        sample_count as f64 / rate as f64
    }
}

impl Default for WordTimeConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: Self::DEFAULT_SAMPLE_RATE_HZ,
            interpolation_epsilon: Self::DEFAULT_INTERPOLATION_EPSILON,
        }
    }
}

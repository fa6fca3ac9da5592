//! Synthesis configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::SpecError;

/// Sample rate used when nothing else is configured.
pub const DEFAULT_SAMPLE_RATE: u32 = 22050;

/// Sample rates the backend accepts.
pub const SUPPORTED_SAMPLE_RATES: [u32; 3] = [22050, 44100, 48000];

/// Longest clip accepted by default, in seconds.
pub const DEFAULT_MAX_DURATION_SECONDS: u32 = 600;

/// Process-level synthesis settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SynthesisConfig {
    /// Output sample rate in Hz.
    pub sample_rate: u32,
    /// Requests longer than this are rejected.
    pub max_duration_seconds: u32,
    /// Seed used when a request carries none.
    pub default_seed: u32,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            max_duration_seconds: DEFAULT_MAX_DURATION_SECONDS,
            default_seed: 0,
        }
    }
}

impl SynthesisConfig {
    /// Parses a config from JSON. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a config file.
    pub fn from_json_file(path: &Path) -> Result<Self, SpecError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Returns a copy with a different default seed.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.default_seed = seed;
        self
    }

    /// Returns true when the configured sample rate is supported.
    pub fn has_supported_sample_rate(&self) -> bool {
        SUPPORTED_SAMPLE_RATES.contains(&self.sample_rate)
    }
}

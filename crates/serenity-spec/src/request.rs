//! Synthesis request type and builder.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::SpecError;
use crate::mood::Mood;

/// Neutral stress/anxiety level on the 0-10 scale.
pub const NEUTRAL_LEVEL: f64 = 5.0;

/// Default duration when a request omits one.
pub const DEFAULT_DURATION_SECONDS: u32 = 120;

/// One entry of a user's recent mood history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    /// Self-reported stress on a 0-10 scale.
    #[serde(default = "neutral_level")]
    pub stress_level: f64,
    /// Self-reported anxiety on a 0-10 scale.
    #[serde(default = "neutral_level")]
    pub anxiety_level: f64,
}

impl MoodEntry {
    /// Creates a history entry.
    pub fn new(stress_level: f64, anxiety_level: f64) -> Self {
        Self {
            stress_level,
            anxiety_level,
        }
    }
}

impl Default for MoodEntry {
    fn default() -> Self {
        Self::new(NEUTRAL_LEVEL, NEUTRAL_LEVEL)
    }
}

fn neutral_level() -> f64 {
    NEUTRAL_LEVEL
}

fn default_genre() -> String {
    "ambient".to_string()
}

fn default_tempo() -> String {
    "medium".to_string()
}

fn default_duration() -> u32 {
    DEFAULT_DURATION_SECONDS
}

fn default_instruments() -> Vec<String> {
    vec!["piano".to_string()]
}

/// A request to synthesize one therapeutic audio clip.
///
/// Immutable for the duration of synthesis. Labels are kept verbatim so
/// metadata echoes what the caller sent; the backend resolves them to
/// [`Mood`] and [`crate::Instrument`] values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesisRequest {
    /// Mood label (e.g. "calm", "anxious").
    pub mood: String,
    /// Genre label. Only echoed into metadata and the model name.
    #[serde(default = "default_genre")]
    pub genre: String,
    /// Clip length in whole seconds.
    #[serde(default = "default_duration", alias = "duration")]
    pub duration_seconds: u32,
    /// Tempo label. Only echoed into metadata.
    #[serde(default = "default_tempo")]
    pub tempo: String,
    /// Instrument labels, applied in order. An absent key means `["piano"]`;
    /// an explicit empty list means no instruments.
    #[serde(default = "default_instruments")]
    pub instruments: Vec<String>,
    /// Recent mood history, oldest first.
    #[serde(default, alias = "recentMoodHistory")]
    pub mood_history: Vec<MoodEntry>,
    /// Optional RNG seed; the configured default is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
}

impl SynthesisRequest {
    /// Creates a new request builder.
    pub fn builder(mood: impl Into<String>) -> SynthesisRequestBuilder {
        SynthesisRequestBuilder::new(mood)
    }

    /// Parses a request from JSON.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a request from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, SpecError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serializes the request to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, SpecError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Resolves the mood label, falling back to calm.
    pub fn resolved_mood(&self) -> Mood {
        Mood::resolve(&self.mood)
    }
}

/// Builder for [`SynthesisRequest`].
#[derive(Debug, Clone)]
pub struct SynthesisRequestBuilder {
    request: SynthesisRequest,
}

impl SynthesisRequestBuilder {
    /// Starts a request with defaults for everything but the mood.
    /// Unlike JSON input, the builder starts with no instruments.
    pub fn new(mood: impl Into<String>) -> Self {
        Self {
            request: SynthesisRequest {
                mood: mood.into(),
                genre: default_genre(),
                duration_seconds: DEFAULT_DURATION_SECONDS,
                tempo: default_tempo(),
                instruments: Vec::new(),
                mood_history: Vec::new(),
                seed: None,
            },
        }
    }

    /// Sets the genre label.
    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.request.genre = genre.into();
        self
    }

    /// Sets the duration in seconds.
    pub fn duration_seconds(mut self, duration_seconds: u32) -> Self {
        self.request.duration_seconds = duration_seconds;
        self
    }

    /// Sets the tempo label.
    pub fn tempo(mut self, tempo: impl Into<String>) -> Self {
        self.request.tempo = tempo.into();
        self
    }

    /// Appends an instrument label.
    pub fn instrument(mut self, instrument: impl Into<String>) -> Self {
        self.request.instruments.push(instrument.into());
        self
    }

    /// Appends a mood history entry.
    pub fn history(mut self, stress_level: f64, anxiety_level: f64) -> Self {
        self.request
            .mood_history
            .push(MoodEntry::new(stress_level, anxiety_level));
        self
    }

    /// Sets the RNG seed.
    pub fn seed(mut self, seed: u32) -> Self {
        self.request.seed = Some(seed);
        self
    }

    /// Finishes the request.
    pub fn build(self) -> SynthesisRequest {
        self.request
    }
}

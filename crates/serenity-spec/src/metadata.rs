//! Generation metadata emitted alongside the final waveform.

use serde::{Deserialize, Serialize};

/// Channel count of every generated clip.
pub const CHANNELS: u16 = 1;

/// Bit depth of the persisted PCM hand-off.
pub const BIT_DEPTH: u16 = 16;

/// Which therapeutic stages shaped the clip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TherapeuticElements {
    /// Whether the binaural overlay was added.
    pub binaural_beats: bool,
    /// Beat frequency of the overlay, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binaural_frequency_hz: Option<f64>,
    /// Always true: every profile is tuned to a healing base frequency.
    pub healing_frequencies: bool,
    /// Whether the 40 Hz stress-reduction stage ran.
    pub stress_reduction: bool,
    /// Whether the 10 Hz anxiety-relief stage ran.
    pub anxiety_relief: bool,
    /// Whether a mood-specific stage ran.
    pub mood_specific_effect: bool,
    /// Name of the mood-specific stage, when one ran.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood_effect: Option<String>,
}

/// Format properties of the generated audio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioProperties {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Always 1 (mono).
    pub channels: u16,
    /// Always 16.
    pub bit_depth: u16,
    /// `max - min` of the base composition (harmonics and instruments),
    /// measured before the therapeutic stages and before normalization.
    ///
    /// The returned samples are normalized to a unit peak, so this value
    /// describes the un-normalized dynamics rather than the delivered audio.
    pub dynamic_range: f64,
}

/// Descriptive record for one generated clip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationMetadata {
    /// Mood label exactly as requested.
    pub mood: String,
    /// Genre label.
    pub genre: String,
    /// Duration in seconds.
    pub duration: u32,
    /// Tempo label.
    pub tempo: String,
    /// Instrument labels as requested.
    pub instruments: Vec<String>,
    /// Suggested tempo for the resolved mood.
    pub bpm: u32,
    /// Suggested key for the resolved mood.
    pub key: String,
    /// Therapeutic stages applied.
    pub therapeutic_elements: TherapeuticElements,
    /// Audio format properties.
    pub audio_properties: AudioProperties,
}

impl GenerationMetadata {
    /// Serializes the metadata to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the metadata to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Standard metadata filename for a clip file stem.
    ///
    /// # Example
    ///
    /// ```
    /// use serenity_spec::GenerationMetadata;
    ///
    /// let filename = GenerationMetadata::filename("therapeutic_music_20260101_120000");
    /// assert_eq!(filename, "therapeutic_music_20260101_120000.metadata.json");
    /// ```
    pub fn filename(stem: &str) -> String {
        format!("{}.metadata.json", stem)
    }
}

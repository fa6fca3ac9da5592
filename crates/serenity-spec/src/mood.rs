//! Mood and instrument vocabulary.
//!
//! Requests carry free-form labels; these enums are the closed set the
//! synthesis backend dispatches on. Unknown mood labels resolve to
//! [`Mood::Calm`] here, at the boundary, and nowhere else.

use serde::{Deserialize, Serialize};

/// Emotional state driving every synthesis parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    /// Default mood, also the fallback for unknown labels.
    Calm,
    /// Tranquil, golden-ratio partials.
    Peaceful,
    /// Low mood; receives the mood-lifting stage.
    Sad,
    /// Receives the calming stage and an 8 Hz beat.
    Anxious,
    /// Bright and uplifting.
    Happy,
    /// High energy; receives the grounding stage.
    Energetic,
    /// Shares the calm profile but receives a 6 Hz beat.
    Stressed,
}

impl Mood {
    /// Every mood, in table order.
    pub const ALL: [Mood; 7] = [
        Mood::Calm,
        Mood::Peaceful,
        Mood::Sad,
        Mood::Anxious,
        Mood::Happy,
        Mood::Energetic,
        Mood::Stressed,
    ];

    /// Parses an exact lowercase label.
    pub fn parse(label: &str) -> Option<Mood> {
        match label {
            "calm" => Some(Mood::Calm),
            "peaceful" => Some(Mood::Peaceful),
            "sad" => Some(Mood::Sad),
            "anxious" => Some(Mood::Anxious),
            "happy" => Some(Mood::Happy),
            "energetic" => Some(Mood::Energetic),
            "stressed" => Some(Mood::Stressed),
            _ => None,
        }
    }

    /// Resolves a label, falling back to [`Mood::Calm`] for unknown labels.
    pub fn resolve(label: &str) -> Mood {
        match Mood::parse(label) {
            Some(mood) => mood,
            None => {
                tracing::warn!(label, "unknown mood, falling back to calm");
                Mood::Calm
            }
        }
    }

    /// Returns the canonical lowercase label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Calm => "calm",
            Mood::Peaceful => "peaceful",
            Mood::Sad => "sad",
            Mood::Anxious => "anxious",
            Mood::Happy => "happy",
            Mood::Energetic => "energetic",
            Mood::Stressed => "stressed",
        }
    }

    /// Suggested tempo in beats per minute.
    pub fn bpm(&self) -> u32 {
        match self {
            Mood::Calm => 60,
            Mood::Peaceful => 65,
            Mood::Sad => 70,
            Mood::Anxious => 80,
            Mood::Happy => 120,
            Mood::Energetic => 140,
            Mood::Stressed => 90,
        }
    }

    /// Suggested musical key.
    pub fn key(&self) -> &'static str {
        match self {
            Mood::Calm => "C major",
            Mood::Peaceful => "F major",
            Mood::Sad => "D minor",
            Mood::Anxious => "A minor",
            Mood::Happy => "G major",
            Mood::Energetic => "E major",
            Mood::Stressed => "C major",
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Instrument colorations applied after harmonic synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Instrument {
    /// Exponential attack/decay contour.
    Piano,
    /// 5 Hz vibrato.
    Strings,
    /// Breath noise.
    Flute,
}

impl Instrument {
    /// Parses an exact lowercase label. Unknown labels are `None` and are
    /// skipped by the colorizer.
    pub fn parse(label: &str) -> Option<Instrument> {
        match label {
            "piano" => Some(Instrument::Piano),
            "strings" => Some(Instrument::Strings),
            "flute" => Some(Instrument::Flute),
            _ => None,
        }
    }

    /// Returns the canonical lowercase label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Instrument::Piano => "piano",
            Instrument::Strings => "strings",
            Instrument::Flute => "flute",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_labels_round_trip() {
        for mood in Mood::ALL {
            assert_eq!(Mood::parse(mood.as_str()), Some(mood));
        }
    }

    #[test]
    fn test_unknown_mood_resolves_to_calm() {
        assert_eq!(Mood::resolve("melancholic"), Mood::Calm);
        assert_eq!(Mood::resolve(""), Mood::Calm);
        assert_eq!(Mood::resolve("Anxious"), Mood::Calm);
    }

    #[test]
    fn test_bpm_and_key() {
        assert_eq!(Mood::Calm.bpm(), 60);
        assert_eq!(Mood::Energetic.bpm(), 140);
        assert_eq!(Mood::Stressed.bpm(), 90);
        assert_eq!(Mood::Sad.key(), "D minor");
        assert_eq!(Mood::Happy.key(), "G major");
    }

    #[test]
    fn test_mood_serde_snake_case() {
        let json = serde_json::to_string(&Mood::Energetic).unwrap();
        assert_eq!(json, "\"energetic\"");
    }

    #[test]
    fn test_instrument_parse() {
        assert_eq!(Instrument::parse("piano"), Some(Instrument::Piano));
        assert_eq!(Instrument::parse("strings"), Some(Instrument::Strings));
        assert_eq!(Instrument::parse("flute"), Some(Instrument::Flute));
        assert_eq!(Instrument::parse("theremin"), None);
    }
}

//! Mood profile table.
//!
//! Maps each [`Mood`] to the parameters of its harmonic stack. The table is
//! built once per process and never mutated. Profiles are checked when they
//! are constructed, so a malformed entry fails at table-construction time
//! instead of during a request.

use std::sync::OnceLock;

use serenity_spec::Mood;

use crate::envelope::EnvelopeShape;
use crate::error::{AudioError, AudioResult};

/// Synthesis parameters for one mood.
#[derive(Debug, Clone, PartialEq)]
pub struct MoodProfile {
    mood: Mood,
    base_frequency: f64,
    harmonic_ratios: Vec<f64>,
    harmonic_amplitudes: Vec<f64>,
    envelope_shape: EnvelopeShape,
}

impl MoodProfile {
    /// Creates a profile, checking its invariants.
    ///
    /// # Errors
    /// Returns [`AudioError::InvalidProfile`] if the ratio and amplitude
    /// lists differ in length, the base frequency or any ratio is not a
    /// positive finite number, or any amplitude is outside `[0, 1]`.
    pub fn new(
        mood: Mood,
        base_frequency: f64,
        harmonic_ratios: Vec<f64>,
        harmonic_amplitudes: Vec<f64>,
        envelope_shape: EnvelopeShape,
    ) -> AudioResult<Self> {
        if harmonic_ratios.len() != harmonic_amplitudes.len() {
            return Err(AudioError::invalid_profile(
                mood.as_str(),
                format!(
                    "{} harmonic ratios but {} amplitudes",
                    harmonic_ratios.len(),
                    harmonic_amplitudes.len()
                ),
            ));
        }
        if !(base_frequency.is_finite() && base_frequency > 0.0) {
            return Err(AudioError::invalid_profile(
                mood.as_str(),
                format!("base frequency must be positive, got {}", base_frequency),
            ));
        }
        if let Some(ratio) = harmonic_ratios
            .iter()
            .find(|r| !(r.is_finite() && **r > 0.0))
        {
            return Err(AudioError::invalid_profile(
                mood.as_str(),
                format!("harmonic ratio must be positive, got {}", ratio),
            ));
        }
        if let Some(amp) = harmonic_amplitudes
            .iter()
            .find(|a| !(0.0..=1.0).contains(*a))
        {
            return Err(AudioError::invalid_profile(
                mood.as_str(),
                format!("harmonic amplitude must be in [0, 1], got {}", amp),
            ));
        }

        Ok(Self {
            mood,
            base_frequency,
            harmonic_ratios,
            harmonic_amplitudes,
            envelope_shape,
        })
    }

    /// Mood this profile was built for.
    pub fn mood(&self) -> Mood {
        self.mood
    }

    /// Fundamental in Hz.
    pub fn base_frequency(&self) -> f64 {
        self.base_frequency
    }

    /// Ratio of each partial to the fundamental.
    pub fn harmonic_ratios(&self) -> &[f64] {
        &self.harmonic_ratios
    }

    /// Amplitude of each partial, same length as the ratios.
    pub fn harmonic_amplitudes(&self) -> &[f64] {
        &self.harmonic_amplitudes
    }

    /// Envelope applied to every partial.
    pub fn envelope_shape(&self) -> EnvelopeShape {
        self.envelope_shape
    }

    /// `(frequency, amplitude)` of every partial.
    pub fn partials(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.harmonic_ratios
            .iter()
            .zip(self.harmonic_amplitudes.iter())
            .map(move |(&ratio, &amp)| (self.base_frequency * ratio, amp))
    }
}

/// The process-wide profile table.
#[derive(Debug)]
pub struct ProfileTable {
    calm: MoodProfile,
    peaceful: MoodProfile,
    sad: MoodProfile,
    anxious: MoodProfile,
    happy: MoodProfile,
    energetic: MoodProfile,
}

impl ProfileTable {
    /// Builds the table from its literal parameters.
    pub fn build() -> AudioResult<Self> {
        Ok(Self {
            // A3
            calm: MoodProfile::new(
                Mood::Calm,
                220.0,
                vec![1.0, 1.5, 2.0, 3.0],
                vec![0.8, 0.4, 0.2, 0.1],
                EnvelopeShape::SlowRise,
            )?,
            // Golden-ratio partials over 174 Hz
            peaceful: MoodProfile::new(
                Mood::Peaceful,
                174.0,
                vec![1.0, 1.618, 2.0, 2.618],
                vec![0.7, 0.5, 0.3, 0.2],
                EnvelopeShape::Gentle,
            )?,
            // C4
            sad: MoodProfile::new(
                Mood::Sad,
                256.0,
                vec![1.0, 1.2, 1.8, 2.4],
                vec![0.9, 0.3, 0.2, 0.1],
                EnvelopeShape::GradualLift,
            )?,
            // A4 at 432 Hz tuning
            anxious: MoodProfile::new(
                Mood::Anxious,
                432.0,
                vec![1.0, 1.5, 2.0, 2.5],
                vec![0.6, 0.4, 0.3, 0.2],
                EnvelopeShape::Stabilizing,
            )?,
            happy: MoodProfile::new(
                Mood::Happy,
                528.0,
                vec![1.0, 1.25, 1.5, 2.0],
                vec![0.7, 0.5, 0.4, 0.3],
                EnvelopeShape::Uplifting,
            )?,
            energetic: MoodProfile::new(
                Mood::Energetic,
                396.0,
                vec![1.0, 1.33, 1.66, 2.0],
                vec![0.8, 0.6, 0.4, 0.2],
                EnvelopeShape::Dynamic,
            )?,
        })
    }

    /// Profile for a mood. Stressed has no dedicated profile and shares calm's.
    pub fn get(&self, mood: Mood) -> &MoodProfile {
        match mood {
            Mood::Calm | Mood::Stressed => &self.calm,
            Mood::Peaceful => &self.peaceful,
            Mood::Sad => &self.sad,
            Mood::Anxious => &self.anxious,
            Mood::Happy => &self.happy,
            Mood::Energetic => &self.energetic,
        }
    }
}

static PROFILE_TABLE: OnceLock<ProfileTable> = OnceLock::new();

/// Returns the shared profile table.
pub fn table() -> &'static ProfileTable {
    PROFILE_TABLE.get_or_init(|| ProfileTable::build().expect("invalid mood profile table"))
}

/// Looks up the profile for a mood. Never fails.
pub fn lookup(mood: Mood) -> &'static MoodProfile {
    table().get(mood)
}

/// Looks up the profile for a raw mood label; unknown labels get calm.
pub fn lookup_label(label: &str) -> &'static MoodProfile {
    lookup(Mood::resolve(label))
}

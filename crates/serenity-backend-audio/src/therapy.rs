//! Therapeutic effect pipeline.
//!
//! An [`EffectDecision`] is computed once per request from the resolved mood
//! and the mood history averages, then a fixed sequence of optional stages
//! is applied:
//!
//! 1. Stress reduction (40 Hz grounding tone) when average stress exceeds 6
//! 2. Anxiety relief (10 Hz alpha tone) when average anxiety exceeds 6
//! 3. At most one mood-specific stage: lifting, calming, or grounding
//!
//! Nothing persists between calls.

use serde::{Deserialize, Serialize};
use serenity_spec::{Mood, MoodEntry, NEUTRAL_LEVEL};

use crate::binaural;
use crate::waveform::{normalized_time, Waveform};

/// Averages above this trigger the history-driven stages.
pub const ACTIVATION_THRESHOLD: f64 = 6.0;

const GROUNDING_TONE_HZ: f64 = 40.0;
const GROUNDING_TONE_AMPLITUDE: f64 = 0.1;

const ALPHA_TONE_HZ: f64 = 10.0;
const ALPHA_TONE_AMPLITUDE: f64 = 0.05;

const THETA_TONE_HZ: f64 = 6.0;
const THETA_TONE_AMPLITUDE: f64 = 0.03;

const BASS_TONE_HZ: f64 = 60.0;
const BASS_TONE_AMPLITUDE: f64 = 0.2;

/// Gain added by the end of the mood-lifting ramp.
const BRIGHTNESS_RAMP: f64 = 0.3;

/// Arithmetic means of the mood history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoodAverages {
    /// Mean stress level.
    pub stress: f64,
    /// Mean anxiety level.
    pub anxiety: f64,
}

impl MoodAverages {
    /// Averages a history; an empty history is neutral (5.0, 5.0).
    pub fn from_history(history: &[MoodEntry]) -> Self {
        if history.is_empty() {
            tracing::debug!("empty mood history, using neutral averages");
            return Self {
                stress: NEUTRAL_LEVEL,
                anxiety: NEUTRAL_LEVEL,
            };
        }

        let n = history.len() as f64;
        Self {
            stress: history.iter().map(|e| e.stress_level).sum::<f64>() / n,
            anxiety: history.iter().map(|e| e.anxiety_level).sum::<f64>() / n,
        }
    }
}

/// Mood-specific stage, at most one per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodEffect {
    /// Linear brightness ramp `1 + 0.3·t` (sad).
    MoodLifting,
    /// 6 Hz theta tone at 0.03 (anxious).
    Calming,
    /// 60 Hz bass tone at 0.2 (energetic).
    Grounding,
}

impl MoodEffect {
    /// Stage selected by the primary mood, if any.
    pub fn for_mood(mood: Mood) -> Option<Self> {
        match mood {
            Mood::Sad => Some(MoodEffect::MoodLifting),
            Mood::Anxious => Some(MoodEffect::Calming),
            Mood::Energetic => Some(MoodEffect::Grounding),
            Mood::Calm | Mood::Peaceful | Mood::Happy | Mood::Stressed => None,
        }
    }

    /// Stage name used in metadata and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            MoodEffect::MoodLifting => "mood_lifting",
            MoodEffect::Calming => "calming",
            MoodEffect::Grounding => "grounding",
        }
    }

    /// Applies this stage.
    pub fn apply(&self, waveform: Waveform) -> Waveform {
        match self {
            MoodEffect::MoodLifting => apply_mood_lifting(waveform),
            MoodEffect::Calming => waveform.add_sine(THETA_TONE_HZ, THETA_TONE_AMPLITUDE),
            MoodEffect::Grounding => waveform.add_sine(BASS_TONE_HZ, BASS_TONE_AMPLITUDE),
        }
    }
}

/// Which optional stages run for a request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectDecision {
    /// Averages the flags were derived from.
    pub averages: MoodAverages,
    /// Average stress above the threshold.
    pub apply_stress_reduction: bool,
    /// Average anxiety above the threshold.
    pub apply_anxiety_relief: bool,
    /// Mood-specific stage, if the mood has one.
    pub mood_specific_effect: Option<MoodEffect>,
    /// Whether the binaural overlay follows the pipeline.
    pub add_binaural: bool,
}

impl EffectDecision {
    /// Computes the decision from the resolved mood and history.
    pub fn compute(mood: Mood, history: &[MoodEntry]) -> Self {
        let averages = MoodAverages::from_history(history);
        Self {
            averages,
            apply_stress_reduction: averages.stress > ACTIVATION_THRESHOLD,
            apply_anxiety_relief: averages.anxiety > ACTIVATION_THRESHOLD,
            mood_specific_effect: MoodEffect::for_mood(mood),
            add_binaural: binaural::should_apply(mood),
        }
    }
}

/// Adds the 40 Hz grounding tone.
pub fn apply_stress_reduction(waveform: Waveform) -> Waveform {
    waveform.add_sine(GROUNDING_TONE_HZ, GROUNDING_TONE_AMPLITUDE)
}

/// Adds the 10 Hz alpha tone.
pub fn apply_anxiety_relief(waveform: Waveform) -> Waveform {
    waveform.add_sine(ALPHA_TONE_HZ, ALPHA_TONE_AMPLITUDE)
}

fn apply_mood_lifting(waveform: Waveform) -> Waveform {
    let n = waveform.len();
    waveform.map_samples(|i, s| s * (1.0 + BRIGHTNESS_RAMP * normalized_time(i, n)))
}

/// Applies the history-driven and mood-driven stages in order.
///
/// The binaural overlay is not part of this pipeline; see [`crate::binaural`].
pub fn apply(waveform: Waveform, decision: &EffectDecision) -> Waveform {
    let mut waveform = waveform;
    if decision.apply_stress_reduction {
        tracing::debug!(avg_stress = decision.averages.stress, "stress reduction");
        waveform = apply_stress_reduction(waveform);
    }
    if decision.apply_anxiety_relief {
        tracing::debug!(avg_anxiety = decision.averages.anxiety, "anxiety relief");
        waveform = apply_anxiety_relief(waveform);
    }
    if let Some(effect) = decision.mood_specific_effect {
        tracing::debug!(effect = effect.as_str(), "mood-specific stage");
        waveform = effect.apply(waveform);
    }
    waveform
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_history_is_neutral() {
        let averages = MoodAverages::from_history(&[]);
        assert_eq!(averages.stress, 5.0);
        assert_eq!(averages.anxiety, 5.0);

        for mood in Mood::ALL {
            let decision = EffectDecision::compute(mood, &[]);
            assert!(!decision.apply_stress_reduction);
            assert!(!decision.apply_anxiety_relief);
        }
    }

    #[test]
    fn test_averages_are_arithmetic_means() {
        let history = [MoodEntry::new(9.0, 2.0), MoodEntry::new(5.0, 4.0)];
        let averages = MoodAverages::from_history(&history);
        assert_eq!(averages.stress, 7.0);
        assert_eq!(averages.anxiety, 3.0);

        let decision = EffectDecision::compute(Mood::Calm, &history);
        assert!(decision.apply_stress_reduction);
        assert!(!decision.apply_anxiety_relief);
    }

    #[test]
    fn test_threshold_is_strict() {
        let decision = EffectDecision::compute(Mood::Calm, &[MoodEntry::new(6.0, 6.0)]);
        assert!(!decision.apply_stress_reduction);
        assert!(!decision.apply_anxiety_relief);
    }

    #[test]
    fn test_mood_specific_selection() {
        assert_eq!(MoodEffect::for_mood(Mood::Sad), Some(MoodEffect::MoodLifting));
        assert_eq!(MoodEffect::for_mood(Mood::Anxious), Some(MoodEffect::Calming));
        assert_eq!(MoodEffect::for_mood(Mood::Energetic), Some(MoodEffect::Grounding));
        assert_eq!(MoodEffect::for_mood(Mood::Calm), None);
        assert_eq!(MoodEffect::for_mood(Mood::Stressed), None);
    }

    #[test]
    fn test_neutral_calm_is_identity() {
        let input = Waveform::from_samples(vec![0.1, -0.2, 0.3], 22050);
        let decision = EffectDecision::compute(Mood::Calm, &[]);
        assert_eq!(apply(input.clone(), &decision), input);
    }

    #[test]
    fn test_mood_lifting_ramp() {
        let out = MoodEffect::MoodLifting.apply(Waveform::from_samples(vec![1.0; 11], 22050));
        assert_eq!(out.samples()[0], 1.0);
        assert!((out.samples()[5] - 1.15).abs() < 1e-12);
        assert!((out.samples()[10] - 1.3).abs() < 1e-12);
    }

    #[test]
    fn test_additive_stages_inject_their_tones() {
        let silent = Waveform::silence(22050, 22050);

        let grounding = apply_stress_reduction(silent.clone());
        assert!((grounding.peak() - 0.1).abs() < 1e-3);

        let alpha = apply_anxiety_relief(silent.clone());
        assert!((alpha.peak() - 0.05).abs() < 1e-3);

        let theta = MoodEffect::Calming.apply(silent.clone());
        assert!((theta.peak() - 0.03).abs() < 1e-3);

        let bass = MoodEffect::Grounding.apply(silent);
        assert!((bass.peak() - 0.2).abs() < 1e-3);
    }

    #[test]
    fn test_full_pipeline_for_anxious_history() {
        let decision = EffectDecision::compute(Mood::Anxious, &[MoodEntry::new(9.0, 9.0)]);
        assert!(decision.apply_stress_reduction);
        assert!(decision.apply_anxiety_relief);
        assert_eq!(decision.mood_specific_effect, Some(MoodEffect::Calming));
        assert!(decision.add_binaural);

        let out = apply(Waveform::silence(22050, 22050), &decision);
        let expected = Waveform::silence(22050, 22050)
            .add_sine(40.0, 0.1)
            .add_sine(10.0, 0.05)
            .add_sine(6.0, 0.03);
        assert_eq!(out, expected);
    }
}

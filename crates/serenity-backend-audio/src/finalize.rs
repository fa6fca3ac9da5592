//! Normalization and metadata for the finished composition.

use serenity_spec::metadata::{AudioProperties, GenerationMetadata, TherapeuticElements};
use serenity_spec::{Mood, SynthesisRequest, BIT_DEPTH, CHANNELS};

use crate::binaural;
use crate::therapy::EffectDecision;
use crate::waveform::Waveform;

/// Scales the buffer so its peak absolute value is exactly 1.0.
///
/// A silent buffer is returned unchanged rather than divided by zero.
pub fn normalize(waveform: Waveform) -> Waveform {
    let peak = waveform.peak();
    if peak > 0.0 {
        waveform.map_samples(|_, s| s / peak)
    } else {
        waveform
    }
}

/// Builds the metadata record for a clip.
///
/// `dynamic_range` is measured by the caller on the base composition
/// (harmonics and instruments), before the therapy and binaural stages.
pub fn build_metadata(
    request: &SynthesisRequest,
    mood: Mood,
    decision: &EffectDecision,
    dynamic_range: f64,
    sample_rate: u32,
) -> GenerationMetadata {
    let binaural_frequency_hz = if decision.add_binaural {
        binaural::beat_frequency(mood)
    } else {
        None
    };

    GenerationMetadata {
        mood: request.mood.clone(),
        genre: request.genre.clone(),
        duration: request.duration_seconds,
        tempo: request.tempo.clone(),
        instruments: request.instruments.clone(),
        bpm: mood.bpm(),
        key: mood.key().to_string(),
        therapeutic_elements: TherapeuticElements {
            binaural_beats: decision.add_binaural,
            binaural_frequency_hz,
            healing_frequencies: true,
            stress_reduction: decision.apply_stress_reduction,
            anxiety_relief: decision.apply_anxiety_relief,
            mood_specific_effect: decision.mood_specific_effect.is_some(),
            mood_effect: decision
                .mood_specific_effect
                .map(|effect| effect.as_str().to_string()),
        },
        audio_properties: AudioProperties {
            sample_rate,
            channels: CHANNELS,
            bit_depth: BIT_DEPTH,
            dynamic_range,
        },
    }
}

/// Normalizes the finished buffer and describes it.
///
/// `composition_range` is the `max - min` of the base composition, taken
/// before any therapeutic stage touched it.
pub fn finalize(
    waveform: Waveform,
    request: &SynthesisRequest,
    mood: Mood,
    decision: &EffectDecision,
    composition_range: f64,
) -> (Waveform, GenerationMetadata) {
    let sample_rate = waveform.sample_rate();
    let normalized = normalize(waveform);
    let metadata = build_metadata(request, mood, decision, composition_range, sample_rate);
    (normalized, metadata)
}

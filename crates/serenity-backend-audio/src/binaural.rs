//! Binaural beat overlay.
//!
//! True binaural beats need two ears hearing carriers that differ by the
//! beat frequency. Output here is mono, so the beat is approximated by a
//! single additive tone at the beat frequency. A stereo carrier pair is the
//! upgrade path if stereo output is ever added.

use serenity_spec::Mood;

use crate::waveform::Waveform;

/// Amplitude of the beat tone.
pub const BEAT_AMPLITUDE: f64 = 0.1;

/// Beat frequency for admitted moods without a specific entry.
pub const DEFAULT_BEAT_HZ: f64 = 8.0;

/// Returns true for moods that benefit from a beat tone.
pub fn should_apply(mood: Mood) -> bool {
    beat_frequency(mood).is_some()
}

/// Returns true for a raw mood label; unknown labels resolve to calm.
pub fn should_apply_label(label: &str) -> bool {
    should_apply(Mood::resolve(label))
}

/// Beat frequency in Hz, or `None` when no overlay applies.
pub fn beat_frequency(mood: Mood) -> Option<f64> {
    match mood {
        // Alpha
        Mood::Anxious => Some(DEFAULT_BEAT_HZ),
        // Theta
        Mood::Stressed => Some(6.0),
        // Alpha
        Mood::Sad => Some(10.0),
        // Theta, for grounding
        Mood::Energetic => Some(4.0),
        Mood::Calm | Mood::Peaceful | Mood::Happy => None,
    }
}

/// Adds the beat tone for `mood`, or returns the waveform unchanged.
pub fn apply(waveform: Waveform, mood: Mood) -> Waveform {
    match beat_frequency(mood) {
        Some(freq) => {
            tracing::debug!(mood = mood.as_str(), beat_hz = freq, "binaural overlay");
            waveform.add_sine(freq, BEAT_AMPLITUDE)
        }
        None => waveform,
    }
}

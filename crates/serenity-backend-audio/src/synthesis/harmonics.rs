//! Additive synthesis of a mood's harmonic stack.
//!
//! Each partial is `a · sin(2π·f·t + wobble(t) + φ)` where `φ` is a random
//! phase drawn per partial and `wobble(t) = 0.1·sin(2π·0.1·t)` keeps the tone
//! from sounding perfectly static. Every partial is shaped by the profile's
//! envelope and summed into a zeroed buffer. No normalization happens here.

use std::f64::consts::TAU;

use rand::Rng;
use rand_pcg::Pcg32;

use super::Synthesizer;
use crate::envelope::{self, EnvelopeShape};
use crate::profile::MoodProfile;
use crate::waveform::{num_samples, sample_time, Waveform};

/// Depth of the slow phase wobble, in radians.
const WOBBLE_DEPTH: f64 = 0.1;

/// Rate of the slow phase wobble, in Hz.
const WOBBLE_RATE: f64 = 0.1;

/// Additive synthesizer over arbitrary-ratio partials.
#[derive(Debug, Clone)]
pub struct HarmonicSynth {
    /// Frequency of each partial in Hz.
    pub frequencies: Vec<f64>,
    /// Amplitude of each partial.
    pub amplitudes: Vec<f64>,
    /// Envelope applied to every partial.
    pub envelope: EnvelopeShape,
}

impl HarmonicSynth {
    /// Creates a synthesizer from a mood profile.
    pub fn from_profile(profile: &MoodProfile) -> Self {
        let (frequencies, amplitudes) = profile.partials().unzip();
        Self {
            frequencies,
            amplitudes,
            envelope: profile.envelope_shape(),
        }
    }

    /// Draws one phase offset in `[0, 2π)` per partial, in partial order.
    pub fn draw_phases(&self, rng: &mut Pcg32) -> Vec<f64> {
        (0..self.frequencies.len())
            .map(|_| rng.gen::<f64>() * TAU)
            .collect()
    }
}

impl Synthesizer for HarmonicSynth {
    fn synthesize(&self, num_samples: usize, sample_rate: u32, rng: &mut Pcg32) -> Vec<f64> {
        let mut output = vec![0.0; num_samples];
        let env = envelope::generate(self.envelope, num_samples);
        let phases = self.draw_phases(rng);

        for ((&freq, &amp), &phase) in self
            .frequencies
            .iter()
            .zip(self.amplitudes.iter())
            .zip(phases.iter())
        {
            if amp == 0.0 {
                continue;
            }

            for (i, sample) in output.iter_mut().enumerate() {
                let t = sample_time(i, sample_rate);
                let wobble = WOBBLE_DEPTH * (TAU * WOBBLE_RATE * t).sin();
                *sample += amp * (TAU * freq * t + wobble + phase).sin() * env[i];
            }
        }

        output
    }
}

/// Builds the raw waveform for a profile.
///
/// # Arguments
/// * `profile` - Mood profile supplying partials and envelope
/// * `duration_seconds` - Clip length
/// * `sample_rate` - Sample rate in Hz
/// * `rng` - Phase source; the same seed gives the same buffer
pub fn synthesize(
    profile: &MoodProfile,
    duration_seconds: u32,
    sample_rate: u32,
    rng: &mut Pcg32,
) -> Waveform {
    let synth = HarmonicSynth::from_profile(profile);
    let samples = synth.synthesize(num_samples(duration_seconds, sample_rate), sample_rate, rng);
    Waveform::from_samples(samples, sample_rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::lookup;
    use crate::rng::create_rng;
    use serenity_spec::Mood;

    #[test]
    fn test_length() {
        let mut rng = create_rng(42);
        let w = synthesize(lookup(Mood::Calm), 1, 22050, &mut rng);
        assert_eq!(w.len(), 22050);
        assert_eq!(w.sample_rate(), 22050);
    }

    #[test]
    fn test_determinism() {
        let a = synthesize(lookup(Mood::Happy), 1, 22050, &mut create_rng(42));
        let b = synthesize(lookup(Mood::Happy), 1, 22050, &mut create_rng(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_seed_changes_phases() {
        let a = synthesize(lookup(Mood::Happy), 1, 22050, &mut create_rng(1));
        let b = synthesize(lookup(Mood::Happy), 1, 22050, &mut create_rng(2));
        assert_ne!(a, b);
    }

    #[test]
    fn test_bounded_by_amplitude_sum() {
        let profile = lookup(Mood::Energetic);
        let amp_sum: f64 = profile.harmonic_amplitudes().iter().sum();
        let w = synthesize(profile, 1, 22050, &mut create_rng(3));
        // Dynamic envelope tops out at 1.0.
        assert!(w.peak() <= amp_sum + 1e-9);
        assert!(w.peak() > 0.0);
    }

    #[test]
    fn test_slow_rise_starts_silent() {
        let w = synthesize(lookup(Mood::Calm), 1, 22050, &mut create_rng(9));
        assert_eq!(w.samples()[0], 0.0);
    }

    #[test]
    fn test_single_partial_matches_closed_form() {
        let synth = HarmonicSynth {
            frequencies: vec![100.0],
            amplitudes: vec![0.5],
            envelope: EnvelopeShape::Gentle,
        };
        let mut rng = create_rng(5);
        let phase = synth.draw_phases(&mut create_rng(5))[0];
        let samples = synth.synthesize(1000, 22050, &mut rng);

        let env = envelope::generate(EnvelopeShape::Gentle, 1000);
        for i in [0, 123, 999] {
            let t = i as f64 / 22050.0;
            let expected =
                0.5 * (TAU * 100.0 * t + 0.1 * (TAU * 0.1 * t).sin() + phase).sin() * env[i];
            assert!((samples[i] - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_phases_in_range() {
        let synth = HarmonicSynth::from_profile(lookup(Mood::Sad));
        let phases = synth.draw_phases(&mut create_rng(11));
        assert_eq!(phases.len(), 4);
        assert!(phases.iter().all(|p| (0.0..TAU).contains(p)));
    }
}

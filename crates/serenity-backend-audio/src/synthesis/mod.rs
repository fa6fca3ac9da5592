//! Sound sources for the synthesis pipeline.
//!
//! - `harmonics` - Mood-driven additive synthesis with phase-randomized partials
//! - `noise` - Zero-mean Gaussian noise (flute breath)

pub mod harmonics;
pub mod noise;

use rand_pcg::Pcg32;

pub use harmonics::{synthesize, HarmonicSynth};
pub use noise::NoiseSynth;

/// Common trait for all synthesis sources.
pub trait Synthesizer {
    /// Generates audio samples.
    ///
    /// # Arguments
    /// * `num_samples` - Number of samples to generate
    /// * `sample_rate` - Audio sample rate in Hz
    /// * `rng` - Deterministic RNG for any randomness
    fn synthesize(&self, num_samples: usize, sample_rate: u32, rng: &mut Pcg32) -> Vec<f64>;
}

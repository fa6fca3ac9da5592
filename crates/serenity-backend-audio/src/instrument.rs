//! Instrument coloration.
//!
//! Each requested instrument applies one timbral post-process to the whole
//! buffer, in request order. Order matters: piano's decay multiplies
//! whatever came before it, including earlier breath noise.

use std::f64::consts::TAU;

use rand_pcg::Pcg32;
use serenity_spec::Instrument;

use crate::synthesis::{NoiseSynth, Synthesizer};
use crate::waveform::{elapsed_seconds, normalized_time, Waveform};

/// Decay rate of the piano contour over the normalized buffer.
const PIANO_DECAY: f64 = 5.0;

/// String vibrato rate in Hz.
const VIBRATO_RATE: f64 = 5.0;

/// String vibrato depth as a gain fraction.
const VIBRATO_DEPTH: f64 = 0.02;

/// Standard deviation of flute breath noise.
const BREATH_NOISE_STD_DEV: f64 = 0.01;

/// Applies every recognized instrument label in order.
///
/// Unknown and empty labels pass the waveform through unchanged.
///
/// # Arguments
/// * `waveform` - Raw harmonic waveform
/// * `labels` - Instrument labels in request order
/// * `rng` - Noise source for breath-noise instruments
pub fn colorize(waveform: Waveform, labels: &[String], rng: &mut Pcg32) -> Waveform {
    labels.iter().fold(waveform, |waveform, label| {
        match Instrument::parse(label) {
            Some(instrument) => apply(waveform, instrument, rng),
            None => {
                tracing::debug!(instrument = %label, "unknown instrument, skipping");
                waveform
            }
        }
    })
}

/// Applies a single instrument coloration.
pub fn apply(waveform: Waveform, instrument: Instrument, rng: &mut Pcg32) -> Waveform {
    tracing::debug!(instrument = instrument.as_str(), "applying instrument");
    match instrument {
        Instrument::Piano => piano(waveform),
        Instrument::Strings => strings(waveform),
        Instrument::Flute => flute(waveform, rng),
    }
}

/// Multiplies by `exp(-5·t)` with `t` running 0 to 1 across the buffer.
fn piano(waveform: Waveform) -> Waveform {
    let n = waveform.len();
    waveform.map_samples(|i, s| s * (-PIANO_DECAY * normalized_time(i, n)).exp())
}

/// Multiplies by `1 + 0.02·sin(2π·5·t)` with `t` in seconds.
fn strings(waveform: Waveform) -> Waveform {
    let n = waveform.len();
    let sample_rate = waveform.sample_rate();
    waveform.map_samples(|i, s| {
        let t = elapsed_seconds(i, n, sample_rate);
        s * (1.0 + VIBRATO_DEPTH * (TAU * VIBRATO_RATE * t).sin())
    })
}

/// Adds zero-mean Gaussian breath noise.
fn flute(waveform: Waveform, rng: &mut Pcg32) -> Waveform {
    let noise = NoiseSynth::gaussian(BREATH_NOISE_STD_DEV).synthesize(
        waveform.len(),
        waveform.sample_rate(),
        rng,
    );
    waveform.map_samples(|i, s| s + noise[i])
}

//! Owned mono sample buffer passed stage to stage.
//!
//! Every pipeline stage takes a [`Waveform`] by value and returns one, so a
//! buffer is never aliased between stages. Stages mutate the samples in place
//! before handing the buffer on.
//!
//! Three time axes are used across the pipeline:
//! - [`sample_time`]: `i / sample_rate`, the synthesis clock
//! - [`normalized_time`]: `i / (n - 1)`, spanning exactly 0 to 1
//! - [`elapsed_seconds`]: `normalized_time * n / sample_rate`, spanning 0 to
//!   the buffer length in seconds inclusive

use std::f64::consts::TAU;

/// A fixed-length mono buffer at a fixed sample rate.
#[derive(Debug, Clone, PartialEq)]
pub struct Waveform {
    samples: Vec<f64>,
    sample_rate: u32,
}

impl Waveform {
    /// Creates an all-zero buffer.
    pub fn silence(num_samples: usize, sample_rate: u32) -> Self {
        Self {
            samples: vec![0.0; num_samples],
            sample_rate,
        }
    }

    /// Wraps existing samples.
    pub fn from_samples(samples: Vec<f64>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Read-only view of the samples.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Length in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Largest absolute sample value (0.0 for an empty buffer).
    pub fn peak(&self) -> f64 {
        self.samples
            .iter()
            .map(|s| s.abs())
            .fold(0.0_f64, |a, b| a.max(b))
    }

    /// `max - min` over the samples (0.0 for an empty buffer).
    pub fn dynamic_range(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let (min, max) = self
            .samples
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &s| {
                (lo.min(s), hi.max(s))
            });
        max - min
    }

    /// Returns true if every sample is exactly zero.
    pub fn is_silent(&self) -> bool {
        self.samples.iter().all(|&s| s == 0.0)
    }

    /// Rewrites every sample from its index and current value.
    pub fn map_samples(mut self, mut f: impl FnMut(usize, f64) -> f64) -> Self {
        for (i, sample) in self.samples.iter_mut().enumerate() {
            *sample = f(i, *sample);
        }
        self
    }

    /// Adds `amplitude * sin(2π · frequency · t)` with `t` on the
    /// [`elapsed_seconds`] axis.
    pub fn add_sine(self, frequency: f64, amplitude: f64) -> Self {
        let n = self.samples.len();
        let sample_rate = self.sample_rate;
        self.map_samples(|i, s| {
            let t = elapsed_seconds(i, n, sample_rate);
            s + amplitude * (TAU * frequency * t).sin()
        })
    }
}

/// Number of samples for a clip of whole seconds.
pub fn num_samples(duration_seconds: u32, sample_rate: u32) -> usize {
    duration_seconds as usize * sample_rate as usize
}

/// Synthesis clock: `i / sample_rate`.
#[inline]
pub fn sample_time(i: usize, sample_rate: u32) -> f64 {
    i as f64 / sample_rate as f64
}

/// Position in `[0, 1]`, with the first sample at 0 and the last at 1.
#[inline]
pub fn normalized_time(i: usize, n: usize) -> f64 {
    if n <= 1 {
        0.0
    } else {
        i as f64 / (n - 1) as f64
    }
}

/// Position in seconds, with the last sample at exactly `n / sample_rate`.
#[inline]
pub fn elapsed_seconds(i: usize, n: usize, sample_rate: u32) -> f64 {
    normalized_time(i, n) * n as f64 / sample_rate as f64
}

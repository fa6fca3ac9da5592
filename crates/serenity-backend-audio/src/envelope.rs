//! Closed-form amplitude envelopes.
//!
//! Each shape maps normalized time `t` in `[0, 1]` to a gain. Curves are
//! sampled at exactly `sample_count` points with the first sample at `t = 0`
//! and the last at `t = 1`. The oscillating shapes (`stabilizing`, `dynamic`)
//! are non-monotonic and are not clamped.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::waveform::normalized_time;

/// Envelope shape identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvelopeShape {
    /// `sqrt(t)`
    SlowRise,
    /// `sin(π·t/2)`; the fallback shape.
    Gentle,
    /// `t^0.3`
    GradualLift,
    /// `0.5 + 0.5·sin(2π·t)`
    Stabilizing,
    /// `t^0.8`
    Uplifting,
    /// `0.7 + 0.3·sin(4π·t)`
    Dynamic,
}

impl EnvelopeShape {
    /// Every shape.
    pub const ALL: [EnvelopeShape; 6] = [
        EnvelopeShape::SlowRise,
        EnvelopeShape::Gentle,
        EnvelopeShape::GradualLift,
        EnvelopeShape::Stabilizing,
        EnvelopeShape::Uplifting,
        EnvelopeShape::Dynamic,
    ];

    /// Parses a shape name, falling back to [`EnvelopeShape::Gentle`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "slow_rise" => EnvelopeShape::SlowRise,
            "gentle" => EnvelopeShape::Gentle,
            "gradual_lift" => EnvelopeShape::GradualLift,
            "stabilizing" => EnvelopeShape::Stabilizing,
            "uplifting" => EnvelopeShape::Uplifting,
            "dynamic" => EnvelopeShape::Dynamic,
            other => {
                tracing::warn!(shape = other, "unknown envelope shape, falling back to gentle");
                EnvelopeShape::Gentle
            }
        }
    }

    /// Canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvelopeShape::SlowRise => "slow_rise",
            EnvelopeShape::Gentle => "gentle",
            EnvelopeShape::GradualLift => "gradual_lift",
            EnvelopeShape::Stabilizing => "stabilizing",
            EnvelopeShape::Uplifting => "uplifting",
            EnvelopeShape::Dynamic => "dynamic",
        }
    }

    /// Gain at normalized time `t`.
    #[inline]
    pub fn value_at(&self, t: f64) -> f64 {
        match self {
            EnvelopeShape::SlowRise => t.sqrt(),
            EnvelopeShape::Gentle => (PI * t / 2.0).sin(),
            EnvelopeShape::GradualLift => t.powf(0.3),
            EnvelopeShape::Stabilizing => 0.5 + 0.5 * (2.0 * PI * t).sin(),
            EnvelopeShape::Uplifting => t.powf(0.8),
            EnvelopeShape::Dynamic => 0.7 + 0.3 * (4.0 * PI * t).sin(),
        }
    }
}

/// Generates an envelope curve.
///
/// # Arguments
/// * `shape` - Envelope shape
/// * `sample_count` - Number of points; the output always has this length
///
/// # Returns
/// Gains sampled over `t` in `[0, 1]`
pub fn generate(shape: EnvelopeShape, sample_count: usize) -> Vec<f64> {
    (0..sample_count)
        .map(|i| shape.value_at(normalized_time(i, sample_count)))
        .collect()
}

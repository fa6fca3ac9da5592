//! Main entry point for synthesis.
//!
//! Runs the full pipeline for one request:
//!
//! ```text
//! harmonics -> instruments -> therapy -> binaural -> finalize
//! ```
//!
//! Each stage owns the buffer while it runs and hands it to the next. A
//! [`CancelToken`] is checked before every stage; stages themselves are not
//! interruptible.


use serde::Serialize;
use serenity_spec::{GenerationMetadata, SynthesisConfig, SynthesisRequest};

use crate::binaural;
use crate::cancel::CancelToken;
use crate::error::{AudioError, AudioResult};
use crate::finalize;
use crate::instrument;
use crate::profile;
use crate::rng::{create_component_rng, HARMONICS_STREAM, INSTRUMENTS_STREAM};
use crate::synthesis::harmonics;
use crate::therapy::{self, EffectDecision};
use crate::wav::WavResult;
use crate::waveform::Waveform;

/// Prefix of the model name reported with each clip.
pub const MODEL_PREFIX: &str = "SerenityAI-MusicGen";

/// Pipeline stages in execution order.
pub const STAGES: [&str; 5] = ["harmonics", "instruments", "therapy", "binaural", "finalize"];

/// A finished clip.
///
/// Serializes as `{ model_used, metadata, seed }`. Samples stay in memory
/// and leave the process as WAV through [`GenerationOutput::to_wav`].
#[derive(Debug, Clone, Serialize)]
pub struct GenerationOutput {
    /// `SerenityAI-MusicGen-<genre>`.
    pub model_used: String,
    /// Normalized samples in `[-1, 1]`.
    #[serde(skip)]
    pub waveform: Waveform,
    /// Descriptive record for the clip.
    pub metadata: GenerationMetadata,
    /// Stages that shaped the clip.
    #[serde(skip)]
    pub decision: EffectDecision,
    /// Seed the random streams were derived from.
    pub seed: u32,
}

impl GenerationOutput {
    /// Normalized samples.
    pub fn samples(&self) -> &[f64] {
        self.waveform.samples()
    }

    /// Encodes the clip as 16-bit mono PCM.
    pub fn to_wav(&self) -> WavResult {
        WavResult::from_mono(self.waveform.samples(), self.waveform.sample_rate())
    }
}

/// Model name for a genre label.
pub fn model_name(genre: &str) -> String {
    format!("{}-{}", MODEL_PREFIX, genre)
}

/// Synthesizes a request to completion.
pub fn synthesize(
    request: &SynthesisRequest,
    config: &SynthesisConfig,
) -> AudioResult<GenerationOutput> {
    synthesize_with_cancel(request, config, &CancelToken::new())
}

/// Synthesizes a request, giving up between stages once `cancel` is set.
///
/// # Errors
/// - [`AudioError::InvalidDuration`] for a zero duration or one above
///   `config.max_duration_seconds`
/// - [`AudioError::InvalidSampleRate`] for an unsupported rate
/// - [`AudioError::InvalidParameter`] for a non-finite mood history level
/// - [`AudioError::Cancelled`] naming the stage that would have run next
pub fn synthesize_with_cancel(
    request: &SynthesisRequest,
    config: &SynthesisConfig,
    cancel: &CancelToken,
) -> AudioResult<GenerationOutput> {
    check_limits(request, config)?;

    let mood = request.resolved_mood();
    let profile = profile::lookup(mood);
    let seed = request.seed.unwrap_or(config.default_seed);
    let sample_rate = config.sample_rate;
    let decision = EffectDecision::compute(mood, &request.mood_history);

    checkpoint(cancel, STAGES[0])?;
    tracing::debug!(mood = mood.as_str(), seed, "synthesizing harmonics");
    let mut harmonic_rng = create_component_rng(seed, HARMONICS_STREAM);
    let waveform = harmonics::synthesize(
        profile,
        request.duration_seconds,
        sample_rate,
        &mut harmonic_rng,
    );

    checkpoint(cancel, STAGES[1])?;
    let mut instrument_rng = create_component_rng(seed, INSTRUMENTS_STREAM);
    let waveform = instrument::colorize(waveform, &request.instruments, &mut instrument_rng);
    let composition_range = waveform.dynamic_range();

    checkpoint(cancel, STAGES[2])?;
    let waveform = therapy::apply(waveform, &decision);

    checkpoint(cancel, STAGES[3])?;
    let waveform = if decision.add_binaural {
        binaural::apply(waveform, mood)
    } else {
        waveform
    };

    checkpoint(cancel, STAGES[4])?;
    let (waveform, metadata) = finalize::finalize(waveform, request, mood, &decision, composition_range);

    tracing::info!(
        mood = %request.mood,
        resolved = mood.as_str(),
        seed,
        samples = waveform.len(),
        sample_rate,
        binaural = decision.add_binaural,
        "synthesis complete"
    );

    Ok(GenerationOutput {
        model_used: model_name(&request.genre),
        waveform,
        metadata,
        decision,
        seed,
    })
}

fn check_limits(request: &SynthesisRequest, config: &SynthesisConfig) -> AudioResult<()> {
    if !config.has_supported_sample_rate() {
        return Err(AudioError::InvalidSampleRate {
            rate: config.sample_rate,
        });
    }
    if request.duration_seconds == 0 || request.duration_seconds > config.max_duration_seconds {
        return Err(AudioError::InvalidDuration {
            duration: request.duration_seconds,
        });
    }
    for (i, entry) in request.mood_history.iter().enumerate() {
        let levels = [
            ("stress_level", entry.stress_level),
            ("anxiety_level", entry.anxiety_level),
        ];
        for (field, value) in levels {
            if !value.is_finite() {
                return Err(AudioError::invalid_param(
                    format!("mood_history[{}].{}", i, field),
                    format!("must be finite, got {}", value),
                ));
            }
        }
    }
    Ok(())
}

fn checkpoint(cancel: &CancelToken, stage: &'static str) -> AudioResult<()> {
    if cancel.is_cancelled() {
        tracing::debug!(stage, "synthesis cancelled");
        return Err(AudioError::Cancelled { stage });
    }
    Ok(())
}

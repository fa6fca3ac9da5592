//! Serenity Audio Backend
//!
//! Mood-conditioned procedural synthesis of short therapeutic clips.
//!
//! # Overview
//!
//! A [`SynthesisRequest`](serenity_spec::SynthesisRequest) names a mood, an
//! ordered instrument list, and an optional mood history. The backend runs a
//! fixed pipeline over one owned mono buffer:
//!
//! 1. **Harmonics** - additive partials from the mood's profile, shaped by
//!    its envelope
//! 2. **Instruments** - timbral post-processes in request order
//! 3. **Therapy** - history-driven grounding and alpha tones, plus at most
//!    one mood-specific stage
//! 4. **Binaural** - a low-frequency beat tone for moods that admit one
//! 5. **Finalize** - peak normalization and metadata
//!
//! # Determinism
//!
//! All randomness comes from PCG32 streams derived from the request seed via
//! BLAKE3, so the same request and seed give the same samples.
//!
//! # Example
//!
//! ```
//! use serenity_backend_audio::synthesize;
//! use serenity_spec::{SynthesisConfig, SynthesisRequest};
//!
//! let request = SynthesisRequest::builder("calm")
//!     .duration_seconds(1)
//!     .seed(42)
//!     .build();
//! let output = synthesize(&request, &SynthesisConfig::default()).unwrap();
//!
//! assert_eq!(output.samples().len(), 22050);
//! assert!(!output.metadata.therapeutic_elements.binaural_beats);
//! println!("PCM hash: {}", output.to_wav().pcm_hash);
//! ```

pub mod analysis;
pub mod binaural;
pub mod cancel;
pub mod envelope;
pub mod error;
pub mod finalize;
pub mod generate;
pub mod instrument;
pub mod profile;
pub mod rng;
pub mod synthesis;
pub mod therapy;
pub mod wav;
pub mod waveform;

pub use cancel::CancelToken;
pub use envelope::EnvelopeShape;
pub use error::{AudioError, AudioResult};
pub use generate::{synthesize, synthesize_with_cancel, GenerationOutput};
pub use profile::MoodProfile;
pub use therapy::{EffectDecision, MoodAverages, MoodEffect};
pub use wav::WavResult;
pub use waveform::Waveform;

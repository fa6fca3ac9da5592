//! Serenity Request Library
//!
//! Types, configuration, and validation for therapeutic audio synthesis
//! requests. A request names a mood, a few style labels, an ordered list of
//! instruments, and an optional mood history; the audio backend turns it into
//! a mono waveform plus a [`GenerationMetadata`] record.
//!
//! # Example
//!
//! ```
//! use serenity_spec::{SynthesisConfig, SynthesisRequest, Mood};
//! use serenity_spec::validation::validate_request;
//!
//! let request = SynthesisRequest::builder("anxious")
//!     .duration_seconds(1)
//!     .instrument("strings")
//!     .history(9.0, 9.0)
//!     .seed(42)
//!     .build();
//!
//! assert_eq!(request.resolved_mood(), Mood::Anxious);
//! assert!(validate_request(&request, &SynthesisConfig::default()).is_ok());
//! ```
//!
//! # Modules
//!
//! - [`config`]: Process-level synthesis settings
//! - [`error`]: Error and warning types for validation
//! - [`metadata`]: Metadata emitted with each clip
//! - [`mood`]: Mood and instrument vocabulary
//! - [`request`]: Request type and builder
//! - [`validation`]: Request validation

pub mod config;
pub mod error;
pub mod metadata;
pub mod mood;
pub mod request;
pub mod validation;

pub use config::{
    SynthesisConfig, DEFAULT_MAX_DURATION_SECONDS, DEFAULT_SAMPLE_RATE, SUPPORTED_SAMPLE_RATES,
};
pub use error::{
    BackendError, ErrorCode, GenerationError, SpecError, ValidationError, ValidationResult,
    ValidationWarning, WarningCode,
};
pub use metadata::{AudioProperties, GenerationMetadata, TherapeuticElements, BIT_DEPTH, CHANNELS};
pub use mood::{Instrument, Mood};
pub use request::{
    MoodEntry, SynthesisRequest, SynthesisRequestBuilder, DEFAULT_DURATION_SECONDS, NEUTRAL_LEVEL,
};
pub use validation::validate_request;

//! Error types for audio backend.

use serenity_spec::BackendError;
use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur during audio generation.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Invalid duration.
    #[error("invalid duration: {duration} seconds")]
    InvalidDuration {
        /// The invalid duration.
        duration: u32,
    },

    /// Invalid sample rate.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// A mood profile violates a table invariant.
    #[error("invalid profile for mood '{mood}': {message}")]
    InvalidProfile {
        /// Mood whose profile is broken.
        mood: String,
        /// What is wrong with it.
        message: String,
    },

    /// Synthesis was cancelled between stages.
    #[error("synthesis cancelled before stage '{stage}'")]
    Cancelled {
        /// Stage that would have run next.
        stage: &'static str,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AudioError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates an invalid profile error.
    pub fn invalid_profile(mood: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidProfile {
            mood: mood.into(),
            message: message.into(),
        }
    }
}

impl BackendError for AudioError {
    fn code(&self) -> &'static str {
        match self {
            AudioError::InvalidDuration { .. } => "AUDIO_001",
            AudioError::InvalidSampleRate { .. } => "AUDIO_002",
            AudioError::InvalidParameter { .. } => "AUDIO_003",
            AudioError::InvalidProfile { .. } => "AUDIO_004",
            AudioError::Cancelled { .. } => "AUDIO_005",
            AudioError::Io(_) => "AUDIO_006",
        }
    }

    fn category(&self) -> &'static str {
        "audio"
    }
}

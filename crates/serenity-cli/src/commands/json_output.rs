//! JSON output types for machine-readable CLI output.
//!
//! Every `--json` command prints exactly one of these envelopes to stdout.

use serde::{Deserialize, Serialize};
use serenity_spec::{GenerationMetadata, ValidationError, ValidationWarning};

/// Stable error codes for CLI-level failures. Validation and backend codes
/// (`E001`, `AUDIO_001`, ...) pass through unchanged.
pub mod error_codes {
    /// Request file could not be loaded
    pub const REQUEST_LOAD: &str = "CLI_001";
    /// Config file could not be loaded
    pub const CONFIG_LOAD: &str = "CLI_002";
    /// Output could not be written
    pub const OUTPUT_WRITE: &str = "CLI_003";
    /// Synthesis exceeded its time budget
    pub const TIMEOUT: &str = "CLI_004";
    /// Worker task failed
    pub const TASK_FAILED: &str = "CLI_005";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// Field path, when the error is about one field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl JsonError {
    /// Creates an error without a path.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
        }
    }
}

impl From<&ValidationError> for JsonError {
    fn from(err: &ValidationError) -> Self {
        Self {
            code: err.code.code().to_string(),
            message: err.message.clone(),
            path: err.path.clone(),
        }
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonWarning {
    /// Stable warning code
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// Field path, when the warning is about one field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl From<&ValidationWarning> for JsonWarning {
    fn from(warning: &ValidationWarning) -> Self {
        Self {
            code: warning.code.code().to_string(),
            message: warning.message.clone(),
            path: warning.path.clone(),
        }
    }
}

/// Output of `validate --json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateOutput {
    /// Whether the request is valid
    pub success: bool,
    /// Request file
    pub request: String,
    /// Errors found
    pub errors: Vec<JsonError>,
    /// Warnings found
    pub warnings: Vec<JsonWarning>,
}

/// Files and fingerprints of one generated clip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClipRecord {
    /// `SerenityAI-MusicGen-<genre>`
    pub model_used: String,
    /// Path of the WAV file
    pub wav_path: String,
    /// Path of the metadata sidecar
    pub metadata_path: String,
    /// BLAKE3 hash of the PCM payload
    pub pcm_hash: String,
    /// Seed the clip was generated from
    pub seed: u32,
    /// Strongest frequency in the audible band, in Hz
    pub dominant_frequency_hz: f64,
    /// Wall time of synthesis and encoding
    pub duration_ms: u64,
}

/// Output of `generate --json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOutput {
    /// Whether a clip was produced
    pub success: bool,
    /// Request file
    pub request: String,
    /// RFC 3339 local time of completion
    pub generated_at: String,
    /// The clip, on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clip: Option<ClipRecord>,
    /// Clip metadata, on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<GenerationMetadata>,
    /// Errors, on failure
    pub errors: Vec<JsonError>,
    /// Validation warnings
    pub warnings: Vec<JsonWarning>,
}

/// One request's outcome in a batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchItem {
    /// Request file
    pub request: String,
    /// Whether a clip was produced
    pub success: bool,
    /// The clip, on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clip: Option<ClipRecord>,
    /// Error, on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonError>,
}

/// Output of `batch --json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchOutput {
    /// RFC 3339 local time of completion
    pub generated_at: String,
    /// Requests attempted
    pub total: usize,
    /// Clips produced
    pub succeeded: usize,
    /// Requests that failed
    pub failed: usize,
    /// Per-request outcomes, in file name order
    pub items: Vec<BatchItem>,
}

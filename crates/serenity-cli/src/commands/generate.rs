//! Generate command implementation
//!
//! Validates a request, synthesizes it, and writes the WAV file plus a
//! metadata sidecar.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Result;
use chrono::{DateTime, Local};
use colored::Colorize;
use serenity_backend_audio::analysis::dominant_frequency;
use serenity_backend_audio::{synthesize_with_cancel, CancelToken, GenerationOutput};
use serenity_spec::{
    validate_request, GenerationError, GenerationMetadata, SynthesisConfig, SynthesisRequest,
    ValidationError, ValidationWarning,
};
use thiserror::Error;

use super::json_output::{error_codes, ClipRecord, GenerateOutput, JsonError, JsonWarning};
use super::{EXIT_GENERATION_ERROR, EXIT_OK, EXIT_REQUEST_ERROR};
use crate::input::{apply_seed, load_config, load_request};

/// Prefix of every generated file name.
pub const FILE_PREFIX: &str = "therapeutic_music";

/// Audible band searched for the reported dominant frequency.
const AUDIBLE_BAND_HZ: (f64, f64) = (20.0, 5000.0);

/// Why a clip could not be produced.
#[derive(Debug, Error)]
pub enum ClipError {
    /// The request failed validation.
    #[error("request is invalid ({} error(s))", .0.len())]
    Invalid(Vec<ValidationError>),

    /// The backend rejected or abandoned the request.
    #[error("{0}")]
    Generation(#[from] GenerationError),

    /// The clip could not be written.
    #[error("failed to write {path}: {message}")]
    Write {
        /// File being written
        path: String,
        /// Underlying failure
        message: String,
    },
}

impl ClipError {
    /// Process exit status for this failure.
    pub fn exit_status(&self) -> u8 {
        match self {
            ClipError::Invalid(_) => EXIT_REQUEST_ERROR,
            ClipError::Generation(_) | ClipError::Write { .. } => EXIT_GENERATION_ERROR,
        }
    }

    /// Structured errors for JSON output.
    pub fn to_json_errors(&self) -> Vec<JsonError> {
        match self {
            ClipError::Invalid(errors) => errors.iter().map(JsonError::from).collect(),
            ClipError::Generation(err) => vec![JsonError::new(err.code, err.message.clone())],
            ClipError::Write { .. } => {
                vec![JsonError::new(error_codes::OUTPUT_WRITE, self.to_string())]
            }
        }
    }
}

/// A clip written to disk.
#[derive(Debug)]
pub struct Clip {
    /// Synthesis result
    pub output: GenerationOutput,
    /// Files and fingerprints
    pub record: ClipRecord,
    /// Validation warnings for the request
    pub warnings: Vec<ValidationWarning>,
}

/// File stem for a clip generated at `at`.
pub fn timestamp_stem(at: DateTime<Local>) -> String {
    format!("{}_{}", FILE_PREFIX, at.format("%Y%m%d_%H%M%S"))
}

/// Validates, synthesizes, and writes one clip as `<out_dir>/<stem>.wav`.
pub fn produce_clip(
    request: &SynthesisRequest,
    config: &SynthesisConfig,
    out_dir: &Path,
    stem: &str,
    cancel: &CancelToken,
) -> Result<Clip, ClipError> {
    let start = Instant::now();

    let validation = validate_request(request, config);
    let warnings = match validation.into_result() {
        Ok(warnings) => warnings,
        Err(errors) => return Err(ClipError::Invalid(errors)),
    };

    let output =
        synthesize_with_cancel(request, config, cancel).map_err(GenerationError::from_backend)?;
    let wav = output.to_wav();

    fs::create_dir_all(out_dir).map_err(|e| write_error(out_dir, e))?;
    let wav_path = out_dir.join(format!("{}.wav", stem));
    wav.write_to_file(&wav_path)
        .map_err(|e| write_error(&wav_path, e))?;

    let metadata_path = out_dir.join(GenerationMetadata::filename(stem));
    let metadata_json = output
        .metadata
        .to_json_pretty()
        .map_err(|e| write_error(&metadata_path, e))?;
    fs::write(&metadata_path, metadata_json).map_err(|e| write_error(&metadata_path, e))?;

    let (lo, hi) = AUDIBLE_BAND_HZ;
    let record = ClipRecord {
        model_used: output.model_used.clone(),
        wav_path: wav_path.display().to_string(),
        metadata_path: metadata_path.display().to_string(),
        pcm_hash: wav.pcm_hash.clone(),
        seed: output.seed,
        dominant_frequency_hz: dominant_frequency(output.samples(), wav.sample_rate, lo, hi),
        duration_ms: start.elapsed().as_millis() as u64,
    };

    tracing::debug!(path = %record.wav_path, pcm_hash = %record.pcm_hash, "clip written");

    Ok(Clip {
        output,
        record,
        warnings,
    })
}

fn write_error(path: &Path, err: impl std::fmt::Display) -> ClipError {
    ClipError::Write {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}

/// Run the generate command
///
/// # Arguments
/// * `request_path` - Path to the request JSON
/// * `out_root` - Output directory (default: current directory)
/// * `config_path` - Optional synthesis config JSON
/// * `seed` - Seed override for both request and config
/// * `json_output` - Whether to print a JSON envelope
///
/// # Returns
/// Exit code: 0 on success, 1 for an invalid request, 2 if synthesis failed
pub fn run(
    request_path: &str,
    out_root: Option<&str>,
    config_path: Option<&str>,
    seed: Option<u32>,
    json_output: bool,
) -> Result<ExitCode> {
    let out_dir = PathBuf::from(out_root.unwrap_or("."));

    let request = match load_request(Path::new(request_path)) {
        Ok(request) => apply_seed(request, seed),
        Err(e) => return load_failure(request_path, error_codes::REQUEST_LOAD, e, json_output),
    };
    let config = match load_config(config_path, seed) {
        Ok(config) => config,
        Err(e) => return load_failure(request_path, error_codes::CONFIG_LOAD, e, json_output),
    };

    let stem = timestamp_stem(Local::now());
    let result = produce_clip(&request, &config, &out_dir, &stem, &CancelToken::new());

    if json_output {
        print_json(request_path, result)
    } else {
        print_human(request_path, &request, result)
    }
}

/// Reports a request or config that could not be loaded.
///
/// In JSON mode the failure becomes an envelope with exit status 1; otherwise
/// it propagates to `main`, which also exits with 1.
fn load_failure(
    request_path: &str,
    code: &str,
    err: anyhow::Error,
    json_output: bool,
) -> Result<ExitCode> {
    if !json_output {
        return Err(err);
    }
    let output = failure_output(request_path, vec![JsonError::new(code, format!("{:#}", err))]);
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(ExitCode::from(EXIT_REQUEST_ERROR))
}

fn failure_output(request_path: &str, errors: Vec<JsonError>) -> GenerateOutput {
    GenerateOutput {
        success: false,
        request: request_path.to_string(),
        generated_at: Local::now().to_rfc3339(),
        clip: None,
        metadata: None,
        errors,
        warnings: Vec::new(),
    }
}

fn print_json(request_path: &str, result: Result<Clip, ClipError>) -> Result<ExitCode> {
    let (output, status) = match result {
        Ok(clip) => (
            GenerateOutput {
                success: true,
                request: request_path.to_string(),
                generated_at: Local::now().to_rfc3339(),
                metadata: Some(clip.output.metadata),
                clip: Some(clip.record),
                errors: Vec::new(),
                warnings: clip.warnings.iter().map(JsonWarning::from).collect(),
            },
            EXIT_OK,
        ),
        Err(err) => (
            failure_output(request_path, err.to_json_errors()),
            err.exit_status(),
        ),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(ExitCode::from(status))
}

fn print_human(
    request_path: &str,
    request: &SynthesisRequest,
    result: Result<Clip, ClipError>,
) -> Result<ExitCode> {
    println!("{} {}", "Generating:".cyan().bold(), request_path);
    println!(
        "{} {} ({}s, {})",
        "Mood:".dimmed(),
        request.mood,
        request.duration_seconds,
        if request.instruments.is_empty() {
            "no instruments".to_string()
        } else {
            request.instruments.join(", ")
        }
    );

    match result {
        Ok(clip) => {
            print_warnings(&clip.warnings);
            let elements = &clip.output.metadata.therapeutic_elements;
            println!("{} {}", "Model:".dimmed(), clip.record.model_used);
            println!(
                "{} binaural={} stress_reduction={} anxiety_relief={} mood_effect={}",
                "Therapy:".dimmed(),
                elements.binaural_beats,
                elements.stress_reduction,
                elements.anxiety_relief,
                elements.mood_effect.as_deref().unwrap_or("none")
            );
            println!("{} {}", "PCM hash:".dimmed(), &clip.record.pcm_hash[..16]);
            println!(
                "\n{} {} ({}ms)",
                "SUCCESS".green().bold(),
                clip.record.wav_path,
                clip.record.duration_ms
            );
            Ok(ExitCode::from(EXIT_OK))
        }
        Err(err) => {
            print_clip_error(&err);
            Ok(ExitCode::from(err.exit_status()))
        }
    }
}

pub(crate) fn print_warnings(warnings: &[ValidationWarning]) {
    for warning in warnings {
        println!("  {} {}", "!".yellow(), warning);
    }
}

pub(crate) fn print_clip_error(err: &ClipError) {
    match err {
        ClipError::Invalid(errors) => {
            for error in errors {
                println!("  {} {}", "x".red(), error);
            }
            println!("\n{} {}", "FAILED".red().bold(), err);
        }
        _ => println!("\n{} {}", "FAILED".red().bold(), err),
    }
}

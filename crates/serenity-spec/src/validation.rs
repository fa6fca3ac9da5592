//! Request validation logic.
//!
//! Structural violations (bad duration, unsupported sample rate, non-finite
//! history levels) are errors and stop synthesis before it starts. Labels
//! the backend will fall back on are only warnings.

use crate::config::{SynthesisConfig, SUPPORTED_SAMPLE_RATES};
use crate::error::{ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode};
use crate::mood::{Instrument, Mood};
use crate::request::SynthesisRequest;

/// Lowest meaningful history level.
const MIN_LEVEL: f64 = 0.0;

/// Highest meaningful history level.
const MAX_LEVEL: f64 = 10.0;

/// Validates a request against a config.
///
/// # Arguments
/// * `request` - The request to validate
/// * `config` - Limits to validate against
///
/// # Returns
/// * `ValidationResult` with `ok=true` if validation passed, with any warnings.
/// * `ValidationResult` with `ok=false` and errors if validation failed.
///
/// # Example
/// ```
/// use serenity_spec::{SynthesisConfig, SynthesisRequest};
/// use serenity_spec::validation::validate_request;
///
/// let request = SynthesisRequest::builder("calm").duration_seconds(2).build();
/// let result = validate_request(&request, &SynthesisConfig::default());
/// assert!(result.is_ok());
/// ```
pub fn validate_request(request: &SynthesisRequest, config: &SynthesisConfig) -> ValidationResult {
    let mut result = ValidationResult::success();

    validate_duration(request, config, &mut result);
    validate_sample_rate(config, &mut result);
    validate_history(request, &mut result);
    check_labels(request, &mut result);

    result
}

fn validate_duration(
    request: &SynthesisRequest,
    config: &SynthesisConfig,
    result: &mut ValidationResult,
) {
    if request.duration_seconds == 0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::NonPositiveDuration,
            "duration must be at least 1 second",
            "duration_seconds",
        ));
    } else if request.duration_seconds > config.max_duration_seconds {
        result.add_error(ValidationError::with_path(
            ErrorCode::DurationTooLong,
            format!(
                "duration {} exceeds the maximum of {} seconds",
                request.duration_seconds, config.max_duration_seconds
            ),
            "duration_seconds",
        ));
    }
}

fn validate_sample_rate(config: &SynthesisConfig, result: &mut ValidationResult) {
    if !config.has_supported_sample_rate() {
        result.add_error(ValidationError::new(
            ErrorCode::UnsupportedSampleRate,
            format!(
                "sample rate {} is not one of {:?}",
                config.sample_rate, SUPPORTED_SAMPLE_RATES
            ),
        ));
    }
}

fn validate_history(request: &SynthesisRequest, result: &mut ValidationResult) {
    for (i, entry) in request.mood_history.iter().enumerate() {
        for (field, value) in [
            ("stress_level", entry.stress_level),
            ("anxiety_level", entry.anxiety_level),
        ] {
            let path = format!("mood_history[{}].{}", i, field);
            if !value.is_finite() {
                result.add_error(ValidationError::with_path(
                    ErrorCode::NonFiniteHistoryLevel,
                    format!("{} must be finite, got {}", field, value),
                    path,
                ));
            } else if !(MIN_LEVEL..=MAX_LEVEL).contains(&value) {
                result.add_warning(ValidationWarning::with_path(
                    WarningCode::HistoryLevelOutOfRange,
                    format!("{} {} is outside the 0-10 scale", field, value),
                    path,
                ));
            }
        }
    }
}

fn check_labels(request: &SynthesisRequest, result: &mut ValidationResult) {
    if Mood::parse(&request.mood).is_none() {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::UnknownMood,
            format!("unknown mood '{}', calm will be used", request.mood),
            "mood",
        ));
    }

    for (i, label) in request.instruments.iter().enumerate() {
        let path = format!("instruments[{}]", i);
        if label.is_empty() {
            result.add_warning(ValidationWarning::with_path(
                WarningCode::EmptyInstrument,
                "empty instrument label is ignored",
                path,
            ));
        } else if Instrument::parse(label).is_none() {
            result.add_warning(ValidationWarning::with_path(
                WarningCode::UnknownInstrument,
                format!("unknown instrument '{}' is ignored", label),
                path,
            ));
        }
    }
}

//! Validate command implementation
//!
//! Checks a request against the synthesis limits without generating audio.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use serenity_spec::validate_request;

use super::json_output::{JsonError, JsonWarning, ValidateOutput};
use super::{EXIT_OK, EXIT_REQUEST_ERROR};
use crate::input::{load_config, load_request};

/// Run the validate command
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(request_path: &str, config_path: Option<&str>, json_output: bool) -> Result<ExitCode> {
    let request = load_request(Path::new(request_path))?;
    let config = load_config(config_path, None)?;
    let result = validate_request(&request, &config);
    let status = if result.is_ok() {
        EXIT_OK
    } else {
        EXIT_REQUEST_ERROR
    };

    if json_output {
        let output = ValidateOutput {
            success: result.is_ok(),
            request: request_path.to_string(),
            errors: result.errors.iter().map(JsonError::from).collect(),
            warnings: result.warnings.iter().map(JsonWarning::from).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(ExitCode::from(status));
    }

    println!("{} {}", "Validating:".cyan().bold(), request_path);
    for error in &result.errors {
        println!("  {} {}", "x".red(), error);
    }
    for warning in &result.warnings {
        println!("  {} {}", "!".yellow(), warning);
    }

    if result.is_ok() {
        println!(
            "\n{} Request is valid (mood resolves to {})",
            "SUCCESS".green().bold(),
            request.resolved_mood()
        );
    } else {
        println!(
            "\n{} {} error(s)",
            "FAILED".red().bold(),
            result.errors.len()
        );
    }

    Ok(ExitCode::from(status))
}

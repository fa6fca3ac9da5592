//! Profiles command implementation
//!
//! Prints the mood profile table with the tempo, key, and beat frequency
//! each mood maps to.

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use serenity_backend_audio::{binaural, profile, therapy::MoodEffect};
use serenity_spec::Mood;

/// One row of the profile table.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileRow {
    /// Mood label
    pub mood: &'static str,
    /// Fundamental in Hz
    pub base_frequency: f64,
    /// Partial ratios
    pub harmonic_ratios: Vec<f64>,
    /// Partial amplitudes
    pub harmonic_amplitudes: Vec<f64>,
    /// Envelope shape name
    pub envelope: &'static str,
    /// Suggested tempo
    pub bpm: u32,
    /// Suggested key
    pub key: &'static str,
    /// Beat frequency, for moods that receive the overlay
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binaural_hz: Option<f64>,
    /// Mood-specific stage, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood_effect: Option<&'static str>,
}

/// Builds one row per mood, in table order.
pub fn rows() -> Vec<ProfileRow> {
    Mood::ALL
        .iter()
        .map(|&mood| {
            let profile = profile::lookup(mood);
            ProfileRow {
                mood: mood.as_str(),
                base_frequency: profile.base_frequency(),
                harmonic_ratios: profile.harmonic_ratios().to_vec(),
                harmonic_amplitudes: profile.harmonic_amplitudes().to_vec(),
                envelope: profile.envelope_shape().as_str(),
                bpm: mood.bpm(),
                key: mood.key(),
                binaural_hz: binaural::beat_frequency(mood),
                mood_effect: MoodEffect::for_mood(mood).map(|effect| effect.as_str()),
            }
        })
        .collect()
}

/// Run the profiles command
pub fn run(json_output: bool) -> Result<ExitCode> {
    let rows = rows();

    if json_output {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "Mood profiles".cyan().bold());
    for row in &rows {
        println!(
            "\n  {} {} Hz, {} partials, {} envelope",
            row.mood.bold(),
            row.base_frequency,
            row.harmonic_ratios.len(),
            row.envelope
        );
        println!(
            "    {} {} bpm, {}",
            "tempo:".dimmed(),
            row.bpm,
            row.key
        );
        if let Some(hz) = row.binaural_hz {
            println!("    {} {} Hz", "binaural:".dimmed(), hz);
        }
        if let Some(effect) = row.mood_effect {
            println!("    {} {}", "effect:".dimmed(), effect);
        }
    }

    Ok(ExitCode::SUCCESS)
}

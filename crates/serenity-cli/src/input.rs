//! Request and config loading.

use std::path::Path;

use anyhow::{Context, Result};
use serenity_spec::{SynthesisConfig, SynthesisRequest};

/// Loads a request from a JSON file.
pub fn load_request(path: &Path) -> Result<SynthesisRequest> {
    SynthesisRequest::from_json_file(path)
        .with_context(|| format!("Failed to load request file: {}", path.display()))
}

/// Loads the synthesis config, applying a seed override if given.
///
/// Without a config path the built-in defaults are used.
pub fn load_config(path: Option<&str>, seed: Option<u32>) -> Result<SynthesisConfig> {
    let config = match path {
        Some(path) => SynthesisConfig::from_json_file(Path::new(path))
            .with_context(|| format!("Failed to load config file: {}", path))?,
        None => SynthesisConfig::default(),
    };
    Ok(match seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    })
}

/// Applies a command-line seed to a request, overriding its own.
pub fn apply_seed(request: SynthesisRequest, seed: Option<u32>) -> SynthesisRequest {
    match seed {
        Some(seed) => SynthesisRequest {
            seed: Some(seed),
            ..request
        },
        None => request,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_request() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("req.json");
        fs::write(&path, r#"{"mood": "happy", "duration": 3}"#).unwrap();

        let request = load_request(&path).unwrap();
        assert_eq!(request.mood, "happy");
        assert_eq!(request.duration_seconds, 3);
    }

    #[test]
    fn test_load_request_missing_file() {
        let err = load_request(Path::new("/nonexistent/req.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to load request file"));
    }

    #[test]
    fn test_load_config_defaults_and_seed() {
        let config = load_config(None, Some(9)).unwrap();
        assert_eq!(config.sample_rate, 22050);
        assert_eq!(config.default_seed, 9);
    }

    #[test]
    fn test_load_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"sample_rate": 44100}"#).unwrap();

        let config = load_config(path.to_str(), None).unwrap();
        assert_eq!(config.sample_rate, 44100);
        assert_eq!(config.max_duration_seconds, 600);
    }

    #[test]
    fn test_apply_seed() {
        let request = SynthesisRequest::builder("calm").seed(1).build();
        assert_eq!(apply_seed(request.clone(), None).seed, Some(1));
        assert_eq!(apply_seed(request, Some(5)).seed, Some(5));
    }
}

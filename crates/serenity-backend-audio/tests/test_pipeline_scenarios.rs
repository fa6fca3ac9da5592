//! End-to-end synthesis scenarios.

use serenity_backend_audio::rng::{create_component_rng, HARMONICS_STREAM, INSTRUMENTS_STREAM};
use serenity_backend_audio::synthesis::harmonics;
use serenity_backend_audio::wav::compute_pcm_hash;
use serenity_backend_audio::{instrument, profile, synthesize, MoodEffect};
use serenity_spec::{Mood, SynthesisConfig, SynthesisRequest};

#[test]
fn test_calm_two_seconds() {
    let request = SynthesisRequest::builder("calm")
        .duration_seconds(2)
        .seed(42)
        .build();
    let config = SynthesisConfig::default();

    let output = synthesize(&request, &config).unwrap();
    assert_eq!(output.samples().len(), 2 * 22050);
    assert!((output.waveform.peak() - 1.0).abs() < 1e-12);

    let elements = &output.metadata.therapeutic_elements;
    assert!(!elements.binaural_beats);
    assert!(!elements.stress_reduction);
    assert!(!elements.anxiety_relief);
    assert!(!elements.mood_specific_effect);
    assert!(elements.healing_frequencies);
    assert_eq!(output.metadata.bpm, 60);
    assert_eq!(output.metadata.key, "C major");

    let again = synthesize(&request, &config).unwrap();
    assert_eq!(output.samples(), again.samples());
}

#[test]
fn test_anxious_with_high_history() {
    let request = SynthesisRequest::builder("anxious")
        .duration_seconds(1)
        .history(9.0, 9.0)
        .seed(1)
        .build();

    let output = synthesize(&request, &SynthesisConfig::default()).unwrap();
    assert!(output.decision.apply_stress_reduction);
    assert!(output.decision.apply_anxiety_relief);
    assert_eq!(output.decision.mood_specific_effect, Some(MoodEffect::Calming));
    assert!(output.decision.add_binaural);

    let elements = &output.metadata.therapeutic_elements;
    assert!(elements.binaural_beats);
    assert_eq!(elements.binaural_frequency_hz, Some(8.0));
    assert!(elements.stress_reduction);
    assert!(elements.anxiety_relief);
    assert!(elements.mood_specific_effect);
    assert!(elements.healing_frequencies);
}

#[test]
fn test_stressed_uses_calm_profile_with_theta_beat() {
    let output = synthesize(
        &SynthesisRequest::builder("stressed")
            .duration_seconds(1)
            .seed(3)
            .build(),
        &SynthesisConfig::default(),
    )
    .unwrap();

    let elements = &output.metadata.therapeutic_elements;
    assert!(elements.binaural_beats);
    assert_eq!(elements.binaural_frequency_hz, Some(6.0));
    assert!(!elements.mood_specific_effect);
}

#[test]
fn test_pcm_hash_is_stable_per_seed() {
    let config = SynthesisConfig::default();
    let build = |seed| {
        SynthesisRequest::builder("energetic")
            .duration_seconds(1)
            .instrument("flute")
            .instrument("piano")
            .seed(seed)
            .build()
    };

    let a = synthesize(&build(10), &config).unwrap().to_wav();
    let b = synthesize(&build(10), &config).unwrap().to_wav();
    let c = synthesize(&build(11), &config).unwrap().to_wav();

    assert_eq!(a.pcm_hash, b.pcm_hash);
    assert_ne!(a.pcm_hash, c.pcm_hash);
    assert_eq!(compute_pcm_hash(&a.wav_data), Some(a.pcm_hash));
}

#[test]
fn test_request_from_json_defaults() {
    let request = SynthesisRequest::from_json(
        r#"{"mood": "sad", "duration": 1, "recentMoodHistory": [{"stress_level": 8}], "seed": 4}"#,
    )
    .unwrap();
    let output = synthesize(&request, &SynthesisConfig::default()).unwrap();

    assert_eq!(output.metadata.genre, "ambient");
    assert_eq!(output.metadata.tempo, "medium");
    assert_eq!(output.metadata.instruments, vec!["piano".to_string()]);
    assert!(output.decision.apply_stress_reduction);
    assert!(!output.decision.apply_anxiety_relief);
    assert_eq!(output.metadata.therapeutic_elements.mood_effect.as_deref(), Some("mood_lifting"));
}

#[test]
fn test_dynamic_range_describes_base_composition() {
    let request = SynthesisRequest::builder("energetic")
        .duration_seconds(1)
        .instrument("piano")
        .history(9.0, 9.0)
        .seed(7)
        .build();
    let output = synthesize(&request, &SynthesisConfig::default()).unwrap();

    let elements = &output.metadata.therapeutic_elements;
    assert!(elements.stress_reduction);
    assert!(elements.anxiety_relief);
    assert!(elements.mood_specific_effect);
    assert!(elements.binaural_beats);

    let base = harmonics::synthesize(
        profile::lookup(Mood::Energetic),
        1,
        22050,
        &mut create_component_rng(7, HARMONICS_STREAM),
    );
    let base = instrument::colorize(
        base,
        &request.instruments,
        &mut create_component_rng(7, INSTRUMENTS_STREAM),
    );

    assert_eq!(
        output.metadata.audio_properties.dynamic_range,
        base.dynamic_range()
    );
}

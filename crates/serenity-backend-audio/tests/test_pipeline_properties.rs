//! Pipeline-wide properties checked across moods and stages.

use serenity_backend_audio::analysis::dominant_frequency;
use serenity_backend_audio::envelope::EnvelopeShape;
use serenity_backend_audio::profile::{self, MoodProfile};
use serenity_backend_audio::rng::create_rng;
use serenity_backend_audio::synthesis::harmonics;
use serenity_backend_audio::therapy::{self, EffectDecision};
use serenity_backend_audio::{binaural, finalize, instrument, synthesize};
use serenity_spec::{Mood, SynthesisConfig, SynthesisRequest};

fn labels(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

// ============================================================================
// Baseline and fallback
// ============================================================================

#[test]
fn test_no_history_keeps_history_stages_off() {
    for mood in Mood::ALL {
        let decision = EffectDecision::compute(mood, &[]);
        assert_eq!(decision.averages.stress, 5.0);
        assert_eq!(decision.averages.anxiety, 5.0);
        assert!(!decision.apply_stress_reduction, "{}", mood);
        assert!(!decision.apply_anxiety_relief, "{}", mood);
    }
}

#[test]
fn test_unknown_mood_matches_calm() {
    let config = SynthesisConfig::default();
    let calm = SynthesisRequest::builder("calm")
        .duration_seconds(1)
        .instrument("piano")
        .seed(99)
        .build();

    for label in ["melancholic", "", "CALM", "zen"] {
        let mut unknown = calm.clone();
        unknown.mood = label.to_string();

        let a = synthesize(&calm, &config).unwrap();
        let b = synthesize(&unknown, &config).unwrap();
        assert_eq!(a.samples(), b.samples(), "label {:?}", label);
        assert_eq!(b.metadata.mood, label);
    }
}

// ============================================================================
// Normalization
// ============================================================================

#[test]
fn test_every_mood_normalizes_to_unit_peak() {
    let config = SynthesisConfig::default();
    for mood in Mood::ALL {
        let request = SynthesisRequest::builder(mood.as_str())
            .duration_seconds(1)
            .instrument("strings")
            .seed(5)
            .build();
        let output = synthesize(&request, &config).unwrap();
        assert!((output.waveform.peak() - 1.0).abs() < 1e-9, "{}", mood);
        assert!(output.samples().iter().all(|s| s.is_finite()));
    }
}

#[test]
fn test_silent_profile_stays_silent() {
    let silent = MoodProfile::new(
        Mood::Calm,
        432.0,
        vec![1.0, 2.0],
        vec![0.0, 0.0],
        EnvelopeShape::SlowRise,
    )
    .unwrap();

    let waveform = harmonics::synthesize(&silent, 1, 22050, &mut create_rng(1));
    let composition_range = waveform.dynamic_range();
    let decision = EffectDecision::compute(Mood::Calm, &[]);
    let waveform = therapy::apply(waveform, &decision);
    let request = SynthesisRequest::builder("calm").duration_seconds(1).build();
    let (out, metadata) =
        finalize::finalize(waveform, &request, Mood::Calm, &decision, composition_range);

    assert_eq!(out.len(), 22050);
    assert!(out.samples().iter().all(|&s| s == 0.0));
    assert_eq!(metadata.audio_properties.dynamic_range, 0.0);
}

// ============================================================================
// Instruments
// ============================================================================

#[test]
fn test_instrument_order_matters() {
    let base = harmonics::synthesize(profile::lookup(Mood::Happy), 1, 22050, &mut create_rng(3));

    let forward = instrument::colorize(
        base.clone(),
        &labels(&["piano", "strings"]),
        &mut create_rng(4),
    );
    let reverse = instrument::colorize(base, &labels(&["strings", "piano"]), &mut create_rng(4));

    assert_ne!(forward.samples(), reverse.samples());
}

#[test]
fn test_flute_order_changes_the_clip() {
    let clip = |instruments: &[&str]| {
        let mut builder = SynthesisRequest::builder("happy").duration_seconds(1).seed(11);
        for name in instruments {
            builder = builder.instrument(*name);
        }
        synthesize(&builder.build(), &SynthesisConfig::default()).unwrap()
    };

    let flute_first = clip(&["flute", "piano"]);
    let piano_first = clip(&["piano", "flute"]);

    // Piano's decay only damps breath noise that was added before it.
    let max_diff = flute_first
        .samples()
        .iter()
        .zip(piano_first.samples())
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max);
    assert!(max_diff > 1e-3, "max difference {}", max_diff);

    let tail = 22050 - 2205..22050;
    let tail_energy = |samples: &[f64]| samples[tail.clone()].iter().map(|s| s * s).sum::<f64>();
    assert!(tail_energy(piano_first.samples()) > tail_energy(flute_first.samples()));
}

#[test]
fn test_unknown_instruments_do_not_change_output() {
    let config = SynthesisConfig::default();
    let plain = SynthesisRequest::builder("peaceful")
        .duration_seconds(1)
        .instrument("piano")
        .seed(12)
        .build();
    let mut noisy = plain.clone();
    noisy.instruments = labels(&["kazoo", "piano", "theremin"]);

    let a = synthesize(&plain, &config).unwrap();
    let b = synthesize(&noisy, &config).unwrap();
    assert_eq!(a.samples(), b.samples());
}

// ============================================================================
// Binaural overlay
// ============================================================================

#[test]
fn test_binaural_admission() {
    assert!(!binaural::should_apply_label("happy"));
    assert!(binaural::should_apply_label("anxious"));
}

#[test]
fn test_anxious_overlay_injects_8hz() {
    let base = harmonics::synthesize(profile::lookup(Mood::Anxious), 2, 22050, &mut create_rng(8));
    let before = therapy::apply(base, &EffectDecision::compute(Mood::Anxious, &[]));
    let after = binaural::apply(before.clone(), Mood::Anxious);

    let added: Vec<f64> = after
        .samples()
        .iter()
        .zip(before.samples())
        .map(|(a, b)| a - b)
        .collect();

    let peak = dominant_frequency(&added, 22050, 1.0, 200.0);
    assert!((peak - 8.0).abs() <= 0.5, "dominant {} Hz", peak);
}

#[test]
fn test_happy_overlay_is_identity() {
    let base = harmonics::synthesize(profile::lookup(Mood::Happy), 1, 22050, &mut create_rng(8));
    assert_eq!(binaural::apply(base.clone(), Mood::Happy), base);
}

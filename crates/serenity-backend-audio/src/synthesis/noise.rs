//! Gaussian noise source.

use rand::Rng;
use rand_distr::Normal;
use rand_pcg::Pcg32;

use super::Synthesizer;

/// Zero-mean white Gaussian noise.
#[derive(Debug, Clone, Copy)]
pub struct NoiseSynth {
    /// Standard deviation of each sample.
    pub std_dev: f64,
}

impl NoiseSynth {
    /// Creates a noise source with the given standard deviation.
    pub fn gaussian(std_dev: f64) -> Self {
        Self { std_dev }
    }
}

impl Synthesizer for NoiseSynth {
    fn synthesize(&self, num_samples: usize, _sample_rate: u32, rng: &mut Pcg32) -> Vec<f64> {
        match Normal::new(0.0, self.std_dev) {
            Ok(normal) => rng.sample_iter(normal).take(num_samples).collect(),
            Err(_) => {
                tracing::warn!(std_dev = self.std_dev, "invalid noise deviation, emitting silence");
                vec![0.0; num_samples]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;

    #[test]
    fn test_length_and_determinism() {
        let noise = NoiseSynth::gaussian(0.01);
        let a = noise.synthesize(1000, 22050, &mut create_rng(42));
        let b = noise.synthesize(1000, 22050, &mut create_rng(42));
        assert_eq!(a.len(), 1000);
        assert_eq!(a, b);
    }

    #[test]
    fn test_statistics() {
        let samples = NoiseSynth::gaussian(0.01).synthesize(50_000, 22050, &mut create_rng(7));
        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let var = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;

        assert!(mean.abs() < 5e-4, "mean {}", mean);
        assert!((var.sqrt() - 0.01).abs() < 5e-4, "std {}", var.sqrt());
    }

    #[test]
    fn test_invalid_deviation_is_silent() {
        let samples = NoiseSynth::gaussian(f64::NAN).synthesize(10, 22050, &mut create_rng(1));
        assert!(samples.iter().all(|&s| s == 0.0));
    }
}

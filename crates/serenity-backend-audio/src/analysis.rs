//! Spectral inspection of generated audio.

use std::f64::consts::TAU;

use rustfft::{num_complex::Complex, FftPlanner};

/// Frequency in Hz of the strongest spectral bin within `[min_hz, max_hz]`.
///
/// The whole buffer is transformed under a Hann window, so resolution is
/// `sample_rate / samples.len()`. Returns 0.0 for buffers too short to
/// analyze or when the band holds no energy.
pub fn dominant_frequency(samples: &[f64], sample_rate: u32, min_hz: f64, max_hz: f64) -> f64 {
    let n = samples.len();
    if n < 64 || sample_rate == 0 {
        return 0.0;
    }

    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(n);

    let mut buffer: Vec<Complex<f64>> = samples
        .iter()
        .enumerate()
        .map(|(i, &s)| {
            let window = 0.5 * (1.0 - (TAU * i as f64 / n as f64).cos());
            Complex::new(s * window, 0.0)
        })
        .collect();

    fft.process(&mut buffer);

    let resolution = sample_rate as f64 / n as f64;
    let nyquist = n / 2;
    let lo = (min_hz / resolution).ceil().max(1.0) as usize;
    let hi = ((max_hz / resolution).floor() as usize).min(nyquist);

    let mut max_magnitude = 0.0;
    let mut max_bin = 0;
    for (i, c) in buffer.iter().enumerate().take(hi + 1).skip(lo) {
        let magnitude = c.norm();
        if magnitude > max_magnitude {
            max_magnitude = magnitude;
            max_bin = i;
        }
    }

    max_bin as f64 * resolution
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tone(freq: f64, seconds: usize, sample_rate: u32) -> Vec<f64> {
        (0..seconds * sample_rate as usize)
            .map(|i| (TAU * freq * i as f64 / sample_rate as f64).sin())
            .collect()
    }

    #[test]
    fn test_finds_pure_tone() {
        let peak = dominant_frequency(&tone(440.0, 1, 22050), 22050, 20.0, 2000.0);
        assert!((peak - 440.0).abs() <= 1.0, "peak {}", peak);
    }

    #[test]
    fn test_band_limits_search() {
        let mixed: Vec<f64> = tone(8.0, 2, 22050)
            .iter()
            .zip(tone(440.0, 2, 22050))
            .map(|(a, b)| 0.1 * a + b)
            .collect();
        let low = dominant_frequency(&mixed, 22050, 1.0, 100.0);
        assert!((low - 8.0).abs() <= 0.5, "peak {}", low);
    }

    #[test]
    fn test_short_or_silent_input() {
        assert_eq!(dominant_frequency(&[0.5; 10], 22050, 1.0, 100.0), 0.0);
        assert_eq!(dominant_frequency(&[0.0; 4096], 22050, 1.0, 100.0), 0.0);
    }
}

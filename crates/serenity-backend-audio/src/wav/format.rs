//! WAV header parameters.

use serenity_spec::metadata::{BIT_DEPTH, CHANNELS};

/// Header parameters for a mono 16-bit PCM stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Channel count; always 1.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample; always 16.
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Mono 16-bit format at the given rate.
    pub fn mono(sample_rate: u32) -> Self {
        Self {
            channels: CHANNELS,
            sample_rate,
            bits_per_sample: BIT_DEPTH,
        }
    }

    pub(crate) fn block_align(&self) -> u16 {
        self.channels * (self.bits_per_sample / 8)
    }

    pub(crate) fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }
}

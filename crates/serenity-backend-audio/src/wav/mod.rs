//! Mono 16-bit PCM WAV encoding.
//!
//! Output carries no timestamps or variable chunks, so identical samples
//! always give identical bytes. The BLAKE3 hash of the PCM payload is the
//! determinism fingerprint for a generated clip.

mod format;
mod pcm;
mod result;
mod writer;

#[cfg(test)]
mod tests;

pub use format::WavFormat;
pub use pcm::{compute_pcm_hash, extract_pcm_data};
pub use result::WavResult;
pub use writer::{samples_to_pcm16, write_wav, write_wav_to_vec};

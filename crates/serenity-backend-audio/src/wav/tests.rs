use super::format::WavFormat;
use super::pcm::{compute_pcm_hash, extract_pcm_data};
use super::result::WavResult;
use super::writer::{samples_to_pcm16, write_wav, write_wav_to_vec, HEADER_LEN};

#[test]
fn test_format_mono() {
    let format = WavFormat::mono(22050);
    assert_eq!(format.channels, 1);
    assert_eq!(format.bits_per_sample, 16);
    assert_eq!(format.block_align(), 2);
    assert_eq!(format.byte_rate(), 44100);
}

#[test]
fn test_pcm16_conversion() {
    let pcm = samples_to_pcm16(&[0.0, 1.0, -1.0, 0.5]);
    let values: Vec<i16> = pcm
        .chunks_exact(2)
        .map(|b| i16::from_le_bytes([b[0], b[1]]))
        .collect();
    assert_eq!(values, vec![0, 32767, -32767, 16384]);
}

#[test]
fn test_pcm16_clips_and_zeroes_non_finite() {
    let pcm = samples_to_pcm16(&[2.0, -3.0, f64::NAN, f64::INFINITY]);
    let values: Vec<i16> = pcm
        .chunks_exact(2)
        .map(|b| i16::from_le_bytes([b[0], b[1]]))
        .collect();
    assert_eq!(values, vec![32767, -32767, 0, 0]);
}

#[test]
fn test_header_layout() {
    let pcm = samples_to_pcm16(&[0.1; 10]);
    let wav = write_wav_to_vec(&WavFormat::mono(22050), &pcm);

    assert_eq!(wav.len(), HEADER_LEN + 20);
    assert_eq!(&wav[0..4], b"RIFF");
    assert_eq!(u32::from_le_bytes([wav[4], wav[5], wav[6], wav[7]]), 36 + 20);
    assert_eq!(&wav[8..16], b"WAVEfmt ");
    assert_eq!(u16::from_le_bytes([wav[22], wav[23]]), 1);
    assert_eq!(u32::from_le_bytes([wav[24], wav[25], wav[26], wav[27]]), 22050);
    assert_eq!(&wav[36..40], b"data");
    assert_eq!(u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]]), 20);
}

#[test]
fn test_streamed_and_in_memory_agree() {
    let format = WavFormat::mono(44100);
    let pcm = samples_to_pcm16(&[0.25, -0.25, 0.75]);

    let mut streamed = Vec::new();
    write_wav(&mut streamed, &format, &pcm).unwrap();
    assert_eq!(streamed, write_wav_to_vec(&format, &pcm));
}

#[test]
fn test_extract_pcm_data() {
    let pcm = samples_to_pcm16(&[0.5, -0.5]);
    let wav = write_wav_to_vec(&WavFormat::mono(22050), &pcm);
    assert_eq!(extract_pcm_data(&wav), Some(pcm.as_slice()));
}

#[test]
fn test_extract_rejects_garbage() {
    assert_eq!(extract_pcm_data(b"RIFF"), None);
    assert_eq!(extract_pcm_data(&[0u8; 64]), None);
}

#[test]
fn test_extract_rejects_truncated_data_chunk() {
    let pcm = samples_to_pcm16(&[0.5; 8]);
    let mut wav = write_wav_to_vec(&WavFormat::mono(22050), &pcm);
    wav.truncate(wav.len() - 4);
    assert_eq!(extract_pcm_data(&wav), None);
}

#[test]
fn test_result_hash_matches_payload() {
    let samples: Vec<f64> = (0..1000).map(|i| (i as f64 * 0.05).sin()).collect();
    let result = WavResult::from_mono(&samples, 22050);

    assert_eq!(result.num_samples, 1000);
    assert_eq!(compute_pcm_hash(&result.wav_data), Some(result.pcm_hash.clone()));
    assert!((result.duration_seconds() - 1000.0 / 22050.0).abs() < 1e-12);
}

#[test]
fn test_result_is_deterministic() {
    let samples = vec![0.3; 500];
    let a = WavResult::from_mono(&samples, 22050);
    let b = WavResult::from_mono(&samples, 22050);
    assert_eq!(a.wav_data, b.wav_data);
    assert_eq!(a.pcm_hash, b.pcm_hash);
}

#[test]
fn test_write_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clip.wav");
    let result = WavResult::from_mono(&[0.0, 0.5, -0.5], 22050);

    result.write_to_file(&path).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), result.wav_data);
}

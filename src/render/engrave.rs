//! Quantization and WAV persistence. The byte stream is completed in
//! memory before anything touches the filesystem, so a failed write can
//! never leave a truncated file behind.

use std::fs;
use std::io::Cursor;

use crate::files;
use crate::synth::{SampleBuffer, BITS_PER_SAMPLE, CHANNELS, QUANT_SCALE, SRu};

fn spec() -> hound::WavSpec {
  hound::WavSpec {
    channels: CHANNELS,
    sample_rate: SRu,
    bits_per_sample: BITS_PER_SAMPLE,
    sample_format: hound::SampleFormat::Int,
  }
}

/// Clamp each sample to [-1, 1] and scale to 16 bit, truncating toward
/// zero. Out-of-range input must clip here; letting it wrap in the cast
/// turns loud peaks into full-scale noise.
pub fn quantize(samples: &SampleBuffer) -> Vec<i16> {
  samples.iter().map(|&s| (s.clamp(-1f32, 1f32) * QUANT_SCALE) as i16).collect()
}

/// Render the complete canonical WAV byte stream for a buffer.
pub fn encode(samples: &SampleBuffer) -> Result<Vec<u8>, String> {
  let mut cursor = Cursor::new(Vec::new());
  let mut writer = hound::WavWriter::new(&mut cursor, spec()).map_err(|e| e.to_string())?;
  for q in quantize(samples) {
    writer.write_sample(q).map_err(|e| e.to_string())?;
  }
  writer.finalize().map_err(|e| e.to_string())?;
  Ok(cursor.into_inner())
}

/// Engrave a buffer at `filename`, creating its directory if needed.
/// Returns the number of bytes written.
pub fn write_wav(filename: &str, samples: &SampleBuffer) -> Result<u64, String> {
  let bytes = encode(samples)?;
  files::with_dir(filename).map_err(|e| format!("{}: {}", filename, e))?;
  fs::write(filename, &bytes).map_err(|e| format!("{}: {}", filename, e))?;
  Ok(bytes.len() as u64)
}

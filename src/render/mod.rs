pub mod engrave;

use crate::synth::{SampleBuffer, SRf};

/// Number of frames needed for `duration` seconds at the fixed sample rate.
pub fn frames(duration: f32) -> usize {
  (duration * SRf) as usize
}

/// Reject durations the sample loop cannot render. Runs before any
/// synthesis so a bad request never produces a partial buffer.
pub fn validate_duration(duration: f32) -> Result<(), String> {
  if !duration.is_finite() || duration <= 0f32 {
    return Err(format!("duration must be a positive number of seconds, got {}", duration));
  }
  Ok(())
}

/// The sample loop every preset shares: evaluate `f` at each frame time
/// and collect the buffer. Presets keep only their per-sound math.
pub fn render<F: FnMut(f32) -> f32>(duration: f32, mut f: F) -> SampleBuffer {
  let n = frames(duration);
  let mut sig: SampleBuffer = Vec::with_capacity(n);
  for i in 0..n {
    let t = i as f32 / SRf;
    sig.push(f(t));
  }
  sig
}

//! Whole-buffer transforms: each pass reads a complete [SampleBuffer] and
//! returns a new one of equal length. Presets declare their post chain as a
//! [Stage] slice and run it through [chain].

use crate::synth::{pi2, SampleBuffer, SECONDS_PER_SAMPLE, SRf};

/// Single-pole lowpass. Higher cutoff passes more of the signal through.
pub fn lowpass(samples: &SampleBuffer, cutoff_hz: f32) -> SampleBuffer {
  if samples.is_empty() {
    return Vec::new();
  }
  let rc = 1f32 / (cutoff_hz * pi2);
  let dt = SECONDS_PER_SAMPLE;
  let alpha = dt / (rc + dt);

  let mut filtered = Vec::with_capacity(samples.len());
  filtered.push(samples[0]);
  for i in 1..samples.len() {
    let prev = filtered[i - 1];
    filtered.push(prev + alpha * (samples[i] - prev));
  }
  filtered
}

/// Complementary single-pole highpass.
pub fn highpass(samples: &SampleBuffer, cutoff_hz: f32) -> SampleBuffer {
  if samples.is_empty() {
    return Vec::new();
  }
  let rc = 1f32 / (cutoff_hz * pi2);
  let dt = SECONDS_PER_SAMPLE;
  let alpha = rc / (rc + dt);

  let mut filtered = Vec::with_capacity(samples.len());
  filtered.push(0f32);
  for i in 1..samples.len() {
    filtered.push(alpha * (filtered[i - 1] + samples[i] - samples[i - 1]));
  }
  filtered
}

/// Feedback comb reverb: every sample feeds a decayed copy of the wet
/// signal `delay_seconds` later. `decay` must stay below 1 or the
/// feedback loop grows without bound.
pub fn reverb(samples: &SampleBuffer, delay_seconds: f32, decay: f32) -> SampleBuffer {
  if decay >= 1f32 {
    panic!("Comb feedback requires decay < 1, got {}", decay);
  }
  let delay_samples = (delay_seconds * SRf).round() as usize;
  let mut wet = samples.clone();
  if delay_samples == 0 {
    return wet;
  }
  for i in delay_samples..wet.len() {
    wet[i] += wet[i - delay_samples] * decay;
  }
  wet
}

/// Soft clipper normalized so `amount = 1` leaves a full-scale signal at
/// full scale; larger amounts push the curve toward a hard limiter.
pub fn distort(samples: &SampleBuffer, amount: f32) -> SampleBuffer {
  if amount <= 0f32 {
    panic!("Saturation requires amount > 0, got {}", amount);
  }
  let norm = amount.tanh();
  samples.iter().map(|&s| (s * amount).tanh() / norm).collect()
}

/// One declarative post-processing step.
#[derive(Clone, Copy, Debug)]
pub enum Stage {
  Lowpass(f32),
  Highpass(f32),
  Reverb { delay: f32, decay: f32 },
  Distort(f32),
}

/// Apply `stages` in order.
pub fn chain(samples: SampleBuffer, stages: &[Stage]) -> SampleBuffer {
  stages.iter().fold(samples, |sig, stage| match *stage {
    Stage::Lowpass(cutoff) => lowpass(&sig, cutoff),
    Stage::Highpass(cutoff) => highpass(&sig, cutoff),
    Stage::Reverb { delay, decay } => reverb(&sig, delay, decay),
    Stage::Distort(amount) => distort(&sig, amount),
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::synth::SR;
  use crate::analysis::rms;
  use rand::rngs::StdRng;
  use rand::SeedableRng;

  fn sine(freq: f32, n: usize) -> SampleBuffer {
    (0..n).map(|i| (i as f32 / SRf * freq * pi2).sin()).collect()
  }

  #[test]
  fn test_filters_inject_no_signal_into_silence() {
    let silence = vec![0f32; SR];
    assert!(lowpass(&silence, 1000f32).iter().all(|&v| v == 0f32));
    assert!(highpass(&silence, 1000f32).iter().all(|&v| v == 0f32));
  }

  #[test]
  fn test_lowpass_converges_to_dc() {
    let dc = vec![0.5f32; SR];
    let out = lowpass(&dc, 500f32);
    assert_eq!(out[0], 0.5);
    assert!((out[SR - 1] - 0.5).abs() < 1e-3, "Lowpass must settle on a constant input");
  }

  #[test]
  fn test_highpass_rejects_dc() {
    let dc = vec![0.5f32; SR];
    let out = highpass(&dc, 500f32);
    assert_eq!(out[0], 0f32);
    assert!(out[SR - 1].abs() < 1e-3, "Highpass must bleed a constant input to zero");
  }

  #[test]
  fn test_lowpass_attenuates_highs_more() {
    let low = sine(100f32, SR);
    let high = sine(8000f32, SR);
    let cutoff = 1000f32;
    let low_kept = rms(&lowpass(&low, cutoff)) / rms(&low);
    let high_kept = rms(&lowpass(&high, cutoff)) / rms(&high);
    assert!(low_kept > 0.9);
    assert!(high_kept < 0.3);
  }

  #[test]
  fn test_higher_cutoff_smooths_less() {
    let sig = sine(2000f32, SR);
    let wide = rms(&lowpass(&sig, 8000f32));
    let narrow = rms(&lowpass(&sig, 200f32));
    assert!(wide > narrow);
  }

  #[test]
  fn test_reverb_places_echo_at_delay_offset() {
    let mut impulse = vec![0f32; SR];
    impulse[0] = 1f32;
    let out = reverb(&impulse, 0.05, 0.3);
    let d = (0.05 * SRf).round() as usize;
    assert_eq!(out[0], 1f32);
    assert!((out[d] - 0.3).abs() < 1e-6);
    assert!((out[2 * d] - 0.09).abs() < 1e-6);
  }

  #[test]
  fn test_reverb_stays_bounded_under_sustained_input() {
    let ones = vec![1f32; 4 * SR];
    let decay = 0.6;
    let out = reverb(&ones, 0.05, decay);
    let bound = 1f32 / (1f32 - decay) + 1e-3;
    assert!(out.iter().all(|&v| v.abs() <= bound));
  }

  #[test]
  #[should_panic(expected = "decay < 1")]
  fn test_reverb_rejects_unstable_decay() {
    let sig = vec![0f32; 64];
    reverb(&sig, 0.05, 1f32);
  }

  #[test]
  fn test_distort_is_odd() {
    let mut rng = StdRng::seed_from_u64(5);
    let sig: SampleBuffer = (0..1000).map(|_| crate::noise::white(&mut rng) * 2f32).collect();
    let mirrored: SampleBuffer = sig.iter().map(|&v| -v).collect();
    let a = distort(&sig, 1.8);
    let b = distort(&mirrored, 1.8);
    for i in 0..a.len() {
      assert_eq!(a[i], -b[i], "Soft clip must be odd symmetric");
    }
  }

  #[test]
  fn test_distort_preserves_full_scale() {
    let sig = vec![1f32, -1f32];
    let out = distort(&sig, 1f32);
    assert!((out[0] - 1f32).abs() < 1e-6);
    assert!((out[1] + 1f32).abs() < 1e-6);
  }

  #[test]
  #[should_panic(expected = "amount > 0")]
  fn test_distort_rejects_zero_drive() {
    distort(&vec![0.5f32], 0f32);
  }

  #[test]
  fn test_chain_applies_stages_in_order() {
    let sig = sine(5000f32, SR);
    let staged = chain(sig.clone(), &[Stage::Lowpass(500f32), Stage::Distort(2f32)]);
    let manual = distort(&lowpass(&sig, 500f32), 2f32);
    assert_eq!(staged, manual);
  }

  #[test]
  fn test_chain_with_no_stages_is_identity() {
    let sig = sine(440f32, 1024);
    assert_eq!(chain(sig.clone(), &[]), sig);
  }
}

use rand::rngs::StdRng;
use rand::Rng;

use crate::envelope;
use crate::noise;
use crate::render;
use crate::synth::{pi2, SampleBuffer};

// two incommensurate carriers make the mistuning pattern non-repeating
const CARRIER_A: f32 = 60f32;
const CARRIER_B: f32 = 173f32;
const POP_CHANCE: f32 = 0.004;

/// Radio static: white noise whose gain doubles when the product of two
/// detuned carriers crests, with sparse pop impulses and a slow burst
/// gate. Ships as `static.wav`.
pub fn render(duration: f32, rng: &mut StdRng) -> SampleBuffer {
  render::render(duration, |t| {
    let noise = noise::white(rng);

    let mistuning = (t * CARRIER_A * pi2).sin() * (t * CARRIER_B * pi2).sin();
    let modulate = if mistuning > 0.6 { 2f32 } else { 1f32 };

    let pop = if rng.gen::<f32>() < POP_CHANCE {
      rng.gen_range(-2f32..2f32)
    } else {
      0f32
    };

    let burst = if (t * 7f32).sin() > 0.8 { 1.5 } else { 1f32 };

    (noise * modulate + pop) * burst * envelope::fade_sine(t, duration) * 0.35
  })
}

#[cfg(test)]
mod test {
  use super::*;
  use crate::analysis::{peak, rms};
  use rand::SeedableRng;

  #[test]
  fn test_static_fills_the_requested_duration() {
    let mut rng = StdRng::seed_from_u64(81);
    assert_eq!(render(1.5, &mut rng).len(), (1.5 * 44100f32) as usize);
  }

  #[test]
  fn test_static_is_broadband_noise_not_tone() {
    let mut rng = StdRng::seed_from_u64(81);
    let sig = render(1.5, &mut rng);
    // noise has a much higher crest factor than any of the gating tones
    let mid = &sig[22050..44100];
    assert!(peak(mid) > 2f32 * rms(mid));
  }

  #[test]
  fn test_static_pops_poke_above_the_noise_floor() {
    let mut rng = StdRng::seed_from_u64(82);
    let sig = render(1.5, &mut rng);
    // noise alone tops out at 0.35 * 2 * 1.5; pops reach past it
    assert!(peak(&sig) > 0.5);
  }
}

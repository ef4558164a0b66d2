use rand::rngs::StdRng;

use crate::envelope;
use crate::fx::{chain, Stage};
use crate::noise;
use crate::render;
use crate::synth::{pi2, SampleBuffer};

const HARMONICS: usize = 8;
const SATURATION: f32 = 4f32;

const POST: [Stage; 2] = [
  Stage::Lowpass(800f32),
  Stage::Reverb { delay: 0.08, decay: 0.35 },
];

/// Creature growl: a wandering sub-100Hz fundamental under an 8-harmonic
/// stack, saturated hard, with gated guttural noise and a slow rumble.
pub fn render(duration: f32, rng: &mut StdRng) -> SampleBuffer {
  let sig = render::render(duration, |t| {
    // the fundamental itself wanders, modulated by nested sines
    let base_freq = 45f32 + 25f32 * (t * 3f32 + (t * 7f32).sin() * 2f32).sin();

    let mut growl = 0f32;
    for h in 1..=HARMONICS {
      let rolloff = 1f32 / (h as f32).powf(0.8);
      growl += (t * base_freq * h as f32 * pi2).sin() * rolloff;
    }
    let growl = (growl * SATURATION).tanh() * 0.4;

    let texture = noise::pink(rng, 5) * 0.25 * (t * 13f32).sin().abs();

    let rumble = 0.7 + 0.3 * (t * 8f32).sin();
    let env = envelope::fade_sine(t, duration) * (0.8 + 0.2 * (t * 17f32).sin().abs());

    (growl + texture) * rumble * env
  });

  chain(sig, &POST)
}

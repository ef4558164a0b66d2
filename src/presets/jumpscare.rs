use rand::rngs::StdRng;

use crate::envelope;
use crate::fx::{chain, Stage};
use crate::noise;
use crate::render;
use crate::synth::{pi2, SampleBuffer};

const SUB_BASS_HZ: f32 = 35f32;
const DECAY_RATE: f32 = 3f32;

// heavy saturation sells the impact
const POST: [Stage; 1] = [Stage::Distort(1.8)];

/// Impact hit: near-instant attack, sub-bass punch, a descending pitch
/// sweep with distorted harmonics, and a noise burst, soft-clipped hard.
pub fn render(duration: f32, rng: &mut StdRng) -> SampleBuffer {
  let sig = render::render(duration, |t| {
    // 1ms linear attack, then an exponential tail
    let attack = envelope::attack_linear(t, 1000f32);
    let decay = envelope::decay_exp(t, DECAY_RATE);

    let sub_bass = (t * SUB_BASS_HZ * pi2).sin() * decay * 1.5;

    let sweep_freq = 250f32 * (-t * 5f32).exp() + 40f32;
    let sweep = (t * sweep_freq * pi2).sin() * decay;

    let mut harmonics = 0f32;
    for h in 2..=5 {
      harmonics += (t * sweep_freq * h as f32 * pi2).sin() * decay / h as f32;
    }

    let noise_burst = noise::white(rng) * (-t * 25f32).exp() * 0.8;

    (sub_bass + sweep * 0.6 + harmonics * 0.4 + noise_burst) * attack
  });

  chain(sig, &POST)
}

use rand::rngs::StdRng;

use crate::envelope;
use crate::fx::{chain, Stage};
use crate::noise;
use crate::render;
use crate::synth::{pi2, SampleBuffer};

// mid pair detuned by 0.5Hz on purpose: the beating keeps the bed alive
const POST: [Stage; 1] = [Stage::Reverb { delay: 0.15, decay: 0.5 }];

/// Deep atmosphere bed: near-infrasonic bass, detuned mids, slowly
/// phase-wobbling highs, an evolving noise floor, and a long breathing
/// amplitude cycle under a half-second edge fade.
pub fn render(duration: f32, rng: &mut StdRng) -> SampleBuffer {
  let sig = render::render(duration, |t| {
    let bass1 = (t * 28f32 * pi2).sin() * 0.4;
    let bass2 = (t * 35f32 * pi2 + (t * 0.3).sin() * 2f32).sin() * 0.3;

    let mid1 = (t * 70f32 * pi2).sin() * 0.2;
    let mid2 = (t * 70.5 * pi2 + (t * 0.7).sin() * 1.5).sin() * 0.18;

    let high1 = (t * 140f32 * pi2 + (t * 0.2).sin() * 3f32).sin() * 0.12;
    let high2 = (t * 210f32 * pi2 + (t * 0.5).sin() * 2f32).sin() * 0.08;

    let noise = noise::white(rng) * 0.08 * (0.5 + 0.5 * (t * 0.1).sin());

    let amp_mod = 0.7 + 0.3 * (t * 0.15 * pi2).sin();
    let env = envelope::fade_edges(t, duration, 2f32);

    (bass1 + bass2 + mid1 + mid2 + high1 + high2 + noise) * amp_mod * env
  });

  chain(sig, &POST)
}

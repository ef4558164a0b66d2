use rand::rngs::StdRng;

use crate::envelope;
use crate::fx::{chain, Stage};
use crate::noise;
use crate::render;
use crate::synth::{pi2, SampleBuffer};

/// G3 fundamental.
const FUNDAMENTAL: f32 = 196f32;

/// Struck-bell partials: (ratio to fundamental, decay rate, level).
/// The ratios are inharmonic; higher partials die faster.
const PARTIALS: [(f32, f32, f32); 5] = [
  (1f32, 1.2, 0.5),
  (2.41, 2f32, 0.35),
  (3.89, 2f32, 0.25),
  (5.98, 3.5, 0.15),
  (8.72, 5f32, 0.1),
];

const STRIKE_LEN: f32 = 0.01;
const STRIKE_DECAY: f32 = 200f32;

// cathedral tail
const POST: [Stage; 1] = [Stage::Reverb { delay: 0.25, decay: 0.6 }];

/// Distant church bell: five inharmonic partials with independent decay,
/// a 10ms hammer transient, and a slow swing wobble.
pub fn render(duration: f32, rng: &mut StdRng) -> SampleBuffer {
  let sig = render::render(duration, |t| {
    let mut sample = 0f32;
    for &(ratio, rate, level) in PARTIALS.iter() {
      sample += (t * FUNDAMENTAL * ratio * pi2).sin() * envelope::decay_exp(t, rate) * level;
    }

    if t < STRIKE_LEN {
      sample += noise::white(rng) * envelope::decay_exp(t, STRIKE_DECAY) * 0.4;
    }

    let wobble = 1f32 + 0.03 * (t * 1.5).sin();
    sample * wobble * 0.7
  });

  chain(sig, &POST)
}

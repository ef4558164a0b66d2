use rand::rngs::StdRng;

use crate::envelope;
use crate::noise;
use crate::render;
use crate::synth::{pi2, SampleBuffer};

/// Impact partials: (Hz, level), gone within a few tens of milliseconds.
const IMPACT: [(f32, f32); 3] = [(900f32, 0.6), (1400f32, 0.4), (2200f32, 0.3)];
/// Glass-like ring partials that outlive the impact.
const RING: [(f32, f32); 2] = [(3500f32, 0.25), (5000f32, 0.15)];

const IMPACT_DECAY: f32 = 40f32;
const RING_DECAY: f32 = 15f32;

/// Sharp crack: a fast-decaying sine cluster with a slower glass ring and
/// a broadband crunch transient. No post chain; the raw transient is the
/// whole point.
pub fn render(duration: f32, rng: &mut StdRng) -> SampleBuffer {
  render::render(duration, |t| {
    let attack = envelope::decay_exp(t, IMPACT_DECAY);
    let ring = envelope::decay_exp(t, RING_DECAY);

    let mut sample = 0f32;
    for &(freq, level) in IMPACT.iter() {
      sample += (t * freq * pi2).sin() * attack * level;
    }
    for &(freq, level) in RING.iter() {
      sample += (t * freq * pi2).sin() * ring * level;
    }
    sample += noise::white(rng) * attack * 0.5;

    sample * 0.8
  })
}

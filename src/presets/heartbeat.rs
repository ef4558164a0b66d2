use rand::rngs::StdRng;

use crate::envelope;
use crate::fx::{chain, Stage};
use crate::noise;
use crate::render;
use crate::synth::{pi, pi2, SampleBuffer};

const BPM: f32 = 65f32;

// lub occupies the first 12% of the beat cycle, dub runs from 18% to 28%
const LUB_END: f32 = 0.12;
const DUB_START: f32 = 0.18;
const DUB_END: f32 = 0.28;

// slight chest-cavity resonance
const POST: [Stage; 1] = [Stage::Reverb { delay: 0.03, decay: 0.2 }];

/// Slow double-thump heartbeat over sub-bass partials. The first thump is
/// darker and stronger and carries a short noise transient; the second
/// sits a fifth of a cycle later, higher and softer.
pub fn render(duration: f32, rng: &mut StdRng) -> SampleBuffer {
  let beat_interval = 60f32 / BPM;

  let sig = render::render(duration, |t| {
    let beat_phase = (t % beat_interval) / beat_interval;
    let mut sample = 0f32;

    if beat_phase < LUB_END {
      let lub_phase = beat_phase / LUB_END;
      let lub_env = (lub_phase * pi).sin();
      sample += (40f32 * pi2 * t).sin() * lub_env * 1.2;
      sample += (80f32 * pi2 * t).sin() * lub_env * 0.5;
      sample += (120f32 * pi2 * t).sin() * lub_env * 0.2;
      if beat_phase < 0.02 {
        sample += noise::white(rng) * 0.4 * (-lub_phase * 100f32).exp();
      }
    } else if beat_phase > DUB_START && beat_phase < DUB_END {
      let dub_phase = (beat_phase - DUB_START) / (DUB_END - DUB_START);
      let dub_env = (dub_phase * pi).sin();
      sample += (50f32 * pi2 * t).sin() * dub_env * 0.8;
      sample += (100f32 * pi2 * t).sin() * dub_env * 0.3;
    }

    sample * envelope::fade_sine(t, duration) * 0.7
  });

  chain(sig, &POST)
}

use rand::rngs::StdRng;
use rand::Rng;

use crate::envelope;
use crate::fx::{chain, Stage};
use crate::noise;
use crate::render;
use crate::synth::{pi2, SampleBuffer};

const BREATH_CYCLE: f32 = 2.5;
const AIRFLOW_OCTAVES: usize = 6;

const POST: [Stage; 3] = [
  Stage::Lowpass(2500f32),
  Stage::Highpass(120f32),
  Stage::Reverb { delay: 0.04, decay: 0.15 },
];

/// Heavy breathing: turbulent airflow noise gated by the respiratory
/// envelope, colored by throat and nasal resonances and a faint wet
/// texture riding the breath.
pub fn render(duration: f32, rng: &mut StdRng) -> SampleBuffer {
  let sig = render::render(duration, |t| {
    let breath_phase = (t % BREATH_CYCLE) / BREATH_CYCLE;
    let breath_env = envelope::breath(breath_phase);

    let airflow = noise::turbulence(rng, AIRFLOW_OCTAVES);

    let throat = (t * 180f32 * pi2 + (t * 5f32).sin() * 0.5).sin() * 0.15;
    let nasal = (t * 250f32 * pi2).sin() * 0.08;
    let wet = (t * 3000f32 * pi2).sin() * (rng.gen::<f32>() * 0.1) * breath_env;

    let fade = envelope::fade_sine(t, duration);

    (airflow * 0.3 + throat + nasal + wet) * breath_env * fade * 0.5
  });

  chain(sig, &POST)
}

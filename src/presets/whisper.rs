use rand::rngs::StdRng;

use crate::envelope;
use crate::fx::{chain, Stage};
use crate::noise;
use crate::render;
use crate::synth::{pi2, SampleBuffer};

/// Voice formant partials that make the noise read as a voice: (Hz, level).
const FORMANTS: [(f32, f32); 3] = [(800f32, 0.15), (1200f32, 0.1), (2400f32, 0.05)];
const NOISE_OCTAVES: usize = 8;
const NOISE_LEVEL: f32 = 0.15;

const POST: [Stage; 3] = [
  Stage::Highpass(600f32),
  Stage::Lowpass(3000f32),
  Stage::Reverb { delay: 0.08, decay: 0.4 },
];

/// Ghostly whisper: octave-stacked noise under three formant tones,
/// swelling on a 2Hz breathing cycle, band-limited to the voice range.
pub fn render(duration: f32, rng: &mut StdRng) -> SampleBuffer {
  let sig = render::render(duration, |t| {
    let noise = noise::pink(rng, NOISE_OCTAVES) * NOISE_LEVEL;

    let formant1 = (t * FORMANTS[0].0 * pi2).sin() * FORMANTS[0].1;
    let formant2 = (t * FORMANTS[1].0 * pi2 + (t * 3f32).sin() * 0.5).sin() * FORMANTS[1].1;
    let formant3 = (t * FORMANTS[2].0 * pi2 + (t * 5f32).sin() * 0.3).sin() * FORMANTS[2].1;

    let breath = 0.6 + 0.4 * (t * pi2 * 2f32).sin();
    // irregular tremolo keeps the fade from sounding mechanical
    let env = envelope::fade_sine(t, duration) * (0.8 + 0.2 * (t * 13f32).sin());

    (noise + formant1 + formant2 + formant3) * breath * env
  });

  chain(sig, &POST)
}

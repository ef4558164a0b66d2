use rand::rngs::StdRng;

use crate::envelope;
use crate::fx::{chain, Stage};
use crate::render;
use crate::synth::{pi2, SampleBuffer};

const BASE_FREQ: f32 = 120f32;
const TREMOLO_HZ: f32 = 60f32;

const POST: [Stage; 1] = [Stage::Lowpass(3000f32)];

/// Denial buzzer: odd harmonics approximate a square wave, gated by a
/// 60Hz square tremolo, with added edge tones and tanh saturation under
/// a fast attack/decay envelope. Fully deterministic; the rng parameter
/// only satisfies the shared synth signature.
pub fn render(duration: f32, _rng: &mut StdRng) -> SampleBuffer {
  let sig = render::render(duration, |t| {
    let mut buzz = 0f32;
    for h in (1..=12).step_by(2) {
      buzz += (t * BASE_FREQ * h as f32 * pi2).sin() / h as f32;
    }

    let tremolo = 0.5 + 0.5 * (t * TREMOLO_HZ * pi2).sin().signum();

    let edge = (t * 800f32 * pi2).sin() * 0.15;
    let edge2 = (t * 1200f32 * pi2).sin() * 0.1;

    let signal = ((buzz * tremolo + edge + edge2) * 0.6 * 3f32).tanh();

    // 20ms attack, release over the final 30%
    let attack = envelope::attack_linear(t, 50f32);
    let decay = (1f32 - (t - duration * 0.7) / (duration * 0.3)).max(0f32);
    let env = attack * if t < duration * 0.7 { 1f32 } else { decay };

    signal * env * 0.7
  });

  chain(sig, &POST)
}

use rand::rngs::StdRng;

use crate::fx::{chain, Stage};
use crate::noise;
use crate::render;
use crate::synth::{pi2, SampleBuffer};

struct StingNote {
  freq: f32,
  delay: f32,
  amp: f32,
}

/// Dissonant cluster, staggered over the first 100ms. Minor seconds and
/// tritones on purpose.
const NOTES: [StingNote; 6] = [
  StingNote { freq: 155.56, delay: 0f32, amp: 1f32 },   // Eb3
  StingNote { freq: 165f32, delay: 0.015, amp: 0.9 },   // E3, a minor 2nd away
  StingNote { freq: 233.08, delay: 0.03, amp: 0.8 },    // Bb3, tritone from E
  StingNote { freq: 277.18, delay: 0.05, amp: 0.7 },    // C#4
  StingNote { freq: 293.66, delay: 0.07, amp: 0.6 },    // D4, another minor 2nd
  StingNote { freq: 369.99, delay: 0.1, amp: 0.5 },     // F#4
];

const NOTE_DECAY: f32 = 1.8;

const POST: [Stage; 3] = [
  Stage::Reverb { delay: 0.15, decay: 0.55 },
  Stage::Highpass(50f32),
  Stage::Lowpass(4000f32),
];

/// Broken-piano sting: six staggered notes, each with deliberately
/// detuned harmonics (2nd sharp, 3rd flat) so the partials beat against
/// each other, a noisy hammer attack, and a long dissonant tail.
pub fn render(duration: f32, rng: &mut StdRng) -> SampleBuffer {
  let sig = render::render(duration, |t| {
    let mut sample = 0f32;

    for note in NOTES.iter() {
      let note_t = t - note.delay;
      if note_t < 0f32 {
        continue;
      }

      // old-piano pitch instability
      let wobble = 1f32 + 0.003 * (note_t * 5f32 + note.freq * 0.01).sin();

      let mut tone = (note_t * note.freq * wobble * pi2).sin();
      tone += (note_t * note.freq * 2.01 * pi2).sin() * 0.6 * (-note_t * 2f32).exp();
      tone += (note_t * note.freq * 2.98 * pi2).sin() * 0.4 * (-note_t * 3f32).exp();
      tone += (note_t * note.freq * 4.03 * pi2).sin() * 0.25 * (-note_t * 4f32).exp();
      tone += (note_t * note.freq * 5.67 * pi2).sin() * 0.15 * (-note_t * 5f32).exp();
      tone += (note_t * note.freq * 7.23 * pi2).sin() * 0.1 * (-note_t * 6f32).exp();

      let attack = (-note_t * 60f32).exp() * 0.4;
      let attack_noise = noise::white(rng) * attack;

      let rattle = (note_t * note.freq * 0.5 * pi2).sin() * 0.05 * (-note_t * 8f32).exp();

      let env = (-note_t * NOTE_DECAY).exp() * note.amp;
      sample += (tone * 0.25 + attack_noise + rattle) * env;
    }

    let room_tone = (t * 55f32 * pi2).sin() * 0.03 * (-t * 0.8).exp();
    let rumble = (t * 30f32 * pi2).sin() * 0.02 * (1f32 - t / duration);

    (sample + room_tone + rumble) * 0.7
  });

  chain(sig, &POST)
}

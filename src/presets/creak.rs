use rand::rngs::StdRng;

use crate::fx::{chain, Stage};
use crate::noise;
use crate::render;
use crate::synth::{pi2, SampleBuffer};

struct CreakEvent {
  start: f32,
  duration: f32,
  freq_base: f32,
  intensity: f32,
}

/// Four time-offset stress events; overlapping starts read as one door.
const EVENTS: [CreakEvent; 4] = [
  CreakEvent { start: 0.0, duration: 0.8, freq_base: 180f32, intensity: 0.7 },
  CreakEvent { start: 0.6, duration: 1.0, freq_base: 220f32, intensity: 1.0 },
  CreakEvent { start: 1.4, duration: 0.9, freq_base: 160f32, intensity: 0.8 },
  CreakEvent { start: 2.0, duration: 0.5, freq_base: 250f32, intensity: 0.5 },
];

/// Wood overtones land on non-integer ratios; integer stacks sound like
/// a string, not a door.
const OVERTONES: [f32; 6] = [1f32, 1.73, 2.41, 3.17, 4.23, 5.89];
const OVERTONE_AMPS: [f32; 6] = [1f32, 0.5, 0.35, 0.25, 0.15, 0.08];

const POST: [Stage; 4] = [
  Stage::Lowpass(3500f32),
  Stage::Highpass(80f32),
  Stage::Distort(1.3),
  Stage::Reverb { delay: 0.08, decay: 0.35 },
];

// stick, slip, release
fn event_envelope(local_phase: f32) -> f32 {
  if local_phase < 0.05 {
    (local_phase / 0.05).powf(0.5)
  } else if local_phase < 0.7 {
    1f32 - 0.2 * (local_phase - 0.05)
  } else {
    0.8 * (1f32 - (local_phase - 0.7) / 0.3).powf(1.5)
  }
}

/// Old door slowly opening: frequency-wavering inharmonic overtone
/// stacks, stick-slip amplitude stutter, grain friction noise, and a low
/// body resonance thump per event.
pub fn render(duration: f32, rng: &mut StdRng) -> SampleBuffer {
  let sig = render::render(duration, |t| {
    let mut sample = 0f32;

    for event in EVENTS.iter() {
      let event_t = t - event.start;
      if event_t < 0f32 || event_t > event.duration {
        continue;
      }
      let local_phase = event_t / event.duration;

      // wavering stress: three stacked wobbles of increasing speed
      let freq_mod = event.freq_base
        * (1f32
          + 0.3 * (event_t * 4.5).sin()
          + 0.15 * (event_t * 13.7).sin()
          + 0.08 * (event_t * 31.2).sin());

      let mut creak = 0f32;
      for (h, (&ratio, &amp)) in OVERTONES.iter().zip(OVERTONE_AMPS.iter()).enumerate() {
        // each overtone drifts independently
        let drift = 1f32 + 0.02 * (event_t * (7 + h * 3) as f32).sin();
        creak += (event_t * freq_mod * ratio * drift * pi2).sin() * amp;
      }

      let stick_slip_freq = 15f32 + 10f32 * (event_t * 2f32).sin();
      let stick_slip = 0.5 + 0.5 * (event_t * stick_slip_freq).sin().abs().powf(0.3);

      let grain = noise::white(rng) * 0.12;
      let grain_filtered = grain * (0.5 + 0.5 * (event_t * freq_mod * 0.5).sin());

      let body_resonance = (event_t * 45f32 * pi2).sin()
        * 0.15
        * (-event_t * 3f32).exp()
        * if local_phase < 0.3 { local_phase / 0.3 } else { 1f32 };

      let tremor = 0.85 + 0.15 * (event_t * 23f32).sin();

      sample += ((creak * 0.7 + grain_filtered) * stick_slip + body_resonance)
        * event_envelope(local_phase)
        * tremor
        * event.intensity;
    }

    sample * 0.45
  });

  chain(sig, &POST)
}

#[cfg(test)]
mod test {
  use super::*;
  use crate::analysis::rms;
  use rand::SeedableRng;

  #[test]
  fn test_creak_fills_the_requested_duration() {
    let mut rng = StdRng::seed_from_u64(61);
    assert_eq!(render(2f32, &mut rng).len(), 2 * 44100);
  }

  #[test]
  fn test_event_envelope_attacks_sustains_and_releases() {
    assert_eq!(event_envelope(0f32), 0f32);
    assert_eq!(event_envelope(0.05), 1f32);
    assert!(event_envelope(0.5) > 0.8);
    assert!(event_envelope(0.99) < 0.1);
  }

  #[test]
  fn test_creak_events_overlap_into_continuous_sound() {
    let mut rng = StdRng::seed_from_u64(61);
    let sig = render(2f32, &mut rng);
    // second event is the loudest; the window around 1.0s covers it
    let during = rms(&sig[(0.9 * 44100f32) as usize..(1.1 * 44100f32) as usize]);
    assert!(during > 0.01);
  }
}

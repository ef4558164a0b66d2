//! The twelve horror presets and the batch soundbook that renders them.

pub mod bell;
pub mod breathing;
pub mod buzz;
pub mod click;
pub mod creak;
pub mod drone;
pub mod growl;
pub mod heartbeat;
pub mod interference;
pub mod jumpscare;
pub mod sting;
pub mod whisper;

use once_cell::sync::Lazy;
use rand::rngs::StdRng;

use crate::render;
use crate::synth::SampleBuffer;

/// Shared synth calling convention: duration in seconds plus a
/// caller-owned rng, producing the full sample buffer.
pub type Synth = fn(f32, &mut StdRng) -> SampleBuffer;

#[derive(Clone, Copy, Debug)]
pub struct SoundSpec {
  pub name: &'static str,
  pub duration: f32,
  pub synth: Synth,
}

/// The shipped batch. Each entry renders to `<out_dir>/<name>.wav`,
/// in this order.
pub static SOUNDBOOK: Lazy<Vec<SoundSpec>> = Lazy::new(|| {
  vec![
    SoundSpec { name: "whisper", duration: 3f32, synth: whisper::render },
    SoundSpec { name: "heartbeat", duration: 4f32, synth: heartbeat::render },
    SoundSpec { name: "click", duration: 0.2, synth: click::render },
    SoundSpec { name: "jumpscare", duration: 1.2, synth: jumpscare::render },
    SoundSpec { name: "ambient-drone", duration: 8f32, synth: drone::render },
    SoundSpec { name: "creak", duration: 2f32, synth: creak::render },
    SoundSpec { name: "breathing", duration: 5f32, synth: breathing::render },
    SoundSpec { name: "static", duration: 1.5, synth: interference::render },
    SoundSpec { name: "bell", duration: 4f32, synth: bell::render },
    SoundSpec { name: "growl", duration: 2f32, synth: growl::render },
    SoundSpec { name: "buzz", duration: 0.4, synth: buzz::render },
    SoundSpec { name: "piano-sting", duration: 1.5, synth: sting::render },
  ]
});

/// Look up a shipped sound by name, e.g. while loading a soundbook file.
pub fn resolve(name: &str) -> Option<&'static SoundSpec> {
  SOUNDBOOK.iter().find(|spec| spec.name == name)
}

/// Validate the request, then synthesize. A bad duration fails here,
/// before any samples exist, so no partial buffer ever reaches the encoder.
pub fn render_spec(spec: &SoundSpec, rng: &mut StdRng) -> Result<SampleBuffer, String> {
  render::validate_duration(spec.duration).map_err(|msg| format!("{}: {}", spec.name, msg))?;
  Ok((spec.synth)(spec.duration, rng))
}

/// Settings for the synthesis engine: one fixed output format
/// (mono 16 bit PCM at 44.1kHz) shared by every generator and the encoder.
///
/// Also offers aliases for standard constants at f32 precision.

pub const pi: f32 = std::f32::consts::PI;
pub const pi2: f32 = pi * 2f32;

pub type SampleBuffer = Vec<f32>;

pub const SR: usize = 44100;
pub const SRf: f32 = SR as f32;
pub const SRu: u32 = SR as u32;

pub const CHANNELS: u16 = 1;
pub const BITS_PER_SAMPLE: u16 = 16;

// Time duration of a single sample
pub const SECONDS_PER_SAMPLE: f32 = 1.0 / SRf;

/// Peak value for 16 bit quantization. Samples scale by this after clamping.
pub const QUANT_SCALE: f32 = 32767f32;

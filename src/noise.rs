//! Per-sample noise sources.
//!
//! Every source draws from a caller-owned rng so a render is reproducible
//! when the caller seeds it, and freshly random when seeded from entropy.

use rand::rngs::StdRng;
use rand::Rng;

#[inline]
pub fn white(rng: &mut StdRng) -> f32 {
    rng.gen_range(-1f32..1f32)
}

/// Octave-stacked pink noise approximation: white noise summed over
/// `octaves` bands with 1/octave weighting. More natural than raw white
/// noise for breathy and vocal textures.
#[inline]
pub fn pink(rng: &mut StdRng, octaves: usize) -> f32 {
    (1..octaves).map(|oct| white(rng) / oct as f32).sum()
}

/// Turbulent airflow: white noise summed with 1/octave² weighting,
/// rolling off much faster than [pink].
#[inline]
pub fn turbulence(rng: &mut StdRng, octaves: usize) -> f32 {
    (1..octaves).map(|oct| white(rng) / (oct * oct) as f32).sum()
}

//! Closed-form amplitude shapes evaluated per-sample by the sound presets.
//!
//! Every shape is a pure function of the current time `t` in seconds; the
//! preset loop applies them as multipliers over oscillator and noise terms.

use crate::synth::pi;

/// Symmetric fade: silent at both ends, full amplitude at the midpoint.
pub fn fade_sine(t: f32, duration: f32) -> f32 {
    (t * pi / duration).sin()
}

/// Exponential decay from 1 at `t = 0`. `rate` is in inverse seconds.
pub fn decay_exp(t: f32, rate: f32) -> f32 {
    (-t * rate).exp()
}

/// Linear ramp from 0 to 1, reaching full amplitude at `1 / rate` seconds.
pub fn attack_linear(t: f32, rate: f32) -> f32 {
    (t * rate).min(1f32)
}

/// Linear fade-in and fade-out at the buffer edges, unity in between.
/// `ramp` is the slope in inverse seconds for both edges.
pub fn fade_edges(t: f32, duration: f32, ramp: f32) -> f32 {
    (t * ramp).min(1f32) * ((duration - t) * ramp).min(1f32)
}

/// One respiratory cycle, `phase` in [0, 1]:
/// sharp inhale to 35%, a short hold, gradual exhale to 85%, then silence.
pub fn breath(phase: f32) -> f32 {
    if phase < 0.35 {
        (phase / 0.35).powf(0.7)
    } else if phase < 0.4 {
        1f32
    } else if phase < 0.85 {
        (1f32 - (phase - 0.4) / 0.45).powf(1.2)
    } else {
        0f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_sine_is_silent_at_edges() {
        assert!(fade_sine(0f32, 3f32).abs() < 1e-6);
        assert!(fade_sine(3f32, 3f32).abs() < 1e-5);
        assert!((fade_sine(1.5, 3f32) - 1f32).abs() < 1e-6);
    }

    #[test]
    fn test_decay_exp_is_monotonically_decreasing() {
        let mut prev = decay_exp(0f32, 3f32);
        assert_eq!(prev, 1f32);
        for i in 1..100 {
            let v = decay_exp(i as f32 * 0.01, 3f32);
            assert!(v < prev, "Decay must fall at every step");
            prev = v;
        }
    }

    #[test]
    fn test_attack_linear_saturates() {
        assert_eq!(attack_linear(0f32, 50f32), 0f32);
        assert!((attack_linear(0.01, 50f32) - 0.5).abs() < 1e-6);
        assert!((attack_linear(0.02, 50f32) - 1f32).abs() < 1e-6);
        assert_eq!(attack_linear(1f32, 50f32), 1f32);
    }

    #[test]
    fn test_fade_edges_is_unity_in_the_middle() {
        let duration = 8f32;
        assert_eq!(fade_edges(0f32, duration, 2f32), 0f32);
        assert_eq!(fade_edges(4f32, duration, 2f32), 1f32);
        assert!(fade_edges(duration, duration, 2f32).abs() < 1e-6);
        // half amplitude a quarter second in
        assert!((fade_edges(0.25, duration, 2f32) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_breath_cycle_is_continuous_at_breakpoints() {
        // inhale peaks into the hold
        assert!((breath(0.35) - 1f32).abs() < 1e-3);
        // hold flows into the exhale
        assert!((breath(0.4) - 1f32).abs() < 1e-3);
        // exhale lands at silence
        assert!(breath(0.85) < 1e-3);
        assert_eq!(breath(0.9), 0f32);
    }

    #[test]
    fn test_breath_inhale_is_faster_than_exhale() {
        // halfway through each segment: the inhale has climbed further
        // than the exhale has fallen
        assert!(breath(0.175) > 1f32 - breath(0.625));
    }
}

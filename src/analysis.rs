use rustfft::{num_complex::Complex, FftPlanner};

/// Identify the RMS value of a signal slice.
/// Intended for short form slices or samples
pub fn rms(signal: &[f32]) -> f32 {
    if signal.is_empty() {
        return 0.0;
    }
    let sum: f32 = signal.iter().map(|&x| x * x).sum();
    (sum / signal.len() as f32).sqrt()
}

/// Largest absolute sample value.
pub fn peak(signal: &[f32]) -> f32 {
    signal.iter().map(|&x| x.abs()).fold(0.0, f32::max)
}

pub fn amp_to_db(amplitude: f32) -> f32 {
    20.0 * amplitude.log10()
}

/// Frequency of the strongest spectral bin below Nyquist, in Hz.
/// Coarse by design: the oracle for "is the fundamental where it should be",
/// not a tuner.
pub fn dominant_frequency(signal: &[f32], sample_rate: usize) -> f32 {
    let n = signal.len();
    if n < 2 {
        return 0.0;
    }

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(n);
    let mut buffer: Vec<Complex<f32>> = signal.iter().map(|&x| Complex::new(x, 0.0)).collect();
    fft.process(&mut buffer);

    // skip bin 0: DC offset is not a pitch
    let mut best_bin = 1;
    let mut best_mag = 0f32;
    for (bin, value) in buffer.iter().enumerate().take(n / 2).skip(1) {
        let mag = value.norm_sqr();
        if mag > best_mag {
            best_mag = mag;
            best_bin = bin;
        }
    }

    best_bin as f32 * sample_rate as f32 / n as f32
}

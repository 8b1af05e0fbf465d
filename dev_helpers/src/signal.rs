//! Deterministic test signals.

use rand::{rngs::StdRng, Rng, SeedableRng};

/// A sine wave starting at phase zero.
pub fn sine(sample_rate: f32, frequency: f32, amplitude: f32, sample_count: usize) -> Vec<f32> {
    sum_of_sines(sample_rate, &[(frequency, amplitude)], sample_count)
}

/// A sum of sine waves given as (frequency, amplitude) pairs, all starting at phase zero.
pub fn sum_of_sines(sample_rate: f32, partials: &[(f32, f32)], sample_count: usize) -> Vec<f32> {
    let mut signal = vec![0.0; sample_count];
    for (i, value) in signal.iter_mut().enumerate() {
        let t = (i as f32) / sample_rate;
        for (frequency, amplitude) in partials {
            *value += amplitude * (2.0 * std::f32::consts::PI * frequency * t).sin();
        }
    }
    signal
}

/// A tone with harmonics at integer multiples of `fundamental`. Harmonic `k`
/// (starting at 1 for the fundamental) has amplitude `amplitudes[k - 1]`.
pub fn harmonic_tone(sample_rate: f32, fundamental: f32, amplitudes: &[f32], sample_count: usize) -> Vec<f32> {
    let partials: Vec<(f32, f32)> = amplitudes
        .iter()
        .enumerate()
        .map(|(index, amplitude)| (fundamental * ((index + 1) as f32), *amplitude))
        .collect();
    sum_of_sines(sample_rate, &partials, sample_count)
}

/// Uniform white noise in `-amplitude..=amplitude`, the same for a given seed.
pub fn white_noise(amplitude: f32, sample_count: usize, seed: u64) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..sample_count)
        .map(|_| amplitude * rng.gen_range(-1.0_f32..=1.0))
        .collect()
}

pub fn silence(sample_count: usize) -> Vec<f32> {
    vec![0.0; sample_count]
}

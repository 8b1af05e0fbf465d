use core::f32::consts::PI;

/// The time constant `RC` of a first order filter with the given cutoff frequency.
fn time_constant(cutoff: f32) -> f32 {
    1.0 / (2.0 * PI * cutoff)
}

/// The smoothing coefficient `RC / (RC + dt)` of a
/// [one-pole high-pass filter](https://en.wikipedia.org/wiki/High-pass_filter#Discrete-time_realization).
pub fn high_pass_coefficient(cutoff: f32, sample_rate: f32) -> f32 {
    let rc = time_constant(cutoff);
    let dt = 1.0 / sample_rate;
    rc / (rc + dt)
}

/// The smoothing coefficient `dt / (RC + dt)` of a
/// [one-pole low-pass filter](https://en.wikipedia.org/wiki/Low-pass_filter#Discrete-time_realization).
pub fn low_pass_coefficient(cutoff: f32, sample_rate: f32) -> f32 {
    let rc = time_constant(cutoff);
    let dt = 1.0 / sample_rate;
    dt / (rc + dt)
}

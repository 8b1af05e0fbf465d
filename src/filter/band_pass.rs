use super::one_pole::{high_pass_coefficient, low_pass_coefficient};
use crate::common::F32ArrayExt;

/// A one-pole high-pass filter followed by a one-pole low-pass filter.
///
/// The filter states carry over between blocks. The previous input sample of
/// the high-pass filter does not: the sample preceding each block is taken to
/// be zero.
#[derive(Debug, Clone)]
pub struct BandpassFilter {
    hp_coefficient: f32,
    lp_coefficient: f32,
    /// The most recent high-pass output.
    hp_state: f32,
    /// The most recent low-pass output.
    lp_state: f32,
}

impl BandpassFilter {
    pub fn new(sample_rate: f32, hp_cutoff: f32, lp_cutoff: f32) -> Self {
        BandpassFilter {
            hp_coefficient: high_pass_coefficient(hp_cutoff, sample_rate),
            lp_coefficient: low_pass_coefficient(lp_cutoff, sample_rate),
            hp_state: 0.0,
            lp_state: 0.0,
        }
    }

    /// Filters `input` into `output` and returns the RMS level of the output.
    /// Panics if the buffers differ in length.
    pub fn process(&mut self, input: &[f32], output: &mut [f32]) -> f32 {
        if input.len() != output.len() {
            panic!("Band pass filter input and output buffers must have the same size");
        }

        let mut previous_input = 0.0;
        for (x, y) in input.iter().zip(output.iter_mut()) {
            self.hp_state = self.hp_coefficient * (self.hp_state + x - previous_input);
            previous_input = *x;
            self.lp_state += self.lp_coefficient * (self.hp_state - self.lp_state);
            *y = self.lp_state;
        }

        if !self.hp_state.is_finite() || !self.lp_state.is_finite() {
            // Garbage in. Start over rather than getting stuck at NaN.
            self.reset();
            for y in output.iter_mut() {
                *y = 0.0;
            }
            return 0.0;
        }

        let energy = output.rms_level();
        if energy.is_finite() {
            energy
        } else {
            0.0
        }
    }

    /// Returns the filter to its initial state.
    pub fn reset(&mut self) {
        self.hp_state = 0.0;
        self.lp_state = 0.0;
    }

    /// The current (high-pass, low-pass) state.
    pub fn state(&self) -> (f32, f32) {
        (self.hp_state, self.lp_state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate_sine(sample_rate: f32, frequency: f32, sample_count: usize) -> Vec<f32> {
        (0..sample_count)
            .map(|i| (2.0 * core::f32::consts::PI * frequency * (i as f32) / sample_rate).sin())
            .collect()
    }

    fn steady_state_energy(frequency: f32) -> f32 {
        let sample_rate = 44100.0;
        let input = generate_sine(sample_rate, frequency, 4096);
        let mut output = vec![0.0; input.len()];
        let mut filter = BandpassFilter::new(sample_rate, 80.0, 1500.0);
        filter.process(&input, &mut output);
        filter.process(&input, &mut output)
    }

    #[test]
    fn test_empty_and_single_sample_blocks() {
        let mut filter = BandpassFilter::new(44100.0, 80.0, 1500.0);
        let mut output: [f32; 0] = [];
        assert_eq!(filter.process(&[], &mut output), 0.0);

        let mut output = [0.0];
        let energy = filter.process(&[1.0], &mut output);
        assert!(energy > 0.0);
        assert!(energy.is_finite());
    }

    #[test]
    fn test_silence_has_zero_energy() {
        let mut filter = BandpassFilter::new(44100.0, 80.0, 1500.0);
        let input = [0.0; 512];
        let mut output = [0.0; 512];
        assert_eq!(filter.process(&input, &mut output), 0.0);
        assert_eq!(filter.state(), (0.0, 0.0));
    }

    #[test]
    fn test_pass_band_and_stop_bands() {
        let in_band = steady_state_energy(400.0);
        let below = steady_state_energy(20.0);
        let above = steady_state_energy(8000.0);
        // A unit sine has an RMS level of 1/sqrt(2).
        assert!(in_band > 0.5 && in_band < 0.75);
        assert!(below < 0.5 * in_band);
        assert!(above < 0.5 * in_band);
    }

    #[test]
    fn test_dc_is_removed() {
        let mut filter = BandpassFilter::new(44100.0, 80.0, 1500.0);
        let input = [1.0; 2048];
        let mut output = [0.0; 2048];
        for _ in 0..10 {
            filter.process(&input, &mut output);
        }
        // Each block restarts from a zero previous sample, so only the tail of each block decays.
        assert!(output[2047].abs() < 0.01);
    }

    #[test]
    fn test_previous_sample_is_not_carried_over() {
        // The block boundary acts like a step from silence to the first sample.
        let mut split = BandpassFilter::new(44100.0, 80.0, 1500.0);
        let mut whole = BandpassFilter::new(44100.0, 80.0, 1500.0);
        let input = [0.5; 8];
        let mut split_output = [0.0; 8];
        let mut whole_output = [0.0; 8];
        split.process(&input[..4], &mut split_output[..4]);
        split.process(&input[4..], &mut split_output[4..]);
        whole.process(&input, &mut whole_output);
        assert_eq!(split_output[..4], whole_output[..4]);
        assert!(split_output[4] > whole_output[4]);
    }

    #[test]
    fn test_state_carries_over() {
        let mut filter = BandpassFilter::new(44100.0, 80.0, 1500.0);
        let mut output = [0.0; 16];
        filter.process(&[0.5; 16], &mut output);
        let (hp, lp) = filter.state();
        assert!(hp != 0.0 && lp != 0.0);
        filter.reset();
        assert_eq!(filter.state(), (0.0, 0.0));
    }

    #[test]
    fn test_non_finite_input_is_recovered_from() {
        let mut filter = BandpassFilter::new(44100.0, 80.0, 1500.0);
        let mut output = [0.0; 4];
        let energy = filter.process(&[0.1, f32::NAN, 0.2, 0.3], &mut output);
        assert_eq!(energy, 0.0);
        assert_eq!(filter.state(), (0.0, 0.0));
    }

    #[test]
    #[should_panic]
    fn test_mismatched_buffers() {
        let mut filter = BandpassFilter::new(44100.0, 80.0, 1500.0);
        let mut output = [0.0; 3];
        filter.process(&[0.0; 4], &mut output);
    }
}

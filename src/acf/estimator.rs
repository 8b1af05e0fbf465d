use alloc::{boxed::Box, vec};

use super::lag_range::LagRange;
use super::peak::{normalize, Peak};
use crate::common::{autocorr_conv_range, F32ArrayExt};

/// Estimates the fundamental frequency of fixed size windows using center
/// clipped autocorrelation.
///
/// Scratch buffers are allocated on creation and reused for every window.
pub struct PitchEstimator {
    /// The audio sample rate in Hz.
    sample_rate: f32,
    /// Samples below this fraction of the window peak level are zeroed by the center clipper.
    clip_fraction: f32,
    /// The normalized autocorrelation value the first peak must reach to be selected.
    peak_threshold: f32,
    /// The lags to search, or `None` if the window is too short for the frequency range.
    lag_range: Option<LagRange>,
    /// The center clipped window.
    clipped: Box<[f32]>,
    /// Autocorrelation of the clipped window, half the window size long. Zero outside the lag range.
    autocorr: Box<[f32]>,
    /// The peak selected for the most recent window, if any.
    peak: Option<Peak>,
}

impl PitchEstimator {
    pub fn new(
        sample_rate: f32,
        window_size: usize,
        min_frequency: f32,
        max_frequency: f32,
        clip_fraction: f32,
        peak_threshold: f32,
    ) -> Self {
        let lag_range = LagRange::new(sample_rate, window_size, min_frequency, max_frequency);
        if lag_range.is_none() {
            tracing::debug!(
                window_size,
                sample_rate,
                min_frequency,
                max_frequency,
                "window too short for frequency range, pitch estimation disabled"
            );
        }

        PitchEstimator {
            sample_rate,
            clip_fraction,
            peak_threshold,
            lag_range,
            clipped: vec![0.0; window_size].into_boxed_slice(),
            autocorr: vec![0.0; window_size / 2].into_boxed_slice(),
            peak: None,
        }
    }

    /// Returns the estimated fundamental frequency of `window` in Hz, or zero
    /// if no pitch could be found. Panics if the window size differs from the
    /// one given on creation.
    pub fn estimate(&mut self, window: &[f32]) -> f32 {
        if window.len() != self.clipped.len() {
            panic!(
                "Got window of length {}, expected {}.",
                window.len(),
                self.clipped.len()
            )
        }

        self.peak = None;
        for value in self.autocorr.iter_mut() {
            *value = 0.0;
        }

        let range = match self.lag_range {
            Some(range) => range,
            None => return 0.0,
        };

        center_clip(window, &mut self.clipped, self.clip_fraction);
        autocorr_conv_range(&self.clipped, &mut self.autocorr, range.min_lag, range.max_lag);

        self.peak = select_peak(&self.autocorr, range, self.peak_threshold);
        match self.peak {
            Some(peak) => self.sample_rate / peak.lag,
            None => 0.0,
        }
    }

    /// The peak selected for the most recent window, if any.
    pub fn peak(&self) -> Option<&Peak> {
        self.peak.as_ref()
    }

    /// The autocorrelation of the most recent clipped window, indexed by lag.
    pub fn autocorr(&self) -> &[f32] {
        &self.autocorr
    }

    /// The most recent center clipped window.
    pub fn clipped_window(&self) -> &[f32] {
        &self.clipped
    }

    pub fn lag_range(&self) -> Option<LagRange> {
        self.lag_range
    }

    pub fn window_size(&self) -> usize {
        self.clipped.len()
    }

    /// Returns the current sample rate in Hz.
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }
}

/// Writes `window` to `result` with every sample moved towards zero by a
/// fraction of the peak level, zeroing samples within that distance.
pub fn center_clip(window: &[f32], result: &mut [f32], clip_fraction: f32) {
    let clip_level = clip_fraction * window.peak_level();
    for (sample, clipped) in window.iter().zip(result.iter_mut()) {
        *clipped = if *sample > clip_level {
            sample - clip_level
        } else if *sample < -clip_level {
            sample + clip_level
        } else {
            0.0
        };
    }
}

fn is_local_max(autocorr: &[f32], lag: usize) -> bool {
    autocorr[lag] > autocorr[lag - 1] && autocorr[lag] > autocorr[lag + 1]
}

/// Picks the pitch period among the local maxima of `autocorr` within `range`.
///
/// The first maximum reaching `threshold` relative to the largest value in
/// the range wins, even if a later one is taller. Harmonics of the
/// fundamental produce later peaks of similar height, so preferring the
/// earliest one avoids octave errors. Without a maximum reaching the
/// threshold, the tallest maximum is used.
pub(crate) fn select_peak(autocorr: &[f32], range: LagRange, threshold: f32) -> Option<Peak> {
    let reference = autocorr[range.min_lag..=range.max_lag]
        .iter()
        .fold(f32::NEG_INFINITY, |max, value| max.max(*value));

    // Both neighbors of a candidate lie within the range.
    let candidates = (range.min_lag + 1)..range.max_lag;

    let mut first_significant = None;
    for lag in candidates.clone() {
        if is_local_max(autocorr, lag) && normalize(autocorr[lag], reference) >= threshold {
            first_significant = Some(lag);
            break;
        }
    }

    let best_lag = match first_significant {
        Some(lag) => Some(lag),
        None => {
            let mut tallest: Option<usize> = None;
            for lag in candidates {
                if !is_local_max(autocorr, lag) {
                    continue;
                }
                match tallest {
                    Some(best) if autocorr[best] >= autocorr[lag] => {}
                    _ => tallest = Some(lag),
                }
            }
            tallest
        }
    };

    best_lag.map(|lag| Peak::new(autocorr, lag, reference, range.min_lag, range.max_lag))
}

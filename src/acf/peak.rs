use micromath::F32Ext;

/// Denominators with a smaller magnitude than this give a zero
/// interpolation offset.
const MIN_CURVATURE: f32 = 1e-9;

/// An autocorrelation maximum selected as the pitch period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak {
    /// The index into the autocorrelation array corresponding to this maximum
    pub lag_index: usize,
    /// The value at `lag_index` relative to the largest value in the lag range,
    /// or zero if that value is not positive.
    pub normalized_value: f32,
    /// The lag, in samples, for this maximum, approximated using parabolic
    /// interpolation and clamped to the lag range.
    pub lag: f32,
}

/// Returns the offset from the middle sample to the vertex of the parabola
/// passing through `(-1, left)`, `(0, center)` and `(1, right)`.
pub fn parabolic_offset(left: f32, center: f32, right: f32) -> f32 {
    let denominator = left - 2.0 * center + right;
    if F32Ext::abs(denominator) > MIN_CURVATURE {
        0.5 * (left - right) / denominator
    } else {
        0.0
    }
}

impl Peak {
    /// Creates a peak at `lag_index`, refining the lag from its left and right
    /// neighbors. `lag_index` must have a neighbor on each side in `autocorr`.
    pub(crate) fn new(
        autocorr: &[f32],
        lag_index: usize,
        reference: f32,
        min_lag: usize,
        max_lag: usize,
    ) -> Self {
        let center = autocorr[lag_index];
        let left = autocorr[lag_index - 1];
        let right = autocorr[lag_index + 1];
        let offset = parabolic_offset(left, center, right);
        let lag = ((lag_index as f32) + offset)
            .max(min_lag as f32)
            .min(max_lag as f32);

        Peak {
            lag_index,
            normalized_value: normalize(center, reference),
            lag,
        }
    }
}

/// `value / reference`, or zero if `reference` is not positive.
pub(crate) fn normalize(value: f32, reference: f32) -> f32 {
    if reference > 0.0 {
        value / reference
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symmetric_peak() {
        let autocorr: [f32; 4] = [0.0, 0.0, 3.0, 0.0];
        let peak = Peak::new(&autocorr, 2, 3.0, 1, 3);
        assert!((peak.lag - 2.0).abs() <= f32::EPSILON);
        assert!((peak.normalized_value - 1.0).abs() <= f32::EPSILON);
    }

    #[test]
    fn test_asymmetric_peak() {
        let autocorr: [f32; 3] = [-2.0, 0.0, -1.0];
        let peak = Peak::new(&autocorr, 1, 1.0, 0, 2);
        assert!((peak.lag - 1.1666666_f32).abs() <= 1e-6);
    }

    #[test]
    fn test_refined_lag_is_clamped() {
        // A large right neighbor pushes the vertex past the upper end of the range.
        let autocorr: [f32; 5] = [0.0, 0.0, 0.0, 1.9, 1.8];
        let peak = Peak::new(&autocorr, 3, 1.9, 2, 3);
        assert_eq!(peak.lag, 3.0);
    }

    #[test]
    fn test_flat_neighborhood_has_no_offset() {
        assert_eq!(parabolic_offset(1.0, 1.0, 1.0), 0.0);
        assert_eq!(parabolic_offset(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_zero_reference() {
        let autocorr: [f32; 3] = [0.0, 0.0, 0.0];
        let peak = Peak::new(&autocorr, 1, 0.0, 1, 1);
        assert_eq!(peak.normalized_value, 0.0);
        assert_eq!(peak.lag, 1.0);
    }
}

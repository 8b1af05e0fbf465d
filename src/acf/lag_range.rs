use micromath::F32Ext;

/// The smallest lag ever considered. Keeps the peak search clear of the
/// zero lag blow-up of the autocorrelation.
pub const MIN_LAG: usize = 2;

/// The inclusive range of autocorrelation lags, in samples, corresponding
/// to a frequency range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LagRange {
    pub min_lag: usize,
    pub max_lag: usize,
}

impl LagRange {
    /// Returns the lags covering `min_frequency..=max_frequency` that fit in
    /// an autocorrelation of half the window size, keeping a margin of two
    /// lags at the end. Returns `None` if no lag fits.
    pub fn new(
        sample_rate: f32,
        window_size: usize,
        min_frequency: f32,
        max_frequency: f32,
    ) -> Option<LagRange> {
        let half = window_size / 2;
        let shortest_period = F32Ext::floor(sample_rate / max_frequency);
        let longest_period = F32Ext::ceil(sample_rate / min_frequency);
        if !shortest_period.is_finite() || !longest_period.is_finite() {
            return None;
        }

        let min_lag = core::cmp::max(MIN_LAG, shortest_period as usize);
        let max_lag = core::cmp::min(half.saturating_sub(2), longest_period as usize);
        if min_lag > max_lag {
            return None;
        }
        Some(LagRange { min_lag, max_lag })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_range() {
        let range = LagRange::new(44100.0, 2048, 50.0, 1000.0).unwrap();
        assert_eq!(range.min_lag, 44);
        assert_eq!(range.max_lag, 882);
    }

    #[test]
    fn test_range_limited_by_window() {
        let range = LagRange::new(44100.0, 512, 50.0, 1000.0).unwrap();
        assert_eq!(range.max_lag, 254);
    }

    #[test]
    fn test_min_lag_floor() {
        let range = LagRange::new(1000.0, 64, 50.0, 1000.0).unwrap();
        assert_eq!(range.min_lag, MIN_LAG);
        assert_eq!(range.max_lag, 20);
    }

    #[test]
    fn test_degenerate_ranges() {
        // Half window minus the margin is smaller than the shortest period.
        assert_eq!(LagRange::new(44100.0, 4, 50.0, 1000.0), None);
        assert_eq!(LagRange::new(44100.0, 0, 50.0, 1000.0), None);
        assert_eq!(LagRange::new(44100.0, 64, 50.0, 1000.0), None);
        // Tiny windows at tiny sample rates.
        assert_eq!(LagRange::new(10.0, 4, 50.0, 1000.0), None);
        assert_eq!(LagRange::new(10.0, 8, 50.0, 1000.0), None);
    }
}

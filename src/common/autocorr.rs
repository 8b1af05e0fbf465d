/// Computes the (unnormalized) [autocorrelation](https://en.wikipedia.org/wiki/Autocorrelation)
/// of a given buffer using time domain convolution, restricted to the lags in
/// `min_lag..=max_lag`. All other entries of `result` are set to zero.
///
/// Does nothing but zero `result` if the lag range is empty or does not fit
/// in `result` or the window.
pub fn autocorr_conv_range(window: &[f32], result: &mut [f32], min_lag: usize, max_lag: usize) {
    for value in result.iter_mut() {
        *value = 0.0;
    }

    if min_lag > max_lag || max_lag >= result.len() || max_lag >= window.len() {
        return;
    }

    let window_size = window.len();
    for tau in min_lag..=max_lag {
        let mut sum: f32 = 0.0;
        for j in 0..(window_size - tau) {
            sum += window[j] * window[j + tau];
        }
        result[tau] = sum;
    }
}

#[cfg(test)]
mod tests {
    use super::autocorr_conv_range;

    #[test]
    fn test_autocorr_conv_range() {
        // Reference Octave output (https://www.gnu.org/software/octave/index)
        // a = [1   2   3   4   5   6   7   8]
        // conv(a, fliplr(a)) = [8    23    44    70   100   133   168   204   168   133   100    70    44   23     8]
        let window = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let mut result = [-1.0; 4];
        autocorr_conv_range(&window, &mut result, 1, 2);
        assert_eq!(result, [0.0, 168.0, 133.0, 0.0]);
    }

    #[test]
    fn test_empty_lag_range_zeroes_result() {
        let window = [1.0, 2.0, 3.0, 4.0];
        let mut result = [5.0; 2];
        autocorr_conv_range(&window, &mut result, 2, 1);
        assert_eq!(result, [0.0, 0.0]);

        // Lag range not fitting in the result buffer.
        let mut result = [5.0; 2];
        autocorr_conv_range(&window, &mut result, 1, 2);
        assert_eq!(result, [0.0, 0.0]);
    }
}

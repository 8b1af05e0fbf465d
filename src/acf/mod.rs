//! Fundamental frequency estimation using center clipped
//! [autocorrelation](https://en.wikipedia.org/wiki/Autocorrelation).
//!
//! For each window:
//! 1. Center clipping zeroes samples within a fraction of the peak level and moves the
//!    remaining samples towards zero by the same amount. This flattens the formant
//!    structure that would otherwise produce strong correlation at the wrong lags.
//! 2. The autocorrelation is computed directly, for the lags corresponding to the
//!    frequency range only.
//! 3. Local maxima are normalized by the largest value in the lag range (rather than the
//!    value at lag zero) and the first one reaching a threshold is selected. If none does,
//!    the tallest one is used.
//! 4. The selected lag is refined using parabolic interpolation.
//!
//! # Example
//! ```
//! use microhum::acf::PitchEstimator;
//!
//! let sample_rate = 44100.0;
//! let window_size = 2048;
//! let mut estimator = PitchEstimator::new(sample_rate, window_size, 50.0, 1000.0, 0.3, 0.3);
//! let window: Vec<f32> = (0..window_size)
//!     .map(|i| (2.0 * core::f32::consts::PI * 220.0 * (i as f32) / sample_rate).sin())
//!     .collect();
//! let frequency = estimator.estimate(&window);
//! assert!((frequency - 220.0).abs() < 2.0);
//!
//! // Silence has no pitch.
//! assert_eq!(estimator.estimate(&vec![0.0; window_size]), 0.0);
//! ```

mod estimator;
mod lag_range;
mod peak;

pub use estimator::{center_clip, PitchEstimator};
pub use lag_range::{LagRange, MIN_LAG};
pub use peak::{parabolic_offset, Peak};

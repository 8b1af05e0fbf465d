//! Band limiting of raw input blocks.
//!
//! A one-pole high-pass filter removes rumble and DC below the voice band and a
//! one-pole low-pass filter removes hiss and upper harmonics above it. The
//! filters are cascaded in that order and report the RMS energy of the output.
//!
//! # Example
//! ```
//! use microhum::filter::BandpassFilter;
//!
//! let mut filter = BandpassFilter::new(44100.0, 80.0, 1500.0);
//! let input = [0.0; 256];
//! let mut output = [1.0; 256];
//! let energy = filter.process(&input, &mut output);
//! assert_eq!(energy, 0.0);
//! assert!(output.iter().all(|sample| *sample == 0.0));
//! ```

mod band_pass;
mod one_pole;

pub use band_pass::BandpassFilter;
pub use one_pole::{high_pass_coefficient, low_pass_coefficient};

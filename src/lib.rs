//! A real time [pitch](https://en.wikipedia.org/wiki/Pitch_%28music%29) tracker for
//! monophonic sounds like humming and whistling. The tracker rejects background noise,
//! estimates the fundamental frequency of each block of input samples and maps it to
//! the nearest equal tempered note name.
//!
//! Each block passes through the following stages:
//! * A band pass [filter](filter::BandpassFilter) made of two cascaded one-pole filters,
//!   which also reports the block RMS energy.
//! * An [adaptive noise gate](gate::AdaptiveNoiseGate) that tracks a slowly moving noise
//!   floor and decides whether the block is voiced.
//! * A [pitch estimator](acf::PitchEstimator) based on center clipped autocorrelation,
//!   picking the first significant peak to avoid octave errors and refining it
//!   using parabolic interpolation.
//! * A [note mapper](note::NoteMapper) converting frequencies to names like `A4`.
//!
//! The [tracker](tracker::PitchTracker) ties the stages together and adds display
//! smoothing and a hold time after the voice stops.
//!
//! Features
//! * `no_std` compatible.
//! * No allocations after initialization, suitable for real time audio use.
//!
//! # Examples
//! ## Fixed size blocks
//! ```
//! use microhum::tracker::{PitchTracker, Reading, TrackerConfig};
//!
//! let sample_rate = 44100.0;
//! let block_size = 2048;
//! let mut tracker = PitchTracker::new(TrackerConfig::default(), sample_rate, block_size).unwrap();
//!
//! // A 440 Hz tone.
//! let block: Vec<f32> = (0..block_size)
//!     .map(|i| 0.5 * (2.0 * core::f32::consts::PI * 440.0 * (i as f32) / sample_rate).sin())
//!     .collect();
//!
//! for _ in 0..20 {
//!     tracker.process(&block).unwrap();
//! }
//! match tracker.reading() {
//!     Reading::Pitch { frequency, note } => {
//!         assert!((frequency - 440.0).abs() < 5.0);
//!         assert_eq!(note.unwrap().to_string(), "A4");
//!     }
//!     Reading::Listening => panic!("expected a pitch"),
//! }
//! ```
//! ## Chunks of arbitrary size
//! ```
//! use microhum::tracker::{PitchTracker, TrackerConfig};
//!
//! let sample_rate = 44100.0;
//! let mut tracker = PitchTracker::new(TrackerConfig::default(), sample_rate, 1024).unwrap();
//! let chunk = vec![0.0; 300];
//! let mut reading_count = 0;
//! for _ in 0..10 {
//!     tracker.process_samples(&chunk, |reading| {
//!         assert!(reading.is_listening());
//!         reading_count += 1;
//!     });
//! }
//! assert_eq!(reading_count, 2);
//! ```
#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod acf;
pub mod common;
pub mod error;
pub mod filter;
pub mod gate;
pub mod note;
pub mod tracker;

pub use error::{Error, Result};

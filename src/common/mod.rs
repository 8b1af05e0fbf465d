//! Common algorithms and utilities.

mod autocorr;
mod f32_array_ext;
mod midi;
mod window_processor;

pub use autocorr::autocorr_conv_range;
pub use f32_array_ext::F32ArrayExt;
pub use midi::{freq_to_midi_note, midi_note_to_freq, A4_FREQUENCY, A4_NOTE_NUMBER};
pub use window_processor::WindowProcessor;

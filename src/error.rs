use thiserror::Error;

/// Errors reported when constructing or feeding the tracker.
///
/// Nothing on the per-block path fails apart from handing over a block of the
/// wrong length. A block without a discernable pitch is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    #[error("sample rate must be positive and finite, got {0}")]
    InvalidSampleRate(f32),

    #[error("frequency range must satisfy 0 < min < max, got {min}..{max}")]
    InvalidFrequencyRange { min: f32, max: f32 },

    #[error("filter cutoff must be positive and finite, got {0}")]
    InvalidCutoff(f32),

    #[error("{name} must be in {lower}..={upper}, got {value}")]
    OutOfRange {
        name: &'static str,
        value: f32,
        lower: f32,
        upper: f32,
    },

    #[error("hop size must be in 1..={block_size}, got {hop_size}")]
    InvalidHopSize { hop_size: usize, block_size: usize },

    #[error("expected a block of {expected} samples, got {actual}")]
    BlockSizeMismatch { expected: usize, actual: usize },
}

pub type Result<T> = core::result::Result<T, Error>;

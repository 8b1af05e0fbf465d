use crate::error::{Error, Result};

/// Tracker settings. The defaults suit humming and whistling into a laptop microphone.
///
/// ```
/// use microhum::tracker::TrackerConfig;
///
/// let config = TrackerConfig::default()
///     .with_frequency_range(80.0, 800.0)
///     .with_hold_duration(0.5);
/// assert!(config.validate().is_ok());
/// assert!(config.with_frequency_range(800.0, 80.0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TrackerConfig {
    /// How quickly the displayed frequency follows new estimates, per second.
    pub smoothing: f32,
    /// Seconds to keep showing the last reading after the voice stops.
    pub hold_duration: f32,
    /// High-pass cutoff frequency in Hz.
    pub hp_cutoff: f32,
    /// Low-pass cutoff frequency in Hz.
    pub lp_cutoff: f32,
    /// A block is voiced if its energy exceeds the noise floor times this ratio.
    pub gate_ratio: f32,
    /// Rate at which the noise floor follows the block energy.
    pub noise_adapt: f32,
    /// Noise floor before any block has been seen.
    pub initial_noise_floor: f32,
    /// Lowest detectable frequency in Hz.
    pub min_frequency: f32,
    /// Highest detectable frequency in Hz.
    pub max_frequency: f32,
    /// Normalized autocorrelation value the first peak must reach to be taken as the period.
    pub peak_threshold: f32,
    /// Center clipping level as a fraction of the block peak level.
    pub clip_fraction: f32,
    /// Samples between consecutive blocks when feeding chunks of arbitrary size.
    /// `None` means the block size, i.e non-overlapping blocks.
    pub hop_size: Option<usize>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            smoothing: 10.0,
            hold_duration: 1.5,
            hp_cutoff: 80.0,
            lp_cutoff: 1500.0,
            gate_ratio: 1.8,
            noise_adapt: 0.01,
            initial_noise_floor: 0.01,
            min_frequency: 50.0,
            max_frequency: 1000.0,
            peak_threshold: 0.3,
            clip_fraction: 0.3,
            hop_size: None,
        }
    }
}

fn check_range(name: &'static str, value: f32, lower: f32, upper: f32) -> Result<()> {
    // Also rejects NaN.
    if value >= lower && value <= upper {
        Ok(())
    } else {
        Err(Error::OutOfRange {
            name,
            value,
            lower,
            upper,
        })
    }
}

fn check_cutoff(cutoff: f32) -> Result<()> {
    if cutoff.is_finite() && cutoff > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidCutoff(cutoff))
    }
}

impl TrackerConfig {
    pub fn with_smoothing(mut self, smoothing: f32) -> Self {
        self.smoothing = smoothing;
        self
    }

    pub fn with_hold_duration(mut self, hold_duration: f32) -> Self {
        self.hold_duration = hold_duration;
        self
    }

    pub fn with_cutoffs(mut self, hp_cutoff: f32, lp_cutoff: f32) -> Self {
        self.hp_cutoff = hp_cutoff;
        self.lp_cutoff = lp_cutoff;
        self
    }

    pub fn with_gate(mut self, gate_ratio: f32, noise_adapt: f32) -> Self {
        self.gate_ratio = gate_ratio;
        self.noise_adapt = noise_adapt;
        self
    }

    pub fn with_initial_noise_floor(mut self, initial_noise_floor: f32) -> Self {
        self.initial_noise_floor = initial_noise_floor;
        self
    }

    pub fn with_frequency_range(mut self, min_frequency: f32, max_frequency: f32) -> Self {
        self.min_frequency = min_frequency;
        self.max_frequency = max_frequency;
        self
    }

    pub fn with_peak_threshold(mut self, peak_threshold: f32) -> Self {
        self.peak_threshold = peak_threshold;
        self
    }

    pub fn with_clip_fraction(mut self, clip_fraction: f32) -> Self {
        self.clip_fraction = clip_fraction;
        self
    }

    pub fn with_hop_size(mut self, hop_size: usize) -> Self {
        self.hop_size = Some(hop_size);
        self
    }

    /// Checks that all settings are usable.
    pub fn validate(&self) -> Result<()> {
        let frequency_range_is_valid = self.min_frequency.is_finite()
            && self.max_frequency.is_finite()
            && self.min_frequency > 0.0
            && self.min_frequency < self.max_frequency;
        if !frequency_range_is_valid {
            return Err(Error::InvalidFrequencyRange {
                min: self.min_frequency,
                max: self.max_frequency,
            });
        }
        check_cutoff(self.hp_cutoff)?;
        check_cutoff(self.lp_cutoff)?;
        check_range("smoothing", self.smoothing, 0.0, f32::MAX)?;
        check_range("hold_duration", self.hold_duration, 0.0, f32::MAX)?;
        check_range("gate_ratio", self.gate_ratio, f32::MIN_POSITIVE, f32::MAX)?;
        check_range("noise_adapt", self.noise_adapt, 0.0, 1.0)?;
        check_range("initial_noise_floor", self.initial_noise_floor, f32::MIN_POSITIVE, f32::MAX)?;
        check_range("peak_threshold", self.peak_threshold, 0.0, 1.0)?;
        // A clip fraction of one would zero every block.
        check_range("clip_fraction", self.clip_fraction, 0.0, 0.999)?;
        Ok(())
    }

    /// The hop size to use for a given block size.
    pub(crate) fn resolved_hop_size(&self, block_size: usize) -> usize {
        self.hop_size.unwrap_or(block_size).max(1)
    }

    pub(crate) fn validate_hop_size(&self, block_size: usize) -> Result<()> {
        if let Some(hop_size) = self.hop_size {
            if hop_size == 0 || hop_size > block_size {
                return Err(Error::InvalidHopSize {
                    hop_size,
                    block_size,
                });
            }
        }
        Ok(())
    }
}

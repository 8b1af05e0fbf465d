use alloc::{boxed::Box, vec};

use super::config::TrackerConfig;
use super::reading::Reading;
use crate::acf::PitchEstimator;
use crate::common::WindowProcessor;
use crate::error::{Error, Result};
use crate::filter::BandpassFilter;
use crate::gate::AdaptiveNoiseGate;
use crate::note::NoteMapper;

/// The per-block processing stages and the state carried between blocks.
struct Stages {
    sample_rate: f32,
    smoothing: f32,
    hold_duration: f32,
    min_frequency: f32,
    max_frequency: f32,
    filter: BandpassFilter,
    gate: AdaptiveNoiseGate,
    estimator: PitchEstimator,
    note_mapper: NoteMapper,
    /// The band limited block.
    filtered: Box<[f32]>,
    energy: f32,
    /// The unsmoothed estimate for the most recent block, zero if there was none.
    raw_pitch: f32,
    displayed_frequency: f32,
    /// Seconds since a voice was last detected.
    silence_time: f32,
    reading: Reading,
}

impl Stages {
    fn process_block(&mut self, block: &[f32], time_step: f32) -> Reading {
        let time_step = if time_step.is_finite() && time_step > 0.0 {
            time_step
        } else {
            0.0
        };

        self.energy = self.filter.process(block, &mut self.filtered);
        let was_voice = self.gate.is_voice();
        let is_voice = self.gate.update(self.energy);

        if is_voice {
            if !was_voice {
                tracing::debug!(energy = self.energy, noise_floor = self.gate.noise_floor(), "voice onset");
            }
            self.silence_time = 0.0;
            self.raw_pitch = self.estimator.estimate(&self.filtered);
            if self.raw_pitch > self.min_frequency && self.raw_pitch < self.max_frequency {
                let amount = (time_step * self.smoothing).max(0.0).min(1.0);
                self.displayed_frequency += amount * (self.raw_pitch - self.displayed_frequency);
            }
            self.reading = Reading::Pitch {
                frequency: self.displayed_frequency,
                note: self.note_mapper.to_note(self.displayed_frequency),
            };
        } else {
            if was_voice {
                tracing::debug!(energy = self.energy, noise_floor = self.gate.noise_floor(), "voice offset");
            }
            self.raw_pitch = 0.0;
            self.silence_time += time_step;
            if self.silence_time > self.hold_duration && !self.reading.is_listening() {
                tracing::debug!(silence_time = self.silence_time, "hold time elapsed, listening");
                self.reading = Reading::Listening;
            }
        }

        tracing::trace!(
            energy = self.energy,
            noise_floor = self.gate.noise_floor(),
            is_voice,
            raw_pitch = self.raw_pitch,
            displayed_frequency = self.displayed_frequency,
            "processed block"
        );

        self.reading
    }

    fn reset(&mut self) {
        self.filter.reset();
        self.gate.reset();
        for value in self.filtered.iter_mut() {
            *value = 0.0;
        }
        self.energy = 0.0;
        self.raw_pitch = 0.0;
        self.displayed_frequency = 0.0;
        self.silence_time = 0.0;
        self.reading = Reading::Listening;
    }
}

/// Tracks the pitch of a hummed or whistled voice, one block at a time.
///
/// Runs each block through the band pass filter, the noise gate and, for voiced
/// blocks, the pitch estimator. Estimates in the detectable frequency range move
/// the displayed frequency towards them. After the voice stops, the last reading
/// is held for the hold duration before the tracker reports
/// [`Reading::Listening`].
///
/// All buffers are allocated on creation. The tracker is meant to be driven from
/// a single thread, typically the audio thread.
pub struct PitchTracker {
    config: TrackerConfig,
    block_size: usize,
    window_processor: WindowProcessor,
    stages: Stages,
}

impl PitchTracker {
    /// Creates a tracker for blocks of `block_size` samples at `sample_rate` Hz.
    pub fn new(config: TrackerConfig, sample_rate: f32, block_size: usize) -> Result<Self> {
        if !(sample_rate.is_finite() && sample_rate > 0.0) {
            return Err(Error::InvalidSampleRate(sample_rate));
        }
        config.validate()?;
        config.validate_hop_size(block_size)?;

        let estimator = PitchEstimator::new(
            sample_rate,
            block_size,
            config.min_frequency,
            config.max_frequency,
            config.clip_fraction,
            config.peak_threshold,
        );
        tracing::debug!(
            sample_rate,
            block_size,
            hop_size = config.resolved_hop_size(block_size),
            lag_range = ?estimator.lag_range(),
            "created pitch tracker"
        );

        Ok(PitchTracker {
            config,
            block_size,
            window_processor: WindowProcessor::new(block_size, config.resolved_hop_size(block_size)),
            stages: Stages {
                sample_rate,
                smoothing: config.smoothing,
                hold_duration: config.hold_duration,
                min_frequency: config.min_frequency,
                max_frequency: config.max_frequency,
                filter: BandpassFilter::new(sample_rate, config.hp_cutoff, config.lp_cutoff),
                gate: AdaptiveNoiseGate::new(
                    config.initial_noise_floor,
                    config.noise_adapt,
                    config.gate_ratio,
                ),
                estimator,
                note_mapper: NoteMapper::new(config.min_frequency),
                filtered: vec![0.0; block_size].into_boxed_slice(),
                energy: 0.0,
                raw_pitch: 0.0,
                displayed_frequency: 0.0,
                silence_time: 0.0,
                reading: Reading::Listening,
            },
        })
    }

    /// Processes one block, taking the time step to be the block duration.
    pub fn process(&mut self, block: &[f32]) -> Result<Reading> {
        let time_step = (self.block_size as f32) / self.stages.sample_rate;
        self.process_with_time_step(block, time_step)
    }

    /// Processes one block, advancing the smoothing and hold timers by `time_step` seconds.
    pub fn process_with_time_step(&mut self, block: &[f32], time_step: f32) -> Result<Reading> {
        if block.len() != self.block_size {
            return Err(Error::BlockSizeMismatch {
                expected: self.block_size,
                actual: block.len(),
            });
        }
        Ok(self.stages.process_block(block, time_step))
    }

    /// Accepts a chunk of any size, processes every block completed by it and
    /// passes the resulting readings to `handler`. Consecutive blocks start
    /// `hop_size` samples apart, which is also the time step.
    pub fn process_samples<F>(&mut self, samples: &[f32], mut handler: F)
    where
        F: FnMut(&Reading),
    {
        let stages = &mut self.stages;
        let time_step = (self.window_processor.hop_size() as f32) / stages.sample_rate;
        self.window_processor.process(samples, |block| {
            let reading = stages.process_block(block, time_step);
            handler(&reading);
        });
    }

    /// Returns the tracker to its initial state.
    pub fn reset(&mut self) {
        self.window_processor.reset();
        self.stages.reset();
    }

    /// The most recent reading.
    pub fn reading(&self) -> Reading {
        self.stages.reading
    }

    /// The gate decision for the most recent block.
    pub fn is_voice(&self) -> bool {
        self.stages.gate.is_voice()
    }

    /// The RMS level of the most recent filtered block.
    pub fn energy(&self) -> f32 {
        self.stages.energy
    }

    pub fn noise_floor(&self) -> f32 {
        self.stages.gate.noise_floor()
    }

    /// The unsmoothed estimate for the most recent block in Hz, zero if the
    /// block was not voiced or had no discernable pitch.
    pub fn raw_pitch(&self) -> f32 {
        self.stages.raw_pitch
    }

    pub fn displayed_frequency(&self) -> f32 {
        self.stages.displayed_frequency
    }

    /// Seconds since a voice was last detected.
    pub fn silence_time(&self) -> f32 {
        self.stages.silence_time
    }

    /// The most recent band limited block.
    pub fn filtered_block(&self) -> &[f32] {
        &self.stages.filtered
    }

    /// The autocorrelation computed for the most recent voiced block.
    pub fn autocorrelation(&self) -> &[f32] {
        self.stages.estimator.autocorr()
    }

    pub fn note_mapper(&self) -> &NoteMapper {
        &self.stages.note_mapper
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Returns the sample rate in Hz.
    pub fn sample_rate(&self) -> f32 {
        self.stages.sample_rate
    }
}

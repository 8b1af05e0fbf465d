//! Block by block pitch tracking: filtering, gating, estimation, smoothing and note mapping.

mod config;
mod pitch_tracker;
mod reading;

pub use config::TrackerConfig;
pub use pitch_tracker::PitchTracker;
pub use reading::Reading;

//! Voice detection against an adaptive noise floor.
//!
//! The noise floor is an exponential moving average of the block energy. A block
//! counts as voiced if its energy exceeds the floor by a fixed ratio. Since every
//! block feeds the average, the floor also creeps up slowly while the voice is
//! active, trading a perfectly stable floor for quick adaptation to changing
//! background noise.

mod noise_gate;

pub use noise_gate::AdaptiveNoiseGate;

/// Tracks the background energy level and classifies blocks as voiced or not.
#[derive(Debug, Clone)]
pub struct AdaptiveNoiseGate {
    /// Rate at which the noise floor follows the block energy, between 0 and 1.
    adapt_rate: f32,
    /// A block is voiced if its energy exceeds `ratio` times the noise floor.
    ratio: f32,
    initial_noise_floor: f32,
    noise_floor: f32,
    is_voice: bool,
}

impl AdaptiveNoiseGate {
    pub fn new(initial_noise_floor: f32, adapt_rate: f32, ratio: f32) -> Self {
        AdaptiveNoiseGate {
            adapt_rate,
            ratio,
            initial_noise_floor,
            noise_floor: initial_noise_floor,
            is_voice: false,
        }
    }

    /// Moves the noise floor towards `energy` and returns true if `energy`
    /// is above the updated threshold.
    pub fn update(&mut self, energy: f32) -> bool {
        let energy = if energy.is_finite() && energy > 0.0 { energy } else { 0.0 };
        self.noise_floor += self.adapt_rate * (energy - self.noise_floor);
        self.is_voice = energy > self.threshold();
        self.is_voice
    }

    /// The energy level a block must exceed to count as voiced.
    pub fn threshold(&self) -> f32 {
        self.noise_floor * self.ratio
    }

    pub fn noise_floor(&self) -> f32 {
        self.noise_floor
    }

    /// The most recent decision.
    pub fn is_voice(&self) -> bool {
        self.is_voice
    }

    pub fn reset(&mut self) {
        self.noise_floor = self.initial_noise_floor;
        self.is_voice = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settled_gate(background: f32) -> AdaptiveNoiseGate {
        let mut gate = AdaptiveNoiseGate::new(0.01, 0.01, 1.8);
        for _ in 0..2000 {
            gate.update(background);
        }
        // Settled at the background level, which is below the threshold.
        assert!(!gate.update(background));
        gate
    }

    #[test]
    fn test_silence_is_not_voice() {
        let mut gate = AdaptiveNoiseGate::new(0.01, 0.01, 1.8);
        assert!(!gate.update(0.0));
        assert!(!gate.is_voice());
        assert!(gate.noise_floor() > 0.0);
    }

    #[test]
    fn test_floor_follows_background() {
        let gate = settled_gate(0.05);
        assert!((gate.noise_floor() - 0.05).abs() < 1e-4);
    }

    #[test]
    fn test_threshold_crossing() {
        let gate = settled_gate(0.02);
        let floor = gate.noise_floor();

        let mut above = gate.clone();
        assert!(above.update(floor * 1.8 * 1.1));

        let mut below = gate.clone();
        assert!(!below.update(floor * 1.8 * 0.9));
    }

    #[test]
    fn test_floor_creeps_up_during_voice() {
        let mut gate = settled_gate(0.02);
        let floor_before = gate.noise_floor();
        for _ in 0..10 {
            assert!(gate.update(0.5));
        }
        assert!(gate.noise_floor() > floor_before);
    }

    #[test]
    fn test_non_finite_energy_counts_as_silence() {
        let mut gate = AdaptiveNoiseGate::new(0.01, 0.01, 1.8);
        assert!(!gate.update(f32::NAN));
        assert!(!gate.update(f32::INFINITY));
        assert!(gate.noise_floor().is_finite());
    }

    #[test]
    fn test_reset() {
        let mut gate = settled_gate(0.3);
        gate.reset();
        assert_eq!(gate.noise_floor(), 0.01);
        assert!(!gate.is_voice());
    }
}

//! `[f32]` extensions.

use micromath::F32Ext;

/// `[f32]` extensions.
pub trait F32ArrayExt {
    /// Returns the maximum absolute value.
    fn peak_level(&self) -> f32;
    /// Returns the [root mean square](https://en.wikipedia.org/wiki/Root_mean_square)
    /// level. Zero for an empty slice.
    fn rms_level(&self) -> f32;
}

impl F32ArrayExt for [f32] {
    fn peak_level(&self) -> f32 {
        let mut max: f32 = 0.0;
        for sample in self.iter() {
            let value = F32Ext::abs(*sample);
            if value > max {
                max = value
            }
        }
        max
    }

    fn rms_level(&self) -> f32 {
        if self.is_empty() {
            return 0.0;
        };
        let mut sum_sq: f32 = 0.;
        for sample in self.iter() {
            sum_sq += sample * sample
        }
        let mean_sq = sum_sq / (self.len() as f32);
        if mean_sq > 0.0 {
            F32Ext::sqrt(mean_sq)
        } else {
            0.0
        }
    }
}

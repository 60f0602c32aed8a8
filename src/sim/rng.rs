//! Injectable randomness for the simulation
//!
//! Every random draw in the core goes through [`RandomSource`], so a session
//! is reproducible from its seed and tests can script exact values.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Uniform sampling in inclusive bounds
pub trait RandomSource {
    /// Uniform sample in `[min, max]`; returns `min` when `min >= max`
    fn uniform_f32(&mut self, min: f32, max: f32) -> f32;
    /// Uniform sample in `[min, max]`; returns `min` when `min >= max`
    fn uniform_u32(&mut self, min: u32, max: u32) -> u32;
}

impl RandomSource for Pcg32 {
    fn uniform_f32(&mut self, min: f32, max: f32) -> f32 {
        if min >= max {
            return min;
        }
        self.random_range(min..=max)
    }

    fn uniform_u32(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        self.random_range(min..=max)
    }
}

/// Session RNG for a run seed
pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Replays queued unit fractions (`0.0` = min, `1.0` = max), then sits at
/// the midpoint once the script runs out.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub(crate) struct ScriptedSource {
    script: std::collections::VecDeque<f32>,
}

#[cfg(test)]
impl ScriptedSource {
    pub(crate) fn new(fractions: &[f32]) -> Self {
        Self {
            script: fractions.iter().copied().collect(),
        }
    }

    pub(crate) fn push(&mut self, fraction: f32) {
        self.script.push_back(fraction);
    }

    fn next_fraction(&mut self) -> f32 {
        self.script.pop_front().unwrap_or(0.5).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
impl RandomSource for ScriptedSource {
    fn uniform_f32(&mut self, min: f32, max: f32) -> f32 {
        let t = self.next_fraction();
        if min >= max {
            return min;
        }
        min + (max - min) * t
    }

    fn uniform_u32(&mut self, min: u32, max: u32) -> u32 {
        let t = self.next_fraction();
        if min >= max {
            return min;
        }
        min + ((max - min) as f32 * t).round() as u32
    }
}

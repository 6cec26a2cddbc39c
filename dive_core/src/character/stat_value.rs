//! StatValue - layered contributions to a single character stat

use crate::stat::StatKind;
use serde::{Deserialize, Serialize};

/// Contributions to one stat, kept apart until the final value is computed
///
/// For an additive stat the final value is
/// `((base + flat) × Π(1 + multipliers)) × Π(1 + outer_multipliers) + Σ post_flat`.
/// For a multiplier stat base and flat are not used and the scaled part starts
/// from 1.0. Factors and post-flat additions are applied one at a time in
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatValue {
    /// Class base value
    pub base: f64,
    /// Flat additions scaled by the multipliers (gear)
    pub flat: f64,
    /// Percentage deltas, each compounding as `(1 + m)` (meta, class mod)
    pub multipliers: Vec<f64>,
    /// Percentage deltas applied to the already scaled value (gear)
    pub outer_multipliers: Vec<f64>,
    /// Additions applied after all multipliers (flat meta upgrades)
    pub post_flat: Vec<f64>,
}

impl StatValue {
    /// Create a new StatValue with the given base
    pub fn with_base(base: f64) -> Self {
        StatValue {
            base,
            ..StatValue::default()
        }
    }

    /// Calculate the final value for a stat of the given kind
    pub fn compute(&self, kind: StatKind) -> f64 {
        let scaled = match kind {
            StatKind::Multiplier => compound(1.0, &self.multipliers),
            StatKind::Additive => self.total_flat() * self.total_multiplier(),
        };
        let scaled = compound(scaled, &self.outer_multipliers);
        self.post_flat.iter().fold(scaled, |value, add| value + add)
    }

    pub fn add_base(&mut self, value: f64) {
        self.base += value;
    }

    pub fn add_flat(&mut self, value: f64) {
        self.flat += value;
    }

    /// Add a percentage delta (0.20 for +20%)
    pub fn add_multiplier(&mut self, value: f64) {
        self.multipliers.push(value);
    }

    pub fn add_outer_multiplier(&mut self, value: f64) {
        self.outer_multipliers.push(value);
    }

    pub fn add_post_flat(&mut self, value: f64) {
        self.post_flat.push(value);
    }

    /// Base plus flat additions
    pub fn total_flat(&self) -> f64 {
        self.base + self.flat
    }

    /// Product of the inner `(1 + m)` factors
    pub fn total_multiplier(&self) -> f64 {
        compound(1.0, &self.multipliers)
    }
}

fn compound(start: f64, deltas: &[f64]) -> f64 {
    deltas.iter().fold(start, |value, m| value * (1.0 + m))
}

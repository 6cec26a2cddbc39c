//! Bucketing - how several bonuses on the same stat collapse into one

use serde::{Deserialize, Serialize};

/// Rule for combining multiple contributions to one stat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucketing {
    /// Plain sum
    Additive,
    /// `Π(1 + v) - 1`: each value is a percentage delta and the result is the
    /// compounded delta (e.g. `[0.1, 0.2]` gives `0.32`)
    Multiplicative,
}

impl Bucketing {
    /// Combine values with this rule. An empty slice combines to 0.
    pub fn combine(self, values: &[f64]) -> f64 {
        match self {
            Bucketing::Additive => additive(values),
            Bucketing::Multiplicative => multiplicative(values),
        }
    }
}

/// Sum of all values
pub fn additive(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Compounded percentage delta of all values
pub fn multiplicative(values: &[f64]) -> f64 {
    let multiplier: f64 = values.iter().map(|v| 1.0 + v).product();
    multiplier - 1.0
}

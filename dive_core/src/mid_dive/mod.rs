//! Mid-dive bonuses - run-scoped upgrade totals for one weapon
//!
//! Every contribution in this bucket is summed, whatever the stat's
//! bucketing rule. Only character stats honour per-stat bucketing.

mod aggregator;

pub use aggregator::aggregate_mid_dive_upgrades;

use crate::stat::{Stat, StatMap};
use serde::{Deserialize, Serialize};

/// Sparse per-stat additive totals; absent stats are zero
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MidDiveBonuses {
    totals: StatMap,
}

impl MidDiveBonuses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a contribution; zero contributions leave no entry
    pub fn add(&mut self, stat: Stat, value: f64) {
        if value == 0.0 {
            return;
        }
        *self.totals.entry(stat).or_insert(0.0) += value;
    }

    pub fn get(&self, stat: Stat) -> f64 {
        self.totals.get(&stat).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, stat: Stat) -> bool {
        self.totals.contains_key(&stat)
    }

    /// Fold another set of totals into this one
    pub fn merge(&mut self, other: &MidDiveBonuses) {
        for (stat, value) in &other.totals {
            self.add(*stat, *value);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Stat, f64)> + '_ {
        self.totals.iter().map(|(s, v)| (*s, *v))
    }
}

impl FromIterator<(Stat, f64)> for MidDiveBonuses {
    fn from_iter<I: IntoIterator<Item = (Stat, f64)>>(iter: I) -> Self {
        let mut bonuses = MidDiveBonuses::new();
        for (stat, value) in iter {
            bonuses.add(stat, value);
        }
        bonuses
    }
}

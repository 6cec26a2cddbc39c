//! StatAccumulator - Collects stat contributions before computing CharacterStats

use super::{CharacterStats, StatValue};
use crate::stat::{Stat, StatMap};
use std::collections::BTreeMap;

/// Accumulates contributions from every [`crate::source::StatSource`]
///
/// Stats nobody touched end up at their neutral value.
#[derive(Debug, Clone, Default)]
pub struct StatAccumulator {
    values: BTreeMap<Stat, StatValue>,
}

impl StatAccumulator {
    /// Create a new empty accumulator
    pub fn new() -> Self {
        StatAccumulator::default()
    }

    fn entry(&mut self, stat: Stat) -> &mut StatValue {
        self.values.entry(stat).or_default()
    }

    pub fn add_base(&mut self, stat: Stat, value: f64) {
        self.entry(stat).add_base(value);
    }

    pub fn add_flat(&mut self, stat: Stat, value: f64) {
        self.entry(stat).add_flat(value);
    }

    pub fn add_multiplier(&mut self, stat: Stat, value: f64) {
        self.entry(stat).add_multiplier(value);
    }

    pub fn add_outer_multiplier(&mut self, stat: Stat, value: f64) {
        self.entry(stat).add_outer_multiplier(value);
    }

    pub fn add_post_flat(&mut self, stat: Stat, value: f64) {
        self.entry(stat).add_post_flat(value);
    }

    /// Contributions collected so far for a stat
    pub fn get(&self, stat: Stat) -> Option<&StatValue> {
        self.values.get(&stat)
    }

    /// Compute the final value of every stat
    pub fn finish(&self) -> CharacterStats {
        let values: StatMap = Stat::all()
            .iter()
            .map(|stat| {
                let kind = stat.definition().kind;
                let value = self
                    .values
                    .get(stat)
                    .map_or_else(|| kind.neutral_value(), |v| v.compute(kind));
                (*stat, value)
            })
            .collect();
        CharacterStats::from_map(values)
    }
}

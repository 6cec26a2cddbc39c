//! GearSource - Stats from equipped gear

use crate::character::StatAccumulator;
use crate::source::StatSource;
use crate::stat::{Stat, StatMap};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Bonuses from every equipped gear piece, kept per contribution
///
/// Flat contributions to a stat are summed. Percentage contributions to a
/// stat are combined with that stat's bucketing rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GearBonuses {
    #[serde(default)]
    flat: BTreeMap<Stat, Vec<f64>>,
    #[serde(default)]
    percent: BTreeMap<Stat, Vec<f64>>,
}

impl GearBonuses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_flat(&mut self, stat: Stat, value: f64) {
        self.flat.entry(stat).or_default().push(value);
    }

    /// Add a percentage bonus (0.10 for +10%)
    pub fn add_percent(&mut self, stat: Stat, value: f64) {
        self.percent.entry(stat).or_default().push(value);
    }

    pub fn clear(&mut self) {
        self.flat.clear();
        self.percent.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.flat.is_empty() && self.percent.is_empty()
    }

    /// Summed flat bonus per stat
    pub fn flat_totals(&self) -> StatMap {
        self.flat
            .iter()
            .map(|(stat, values)| (*stat, values.iter().sum()))
            .collect()
    }

    /// Bucketed percentage bonus per stat
    pub fn percent_totals(&self) -> StatMap {
        self.percent
            .iter()
            .map(|(stat, values)| (*stat, stat.definition().bucketing.combine(values)))
            .collect()
    }
}

/// Gear bonuses collapsed to one flat and one percentage value per stat
pub struct GearSource<'a> {
    flat: &'a StatMap,
    percent: &'a StatMap,
}

impl<'a> GearSource<'a> {
    pub fn new(flat: &'a StatMap, percent: &'a StatMap) -> Self {
        GearSource { flat, percent }
    }
}

impl StatSource for GearSource<'_> {
    fn id(&self) -> &str {
        "gear"
    }

    fn priority(&self) -> i32 {
        75
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        for (stat, value) in self.flat {
            stats.add_flat(*stat, *value);
        }
        for (stat, value) in self.percent {
            stats.add_outer_multiplier(*stat, *value);
        }
    }
}

//! CharacterStats - final character stats aggregated from every permanent source
//!
//! Layering per stat:
//! - class base and flat gear are summed,
//! - percentage meta upgrades, the class mod multiplier and percentage gear each
//!   compound as a `(1 + value)` factor,
//! - flat meta upgrades are added last, after every multiplier.
//!
//! Damage, fire rate and reload speed are carried as multipliers (neutral 1.0)
//! and ignore class base and flat gear.

mod accumulator;
mod stat_value;

pub use accumulator::StatAccumulator;
pub use stat_value::StatValue;

use crate::data::{ClassBaseStats, ClassMod, MetaUpgrade};
use crate::source::{ClassBaseSource, ClassModSource, GearSource, MetaUpgradeSource, StatSource};
use crate::stat::{format_stat_value, Stat, StatMap};
use crate::state::MetaUpgradeLevels;
use serde::{Deserialize, Serialize};

/// Value of every recognized stat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterStats {
    values: StatMap,
}

impl Default for CharacterStats {
    fn default() -> Self {
        Self::neutral()
    }
}

impl CharacterStats {
    /// Every stat at its neutral value (no class selected)
    pub fn neutral() -> Self {
        StatAccumulator::new().finish()
    }

    fn from_map(values: StatMap) -> Self {
        CharacterStats { values }
    }

    /// Rebuild stats from sources, applied in priority order
    pub fn from_sources(sources: &[Box<dyn StatSource + '_>]) -> Self {
        let mut sorted: Vec<_> = sources.iter().collect();
        sorted.sort_by_key(|s| s.priority());

        let mut accumulator = StatAccumulator::new();
        for source in sorted {
            tracing::trace!(source = source.id(), "Applying stat source");
            source.apply(&mut accumulator);
        }
        accumulator.finish()
    }

    /// Snapshot with one stat overridden, for callers that build stats by hand
    pub fn with_value(mut self, stat: Stat, value: f64) -> Self {
        self.values.insert(stat, value);
        self
    }

    pub fn get(&self, stat: Stat) -> f64 {
        self.values
            .get(&stat)
            .copied()
            .unwrap_or_else(|| stat.neutral_value())
    }

    pub fn damage(&self) -> f64 {
        self.get(Stat::Damage)
    }

    pub fn fire_rate(&self) -> f64 {
        self.get(Stat::FireRate)
    }

    pub fn reload_speed(&self) -> f64 {
        self.get(Stat::ReloadSpeed)
    }

    pub fn crit_chance(&self) -> f64 {
        self.get(Stat::CritChance)
    }

    pub fn crit_damage(&self) -> f64 {
        self.get(Stat::CritDamage)
    }

    /// Character stats in display order
    pub fn iter_display(&self) -> impl Iterator<Item = (Stat, f64)> + '_ {
        Stat::character_stats().iter().map(|s| (*s, self.get(*s)))
    }

    /// Display string for a stat
    pub fn formatted(&self, stat: Stat) -> String {
        format_stat_value(stat.definition(), self.get(stat))
    }
}

/// Aggregate class base stats, class mod, meta upgrades and gear
///
/// With no class mod selected every stat is neutral and base stats are not
/// applied.
pub fn calculate_current_stats(
    class_base_stats: &ClassBaseStats,
    class_mod: Option<&ClassMod>,
    meta_upgrades: &[MetaUpgrade],
    levels: &MetaUpgradeLevels,
    flat_gear_bonuses: &StatMap,
    percent_gear_bonuses: &StatMap,
) -> CharacterStats {
    let Some(class_mod) = class_mod else {
        return CharacterStats::neutral();
    };

    let sources: Vec<Box<dyn StatSource + '_>> = vec![
        Box::new(ClassBaseSource::new(class_base_stats)),
        Box::new(GearSource::new(flat_gear_bonuses, percent_gear_bonuses)),
        Box::new(ClassModSource::new(class_mod)),
        Box::new(MetaUpgradeSource::new(meta_upgrades, levels)),
    ];
    let stats = CharacterStats::from_sources(&sources);

    tracing::debug!(
        class_mod = %class_mod.name,
        damage = stats.damage(),
        health = stats.get(Stat::Health),
        "Recalculated character stats"
    );
    stats
}

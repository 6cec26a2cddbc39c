//! Stat registry - every stat the engine knows about and how it combines

mod bucketing;
mod definition;

pub use bucketing::{additive, multiplicative, Bucketing};
pub use definition::{definition, format_stat_value, lookup, StatDefinition, StatKind};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sparse per-stat values; a missing key reads as "no contribution"
pub type StatMap = BTreeMap<Stat, f64>;

/// Identifier for a character or weapon stat
///
/// The set is closed: anything that names a stat (upgrades, meta upgrades,
/// class mods, gear) must name one of these, so every stat always has a
/// [`StatDefinition`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Stat {
    // Survivability
    Health,
    LifeRegen,
    Armor,
    DodgeChance,
    // Movement
    MoveSpeed,
    // Offense
    Damage,
    FireRate,
    ReloadSpeed,
    CritChance,
    CritDamage,
    StatusDamage,
    StatusPotency,
    // Utility
    PickupRadius,
    XpGain,
    MiningSpeed,
    Lifetime,
    Luck,
    // Weapon-only
    WeaponRange,
    ExplosionRadius,
    Piercing,
    DroneCount,
    BeamCount,
    WeaponLevel,
    // Run resources
    StartingNitra,
    StartingGold,
    ArtifactRerolls,
}

impl Stat {
    /// Get every stat
    pub fn all() -> &'static [Stat] {
        &[
            Stat::Health,
            Stat::LifeRegen,
            Stat::Armor,
            Stat::DodgeChance,
            Stat::MoveSpeed,
            Stat::Damage,
            Stat::FireRate,
            Stat::ReloadSpeed,
            Stat::CritChance,
            Stat::CritDamage,
            Stat::StatusDamage,
            Stat::StatusPotency,
            Stat::PickupRadius,
            Stat::XpGain,
            Stat::MiningSpeed,
            Stat::Lifetime,
            Stat::Luck,
            Stat::WeaponRange,
            Stat::ExplosionRadius,
            Stat::Piercing,
            Stat::DroneCount,
            Stat::BeamCount,
            Stat::WeaponLevel,
            Stat::StartingNitra,
            Stat::StartingGold,
            Stat::ArtifactRerolls,
        ]
    }

    /// Character stats in display order
    pub fn character_stats() -> &'static [Stat] {
        &[
            Stat::Health,
            Stat::LifeRegen,
            Stat::Armor,
            Stat::DodgeChance,
            Stat::MoveSpeed,
            Stat::Damage,
            Stat::FireRate,
            Stat::ReloadSpeed,
            Stat::CritChance,
            Stat::CritDamage,
            Stat::StatusDamage,
            Stat::PickupRadius,
            Stat::XpGain,
            Stat::MiningSpeed,
            Stat::Lifetime,
        ]
    }

    /// Registry entry for this stat
    pub fn definition(self) -> &'static StatDefinition {
        definition(self)
    }

    /// Value of this stat when no source contributes to it
    pub fn neutral_value(self) -> f64 {
        self.definition().kind.neutral_value()
    }
}

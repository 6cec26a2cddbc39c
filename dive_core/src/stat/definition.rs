//! Per-stat definitions: display data, bucketing rule and neutral value

use super::{Bucketing, Stat};
use crate::error::CalcError;
use std::str::FromStr;

/// Whether a stat is carried as a multiplier or as an absolute amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    /// Final value is a multiplier, neutral at 1.0
    Multiplier,
    /// Final value is an amount, neutral at 0
    Additive,
}

impl StatKind {
    pub fn neutral_value(self) -> f64 {
        match self {
            StatKind::Multiplier => 1.0,
            StatKind::Additive => 0.0,
        }
    }
}

/// Static description of a stat
#[derive(Debug, Clone, PartialEq)]
pub struct StatDefinition {
    pub stat: Stat,
    /// Code reference, e.g. `fire_rate`
    pub id: &'static str,
    /// Display name, e.g. `Fire Rate`
    pub name: &'static str,
    /// Template with a `{value}` placeholder
    pub display_format: &'static str,
    /// How multiple contributions to this stat combine
    pub bucketing: Bucketing,
    pub kind: StatKind,
}

const fn def(
    stat: Stat,
    id: &'static str,
    name: &'static str,
    display_format: &'static str,
    bucketing: Bucketing,
    kind: StatKind,
) -> StatDefinition {
    StatDefinition {
        stat,
        id,
        name,
        display_format,
        bucketing,
        kind,
    }
}

use self::StatKind::{Additive as Amount, Multiplier};
use super::bucketing::Bucketing::{Additive as Sum, Multiplicative as Compound};

static HEALTH: StatDefinition = def(Stat::Health, "health", "Max HP", "{value}", Sum, Amount);
static LIFE_REGEN: StatDefinition =
    def(Stat::LifeRegen, "life_regen", "Life Regen", "{value}/s", Sum, Amount);
static ARMOR: StatDefinition = def(Stat::Armor, "armor", "Armor", "{value}", Sum, Amount);
static DODGE_CHANCE: StatDefinition =
    def(Stat::DodgeChance, "dodge_chance", "Dodge", "{value}%", Sum, Amount);
static MOVE_SPEED: StatDefinition =
    def(Stat::MoveSpeed, "move_speed", "Move Speed", "+{value}%", Compound, Amount);
static DAMAGE: StatDefinition =
    def(Stat::Damage, "damage", "Damage", "x{value}", Compound, Multiplier);
static FIRE_RATE: StatDefinition =
    def(Stat::FireRate, "fire_rate", "Fire Rate", "x{value}", Compound, Multiplier);
static RELOAD_SPEED: StatDefinition =
    def(Stat::ReloadSpeed, "reload_speed", "Reload Speed", "x{value}", Compound, Multiplier);
static CRIT_CHANCE: StatDefinition =
    def(Stat::CritChance, "crit_chance", "Critical Chance", "{value}%", Sum, Amount);
static CRIT_DAMAGE: StatDefinition =
    def(Stat::CritDamage, "crit_damage", "Critical Damage", "{value}x", Sum, Amount);
static STATUS_DAMAGE: StatDefinition = def(
    Stat::StatusDamage,
    "status_damage",
    "Status Effect Damage",
    "+{value}%",
    Compound,
    Amount,
);
static STATUS_POTENCY: StatDefinition =
    def(Stat::StatusPotency, "status_potency", "Status Potency", "+{value}%", Compound, Amount);
static PICKUP_RADIUS: StatDefinition =
    def(Stat::PickupRadius, "pickup_radius", "Pickup Radius", "+{value}%", Compound, Amount);
static XP_GAIN: StatDefinition = def(Stat::XpGain, "xp_gain", "XP Gain", "+{value}%", Compound, Amount);
static MINING_SPEED: StatDefinition =
    def(Stat::MiningSpeed, "mining_speed", "Mining Speed", "+{value}%", Compound, Amount);
static LIFETIME: StatDefinition =
    def(Stat::Lifetime, "lifetime", "Lifetime", "+{value}%", Compound, Amount);
static LUCK: StatDefinition = def(Stat::Luck, "luck", "Luck", "+{value}%", Compound, Amount);
static WEAPON_RANGE: StatDefinition =
    def(Stat::WeaponRange, "weapon_range", "Range", "+{value}%", Compound, Amount);
static EXPLOSION_RADIUS: StatDefinition = def(
    Stat::ExplosionRadius,
    "explosion_radius",
    "Explosion Radius",
    "+{value}%",
    Compound,
    Amount,
);
static PIERCING: StatDefinition = def(Stat::Piercing, "piercing", "Piercing", "+{value}", Sum, Amount);
static DRONE_COUNT: StatDefinition =
    def(Stat::DroneCount, "drone_count", "Drones", "+{value}", Sum, Amount);
static BEAM_COUNT: StatDefinition =
    def(Stat::BeamCount, "beam_count", "Beams", "+{value}", Sum, Amount);
static WEAPON_LEVEL: StatDefinition =
    def(Stat::WeaponLevel, "weapon_level", "Weapon Level", "+{value}", Sum, Amount);
static STARTING_NITRA: StatDefinition =
    def(Stat::StartingNitra, "starting_nitra", "Starting Nitra", "{value}", Sum, Amount);
static STARTING_GOLD: StatDefinition =
    def(Stat::StartingGold, "starting_gold", "Starting Gold", "{value}", Sum, Amount);
static ARTIFACT_REROLLS: StatDefinition =
    def(Stat::ArtifactRerolls, "artifact_rerolls", "Artifact Rerolls", "{value}", Sum, Amount);

/// Get the definition of a stat
pub fn definition(stat: Stat) -> &'static StatDefinition {
    match stat {
        Stat::Health => &HEALTH,
        Stat::LifeRegen => &LIFE_REGEN,
        Stat::Armor => &ARMOR,
        Stat::DodgeChance => &DODGE_CHANCE,
        Stat::MoveSpeed => &MOVE_SPEED,
        Stat::Damage => &DAMAGE,
        Stat::FireRate => &FIRE_RATE,
        Stat::ReloadSpeed => &RELOAD_SPEED,
        Stat::CritChance => &CRIT_CHANCE,
        Stat::CritDamage => &CRIT_DAMAGE,
        Stat::StatusDamage => &STATUS_DAMAGE,
        Stat::StatusPotency => &STATUS_POTENCY,
        Stat::PickupRadius => &PICKUP_RADIUS,
        Stat::XpGain => &XP_GAIN,
        Stat::MiningSpeed => &MINING_SPEED,
        Stat::Lifetime => &LIFETIME,
        Stat::Luck => &LUCK,
        Stat::WeaponRange => &WEAPON_RANGE,
        Stat::ExplosionRadius => &EXPLOSION_RADIUS,
        Stat::Piercing => &PIERCING,
        Stat::DroneCount => &DRONE_COUNT,
        Stat::BeamCount => &BEAM_COUNT,
        Stat::WeaponLevel => &WEAPON_LEVEL,
        Stat::StartingNitra => &STARTING_NITRA,
        Stat::StartingGold => &STARTING_GOLD,
        Stat::ArtifactRerolls => &ARTIFACT_REROLLS,
    }
}

/// Look up a definition by its string id
pub fn lookup(id: &str) -> Result<&'static StatDefinition, CalcError> {
    Stat::from_str(id)
        .map(definition)
        .map_err(|_| CalcError::UnknownStat(id.to_string()))
}

/// Format a value for display, picking precision by magnitude
///
/// `>= 100` shows no decimals, `>= 10` one, `>= 1` two, anything smaller three.
pub fn format_stat_value(definition: &StatDefinition, value: f64) -> String {
    let magnitude = value.abs();
    let formatted = if magnitude >= 100.0 {
        format!("{:.0}", value.round())
    } else if magnitude >= 10.0 {
        format!("{:.1}", value)
    } else if magnitude >= 1.0 {
        format!("{:.2}", value)
    } else {
        format!("{:.3}", value)
    };
    definition.display_format.replacen("{value}", &formatted, 1)
}

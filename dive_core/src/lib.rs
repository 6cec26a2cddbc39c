//! dive_core - Stat aggregation and DPS engine for dive build planning
//!
//! This library provides:
//! - Stat registry: every stat's definition and bucketing rule
//! - Character stats: class base, class mod, meta upgrades and gear layered per stat
//! - Mid-dive bonuses: run-scoped upgrades folded per weapon
//! - DPS: sustained damage from weapon stats and bonus layers
//! - Selection state and a flat key-value store for persisting it

pub mod character;
pub mod config;
pub mod data;
pub mod dps;
pub mod error;
pub mod mid_dive;
pub mod prelude;
pub mod report;
pub mod source;
pub mod stat;
pub mod state;
pub mod store;
pub mod types;

// Re-export core types for convenience
pub use character::{calculate_current_stats, CharacterStats, StatAccumulator, StatValue};
pub use config::{default_game_data, load_game_data, ConfigError};
pub use data::{
    does_upgrade_apply_to_weapon, get_upgrade_value, valid_upgrades_for_weapon, ClassMod,
    GameData, MetaUpgrade, RarityValues, Upgrade, Weapon,
};
pub use dps::{calculate_dps, calculate_dps_with_all_upgrades, calculate_dps_with_upgrade};
pub use error::CalcError;
pub use mid_dive::{aggregate_mid_dive_upgrades, MidDiveBonuses};
pub use report::{evaluate_build, evaluate_weapon, BuildReport, WeaponFailure, WeaponReport};
pub use source::{GearBonuses, StatSource};
pub use stat::{format_stat_value, Bucketing, Stat, StatDefinition, StatKind, StatMap};
pub use state::{
    GlobalUpgradeCounts, GlobalUpgradeKey, Loadout, MetaUpgradeLevels, SelectedUpgrade,
    SelectedUpgrades, SelectionState,
};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore, StoreError};
pub use types::{BonusType, Class, Rarity, UpgradeCategory, WeaponTag};

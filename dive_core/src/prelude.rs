//! Prelude module for convenient imports
//!
//! ```rust
//! use dive_core::prelude::*;
//! ```

// Core types
pub use crate::character::CharacterStats;
pub use crate::stat::{Stat, StatMap};
pub use crate::types::{BonusType, Class, Rarity, UpgradeCategory, WeaponTag};

// Static data
pub use crate::config::default_game_data;
pub use crate::data::{ClassMod, GameData, MetaUpgrade, Upgrade, Weapon};

// Calculators
pub use crate::character::calculate_current_stats;
pub use crate::dps::{calculate_dps, calculate_dps_with_all_upgrades, calculate_dps_with_upgrade};
pub use crate::mid_dive::{aggregate_mid_dive_upgrades, MidDiveBonuses};
pub use crate::report::{evaluate_build, BuildReport};

// Selections and persistence
pub use crate::source::GearBonuses;
pub use crate::state::{GlobalUpgradeKey, SelectedUpgrade, SelectionState};
pub use crate::store::{JsonFileStore, KeyValueStore, MemoryStore};

pub use crate::error::CalcError;

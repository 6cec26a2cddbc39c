//! ClassMod - per-class loadout modifiers

use super::upgrade::tags_apply;
use super::Weapon;
use crate::stat::Stat;
use crate::types::{Class, WeaponTag};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Immutable class mod definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassMod {
    pub name: String,
    pub class: Class,
    pub starting_weapon_id: String,
    #[serde(default)]
    pub available_weapon_tags: BTreeSet<WeaponTag>,
    /// Percentage deltas, compounded as `(1 + value)`
    #[serde(default)]
    pub stat_multipliers: BTreeMap<Stat, f64>,
    /// Described in-game triggers; not evaluated
    #[serde(default)]
    pub conditional_effects: Vec<String>,
}

impl ClassMod {
    pub fn multiplier(&self, stat: Stat) -> Option<f64> {
        self.stat_multipliers.get(&stat).copied()
    }

    /// Whether a weapon may be slotted with this class mod
    pub fn can_equip(&self, weapon: &Weapon) -> bool {
        weapon.id == self.starting_weapon_id || tags_apply(&self.available_weapon_tags, &weapon.tags)
    }
}

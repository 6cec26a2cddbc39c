//! Static data tables - weapons, upgrades, meta upgrades, class mods
//!
//! Loaded once (see [`crate::config`]) and passed by reference into the
//! calculators. Nothing here is mutated after loading.

mod class_mod;
mod meta_upgrade;
mod upgrade;
mod weapon;

pub use class_mod::ClassMod;
pub use meta_upgrade::MetaUpgrade;
pub use upgrade::{
    does_upgrade_apply_to_weapon, get_upgrade_value, valid_upgrades_for_weapon, RarityValues,
    Upgrade,
};
pub use weapon::Weapon;

use crate::stat::StatMap;
use crate::types::{Class, WeaponTag};
use std::collections::{BTreeMap, BTreeSet};

/// Base stat values for one class
pub type ClassBaseStats = StatMap;

/// All static tables
#[derive(Debug, Clone, Default)]
pub struct GameData {
    pub weapons: Vec<Weapon>,
    pub upgrades: Vec<Upgrade>,
    pub meta_upgrades: Vec<MetaUpgrade>,
    pub class_mods: Vec<ClassMod>,
    pub class_base_stats: BTreeMap<Class, ClassBaseStats>,
}

impl GameData {
    pub fn weapon(&self, id: &str) -> Option<&Weapon> {
        self.weapons.iter().find(|w| w.id == id)
    }

    /// First upgrade with this name
    pub fn upgrade(&self, name: &str) -> Option<&Upgrade> {
        self.upgrades.iter().find(|u| u.name == name)
    }

    /// Upgrade identified by name and exact tag set
    pub fn upgrade_with_tags(&self, name: &str, tags: &BTreeSet<WeaponTag>) -> Option<&Upgrade> {
        self.upgrades.iter().find(|u| u.matches(name, tags))
    }

    pub fn meta_upgrade(&self, id: &str) -> Option<&MetaUpgrade> {
        self.meta_upgrades.iter().find(|m| m.id == id)
    }

    pub fn class_mod(&self, name: &str) -> Option<&ClassMod> {
        self.class_mods.iter().find(|c| c.name == name)
    }

    pub fn class_mods_for(&self, class: Class) -> impl Iterator<Item = &ClassMod> {
        self.class_mods.iter().filter(move |c| c.class == class)
    }

    /// Base stats of a class, empty when the class has none
    pub fn base_stats(&self, class: Class) -> ClassBaseStats {
        self.class_base_stats.get(&class).cloned().unwrap_or_default()
    }

    /// Upgrades that can go on a weapon
    pub fn valid_upgrades_for(&self, weapon: &Weapon) -> Vec<&Upgrade> {
        valid_upgrades_for_weapon(weapon, &self.upgrades)
    }
}

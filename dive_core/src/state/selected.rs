//! SelectedUpgrades - mid-dive upgrades pinned to a weapon

use crate::types::Rarity;
use serde::{Deserialize, Serialize};

/// Default cap on the total number of selected upgrades
pub const MAX_SELECTED_UPGRADES: usize = 50;

/// One applied upgrade instance
///
/// `value` is the bonus resolved at selection time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedUpgrade {
    pub weapon_id: String,
    pub upgrade_name: String,
    pub rarity: Rarity,
    pub value: f64,
}

impl SelectedUpgrade {
    fn is(&self, weapon_id: &str, upgrade_name: &str, rarity: Rarity) -> bool {
        self.weapon_id == weapon_id && self.upgrade_name == upgrade_name && self.rarity == rarity
    }
}

/// Bounded multiset of applied upgrades
///
/// The same weapon/upgrade/rarity triple may appear more than once; every
/// instance stacks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectedUpgrades {
    upgrades: Vec<SelectedUpgrade>,
    #[serde(skip, default = "default_capacity")]
    capacity: usize,
}

fn default_capacity() -> usize {
    MAX_SELECTED_UPGRADES
}

impl Default for SelectedUpgrades {
    fn default() -> Self {
        Self::with_capacity(default_capacity())
    }
}

impl SelectedUpgrades {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        SelectedUpgrades {
            upgrades: Vec::new(),
            capacity,
        }
    }

    /// Add an instance; returns `false` once the cap is reached
    pub fn add(&mut self, upgrade: SelectedUpgrade) -> bool {
        if self.upgrades.len() >= self.capacity {
            tracing::debug!(
                capacity = self.capacity,
                upgrade = %upgrade.upgrade_name,
                "Selected upgrade cap reached"
            );
            return false;
        }
        self.upgrades.push(upgrade);
        true
    }

    /// Remove one matching instance
    pub fn remove_one(&mut self, weapon_id: &str, upgrade_name: &str, rarity: Rarity) -> bool {
        match self
            .upgrades
            .iter()
            .position(|u| u.is(weapon_id, upgrade_name, rarity))
        {
            Some(index) => {
                self.upgrades.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn count(&self, weapon_id: &str, upgrade_name: &str, rarity: Rarity) -> usize {
        self.upgrades
            .iter()
            .filter(|u| u.is(weapon_id, upgrade_name, rarity))
            .count()
    }

    /// Drop every instance applied to a weapon
    pub fn clear_weapon(&mut self, weapon_id: &str) {
        self.upgrades.retain(|u| u.weapon_id != weapon_id);
    }

    pub fn clear(&mut self) {
        self.upgrades.clear();
    }

    /// Keep at most the cap, discarding the newest entries
    pub(crate) fn truncate_to_capacity(&mut self) {
        if self.upgrades.len() > self.capacity {
            tracing::warn!(
                stored = self.upgrades.len(),
                capacity = self.capacity,
                "Truncating selected upgrades to cap"
            );
            self.upgrades.truncate(self.capacity);
        }
    }

    pub fn len(&self) -> usize {
        self.upgrades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.upgrades.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn as_slice(&self) -> &[SelectedUpgrade] {
        &self.upgrades
    }

    pub fn for_weapon<'a>(&'a self, weapon_id: &'a str) -> impl Iterator<Item = &'a SelectedUpgrade> {
        self.upgrades.iter().filter(move |u| u.weapon_id == weapon_id)
    }
}

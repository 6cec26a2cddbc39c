//! Runtime selection state - everything the player has picked
//!
//! The calculators never touch this directly; [`crate::report::evaluate_build`]
//! reads a snapshot of it.

mod global;
mod loadout;
mod meta_levels;
mod selected;

pub use global::{GlobalUpgradeCounts, GlobalUpgradeKey};
pub use loadout::{Loadout, LOADOUT_SLOTS};
pub use meta_levels::MetaUpgradeLevels;
pub use selected::{SelectedUpgrade, SelectedUpgrades, MAX_SELECTED_UPGRADES};

use crate::data::GameData;
use crate::source::GearBonuses;
use crate::store::{KeyValueStore, StoreError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Store keys, one per collection
pub mod keys {
    pub const CLASS_MOD: &str = "selectedClassMod";
    pub const META_LEVELS: &str = "metaUpgradeLevels";
    pub const SELECTED_UPGRADES: &str = "selectedUpgrades";
    pub const GLOBAL_UPGRADES: &str = "globalUpgradeCounts";
    pub const LOADOUT: &str = "equippedWeapons";
    pub const GEAR: &str = "gearBonuses";
}

/// Player selections owned by the presentation layer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionState {
    pub class_mod: Option<String>,
    pub meta_levels: MetaUpgradeLevels,
    pub selected_upgrades: SelectedUpgrades,
    pub global_upgrades: GlobalUpgradeCounts,
    pub loadout: Loadout,
    pub gear: GearBonuses,
}

impl SelectionState {
    /// Fresh state with an explicit level 0 for every meta upgrade
    pub fn new(data: &GameData) -> Self {
        let mut state = SelectionState::default();
        state.meta_levels.reset_all(&data.meta_upgrades);
        state
    }

    /// Read every collection from a store
    ///
    /// Missing or unreadable entries fall back to their defaults. Meta levels
    /// are clamped against `data` and a stale class mod name is dropped.
    pub fn load(store: &dyn KeyValueStore, data: &GameData) -> Self {
        let mut state = SelectionState {
            class_mod: read_or_default(store, keys::CLASS_MOD),
            meta_levels: read_or_default(store, keys::META_LEVELS),
            selected_upgrades: read_or_default(store, keys::SELECTED_UPGRADES),
            global_upgrades: read_or_default(store, keys::GLOBAL_UPGRADES),
            loadout: read_or_default(store, keys::LOADOUT),
            gear: read_or_default(store, keys::GEAR),
        };

        state.meta_levels.normalize(&data.meta_upgrades);
        state.selected_upgrades.truncate_to_capacity();
        if let Some(name) = &state.class_mod {
            if data.class_mod(name).is_none() {
                tracing::warn!(class_mod = %name, "Dropping unknown class mod selection");
                state.class_mod = None;
            }
        }

        tracing::debug!(
            class_mod = ?state.class_mod,
            selected = state.selected_upgrades.len(),
            global = state.global_upgrades.len(),
            "Loaded selection state"
        );
        state
    }

    /// Write every collection; failures are logged and skipped
    pub fn save(&self, store: &dyn KeyValueStore) {
        write_or_warn(store, keys::CLASS_MOD, &self.class_mod);
        write_or_warn(store, keys::META_LEVELS, &self.meta_levels);
        write_or_warn(store, keys::SELECTED_UPGRADES, &self.selected_upgrades);
        write_or_warn(store, keys::GLOBAL_UPGRADES, &self.global_upgrades);
        write_or_warn(store, keys::LOADOUT, &self.loadout);
        write_or_warn(store, keys::GEAR, &self.gear);
    }

    /// Clear all run-scoped picks, keeping meta progression and class mod
    pub fn reset_run(&mut self) {
        self.selected_upgrades.clear();
        self.global_upgrades.reset();
    }
}

fn read_or_default<T: DeserializeOwned + Default>(store: &dyn KeyValueStore, key: &str) -> T {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return T::default(),
        Err(e) => {
            tracing::warn!(key, error = %e, "Failed to read selection, using default");
            return T::default();
        }
    };
    serde_json::from_str(&raw).unwrap_or_else(|e| {
        tracing::warn!(key, error = %e, "Malformed selection, using default");
        T::default()
    })
}

fn write_or_warn<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) {
    let result = serde_json::to_string(value)
        .map_err(StoreError::from)
        .and_then(|json| store.set(key, &json));
    if let Err(e) = result {
        tracing::warn!(key, error = %e, "Failed to save selection, skipping");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_game_data;
    use crate::store::{MemoryStore, Result as StoreResult};
    use crate::types::{Rarity, WeaponTag};

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> StoreResult<Option<String>> {
            Err(StoreError::LockPoisoned)
        }

        fn set(&self, _key: &str, _value: &str) -> StoreResult<()> {
            Err(StoreError::LockPoisoned)
        }
    }

    #[test]
    fn test_empty_store_gives_defaults() {
        let data = default_game_data().unwrap();
        let state = SelectionState::load(&MemoryStore::new(), &data);

        assert_eq!(state.class_mod, None);
        assert!(state.selected_upgrades.is_empty());
        assert_eq!(state.meta_levels.len(), data.meta_upgrades.len());
        assert!(state.meta_levels.iter().all(|(_, level)| level == 0));
    }

    #[test]
    fn test_round_trip() {
        let data = default_game_data().unwrap();
        let meta = &data.meta_upgrades[0];
        let mut state = SelectionState::new(&data);
        state.class_mod = Some(data.class_mods[0].name.clone());
        state.meta_levels.set(&data.meta_upgrades, &meta.id, 2);
        state.loadout.equip(0, data.weapons[0].id.clone()).unwrap();
        state.global_upgrades.add(GlobalUpgradeKey::new("Kinetic Mastery", [WeaponTag::Kinetic], Rarity::Epic));
        state.selected_upgrades.add(SelectedUpgrade {
            weapon_id: data.weapons[0].id.clone(),
            upgrade_name: "Damage Boost".to_string(),
            rarity: Rarity::Rare,
            value: 0.15,
        });
        state.gear.add_percent(crate::stat::Stat::Armor, 0.1);

        let store = MemoryStore::new();
        state.save(&store);

        assert_eq!(SelectionState::load(&store, &data), state);
    }

    #[test]
    fn test_levels_clamped_on_load() {
        let data = default_game_data().unwrap();
        let meta = &data.meta_upgrades[0];
        let store = MemoryStore::new();
        store
            .set(keys::META_LEVELS, &format!(r#"{{"{}": 999}}"#, meta.id))
            .unwrap();

        let state = SelectionState::load(&store, &data);
        assert_eq!(state.meta_levels.level(&meta.id), meta.max_level);
    }

    #[test]
    fn test_one_bad_level_keeps_the_others() {
        let data = default_game_data().unwrap();
        let first = &data.meta_upgrades[0];
        let second = &data.meta_upgrades[1];
        let store = MemoryStore::new();
        store
            .set(
                keys::META_LEVELS,
                &format!(r#"{{"{}": 1, "{}": -1}}"#, first.id, second.id),
            )
            .unwrap();

        let state = SelectionState::load(&store, &data);
        assert_eq!(state.meta_levels.level(&first.id), 1);
        assert_eq!(state.meta_levels.level(&second.id), 0);
    }

    #[test]
    fn test_malformed_entries_fall_back() {
        let data = default_game_data().unwrap();
        let store = MemoryStore::new();
        store.set(keys::SELECTED_UPGRADES, "{oops").unwrap();
        store.set(keys::CLASS_MOD, r#""Retired Mod""#).unwrap();

        let state = SelectionState::load(&store, &data);
        assert!(state.selected_upgrades.is_empty());
        assert_eq!(state.class_mod, None);
    }

    #[test]
    fn test_broken_store_never_fails() {
        let data = default_game_data().unwrap();
        let state = SelectionState::load(&BrokenStore, &data);
        assert_eq!(state, SelectionState::new(&data));
        state.save(&BrokenStore);
    }
}

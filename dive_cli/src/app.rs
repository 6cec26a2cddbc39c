//! Application state: static tables, current selections and their store

use anyhow::{bail, Context, Result};
use dive_core::data::Upgrade;
use dive_core::prelude::*;
use dive_core::report::WeaponFailure;
use dive_core::state::GlobalUpgradeKey;
use std::collections::BTreeSet;
use std::path::Path;

pub struct App {
    pub data: GameData,
    pub selection: SelectionState,
    store: JsonFileStore,
}

impl App {
    /// Load tables and the saved selections
    pub fn open(data_dir: Option<&Path>, state_path: &Path) -> Result<Self> {
        let data = match data_dir {
            Some(dir) => GameData::load_from_dir(dir)
                .with_context(|| format!("loading tables from {}", dir.display()))?,
            None => default_game_data().context("loading built-in tables")?,
        };
        let store = JsonFileStore::new(state_path)
            .with_context(|| format!("opening selections at {}", state_path.display()))?;
        let selection = SelectionState::load(&store, &data);

        Ok(App {
            data,
            selection,
            store,
        })
    }

    pub fn save(&self) {
        self.selection.save(&self.store);
    }

    pub fn evaluate(&self) -> BuildReport {
        evaluate_build(&self.data, &self.selection)
    }

    /// Ids of equipped weapons that currently fail to evaluate
    fn failing_weapons(&self) -> BTreeSet<String> {
        self.evaluate()
            .failures
            .into_values()
            .map(|f| f.weapon_id)
            .collect()
    }

    /// First weapon that fails now but was fine before a change
    fn newly_failing(&self, before: &BTreeSet<String>) -> Option<WeaponFailure> {
        self.evaluate()
            .failures
            .into_values()
            .find(|f| !before.contains(&f.weapon_id))
    }

    /// Select a class mod and put its starting weapon in the first slot
    pub fn select_class_mod(&mut self, name: &str) -> Result<()> {
        let Some(class_mod) = self.data.class_mod(name) else {
            bail!("unknown class mod '{name}'");
        };
        self.selection.class_mod = Some(class_mod.name.clone());
        self.selection.loadout.clear();
        self.selection
            .loadout
            .equip(0, class_mod.starting_weapon_id.clone())?;
        Ok(())
    }

    pub fn equip(&mut self, slot: usize, weapon_id: &str) -> Result<()> {
        let Some(weapon) = self.data.weapon(weapon_id) else {
            bail!("unknown weapon '{weapon_id}'");
        };
        if let Some(class_mod) = self
            .selection
            .class_mod
            .as_deref()
            .and_then(|name| self.data.class_mod(name))
        {
            if !class_mod.can_equip(weapon) {
                bail!("{} cannot equip {}", class_mod.name, weapon.name);
            }
        }
        self.selection.loadout.equip(slot, weapon.id.clone())?;
        Ok(())
    }

    pub fn unequip(&mut self, slot: usize) -> Result<()> {
        if let Some(weapon_id) = self.selection.loadout.unequip(slot)? {
            self.selection.selected_upgrades.clear_weapon(&weapon_id);
        }
        Ok(())
    }

    /// Pin an upgrade to an equipped weapon at a rarity
    pub fn add_upgrade(&mut self, weapon_id: &str, name: &str, rarity: Rarity) -> Result<()> {
        let Some(weapon) = self.data.weapon(weapon_id) else {
            bail!("unknown weapon '{weapon_id}'");
        };
        let Some(upgrade) = self
            .data
            .valid_upgrades_for(weapon)
            .into_iter()
            .find(|u| u.name == name)
        else {
            bail!("'{name}' cannot be applied to {}", weapon.name);
        };
        let value = upgrade.require_value(rarity)?;
        let pick = SelectedUpgrade {
            weapon_id: weapon.id.clone(),
            upgrade_name: upgrade.name.clone(),
            rarity,
            value,
        };

        let before = self.failing_weapons();
        if !self.selection.selected_upgrades.add(pick.clone()) {
            bail!(
                "upgrade limit of {} reached",
                self.selection.selected_upgrades.capacity()
            );
        }
        if let Some(failure) = self.newly_failing(&before) {
            self.selection
                .selected_upgrades
                .remove_one(&pick.weapon_id, &pick.upgrade_name, rarity);
            bail!("{rarity} '{name}' would break {}: {}", failure.name, failure.error);
        }
        Ok(())
    }

    pub fn undo_upgrade(&mut self, weapon_id: &str, name: &str, rarity: Rarity) -> Result<()> {
        if !self
            .selection
            .selected_upgrades
            .remove_one(weapon_id, name, rarity)
        {
            bail!("no {rarity} '{name}' on '{weapon_id}' to undo");
        }
        Ok(())
    }

    pub fn add_global(&mut self, key: GlobalUpgradeKey) -> Result<()> {
        let Some(upgrade) = self.data.upgrade_with_tags(&key.name, &key.tags) else {
            bail!("no upgrade '{}' with tags {:?}", key.name, key.tags);
        };
        upgrade.require_value(key.rarity)?;

        let before = self.failing_weapons();
        self.selection.global_upgrades.add(key.clone());
        if let Some(failure) = self.newly_failing(&before) {
            self.selection.global_upgrades.remove_one(&key);
            bail!("'{key}' would break {}: {}", failure.name, failure.error);
        }
        Ok(())
    }

    pub fn remove_global(&mut self, key: &GlobalUpgradeKey) -> Result<()> {
        if !self.selection.global_upgrades.remove_one(key) {
            bail!("'{key}' is not selected");
        }
        Ok(())
    }

    /// Upgrades valid for a weapon, for listing
    pub fn upgrades_for(&self, weapon_id: &str) -> Result<Vec<&Upgrade>> {
        let Some(weapon) = self.data.weapon(weapon_id) else {
            bail!("unknown weapon '{weapon_id}'");
        };
        Ok(self.data.valid_upgrades_for(weapon))
    }
}

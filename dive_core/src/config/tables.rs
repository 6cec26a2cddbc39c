//! Static data table loading and validation

use super::{parse_toml, read_table, ConfigError};
use crate::data::{ClassBaseStats, ClassMod, GameData, MetaUpgrade, Upgrade, Weapon};
use crate::types::Class;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WeaponsFile {
    weapons: Vec<Weapon>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct UpgradesFile {
    upgrades: Vec<Upgrade>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct MetaUpgradesFile {
    meta_upgrades: Vec<MetaUpgrade>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ClassModsFile {
    class_mods: Vec<ClassMod>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ClassesFile {
    classes: BTreeMap<Class, ClassBaseStats>,
}

const WEAPONS: &str = "weapons.toml";
const UPGRADES: &str = "upgrades.toml";
const META_UPGRADES: &str = "meta_upgrades.toml";
const CLASS_MODS: &str = "class_mods.toml";
const CLASSES: &str = "classes.toml";

/// Raw TOML text of every table
#[derive(Debug, Clone, Copy)]
pub struct TableSources<'a> {
    pub weapons: &'a str,
    pub upgrades: &'a str,
    pub meta_upgrades: &'a str,
    pub class_mods: &'a str,
    pub classes: &'a str,
}

impl TableSources<'static> {
    /// Tables shipped with the crate
    pub fn embedded() -> Self {
        TableSources {
            weapons: include_str!("../../config/weapons.toml"),
            upgrades: include_str!("../../config/upgrades.toml"),
            meta_upgrades: include_str!("../../config/meta_upgrades.toml"),
            class_mods: include_str!("../../config/class_mods.toml"),
            classes: include_str!("../../config/classes.toml"),
        }
    }
}

/// Parse and validate all tables
pub fn parse_game_data(sources: TableSources<'_>) -> Result<GameData, ConfigError> {
    let weapons: WeaponsFile = parse_toml(WEAPONS, sources.weapons)?;
    let upgrades: UpgradesFile = parse_toml(UPGRADES, sources.upgrades)?;
    let meta_upgrades: MetaUpgradesFile = parse_toml(META_UPGRADES, sources.meta_upgrades)?;
    let class_mods: ClassModsFile = parse_toml(CLASS_MODS, sources.class_mods)?;
    let classes: ClassesFile = parse_toml(CLASSES, sources.classes)?;

    let data = GameData {
        weapons: weapons.weapons,
        upgrades: upgrades.upgrades,
        meta_upgrades: meta_upgrades.meta_upgrades,
        class_mods: class_mods.class_mods,
        class_base_stats: classes.classes,
    };
    validate(&data)?;

    tracing::debug!(
        weapons = data.weapons.len(),
        upgrades = data.upgrades.len(),
        meta_upgrades = data.meta_upgrades.len(),
        class_mods = data.class_mods.len(),
        "Loaded game data"
    );
    Ok(data)
}

/// Load all tables from a directory holding the five TOML files
pub fn load_game_data(dir: &Path) -> Result<GameData, ConfigError> {
    let weapons = read_table(&dir.join(WEAPONS))?;
    let upgrades = read_table(&dir.join(UPGRADES))?;
    let meta_upgrades = read_table(&dir.join(META_UPGRADES))?;
    let class_mods = read_table(&dir.join(CLASS_MODS))?;
    let classes = read_table(&dir.join(CLASSES))?;

    let data = parse_game_data(TableSources {
        weapons: &weapons,
        upgrades: &upgrades,
        meta_upgrades: &meta_upgrades,
        class_mods: &class_mods,
        classes: &classes,
    })?;
    tracing::info!(dir = %dir.display(), "Loaded game data");
    Ok(data)
}

/// Get the tables shipped with the crate
pub fn default_game_data() -> Result<GameData, ConfigError> {
    parse_game_data(TableSources::embedded())
}

impl GameData {
    /// See [`load_game_data`]
    pub fn load_from_dir(dir: &Path) -> Result<Self, ConfigError> {
        load_game_data(dir)
    }
}

fn validate(data: &GameData) -> Result<(), ConfigError> {
    let mut weapon_ids = HashSet::new();
    for weapon in &data.weapons {
        if !weapon_ids.insert(weapon.id.as_str()) {
            return Err(invalid(format!("duplicate weapon id '{}'", weapon.id)));
        }
        if weapon.reload_time <= 0.0 {
            return Err(invalid(format!("weapon '{}' must have a positive reload_time", weapon.id)));
        }
    }

    let mut upgrade_keys = HashSet::new();
    for upgrade in &data.upgrades {
        if !upgrade_keys.insert((upgrade.name.as_str(), &upgrade.tags)) {
            return Err(invalid(format!(
                "duplicate upgrade '{}' with tags {:?}",
                upgrade.name, upgrade.tags
            )));
        }
    }

    let mut meta_ids = HashSet::new();
    for meta in &data.meta_upgrades {
        if !meta_ids.insert(meta.id.as_str()) {
            return Err(invalid(format!("duplicate meta upgrade id '{}'", meta.id)));
        }
        if meta.bonus_values.len() != meta.max_level as usize {
            return Err(invalid(format!(
                "meta upgrade '{}' has {} bonus values for max level {}",
                meta.id,
                meta.bonus_values.len(),
                meta.max_level
            )));
        }
    }

    let mut class_mod_names = HashSet::new();
    for class_mod in &data.class_mods {
        if !class_mod_names.insert(class_mod.name.as_str()) {
            return Err(invalid(format!("duplicate class mod '{}'", class_mod.name)));
        }
        if !weapon_ids.contains(class_mod.starting_weapon_id.as_str()) {
            return Err(invalid(format!(
                "class mod '{}' starts with unknown weapon '{}'",
                class_mod.name, class_mod.starting_weapon_id
            )));
        }
        if !data.class_base_stats.contains_key(&class_mod.class) {
            return Err(invalid(format!(
                "class mod '{}' uses class '{}' without base stats",
                class_mod.name, class_mod.class
            )));
        }
    }

    Ok(())
}

fn invalid(message: String) -> ConfigError {
    ConfigError::ValidationError(message)
}

//! MetaUpgradeLevels - persistent progression levels keyed by meta upgrade id

use crate::data::MetaUpgrade;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Current level of each meta upgrade; absent ids are level 0
///
/// Every write clamps into `[0, max_level]` of the matching definition.
/// Persisted levels are read leniently: negatives become 0, fractions are
/// truncated and non-numeric entries are skipped, so one bad entry never
/// discards the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, StoredLevel>", into = "BTreeMap<String, u32>")]
pub struct MetaUpgradeLevels {
    levels: BTreeMap<String, u32>,
}

/// A persisted level as it appears on disk
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredLevel {
    Number(f64),
    Other(serde::de::IgnoredAny),
}

impl From<BTreeMap<String, StoredLevel>> for MetaUpgradeLevels {
    fn from(raw: BTreeMap<String, StoredLevel>) -> Self {
        let levels = raw
            .into_iter()
            .filter_map(|(id, stored)| match stored {
                StoredLevel::Number(level) if level.is_finite() => {
                    Some((id, level.clamp(0.0, u32::MAX as f64) as u32))
                }
                _ => {
                    tracing::warn!(id = %id, "Skipping non-numeric meta level");
                    None
                }
            })
            .collect();
        Self { levels }
    }
}

impl From<MetaUpgradeLevels> for BTreeMap<String, u32> {
    fn from(levels: MetaUpgradeLevels) -> Self {
        levels.levels
    }
}

impl MetaUpgradeLevels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current level of an upgrade
    pub fn level(&self, id: &str) -> u32 {
        self.levels.get(id).copied().unwrap_or(0)
    }

    /// Set a level, clamped to the upgrade's bounds
    ///
    /// Returns `false` and leaves the levels untouched when `id` names no
    /// known meta upgrade.
    pub fn set(&mut self, upgrades: &[MetaUpgrade], id: &str, level: i64) -> bool {
        let Some(upgrade) = upgrades.iter().find(|u| u.id == id) else {
            tracing::trace!(id, "Ignoring level for unknown meta upgrade");
            return false;
        };
        self.levels.insert(upgrade.id.clone(), upgrade.clamp_level(level));
        true
    }

    /// Raise a level by one, stopping at the maximum
    pub fn increment(&mut self, upgrades: &[MetaUpgrade], id: &str) -> bool {
        let next = self.level(id) as i64 + 1;
        self.set(upgrades, id, next)
    }

    /// Lower a level by one, stopping at zero
    pub fn decrement(&mut self, upgrades: &[MetaUpgrade], id: &str) -> bool {
        let next = self.level(id) as i64 - 1;
        self.set(upgrades, id, next)
    }

    /// Put every known upgrade back to level 0
    pub fn reset_all(&mut self, upgrades: &[MetaUpgrade]) {
        self.levels = upgrades.iter().map(|u| (u.id.clone(), 0)).collect();
    }

    /// Re-clamp stored levels against the definitions
    ///
    /// Unknown ids are dropped and every known id gets an explicit entry.
    pub fn normalize(&mut self, upgrades: &[MetaUpgrade]) {
        let mut levels = BTreeMap::new();
        for upgrade in upgrades {
            let stored = self.level(&upgrade.id);
            levels.insert(upgrade.id.clone(), upgrade.clamp_level(stored as i64));
        }
        for id in self.levels.keys().filter(|id| !levels.contains_key(*id)) {
            tracing::warn!(id = %id, "Dropping level for unknown meta upgrade");
        }
        self.levels = levels;
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.levels.iter().map(|(id, level)| (id.as_str(), *level))
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

//! GlobalUpgradeCounts - tag-mastery upgrades chosen without a weapon

use crate::error::CalcError;
use crate::types::{Rarity, WeaponTag};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

const NO_TAGS: &str = "none";

/// Identity of a global upgrade pick
///
/// The string form is `name-tag1,tag2-rarity`, with `none` standing in for
/// an empty tag set. It is parsed from the right, so names may contain `-`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GlobalUpgradeKey {
    pub name: String,
    pub tags: BTreeSet<WeaponTag>,
    pub rarity: Rarity,
}

impl GlobalUpgradeKey {
    pub fn new(name: impl Into<String>, tags: impl IntoIterator<Item = WeaponTag>, rarity: Rarity) -> Self {
        GlobalUpgradeKey {
            name: name.into(),
            tags: tags.into_iter().collect(),
            rarity,
        }
    }
}

impl fmt::Display for GlobalUpgradeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tags = if self.tags.is_empty() {
            NO_TAGS.to_string()
        } else {
            self.tags
                .iter()
                .map(|t| t.as_ref())
                .collect::<Vec<_>>()
                .join(",")
        };
        write!(f, "{}-{}-{}", self.name, tags, self.rarity)
    }
}

impl FromStr for GlobalUpgradeKey {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || CalcError::InvalidArgument(format!("malformed global upgrade key '{s}'"));

        let mut parts = s.rsplitn(3, '-');
        let rarity = parts.next().ok_or_else(malformed)?;
        let tags = parts.next().ok_or_else(malformed)?;
        let name = parts.next().filter(|n| !n.is_empty()).ok_or_else(malformed)?;

        let rarity = Rarity::from_str(rarity).map_err(|_| malformed())?;
        let tags = if tags == NO_TAGS {
            BTreeSet::new()
        } else {
            tags.split(',')
                .map(WeaponTag::from_str)
                .collect::<Result<BTreeSet<_>, _>>()
                .map_err(|_| malformed())?
        };

        Ok(GlobalUpgradeKey {
            name: name.to_string(),
            tags,
            rarity,
        })
    }
}

/// Pick counts per global upgrade; zero counts are never stored
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, u32>", into = "BTreeMap<String, u32>")]
pub struct GlobalUpgradeCounts {
    counts: BTreeMap<GlobalUpgradeKey, u32>,
}

impl GlobalUpgradeCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: GlobalUpgradeKey) {
        *self.counts.entry(key).or_insert(0) += 1;
    }

    /// Decrement a count, pruning it at zero
    pub fn remove_one(&mut self, key: &GlobalUpgradeKey) -> bool {
        let Some(count) = self.counts.get_mut(key) else {
            return false;
        };
        *count -= 1;
        if *count == 0 {
            self.counts.remove(key);
        }
        true
    }

    pub fn count(&self, key: &GlobalUpgradeKey) -> u32 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub fn reset(&mut self) {
        self.counts.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&GlobalUpgradeKey, u32)> {
        self.counts.iter().map(|(k, c)| (k, *c))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl FromIterator<(GlobalUpgradeKey, u32)> for GlobalUpgradeCounts {
    fn from_iter<I: IntoIterator<Item = (GlobalUpgradeKey, u32)>>(iter: I) -> Self {
        let mut counts = GlobalUpgradeCounts::new();
        for (key, count) in iter.into_iter().filter(|(_, c)| *c > 0) {
            *counts.counts.entry(key).or_insert(0) += count;
        }
        counts
    }
}

impl From<BTreeMap<String, u32>> for GlobalUpgradeCounts {
    fn from(raw: BTreeMap<String, u32>) -> Self {
        raw.into_iter()
            .filter_map(|(key, count)| match key.parse::<GlobalUpgradeKey>() {
                Ok(key) => Some((key, count)),
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping stale global upgrade entry");
                    None
                }
            })
            .collect()
    }
}

impl From<GlobalUpgradeCounts> for BTreeMap<String, u32> {
    fn from(counts: GlobalUpgradeCounts) -> Self {
        counts
            .counts
            .into_iter()
            .map(|(key, count)| (key.to_string(), count))
            .collect()
    }
}

//! Upgrade - mid-dive upgrade records, value resolution and tag matching

use super::Weapon;
use crate::error::CalcError;
use crate::stat::Stat;
use crate::types::{Rarity, UpgradeCategory, WeaponTag};
use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;

/// Marker for an unavailable rarity slot in data files
const UNAVAILABLE: &str = "none";

/// Bonus value per rarity, one slot per tier ordered common..legendary
///
/// An empty slot means the upgrade never rolls at that rarity. In data files
/// the table is written as a 5-element array where unavailable slots are the
/// string `"none"`, e.g. `[0.10, 0.15, 0.25, "none", "none"]`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RarityValues([Option<f64>; Rarity::COUNT]);

impl RarityValues {
    pub fn new(values: [Option<f64>; Rarity::COUNT]) -> Self {
        RarityValues(values)
    }

    /// Same value at every rarity
    pub fn uniform(value: f64) -> Self {
        RarityValues([Some(value); Rarity::COUNT])
    }

    pub fn get(&self, rarity: Rarity) -> Option<f64> {
        self.0.get(rarity.index()).copied().flatten()
    }

    /// Rarities that have a value
    pub fn available(&self) -> impl Iterator<Item = Rarity> + '_ {
        Rarity::all().iter().copied().filter(|r| self.get(*r).is_some())
    }
}

impl Serialize for RarityValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(Rarity::COUNT))?;
        for slot in &self.0 {
            match slot {
                Some(value) => seq.serialize_element(value)?,
                None => seq.serialize_element(UNAVAILABLE)?,
            }
        }
        seq.end()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Slot {
    Value(f64),
    Marker(String),
}

impl<'de> Deserialize<'de> for RarityValues {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SlotsVisitor;

        impl<'de> Visitor<'de> for SlotsVisitor {
            type Value = RarityValues;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "an array of {} numbers or \"{}\"", Rarity::COUNT, UNAVAILABLE)
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<RarityValues, A::Error> {
                let mut slots = [None; Rarity::COUNT];
                let mut len = 0;
                while let Some(slot) = seq.next_element::<Slot>()? {
                    if len < Rarity::COUNT {
                        slots[len] = match slot {
                            Slot::Value(value) => Some(value),
                            Slot::Marker(m) if m == UNAVAILABLE => None,
                            Slot::Marker(m) => {
                                return Err(de::Error::invalid_value(
                                    de::Unexpected::Str(&m),
                                    &self,
                                ))
                            }
                        };
                    }
                    len += 1;
                }
                if len != Rarity::COUNT {
                    return Err(de::Error::invalid_length(len, &self));
                }
                Ok(RarityValues(slots))
            }
        }

        deserializer.deserialize_seq(SlotsVisitor)
    }
}

/// Immutable mid-dive upgrade definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Upgrade {
    pub name: String,
    pub stat: Stat,
    /// Empty for player-only upgrades
    #[serde(default)]
    pub tags: BTreeSet<WeaponTag>,
    pub category: UpgradeCategory,
    pub values: RarityValues,
    #[serde(default)]
    pub description: Option<String>,
}

impl Upgrade {
    /// Bonus at a rarity, `None` when the upgrade doesn't roll at it
    pub fn value(&self, rarity: Rarity) -> Option<f64> {
        self.values.get(rarity)
    }

    /// Bonus at a rarity, failing when the slot is empty
    pub fn require_value(&self, rarity: Rarity) -> Result<f64, CalcError> {
        self.value(rarity).ok_or_else(|| CalcError::MissingRarityValue {
            upgrade: self.name.clone(),
            rarity,
        })
    }

    /// Whether this upgrade affects the given weapon
    ///
    /// Player-only upgrades (no tags) never apply; the `all` tag applies to
    /// every weapon; otherwise the tag sets must overlap.
    pub fn applies_to(&self, weapon: &Weapon) -> bool {
        tags_apply(&self.tags, &weapon.tags)
    }

    /// Identity used by tag-mastery selections
    pub fn matches(&self, name: &str, tags: &BTreeSet<WeaponTag>) -> bool {
        self.name == name && &self.tags == tags
    }
}

/// Free-function form of [`Upgrade::value`]
pub fn get_upgrade_value(upgrade: &Upgrade, rarity: Rarity) -> Option<f64> {
    upgrade.value(rarity)
}

/// Free-function form of [`Upgrade::applies_to`]
pub fn does_upgrade_apply_to_weapon(upgrade: &Upgrade, weapon: &Weapon) -> bool {
    upgrade.applies_to(weapon)
}

/// Tag applicability shared by upgrades and class mods
pub(crate) fn tags_apply(required: &BTreeSet<WeaponTag>, weapon_tags: &BTreeSet<WeaponTag>) -> bool {
    if required.is_empty() {
        return false;
    }
    if required.contains(&WeaponTag::All) {
        return true;
    }
    !required.is_disjoint(weapon_tags)
}

/// Upgrades that can be applied to a weapon
pub fn valid_upgrades_for_weapon<'a>(weapon: &Weapon, upgrades: &'a [Upgrade]) -> Vec<&'a Upgrade> {
    upgrades.iter().filter(|u| u.applies_to(weapon)).collect()
}

//! Core enumerations shared by the data tables and the calculators

use serde::{Deserialize, Serialize};

/// Weapon tags used for upgrade applicability
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum WeaponTag {
    /// Wildcard: an upgrade carrying it applies to every weapon
    All,
    Projectile,
    Kinetic,
    Beam,
    Drone,
    Acid,
    Electrical,
    Fire,
    Cold,
    Plasma,
    Explosive,
    Throwable,
    Turret,
}

/// Upgrade rarity tier, ordered common < legendary
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// Number of rarity tiers
    pub const COUNT: usize = 5;

    /// Get all rarities in ascending order
    pub fn all() -> &'static [Rarity] {
        &[
            Rarity::Common,
            Rarity::Uncommon,
            Rarity::Rare,
            Rarity::Epic,
            Rarity::Legendary,
        ]
    }

    /// Slot of this rarity in a 5-slot value table
    pub fn index(self) -> usize {
        match self {
            Rarity::Common => 0,
            Rarity::Uncommon => 1,
            Rarity::Rare => 2,
            Rarity::Epic => 3,
            Rarity::Legendary => 4,
        }
    }
}

/// Playable class
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Class {
    Scout,
    Gunner,
    Engineer,
    Driller,
}

impl Class {
    pub fn all() -> &'static [Class] {
        &[Class::Scout, Class::Gunner, Class::Engineer, Class::Driller]
    }
}

/// Which part of the build a mid-dive upgrade targets
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum UpgradeCategory {
    Weapon,
    Tag,
    Player,
}

/// How a meta upgrade's bonus is layered into character stats
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BonusType {
    /// Compounds as a `(1 + value)` factor
    Percentage,
    /// Added after all multipliers
    Flat,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_rarity_index_follows_order() {
        for (i, rarity) in Rarity::all().iter().enumerate() {
            assert_eq!(rarity.index(), i);
        }
        assert!(Rarity::Common < Rarity::Legendary);
    }

    #[test]
    fn test_string_ids_are_snake_case() {
        assert_eq!(WeaponTag::Projectile.to_string(), "projectile");
        assert_eq!(Rarity::from_str("Legendary").unwrap(), Rarity::Legendary);
        assert_eq!(Class::from_str("driller").unwrap(), Class::Driller);
        assert!(WeaponTag::from_str("laser").is_err());
    }
}

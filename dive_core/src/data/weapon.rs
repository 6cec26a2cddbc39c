//! Weapon - static weapon records

use crate::types::{Class, WeaponTag};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Immutable weapon definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub id: String,
    pub name: String,
    /// Damage per shot
    pub base_damage: f64,
    /// Shots per second
    pub fire_rate: f64,
    pub clip_size: u32,
    /// Seconds
    pub reload_time: f64,
    pub tags: BTreeSet<WeaponTag>,
    pub class: Class,
}

impl Weapon {
    pub fn has_tag(&self, tag: WeaponTag) -> bool {
        self.tags.contains(&tag)
    }
}

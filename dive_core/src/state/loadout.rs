//! Loadout - equipped weapon slots

use crate::error::CalcError;
use serde::{Deserialize, Serialize};

/// Number of weapon slots
pub const LOADOUT_SLOTS: usize = 4;

/// Weapon ids equipped per slot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Loadout {
    slots: [Option<String>; LOADOUT_SLOTS],
}

impl Loadout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Equip a weapon, returning whatever the slot held before
    pub fn equip(&mut self, slot: usize, weapon_id: impl Into<String>) -> Result<Option<String>, CalcError> {
        let entry = self.slot_mut(slot)?;
        Ok(entry.replace(weapon_id.into()))
    }

    pub fn unequip(&mut self, slot: usize) -> Result<Option<String>, CalcError> {
        Ok(self.slot_mut(slot)?.take())
    }

    pub fn get(&self, slot: usize) -> Option<&str> {
        self.slots.get(slot).and_then(|s| s.as_deref())
    }

    /// Occupied slots as `(slot, weapon_id)`
    pub fn equipped(&self) -> impl Iterator<Item = (usize, &str)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_deref().map(|id| (i, id)))
    }

    pub fn contains(&self, weapon_id: &str) -> bool {
        self.equipped().any(|(_, id)| id == weapon_id)
    }

    pub fn clear(&mut self) {
        self.slots = Default::default();
    }

    fn slot_mut(&mut self, slot: usize) -> Result<&mut Option<String>, CalcError> {
        self.slots.get_mut(slot).ok_or_else(|| {
            CalcError::InvalidArgument(format!("weapon slot {slot} out of range (0..{LOADOUT_SLOTS})"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equip_replaces() {
        let mut loadout = Loadout::new();
        assert_eq!(loadout.equip(0, "deepcore-gk2").unwrap(), None);
        assert_eq!(
            loadout.equip(0, "m1000-classic").unwrap(),
            Some("deepcore-gk2".to_string())
        );
        assert_eq!(loadout.get(0), Some("m1000-classic"));
    }

    #[test]
    fn test_out_of_range_slot() {
        let mut loadout = Loadout::new();
        assert!(matches!(
            loadout.equip(LOADOUT_SLOTS, "deepcore-gk2"),
            Err(CalcError::InvalidArgument(_))
        ));
        assert!(loadout.unequip(9).is_err());
        assert_eq!(loadout.get(9), None);
    }

    #[test]
    fn test_equipped_skips_empty_slots() {
        let mut loadout = Loadout::new();
        loadout.equip(1, "cryo-cannon").unwrap();
        loadout.equip(3, "zhukov-nuk17").unwrap();
        loadout.unequip(1).unwrap();

        assert_eq!(loadout.equipped().collect::<Vec<_>>(), vec![(3, "zhukov-nuk17")]);
        assert!(loadout.contains("zhukov-nuk17"));
    }
}

//! Build evaluation - the one recalculation entry point
//!
//! Callers re-run [`evaluate_build`] after any selection change; nothing is
//! cached between calls.

use crate::character::{calculate_current_stats, CharacterStats};
use crate::data::{GameData, Weapon};
use crate::dps::{apply_bonus_layers, calculate_dps, EffectiveWeapon};
use crate::error::CalcError;
use crate::mid_dive::{aggregate_mid_dive_upgrades, MidDiveBonuses};
use crate::state::SelectionState;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Numbers for one equipped weapon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponReport {
    pub weapon_id: String,
    pub name: String,
    /// Stats after mid-dive bonuses and character multipliers
    pub effective: EffectiveWeapon,
    pub mid_dive: MidDiveBonuses,
    pub dps: f64,
}

/// An equipped weapon whose DPS could not be computed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponFailure {
    pub weapon_id: String,
    pub name: String,
    pub error: CalcError,
}

/// Character stats plus one report per occupied weapon slot
///
/// A slot lands in `failures` instead of `weapons` when its numbers are
/// invalid; the rest of the build is still reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildReport {
    pub class_mod: Option<String>,
    pub character: CharacterStats,
    pub weapons: BTreeMap<usize, WeaponReport>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub failures: BTreeMap<usize, WeaponFailure>,
}

impl BuildReport {
    /// Sum of every equipped weapon's DPS
    pub fn total_dps(&self) -> f64 {
        self.weapons.values().map(|w| w.dps).sum()
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Evaluate one weapon against character stats and its mid-dive bonuses
///
/// Fails when the bonus layers leave a reload time at or below zero.
pub fn evaluate_weapon(
    weapon: &Weapon,
    character: &CharacterStats,
    mid_dive: &MidDiveBonuses,
) -> Result<WeaponReport, CalcError> {
    let effective = apply_bonus_layers(
        weapon.base_damage,
        weapon.fire_rate,
        weapon.reload_time,
        weapon.clip_size,
        character,
        mid_dive,
    );
    if effective.reload_time <= 0.0 {
        return Err(CalcError::InvalidArgument(format!(
            "{}: effective reload time {} is not positive",
            weapon.id, effective.reload_time
        )));
    }
    let dps = calculate_dps(
        effective.damage,
        effective.fire_rate,
        effective.reload_time,
        effective.clip_size,
        character.crit_chance(),
        character.crit_damage(),
    )?;

    Ok(WeaponReport {
        weapon_id: weapon.id.clone(),
        name: weapon.name.clone(),
        effective,
        mid_dive: mid_dive.clone(),
        dps,
    })
}

/// Recalculate everything for a selection snapshot
///
/// Equipped ids that no longer name a weapon are skipped. A weapon that
/// fails to evaluate is recorded in [`BuildReport::failures`].
pub fn evaluate_build(data: &GameData, selection: &SelectionState) -> BuildReport {
    let class_mod = selection
        .class_mod
        .as_deref()
        .and_then(|name| data.class_mod(name));
    let base_stats = class_mod
        .map(|m| data.base_stats(m.class))
        .unwrap_or_default();

    let character = calculate_current_stats(
        &base_stats,
        class_mod,
        &data.meta_upgrades,
        &selection.meta_levels,
        &selection.gear.flat_totals(),
        &selection.gear.percent_totals(),
    );

    let mut weapons = BTreeMap::new();
    let mut failures = BTreeMap::new();
    for (slot, weapon_id) in selection.loadout.equipped() {
        let Some(weapon) = data.weapon(weapon_id) else {
            tracing::trace!(slot, weapon_id, "Skipping unknown equipped weapon");
            continue;
        };
        let mid_dive = aggregate_mid_dive_upgrades(
            weapon_id,
            weapon,
            selection.selected_upgrades.as_slice(),
            &selection.global_upgrades,
            &data.upgrades,
        );
        match evaluate_weapon(weapon, &character, &mid_dive) {
            Ok(report) => {
                weapons.insert(slot, report);
            }
            Err(error) => {
                tracing::warn!(slot, weapon_id, error = %error, "Weapon could not be evaluated");
                failures.insert(
                    slot,
                    WeaponFailure {
                        weapon_id: weapon.id.clone(),
                        name: weapon.name.clone(),
                        error,
                    },
                );
            }
        }
    }

    tracing::debug!(
        class_mod = ?class_mod.map(|m| m.name.as_str()),
        weapons = weapons.len(),
        failures = failures.len(),
        "Evaluated build"
    );

    BuildReport {
        class_mod: class_mod.map(|m| m.name.clone()),
        character,
        weapons,
        failures,
    }
}

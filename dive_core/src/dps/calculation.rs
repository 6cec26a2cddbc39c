//! DPS formulas

use crate::character::CharacterStats;
use crate::data::Upgrade;
use crate::error::CalcError;
use crate::mid_dive::MidDiveBonuses;
use crate::stat::Stat;
use crate::types::Rarity;
use serde::{Deserialize, Serialize};

/// Weapon numbers after every bonus layer, ready for [`calculate_dps`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectiveWeapon {
    pub damage: f64,
    pub fire_rate: f64,
    pub reload_time: f64,
    pub clip_size: u32,
}

/// Sustained DPS over full clip cycles
///
/// `average hit = damage * (1 + crit_chance * (crit_damage - 1))` and
/// `cycle = reload_time + (clip_size - 1) / fire_rate`: the first shot fires
/// as the reload finishes. The result is rounded half-up to one decimal.
///
/// A fire rate of 0 cannot cycle, so any clip needing follow-up shots yields
/// 0 DPS. A one-round clip has no follow-up shots and is unaffected.
///
/// # Errors
/// `InvalidArgument` when `reload_time` is 0.
pub fn calculate_dps(
    damage: f64,
    fire_rate: f64,
    reload_time: f64,
    clip_size: u32,
    crit_chance: f64,
    crit_damage: f64,
) -> Result<f64, CalcError> {
    if reload_time == 0.0 {
        return Err(CalcError::InvalidArgument(
            "calculate_dps: reload_time cannot be 0".to_string(),
        ));
    }

    let average_hit = damage * (1.0 + crit_chance * (crit_damage - 1.0));
    let follow_up_shots = f64::from(clip_size.saturating_sub(1));
    let follow_up_time = if follow_up_shots == 0.0 {
        0.0
    } else {
        follow_up_shots / fire_rate
    };
    let cycle_time = reload_time + follow_up_time;

    let dps = average_hit * f64::from(clip_size) / cycle_time;
    Ok(round_tenths(dps))
}

/// Round half-up at the tenths digit
pub fn round_tenths(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

/// DPS with a single mid-dive upgrade applied at `rarity`
///
/// Only damage, fire rate and reload speed upgrades change the result.
///
/// # Errors
/// `MissingRarityValue` when the upgrade has no value at `rarity`, plus
/// anything [`calculate_dps`] rejects.
#[allow(clippy::too_many_arguments)]
pub fn calculate_dps_with_upgrade(
    damage: f64,
    fire_rate: f64,
    reload_time: f64,
    clip_size: u32,
    crit_chance: f64,
    crit_damage: f64,
    upgrade: &Upgrade,
    rarity: Rarity,
) -> Result<f64, CalcError> {
    let value = upgrade.require_value(rarity)?;

    let mut damage = damage;
    let mut fire_rate = fire_rate;
    let mut reload_time = reload_time;
    match upgrade.stat {
        Stat::Damage => damage *= 1.0 + value,
        Stat::FireRate => fire_rate *= 1.0 + value,
        // reload speed shortens reload time
        Stat::ReloadSpeed => reload_time *= 1.0 - value,
        _ => {}
    }

    calculate_dps(damage, fire_rate, reload_time, clip_size, crit_chance, crit_damage)
}

/// Layer mid-dive bonuses, then character multipliers, onto base weapon stats
///
/// The order is fixed: mid-dive bonuses compose first.
pub fn apply_bonus_layers(
    base_damage: f64,
    fire_rate: f64,
    reload_time: f64,
    clip_size: u32,
    character: &CharacterStats,
    mid_dive: &MidDiveBonuses,
) -> EffectiveWeapon {
    let mut damage = base_damage * (1.0 + mid_dive.get(Stat::Damage));
    let fire_rate = fire_rate * (1.0 + mid_dive.get(Stat::FireRate));
    let mut reload_time = reload_time * (1.0 - mid_dive.get(Stat::ReloadSpeed));

    damage *= character.damage();
    reload_time /= character.reload_speed();

    EffectiveWeapon {
        damage,
        fire_rate,
        reload_time,
        clip_size,
    }
}

/// DPS with every bonus layer applied
///
/// Crit chance and crit damage come from the character stats.
pub fn calculate_dps_with_all_upgrades(
    base_damage: f64,
    fire_rate: f64,
    reload_time: f64,
    clip_size: u32,
    character: &CharacterStats,
    mid_dive: &MidDiveBonuses,
) -> Result<f64, CalcError> {
    let weapon = apply_bonus_layers(base_damage, fire_rate, reload_time, clip_size, character, mid_dive);
    calculate_dps(
        weapon.damage,
        weapon.fire_rate,
        weapon.reload_time,
        weapon.clip_size,
        character.crit_chance(),
        character.crit_damage(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::RarityValues;
    use crate::types::UpgradeCategory;
    use proptest::prelude::*;

    fn upgrade(stat: Stat, values: [Option<f64>; 5]) -> Upgrade {
        Upgrade {
            name: "Bigger Cogs".to_string(),
            stat,
            tags: [crate::types::WeaponTag::All].into_iter().collect(),
            category: UpgradeCategory::Weapon,
            values: RarityValues::new(values),
            description: None,
        }
    }

    #[test]
    fn test_basic_dps() {
        assert_eq!(calculate_dps(100.0, 1.0, 1.0, 1, 0.0, 2.0).unwrap(), 100.0);
    }

    #[test]
    fn test_crit_and_clip() {
        // avg 100 * 1.5 = 150, cycle 2 + 9/5 = 3.8, 150 * 10 / 3.8 = 394.73..
        assert_eq!(calculate_dps(100.0, 5.0, 2.0, 10, 0.5, 2.0).unwrap(), 394.7);
    }

    #[test]
    fn test_zero_reload_fails() {
        let err = calculate_dps(100.0, 1.0, 0.0, 1, 0.0, 2.0).unwrap_err();
        assert!(matches!(err, CalcError::InvalidArgument(_)));
    }

    #[test]
    fn test_zero_fire_rate() {
        assert_eq!(calculate_dps(100.0, 0.0, 1.0, 10, 0.0, 2.0).unwrap(), 0.0);
        assert_eq!(calculate_dps(100.0, 0.0, 1.0, 1, 0.0, 2.0).unwrap(), 100.0);
    }

    #[test]
    fn test_rounding_is_half_up() {
        assert_eq!(round_tenths(12.25), 12.3);
        assert_eq!(round_tenths(12.24), 12.2);
        assert_eq!(round_tenths(0.05), 0.1);
    }

    #[test]
    fn test_damage_upgrade() {
        let up = upgrade(Stat::Damage, [Some(0.05), Some(0.1), None, None, None]);
        let dps = calculate_dps_with_upgrade(100.0, 1.0, 1.0, 1, 0.0, 2.0, &up, Rarity::Uncommon).unwrap();
        assert_eq!(dps, 110.0);
    }

    #[test]
    fn test_fire_rate_and_reload_upgrades() {
        let fire = upgrade(Stat::FireRate, [Some(1.0); 5]);
        // cycle 1 + 1/2 = 1.5, 200 / 1.5
        assert_eq!(
            calculate_dps_with_upgrade(100.0, 1.0, 1.0, 2, 0.0, 2.0, &fire, Rarity::Common).unwrap(),
            133.3
        );

        let reload = upgrade(Stat::ReloadSpeed, [Some(0.5); 5]);
        assert_eq!(
            calculate_dps_with_upgrade(100.0, 1.0, 1.0, 1, 0.0, 2.0, &reload, Rarity::Common).unwrap(),
            200.0
        );
    }

    #[test]
    fn test_other_stats_leave_dps_unchanged() {
        let armor = upgrade(Stat::Armor, [Some(5.0); 5]);
        let dps = calculate_dps_with_upgrade(100.0, 1.0, 1.0, 1, 0.0, 2.0, &armor, Rarity::Epic).unwrap();
        assert_eq!(dps, 100.0);
    }

    #[test]
    fn test_missing_rarity_value() {
        let up = upgrade(Stat::Damage, [Some(0.05), None, None, None, None]);
        let err = calculate_dps_with_upgrade(100.0, 1.0, 1.0, 1, 0.0, 2.0, &up, Rarity::Legendary).unwrap_err();
        assert_eq!(
            err.to_string(),
            "upgrade 'Bigger Cogs' does not have a value for rarity 'legendary'"
        );
    }

    #[test]
    fn test_all_upgrades_end_to_end() {
        let character = CharacterStats::neutral()
            .with_value(Stat::Damage, 1.2)
            .with_value(Stat::ReloadSpeed, 1.15)
            .with_value(Stat::CritChance, 0.1)
            .with_value(Stat::CritDamage, 2.5);
        let mid_dive: MidDiveBonuses = [
            (Stat::Damage, 0.4),
            (Stat::FireRate, 0.2),
            (Stat::ReloadSpeed, 0.3),
        ]
        .into_iter()
        .collect();

        let dps = calculate_dps_with_all_upgrades(50.0, 5.0, 2.0, 10, &character, &mid_dive).unwrap();
        assert_eq!(dps, 355.5);
    }

    #[test]
    fn test_layers_order() {
        let character = CharacterStats::neutral()
            .with_value(Stat::Damage, 2.0)
            .with_value(Stat::ReloadSpeed, 2.0);
        let mid_dive: MidDiveBonuses = [(Stat::Damage, 0.5), (Stat::ReloadSpeed, 0.5)].into_iter().collect();

        let weapon = apply_bonus_layers(10.0, 1.0, 4.0, 5, &character, &mid_dive);
        assert!((weapon.damage - 30.0).abs() < 1e-12);
        assert!((weapon.reload_time - 1.0).abs() < 1e-12);
        assert!((weapon.fire_rate - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_neutral_layers_match_core_formula() {
        let dps = calculate_dps_with_all_upgrades(
            35.0,
            4.62,
            4.0,
            30,
            &CharacterStats::neutral(),
            &MidDiveBonuses::new(),
        )
        .unwrap();
        assert_eq!(dps, calculate_dps(35.0, 4.62, 4.0, 30, 0.0, 0.0).unwrap());
    }

    proptest! {
        #[test]
        fn prop_zero_reload_always_fails(
            damage in 0.0f64..1000.0,
            fire_rate in 0.0f64..20.0,
            clip in 0u32..200,
            crit_chance in 0.0f64..1.0,
            crit_damage in 1.0f64..5.0,
        ) {
            prop_assert!(calculate_dps(damage, fire_rate, 0.0, clip, crit_chance, crit_damage).is_err());
        }
    }
}

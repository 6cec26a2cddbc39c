//! Folding selected and global upgrades into one weapon's bonuses

use super::MidDiveBonuses;
use crate::data::{Upgrade, Weapon};
use crate::state::{GlobalUpgradeCounts, SelectedUpgrade};

/// Sum every upgrade that targets one weapon
///
/// Pinned selections count when their `weapon_id` matches and their upgrade
/// name resolves; each contributes its stored value. Global picks count when
/// the `(name, tags)` pair resolves, the upgrade applies to `weapon` and the
/// rarity has a value; each contributes `value * count`. Anything that does
/// not resolve is skipped.
pub fn aggregate_mid_dive_upgrades(
    weapon_id: &str,
    weapon: &Weapon,
    selected: &[SelectedUpgrade],
    global: &GlobalUpgradeCounts,
    upgrades: &[Upgrade],
) -> MidDiveBonuses {
    let mut bonuses = MidDiveBonuses::new();

    for pick in selected.iter().filter(|s| s.weapon_id == weapon_id) {
        match upgrades.iter().find(|u| u.name == pick.upgrade_name) {
            Some(upgrade) => bonuses.add(upgrade.stat, pick.value),
            None => tracing::trace!(upgrade = %pick.upgrade_name, "Skipping unknown selected upgrade"),
        }
    }

    for (key, count) in global.iter().filter(|(_, count)| *count > 0) {
        let Some(upgrade) = upgrades.iter().find(|u| u.matches(&key.name, &key.tags)) else {
            tracing::trace!(key = %key, "Skipping unmatched global upgrade");
            continue;
        };
        if !upgrade.applies_to(weapon) {
            continue;
        }
        let Some(value) = upgrade.value(key.rarity) else {
            tracing::trace!(key = %key, "Skipping global upgrade without a value at its rarity");
            continue;
        };
        bonuses.add(upgrade.stat, value * f64::from(count));
    }

    bonuses
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::RarityValues;
    use crate::stat::Stat;
    use crate::state::GlobalUpgradeKey;
    use crate::types::{Class, Rarity, UpgradeCategory, WeaponTag};
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn weapon() -> Weapon {
        Weapon {
            id: "deepcore-gk2".to_string(),
            name: "Deepcore GK2".to_string(),
            base_damage: 35.0,
            fire_rate: 4.62,
            clip_size: 30,
            reload_time: 4.0,
            tags: BTreeSet::from([WeaponTag::Kinetic, WeaponTag::Projectile]),
            class: Class::Scout,
        }
    }

    fn upgrade(name: &str, stat: Stat, tags: &[WeaponTag], values: [Option<f64>; 5]) -> Upgrade {
        Upgrade {
            name: name.to_string(),
            stat,
            tags: tags.iter().copied().collect(),
            category: UpgradeCategory::Tag,
            values: RarityValues::new(values),
            description: None,
        }
    }

    fn upgrades() -> Vec<Upgrade> {
        vec![
            upgrade("Bigger Cogs", Stat::Damage, &[WeaponTag::All], [Some(0.1); 5]),
            upgrade("Tighten Springs", Stat::FireRate, &[WeaponTag::Projectile], [Some(0.2); 5]),
            upgrade("Open Valves", Stat::WeaponRange, &[WeaponTag::Beam], [Some(0.1); 5]),
            upgrade("Add Punch", Stat::Piercing, &[WeaponTag::Projectile], [None, None, Some(0.25), Some(0.5), None]),
        ]
    }

    fn pick(weapon_id: &str, name: &str, value: f64) -> SelectedUpgrade {
        SelectedUpgrade {
            weapon_id: weapon_id.to_string(),
            upgrade_name: name.to_string(),
            rarity: Rarity::Rare,
            value,
        }
    }

    #[test]
    fn test_selected_upgrades_sum_per_stat() {
        let selected = vec![
            pick("deepcore-gk2", "Bigger Cogs", 0.25),
            pick("deepcore-gk2", "Bigger Cogs", 0.15),
            pick("deepcore-gk2", "Tighten Springs", 0.2),
            pick("m1000-classic", "Bigger Cogs", 0.5),
        ];
        let bonuses = aggregate_mid_dive_upgrades(
            "deepcore-gk2",
            &weapon(),
            &selected,
            &GlobalUpgradeCounts::new(),
            &upgrades(),
        );

        assert!((bonuses.get(Stat::Damage) - 0.4).abs() < 1e-12);
        assert!((bonuses.get(Stat::FireRate) - 0.2).abs() < 1e-12);
        assert!(!bonuses.contains(Stat::Piercing));
    }

    #[test]
    fn test_unknown_selected_names_are_skipped() {
        let selected = vec![pick("deepcore-gk2", "Retired Upgrade", 0.3)];
        let bonuses = aggregate_mid_dive_upgrades(
            "deepcore-gk2",
            &weapon(),
            &selected,
            &GlobalUpgradeCounts::new(),
            &upgrades(),
        );
        assert!(bonuses.is_empty());
    }

    #[test]
    fn test_global_upgrades_scale_by_count() {
        let mut global = GlobalUpgradeCounts::new();
        let springs = GlobalUpgradeKey::new("Tighten Springs", [WeaponTag::Projectile], Rarity::Common);
        global.add(springs.clone());
        global.add(springs);

        let bonuses = aggregate_mid_dive_upgrades("deepcore-gk2", &weapon(), &[], &global, &upgrades());
        assert!((bonuses.get(Stat::FireRate) - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_global_upgrades_must_apply_and_resolve() {
        let mut global = GlobalUpgradeCounts::new();
        // beam-only, weapon is kinetic
        global.add(GlobalUpgradeKey::new("Open Valves", [WeaponTag::Beam], Rarity::Rare));
        // tag set differs from the definition
        global.add(GlobalUpgradeKey::new("Tighten Springs", [WeaponTag::Kinetic], Rarity::Rare));
        // no common value
        global.add(GlobalUpgradeKey::new("Add Punch", [WeaponTag::Projectile], Rarity::Common));

        let bonuses = aggregate_mid_dive_upgrades("deepcore-gk2", &weapon(), &[], &global, &upgrades());
        assert!(bonuses.is_empty());
    }

    #[test]
    fn test_buckets_stay_additive_for_compounding_stats() {
        let selected = vec![
            pick("deepcore-gk2", "Bigger Cogs", 0.1),
            pick("deepcore-gk2", "Bigger Cogs", 0.2),
        ];
        let bonuses = aggregate_mid_dive_upgrades(
            "deepcore-gk2",
            &weapon(),
            &selected,
            &GlobalUpgradeCounts::new(),
            &upgrades(),
        );
        assert!((bonuses.get(Stat::Damage) - 0.3).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn prop_partitions_merge_to_the_same_totals(
            values in prop::collection::vec((0usize..3, 0.01f64..1.0), 0..20),
            split in 0usize..20,
        ) {
            let names = ["Bigger Cogs", "Tighten Springs", "Add Punch"];
            let selected: Vec<_> = values
                .iter()
                .map(|(i, v)| pick("deepcore-gk2", names[*i], *v))
                .collect();
            let split = split.min(selected.len());
            let global = GlobalUpgradeCounts::new();

            let whole = aggregate_mid_dive_upgrades("deepcore-gk2", &weapon(), &selected, &global, &upgrades());
            let mut parts = aggregate_mid_dive_upgrades("deepcore-gk2", &weapon(), &selected[..split], &global, &upgrades());
            parts.merge(&aggregate_mid_dive_upgrades("deepcore-gk2", &weapon(), &selected[split..], &global, &upgrades()));

            for stat in [Stat::Damage, Stat::FireRate, Stat::Piercing] {
                prop_assert!((whole.get(stat) - parts.get(stat)).abs() < 1e-9);
            }
        }
    }
}

//! MetaUpgradeSource - Stats from permanent progression levels

use crate::character::StatAccumulator;
use crate::data::MetaUpgrade;
use crate::source::StatSource;
use crate::state::MetaUpgradeLevels;
use crate::types::BonusType;

/// Meta upgrades at their current levels
///
/// Percentage upgrades compound with the other multipliers; flat upgrades
/// are added after every multiplier.
pub struct MetaUpgradeSource<'a> {
    upgrades: &'a [MetaUpgrade],
    levels: &'a MetaUpgradeLevels,
}

impl<'a> MetaUpgradeSource<'a> {
    pub fn new(upgrades: &'a [MetaUpgrade], levels: &'a MetaUpgradeLevels) -> Self {
        MetaUpgradeSource { upgrades, levels }
    }
}

impl StatSource for MetaUpgradeSource<'_> {
    fn id(&self) -> &str {
        "meta_upgrades"
    }

    fn priority(&self) -> i32 {
        25
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        for upgrade in self.upgrades {
            let level = self.levels.level(&upgrade.id);
            let Some(bonus) = upgrade.bonus_at(level) else {
                continue;
            };
            match upgrade.bonus_type {
                BonusType::Percentage => stats.add_multiplier(upgrade.stat, bonus),
                BonusType::Flat => stats.add_post_flat(upgrade.stat, bonus),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stat::Stat;

    fn upgrades() -> Vec<MetaUpgrade> {
        vec![
            MetaUpgrade {
                id: "heavy-bullets".to_string(),
                name: "Heavy Bullets".to_string(),
                stat: Stat::Damage,
                max_level: 3,
                bonus_values: vec![0.04, 0.08, 0.12],
                bonus_type: BonusType::Percentage,
                description: None,
            },
            MetaUpgrade {
                id: "getting-fit".to_string(),
                name: "Getting Fit".to_string(),
                stat: Stat::Health,
                max_level: 3,
                bonus_values: vec![10.0, 20.0, 30.0],
                bonus_type: BonusType::Flat,
                description: None,
            },
        ]
    }

    #[test]
    fn test_bonus_routing_by_type() {
        let upgrades = upgrades();
        let mut levels = MetaUpgradeLevels::new();
        levels.set(&upgrades, "heavy-bullets", 3);
        levels.set(&upgrades, "getting-fit", 1);

        let mut acc = StatAccumulator::new();
        MetaUpgradeSource::new(&upgrades, &levels).apply(&mut acc);

        assert_eq!(acc.get(Stat::Damage).unwrap().multipliers, vec![0.12]);
        assert_eq!(acc.get(Stat::Health).unwrap().post_flat, vec![10.0]);
    }

    #[test]
    fn test_unlevelled_upgrades_are_skipped() {
        let upgrades = upgrades();
        let levels = MetaUpgradeLevels::new();
        let mut acc = StatAccumulator::new();
        MetaUpgradeSource::new(&upgrades, &levels).apply(&mut acc);

        assert!(acc.get(Stat::Damage).is_none());
        assert!(acc.get(Stat::Health).is_none());
    }
}

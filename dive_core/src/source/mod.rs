//! Stat sources - the layers folded into character stats

mod class_base;
mod class_mod;
mod gear;
mod meta_upgrade;

pub use class_base::ClassBaseSource;
pub use class_mod::ClassModSource;
pub use gear::{GearBonuses, GearSource};
pub use meta_upgrade::MetaUpgradeSource;

use crate::character::StatAccumulator;

/// One layer of permanent character bonuses
///
/// Sources run in ascending [`priority`](StatSource::priority) order: class
/// base (-100), meta upgrades (25), class mod (50), gear (75). The layers
/// commute mathematically, but factors are folded in this order so results
/// are bit-for-bit stable.
pub trait StatSource: Send + Sync {
    /// Name used in trace output
    fn id(&self) -> &str;

    fn priority(&self) -> i32 {
        0
    }

    /// Push this layer's contributions into the accumulator
    fn apply(&self, stats: &mut StatAccumulator);
}

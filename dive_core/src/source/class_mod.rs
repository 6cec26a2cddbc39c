//! ClassModSource - Stat multipliers granted by the selected class mod

use crate::character::StatAccumulator;
use crate::data::ClassMod;
use crate::source::StatSource;

/// Multipliers from a class mod; conditional effects are not evaluated
pub struct ClassModSource<'a> {
    class_mod: &'a ClassMod,
}

impl<'a> ClassModSource<'a> {
    pub fn new(class_mod: &'a ClassMod) -> Self {
        ClassModSource { class_mod }
    }
}

impl StatSource for ClassModSource<'_> {
    fn id(&self) -> &str {
        &self.class_mod.name
    }

    fn priority(&self) -> i32 {
        50
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        for (stat, value) in &self.class_mod.stat_multipliers {
            stats.add_multiplier(*stat, *value);
        }
    }
}

//! ClassBaseSource - Stats every member of a class starts with

use crate::character::StatAccumulator;
use crate::source::StatSource;
use crate::stat::StatMap;

/// Base stats of the selected class
pub struct ClassBaseSource<'a> {
    base_stats: &'a StatMap,
}

impl<'a> ClassBaseSource<'a> {
    pub fn new(base_stats: &'a StatMap) -> Self {
        ClassBaseSource { base_stats }
    }
}

impl StatSource for ClassBaseSource<'_> {
    fn id(&self) -> &str {
        "class_base"
    }

    fn priority(&self) -> i32 {
        -100 // Base stats apply first
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        for (stat, value) in self.base_stats {
            stats.add_base(*stat, *value);
        }
    }
}

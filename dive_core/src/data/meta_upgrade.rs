//! MetaUpgrade - permanent progression records

use crate::stat::Stat;
use crate::types::BonusType;
use serde::{Deserialize, Serialize};

/// Immutable meta upgrade definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaUpgrade {
    pub id: String,
    pub name: String,
    pub stat: Stat,
    pub max_level: u32,
    /// Cumulative bonus at each level: `bonus_values[i]` is the total at level `i + 1`
    pub bonus_values: Vec<f64>,
    pub bonus_type: BonusType,
    #[serde(default)]
    pub description: Option<String>,
}

impl MetaUpgrade {
    /// Cumulative bonus at a level; `None` at level 0
    pub fn bonus_at(&self, level: u32) -> Option<f64> {
        let index = (level.min(self.max_level) as usize).checked_sub(1)?;
        self.bonus_values.get(index).copied()
    }

    pub fn clamp_level(&self, level: i64) -> u32 {
        level.clamp(0, self.max_level as i64) as u32
    }
}

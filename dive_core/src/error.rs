//! Errors raised by the stat and DPS calculators

use crate::types::Rarity;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Contract violation in an explicit calculation call
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CalcError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("upgrade '{upgrade}' does not have a value for rarity '{rarity}'")]
    MissingRarityValue { upgrade: String, rarity: Rarity },
    #[error("unknown stat: {0}")]
    UnknownStat(String),
}

//! DPS - damage per second from weapon stats and bonus layers

mod calculation;

pub use calculation::{
    apply_bonus_layers, calculate_dps, calculate_dps_with_all_upgrades, calculate_dps_with_upgrade,
    round_tenths, EffectiveWeapon,
};

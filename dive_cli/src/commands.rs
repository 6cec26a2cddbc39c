//! Subcommands: each one mutates the selections or prints a table

use crate::app::App;
use crate::output;
use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use dive_core::prelude::*;
use dive_core::state::GlobalUpgradeKey;

#[derive(Subcommand)]
pub enum Command {
    /// Show the current build
    Show,

    /// Select a class mod (equips its starting weapon in slot 0)
    Class {
        /// Class mod name, e.g. "Juggernaut"
        name: Option<String>,

        /// List the class mods instead
        #[arg(long, conflicts_with = "name")]
        list: bool,
    },

    /// Equip a weapon into a slot (0-3)
    Equip { slot: usize, weapon_id: String },

    /// Empty a slot and drop its pinned upgrades
    Unequip { slot: usize },

    /// Meta upgrade levels
    #[command(subcommand)]
    Meta(MetaCommand),

    /// Mid-dive upgrades pinned to a weapon
    #[command(subcommand)]
    Upgrade(UpgradeCommand),

    /// Tag-mastery upgrades that apply to every matching weapon
    #[command(subcommand)]
    Global(GlobalCommand),

    /// Gear bonuses
    #[command(subcommand)]
    Gear(GearCommand),

    /// Clear every mid-dive pick, keeping meta levels and loadout
    ResetRun,

    /// Evaluate the DPS formula on raw numbers
    Dps(DpsArgs),
}

#[derive(Subcommand)]
pub enum MetaCommand {
    /// Set a level (clamped to the upgrade's range)
    Set { id: String, level: i64 },
    /// Raise a level by one
    Inc { id: String },
    /// Lower a level by one
    Dec { id: String },
    /// Put every meta upgrade back to level 0
    Reset,
    /// List meta upgrades with their current levels
    List,
}

#[derive(Subcommand)]
pub enum UpgradeCommand {
    /// Apply an upgrade to a weapon
    Add {
        weapon_id: String,
        name: String,
        rarity: Rarity,
    },
    /// Remove one applied instance
    Undo {
        weapon_id: String,
        name: String,
        rarity: Rarity,
    },
    /// List the upgrades a weapon accepts
    List { weapon_id: String },
}

#[derive(Parser)]
pub struct GlobalArgs {
    name: String,
    rarity: Rarity,
    /// Tag set of the upgrade, comma separated
    #[arg(long, value_delimiter = ',')]
    tags: Vec<WeaponTag>,
}

impl GlobalArgs {
    fn key(self) -> GlobalUpgradeKey {
        GlobalUpgradeKey::new(self.name, self.tags, self.rarity)
    }
}

#[derive(Subcommand)]
pub enum GlobalCommand {
    /// Pick a global upgrade once more
    Add(GlobalArgs),
    /// Drop one pick of a global upgrade
    Remove(GlobalArgs),
}

#[derive(Subcommand)]
pub enum GearCommand {
    /// Add a flat bonus, e.g. `armor 5`
    Flat { stat: Stat, value: f64 },
    /// Add a percentage bonus, e.g. `health 0.1` for +10%
    Percent { stat: Stat, value: f64 },
    /// Remove every gear bonus
    Clear,
}

#[derive(Parser)]
pub struct DpsArgs {
    damage: f64,
    fire_rate: f64,
    reload_time: f64,
    clip_size: u32,
    #[arg(long, default_value_t = 0.0)]
    crit_chance: f64,
    #[arg(long, default_value_t = 2.0)]
    crit_damage: f64,
}

impl Command {
    pub fn execute(self, app: &mut App) -> Result<()> {
        match self {
            Command::Show => {}
            Command::Class { list: true, .. } => output::print_class_mods(&app.data),
            Command::Class { name: Some(name), .. } => app.select_class_mod(&name)?,
            Command::Class { name: None, .. } => app.selection.class_mod = None,
            Command::Equip { slot, weapon_id } => app.equip(slot, &weapon_id)?,
            Command::Unequip { slot } => app.unequip(slot)?,
            Command::Meta(cmd) => cmd.execute(app)?,
            Command::Upgrade(cmd) => cmd.execute(app)?,
            Command::Global(GlobalCommand::Add(args)) => app.add_global(args.key())?,
            Command::Global(GlobalCommand::Remove(args)) => app.remove_global(&args.key())?,
            Command::Gear(GearCommand::Flat { stat, value }) => app.selection.gear.add_flat(stat, value),
            Command::Gear(GearCommand::Percent { stat, value }) => {
                app.selection.gear.add_percent(stat, value)
            }
            Command::Gear(GearCommand::Clear) => app.selection.gear.clear(),
            Command::ResetRun => app.selection.reset_run(),
            Command::Dps(args) => {
                let dps = calculate_dps(
                    args.damage,
                    args.fire_rate,
                    args.reload_time,
                    args.clip_size,
                    args.crit_chance,
                    args.crit_damage,
                )?;
                println!("{dps} DPS");
            }
        }
        Ok(())
    }
}

impl MetaCommand {
    fn execute(self, app: &mut App) -> Result<()> {
        let metas = &app.data.meta_upgrades;
        let levels = &mut app.selection.meta_levels;
        let known = match self {
            MetaCommand::Set { id, level } => levels.set(metas, &id, level).then_some(()).ok_or(id),
            MetaCommand::Inc { id } => levels.increment(metas, &id).then_some(()).ok_or(id),
            MetaCommand::Dec { id } => levels.decrement(metas, &id).then_some(()).ok_or(id),
            MetaCommand::Reset => {
                levels.reset_all(metas);
                Ok(())
            }
            MetaCommand::List => {
                output::print_meta_levels(metas, levels);
                Ok(())
            }
        };
        if let Err(id) = known {
            bail!("unknown meta upgrade '{id}'");
        }
        Ok(())
    }
}

impl UpgradeCommand {
    fn execute(self, app: &mut App) -> Result<()> {
        match self {
            UpgradeCommand::Add {
                weapon_id,
                name,
                rarity,
            } => app.add_upgrade(&weapon_id, &name, rarity)?,
            UpgradeCommand::Undo {
                weapon_id,
                name,
                rarity,
            } => app.undo_upgrade(&weapon_id, &name, rarity)?,
            UpgradeCommand::List { weapon_id } => output::print_upgrades(&app.upgrades_for(&weapon_id)?),
        }
        Ok(())
    }
}

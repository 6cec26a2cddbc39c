//! Plain-text rendering of reports and tables

use dive_core::data::Upgrade;
use dive_core::prelude::*;
use dive_core::state::MetaUpgradeLevels;

fn separator(title: &str) {
    println!("\n{}", "=".repeat(48));
    println!("  {}", title);
    println!("{}", "=".repeat(48));
}

pub fn print_report(report: &BuildReport) {
    separator(report.class_mod.as_deref().unwrap_or("No class mod"));
    for (stat, _) in report.character.iter_display() {
        println!(
            "  {:<18} {}",
            stat.definition().name,
            report.character.formatted(stat)
        );
    }

    if report.weapons.is_empty() && report.failures.is_empty() {
        println!("\n  No weapons equipped");
        return;
    }

    separator("Weapons");
    for (slot, weapon) in &report.weapons {
        println!("  [{}] {}", slot, weapon.name);
        println!(
            "      damage {:.1}  fire rate {:.2}/s  reload {:.2}s  clip {}",
            weapon.effective.damage,
            weapon.effective.fire_rate,
            weapon.effective.reload_time,
            weapon.effective.clip_size
        );
        for (stat, value) in weapon.mid_dive.iter() {
            println!("      +{:.0}% {}", value * 100.0, stat.definition().name);
        }
        println!("      DPS {:.1}", weapon.dps);
    }
    for (slot, failure) in &report.failures {
        println!("  [{}] {}", slot, failure.name);
        println!("      DPS unavailable: {}", failure.error);
    }
    println!("\n  Total DPS {:.1}", report.total_dps());
}

pub fn print_class_mods(data: &GameData) {
    for class in Class::all() {
        separator(class.as_ref());
        for class_mod in data.class_mods_for(*class) {
            println!(
                "  {:<20} starts with {}",
                class_mod.name, class_mod.starting_weapon_id
            );
            for effect in &class_mod.conditional_effects {
                println!("      {}", effect);
            }
        }
    }
}

pub fn print_meta_levels(metas: &[MetaUpgrade], levels: &MetaUpgradeLevels) {
    separator("Meta upgrades");
    for meta in metas {
        let level = levels.level(&meta.id);
        let bonus = meta.bonus_at(level).unwrap_or(0.0);
        println!(
            "  {:<20} {:>2}/{:<2} {} {}",
            meta.id, level, meta.max_level, bonus, meta.bonus_type
        );
    }
}

pub fn print_upgrades(upgrades: &[&Upgrade]) {
    separator("Valid upgrades");
    for upgrade in upgrades {
        let values: Vec<String> = Rarity::all()
            .iter()
            .map(|r| match upgrade.value(*r) {
                Some(v) => format!("{r}={v}"),
                None => format!("{r}=-"),
            })
            .collect();
        println!("  {:<18} {:<16} {}", upgrade.name, upgrade.stat, values.join(" "));
    }
}

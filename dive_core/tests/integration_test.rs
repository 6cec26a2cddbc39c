//! Integration test: Load tables -> Pick class mod and upgrades -> Persist -> Evaluate
//!
//! This test validates the full flow from static data to the numbers the
//! presentation layer shows.

use dive_core::prelude::*;
use dive_core::state::GlobalUpgradeCounts;
use tempfile::TempDir;

/// Helper to print a separator
fn separator(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("  {}", title);
    println!("{}\n", "=".repeat(60));
}

/// Helper to print a build report
fn print_report(report: &BuildReport) {
    println!("  Class mod: {:?}", report.class_mod);
    for (stat, _) in report.character.iter_display() {
        println!("    {:<16} {}", stat.definition().name, report.character.formatted(stat));
    }
    for (slot, weapon) in &report.weapons {
        println!(
            "  Slot {}: {} dmg {:.1} rate {:.2} reload {:.2} -> {} DPS",
            slot,
            weapon.name,
            weapon.effective.damage,
            weapon.effective.fire_rate,
            weapon.effective.reload_time,
            weapon.dps
        );
    }
}

fn juggernaut_build(data: &GameData) -> SelectionState {
    let mut selection = SelectionState::new(data);
    selection.class_mod = Some("Juggernaut".to_string());
    selection.meta_levels.set(&data.meta_upgrades, "heavy-bullets", 5);
    selection.meta_levels.set(&data.meta_upgrades, "getting-fit", 1);
    selection.loadout.equip(0, "jury-rigged-boomstick").unwrap();
    selection.loadout.equip(1, "crspr-flamethrower").unwrap();

    let cogs = data.upgrade("Bigger Cogs").unwrap();
    let added = selection.selected_upgrades.add(SelectedUpgrade {
        weapon_id: "jury-rigged-boomstick".to_string(),
        upgrade_name: cogs.name.clone(),
        rarity: Rarity::Rare,
        value: cogs.value(Rarity::Rare).unwrap(),
    });
    assert!(added);

    let springs = GlobalUpgradeKey::new("Tighten Springs", [WeaponTag::Projectile], Rarity::Common);
    selection.global_upgrades.add(springs.clone());
    selection.global_upgrades.add(springs);
    selection
}

#[test]
fn test_full_build_flow() {
    separator("LOAD TABLES");
    let data = default_game_data().unwrap();
    println!(
        "  {} weapons, {} upgrades, {} meta upgrades, {} class mods",
        data.weapons.len(),
        data.upgrades.len(),
        data.meta_upgrades.len(),
        data.class_mods.len()
    );

    separator("EMPTY BUILD");
    let empty = evaluate_build(&data, &SelectionState::new(&data));
    print_report(&empty);
    assert_eq!(empty.character, CharacterStats::neutral());
    assert!(empty.weapons.is_empty());

    separator("JUGGERNAUT BUILD");
    let selection = juggernaut_build(&data);
    let report = evaluate_build(&data, &selection);
    print_report(&report);

    let getting_fit = data.meta_upgrade("getting-fit").unwrap().bonus_at(1).unwrap();
    let health = report.character.get(Stat::Health);
    assert!((health - (160.0 * 1.25 + getting_fit)).abs() < 1e-9);
    assert!((report.character.damage() - 1.2).abs() < 1e-9);

    let boomstick = &report.weapons[&0];
    assert!((boomstick.mid_dive.get(Stat::Damage) - 0.25).abs() < 1e-9);
    assert!((boomstick.mid_dive.get(Stat::FireRate) - 0.2).abs() < 1e-9);

    // beam weapon: neither the pinned cogs nor the projectile springs apply
    let flamethrower = &report.weapons[&1];
    assert!(flamethrower.mid_dive.is_empty());

    let weapon = data.weapon("jury-rigged-boomstick").unwrap();
    let expected = calculate_dps_with_all_upgrades(
        weapon.base_damage,
        weapon.fire_rate,
        weapon.reload_time,
        weapon.clip_size,
        &report.character,
        &boomstick.mid_dive,
    )
    .unwrap();
    assert_eq!(boomstick.dps, expected);
    assert!(report.total_dps() > 0.0);
}

#[test]
fn test_selections_survive_a_restart() {
    separator("PERSIST");
    let data = default_game_data().unwrap();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("selections.json");

    let selection = juggernaut_build(&data);
    let before = evaluate_build(&data, &selection);
    selection.save(&JsonFileStore::new(&path).unwrap());
    println!("  Saved to {}", path.display());

    let reloaded = SelectionState::load(&JsonFileStore::new(&path).unwrap(), &data);
    assert_eq!(reloaded, selection);
    assert_eq!(evaluate_build(&data, &reloaded), before);
}

#[test]
fn test_meta_levels_clamped_through_store() {
    let data = default_game_data().unwrap();
    let store = MemoryStore::new();

    let mut selection = SelectionState::new(&data);
    for meta in &data.meta_upgrades {
        selection.meta_levels.set(&data.meta_upgrades, &meta.id, i64::from(meta.max_level) + 3);
    }
    selection.save(&store);

    let reloaded = SelectionState::load(&store, &data);
    for meta in &data.meta_upgrades {
        assert_eq!(reloaded.meta_levels.level(&meta.id), meta.max_level, "{}", meta.id);
    }
}

#[test]
fn test_undo_and_reset_run() {
    let data = default_game_data().unwrap();
    let mut selection = juggernaut_build(&data);

    assert!(selection
        .selected_upgrades
        .remove_one("jury-rigged-boomstick", "Bigger Cogs", Rarity::Rare));
    let report = evaluate_build(&data, &selection);
    assert!(!report.weapons[&0].mid_dive.contains(Stat::Damage));

    selection.reset_run();
    assert_eq!(selection.global_upgrades, GlobalUpgradeCounts::new());
    let report = evaluate_build(&data, &selection);
    assert!(report.weapons.values().all(|w| w.mid_dive.is_empty()));
}

#[test]
fn test_valid_upgrades_follow_applicability() {
    let data = default_game_data().unwrap();
    let cryo = data.weapon("cryo-cannon").unwrap();

    let valid: Vec<_> = data.valid_upgrades_for(cryo).iter().map(|u| u.name.as_str()).collect();
    assert!(valid.contains(&"Bigger Cogs"));
    assert!(valid.contains(&"Open Valves"));
    assert!(!valid.contains(&"Tighten Springs"));
    assert!(!valid.contains(&"Extra Rations"));

    let juggernaut = data.class_mod("Juggernaut").unwrap();
    assert!(juggernaut.can_equip(data.weapon("jury-rigged-boomstick").unwrap()));
    assert!(!juggernaut.can_equip(cryo));
}

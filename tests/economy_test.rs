//! Integration test: shop progression through the economy
//!
//! Tests the flow: earn boxes → climb risk levels → buy and swap equipment,
//! with every persisted mutation reaching the commit sink.

use glupo::character::StatType;
use glupo::economy::{Economy, MemorySink, RiskLevel};
use glupo::items::{ArmorId, WeaponId};
use glupo::progression::ProgressionData;

fn economy_with(balance: u64, risk: RiskLevel) -> (Economy, MemorySink) {
    let sink = MemorySink::new();
    let data = ProgressionData {
        balance,
        risk_level: risk,
        ..ProgressionData::default()
    };
    (Economy::new(data, Box::new(sink.clone())), sink)
}

#[test]
fn test_climb_every_risk_level() {
    let (mut economy, sink) = economy_with(0, RiskLevel::Zayin);

    let mut climbed = Vec::new();
    while let Some(cost) = economy.risk_upgrade_cost() {
        // Filling the cap is exactly enough to move up
        economy.add_balance(u64::MAX);
        assert_eq!(economy.balance(), cost);
        assert!(economy.upgrade_risk());
        assert_eq!(economy.balance(), 0);
        climbed.push(economy.data().risk_level);
    }

    assert_eq!(
        climbed,
        vec![
            RiskLevel::Teth,
            RiskLevel::He,
            RiskLevel::Waw,
            RiskLevel::Aleph
        ]
    );
    assert_eq!(economy.max_balance(), None);
    assert!(!economy.upgrade_risk());

    // Unbounded at the top
    economy.add_balance(10_000_000);
    assert_eq!(economy.balance(), 10_000_000);
    assert!(!economy.is_full_balance());

    let last = sink.last().expect("commits recorded");
    assert_eq!(last.risk_level, RiskLevel::Aleph);
}

#[test]
fn test_box_payout_uses_weapon_price() {
    let (mut economy, _) = economy_with(0, RiskLevel::He);
    economy.add_boxes(10, 1.5);
    // Penitence boxes are worth 1
    assert_eq!(economy.balance(), 15);

    // Fractions are floored
    economy.add_boxes(1, 1.5);
    assert_eq!(economy.balance(), 16);
}

#[test]
fn test_buy_select_and_swap_equipment() {
    let (mut economy, sink) = economy_with(7_500, RiskLevel::Teth);

    assert!(economy.buy_weapon(WeaponId::Harvest));
    assert_eq!(economy.balance(), 4_500);
    assert_eq!(economy.data().selected_weapon, WeaponId::Harvest);
    // Can't buy twice
    assert!(!economy.buy_weapon(WeaponId::Harvest));

    assert!(economy.buy_armor(ArmorId::RedEyes));
    assert_eq!(economy.balance(), 3_400);
    assert_eq!(economy.data().selected_armor, ArmorId::RedEyes);

    // Too expensive
    assert!(!economy.buy_weapon(WeaponId::Heaven));
    assert!(!economy.data().bought_weapons.contains(&WeaponId::Heaven));

    // Swap back to the starter gear
    assert!(economy.select_weapon(WeaponId::Penitence));
    assert!(economy.select_armor(ArmorId::Penitence));
    assert!(!economy.select_weapon(WeaponId::Twilight));

    let shop = economy.weapon_shop();
    assert!(shop
        .iter()
        .any(|e| e.item.id == WeaponId::Harvest && e.is_bought && !e.is_selected));
    assert!(shop
        .iter()
        .any(|e| e.item.id == WeaponId::Penitence && e.is_selected));

    assert_eq!(sink.count(), 4);
}

#[test]
fn test_equipment_changes_effective_stats() {
    let (mut economy, _) = economy_with(7_500, RiskLevel::Teth);
    let before = economy.effective_stats();

    assert!(economy.buy_armor(ArmorId::RedEyes));
    let after = economy.effective_stats();
    assert_eq!(after.fortitude, before.fortitude + 3);
    assert_eq!(after.temperance, before.temperance + 4);

    let derived = economy.derived_stats();
    assert!(derived.max_boxes >= derived.min_boxes);
    assert!(derived.critical_chance > 0.0);
}

#[test]
fn test_stat_upgrades_follow_cost_table() {
    let (mut economy, _) = economy_with(75_000, RiskLevel::He);

    let mut spent = 0;
    while let Some(cost) = economy.stat_upgrade_cost(StatType::Justice) {
        if !economy.upgrade_stat(StatType::Justice) {
            break;
        }
        spent += cost;
    }

    // 100 + 300 + 1500 + 10000 + 30000 fit in 75000; 100000 does not
    assert_eq!(spent, 41_900);
    assert_eq!(economy.data().base_stats.justice, 6);
    assert_eq!(economy.balance(), 75_000 - 41_900);
    assert!(!economy.can_upgrade_stat(StatType::Justice));
}

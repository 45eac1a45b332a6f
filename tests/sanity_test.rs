//! Integration test: sanity regeneration and the panic cycle
//!
//! Tests the flow: sanity spent → regeneration timer → full again; sanity
//! emptied → panic hooks → stepwise recovery → panic-end hooks.

use glupo::assets::BuiltinAssets;
use glupo::character::Stats;
use glupo::core::ManualClock;
use glupo::items::{ArmorId, WeaponId};
use glupo::progression::ProgressionData;
use glupo::simulation::{Game, GameConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn game(data: ProgressionData) -> (Game, ManualClock) {
    let clock = ManualClock::new();
    let config = GameConfig {
        clock: Box::new(clock.clone()),
        rng: Box::new(ChaCha8Rng::seed_from_u64(12345)),
        ..GameConfig::default()
    };
    let game = Game::init(data, &mut BuiltinAssets, config).expect("init should succeed");
    (game, clock)
}

fn advance(game: &mut Game, clock: &ManualClock, ms: f64) {
    clock.advance(ms);
    game.process_timers();
}

#[test]
fn test_starts_full() {
    let (game, _) = game(ProgressionData::default());
    let derived = game.derived_stats();
    // Base 60 + 20 per prudence level
    assert_eq!(derived.max_sanity, 80.0);
    assert_eq!(game.sanity.current, 80.0);
    assert!(!game.sanity.is_panic);
    assert_eq!(game.pending_timers(), 0);
}

#[test]
fn test_regeneration_restarts_on_each_loss() {
    let (mut game, clock) = game(ProgressionData::default());
    let delay = game.derived_stats().regeneration_delay_ms;

    game.change_sanity(-10.0);
    assert_eq!(game.sanity.current, 70.0);
    assert_eq!(game.pending_timers(), 1);

    // Another loss halfway through pushes regeneration back
    advance(&mut game, &clock, delay / 2.0);
    game.change_sanity(-10.0);
    assert_eq!(game.pending_timers(), 1);

    advance(&mut game, &clock, delay / 2.0 + 10.0);
    assert_eq!(game.sanity.current, 60.0);

    advance(&mut game, &clock, delay);
    assert_eq!(game.sanity.current, 80.0);
    assert_eq!(game.pending_timers(), 0);
}

#[test]
fn test_gain_at_full_is_capped() {
    let (mut game, _) = game(ProgressionData::default());
    game.change_sanity(25.0);
    assert_eq!(game.sanity.current, 80.0);
    assert_eq!(game.pending_timers(), 0);
}

#[test]
fn test_full_panic_cycle_with_penitence_armor() {
    let (mut game, clock) = game(ProgressionData::default());
    let step_ms = game.derived_stats().panic_restore_delay_ms;
    assert_eq!(step_ms, 150.0);

    game.change_sanity(-200.0);
    assert!(game.sanity.is_panic);
    // Penitence armor restores 20 on entering panic
    assert_eq!(game.sanity.current, 20.0);

    // Changes are ignored while panicking
    game.change_sanity(30.0);
    assert_eq!(game.sanity.current, 20.0);

    for _ in 0..59 {
        advance(&mut game, &clock, step_ms);
    }
    assert!(game.sanity.is_panic);
    assert_eq!(game.sanity.current, 79.0);

    advance(&mut game, &clock, step_ms);
    assert!(!game.sanity.is_panic);
    assert_eq!(game.sanity.current, 80.0);
    assert_eq!(game.pending_timers(), 0);
}

#[test]
fn test_panic_cancels_pending_regeneration() {
    let (mut game, clock) = game(ProgressionData::default());
    game.change_sanity(-10.0);
    game.change_sanity(-100.0);
    assert!(game.sanity.is_panic);
    // Only the panic step remains
    assert_eq!(game.pending_timers(), 1);

    let regen = game.derived_stats().regeneration_delay_ms;
    advance(&mut game, &clock, regen + 1.0);
    assert!(game.sanity.is_panic, "regeneration never ends a panic");
}

#[test]
fn test_smile_armor_bonus_after_panic() {
    let mut data = ProgressionData::default();
    data.bought_armor.insert(ArmorId::Smile);
    data.selected_armor = ArmorId::Smile;
    let (mut game, clock) = game(data);
    let step_ms = game.derived_stats().panic_restore_delay_ms;

    game.change_sanity(-1000.0);
    assert!(game.sanity.is_panic);
    while game.sanity.is_panic {
        advance(&mut game, &clock, step_ms);
    }
    assert_eq!(game.economy.bonus_stats(), Stats::new(5, 0, 5, 5));

    advance(&mut game, &clock, 5000.0);
    assert_eq!(game.economy.bonus_stats(), Stats::ZERO);
}

#[test]
fn test_harvest_armor_shrinks_sanity_pool() {
    let mut data = ProgressionData::default();
    data.bought_armor.insert(ArmorId::Harvest);
    data.selected_armor = ArmorId::Harvest;
    data.bought_weapons.insert(WeaponId::Harvest);
    data.selected_weapon = WeaponId::Harvest;
    let (game, _) = game(data);

    let derived = game.derived_stats();
    assert_eq!(game.economy.effective_stats().prudence, 0);
    assert_eq!(derived.max_sanity, 60.0);
    assert_eq!(game.sanity.current, 60.0);
}

#[test]
fn test_equipment_change_clamps_sanity() {
    let mut data = ProgressionData {
        balance: 3_000,
        selected_armor: ArmorId::Heaven,
        ..ProgressionData::default()
    };
    data.bought_armor.insert(ArmorId::Heaven);
    let (mut game, _) = game(data);
    assert_eq!(game.derived_stats().max_sanity, 180.0);
    assert_eq!(game.sanity.current, 180.0);

    // Harvest armor strips prudence: the pool drops to 60 at once
    assert!(game.buy_armor(ArmorId::Harvest));
    assert_eq!(game.derived_stats().max_sanity, 60.0);
    assert_eq!(game.sanity.current, 60.0);

    // Switching back widens the pool but does not refill it
    assert!(game.select_armor(ArmorId::Heaven));
    assert_eq!(game.sanity.current, 60.0);
    assert!(game.select_armor(ArmorId::Harvest));
    assert_eq!(game.sanity.current, 60.0);
}

#[test]
fn test_weapon_change_clamps_sanity() {
    let mut data = ProgressionData {
        selected_weapon: WeaponId::Harvest,
        selected_armor: ArmorId::Heaven,
        ..ProgressionData::default()
    };
    data.bought_weapons.insert(WeaponId::Harvest);
    data.bought_armor.insert(ArmorId::Heaven);
    let (mut game, _) = game(data);
    // Prudence 1 + 2 (weapon) + 5 (armor)
    assert_eq!(game.sanity.current, 220.0);

    assert!(game.select_weapon(WeaponId::Penitence));
    assert_eq!(game.derived_stats().max_sanity, 180.0);
    assert_eq!(game.sanity.current, 180.0);
    assert!(!game.select_weapon(WeaponId::Twilight));
    assert_eq!(game.sanity.current, 180.0);
}

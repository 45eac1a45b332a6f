//! Integration test: Complete prestige cycle
//!
//! Tests the full flow: fresh save → reach the reset cost → prestige →
//! verify reset and kept meta-progression → spend shards on the reel

use glupo::assets::BuiltinAssets;
use glupo::character::Stats;
use glupo::core::constants::{RESET_COST, TRINKET_ROLL_COST};
use glupo::core::ManualClock;
use glupo::economy::{MemorySink, RiskLevel};
use glupo::items::{ArmorId, WeaponId};
use glupo::progression::ProgressionData;
use glupo::simulation::{Game, GameConfig};
use glupo::trinkets::TrinketId;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn game(data: ProgressionData, seed: u64) -> (Game, MemorySink) {
    let sink = MemorySink::new();
    let config = GameConfig {
        clock: Box::new(ManualClock::new()),
        rng: Box::new(ChaCha8Rng::seed_from_u64(seed)),
        sink: Box::new(sink.clone()),
        ..GameConfig::default()
    };
    let game = Game::init(data, &mut BuiltinAssets, config).expect("init should succeed");
    (game, sink)
}

/// A late-game save sitting on enough currency to prestige.
fn rich_save() -> ProgressionData {
    let mut data = ProgressionData {
        balance: RESET_COST + 1_234,
        risk_level: RiskLevel::Aleph,
        base_stats: Stats::uniform(8),
        loop_count: 2,
        light_shards: 4,
        selected_weapon: WeaponId::Twilight,
        selected_armor: ArmorId::Twilight,
        selected_trinket: Some(TrinketId::Dante),
        sound_enabled: false,
        ..ProgressionData::default()
    };
    data.bought_weapons.extend([WeaponId::Twilight, WeaponId::Smile]);
    data.bought_armor.insert(ArmorId::Twilight);
    data.bought_trinkets.insert(TrinketId::Dante);
    data
}

#[test]
fn test_cannot_prestige_early() {
    let (mut game, sink) = game(ProgressionData::default(), 12345);
    assert!(!game.economy.can_reset());
    assert!(!game.prestige());
    assert_eq!(game.economy.data().loop_count, 0);
    assert_eq!(sink.count(), 0);
}

#[test]
fn test_complete_prestige_cycle() {
    let (mut game, sink) = game(rich_save(), 12345);
    let max_before = game.derived_stats().max_sanity;
    assert_eq!(game.sanity.current, max_before);

    assert!(game.economy.can_reset());
    assert!(game.prestige());

    let data = game.economy.data();

    // Progress resets to a fresh save
    let fresh = ProgressionData::default();
    assert_eq!(data.balance, 0);
    assert_eq!(data.risk_level, RiskLevel::Zayin);
    assert_eq!(data.base_stats, fresh.base_stats);
    assert_eq!(data.selected_weapon, WeaponId::Penitence);
    assert_eq!(data.selected_armor, ArmorId::Penitence);
    assert_eq!(data.bought_weapons, fresh.bought_weapons);
    assert_eq!(data.bought_armor, fresh.bought_armor);

    // Meta-progression survives
    assert_eq!(data.loop_count, 3);
    assert_eq!(data.selected_trinket, Some(TrinketId::Dante));
    assert!(data.bought_trinkets.contains(&TrinketId::Dante));
    assert!(!data.sound_enabled);

    // Shards: 3 x (1..=5) on top of what was held
    let gained = data.light_shards - 4;
    assert!((3..=15).contains(&gained), "gained {}", gained);
    assert_eq!(gained % 3, 0);

    // Sanity fits the smaller pool
    let max_after = game.derived_stats().max_sanity;
    assert!(max_after < max_before);
    assert_eq!(game.sanity.current, max_after);

    assert_eq!(sink.last().as_ref(), Some(game.economy.data()));
}

#[test]
fn test_prestige_shard_rolls_vary_with_seed() {
    let gains: Vec<u32> = (0..20)
        .map(|seed| {
            let (mut game, _) = game(rich_save(), seed);
            assert!(game.prestige());
            game.economy.data().light_shards - 4
        })
        .collect();
    assert!(gains.iter().all(|g| g % 3 == 0 && (3..=15).contains(g)));
    assert!(gains.iter().any(|g| *g != gains[0]), "shard rolls are random");
}

#[test]
fn test_spend_shards_after_prestige() {
    let (mut game, _) = game(rich_save(), 12345);
    assert!(game.prestige());
    let shards = game.economy.data().light_shards;
    assert!(game.economy.can_buy_trinket_roll());

    let roll = game.roll_trinket().expect("enough shards for a roll");
    assert_eq!(game.economy.data().light_shards, shards - TRINKET_ROLL_COST);
    assert_eq!(roll.reel[roll.winner_index], roll.winner);
    assert!(game.economy.data().bought_trinkets.contains(&roll.winner));
    assert_eq!(roll.is_new, roll.winner != TrinketId::Dante);

    // Equip the new trinket, then toggle it off again
    assert!(game.economy.select_trinket(roll.winner));
    let expected = if roll.winner == TrinketId::Dante {
        None
    } else {
        Some(roll.winner)
    };
    assert_eq!(game.economy.data().selected_trinket, expected);
}

#[test]
fn test_roll_needs_shards() {
    let (mut game, _) = game(ProgressionData::default(), 12345);
    assert!(!game.economy.can_buy_trinket_roll());
    assert!(game.roll_trinket().is_none());
}

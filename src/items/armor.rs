use super::types::{Armor, ArmorId, ItemHooks};
use crate::character::Stats;
use crate::simulation::Game;
use rand::Rng;

const PENITENCE_PANIC_RESTORE: f64 = 20.0;
const SMILE_PANIC_END_BONUS: Stats = Stats::new(5, 0, 5, 5);
const SMILE_PANIC_END_MS: f64 = 5000.0;
const TWILIGHT_FULL_RESTORE_CHANCE: f64 = 0.5;

pub static ARMOR: [Armor; 6] = [
    Armor {
        id: ArmorId::Penitence,
        name: "Penitence",
        description: "Recovers some sanity the moment panic sets in.",
        cost: 0,
        stat_modifier: Stats::ZERO,
        hooks: ItemHooks {
            on_panic: Some(penitence_panic),
            ..ItemHooks::NONE
        },
    },
    Armor {
        id: ArmorId::RedEyes,
        name: "Red Eyes",
        description: "Sturdy and perceptive.",
        cost: 1_100,
        stat_modifier: Stats::new(3, 1, 4, 0),
        hooks: ItemHooks::NONE,
    },
    Armor {
        id: ArmorId::Harvest,
        name: "Harvest",
        description: "Strips away all prudence.",
        cost: 3_000,
        stat_modifier: Stats::new(5, -999, 5, 0),
        hooks: ItemHooks::NONE,
    },
    Armor {
        id: ArmorId::Heaven,
        name: "Heaven",
        description: "Balanced protection.",
        cost: 6_000,
        stat_modifier: Stats::new(4, 5, 6, 3),
        hooks: ItemHooks::NONE,
    },
    Armor {
        id: ArmorId::Smile,
        name: "Smile",
        description: "Leaving panic grants a burst of fortitude, temperance and justice.",
        cost: 200_000,
        stat_modifier: Stats::new(6, 2, 2, 2),
        hooks: ItemHooks {
            on_panic_end: Some(smile_panic_end),
            ..ItemHooks::NONE
        },
    },
    Armor {
        id: ArmorId::Twilight,
        name: "Twilight",
        description: "Panic may end as soon as it begins.",
        cost: 1_250_000,
        stat_modifier: Stats::uniform(10),
        hooks: ItemHooks {
            on_panic: Some(twilight_panic),
            ..ItemHooks::NONE
        },
    },
];

/// Catalog lookup. `ARMOR` is laid out in `ArmorId` declaration order.
pub fn armor(id: ArmorId) -> &'static Armor {
    &ARMOR[id as usize]
}

fn penitence_panic(game: &mut Game) {
    let max = game.derived_stats().max_sanity;
    game.sanity.restore(PENITENCE_PANIC_RESTORE, max);
}

fn smile_panic_end(game: &mut Game) {
    game.add_temporary_bonus(SMILE_PANIC_END_BONUS, SMILE_PANIC_END_MS);
}

fn twilight_panic(game: &mut Game) {
    if game.rng.gen::<f64>() < TWILIGHT_FULL_RESTORE_CHANCE {
        let max = game.derived_stats().max_sanity;
        game.sanity.restore(max, max);
    }
}

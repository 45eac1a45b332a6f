//! Weapon catalog and the hit behaviour each weapon contributes.

use super::types::{HitParams, ItemHooks, Weapon, WeaponId};
use crate::assets::SpriteId;
use crate::character::Stats;
use crate::core::Vec2;
use crate::particles::{DestroyAction, DestroyCondition, DestroyReason, Particle};
use crate::simulation::{BoxStyle, Game};
use crate::utils::{random_range, random_range_int};
use rand::Rng;

const RED_EYES_MAX_SPIDERS: u32 = 3;
const RED_EYES_SPIDER_CHANCE: f64 = 0.5;

const HARVEST_BONUS_NO_PRUDENCE: f64 = 128.0;
const HARVEST_BONUS_LOW_PRUDENCE: f64 = 64.0;
const HARVEST_LOW_PRUDENCE: i32 = 5;

const HEAVEN_MAX_ANGLE: f64 = 0.05;

const MAGIC_BULLET_BONUS_PER_BOX: u64 = 777;
const MAGIC_CIRCLE_RADIUS: f64 = 200.0;
const MAGIC_CIRCLE_TIME_MS: f64 = 750.0;
const MAGIC_BULLET_TRAVEL_MS: f64 = 250.0;
const MAGIC_BULLET_FRAME_MS: f64 = 16.67;
const SEVENTH_BULLET_TIME_MS: f64 = 5000.0;

const SMILE_MAX_BONUS: f64 = 5000.0;

const TWILIGHT_BONUS: Stats = Stats::new(0, 0, 1, 1);
const TWILIGHT_BONUS_MS: f64 = 2500.0;

pub static WEAPONS: [Weapon; 8] = [
    Weapon {
        id: WeaponId::Penitence,
        name: "Penitence",
        description: "Critical hits soothe, regular hits wear you down.",
        cost: 0,
        cooldown_ms: 250.0,
        critical_multiplier: 1.5,
        box_price: 1.0,
        stat_modifier: Stats::ZERO,
        chain_anchor: Vec2::new(345.0, 78.0),
        hooks: ItemHooks {
            on_hit: Some(penitence_hit),
            ..ItemHooks::NONE
        },
    },
    Weapon {
        id: WeaponId::RedEyes,
        name: "Red Eyes",
        description: "Hits may hatch spiders that sharpen temperance while they live.",
        cost: 1_200,
        cooldown_ms: 200.0,
        critical_multiplier: 1.5,
        box_price: 1.5,
        stat_modifier: Stats::new(4, 0, 0, 0),
        chain_anchor: Vec2::new(355.0, 58.0),
        hooks: ItemHooks {
            on_hit: Some(red_eyes_hit),
            ..ItemHooks::NONE
        },
    },
    Weapon {
        id: WeaponId::Harvest,
        name: "Harvest",
        description: "Reaps a bonus that grows as prudence shrinks.",
        cost: 3_000,
        cooldown_ms: 600.0,
        critical_multiplier: 6.0,
        box_price: 3.0,
        stat_modifier: Stats::new(0, 2, 0, 0),
        chain_anchor: Vec2::new(235.0, 32.0),
        hooks: ItemHooks {
            on_hit: Some(harvest_hit),
            ..ItemHooks::NONE
        },
    },
    Weapon {
        id: WeaponId::Heaven,
        name: "Heaven",
        description: "Perfectly vertical strikes are rewarded.",
        cost: 6_000,
        cooldown_ms: 500.0,
        critical_multiplier: 2.0,
        box_price: 6.0,
        stat_modifier: Stats::ZERO,
        chain_anchor: Vec2::new(265.0, 26.0),
        hooks: ItemHooks {
            on_hit: Some(heaven_hit),
            ..ItemHooks::NONE
        },
    },
    Weapon {
        id: WeaponId::GoldRush,
        name: "Gold Rush",
        description: "Fast and greedy. Critical hits cost extra sanity.",
        cost: 12_000,
        cooldown_ms: 100.0,
        critical_multiplier: 3.0,
        box_price: 10.0,
        stat_modifier: Stats::new(4, 0, -2, 0),
        chain_anchor: Vec2::new(128.0, 60.0),
        hooks: ItemHooks {
            on_hit: Some(gold_rush_hit),
            ..ItemHooks::NONE
        },
    },
    Weapon {
        id: WeaponId::MagicBullet,
        name: "Magic Bullet",
        description: "Critical hits summon a circle that fires a bullet. Mind the seventh.",
        cost: 40_000,
        cooldown_ms: 1000.0,
        critical_multiplier: 1.0,
        box_price: 0.0,
        stat_modifier: Stats::uniform(3),
        chain_anchor: Vec2::new(370.0, 32.0),
        hooks: ItemHooks {
            on_hit: Some(magic_bullet_hit),
            ..ItemHooks::NONE
        },
    },
    Weapon {
        id: WeaponId::Smile,
        name: "Smile",
        description: "Pays out best when sanity is already low.",
        cost: 200_000,
        cooldown_ms: 500.0,
        critical_multiplier: 6.0,
        box_price: 100.0,
        stat_modifier: Stats::new(5, 0, 0, 0),
        chain_anchor: Vec2::new(500.0, 140.0),
        hooks: ItemHooks {
            on_hit: Some(smile_hit),
            ..ItemHooks::NONE
        },
    },
    Weapon {
        id: WeaponId::Twilight,
        name: "Twilight",
        description: "Critical hits briefly raise temperance and justice.",
        cost: 1_250_000,
        cooldown_ms: 250.0,
        critical_multiplier: 4.0,
        box_price: 60.0,
        stat_modifier: Stats::uniform(5),
        chain_anchor: Vec2::new(495.0, 48.0),
        hooks: ItemHooks {
            on_hit: Some(twilight_hit),
            ..ItemHooks::NONE
        },
    },
];

/// Catalog lookup. `WEAPONS` is laid out in `WeaponId` declaration order.
pub fn weapon(id: WeaponId) -> &'static Weapon {
    &WEAPONS[id as usize]
}

fn penitence_hit(game: &mut Game, hit: &HitParams) {
    if hit.is_critical {
        game.change_sanity(5.0);
    } else {
        game.change_sanity(-4.0);
    }
}

fn red_eyes_hit(game: &mut Game, hit: &HitParams) {
    game.change_sanity(-6.0);

    if game.rng.gen::<f64>() > RED_EYES_SPIDER_CHANCE
        || game.item_state.live_spiders >= RED_EYES_MAX_SPIDERS
    {
        return;
    }

    game.item_state.live_spiders += 1;
    game.economy.add_bonus_stats(Stats::new(0, 0, 1, 0));

    let offset = Vec2::new(
        random_range(&mut game.rng, -5.0, 15.0),
        random_range(&mut game.rng, -5.0, 15.0),
    );
    game.particles.spawn(Particle {
        opacity_decay: 0.01,
        on_destroy: Some(DestroyAction::SpiderExpired),
        ..Particle::new(hit.position + offset, SpriteId::Spider, 40.0)
    });
}

/// A spider particle left the field: its temperance goes with it.
pub(crate) fn red_eyes_spider_expired(game: &mut Game) {
    game.item_state.live_spiders = game.item_state.live_spiders.saturating_sub(1);
    game.economy.add_bonus_stats(Stats::new(0, 0, -1, 0));
}

fn harvest_hit(game: &mut Game, hit: &HitParams) {
    game.change_sanity(-15.0);

    let prudence = game.economy.effective_stats().prudence;
    let mut bonus = if prudence == 0 {
        HARVEST_BONUS_NO_PRUDENCE
    } else if prudence < HARVEST_LOW_PRUDENCE {
        HARVEST_BONUS_LOW_PRUDENCE
    } else {
        0.0
    };
    if hit.is_critical {
        bonus *= weapon(WeaponId::Harvest).critical_multiplier;
    }
    let bonus = randomized_half(game, bonus);

    game.economy.add_balance(bonus);
    let count = (bonus as f64 / 64.0).ceil() as u32;
    game.spawn_boxes(
        hit.position,
        count,
        BoxStyle {
            sprite: SpriteId::BoxHarvest,
            size: 48.0,
            ..BoxStyle::default()
        },
    );
}

fn heaven_hit(game: &mut Game, hit: &HitParams) {
    let angle = game.weapon_view.angle.abs();
    game.change_sanity(-2.0);

    if angle > HEAVEN_MAX_ANGLE {
        return;
    }

    let bonus = if angle < 0.01 {
        4
    } else if angle < 0.02 {
        2
    } else {
        1
    };

    game.economy
        .add_boxes(bonus, if hit.is_critical { 2.0 } else { 1.0 });
    game.spawn_boxes(
        hit.position,
        bonus,
        BoxStyle {
            sprite: SpriteId::HeavenBonus,
            size: if hit.is_critical { 48.0 } else { 32.0 },
            gravity: 0.1,
        },
    );
}

fn gold_rush_hit(game: &mut Game, hit: &HitParams) {
    game.change_sanity(-1.0);
    if hit.is_critical {
        game.change_sanity(-2.0);
    }
}

fn next_bullet_is_seventh(game: &Game) -> bool {
    (game.item_state.bullets_fired + 1) % 7 == 0
}

fn magic_bullet_hit(game: &mut Game, hit: &HitParams) {
    if !hit.is_critical {
        return;
    }

    let center = game.character_center();
    let angle = random_range(&mut game.rng, 0.0, std::f64::consts::TAU);
    let circle = center + Vec2::from_angle(angle, MAGIC_CIRCLE_RADIUS);

    let seventh = next_bullet_is_seventh(game);
    let target = if seventh { game.pointer.position } else { center };
    let direction = (target - circle).normalized().unwrap_or(Vec2::ZERO);

    let time_left = if seventh {
        random_range(&mut game.rng, 500.0, MAGIC_CIRCLE_TIME_MS)
    } else {
        MAGIC_CIRCLE_TIME_MS
    };
    let sprite = if seventh {
        SpriteId::MagicCircleSeventh
    } else {
        SpriteId::MagicCircle
    };

    // Near-zero velocity so the circle faces its target without drifting.
    game.particles.spawn(Particle {
        velocity: direction * 0.001,
        time_left,
        on_destroy: Some(DestroyAction::FireBullet { from: circle }),
        ..Particle::new(circle, sprite, 96.0)
    });
}

/// A magic circle expired: launch its bullet.
pub(crate) fn fire_magic_bullet(game: &mut Game, from: Vec2) {
    let seventh = next_bullet_is_seventh(game);
    let target = if seventh {
        game.pointer.position
    } else {
        game.character_center()
    };

    let frames = MAGIC_BULLET_TRAVEL_MS / MAGIC_BULLET_FRAME_MS;
    let (sprite, time_left, condition) = if seventh {
        (
            SpriteId::MagicShotSeventh,
            SEVENTH_BULLET_TIME_MS,
            DestroyCondition::WeaponHit,
        )
    } else {
        (
            SpriteId::MagicShot,
            MAGIC_BULLET_TRAVEL_MS,
            DestroyCondition::CharacterHit,
        )
    };

    game.particles.spawn(Particle {
        velocity: (target - from) * (1.0 / frames),
        time_left,
        destroy_condition: Some(condition),
        on_destroy: Some(DestroyAction::BulletArrived { seventh }),
        ..Particle::new(from, sprite, 48.0)
    });
    game.item_state.bullets_fired += 1;
}

/// Resolves a bullet. Regular bullets pay out only when they reach the
/// character; the seventh drains sanity only when it reaches the weapon.
pub(crate) fn magic_bullet_arrived(
    game: &mut Game,
    position: Vec2,
    seventh: bool,
    reason: DestroyReason,
) {
    if seventh {
        if reason == DestroyReason::WeaponHit {
            let current = game.sanity.current;
            if current > 0.0 {
                game.change_sanity(-current);
            }
        }
        return;
    }

    if reason != DestroyReason::CharacterHit {
        return;
    }

    let derived = game.derived_stats();
    let boxes = random_range_int(&mut game.rng, derived.min_boxes, derived.max_boxes);
    game.economy
        .add_balance(boxes as u64 * MAGIC_BULLET_BONUS_PER_BOX);

    let count = random_range_int(&mut game.rng, 1, 7);
    game.spawn_boxes(
        position,
        count,
        BoxStyle {
            sprite: SpriteId::BoxWhite,
            size: 48.0,
            ..BoxStyle::default()
        },
    );
}

fn smile_hit(game: &mut Game, hit: &HitParams) {
    if game.sanity.current >= game.derived_stats().max_sanity / 2.0 {
        game.change_sanity(-25.0);
        return;
    }

    game.change_sanity(-5.0);
    let bonus = randomized_half(game, SMILE_MAX_BONUS);
    game.economy.add_balance(bonus);

    let count = (bonus as f64 / 1000.0).ceil() as u32;
    game.spawn_boxes(
        hit.position,
        count,
        BoxStyle {
            size: 64.0,
            ..BoxStyle::default()
        },
    );
}

fn twilight_hit(game: &mut Game, hit: &HitParams) {
    game.change_sanity(-6.0);
    if hit.is_critical {
        game.add_temporary_bonus(TWILIGHT_BONUS, TWILIGHT_BONUS_MS);
    }
}

/// Uniform in `[amount / 2, amount]`, floored.
fn randomized_half(game: &mut Game, amount: f64) -> u64 {
    let roll = game.rng.gen::<f64>();
    (amount / 2.0 + roll * amount / 2.0).floor().max(0.0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_matches_ids() {
        for id in WeaponId::all() {
            assert_eq!(weapon(id).id, id);
        }
    }

    #[test]
    fn test_costs_ascend() {
        let costs: Vec<u64> = WEAPONS.iter().map(|w| w.cost).collect();
        let mut sorted = costs.clone();
        sorted.sort();
        assert_eq!(costs, sorted);
        assert_eq!(weapon(WeaponId::Penitence).cost, 0);
    }

    #[test]
    fn test_every_weapon_has_hit_hook() {
        for w in WEAPONS.iter() {
            assert!(w.hooks.on_hit.is_some(), "{} lacks on_hit", w.name);
            assert!(w.hooks.on_panic.is_none());
        }
    }

    #[test]
    fn test_magic_bullet_pays_no_boxes() {
        assert_eq!(weapon(WeaponId::MagicBullet).box_price, 0.0);
    }
}

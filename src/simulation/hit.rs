//! Pointer input and the hit pipeline.

use super::game::{BoxStyle, Game};
use crate::assets::{SoundId, SpriteId};
use crate::character::{Character, DerivedStats};
use crate::core::constants::*;
use crate::core::Vec2;
use crate::items::HitParams;
use crate::particles::Particle;
use crate::utils::{choose, random_range, random_range_int};
use rand::Rng;

const HIT_SOUNDS: [SoundId; 3] = [SoundId::Hit1, SoundId::Hit2, SoundId::Hit3];
const HURT_SOUNDS: [SoundId; 2] = [SoundId::Hurt1, SoundId::Hurt2];

/// Reward sprite and particle count for a throughput, so heavy builds spawn
/// fewer but fancier boxes.
pub fn box_tier(boxes_per_second: u64, count: u32) -> (SpriteId, u32) {
    if boxes_per_second > BOX_TIER_WHITE_BPS {
        (SpriteId::BoxWhite, count.div_ceil(4))
    } else if boxes_per_second > BOX_TIER_RED_BPS {
        (SpriteId::BoxRed, count.div_ceil(3))
    } else if boxes_per_second > BOX_TIER_BLUE_BPS {
        (SpriteId::BoxBlue, count.div_ceil(2))
    } else {
        (SpriteId::Box, count)
    }
}

/// Probability of the hurt cue: zero at half sanity or above, rising
/// linearly toward empty.
pub fn hurt_chance(sanity_fraction: f64) -> f64 {
    if sanity_fraction >= HURT_SANITY_FRACTION {
        return 0.0;
    }
    HURT_BASE_CHANCE + HURT_CHANCE_SPAN * (1.0 - sanity_fraction / HURT_SANITY_FRACTION)
}

impl Game {
    pub fn pointer_enter(&mut self, position: Vec2) {
        if !self.accepting_input {
            return;
        }
        self.pointer.position = position;
        self.pointer.last_position = Some(position);
        self.weapon_view.visible = true;
    }

    pub fn pointer_leave(&mut self) {
        self.pointer.last_position = None;
        self.weapon_view.visible = false;
    }

    /// Moves the weapon and registers a hit when the swing is fast enough,
    /// close enough to the character and outside the cooldown.
    pub fn pointer_move(&mut self, position: Vec2) {
        if !self.accepting_input {
            return;
        }

        let previous = self.pointer.last_position.unwrap_or(position);
        let speed = (position - previous) * self.swing_scale;
        self.pointer.position = position;
        self.pointer.last_position = Some(position);
        self.weapon_view.follow(position, speed, self.surface_size.x);
        self.weapon_view.visible = true;

        if self.sanity.is_panic {
            return;
        }
        if position.distance(self.character_center()) >= Character::hit_radius() {
            return;
        }
        if speed.length() <= HIT_SPEED_THRESHOLD {
            return;
        }

        let now = self.now();
        let derived = self.derived_stats();
        if self
            .last_hit_ms
            .is_some_and(|last| now - last <= derived.real_cooldown_ms)
        {
            return;
        }

        self.last_hit_ms = Some(now);
        self.handle_hit(position, &derived);
    }

    fn handle_hit(&mut self, position: Vec2, derived: &DerivedStats) {
        let boxes = random_range_int(&mut self.rng, derived.min_boxes, derived.max_boxes);
        let is_critical = self.rng.gen::<f64>() < derived.critical_chance;
        let multiplier = if is_critical {
            derived.critical_multiplier
        } else {
            1.0
        };
        self.economy.add_boxes(boxes, multiplier);

        let flash = if is_critical {
            (SpriteId::HitCritical, HIT_FLASH_CRIT_SIZE)
        } else {
            (SpriteId::HitBasic, HIT_FLASH_SIZE)
        };
        self.particles.spawn(Particle {
            time_left: HIT_FLASH_TIME_MS,
            opacity_decay: BOX_OPACITY_DECAY,
            ..Particle::new(position, flash.0, flash.1)
        });

        if derived.box_price > 0.0 {
            let (sprite, count) = box_tier(derived.boxes_per_second().floor() as u64, boxes);
            let base = if is_critical {
                BOX_CRIT_SIZE
            } else {
                BOX_BASE_SIZE
            };
            self.spawn_boxes(
                position,
                count,
                BoxStyle {
                    sprite,
                    size: base + (derived.box_price + 1.0).log2() * 4.0,
                    ..BoxStyle::default()
                },
            );
        }

        let impulse = random_range(&mut self.rng, -HIT_WOBBLE_IMPULSE, HIT_WOBBLE_IMPULSE);
        self.character.nudge(impulse);

        self.run_hit_hooks(&HitParams {
            is_critical,
            position,
        });

        self.play_hit_sounds(is_critical);
    }

    fn play_hit_sounds(&mut self, is_critical: bool) {
        let hit = if is_critical {
            SoundId::Critical
        } else {
            choose(&mut self.rng, &HIT_SOUNDS)
                .copied()
                .unwrap_or(SoundId::Hit1)
        };
        self.play_sound_varied(hit, 0.95, 1.05);

        let chance = hurt_chance(self.sanity_fraction());
        if chance > 0.0 && self.rng.gen::<f64>() < chance {
            let hurt = choose(&mut self.rng, &HURT_SOUNDS)
                .copied()
                .unwrap_or(SoundId::Hurt1);
            self.play_sound_varied(hurt, 0.9, 1.1);
        }
    }
}

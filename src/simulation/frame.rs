//! Per-frame update and draw.

use super::game::Game;
use crate::assets::{SoundId, SpriteId};
use crate::character::Character;
use crate::core::constants::*;
use crate::core::Vec2;
use crate::items::weapons::{fire_magic_bullet, magic_bullet_arrived, red_eyes_spider_expired};
use crate::particles::{CollisionWorld, DestroyAction, Destroyed};
use crate::render::{Rgb, Surface};
use crate::utils::random_range;
use rand::Rng;

impl Game {
    /// Advances the simulation to `timestamp` and draws it: character,
    /// particles, weapon and pendant, then the sanity gauge.
    pub fn render_frame(&mut self, surface: &mut dyn Surface, timestamp: f64) {
        let delta_ms = self
            .last_frame_ms
            .map_or(0.0, |last| (timestamp - last).max(0.0));
        self.last_frame_ms = Some(timestamp);
        self.surface_size = Vec2::new(surface.width(), surface.height());

        self.process_timers();
        self.sanity.clamp_to(self.derived_stats().max_sanity);

        surface.clear();
        self.draw_character(surface);
        self.update_particles(delta_ms);
        self.particles.draw(surface);
        self.draw_weapon(surface);
        self.draw_gauge(surface);
        self.update_idle_sound();
    }

    fn draw_character(&mut self, surface: &mut dyn Surface) {
        self.character.update_wobble();

        let sprite = if self.sanity_fraction() < HURT_SANITY_FRACTION {
            SpriteId::CharacterHurt
        } else {
            SpriteId::CharacterIdle
        };
        let info = self.assets.sprite(sprite);
        let size = Vec2::new(info.width, info.height) * CHARACTER_SPRITE_SCALE;
        let center = Vec2::new(self.surface_size.x / 2.0, self.surface_size.y / 2.0);

        surface.fill_ellipse(
            center + Vec2::new(0.0, size.y / 2.0),
            Vec2::new(size.x / 2.0, size.x / 8.0),
            Rgb::SHADOW,
        );
        surface.draw_sprite(sprite, center, size, self.character.rotation, 1.0);
    }

    fn update_particles(&mut self, delta_ms: f64) {
        let weapon_sprite = self.assets.sprite(self.economy.selected_weapon().sprite());
        let world = CollisionWorld {
            width: self.surface_size.x,
            height: self.surface_size.y,
            character_center: self.character_center(),
            character_radius: Character::collision_radius(),
            weapon_hitbox: self.weapon_view.hitbox(weapon_sprite),
        };

        for destroyed in self.particles.update(&world, delta_ms) {
            self.apply_destroy_action(destroyed);
        }
    }

    fn apply_destroy_action(&mut self, destroyed: Destroyed) {
        let Some(action) = destroyed.particle.on_destroy else {
            return;
        };
        match action {
            DestroyAction::BoxPickup => self.play_sound(SoundId::BoxPickup, 1.0, BOX_PICKUP_VOLUME),
            DestroyAction::SpiderExpired => red_eyes_spider_expired(self),
            DestroyAction::FireBullet { from } => fire_magic_bullet(self, from),
            DestroyAction::BulletArrived { seventh } => magic_bullet_arrived(
                self,
                destroyed.particle.position,
                seventh,
                destroyed.reason,
            ),
        }
    }

    fn panic_jitter(&mut self, amount: f64) -> Vec2 {
        if !self.sanity.is_panic {
            return Vec2::ZERO;
        }
        Vec2::new(
            random_range(&mut self.rng, -amount, amount),
            random_range(&mut self.rng, -amount, amount),
        )
    }

    fn draw_weapon(&mut self, surface: &mut dyn Surface) {
        if !self.weapon_view.visible {
            return;
        }
        let weapon = self.economy.selected_weapon();
        let sprite = self.assets.sprite(weapon.sprite());
        let trinket = self.economy.data().selected_trinket;
        let jitter = self.panic_jitter(PANIC_WEAPON_JITTER);

        let anchor = self.weapon_view.anchor(weapon, sprite) + jitter;
        self.weapon_view.update_chain(trinket, anchor);
        self.weapon_view.draw(surface, weapon, sprite, trinket, jitter);
    }

    fn draw_gauge(&mut self, surface: &mut dyn Surface) {
        let max_sanity = self.derived_stats().max_sanity;
        self.gauge.update(self.sanity.current);
        let jitter = self.panic_jitter(PANIC_GAUGE_JITTER);
        self.gauge
            .draw(surface, max_sanity, self.sanity.is_panic, jitter);
    }

    /// Plays the idle cue every 5-10 s once the character has not been hit
    /// for a while.
    fn update_idle_sound(&mut self) {
        let now = self.now();
        if self
            .last_hit_ms
            .is_some_and(|last| now < last + IDLE_QUIET_MS)
        {
            self.next_idle_sound_ms = None;
            return;
        }

        match self.next_idle_sound_ms {
            Some(due) if now < due => {}
            Some(_) => {
                self.play_sound_varied(SoundId::Idle, 0.9, 1.2);
                self.schedule_idle_sound(now);
            }
            None => self.schedule_idle_sound(now),
        }
    }

    fn schedule_idle_sound(&mut self, now: f64) {
        let jitter = self.rng.gen::<f64>() * IDLE_JITTER_MS;
        self.next_idle_sound_ms = Some(now + IDLE_QUIET_MS + jitter);
    }
}

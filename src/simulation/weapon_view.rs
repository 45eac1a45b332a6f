//! Pose of the equipped weapon following the pointer, plus its pendant.

use crate::assets::SpriteInfo;
use crate::chain::Chain;
use crate::core::constants::*;
use crate::core::{OrientedRect, Vec2};
use crate::items::Weapon;
use crate::render::Surface;
use crate::trinkets::TrinketId;
use std::f64::consts::FRAC_PI_2;

#[derive(Debug, Clone, Default)]
pub struct WeaponView {
    pub position: Vec2,
    /// Pointer displacement since the previous move event.
    pub speed: Vec2,
    /// Tilt in radians, positive when swinging right.
    pub angle: f64,
    pub visible: bool,
    /// Present only while a trinket is equipped.
    pub chain: Option<Chain>,
}

impl WeaponView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn follow(&mut self, position: Vec2, speed: Vec2, surface_width: f64) {
        self.position = position;
        self.speed = speed;
        self.angle = tilt_angle(speed.x, surface_width);
    }

    /// Rotation applied when drawing: sprites point right, the weapon hangs down.
    pub fn orientation(&self) -> f64 {
        FRAC_PI_2 - self.angle
    }

    pub fn draw_size(sprite: SpriteInfo) -> Vec2 {
        Vec2::new(sprite.width, sprite.height) * WEAPON_SCALE
    }

    /// Surface position of the weapon's chain anchor.
    pub fn anchor(&self, weapon: &Weapon, sprite: SpriteInfo) -> Vec2 {
        let local = weapon.chain_anchor * WEAPON_SCALE - Self::draw_size(sprite) * 0.5;
        self.position + local.rotated(self.orientation())
    }

    /// Collision box of the drawn sprite, slightly inset. `None` while hidden.
    pub fn hitbox(&self, sprite: SpriteInfo) -> Option<OrientedRect> {
        if !self.visible {
            return None;
        }
        Some(OrientedRect {
            center: self.position,
            half_extents: Self::draw_size(sprite) * (WEAPON_HITBOX_SCALE / 2.0),
            orientation: self.orientation(),
        })
    }

    /// Steps the pendant toward `anchor`, creating it on first use and
    /// dropping it when nothing is equipped.
    pub fn update_chain(&mut self, trinket: Option<TrinketId>, anchor: Vec2) {
        match trinket {
            Some(_) => self
                .chain
                .get_or_insert_with(|| Chain::new(anchor))
                .update(anchor),
            None => self.chain = None,
        }
    }

    pub fn draw(
        &self,
        surface: &mut dyn Surface,
        weapon: &Weapon,
        sprite: SpriteInfo,
        trinket: Option<TrinketId>,
        jitter: Vec2,
    ) {
        if let (Some(chain), Some(trinket)) = (&self.chain, trinket) {
            chain.draw(surface, trinket);
        }
        surface.draw_sprite(
            weapon.sprite(),
            self.position + jitter,
            Self::draw_size(sprite),
            self.orientation(),
            1.0,
        );
    }
}

/// `tanh` keeps the tilt bounded however fast the pointer moves.
pub fn tilt_angle(dx: f64, surface_width: f64) -> f64 {
    if surface_width <= 0.0 {
        return 0.0;
    }
    (dx / (WEAPON_TILT_SPEED_FRACTION * surface_width)).tanh() * WEAPON_MAX_TILT_DEG.to_radians()
}

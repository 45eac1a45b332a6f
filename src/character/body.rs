use crate::core::constants::*;
use crate::core::Vec2;

/// The hittable figure in the middle of the play-field.
#[derive(Debug, Clone, Default)]
pub struct Character {
    pub rotation: f64,
    pub rotational_velocity: f64,
}

impl Character {
    pub fn new() -> Self {
        Self::default()
    }

    /// Centre of the hit box for a surface of the given size.
    pub fn center(width: f64, height: f64) -> Vec2 {
        Vec2::new(width / 2.0, height * CHARACTER_Y_FRACTION)
    }

    /// Hit radius: half the larger bounding dimension.
    pub fn hit_radius() -> f64 {
        CHARACTER_WIDTH.max(CHARACTER_HEIGHT) / 2.0
    }

    /// Radius used by particles colliding with the character.
    pub fn collision_radius() -> f64 {
        CHARACTER_WIDTH.max(CHARACTER_HEIGHT) * CHARACTER_HIT_RADIUS_FRACTION
    }

    pub fn nudge(&mut self, impulse: f64) {
        self.rotational_velocity += impulse;
    }

    /// Damped spring back to upright, bouncing off the tilt limit.
    pub fn update_wobble(&mut self) {
        self.rotation += self.rotational_velocity;
        self.rotational_velocity *= WOBBLE_DAMPING;
        self.rotational_velocity -= self.rotation * WOBBLE_SPRING;

        let max = WOBBLE_MAX_ROTATION_DEG.to_radians();
        if self.rotation > max {
            self.rotation = max;
            self.rotational_velocity = -self.rotational_velocity.abs() * WOBBLE_BOUNCE;
        } else if self.rotation < -max {
            self.rotation = -max;
            self.rotational_velocity = self.rotational_velocity.abs() * WOBBLE_BOUNCE;
        }
    }
}

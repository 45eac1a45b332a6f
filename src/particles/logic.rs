use super::types::{DestroyCondition, DestroyReason, Destroyed, Particle};
use crate::core::constants::WALL_DAMPING;
use crate::core::{OrientedRect, Vec2};
use crate::render::Surface;

/// Everything a particle can collide with during one frame.
#[derive(Debug, Clone, Copy)]
pub struct CollisionWorld {
    pub width: f64,
    pub height: f64,
    pub character_center: Vec2,
    pub character_radius: f64,
    /// `None` while the weapon is hidden.
    pub weapon_hitbox: Option<OrientedRect>,
}

impl CollisionWorld {
    fn satisfies(&self, condition: DestroyCondition, position: Vec2) -> bool {
        match condition {
            DestroyCondition::CharacterHit => {
                position.distance(self.character_center) <= self.character_radius
            }
            DestroyCondition::WeaponHit => self
                .weapon_hitbox
                .is_some_and(|hitbox| hitbox.contains(position)),
        }
    }
}

/// Live particles. Spawning order is preserved.
#[derive(Debug, Default)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    /// Removes every particle without running destroy actions.
    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Advances every particle by one frame and returns those that were
    /// removed, in order. Each removed particle appears exactly once.
    pub fn update(&mut self, world: &CollisionWorld, delta_ms: f64) -> Vec<Destroyed> {
        let mut destroyed = Vec::new();
        let mut kept = Vec::with_capacity(self.particles.len());

        for mut particle in self.particles.drain(..) {
            match step(&mut particle, world, delta_ms) {
                Some(reason) => destroyed.push(Destroyed { particle, reason }),
                None => kept.push(particle),
            }
        }

        self.particles = kept;
        destroyed
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        for particle in &self.particles {
            surface.draw_sprite(
                particle.sprite,
                particle.position,
                Vec2::new(particle.size, particle.size),
                particle.rotation,
                particle.opacity.clamp(0.0, 1.0),
            );
        }
    }
}

/// One frame of physics for one particle. Returns the destroy reason if it
/// should be removed.
fn step(particle: &mut Particle, world: &CollisionWorld, delta_ms: f64) -> Option<DestroyReason> {
    particle.position += particle.velocity;
    particle.velocity.y += particle.gravity;
    particle.rotation = particle.velocity.angle();

    if let Some(condition) = particle.destroy_condition {
        if world.satisfies(condition, particle.position) {
            return Some(condition.reason());
        }
    }

    let right = world.width - particle.size;
    if particle.position.x <= 0.0 || particle.position.x >= right {
        particle.velocity.x = -particle.velocity.x * WALL_DAMPING;
        particle.position.x = if particle.position.x <= 0.0 { 0.0 } else { right };
    }

    if particle.position.y <= 0.0 {
        particle.velocity.y = particle.velocity.y.abs() * WALL_DAMPING;
        particle.position.y = 0.0;
    }

    if particle.position.y >= world.height {
        return Some(DestroyReason::Default);
    }

    particle.opacity -= particle.opacity_decay;
    if particle.opacity <= 0.0 {
        return Some(DestroyReason::Default);
    }

    particle.time_left -= delta_ms;
    if particle.time_left <= 0.0 {
        return Some(DestroyReason::Default);
    }

    None
}

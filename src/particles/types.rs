use crate::assets::SpriteId;
use crate::core::Vec2;

/// Named collision predicate that can end a particle early.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestroyCondition {
    /// Within a quarter of the character's bounding size of its centre.
    CharacterHit,
    /// Inside the weapon's oriented hitbox.
    WeaponHit,
}

impl DestroyCondition {
    pub fn reason(&self) -> DestroyReason {
        match self {
            DestroyCondition::CharacterHit => DestroyReason::CharacterHit,
            DestroyCondition::WeaponHit => DestroyReason::WeaponHit,
        }
    }
}

/// Why a particle was removed. `Default` covers leaving the field, fading
/// out and running out of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestroyReason {
    Default,
    CharacterHit,
    WeaponHit,
}

impl DestroyReason {
    pub fn name(&self) -> &'static str {
        match self {
            DestroyReason::Default => "default",
            DestroyReason::CharacterHit => "character-hit",
            DestroyReason::WeaponHit => "weapon-hit",
        }
    }
}

/// What happens when a particle is destroyed. Applied by the simulation
/// after the particle pass, so actions may freely spawn new particles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DestroyAction {
    BoxPickup,
    SpiderExpired,
    FireBullet { from: Vec2 },
    BulletArrived { seventh: bool },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f64,
    pub opacity: f64,
    pub opacity_decay: f64,
    pub rotation: f64,
    pub sprite: SpriteId,
    /// Remaining lifetime in ms; `f64::INFINITY` for none.
    pub time_left: f64,
    pub gravity: f64,
    pub destroy_condition: Option<DestroyCondition>,
    pub on_destroy: Option<DestroyAction>,
}

impl Particle {
    /// A motionless, fully opaque particle that never times out.
    pub fn new(position: Vec2, sprite: SpriteId, size: f64) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            size,
            opacity: 1.0,
            opacity_decay: 0.0,
            rotation: 0.0,
            sprite,
            time_left: f64::INFINITY,
            gravity: 0.0,
            destroy_condition: None,
            on_destroy: None,
        }
    }
}

/// A particle that has just been removed, with the reason it went.
#[derive(Debug, Clone, PartialEq)]
pub struct Destroyed {
    pub particle: Particle,
    pub reason: DestroyReason,
}

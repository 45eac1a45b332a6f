//! Short-lived physical entities: reward boxes, hit flashes, minions and
//! projectiles.

pub mod logic;
pub mod types;

pub use logic::{CollisionWorld, ParticleSystem};
pub use types::{DestroyAction, DestroyCondition, DestroyReason, Destroyed, Particle};

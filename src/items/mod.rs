//! Weapon and armor catalogs with their hook tables.

pub mod armor;
pub mod types;
pub mod weapons;

pub use armor::{armor, ARMOR};
pub use types::{Armor, ArmorId, HitHook, HitParams, ItemHooks, PanicHook, Weapon, WeaponId};
pub use weapons::{weapon, WEAPONS};

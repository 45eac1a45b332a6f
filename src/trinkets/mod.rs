//! Cosmetic pendants obtained from the gacha reel.

pub mod data;
pub mod types;

pub use data::{trinket, trinkets_by_rarity, TRINKETS};
pub use types::{Trinket, TrinketId, TrinketRarity};

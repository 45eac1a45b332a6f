pub mod body;
pub mod derived_stats;
pub mod stats;

pub use body::Character;
pub use derived_stats::{critical_chance, DerivedStats};
pub use stats::{StatType, Stats};

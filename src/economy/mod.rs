//! Currency, risk tiers, shop rules, prestige and the trinket gacha.

pub mod gacha;
pub mod logic;
pub mod risk;

pub use gacha::{create_reel, pick_winner_index, TrinketRoll};
pub use logic::{CommitSink, Economy, MemorySink, NullSink, ShopEntry, TrinketListing};
pub use risk::RiskLevel;

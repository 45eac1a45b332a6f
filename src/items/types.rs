use crate::assets::SpriteId;
use crate::character::Stats;
use crate::core::Vec2;
use crate::simulation::Game;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WeaponId {
    #[serde(rename = "weapon.penitence")]
    Penitence,
    #[serde(rename = "weapon.red-eyes")]
    RedEyes,
    #[serde(rename = "weapon.harvest")]
    Harvest,
    #[serde(rename = "weapon.heaven")]
    Heaven,
    #[serde(rename = "weapon.gold-rush")]
    GoldRush,
    #[serde(rename = "weapon.magic-bullet")]
    MagicBullet,
    #[serde(rename = "weapon.smile")]
    Smile,
    #[serde(rename = "weapon.twilight")]
    Twilight,
}

impl WeaponId {
    pub fn all() -> [WeaponId; 8] {
        [
            WeaponId::Penitence,
            WeaponId::RedEyes,
            WeaponId::Harvest,
            WeaponId::Heaven,
            WeaponId::GoldRush,
            WeaponId::MagicBullet,
            WeaponId::Smile,
            WeaponId::Twilight,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            WeaponId::Penitence => "weapon.penitence",
            WeaponId::RedEyes => "weapon.red-eyes",
            WeaponId::Harvest => "weapon.harvest",
            WeaponId::Heaven => "weapon.heaven",
            WeaponId::GoldRush => "weapon.gold-rush",
            WeaponId::MagicBullet => "weapon.magic-bullet",
            WeaponId::Smile => "weapon.smile",
            WeaponId::Twilight => "weapon.twilight",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ArmorId {
    #[serde(rename = "armor.penitence")]
    Penitence,
    #[serde(rename = "armor.red-eyes")]
    RedEyes,
    #[serde(rename = "armor.harvest")]
    Harvest,
    #[serde(rename = "armor.heaven")]
    Heaven,
    #[serde(rename = "armor.smile")]
    Smile,
    #[serde(rename = "armor.twilight")]
    Twilight,
}

impl ArmorId {
    pub fn all() -> [ArmorId; 6] {
        [
            ArmorId::Penitence,
            ArmorId::RedEyes,
            ArmorId::Harvest,
            ArmorId::Heaven,
            ArmorId::Smile,
            ArmorId::Twilight,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            ArmorId::Penitence => "armor.penitence",
            ArmorId::RedEyes => "armor.red-eyes",
            ArmorId::Harvest => "armor.harvest",
            ArmorId::Heaven => "armor.heaven",
            ArmorId::Smile => "armor.smile",
            ArmorId::Twilight => "armor.twilight",
        }
    }
}

/// What a successful hit hands to `on_hit` hooks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitParams {
    pub is_critical: bool,
    pub position: Vec2,
}

pub type HitHook = fn(&mut Game, &HitParams);
pub type PanicHook = fn(&mut Game);

/// Optional extension points an item contributes. Resolved by id through the
/// catalog; the simulation never needs to know which item it is calling.
#[derive(Clone, Copy, Default)]
pub struct ItemHooks {
    pub on_hit: Option<HitHook>,
    pub on_panic: Option<PanicHook>,
    pub on_panic_end: Option<PanicHook>,
}

impl ItemHooks {
    pub const NONE: ItemHooks = ItemHooks {
        on_hit: None,
        on_panic: None,
        on_panic_end: None,
    };
}

impl std::fmt::Debug for ItemHooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemHooks")
            .field("on_hit", &self.on_hit.is_some())
            .field("on_panic", &self.on_panic.is_some())
            .field("on_panic_end", &self.on_panic_end.is_some())
            .finish()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Weapon {
    pub id: WeaponId,
    pub name: &'static str,
    pub description: &'static str,
    pub cost: u64,
    pub cooldown_ms: f64,
    pub critical_multiplier: f64,
    pub box_price: f64,
    pub stat_modifier: Stats,
    /// Pendant attachment point in sprite pixels.
    pub chain_anchor: Vec2,
    pub hooks: ItemHooks,
}

impl Weapon {
    pub fn sprite(&self) -> SpriteId {
        SpriteId::Weapon(self.id)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Armor {
    pub id: ArmorId,
    pub name: &'static str,
    pub description: &'static str,
    pub cost: u64,
    pub stat_modifier: Stats,
    pub hooks: ItemHooks,
}

impl Armor {
    pub fn sprite(&self) -> SpriteId {
        SpriteId::Armor(self.id)
    }
}

//! Logical sprite and sound identifiers and the preload step that resolves
//! them before the frame loop starts.

use crate::items::{ArmorId, WeaponId};
use crate::trinkets::{TrinketId, TRINKETS};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteId {
    CharacterIdle,
    CharacterHurt,
    Box,
    BoxBlue,
    BoxRed,
    BoxWhite,
    BoxHarvest,
    Spider,
    HeavenBonus,
    MagicCircle,
    MagicCircleSeventh,
    MagicShot,
    MagicShotSeventh,
    HitBasic,
    HitCritical,
    Weapon(WeaponId),
    Armor(ArmorId),
    Trinket(TrinketId),
}

impl SpriteId {
    pub fn key(&self) -> String {
        let fixed = match self {
            SpriteId::CharacterIdle => "glupo.idle",
            SpriteId::CharacterHurt => "glupo.hurt",
            SpriteId::Box => "ui.box",
            SpriteId::BoxBlue => "ui.box-blue",
            SpriteId::BoxRed => "ui.box-red",
            SpriteId::BoxWhite => "ui.box-white",
            SpriteId::BoxHarvest => "ui.box-harvest",
            SpriteId::Spider => "ui.red-eyes-spider",
            SpriteId::HeavenBonus => "ui.heaven-bonus",
            SpriteId::MagicCircle => "ui.magic-bullet-circle",
            SpriteId::MagicCircleSeventh => "ui.magic-bullet-circle-7th",
            SpriteId::MagicShot => "ui.magic-bullet-shot",
            SpriteId::MagicShotSeventh => "ui.magic-bullet-shot-7th",
            SpriteId::HitBasic => "ui.hit-basic",
            SpriteId::HitCritical => "ui.hit-critical",
            SpriteId::Weapon(id) => id.key(),
            SpriteId::Armor(id) => id.key(),
            SpriteId::Trinket(id) => id.key(),
        };
        fixed.to_string()
    }

    /// Every sprite the simulation may draw.
    pub fn all() -> Vec<SpriteId> {
        let mut ids = vec![
            SpriteId::CharacterIdle,
            SpriteId::CharacterHurt,
            SpriteId::Box,
            SpriteId::BoxBlue,
            SpriteId::BoxRed,
            SpriteId::BoxWhite,
            SpriteId::BoxHarvest,
            SpriteId::Spider,
            SpriteId::HeavenBonus,
            SpriteId::MagicCircle,
            SpriteId::MagicCircleSeventh,
            SpriteId::MagicShot,
            SpriteId::MagicShotSeventh,
            SpriteId::HitBasic,
            SpriteId::HitCritical,
        ];
        ids.extend(WeaponId::all().into_iter().map(SpriteId::Weapon));
        ids.extend(ArmorId::all().into_iter().map(SpriteId::Armor));
        ids.extend(TRINKETS.iter().map(|t| SpriteId::Trinket(t.id)));
        ids
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundId {
    Idle,
    Hurt1,
    Hurt2,
    Hit1,
    Hit2,
    Hit3,
    Critical,
    BoxPickup,
    GachaTick1,
    GachaTick2,
    GachaFanfare,
}

impl SoundId {
    pub const ALL: [SoundId; 11] = [
        SoundId::Idle,
        SoundId::Hurt1,
        SoundId::Hurt2,
        SoundId::Hit1,
        SoundId::Hit2,
        SoundId::Hit3,
        SoundId::Critical,
        SoundId::BoxPickup,
        SoundId::GachaTick1,
        SoundId::GachaTick2,
        SoundId::GachaFanfare,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            SoundId::Idle => "glupo.idle",
            SoundId::Hurt1 => "glupo.hurt-1",
            SoundId::Hurt2 => "glupo.hurt-2",
            SoundId::Hit1 => "weapon.hit-1",
            SoundId::Hit2 => "weapon.hit-2",
            SoundId::Hit3 => "weapon.hit-3",
            SoundId::Critical => "weapon.crit-1",
            SoundId::BoxPickup => "box.pickup",
            SoundId::GachaTick1 => "gacha.tick-1",
            SoundId::GachaTick2 => "gacha.tick-2",
            SoundId::GachaFanfare => "gacha.fanfare",
        }
    }
}

/// Natural size of a loaded image, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteInfo {
    pub width: f64,
    pub height: f64,
}

impl SpriteInfo {
    pub const EMPTY: SpriteInfo = SpriteInfo {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to load image {0}")]
    Image(String),
    #[error("failed to load sound {0}")]
    Sound(String),
}

/// Resolves logical ids to loaded media.
pub trait AssetLoader {
    fn load_sprite(&mut self, id: SpriteId) -> Result<SpriteInfo, AssetError>;
    fn load_sound(&mut self, id: SoundId) -> Result<(), AssetError>;
}

/// The preloaded asset table. Construction fails as a whole if any single
/// asset fails.
#[derive(Debug, Clone, Default)]
pub struct Assets {
    sprites: HashMap<SpriteId, SpriteInfo>,
    sounds: HashSet<SoundId>,
}

impl Assets {
    pub fn preload(loader: &mut dyn AssetLoader) -> Result<Self, AssetError> {
        let mut assets = Assets::default();
        for id in SpriteId::all() {
            let info = loader.load_sprite(id).inspect_err(|e| log::error!("{}", e))?;
            assets.sprites.insert(id, info);
        }
        for id in SoundId::ALL {
            loader.load_sound(id).inspect_err(|e| log::error!("{}", e))?;
            assets.sounds.insert(id);
        }
        log::debug!(
            "Preloaded {} sprites and {} sounds",
            assets.sprites.len(),
            assets.sounds.len()
        );
        Ok(assets)
    }

    pub fn sprite(&self, id: SpriteId) -> SpriteInfo {
        self.sprites.get(&id).copied().unwrap_or(SpriteInfo::EMPTY)
    }

    pub fn has_sound(&self, id: SoundId) -> bool {
        self.sounds.contains(&id)
    }
}

/// Built-in asset table: nominal sprite dimensions, no media files.
/// The terminal front end draws glyphs, so only sizes matter.
#[derive(Debug, Default)]
pub struct BuiltinAssets;

impl BuiltinAssets {
    fn size_of(id: SpriteId) -> SpriteInfo {
        match id {
            SpriteId::CharacterIdle | SpriteId::CharacterHurt => SpriteInfo::new(1000.0, 1333.0),
            SpriteId::Weapon(weapon) => match weapon {
                WeaponId::Penitence => SpriteInfo::new(420.0, 120.0),
                WeaponId::RedEyes => SpriteInfo::new(420.0, 110.0),
                WeaponId::Harvest => SpriteInfo::new(300.0, 110.0),
                WeaponId::Heaven => SpriteInfo::new(320.0, 60.0),
                WeaponId::GoldRush => SpriteInfo::new(300.0, 120.0),
                WeaponId::MagicBullet => SpriteInfo::new(440.0, 80.0),
                WeaponId::Smile => SpriteInfo::new(560.0, 200.0),
                WeaponId::Twilight => SpriteInfo::new(560.0, 110.0),
            },
            SpriteId::Armor(_) => SpriteInfo::new(256.0, 256.0),
            _ => SpriteInfo::new(128.0, 128.0),
        }
    }
}

impl AssetLoader for BuiltinAssets {
    fn load_sprite(&mut self, id: SpriteId) -> Result<SpriteInfo, AssetError> {
        Ok(Self::size_of(id))
    }

    fn load_sound(&mut self, _id: SoundId) -> Result<(), AssetError> {
        Ok(())
    }
}

//! Glyph and colour for each sprite in the terminal.

use crate::assets::SpriteId;
use crate::render::Rgb;
use crate::trinkets::TrinketRarity;

pub fn sprite_glyph(sprite: SpriteId) -> (char, Rgb) {
    match sprite {
        SpriteId::CharacterIdle => ('▓', Rgb(222, 200, 170)),
        SpriteId::CharacterHurt => ('▒', Rgb(200, 120, 120)),
        SpriteId::Box => ('■', Rgb(190, 140, 80)),
        SpriteId::BoxBlue => ('■', Rgb(80, 140, 230)),
        SpriteId::BoxRed => ('■', Rgb(220, 60, 60)),
        SpriteId::BoxWhite => ('■', Rgb(240, 240, 240)),
        SpriteId::BoxHarvest => ('♣', Rgb(120, 190, 80)),
        SpriteId::Spider => ('ж', Rgb(200, 30, 30)),
        SpriteId::HeavenBonus => ('✦', Rgb(255, 230, 120)),
        SpriteId::MagicCircle => ('◎', Rgb(170, 120, 255)),
        SpriteId::MagicCircleSeventh => ('◎', Rgb(255, 60, 160)),
        SpriteId::MagicShot => ('•', Rgb(170, 120, 255)),
        SpriteId::MagicShotSeventh => ('•', Rgb(255, 60, 160)),
        SpriteId::HitBasic => ('*', Rgb(255, 255, 255)),
        SpriteId::HitCritical => ('✸', Rgb(255, 200, 0)),
        SpriteId::Weapon(_) => ('╋', Rgb(200, 200, 210)),
        SpriteId::Armor(_) => ('▣', Rgb(150, 150, 160)),
        SpriteId::Trinket(id) => ('◆', rarity_color(id.rarity())),
    }
}

pub fn rarity_color(rarity: TrinketRarity) -> Rgb {
    match rarity {
        TrinketRarity::Common => Rgb(180, 180, 180),
        TrinketRarity::Rare => Rgb(90, 160, 255),
        TrinketRarity::Special => Rgb(255, 170, 40),
    }
}

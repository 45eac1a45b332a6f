use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrinketRarity {
    Common,
    Rare,
    Special,
}

impl TrinketRarity {
    pub fn all() -> [TrinketRarity; 3] {
        [
            TrinketRarity::Common,
            TrinketRarity::Rare,
            TrinketRarity::Special,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            TrinketRarity::Common => "Common",
            TrinketRarity::Rare => "Rare",
            TrinketRarity::Special => "Special",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TrinketId {
    #[serde(rename = "trinket.dante")]
    Dante,
    #[serde(rename = "trinket.don")]
    Don,
    #[serde(rename = "trinket.faust")]
    Faust,
    #[serde(rename = "trinket.gregor")]
    Gregor,
    #[serde(rename = "trinket.heathcliff")]
    Heathcliff,
    #[serde(rename = "trinket.hong-lu")]
    HongLu,
    #[serde(rename = "trinket.ishmael")]
    Ishmael,
    #[serde(rename = "trinket.meursault")]
    Meursault,
    #[serde(rename = "trinket.outis")]
    Outis,
    #[serde(rename = "trinket.rodion")]
    Rodion,
    #[serde(rename = "trinket.ryoshu")]
    Ryoshu,
    #[serde(rename = "trinket.sinclair")]
    Sinclair,
    #[serde(rename = "trinket.cathy")]
    Cathy,
    #[serde(rename = "trinket.erlking")]
    Erlking,
    #[serde(rename = "trinket.xiaojin-call")]
    XiaojinCall,
    #[serde(rename = "trinket.copium-elder")]
    CopiumElder,
    #[serde(rename = "trinket.ayin")]
    Ayin,
    #[serde(rename = "trinket.faust-derp")]
    FaustDerp,
    #[serde(rename = "trinket.ishmael-sad")]
    IshmaelSad,
    #[serde(rename = "trinket.araya-watermellon")]
    ArayaWatermellon,
}

impl TrinketId {
    pub fn key(&self) -> &'static str {
        super::trinket(*self).key
    }

    pub fn name(&self) -> &'static str {
        super::trinket(*self).name
    }

    pub fn rarity(&self) -> TrinketRarity {
        super::trinket(*self).rarity
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Trinket {
    pub id: TrinketId,
    pub key: &'static str,
    pub name: &'static str,
    pub rarity: TrinketRarity,
}

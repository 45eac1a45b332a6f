use crate::character::Stats;
use crate::economy::RiskLevel;
use crate::items::{ArmorId, WeaponId};
use crate::trinkets::TrinketId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Everything that survives a restart. Field names follow the on-disk
/// camelCase document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressionData {
    pub selected_weapon: WeaponId,
    pub selected_armor: ArmorId,
    pub bought_weapons: BTreeSet<WeaponId>,
    pub bought_armor: BTreeSet<ArmorId>,
    pub risk_level: RiskLevel,
    pub balance: u64,
    pub base_stats: Stats,
    pub loop_count: u32,
    pub light_shards: u32,
    pub selected_trinket: Option<TrinketId>,
    pub bought_trinkets: BTreeSet<TrinketId>,
    #[serde(rename = "isSoundEnabled")]
    pub sound_enabled: bool,
}

impl Default for ProgressionData {
    fn default() -> Self {
        Self {
            selected_weapon: WeaponId::Penitence,
            selected_armor: ArmorId::Penitence,
            bought_weapons: BTreeSet::from([WeaponId::Penitence]),
            bought_armor: BTreeSet::from([ArmorId::Penitence]),
            risk_level: RiskLevel::Zayin,
            balance: 0,
            base_stats: Stats::uniform(1),
            loop_count: 0,
            light_shards: 0,
            selected_trinket: None,
            bought_trinkets: BTreeSet::new(),
            sound_enabled: true,
        }
    }
}

impl ProgressionData {
    /// Restores the ownership invariants. Returns true when anything changed.
    pub fn repair(&mut self) -> bool {
        let mut changed = false;

        if self.bought_weapons.insert(WeaponId::Penitence) {
            changed = true;
        }
        if self.bought_armor.insert(ArmorId::Penitence) {
            changed = true;
        }
        if !self.bought_weapons.contains(&self.selected_weapon) {
            self.selected_weapon = WeaponId::Penitence;
            changed = true;
        }
        if !self.bought_armor.contains(&self.selected_armor) {
            self.selected_armor = ArmorId::Penitence;
            changed = true;
        }
        if let Some(trinket) = self.selected_trinket {
            if !self.bought_trinkets.contains(&trinket) {
                self.selected_trinket = None;
                changed = true;
            }
        }

        changed
    }
}

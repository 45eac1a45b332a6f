//! Forward migration of stored progression documents.

use super::types::ProgressionData;
use crate::character::Stats;
use crate::core::constants::FORMAT_VERSION;
use crate::economy::RiskLevel;
use crate::items::{ArmorId, WeaponId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

/// Version 1 document: no meta-progression and no settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressionDataV1 {
    pub selected_weapon: WeaponId,
    pub selected_armor: ArmorId,
    pub bought_weapons: BTreeSet<WeaponId>,
    pub bought_armor: BTreeSet<ArmorId>,
    pub risk_level: RiskLevel,
    pub balance: u64,
    pub base_stats: Stats,
}

impl From<ProgressionDataV1> for ProgressionData {
    fn from(old: ProgressionDataV1) -> Self {
        let defaults = ProgressionData::default();
        Self {
            selected_weapon: old.selected_weapon,
            selected_armor: old.selected_armor,
            bought_weapons: old.bought_weapons,
            bought_armor: old.bought_armor,
            risk_level: old.risk_level,
            balance: old.balance,
            base_stats: old.base_stats,
            ..defaults
        }
    }
}

type Migration = fn(Value) -> Result<Value, serde_json::Error>;

/// One pure transform per version gap, keyed by the version it upgrades from.
const MIGRATIONS: &[(u32, Migration)] = &[(1, migrate_v1_to_v2)];

fn migrate_v1_to_v2(value: Value) -> Result<Value, serde_json::Error> {
    let old: ProgressionDataV1 = serde_json::from_value(value)?;
    serde_json::to_value(ProgressionData::from(old))
}

pub fn is_supported(version: u32) -> bool {
    version == FORMAT_VERSION || MIGRATIONS.iter().any(|(from, _)| *from == version)
}

/// Walks `game_data` from `version` up to the current format.
///
/// Returns `None` for unsupported versions or documents that fail to parse
/// at any step.
pub fn migrate(version: u32, game_data: Value) -> Option<ProgressionData> {
    if !is_supported(version) {
        log::warn!("Unsupported progression version {}", version);
        return None;
    }

    let mut version = version;
    let mut value = game_data;
    while version != FORMAT_VERSION {
        let (_, step) = MIGRATIONS.iter().find(|(from, _)| *from == version)?;
        value = match step(value) {
            Ok(next) => next,
            Err(e) => {
                log::warn!("Migration from version {} failed: {}", version, e);
                return None;
            }
        };
        log::info!("Migrated progression from version {}", version);
        version += 1;
    }

    match serde_json::from_value(value) {
        Ok(data) => Some(data),
        Err(e) => {
            log::warn!("Progression document is malformed: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn v1_document() -> Value {
        json!({
            "selectedWeapon": "weapon.red-eyes",
            "selectedArmor": "armor.penitence",
            "boughtWeapons": ["weapon.penitence", "weapon.red-eyes"],
            "boughtArmor": ["armor.penitence"],
            "riskLevel": "teth",
            "balance": 4200,
            "baseStats": { "fortitude": 3, "prudence": 1, "temperance": 2, "justice": 1 }
        })
    }

    #[test]
    fn test_v1_gains_new_fields_with_defaults() {
        let data = migrate(1, v1_document()).unwrap();
        assert_eq!(data.selected_weapon, WeaponId::RedEyes);
        assert_eq!(data.risk_level, RiskLevel::Teth);
        assert_eq!(data.balance, 4200);
        assert_eq!(data.base_stats, Stats::new(3, 1, 2, 1));
        assert_eq!(data.loop_count, 0);
        assert_eq!(data.light_shards, 0);
        assert_eq!(data.selected_trinket, None);
        assert!(data.bought_trinkets.is_empty());
        assert!(data.sound_enabled);
    }

    #[test]
    fn test_current_version_passes_through() {
        let original = ProgressionData {
            balance: 77,
            loop_count: 3,
            ..ProgressionData::default()
        };
        let value = serde_json::to_value(&original).unwrap();
        assert_eq!(migrate(FORMAT_VERSION, value), Some(original));
    }

    #[test]
    fn test_unknown_version_yields_none() {
        assert!(!is_supported(0));
        assert!(!is_supported(99));
        assert_eq!(migrate(99, v1_document()), None);
    }

    #[test]
    fn test_malformed_document_yields_none() {
        assert_eq!(migrate(1, json!({ "balance": "lots" })), None);
        assert_eq!(migrate(FORMAT_VERSION, json!([])), None);
    }
}

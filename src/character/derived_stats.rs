use super::stats::Stats;
use crate::core::constants::*;
use crate::items::Weapon;

/// Everything the simulation reads off the effective stats. Computed on
/// demand from [`crate::economy::Economy::derived_stats`]; never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedStats {
    pub min_boxes: u32,
    pub max_boxes: u32,
    pub max_sanity: f64,
    pub regeneration_delay_ms: f64,
    pub panic_restore_delay_ms: f64,
    pub critical_chance: f64,
    pub critical_multiplier: f64,
    pub cooldown_modifier: f64,
    pub cooldown_ms: f64,
    pub real_cooldown_ms: f64,
    pub box_price: f64,
}

impl DerivedStats {
    /// Derives the bundle from already-combined stats. Negative axes are
    /// clamped to zero first.
    pub fn calculate(effective: &Stats, weapon: &Weapon) -> Self {
        let stats = effective.clamped();
        let fortitude = stats.fortitude as u32;
        let prudence = stats.prudence as f64;
        let justice = stats.justice as f64;

        let cooldown_modifier = 1.0 + COOLDOWN_PER_JUSTICE * justice;

        Self {
            min_boxes: fortitude / 3 + 1,
            max_boxes: (fortitude as f64 * 1.5).floor() as u32 + 1,
            max_sanity: BASE_MAX_SANITY + MAX_SANITY_PER_PRUDENCE * prudence,
            regeneration_delay_ms: BASE_REGENERATION_DELAY_MS
                / (1.0 + REGENERATION_PER_PRUDENCE * prudence),
            panic_restore_delay_ms: BASE_PANIC_RESTORE_DELAY_MS / (prudence + 1.0),
            critical_chance: critical_chance(stats.temperance as u32),
            critical_multiplier: weapon.critical_multiplier,
            cooldown_modifier,
            cooldown_ms: weapon.cooldown_ms,
            real_cooldown_ms: weapon.cooldown_ms / cooldown_modifier,
            box_price: weapon.box_price,
        }
    }

    /// Mean boxes per hit.
    pub fn average_boxes(&self) -> f64 {
        (self.min_boxes + self.max_boxes) as f64 / 2.0
    }

    /// Boxes per second at full swing speed, used to pick the reward sprite tier.
    pub fn boxes_per_second(&self) -> f64 {
        if self.real_cooldown_ms <= 0.0 {
            return 0.0;
        }
        1000.0 / self.real_cooldown_ms * self.average_boxes()
    }
}

/// Temperance to critical chance with diminishing returns past 50%, 75% and 90%.
pub fn critical_chance(temperance: u32) -> f64 {
    let mut chance = 0.0;
    for _ in 0..temperance {
        let mut step = CRIT_STEP_PERCENT;
        if chance + step > 50.0 {
            step /= 2.0;
        }
        if chance + step > 75.0 {
            step /= 2.0;
        }
        if chance + step > 90.0 {
            step /= 2.0;
        }
        if chance + step > CRIT_CAP_PERCENT {
            chance = CRIT_CAP_PERCENT;
            break;
        }
        chance += step;
    }
    chance / 100.0
}

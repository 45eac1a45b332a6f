//! Weighted trinket reel for the light shop.

use crate::core::constants::{COMMON_WEIGHT, RARE_WEIGHT, REEL_REPEATS, REEL_SAMPLES, SPECIAL_WEIGHT};
use crate::trinkets::{trinkets_by_rarity, TrinketId, TrinketRarity};
use crate::utils::{choose, weighted_choose};
use rand::Rng;

/// Result of a paid roll: the reel to animate and where it stops.
#[derive(Debug, Clone, PartialEq)]
pub struct TrinketRoll {
    pub reel: Vec<TrinketId>,
    pub winner: TrinketId,
    pub winner_index: usize,
    pub is_new: bool,
}

pub fn rarity_weight(rarity: TrinketRarity) -> f64 {
    match rarity {
        TrinketRarity::Common => COMMON_WEIGHT,
        TrinketRarity::Rare => RARE_WEIGHT,
        TrinketRarity::Special => SPECIAL_WEIGHT,
    }
}

/// Draws `samples` rarity-weighted trinkets and repeats the run `repeats` times.
pub fn create_reel<R: Rng + ?Sized>(rng: &mut R, samples: usize, repeats: usize) -> Vec<TrinketId> {
    let rarities = TrinketRarity::all();
    let pools: Vec<(TrinketRarity, Vec<TrinketId>)> = rarities
        .iter()
        .map(|rarity| (*rarity, trinkets_by_rarity(*rarity)))
        .collect();

    let mut run = Vec::with_capacity(samples);
    for _ in 0..samples {
        let Some(rarity) = weighted_choose(rng, &rarities, |r| rarity_weight(*r)) else {
            break;
        };
        let pool = pools
            .iter()
            .find(|(r, _)| r == rarity)
            .map(|(_, ids)| ids.as_slice())
            .unwrap_or(&[]);
        if let Some(id) = choose(rng, pool) {
            run.push(*id);
        }
    }

    run.repeat(repeats)
}

pub fn create_default_reel<R: Rng + ?Sized>(rng: &mut R) -> Vec<TrinketId> {
    create_reel(rng, REEL_SAMPLES, REEL_REPEATS)
}

/// Uniform index in the middle half `[len / 4, 3 * len / 4)`.
/// `None` for a reel too short to have a middle.
pub fn pick_winner_index<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Option<usize> {
    let start = len / 4;
    let end = len * 3 / 4;
    if start >= end {
        return None;
    }
    Some(rng.gen_range(start..end))
}

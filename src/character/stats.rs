use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Neg};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum StatType {
    Fortitude,
    Prudence,
    Temperance,
    Justice,
}

impl StatType {
    pub fn all() -> [StatType; 4] {
        [
            StatType::Fortitude,
            StatType::Prudence,
            StatType::Temperance,
            StatType::Justice,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            StatType::Fortitude => "Fortitude",
            StatType::Prudence => "Prudence",
            StatType::Temperance => "Temperance",
            StatType::Justice => "Justice",
        }
    }

    pub fn abbrev(&self) -> &'static str {
        match self {
            StatType::Fortitude => "FOR",
            StatType::Prudence => "PRU",
            StatType::Temperance => "TEM",
            StatType::Justice => "JUS",
        }
    }
}

/// The four progression axes. Signed so item modifiers and temporary bonuses
/// can subtract; see [`Stats::clamped`] for the effective values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, Hash)]
pub struct Stats {
    pub fortitude: i32,
    pub prudence: i32,
    pub temperance: i32,
    pub justice: i32,
}

impl Stats {
    pub const ZERO: Stats = Stats::new(0, 0, 0, 0);

    pub const fn new(fortitude: i32, prudence: i32, temperance: i32, justice: i32) -> Self {
        Self {
            fortitude,
            prudence,
            temperance,
            justice,
        }
    }

    pub const fn uniform(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn get(&self, stat: StatType) -> i32 {
        match stat {
            StatType::Fortitude => self.fortitude,
            StatType::Prudence => self.prudence,
            StatType::Temperance => self.temperance,
            StatType::Justice => self.justice,
        }
    }

    pub fn set(&mut self, stat: StatType, value: i32) {
        match stat {
            StatType::Fortitude => self.fortitude = value,
            StatType::Prudence => self.prudence = value,
            StatType::Temperance => self.temperance = value,
            StatType::Justice => self.justice = value,
        }
    }

    pub fn increment(&mut self, stat: StatType) {
        self.set(stat, self.get(stat).saturating_add(1));
    }

    /// Every axis floored at zero.
    pub fn clamped(&self) -> Stats {
        Stats::new(
            self.fortitude.max(0),
            self.prudence.max(0),
            self.temperance.max(0),
            self.justice.max(0),
        )
    }
}

impl Add for Stats {
    type Output = Stats;
    fn add(self, rhs: Stats) -> Stats {
        Stats::new(
            self.fortitude.saturating_add(rhs.fortitude),
            self.prudence.saturating_add(rhs.prudence),
            self.temperance.saturating_add(rhs.temperance),
            self.justice.saturating_add(rhs.justice),
        )
    }
}

impl AddAssign for Stats {
    fn add_assign(&mut self, rhs: Stats) {
        *self = *self + rhs;
    }
}

impl Neg for Stats {
    type Output = Stats;
    fn neg(self) -> Stats {
        Stats::new(
            -self.fortitude,
            -self.prudence,
            -self.temperance,
            -self.justice,
        )
    }
}

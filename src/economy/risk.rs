use serde::{Deserialize, Serialize};

/// Tier gating the balance cap. Upgrading costs the current cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    #[default]
    Zayin,
    Teth,
    He,
    Waw,
    Aleph,
}

impl RiskLevel {
    pub fn all() -> [RiskLevel; 5] {
        [
            RiskLevel::Zayin,
            RiskLevel::Teth,
            RiskLevel::He,
            RiskLevel::Waw,
            RiskLevel::Aleph,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            RiskLevel::Zayin => "ZAYIN",
            RiskLevel::Teth => "TETH",
            RiskLevel::He => "HE",
            RiskLevel::Waw => "WAW",
            RiskLevel::Aleph => "ALEPH",
        }
    }

    /// Balance cap; `None` means unbounded.
    pub fn cap(&self) -> Option<u64> {
        match self {
            RiskLevel::Zayin => Some(500),
            RiskLevel::Teth => Some(7_500),
            RiskLevel::He => Some(75_000),
            RiskLevel::Waw => Some(750_000),
            RiskLevel::Aleph => None,
        }
    }

    pub fn next(&self) -> Option<RiskLevel> {
        match self {
            RiskLevel::Zayin => Some(RiskLevel::Teth),
            RiskLevel::Teth => Some(RiskLevel::He),
            RiskLevel::He => Some(RiskLevel::Waw),
            RiskLevel::Waw => Some(RiskLevel::Aleph),
            RiskLevel::Aleph => None,
        }
    }

    /// Cost of moving to [`RiskLevel::next`]; `None` at the terminal tier.
    pub fn upgrade_cost(&self) -> Option<u64> {
        self.next().and(self.cap())
    }
}

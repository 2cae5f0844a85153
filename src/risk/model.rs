//! Risk tiers, allocations, and the assessment result.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// One of the four fixed risk-classification buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Conservative,
    ModerateConservative,
    ModerateAggressive,
    Aggressive,
}

impl RiskTier {
    /// Human-readable tier name for presentation.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Conservative => "Conservative",
            Self::ModerateConservative => "Moderate Conservative",
            Self::ModerateAggressive => "Moderate Aggressive",
            Self::Aggressive => "Aggressive",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Conservative => {
                "You prefer stability and capital preservation over high returns. \
                 You're comfortable with low-risk investments that provide steady, \
                 predictable returns."
            }
            Self::ModerateConservative => {
                "You seek a balance between growth and stability, willing to accept \
                 some risk for potentially higher returns than purely conservative \
                 investments."
            }
            Self::ModerateAggressive => {
                "You're willing to accept moderate to high risk for the potential of \
                 higher returns, understanding that your investments will fluctuate \
                 in value."
            }
            Self::Aggressive => {
                "You're comfortable with high risk and volatility in pursuit of \
                 maximum long-term growth potential. You understand and accept \
                 significant fluctuations in portfolio value."
            }
        }
    }

    /// Fixed, ordered investment recommendations for the tier.
    pub fn recommendations(&self) -> [&'static str; 4] {
        match self {
            Self::Conservative => [
                "High-grade bonds and government securities",
                "Conservative mutual funds",
                "High-yield savings accounts and CDs",
                "Dividend-paying stocks from stable companies",
            ],
            Self::ModerateConservative => [
                "Balanced mutual funds (60% bonds, 40% stocks)",
                "Target-date funds",
                "Blue-chip dividend stocks",
                "Investment-grade corporate bonds",
            ],
            Self::ModerateAggressive => [
                "Growth-oriented mutual funds",
                "Large-cap and mid-cap stocks",
                "International diversified funds",
                "Real estate investment trusts (REITs)",
            ],
            Self::Aggressive => [
                "Growth stocks and small-cap funds",
                "Emerging markets investments",
                "Technology and innovation funds",
                "Alternative investments (with proper diversification)",
            ],
        }
    }

    /// Suggested portfolio split for the tier.
    pub fn allocation(&self) -> Allocation {
        match self {
            Self::Conservative => Allocation {
                stocks: dec!(25),
                bonds: dec!(70),
                alternatives: dec!(5),
            },
            Self::ModerateConservative => Allocation {
                stocks: dec!(35),
                bonds: dec!(60),
                alternatives: dec!(5),
            },
            Self::ModerateAggressive => Allocation {
                stocks: dec!(65),
                bonds: dec!(25),
                alternatives: dec!(10),
            },
            Self::Aggressive => Allocation {
                stocks: dec!(80),
                bonds: dec!(5),
                alternatives: dec!(15),
            },
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Conservative => "conservative",
            Self::ModerateConservative => "moderate_conservative",
            Self::ModerateAggressive => "moderate_aggressive",
            Self::Aggressive => "aggressive",
        };
        write!(f, "{s}")
    }
}

/// Portfolio split in whole percentages. Always sums to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    pub stocks: Decimal,
    pub bonds: Decimal,
    pub alternatives: Decimal,
}

impl Allocation {
    pub fn total(&self) -> Decimal {
        self.stocks + self.bonds + self.alternatives
    }
}

/// Terminal output of the risk questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskResult {
    /// Sum of the selected option weights.
    pub score: u32,
    /// Highest achievable score for the questionnaire.
    pub max_score: u32,
    pub tier: RiskTier,
    pub description: String,
    pub recommendations: Vec<String>,
    pub allocation: Allocation,
}

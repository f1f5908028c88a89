//! Core data types shared across the simulation engine

use serde::Serialize;

/// Calendar labels for generated asset histories, one per period
pub const PERIOD_LABELS: [&str; 9] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
];

/// Length of every generated asset history
pub const HISTORY_PERIODS: usize = PERIOD_LABELS.len();

/// Coarse risk classification deciding which generator an asset uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "low",
            RiskTier::Medium => "medium",
            RiskTier::High => "high",
        }
    }

    /// Uppercase form used for badges
    pub fn badge(&self) -> &'static str {
        match self {
            RiskTier::Low => "LOW",
            RiskTier::Medium => "MEDIUM",
            RiskTier::High => "HIGH",
        }
    }
}

/// One period of an asset history: price plus manipulation-likelihood score
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricePoint {
    pub period: &'static str,
    pub price: f64,
    pub risk_score: u8,
}

/// Round a generated price to storage precision.
///
/// Sub-unit assets keep 8 fractional digits so micro-cap prices stay
/// distinguishable; everything else keeps 2.
pub fn round_price(value: f64, base_price: f64) -> f64 {
    let scale = if base_price < 1.0 { 1e8 } else { 1e2 };
    (value * scale).round() / scale
}

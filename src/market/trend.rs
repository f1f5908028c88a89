//! Risk and trend summaries derived from asset histories

use super::detector::{detect_for_tier, Detection};
use super::types::{PricePoint, RiskTier};
use serde::Serialize;

/// Scores strictly above this flag an asset as likely fraud
pub const HIGH_FRAUD_THRESHOLD: u8 = 70;

/// Direction and magnitude of risk change across a series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskTrend {
    pub magnitude: u8,
    pub increasing: bool,
}

/// Headline classification of an asset's market pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PatternSummary {
    pub title: &'static str,
    pub description: &'static str,
}

/// Everything the presentation layer needs about one asset history
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AssetSummary {
    pub detection: Detection,
    pub trend: RiskTrend,
    pub latest_risk: u8,
    pub risk_label: &'static str,
    pub pattern: PatternSummary,
    pub high_fraud: bool,
}

/// Risk change from the first to the last sample.
///
/// Series shorter than 2 samples read as zero trend, decreasing. A tie
/// also resolves to decreasing.
pub fn risk_trend(series: &[PricePoint]) -> RiskTrend {
    if series.len() < 2 {
        return RiskTrend {
            magnitude: 0,
            increasing: false,
        };
    }

    let first = series[0].risk_score as i16;
    let last = series[series.len() - 1].risk_score as i16;

    RiskTrend {
        magnitude: (last - first).unsigned_abs() as u8,
        increasing: last > first,
    }
}

/// Ordinal label for a risk score, five bands with hard edges
pub fn describe_risk(score: f64) -> &'static str {
    if score < 20.0 {
        "Very Low Risk"
    } else if score < 40.0 {
        "Low Risk"
    } else if score < 60.0 {
        "Moderate Risk"
    } else if score < 80.0 {
        "High Risk"
    } else {
        "Extreme Risk"
    }
}

/// Risk score of the newest sample, 0 for an empty series
pub fn latest_risk(series: &[PricePoint]) -> u8 {
    series.last().map(|point| point.risk_score).unwrap_or(0)
}

/// Map a tier and its detection onto the dashboard headline
pub fn pattern_summary(tier: RiskTier, detection: &Detection) -> PatternSummary {
    match tier {
        RiskTier::Low => PatternSummary {
            title: "Stable Growth Pattern",
            description: "Healthy price action with natural market cycles and low risk score",
        },
        RiskTier::Medium => PatternSummary {
            title: "Volatile Market Pattern",
            description: "Higher volatility with inconsistent price action and moderate risk score",
        },
        RiskTier::High => {
            if detection.is_flagged() {
                PatternSummary {
                    title: "Pump and Dump Pattern Detected",
                    description:
                        "Suspicious price action with rapid increase followed by sharp decline",
                }
            } else {
                PatternSummary {
                    title: "High Risk Pattern",
                    description:
                        "Extremely volatile price action with elevated risk indicators",
                }
            }
        }
    }
}

/// Run detection and aggregation over one asset history
pub fn summarize(tier: RiskTier, series: &[PricePoint]) -> AssetSummary {
    let detection = detect_for_tier(tier, series);
    let latest = latest_risk(series);

    AssetSummary {
        trend: risk_trend(series),
        latest_risk: latest,
        risk_label: describe_risk(latest as f64),
        pattern: pattern_summary(tier, &detection),
        high_fraud: latest > HIGH_FRAUD_THRESHOLD,
        detection,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn risk_series(scores: &[u8]) -> Vec<PricePoint> {
        let labels = crate::market::types::PERIOD_LABELS;
        scores
            .iter()
            .enumerate()
            .map(|(i, &risk_score)| PricePoint {
                period: labels[i % labels.len()],
                price: 100.0,
                risk_score,
            })
            .collect()
    }

    #[test]
    fn test_trend_increasing() {
        let trend = risk_trend(&risk_series(&[10, 15, 22, 30]));
        assert_eq!(
            trend,
            RiskTrend {
                magnitude: 20,
                increasing: true,
            }
        );
    }

    #[test]
    fn test_trend_decreasing() {
        let trend = risk_trend(&risk_series(&[30, 22, 15, 10]));
        assert_eq!(
            trend,
            RiskTrend {
                magnitude: 20,
                increasing: false,
            }
        );
    }

    #[test]
    fn test_trend_tie_resolves_to_decreasing() {
        let trend = risk_trend(&risk_series(&[40, 10, 40]));
        assert!(!trend.increasing);
        assert_eq!(trend.magnitude, 0);
    }

    #[test]
    fn test_trend_short_series_is_zero() {
        assert_eq!(risk_trend(&risk_series(&[50])).magnitude, 0);
        assert_eq!(risk_trend(&[]).magnitude, 0);
    }

    #[test]
    fn test_describe_risk_band_edges() {
        assert_eq!(describe_risk(19.99), "Very Low Risk");
        assert_eq!(describe_risk(20.0), "Low Risk");
        assert_eq!(describe_risk(40.0), "Moderate Risk");
        assert_eq!(describe_risk(60.0), "High Risk");
        assert_eq!(describe_risk(79.99), "High Risk");
        assert_eq!(describe_risk(80.0), "Extreme Risk");
        assert_eq!(describe_risk(100.0), "Extreme Risk");
    }

    #[test]
    fn test_latest_risk_empty_series() {
        assert_eq!(latest_risk(&[]), 0);
        assert_eq!(latest_risk(&risk_series(&[12, 81])), 81);
    }

    #[test]
    fn test_pattern_headlines() {
        let clean = Detection::none();
        assert_eq!(
            pattern_summary(RiskTier::Low, &clean).title,
            "Stable Growth Pattern"
        );
        assert_eq!(
            pattern_summary(RiskTier::Medium, &clean).title,
            "Volatile Market Pattern"
        );
        assert_eq!(
            pattern_summary(RiskTier::High, &clean).title,
            "High Risk Pattern"
        );
    }

    #[test]
    fn test_summarize_flags_pump_for_high_tier() {
        let labels = crate::market::types::PERIOD_LABELS;
        let prices = [100.0, 100.0, 250.0, 90.0, 80.0, 70.0, 70.0, 70.0, 70.0];
        let series: Vec<PricePoint> = prices
            .iter()
            .enumerate()
            .map(|(i, &price)| PricePoint {
                period: labels[i],
                price,
                risk_score: 85,
            })
            .collect();

        let summary = summarize(RiskTier::High, &series);
        assert!(summary.detection.is_flagged());
        assert_eq!(summary.pattern.title, "Pump and Dump Pattern Detected");
        assert_eq!(summary.risk_label, "Extreme Risk");
        assert!(summary.high_fraud);

        let low_summary = summarize(RiskTier::Low, &series);
        assert!(!low_summary.detection.is_flagged());
    }
}

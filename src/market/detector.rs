//! Pump-and-dump region detection over price histories

use super::types::{PricePoint, RiskTier};
use serde::Serialize;

/// Minimum rise from the first sample to the peak, in percent
pub const PUMP_THRESHOLD_PCT: f64 = 20.0;

/// Minimum drop from the peak to the sample right after it, in percent
pub const DUMP_THRESHOLD_PCT: f64 = 15.0;

/// Shortest series the detector will consider
const MIN_SERIES_LEN: usize = 4;

/// A contiguous span of periods, labelled by its endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Region {
    pub start: &'static str,
    pub end: &'static str,
}

/// Detected pump and dump regions.
///
/// Both regions are present or both are absent, never one without the
/// other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Detection {
    pub pump_region: Option<Region>,
    pub dump_region: Option<Region>,
}

impl Detection {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_flagged(&self) -> bool {
        self.pump_region.is_some()
    }
}

/// Identify pump and dump regions in a finite price series.
///
/// The peak is the maximum price; on ties the first occurrence wins. A
/// detection requires the peak to sit at least 20% above the first sample
/// and the sample right after the peak to sit at least 15% below it.
/// Series shorter than 4 samples, or with the peak at the last sample,
/// never produce a detection.
pub fn detect(series: &[PricePoint]) -> Detection {
    if series.len() < MIN_SERIES_LEN {
        return Detection::none();
    }

    let mut peak_index = 0;
    let mut peak_price = series[0].price;
    for (index, point) in series.iter().enumerate().skip(1) {
        if point.price > peak_price {
            peak_price = point.price;
            peak_index = index;
        }
    }

    let first_price = series[0].price;
    let pump_pct = (peak_price - first_price) / first_price * 100.0;
    if pump_pct < PUMP_THRESHOLD_PCT || peak_index == series.len() - 1 {
        return Detection::none();
    }

    let post_peak_price = series[peak_index + 1].price;
    let dump_pct = (peak_price - post_peak_price) / peak_price * 100.0;
    if dump_pct < DUMP_THRESHOLD_PCT {
        return Detection::none();
    }

    Detection {
        pump_region: Some(Region {
            start: series[0].period,
            end: series[peak_index].period,
        }),
        dump_region: Some(Region {
            start: series[peak_index].period,
            end: series[series.len() - 1].period,
        }),
    }
}

/// Detection as surfaced per asset: only high-tier assets are scanned,
/// lower tiers always read as clean
pub fn detect_for_tier(tier: RiskTier, series: &[PricePoint]) -> Detection {
    if tier != RiskTier::High {
        return Detection::none();
    }
    detect(series)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series_from(prices: &[f64]) -> Vec<PricePoint> {
        let labels = crate::market::types::PERIOD_LABELS;
        prices
            .iter()
            .enumerate()
            .map(|(i, &price)| PricePoint {
                period: labels[i % labels.len()],
                price,
                risk_score: 50,
            })
            .collect()
    }

    #[test]
    fn test_textbook_pump_and_dump() {
        // pump 150% to the peak at index 2, dump 64% right after
        let series = series_from(&[100.0, 100.0, 250.0, 90.0, 80.0, 70.0, 70.0, 70.0, 70.0]);
        let detection = detect(&series);

        assert_eq!(
            detection.pump_region,
            Some(Region {
                start: "January",
                end: "March",
            })
        );
        assert_eq!(
            detection.dump_region,
            Some(Region {
                start: "March",
                end: "September",
            })
        );
    }

    #[test]
    fn test_detect_is_pure() {
        let series = series_from(&[100.0, 100.0, 250.0, 90.0, 80.0, 70.0, 70.0, 70.0, 70.0]);
        assert_eq!(detect(&series), detect(&series));
    }

    #[test]
    fn test_flat_series_is_clean() {
        let series = series_from(&[100.0; 9]);
        assert_eq!(detect(&series), Detection::none());
    }

    #[test]
    fn test_short_series_is_clean() {
        let series = series_from(&[100.0, 300.0, 50.0]);
        assert_eq!(detect(&series), Detection::none());
    }

    #[test]
    fn test_peak_at_last_sample_is_clean() {
        // No room for a dump after the peak
        let series = series_from(&[100.0, 110.0, 120.0, 300.0]);
        assert_eq!(detect(&series), Detection::none());
    }

    #[test]
    fn test_shallow_dump_is_clean() {
        // Pump is large enough but the post-peak drop is under 15%
        let series = series_from(&[100.0, 200.0, 250.0, 240.0, 230.0]);
        assert_eq!(detect(&series), Detection::none());
    }

    #[test]
    fn test_tied_peak_takes_first_occurrence() {
        let series = series_from(&[100.0, 250.0, 150.0, 250.0, 100.0]);
        let detection = detect(&series);

        // Peak index 1, not 3
        assert_eq!(detection.pump_region.unwrap().end, "February");
        assert_eq!(detection.dump_region.unwrap().start, "February");
    }

    #[test]
    fn test_tier_gate_hides_low_tier_detections() {
        let series = series_from(&[100.0, 100.0, 250.0, 90.0, 80.0]);
        assert!(detect(&series).is_flagged());
        assert!(!detect_for_tier(RiskTier::Low, &series).is_flagged());
        assert!(!detect_for_tier(RiskTier::Medium, &series).is_flagged());
        assert!(detect_for_tier(RiskTier::High, &series).is_flagged());
    }
}

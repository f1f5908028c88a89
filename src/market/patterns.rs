//! Pattern generators for synthetic asset histories
//!
//! Three generators, one per risk tier. Each produces a full 9-period
//! series; they always terminate and never fail. Shapes are deterministic
//! for fixed parameters, exact values depend on the injected source.

use super::rng::RandomSource;
use super::types::{round_price, PricePoint, PERIOD_LABELS};

/// Index positions of the pump-and-dump phases within the 9-period series.
///
/// Callers must keep `pump_start < pump_peak <= dump_start`; the shape is
/// undefined outside that range.
#[derive(Debug, Clone, Copy)]
pub struct PumpShape {
    pub pump_start: usize,
    pub pump_peak: usize,
    pub dump_start: usize,
}

/// Risk-score parameters for the pump-and-dump generator
#[derive(Debug, Clone, Copy)]
pub struct RiskProfile {
    pub base_risk: f64,
    pub risk_severity: f64,
}

/// Gentle uptrend for low-tier assets.
///
/// Each step compounds the price by a small bounded change (70% chance of
/// going up) plus a slight upward drift. Risk scores stay in [5, 25].
pub fn stable_growth(
    rng: &mut dyn RandomSource,
    base_price: f64,
    volatility: f64,
) -> Vec<PricePoint> {
    let mut price = base_price;

    PERIOD_LABELS
        .iter()
        .map(|&period| {
            let direction = if rng.next_f64() > 0.3 { 1.0 } else { -1.0 };
            let change = rng.next_f64() * volatility * 0.15 * direction;
            let drift = 1.0 + 0.02 * (rng.next_f64() * 0.5);
            price = price * drift * (1.0 + change);

            let risk = (10.0 + rng.next_f64() * 8.0 - 4.0).round().clamp(5.0, 25.0);

            PricePoint {
                period,
                price: round_price(price, base_price),
                risk_score: risk as u8,
            }
        })
        .collect()
}

/// Cyclic volatility for medium-tier assets, no clear pump or dump.
///
/// A bidirectional random step is combined with a sinusoidal cycle
/// spanning the whole series. Risk scores track the cycle in [25, 55].
pub fn volatile_cycle(
    rng: &mut dyn RandomSource,
    base_price: f64,
    volatility: f64,
) -> Vec<PricePoint> {
    let mut price = base_price;

    PERIOD_LABELS
        .iter()
        .enumerate()
        .map(|(index, &period)| {
            let direction = if rng.next_f64() > 0.5 { 1.0 } else { -1.0 };
            let change = rng.next_f64() * volatility * 0.3 * direction;
            let cycle = ((index as f64 / PERIOD_LABELS.len() as f64) * std::f64::consts::PI * 2.0)
                .sin()
                * volatility
                * 0.2;
            price *= 1.0 + change + cycle;

            let risk = (30.0 + cycle * 100.0 + rng.next_f64() * 12.0 - 6.0)
                .round()
                .clamp(25.0, 55.0);

            PricePoint {
                period,
                price: round_price(price, base_price),
                risk_score: risk as u8,
            }
        })
        .collect()
}

/// Manipulated trajectory for high-tier assets.
///
/// Three price phases: bounded noise before the pump, exponential run-up
/// through `[pump_start, pump_peak)`, geometric decay from `dump_start`.
/// A ±5% noise term applies every period. Risk scores ramp into the pump,
/// peak through the early dump, then decay while staying elevated.
pub fn pump_and_dump(
    rng: &mut dyn RandomSource,
    base_price: f64,
    volatility: f64,
    shape: PumpShape,
    profile: RiskProfile,
) -> Vec<PricePoint> {
    PERIOD_LABELS
        .iter()
        .enumerate()
        .map(|(index, &period)| {
            let multiplier = if index >= shape.pump_start && index < shape.pump_peak {
                let progress = (index - shape.pump_start) as f64
                    / (shape.pump_peak - shape.pump_start) as f64;
                1.0 + ((progress * 2.0).exp() - 1.0) * volatility * 2.0
            } else if index >= shape.dump_start {
                let dump_progress = (index - shape.dump_start) as f64;
                let severity = 0.3 + volatility * 0.4;
                1.0 + (volatility * 2.0) * (1.0 - severity).powf(dump_progress)
            } else {
                1.0 + rng.next_f64() * volatility * 0.4 - volatility * 0.2
            };

            let noise = rng.next_f64() * 0.1 - 0.05;
            let price = base_price * multiplier * (1.0 + noise);

            PricePoint {
                period,
                price: round_price(price, base_price),
                risk_score: phase_risk_score(rng, index, shape, profile),
            }
        })
        .collect()
}

/// Risk score for one period of a pump-and-dump series.
///
/// Accelerates approaching the pump, holds at its peak just before and
/// during the initial dump, then decays without dropping back to base.
fn phase_risk_score(
    rng: &mut dyn RandomSource,
    index: usize,
    shape: PumpShape,
    profile: RiskProfile,
) -> u8 {
    let i = index as f64;
    let pump_start = shape.pump_start as f64;
    let pump_peak = shape.pump_peak as f64;
    let dump_start = shape.dump_start as f64;
    let severity = profile.risk_severity;

    let mut risk = profile.base_risk;
    if i >= pump_start - 1.0 && i < pump_peak {
        risk += (i - pump_start + 1.0) * severity * 1.5;
    } else if i >= pump_peak && i <= dump_start + 1.0 {
        risk = profile.base_risk + severity * 5.0;
    } else if i > dump_start + 1.0 {
        risk = profile.base_risk + severity * 3.0 - (i - dump_start - 1.0) * severity * 0.5;
    }

    risk += rng.next_f64() * severity * 0.6 - severity * 0.3;
    risk.round().clamp(0.0, 100.0) as u8
}

//! Market simulation engine
//!
//! Self-contained generation and analysis of synthetic market data. No
//! I/O, no timers: every operation here is a synchronous computation the
//! callers schedule as they see fit.
//!
//! # Architecture
//!
//! ```text
//! RandomSource (injected)
//!     ↓
//! pattern generators (stable-growth / volatile-cycle / pump-and-dump)
//!     ↓
//! AssetCatalog (7 fixed assets, built once at startup)
//!     ↓
//! detector (pump/dump regions)    trend (risk summaries, headlines)
//! ```

pub mod catalog;
pub mod detector;
pub mod patterns;
pub mod rng;
pub mod trend;
pub mod types;

pub use catalog::{AssetCatalog, AssetProfile};
pub use detector::{detect, detect_for_tier, Detection, Region};
pub use patterns::{pump_and_dump, stable_growth, volatile_cycle, PumpShape, RiskProfile};
pub use rng::{RandomSource, SequenceSource, ThreadRngSource};
pub use trend::{
    describe_risk, latest_risk, pattern_summary, risk_trend, summarize, AssetSummary,
    PatternSummary, RiskTrend,
};
pub use types::{round_price, PricePoint, RiskTier, HISTORY_PERIODS, PERIOD_LABELS};

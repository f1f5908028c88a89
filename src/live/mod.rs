//! Live metrics stream
//!
//! A fixed-capacity, minute-spaced window of synthetic metrics plus the
//! scheduler that advances it. State transitions happen only on ticks;
//! the priming gate guarantees the seeded history is generated exactly
//! once per session.

pub mod feed;
pub mod window;

pub use feed::{feed_task, FeedPhase, LiveFeed, MetricDirections};
pub use window::{direction, LiveWindow, MetricSample, MetricTotals};

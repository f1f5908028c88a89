//! Live feed state machine and its scheduler task
//!
//! The pure step lives on `LiveFeed::tick`; the tokio task only decides
//! when a step runs, so the step is testable without timers.

use super::window::{direction, LiveWindow, MetricSample, MetricTotals};
use crate::market::rng::{RandomSource, ThreadRngSource};
use crate::state::DashboardState;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::time::{interval, Duration};

/// Feed lifecycle: seeded but idle, then streaming once armed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedPhase {
    Priming,
    Streaming,
}

/// Per-metric direction of the newest sample against the one before it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricDirections {
    pub volatility: i8,
    pub hype_index: i8,
}

/// Streaming metrics window plus its derived aggregates
pub struct LiveFeed {
    window: LiveWindow,
    phase: FeedPhase,
    armed: bool,
    totals: MetricTotals,
    directions: MetricDirections,
}

impl LiveFeed {
    /// Seed the window once. Periodic updates stay disabled until
    /// `confirm_ready`, so a second render pass never regenerates the
    /// history.
    pub fn new(rng: &mut dyn RandomSource, capacity: usize, now: DateTime<Utc>) -> Self {
        let window = LiveWindow::seed(rng, capacity, now);
        let totals = window.totals();

        Self {
            window,
            phase: FeedPhase::Priming,
            armed: false,
            totals,
            directions: MetricDirections::default(),
        }
    }

    /// Arm periodic updates; called once when the owner is ready for
    /// ongoing timed ticks
    pub fn confirm_ready(&mut self) {
        self.armed = true;
    }

    /// One streaming step: append a fresh sample, evict the oldest,
    /// recompute totals and per-metric directions.
    ///
    /// Ticks that arrive before `confirm_ready` are dropped silently;
    /// there is no catch-up or backlog. Returns whether a step ran.
    pub fn tick(&mut self, rng: &mut dyn RandomSource) -> bool {
        if !self.armed {
            return false;
        }
        if self.phase == FeedPhase::Priming {
            self.phase = FeedPhase::Streaming;
        }

        let previous = match self.window.latest() {
            Some(sample) => *sample,
            None => return false,
        };

        let sample = self.window.advance(rng);
        self.totals = self.window.totals();
        self.directions = MetricDirections {
            volatility: direction(sample.volatility, previous.volatility),
            hype_index: direction(sample.hype_index, previous.hype_index),
        };

        true
    }

    pub fn phase(&self) -> FeedPhase {
        self.phase
    }

    pub fn window(&self) -> &LiveWindow {
        &self.window
    }

    pub fn totals(&self) -> MetricTotals {
        self.totals
    }

    pub fn directions(&self) -> MetricDirections {
        self.directions
    }

    pub fn latest(&self) -> Option<&MetricSample> {
        self.window.latest()
    }
}

/// Periodic driver for the live feed.
///
/// Runs until the owning task is aborted on shutdown; ticks before the
/// feed is armed fall through as no-ops.
pub async fn feed_task(state: Arc<RwLock<DashboardState>>, tick_secs: u64) {
    log::info!("⏰ Live feed scheduler started (tick: {}s)", tick_secs);

    let mut timer = interval(Duration::from_secs(tick_secs.max(1)));

    loop {
        timer.tick().await;

        let mut guard = state.write().await;
        let mut rng = ThreadRngSource::new();
        if guard.live_mut().tick(&mut rng) {
            let totals = guard.live().totals();
            log::debug!(
                "📈 Live window advanced (volatility total: {}, hype total: {})",
                totals.volatility,
                totals.hype_index
            );
        } else {
            log::debug!("Live tick before readiness, dropped");
        }
    }
}

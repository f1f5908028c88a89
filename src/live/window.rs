//! Fixed-capacity rolling window of live market metrics
//!
//! Samples are minute-spaced and evicted FIFO, so the window length is
//! constant after the initial fill.

use crate::market::rng::RandomSource;
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::collections::VecDeque;

/// Inclusive draw bounds for the volatility metric
pub const VOLATILITY_BOUNDS: (u32, u32) = (50, 500);

/// Inclusive draw bounds for the hype index metric
pub const HYPE_INDEX_BOUNDS: (u32, u32) = (100, 550);

/// Spacing between consecutive samples
pub const SAMPLE_SPACING_SECS: i64 = 60;

/// One timestamped reading of the tracked metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricSample {
    pub timestamp: DateTime<Utc>,
    pub volatility: u32,
    pub hype_index: u32,
}

/// Sum of each metric over the whole window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricTotals {
    pub volatility: u64,
    pub hype_index: u64,
}

/// Sliding window of the most recent metric samples
#[derive(Debug, Clone)]
pub struct LiveWindow {
    samples: VecDeque<MetricSample>,
    capacity: usize,
}

impl LiveWindow {
    /// Seed a full window ending at `end`, one sample per minute
    pub fn seed(rng: &mut dyn RandomSource, capacity: usize, end: DateTime<Utc>) -> Self {
        let capacity = capacity.max(1);
        let mut samples = VecDeque::with_capacity(capacity);

        for index in 0..capacity {
            let offset = (capacity - 1 - index) as i64 * SAMPLE_SPACING_SECS;
            samples.push_back(MetricSample {
                timestamp: end - Duration::seconds(offset),
                volatility: rng.range_u32(VOLATILITY_BOUNDS.0, VOLATILITY_BOUNDS.1),
                hype_index: rng.range_u32(HYPE_INDEX_BOUNDS.0, HYPE_INDEX_BOUNDS.1),
            });
        }

        Self { samples, capacity }
    }

    /// Append a fresh sample one spacing after the newest and evict the
    /// oldest, keeping the window length constant
    pub fn advance(&mut self, rng: &mut dyn RandomSource) -> MetricSample {
        let next_timestamp = match self.samples.back() {
            Some(last) => last.timestamp + Duration::seconds(SAMPLE_SPACING_SECS),
            None => Utc::now(),
        };

        let sample = MetricSample {
            timestamp: next_timestamp,
            volatility: rng.range_u32(VOLATILITY_BOUNDS.0, VOLATILITY_BOUNDS.1),
            hype_index: rng.range_u32(HYPE_INDEX_BOUNDS.0, HYPE_INDEX_BOUNDS.1),
        };

        self.samples.push_back(sample);
        while self.samples.len() > self.capacity {
            self.samples.pop_front();
        }

        sample
    }

    pub fn iter(&self) -> impl Iterator<Item = &MetricSample> {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn oldest(&self) -> Option<&MetricSample> {
        self.samples.front()
    }

    pub fn latest(&self) -> Option<&MetricSample> {
        self.samples.back()
    }

    pub fn totals(&self) -> MetricTotals {
        self.samples
            .iter()
            .fold(MetricTotals::default(), |acc, sample| MetricTotals {
                volatility: acc.volatility + sample.volatility as u64,
                hype_index: acc.hype_index + sample.hype_index as u64,
            })
    }
}

/// Direction of change between consecutive values: +1 up, -1 down, 0 flat
pub fn direction(new: u32, previous: u32) -> i8 {
    match new.cmp(&previous) {
        std::cmp::Ordering::Greater => 1,
        std::cmp::Ordering::Less => -1,
        std::cmp::Ordering::Equal => 0,
    }
}

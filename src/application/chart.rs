//! Synthetic portfolio value series for the dashboard chart.
//!
//! No balance history is stored, so values are drawn uniformly from a band
//! around a fixed base value.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::Serialize;

const BASE_VALUE: f64 = 45_000.0;
const SPREAD: f64 = 10_000.0;

/// Chart window requested by the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timeframe {
    Day,
    Week,
    Month,
    Year,
}

impl Timeframe {
    /// Parse `1D`, `7D`, `1M`; anything else is treated as a year.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "1D" => Self::Day,
            "7D" => Self::Week,
            "1M" => Self::Month,
            _ => Self::Year,
        }
    }

    #[must_use]
    pub fn points(&self) -> usize {
        match self {
            Self::Day => 24,
            Self::Week => 7,
            Self::Month => 30,
            Self::Year => 365,
        }
    }

    #[must_use]
    pub fn step(&self) -> Duration {
        match self {
            Self::Day => Duration::hours(1),
            _ => Duration::days(1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub timestamp: DateTime<Utc>,
    pub value: i64,
}

/// Points for `timeframe` ending at `now`, oldest first.
pub fn series(timeframe: Timeframe, now: DateTime<Utc>, rng: &mut impl Rng) -> Vec<ChartPoint> {
    let points = timeframe.points();
    let step = timeframe.step();

    (0..points)
        .rev()
        .map(|i| {
            let offset = rng.gen::<f64>() - 0.5;
            ChartPoint {
                timestamp: now - step * i as i32,
                value: (BASE_VALUE + offset * SPREAD).round() as i64,
            }
        })
        .collect()
}

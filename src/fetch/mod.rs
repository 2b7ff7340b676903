//! Puzzle input download
//!
//! The runner walks the event days in order, asks an [`InputSource`] for
//! each one and stores new inputs without touching existing files.

pub(crate) mod client;
pub(crate) mod day;
pub(crate) mod runner;
pub(crate) mod store;

use crate::error::FetchError;

pub(crate) use client::HttpSource;
pub(crate) use day::Day;
pub(crate) use runner::{FetchSummary, run};

/// Result of asking upstream for one day
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FetchOutcome {
    /// Response body of a successful request
    Available(String),
    /// Upstream answered 404, the day is not unlocked yet
    NotFound,
}

/// Where puzzle inputs come from
pub(crate) trait InputSource {
    fn fetch_day(&self, day: Day) -> Result<FetchOutcome, FetchError>;
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Half-open time intervals and the overlap predicate
//!
//! All instants are UTC with sub-second precision. An interval `[start, end)`
//! excludes its end instant, so a stay ending at T and a stay starting at T
//! do not conflict.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected interval bounds: `start` must be strictly before `end`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid time range: start {start} is not before end {end}")]
pub struct InvalidInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// A half-open interval `[start, end)` in UTC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl Interval {
    /// Create an interval, rejecting `start >= end`
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, InvalidInterval> {
        if start < end {
            Ok(Self { start, end })
        } else {
            Err(InvalidInterval { start, end })
        }
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Whether two half-open intervals share any instant
    ///
    /// `[s1,e1)` and `[s2,e2)` overlap iff `s1 < e2 && s2 < e1`. Back-to-back
    /// intervals (one ending where the other starts) do not overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

#[cfg(test)]
#[path = "interval_tests.rs"]
mod tests;

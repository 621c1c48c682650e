// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bookable resources and their availability windows

use crate::interval::Interval;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a resource
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceId(pub String);

impl ResourceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ResourceId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ResourceId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A capacity-limited resource that can be reserved for an interval
///
/// The availability window `[available_from, available_to)` bounds when the
/// resource may be booked; either side may be absent, meaning unbounded in
/// that direction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub id: ResourceId,
    pub name: String,
    pub location: Option<String>,
    pub capacity: u32,
    pub amenities: Option<serde_json::Value>,
    pub available_from: Option<DateTime<Utc>>,
    pub available_to: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Resource {
    pub fn new(
        id: impl Into<ResourceId>,
        name: impl Into<String>,
        capacity: u32,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location: None,
            capacity,
            amenities: None,
            available_from: None,
            available_to: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_window(
        mut self,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Self {
        self.available_from = from;
        self.available_to = to;
        self
    }

    pub fn with_amenities(mut self, amenities: serde_json::Value) -> Self {
        self.amenities = Some(amenities);
        self
    }

    /// Whether the availability window fully covers the requested interval
    ///
    /// Open bounds are treated as unbounded in that direction.
    pub fn window_covers(&self, interval: &Interval) -> bool {
        let from_ok = self
            .available_from
            .is_none_or(|from| from <= interval.start());
        let to_ok = self.available_to.is_none_or(|to| to >= interval.end());
        from_ok && to_ok
    }
}

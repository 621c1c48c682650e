// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Availability queries over the reservation store
//!
//! "Active" means confirmed, or pending with an unexpired TTL; only active
//! reservations block an interval. The store evaluates the conflict scan
//! atomically with respect to writes on the same resource.

use chrono::{DateTime, Utc};
use stayd_core::{Interval, ReservationId, ReservationStore, Resource, ResourceId, StoreError};

/// Read-side view of which intervals a resource has free
pub struct AvailabilityIndex<'a, S> {
    store: &'a S,
}

impl<'a, S: ReservationStore> AvailabilityIndex<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Whether any active reservation overlaps `interval` on the resource
    ///
    /// `exclude` drops one reservation from consideration, used when a hold
    /// re-validates against everyone but itself at confirm time.
    pub async fn has_active_conflict(
        &self,
        resource_id: &ResourceId,
        interval: &Interval,
        exclude: Option<&ReservationId>,
        now: DateTime<Utc>,
    ) -> Result<bool, StoreError> {
        self.store
            .has_active_conflict(resource_id, interval, exclude, now)
            .await
    }

    /// Whether a resource can take a new reservation for `interval`
    ///
    /// Requires the availability window to fully cover the interval and no
    /// active conflict.
    pub async fn is_bookable(
        &self,
        resource: &Resource,
        interval: &Interval,
        now: DateTime<Utc>,
    ) -> Result<bool, StoreError> {
        if !resource.window_covers(interval) {
            return Ok(false);
        }
        let conflict = self
            .has_active_conflict(&resource.id, interval, None, now)
            .await?;
        Ok(!conflict)
    }
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Hold creation
//!
//! A hold is a pending reservation with a role-dependent TTL. The conflict
//! check and the insert are one atomic store operation, so concurrent holds
//! for overlapping intervals on the same resource admit at most one winner.

use crate::engine::Engine;
use crate::error::EngineError;
use chrono::{DateTime, Utc};
use stayd_core::{
    Clock, IdGen, Interval, NewReservation, Reservation, ReservationStore, ResourceId, Role,
    UserId,
};

impl<S, C, I> Engine<S, C, I>
where
    S: ReservationStore,
    C: Clock,
    I: IdGen,
{
    /// Place a hold on `resource_id` for `[start, end)`
    ///
    /// The hold expires `ttl(role)` after now unless confirmed first. The
    /// requested interval must fall inside the resource's availability
    /// window and clear of every active reservation.
    pub async fn create_hold(
        &self,
        resource_id: &ResourceId,
        user_id: &UserId,
        role: Role,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Reservation, EngineError> {
        let interval = Interval::new(start, end)?;

        let resource = self
            .store()
            .resource(resource_id)
            .await?
            .ok_or_else(|| EngineError::ResourceNotFound(resource_id.clone()))?;
        self.store()
            .user(user_id)
            .await?
            .ok_or_else(|| EngineError::UserNotFound(user_id.clone()))?;

        if !resource.window_covers(&interval) {
            tracing::debug!(
                resource = %resource_id,
                %interval,
                "hold rejected: outside availability window"
            );
            return Err(EngineError::Conflict);
        }

        let now = self.clock().now();
        let new = NewReservation {
            id: self.id_gen().reservation_id(),
            user_id: user_id.clone(),
            resource_id: resource_id.clone(),
            interval,
            expires_at: self.policy().expiry_for(role, now),
        };
        let reservation = self.store().try_reserve(new, now).await?;

        tracing::info!(
            reservation = %reservation.id,
            resource = %resource_id,
            user = %user_id,
            expires_at = %reservation.expires_at.unwrap_or(now),
            "hold created"
        );
        Ok(reservation)
    }
}

#[cfg(test)]
#[path = "holds_tests.rs"]
mod tests;

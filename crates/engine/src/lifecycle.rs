// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Confirm and cancel transitions
//!
//! Ownership and idempotency guards run against a fresh read; the
//! time-sensitive re-checks (expiry, conflicting confirmed stays) happen
//! inside the store's atomic `try_confirm`/`try_cancel`, where they cannot
//! race a concurrent write on the same resource.

use crate::engine::Engine;
use crate::error::EngineError;
use stayd_core::{
    Clock, IdGen, Reservation, ReservationId, ReservationStatus, ReservationStore, UserId,
};

impl<S, C, I> Engine<S, C, I>
where
    S: ReservationStore,
    C: Clock,
    I: IdGen,
{
    /// Confirm a pending hold
    ///
    /// Idempotent for an already-confirmed reservation. Fails `Expired` once
    /// the TTL has lapsed, whether or not the sweeper has run, and
    /// `Conflict` if a confirmed stay overlapping the interval appeared
    /// since the hold was placed.
    pub async fn confirm_hold(
        &self,
        reservation_id: &ReservationId,
        user_id: &UserId,
    ) -> Result<Reservation, EngineError> {
        let existing = self.owned_reservation(reservation_id, user_id).await?;
        if existing.status == ReservationStatus::Confirmed {
            return Ok(existing);
        }

        // A reservation only confirms inside the availability window as it
        // stands at confirmation time
        let resource = self
            .store()
            .resource(&existing.resource_id)
            .await?
            .ok_or_else(|| EngineError::ResourceNotFound(existing.resource_id.clone()))?;
        if !resource.window_covers(&existing.interval) {
            return Err(EngineError::Conflict);
        }

        let now = self.clock().now();
        let confirmed = self.store().try_confirm(reservation_id, now).await?;
        tracing::info!(
            reservation = %confirmed.id,
            resource = %confirmed.resource_id,
            "hold confirmed"
        );
        Ok(confirmed)
    }

    /// Cancel a reservation
    ///
    /// Pending holds cancel unconditionally; confirmed stays only strictly
    /// before their start instant. Cancelling a cancelled reservation is an
    /// idempotent no-op.
    pub async fn cancel_reservation(
        &self,
        reservation_id: &ReservationId,
        user_id: &UserId,
    ) -> Result<Reservation, EngineError> {
        let existing = self.owned_reservation(reservation_id, user_id).await?;
        if existing.status == ReservationStatus::Cancelled {
            return Ok(existing);
        }

        let now = self.clock().now();
        let cancelled = self.store().try_cancel(reservation_id, now).await?;
        tracing::info!(
            reservation = %cancelled.id,
            resource = %cancelled.resource_id,
            "reservation cancelled"
        );
        Ok(cancelled)
    }

    /// Fetch a reservation and verify the caller owns it
    async fn owned_reservation(
        &self,
        reservation_id: &ReservationId,
        user_id: &UserId,
    ) -> Result<Reservation, EngineError> {
        let reservation = self
            .store()
            .reservation(reservation_id)
            .await?
            .ok_or_else(|| EngineError::ReservationNotFound(reservation_id.clone()))?;
        if reservation.user_id != *user_id {
            return Err(EngineError::Forbidden(reservation_id.clone()));
        }
        Ok(reservation)
    }
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;

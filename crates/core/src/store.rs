// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reservation store collaborator trait
//!
//! The store owns persistence and, crucially, the atomicity of every
//! check-then-act sequence. `try_reserve`, `try_confirm`, and `try_cancel`
//! each bundle the conflict/guard re-check with the write into a single
//! operation, so for any two concurrent calls against overlapping intervals
//! on one resource, at most one succeeds. Implementations serialize those
//! sequences per resource (or rely on transactional isolation that prevents
//! write skew); operations on different resources stay independent.

use crate::interval::Interval;
use crate::reservation::{Reservation, ReservationId, ReservationStatus};
use crate::resource::{Resource, ResourceId};
use crate::user::{User, UserId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// A reservation about to be inserted as a pending hold
#[derive(Debug, Clone)]
pub struct NewReservation {
    pub id: ReservationId,
    pub user_id: UserId,
    pub resource_id: ResourceId,
    pub interval: Interval,
    pub expires_at: DateTime<Utc>,
}

/// Errors from store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("resource not found: {0}")]
    ResourceNotFound(ResourceId),
    #[error("reservation not found: {0}")]
    ReservationNotFound(ReservationId),
    #[error("interval conflicts with an active reservation")]
    Conflict,
    #[error("hold {0} expired before confirmation")]
    Expired(ReservationId),
    #[error("reservation {id} is {status} and cannot transition")]
    InvalidState {
        id: ReservationId,
        status: ReservationStatus,
    },
    #[error("stay already started; reservation {0} can no longer be cancelled")]
    AlreadyStarted(ReservationId),
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Transactional CRUD plus the atomic conflict primitives of the engine
#[async_trait]
pub trait ReservationStore: Send + Sync {
    async fn resource(&self, id: &ResourceId) -> Result<Option<Resource>, StoreError>;

    async fn user(&self, id: &UserId) -> Result<Option<User>, StoreError>;

    async fn reservation(&self, id: &ReservationId) -> Result<Option<Reservation>, StoreError>;

    /// All resources; no ordering guarantee
    async fn resources(&self) -> Result<Vec<Resource>, StoreError>;

    /// A user's reservations, ordered by start time ascending
    async fn reservations_for_user(&self, id: &UserId) -> Result<Vec<Reservation>, StoreError>;

    /// Whether any active reservation on the resource overlaps `interval`
    ///
    /// Active means `Confirmed`, or `Pending` with `expires_at` strictly in
    /// the future of `now`. `exclude` removes one reservation from the check,
    /// used when a reservation re-validates against everyone but itself.
    async fn has_active_conflict(
        &self,
        resource_id: &ResourceId,
        interval: &Interval,
        exclude: Option<&ReservationId>,
        now: DateTime<Utc>,
    ) -> Result<bool, StoreError>;

    /// Atomically check for active conflicts and insert a pending hold
    ///
    /// Fails with `Conflict` if any active reservation overlaps, and
    /// `ResourceNotFound` if the resource is gone.
    async fn try_reserve(
        &self,
        new: NewReservation,
        now: DateTime<Utc>,
    ) -> Result<Reservation, StoreError>;

    /// Atomically re-validate and flip a pending hold to confirmed
    ///
    /// Under the same serialization as `try_reserve`:
    /// - already `Confirmed`: returned unchanged (idempotent)
    /// - `Cancelled`: `InvalidState`
    /// - `Pending` with `expires_at <= now`: `Expired`
    /// - another `Confirmed` reservation overlaps: `Conflict`
    /// - otherwise: status `Confirmed`, `expires_at` cleared
    async fn try_confirm(
        &self,
        id: &ReservationId,
        now: DateTime<Utc>,
    ) -> Result<Reservation, StoreError>;

    /// Atomically cancel a reservation
    ///
    /// Already `Cancelled` is an idempotent no-op. A `Confirmed` reservation
    /// whose stay has begun (`now >= start`) fails with `AlreadyStarted`.
    /// `Pending` cancels unconditionally. On success `expires_at` is cleared.
    async fn try_cancel(
        &self,
        id: &ReservationId,
        now: DateTime<Utc>,
    ) -> Result<Reservation, StoreError>;

    /// Cancel every pending hold whose expiry has passed, in one bulk write
    ///
    /// Returns the number of holds reclaimed. Idempotent; only ever moves
    /// reservations out of the active set.
    async fn sweep_expired(&self, now: DateTime<Utc>) -> Result<u64, StoreError>;
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reservation records and their status state machine
//!
//! A reservation is born `Pending` (a hold), becomes `Confirmed` via explicit
//! confirmation, and ends `Cancelled` either explicitly or when the sweeper
//! reclaims a lapsed hold. `Cancelled` is terminal; rows are never deleted.

use crate::interval::Interval;
use crate::user::UserId;
use crate::resource::ResourceId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a reservation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReservationId(pub String);

impl ReservationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for ReservationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ReservationId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ReservationId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Reservation lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl ReservationStatus {
    /// Whether moving to `next` is a legal transition
    ///
    /// Transitions are monotonic: Pending may confirm or cancel, Confirmed
    /// may only cancel, Cancelled is terminal. Self-transitions are not
    /// legal moves (idempotent calls are handled by returning the record
    /// unchanged, not by re-transitioning).
    pub fn can_transition_to(self, next: ReservationStatus) -> bool {
        use ReservationStatus::{Cancelled, Confirmed, Pending};
        matches!(
            (self, next),
            (Pending, Confirmed) | (Pending, Cancelled) | (Confirmed, Cancelled)
        )
    }

    pub fn is_terminal(self) -> bool {
        self == ReservationStatus::Cancelled
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ReservationStatus::Pending => "PENDING",
            ReservationStatus::Confirmed => "CONFIRMED",
            ReservationStatus::Cancelled => "CANCELLED",
        };
        write!(f, "{}", s)
    }
}

/// A reservation of one resource for one half-open interval
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: ReservationId,
    pub user_id: UserId,
    pub resource_id: ResourceId,
    pub interval: Interval,
    pub status: ReservationStatus,
    /// Hold expiry; `Some` iff status is `Pending`
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reservation {
    /// Create a new hold, pending until `expires_at`
    pub fn pending(
        id: ReservationId,
        user_id: UserId,
        resource_id: ResourceId,
        interval: Interval,
        expires_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            resource_id,
            interval,
            status: ReservationStatus::Pending,
            expires_at: Some(expires_at),
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the hold's TTL has lapsed
    ///
    /// A hold is confirmable strictly up to its expiry instant; there is no
    /// grace period. Only `Pending` reservations can be expired.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.status == ReservationStatus::Pending
            && self.expires_at.is_some_and(|at| at <= now)
    }

    /// Whether this reservation blocks conflicting intervals
    ///
    /// Active means `Confirmed`, or `Pending` with an unexpired TTL.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        match self.status {
            ReservationStatus::Confirmed => true,
            ReservationStatus::Pending => self.expires_at.is_some_and(|at| at > now),
            ReservationStatus::Cancelled => false,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}

#[cfg(test)]
#[path = "reservation_tests.rs"]
mod tests;

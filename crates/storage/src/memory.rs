// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory reservation store
//!
//! Concurrency discipline: every check-then-act mutation (`try_reserve`,
//! `try_confirm`, `try_cancel`) runs under a mutex scoped to the target
//! resource id, so two such sequences for one resource never interleave,
//! while different resources proceed independently. The sweep takes only the
//! table write lock: it moves reservations out of the active set in one
//! atomic pass and can never introduce a conflict, so it needs no
//! coordination with the per-resource locks.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex};
use stayd_core::{
    Interval, NewReservation, Reservation, ReservationId, ReservationStatus, ReservationStore,
    Resource, ResourceId, StoreError, User, UserId,
};
use tokio::sync::{Mutex, RwLock};

#[derive(Default)]
struct Tables {
    resources: HashMap<ResourceId, Resource>,
    users: HashMap<UserId, User>,
    reservations: HashMap<ReservationId, Reservation>,
}

impl Tables {
    /// Scan for an active reservation overlapping `interval` on the resource
    fn has_active_conflict(
        &self,
        resource_id: &ResourceId,
        interval: &Interval,
        exclude: Option<&ReservationId>,
        now: DateTime<Utc>,
    ) -> bool {
        self.reservations.values().any(|r| {
            r.resource_id == *resource_id
                && exclude != Some(&r.id)
                && r.is_active(now)
                && r.interval.overlaps(interval)
        })
    }
}

/// In-memory `ReservationStore` with per-resource serialization
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
    reserve_locks: StdMutex<HashMap<ResourceId, Arc<Mutex<()>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The serialization point for check-then-act sequences on one resource
    fn reserve_lock(&self, resource_id: &ResourceId) -> Arc<Mutex<()>> {
        let mut locks = self
            .reserve_locks
            .lock()
            .unwrap_or_else(|e| e.into_inner());
        locks
            .entry(resource_id.clone())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    pub async fn insert_resource(&self, resource: Resource) {
        let mut tables = self.tables.write().await;
        tables.resources.insert(resource.id.clone(), resource);
    }

    pub async fn insert_user(&self, user: User) {
        let mut tables = self.tables.write().await;
        tables.users.insert(user.id.clone(), user);
    }

    /// Insert a reservation row directly, bypassing conflict checks
    ///
    /// Fixture support for tests that need to stage states unreachable
    /// through `try_reserve` (e.g. a confirmed overlap appearing between
    /// hold and confirm).
    pub async fn insert_reservation(&self, reservation: Reservation) {
        let mut tables = self.tables.write().await;
        tables
            .reservations
            .insert(reservation.id.clone(), reservation);
    }

    pub async fn reservation_count(&self) -> usize {
        self.tables.read().await.reservations.len()
    }
}

#[async_trait]
impl ReservationStore for MemoryStore {
    async fn resource(&self, id: &ResourceId) -> Result<Option<Resource>, StoreError> {
        Ok(self.tables.read().await.resources.get(id).cloned())
    }

    async fn user(&self, id: &UserId) -> Result<Option<User>, StoreError> {
        Ok(self.tables.read().await.users.get(id).cloned())
    }

    async fn reservation(&self, id: &ReservationId) -> Result<Option<Reservation>, StoreError> {
        Ok(self.tables.read().await.reservations.get(id).cloned())
    }

    async fn resources(&self) -> Result<Vec<Resource>, StoreError> {
        Ok(self.tables.read().await.resources.values().cloned().collect())
    }

    async fn reservations_for_user(&self, id: &UserId) -> Result<Vec<Reservation>, StoreError> {
        let tables = self.tables.read().await;
        let mut rows: Vec<Reservation> = tables
            .reservations
            .values()
            .filter(|r| r.user_id == *id)
            .cloned()
            .collect();
        // Start time ascending; id breaks ties for stable pagination
        rows.sort_by(|a, b| {
            a.interval
                .start()
                .cmp(&b.interval.start())
                .then_with(|| a.id.0.cmp(&b.id.0))
        });
        Ok(rows)
    }

    async fn has_active_conflict(
        &self,
        resource_id: &ResourceId,
        interval: &Interval,
        exclude: Option<&ReservationId>,
        now: DateTime<Utc>,
    ) -> Result<bool, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.has_active_conflict(resource_id, interval, exclude, now))
    }

    async fn try_reserve(
        &self,
        new: NewReservation,
        now: DateTime<Utc>,
    ) -> Result<Reservation, StoreError> {
        let lock = self.reserve_lock(&new.resource_id);
        let _serial = lock.lock().await;

        {
            let tables = self.tables.read().await;
            if !tables.resources.contains_key(&new.resource_id) {
                return Err(StoreError::ResourceNotFound(new.resource_id));
            }
            if tables.has_active_conflict(&new.resource_id, &new.interval, None, now) {
                return Err(StoreError::Conflict);
            }
        }

        let reservation = Reservation::pending(
            new.id,
            new.user_id,
            new.resource_id,
            new.interval,
            new.expires_at,
            now,
        );
        let mut tables = self.tables.write().await;
        tables
            .reservations
            .insert(reservation.id.clone(), reservation.clone());
        Ok(reservation)
    }

    async fn try_confirm(
        &self,
        id: &ReservationId,
        now: DateTime<Utc>,
    ) -> Result<Reservation, StoreError> {
        let resource_id = {
            let tables = self.tables.read().await;
            let r = tables
                .reservations
                .get(id)
                .ok_or_else(|| StoreError::ReservationNotFound(id.clone()))?;
            r.resource_id.clone()
        };

        let lock = self.reserve_lock(&resource_id);
        let _serial = lock.lock().await;
        let mut tables = self.tables.write().await;

        // Re-read under the lock; time may have passed since the caller looked
        let current = tables
            .reservations
            .get(id)
            .ok_or_else(|| StoreError::ReservationNotFound(id.clone()))?
            .clone();

        match current.status {
            ReservationStatus::Confirmed => Ok(current),
            status if !status.can_transition_to(ReservationStatus::Confirmed) => {
                Err(StoreError::InvalidState {
                    id: id.clone(),
                    status,
                })
            }
            _ => {
                if current.is_expired(now) {
                    return Err(StoreError::Expired(id.clone()));
                }
                let conflict = tables.reservations.values().any(|other| {
                    other.resource_id == resource_id
                        && other.id != *id
                        && other.status == ReservationStatus::Confirmed
                        && other.interval.overlaps(&current.interval)
                });
                if conflict {
                    return Err(StoreError::Conflict);
                }
                let row = tables
                    .reservations
                    .get_mut(id)
                    .ok_or_else(|| StoreError::ReservationNotFound(id.clone()))?;
                row.status = ReservationStatus::Confirmed;
                row.expires_at = None;
                row.updated_at = now;
                Ok(row.clone())
            }
        }
    }

    async fn try_cancel(
        &self,
        id: &ReservationId,
        now: DateTime<Utc>,
    ) -> Result<Reservation, StoreError> {
        let resource_id = {
            let tables = self.tables.read().await;
            let r = tables
                .reservations
                .get(id)
                .ok_or_else(|| StoreError::ReservationNotFound(id.clone()))?;
            r.resource_id.clone()
        };

        let lock = self.reserve_lock(&resource_id);
        let _serial = lock.lock().await;
        let mut tables = self.tables.write().await;

        let current = tables
            .reservations
            .get(id)
            .ok_or_else(|| StoreError::ReservationNotFound(id.clone()))?
            .clone();

        match current.status {
            ReservationStatus::Cancelled => Ok(current),
            ReservationStatus::Confirmed if current.interval.start() <= now => {
                Err(StoreError::AlreadyStarted(id.clone()))
            }
            status if !status.can_transition_to(ReservationStatus::Cancelled) => {
                Err(StoreError::InvalidState {
                    id: id.clone(),
                    status,
                })
            }
            _ => {
                let row = tables
                    .reservations
                    .get_mut(id)
                    .ok_or_else(|| StoreError::ReservationNotFound(id.clone()))?;
                row.status = ReservationStatus::Cancelled;
                row.expires_at = None;
                row.updated_at = now;
                Ok(row.clone())
            }
        }
    }

    async fn sweep_expired(&self, now: DateTime<Utc>) -> Result<u64, StoreError> {
        let mut tables = self.tables.write().await;
        let mut count = 0;
        for row in tables.reservations.values_mut() {
            if row.status == ReservationStatus::Pending
                && row.expires_at.is_some_and(|at| at <= now)
            {
                row.status = ReservationStatus::Cancelled;
                row.expires_at = None;
                row.updated_at = now;
                count += 1;
            }
        }
        Ok(count)
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;

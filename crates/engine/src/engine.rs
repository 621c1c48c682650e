// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Engine façade wiring store, clock, id generation, and policy together

use crate::error::EngineError;
use std::sync::Arc;
use stayd_core::{
    Clock, EngineConfig, HoldPolicy, IdGen, Page, PageRequest, Reservation, ReservationStore,
    UserId,
};

/// The reservation engine
///
/// Generic over its collaborators so tests can inject a fake clock and
/// sequential ids. All suspension points are store I/O; the engine holds no
/// mutable state of its own.
pub struct Engine<S, C, I> {
    store: Arc<S>,
    clock: C,
    id_gen: I,
    policy: HoldPolicy,
    config: EngineConfig,
}

impl<S, C, I> Engine<S, C, I>
where
    S: ReservationStore,
    C: Clock,
    I: IdGen,
{
    pub fn new(store: Arc<S>, clock: C, id_gen: I, config: EngineConfig) -> Self {
        Self {
            store,
            clock,
            id_gen,
            policy: HoldPolicy::from(&config.hold_ttl),
            config,
        }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    pub(crate) fn clock(&self) -> &C {
        &self.clock
    }

    pub(crate) fn id_gen(&self) -> &I {
        &self.id_gen
    }

    pub(crate) fn policy(&self) -> &HoldPolicy {
        &self.policy
    }

    /// Clamp caller paging input, substituting the default size for zero
    pub(crate) fn page_request(&self, page: usize, page_size: usize) -> PageRequest {
        let size = if page_size == 0 {
            self.config.default_page_size
        } else {
            page_size
        };
        PageRequest::clamped(page, size, self.config.max_page_size)
    }

    /// A user's reservations, start time ascending, paginated
    pub async fn list_user_reservations(
        &self,
        user_id: &UserId,
        page: usize,
        page_size: usize,
    ) -> Result<Page<Reservation>, EngineError> {
        let request = self.page_request(page, page_size);
        let rows = self.store.reservations_for_user(user_id).await?;
        Ok(Page::from_items(rows, &request))
    }

    /// Cancel every lapsed hold; returns the number reclaimed
    ///
    /// Normally driven by the [`crate::Sweeper`], but callable on demand.
    pub async fn sweep_expired_holds(&self) -> Result<u64, EngineError> {
        let now = self.clock.now();
        let count = self.store.sweep_expired(now).await?;
        if count > 0 {
            tracing::info!(count, "expired holds reclaimed");
        }
        Ok(count)
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;

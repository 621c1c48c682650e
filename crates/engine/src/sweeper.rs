// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Background reclamation of lapsed holds
//!
//! One independent task ticking at a fixed interval. Each cycle is a single
//! bulk store operation that cancels every pending hold whose expiry has
//! passed. A failed cycle is logged and retried at the next tick; the
//! sweeper never blocks caller-facing operations. Shutdown is cooperative:
//! the signal stops new cycles, an in-flight cycle finishes.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;
use stayd_core::{Clock, ReservationStore, StoreError};
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Periodic expiry sweeper over a reservation store
pub struct Sweeper<S, C> {
    store: Arc<S>,
    clock: C,
    interval: Duration,
}

/// Handle to a spawned sweeper task
pub struct SweeperHandle {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl SweeperHandle {
    /// Signal shutdown and wait for the in-flight cycle to finish
    pub async fn shutdown(self) {
        let _ = self.shutdown.send(true);
        let _ = self.task.await;
    }
}

impl<S, C> Sweeper<S, C>
where
    S: ReservationStore + 'static,
    C: Clock + 'static,
{
    pub fn new(store: Arc<S>, clock: C, interval: Duration) -> Self {
        Self {
            store,
            clock,
            interval,
        }
    }

    /// Spawn the ticking task
    pub fn spawn(self) -> SweeperHandle {
        let (tx, rx) = watch::channel(false);
        let task = tokio::spawn(self.run(rx));
        SweeperHandle { shutdown: tx, task }
    }

    async fn run(self, mut shutdown: watch::Receiver<bool>) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        tracing::debug!(interval = ?self.interval, "sweeper started");

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    match self.sweep_once(self.clock.now()).await {
                        Ok(0) => {}
                        Ok(count) => tracing::info!(count, "expired holds reclaimed"),
                        // Transient store outage: the next cycle self-corrects
                        Err(err) => tracing::warn!(error = %err, "sweep failed; retrying next tick"),
                    }
                }
                changed = shutdown.changed() => {
                    // A dropped handle closes the channel; stop either way
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }
        tracing::debug!("sweeper stopped");
    }

    /// One sweep cycle; also usable without spawning
    pub async fn sweep_once(&self, now: DateTime<Utc>) -> Result<u64, StoreError> {
        self.store.sweep_expired(now).await
    }
}

#[cfg(test)]
#[path = "sweeper_tests.rs"]
mod tests;

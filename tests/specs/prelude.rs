//! Shared fixtures for behavioral specs

use chrono::{DateTime, TimeDelta, Utc};
use std::sync::Arc;
use stayd_core::{EngineConfig, FakeClock, SequentialIdGen};
use stayd_engine::Engine;
use stayd_storage::{seed_demo_data, MemoryStore};

pub type SpecEngine = Engine<MemoryStore, FakeClock, SequentialIdGen>;

/// Midnight UTC on day `n` of the test calendar
pub fn day(n: i64) -> DateTime<Utc> {
    // Day 0 anchored at a fixed instant so specs are reproducible
    DateTime::from_timestamp(1_750_000_000, 0).unwrap() + TimeDelta::days(n)
}

/// `hour` o'clock UTC on day `n`
pub fn day_at(n: i64, hour: i64) -> DateTime<Utc> {
    day(n) + TimeDelta::hours(hour)
}

/// Engine over a seeded in-memory store, clock frozen at day 0
///
/// Seeds the demo data set: members `alice` and `bob`, guests `gina` and
/// `tom`, rooms `room-1`..`room-6` in distinct locations, no availability
/// windows. Default policy: guest TTL 1 minute, member TTL 2 minutes.
pub async fn spec_engine() -> (Arc<SpecEngine>, FakeClock) {
    let store = Arc::new(MemoryStore::new());
    seed_demo_data(&store, day(0)).await;

    let clock = FakeClock::at(day(0));
    let engine = Engine::new(
        store,
        clock.clone(),
        SequentialIdGen::new("res"),
        EngineConfig::default(),
    );
    (Arc::new(engine), clock)
}

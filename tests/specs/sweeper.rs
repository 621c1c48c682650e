//! Background sweeper behavior end to end

use crate::prelude::{day, spec_engine};
use std::sync::Arc;
use std::time::Duration;
use stayd_core::{ReservationStatus, ReservationStore, Role};
use stayd_engine::Sweeper;

#[tokio::test(start_paused = true)]
async fn spawned_sweeper_reclaims_lapsed_holds() {
    let (engine, clock) = spec_engine().await;

    let hold = engine
        .create_hold(&"room-1".into(), &"gina".into(), Role::Guest, day(1), day(2))
        .await
        .unwrap();

    // Hold lapses before the sweeper's next cycle
    clock.advance(Duration::from_secs(60));

    let handle = Sweeper::new(
        Arc::clone(engine.store()),
        clock.clone(),
        Duration::from_millis(20),
    )
    .spawn();
    tokio::time::sleep(Duration::from_millis(100)).await;
    handle.shutdown().await;

    let swept = engine
        .store()
        .reservation(&hold.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(swept.status, ReservationStatus::Cancelled);
    assert_eq!(swept.expires_at, None);

    // The interval is free again
    engine
        .create_hold(&"room-1".into(), &"tom".into(), Role::Guest, day(1), day(2))
        .await
        .unwrap();
}

#[tokio::test(start_paused = true)]
async fn sweeper_leaves_confirmed_stays_untouched() {
    let (engine, clock) = spec_engine().await;

    let hold = engine
        .create_hold(&"room-2".into(), &"alice".into(), Role::Member, day(1), day(2))
        .await
        .unwrap();
    engine.confirm_hold(&hold.id, &"alice".into()).await.unwrap();

    clock.advance(Duration::from_secs(600));
    let handle = Sweeper::new(
        Arc::clone(engine.store()),
        clock.clone(),
        Duration::from_millis(20),
    )
    .spawn();
    tokio::time::sleep(Duration::from_millis(100)).await;
    handle.shutdown().await;

    let kept = engine
        .store()
        .reservation(&hold.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(kept.status, ReservationStatus::Confirmed);
}

#[tokio::test]
async fn on_demand_sweep_is_equivalent_to_a_cycle() {
    let (engine, clock) = spec_engine().await;

    engine
        .create_hold(&"room-3".into(), &"gina".into(), Role::Guest, day(1), day(2))
        .await
        .unwrap();
    clock.advance(Duration::from_secs(60));

    assert_eq!(engine.sweep_expired_holds().await.unwrap(), 1);
    assert_eq!(engine.sweep_expired_holds().await.unwrap(), 0);
}

//! Confirmation and cancellation rules

use crate::prelude::{day, spec_engine};
use std::time::Duration;
use stayd_core::{ReservationStatus, Role};
use stayd_engine::EngineError;

#[tokio::test]
async fn scenario_b_confirm_then_cancel_after_start() {
    let (engine, clock) = spec_engine().await;

    let hold = engine
        .create_hold(&"room-1".into(), &"alice".into(), Role::Member, day(1), day(3))
        .await
        .unwrap();

    // Confirm within the TTL
    clock.advance(Duration::from_secs(30));
    let confirmed = engine.confirm_hold(&hold.id, &"alice".into()).await.unwrap();
    assert_eq!(confirmed.status, ReservationStatus::Confirmed);
    assert_eq!(confirmed.expires_at, None);

    // Cancelling mid-stay on day 2 is rejected
    clock.set(day(2));
    let err = engine
        .cancel_reservation(&hold.id, &"alice".into())
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::AlreadyStarted(_)));
}

#[tokio::test]
async fn confirmed_stay_cancels_any_instant_before_start() {
    let (engine, clock) = spec_engine().await;

    let hold = engine
        .create_hold(&"room-1".into(), &"alice".into(), Role::Member, day(1), day(3))
        .await
        .unwrap();
    engine.confirm_hold(&hold.id, &"alice".into()).await.unwrap();

    // One second before the stay begins still works
    clock.set(day(1) - chrono::TimeDelta::seconds(1));
    let cancelled = engine
        .cancel_reservation(&hold.id, &"alice".into())
        .await
        .unwrap();
    assert_eq!(cancelled.status, ReservationStatus::Cancelled);
}

#[tokio::test]
async fn repeated_confirm_returns_the_same_record() {
    let (engine, _) = spec_engine().await;

    let hold = engine
        .create_hold(&"room-2".into(), &"bob".into(), Role::Member, day(1), day(2))
        .await
        .unwrap();
    let first = engine.confirm_hold(&hold.id, &"bob".into()).await.unwrap();
    let second = engine.confirm_hold(&hold.id, &"bob".into()).await.unwrap();

    assert_eq!(first.status, second.status);
    assert_eq!(first.updated_at, second.updated_at);
}

#[tokio::test]
async fn expired_hold_cannot_confirm_even_before_sweep() {
    let (engine, clock) = spec_engine().await;

    let hold = engine
        .create_hold(&"room-3".into(), &"gina".into(), Role::Guest, day(1), day(2))
        .await
        .unwrap();

    clock.advance(Duration::from_secs(60)); // guest TTL exactly
    let err = engine.confirm_hold(&hold.id, &"gina".into()).await.unwrap_err();
    assert!(matches!(err, EngineError::Expired(_)));
}

#[tokio::test]
async fn strangers_cannot_touch_a_reservation() {
    let (engine, _) = spec_engine().await;

    let hold = engine
        .create_hold(&"room-4".into(), &"alice".into(), Role::Member, day(1), day(2))
        .await
        .unwrap();

    let err = engine.confirm_hold(&hold.id, &"tom".into()).await.unwrap_err();
    assert!(matches!(err, EngineError::Forbidden(_)));

    let err = engine
        .cancel_reservation(&hold.id, &"tom".into())
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::Forbidden(_)));
}

#[tokio::test]
async fn cancelled_reservations_remain_listed_for_audit() {
    let (engine, _) = spec_engine().await;

    let hold = engine
        .create_hold(&"room-5".into(), &"alice".into(), Role::Member, day(1), day(2))
        .await
        .unwrap();
    engine.cancel_reservation(&hold.id, &"alice".into()).await.unwrap();

    let page = engine
        .list_user_reservations(&"alice".into(), 1, 10)
        .await
        .unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].status, ReservationStatus::Cancelled);
}

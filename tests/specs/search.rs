//! Availability-aware search and pagination

use crate::prelude::{day, spec_engine};
use stayd_core::{Interval, Resource, Role};
use stayd_engine::SearchFilter;

#[tokio::test]
async fn scenario_c_window_coverage_and_pagination() {
    let (engine, _) = spec_engine().await;
    let window = Interval::new(day(5), day(7)).unwrap();

    // Narrow room-6 so its window cannot cover [Day5, Day7)
    engine
        .store()
        .insert_resource(
            Resource::new("room-6", "Garden Apartment", 3, day(0))
                .with_location("Ramat Gan")
                .with_window(Some(day(6)), None),
        )
        .await;

    let filter = SearchFilter::new().with_window(window);

    // 5 matching resources at pageSize 2 yield 3 pages
    let first = engine.search_resources(&filter, 1, 2).await.unwrap();
    assert_eq!(first.total, 5);
    assert_eq!(first.items.len(), 2);
    assert!(first.has_more);

    let second = engine.search_resources(&filter, 2, 2).await.unwrap();
    assert_eq!(second.items.len(), 2);
    assert!(second.has_more);

    let third = engine.search_resources(&filter, 3, 2).await.unwrap();
    assert_eq!(third.items.len(), 1);
    assert!(!third.has_more);
}

#[tokio::test]
async fn windowed_search_skips_held_rooms_until_expiry() {
    let (engine, clock) = spec_engine().await;
    let window = Interval::new(day(5), day(7)).unwrap();

    engine
        .create_hold(&"room-1".into(), &"alice".into(), Role::Member, day(5), day(7))
        .await
        .unwrap();

    let filter = SearchFilter::new().with_window(window);
    let page = engine.search_resources(&filter, 1, 10).await.unwrap();
    assert_eq!(page.total, 5);
    assert!(page.items.iter().all(|r| r.id.0 != "room-1"));

    // Hold lapses; the room reappears without any sweep
    clock.advance(std::time::Duration::from_secs(120));
    let page = engine.search_resources(&filter, 1, 10).await.unwrap();
    assert_eq!(page.total, 6);
}

#[tokio::test]
async fn location_and_capacity_filters_combine() {
    let (engine, _) = spec_engine().await;

    let filter = SearchFilter::new()
        .with_location("jerusalem")
        .with_min_capacity(4);
    let page = engine.search_resources(&filter, 1, 10).await.unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].name, "City Loft");

    let too_big = SearchFilter::new()
        .with_location("jerusalem")
        .with_min_capacity(5);
    let page = engine.search_resources(&too_big, 1, 10).await.unwrap();
    assert_eq!(page.total, 0);
    assert!(!page.has_more);
}

#[tokio::test]
async fn ordering_is_stable_across_identical_calls() {
    let (engine, _) = spec_engine().await;

    let a = engine
        .search_resources(&SearchFilter::new(), 1, 10)
        .await
        .unwrap();
    let b = engine
        .search_resources(&SearchFilter::new(), 1, 10)
        .await
        .unwrap();

    let ids = |page: &stayd_core::Page<Resource>| {
        page.items.iter().map(|r| r.id.0.clone()).collect::<Vec<_>>()
    };
    assert_eq!(ids(&a), ids(&b));
}

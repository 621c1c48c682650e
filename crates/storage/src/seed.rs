// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Demo seed data for tests and local experimentation

use chrono::{DateTime, Utc};
use serde_json::json;
use stayd_core::{Resource, Role, User};

use crate::MemoryStore;

/// Seed a handful of rooms and users
///
/// Two members, two guests, and six rooms across distinct locations. Rooms
/// have no availability window unless a test narrows one afterwards.
pub async fn seed_demo_data(store: &MemoryStore, now: DateTime<Utc>) {
    store
        .insert_user(User::new("alice", "Alice Member", Role::Member))
        .await;
    store
        .insert_user(User::new("bob", "Bob Member", Role::Member))
        .await;
    store
        .insert_user(User::new("gina", "Gina Guest", Role::Guest))
        .await;
    store
        .insert_user(User::new("tom", "Tom Guest", Role::Guest))
        .await;

    let rooms = [
        ("room-1", "Ocean View Suite", "Tel Aviv", 2),
        ("room-2", "City Loft", "Jerusalem", 4),
        ("room-3", "Mountain Cabin", "Haifa", 6),
        ("room-4", "Downtown Studio", "Eilat", 1),
        ("room-5", "Luxury Penthouse", "Herzliya", 4),
        ("room-6", "Garden Apartment", "Ramat Gan", 3),
    ];
    for (id, name, location, capacity) in rooms {
        store
            .insert_resource(
                Resource::new(id, name, capacity, now)
                    .with_location(location)
                    .with_amenities(json!({ "wifi": true })),
            )
            .await;
    }
}

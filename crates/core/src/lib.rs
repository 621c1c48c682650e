// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! stayd-core: Core library for the stayd reservation engine
//!
//! This crate provides:
//! - Half-open time intervals and the overlap predicate
//! - Domain records for resources, reservations, and users
//! - Role-keyed hold TTL policy and engine configuration
//! - Clock and id-generation abstractions for deterministic testing
//! - The `ReservationStore` collaborator trait with its atomic
//!   check-and-write primitives

pub mod clock;
pub mod config;
pub mod id;
pub mod interval;
pub mod page;
pub mod policy;
pub mod reservation;
pub mod resource;
pub mod store;
pub mod user;

// Re-exports
pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{EngineConfig, HoldTtlConfig};
pub use id::{IdGen, SequentialIdGen, UuidIdGen};
pub use interval::{Interval, InvalidInterval};
pub use page::{Page, PageRequest};
pub use policy::HoldPolicy;
pub use reservation::{Reservation, ReservationId, ReservationStatus};
pub use resource::{Resource, ResourceId};
pub use store::{NewReservation, ReservationStore, StoreError};
pub use user::{Role, User, UserId};

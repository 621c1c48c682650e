// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! stayd-storage: reference `ReservationStore` implementation
//!
//! An in-memory store whose conflict-check-and-write sequences are
//! serialized per resource, the lock discipline the engine's no-double-booking
//! guarantee rests on. Doubles as the fixture store for engine tests.

mod memory;
mod seed;

pub use memory::MemoryStore;
pub use seed::seed_demo_data;

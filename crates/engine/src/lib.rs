// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! stayd-engine: the reservation concurrency engine
//!
//! Holds, confirmation, cancellation, availability-aware search, and the
//! background sweeper that reclaims lapsed holds. Persistence and identity
//! are collaborator traits from `stayd-core`.

mod availability;
mod engine;
mod error;
mod holds;
mod lifecycle;
mod search;
mod sweeper;

pub use availability::AvailabilityIndex;
pub use engine::Engine;
pub use error::EngineError;
pub use search::SearchFilter;
pub use sweeper::{Sweeper, SweeperHandle};

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error taxonomy for engine operations
//!
//! Every guard violation surfaces synchronously as one of these variants;
//! none is retried automatically and none is process-fatal.

use stayd_core::{InvalidInterval, ReservationId, ResourceId, StoreError, UserId};
use thiserror::Error;

/// Errors returned to the request-handling layer
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("resource not found: {0}")]
    ResourceNotFound(ResourceId),
    #[error("user not found: {0}")]
    UserNotFound(UserId),
    #[error("reservation not found: {0}")]
    ReservationNotFound(ReservationId),
    #[error(transparent)]
    InvalidRange(#[from] InvalidInterval),
    #[error("interval conflicts with an active reservation")]
    Conflict,
    #[error("reservation {0} belongs to another user")]
    Forbidden(ReservationId),
    #[error("hold {0} expired before confirmation")]
    Expired(ReservationId),
    #[error("stay already started; reservation {0} can no longer be cancelled")]
    AlreadyStarted(ReservationId),
    #[error("store error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for EngineError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::ResourceNotFound(id) => EngineError::ResourceNotFound(id),
            StoreError::ReservationNotFound(id) => EngineError::ReservationNotFound(id),
            StoreError::Conflict => EngineError::Conflict,
            StoreError::Expired(id) => EngineError::Expired(id),
            // A cancelled hold reads as expired to the confirming caller:
            // either way the hold is gone and they must re-hold
            StoreError::InvalidState { id, .. } => EngineError::Expired(id),
            StoreError::AlreadyStarted(id) => EngineError::AlreadyStarted(id),
            other => EngineError::Store(other),
        }
    }
}

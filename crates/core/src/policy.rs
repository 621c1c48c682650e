// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Role-keyed hold TTL policy
//!
//! Holds from lower-trust callers lapse sooner. The mapping is built from
//! configuration so policy changes never touch the state machine.

use crate::config::HoldTtlConfig;
use crate::user::Role;
use chrono::{DateTime, TimeDelta, Utc};
use std::collections::HashMap;
use std::time::Duration;

/// Maps a caller role to the TTL of its holds
#[derive(Debug, Clone)]
pub struct HoldPolicy {
    ttls: HashMap<Role, Duration>,
}

impl HoldPolicy {
    pub fn new(ttls: HashMap<Role, Duration>) -> Self {
        Self { ttls }
    }

    /// TTL for the given role, falling back to the guest tier
    pub fn ttl_for(&self, role: Role) -> Duration {
        self.ttls
            .get(&role)
            .or_else(|| self.ttls.get(&Role::Guest))
            .copied()
            .unwrap_or(Duration::from_secs(60))
    }

    /// Expiry instant for a hold placed now by the given role
    pub fn expiry_for(&self, role: Role, now: DateTime<Utc>) -> DateTime<Utc> {
        let delta = TimeDelta::from_std(self.ttl_for(role)).unwrap_or(TimeDelta::MAX);
        now.checked_add_signed(delta)
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}

impl From<&HoldTtlConfig> for HoldPolicy {
    fn from(config: &HoldTtlConfig) -> Self {
        let mut ttls = HashMap::new();
        ttls.insert(Role::Guest, config.guest);
        ttls.insert(Role::Member, config.member);
        Self::new(ttls)
    }
}

impl Default for HoldPolicy {
    fn default() -> Self {
        Self::from(&HoldTtlConfig::default())
    }
}

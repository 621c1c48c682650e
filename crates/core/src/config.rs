// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Engine configuration
//!
//! Hold TTLs and the sweep interval are deployment policy, supplied here
//! rather than hardcoded. Durations accept humantime strings ("90s", "2m").

use serde::Deserialize;
use std::time::Duration;

/// Hold TTL per caller role
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HoldTtlConfig {
    #[serde(with = "humantime_serde")]
    pub guest: Duration,
    #[serde(with = "humantime_serde")]
    pub member: Duration,
}

impl Default for HoldTtlConfig {
    fn default() -> Self {
        Self {
            guest: Duration::from_secs(60),
            member: Duration::from_secs(120),
        }
    }
}

/// Top-level engine configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// How often the sweeper reclaims lapsed holds
    #[serde(with = "humantime_serde")]
    pub sweep_interval: Duration,
    /// Upper bound for a caller-supplied page size
    pub max_page_size: usize,
    /// Page size used when the caller supplies zero
    pub default_page_size: usize,
    pub hold_ttl: HoldTtlConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sweep_interval: Duration::from_secs(15),
            max_page_size: 50,
            default_page_size: 20,
            hold_ttl: HoldTtlConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Parse configuration from a TOML document
    pub fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Availability-aware resource search
//!
//! Filtering is read-only and consults the availability index per candidate.
//! Ordering is deterministic (location ascending, then name) so pagination
//! stays stable while the underlying data does not change.

use crate::availability::AvailabilityIndex;
use crate::engine::Engine;
use crate::error::EngineError;
use stayd_core::{Clock, IdGen, Interval, Page, ReservationStore, Resource};

/// Search criteria; absent fields do not filter
#[derive(Debug, Clone, Default)]
pub struct SearchFilter {
    /// Case-insensitive substring match on location
    pub location: Option<String>,
    pub min_capacity: Option<u32>,
    /// Requested stay; qualifying resources must cover it and be free of
    /// active conflicts within it
    pub window: Option<Interval>,
}

impl SearchFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_min_capacity(mut self, capacity: u32) -> Self {
        self.min_capacity = Some(capacity);
        self
    }

    pub fn with_window(mut self, window: Interval) -> Self {
        self.window = Some(window);
        self
    }

    fn matches_location(&self, resource: &Resource) -> bool {
        match &self.location {
            None => true,
            Some(needle) => resource
                .location
                .as_deref()
                .is_some_and(|l| l.to_lowercase().contains(&needle.to_lowercase())),
        }
    }

    fn matches_capacity(&self, resource: &Resource) -> bool {
        self.min_capacity.is_none_or(|min| resource.capacity >= min)
    }
}

impl<S, C, I> Engine<S, C, I>
where
    S: ReservationStore,
    C: Clock,
    I: IdGen,
{
    /// List bookable resources matching the filter, paginated
    pub async fn search_resources(
        &self,
        filter: &SearchFilter,
        page: usize,
        page_size: usize,
    ) -> Result<Page<Resource>, EngineError> {
        let request = self.page_request(page, page_size);
        let now = self.clock().now();
        let index = AvailabilityIndex::new(self.store().as_ref());

        let mut matches = Vec::new();
        for resource in self.store().resources().await? {
            if !filter.matches_location(&resource) || !filter.matches_capacity(&resource) {
                continue;
            }
            if let Some(window) = &filter.window {
                if !index.is_bookable(&resource, window, now).await? {
                    continue;
                }
            }
            matches.push(resource);
        }

        // Location ascending with unlocated resources last, then name, then
        // id so equal rows cannot reorder between pages
        matches.sort_by(|a, b| {
            let a_key = (a.location.is_none(), &a.location, &a.name, &a.id.0);
            let b_key = (b.location.is_none(), &b.location, &b.name, &b.id.0);
            a_key.cmp(&b_key)
        });

        Ok(Page::from_items(matches, &request))
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;

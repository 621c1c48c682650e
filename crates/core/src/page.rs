// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Stable pagination over deterministic orderings

use serde::Serialize;

/// Clamped pagination parameters
///
/// `page` is 1-based. Callers may pass anything; construction clamps to
/// `page >= 1` and `1 <= page_size <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    page_size: usize,
}

impl PageRequest {
    pub fn clamped(page: usize, page_size: usize, max_page_size: usize) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.clamp(1, max_page_size.max(1)),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn offset(&self) -> usize {
        (self.page - 1) * self.page_size
    }
}

/// One page of results with pagination metadata
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub has_more: bool,
}

impl<T> Page<T> {
    /// Slice an already-ordered result set into one page
    pub fn from_items(all: Vec<T>, request: &PageRequest) -> Self {
        let total = all.len();
        let offset = request.offset();
        let items: Vec<T> = all
            .into_iter()
            .skip(offset)
            .take(request.page_size())
            .collect();
        let has_more = offset + items.len() < total;
        Self {
            items,
            total,
            page: request.page(),
            page_size: request.page_size(),
            has_more,
        }
    }
}

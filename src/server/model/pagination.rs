//! Page requests and paginated results.
//!
//! Pages are numbered from 1. The limit is clamped to `1..=MAX_LIMIT`.

use crate::model::api::PaginationMeta;

pub const DEFAULT_LIMIT: u64 = 10;
pub const MAX_LIMIT: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

impl PageRequest {
    /// Normalizes raw query values: missing or zero page becomes 1, missing limit becomes
    /// `DEFAULT_LIMIT`, and the limit is clamped to `1..=MAX_LIMIT`.
    pub fn new(page: Option<u64>, limit: Option<u64>) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            limit: limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT),
        }
    }

    /// Zero-based page index as used by the SeaORM paginator.
    pub fn index(&self) -> u64 {
        self.page - 1
    }

    /// Whether the page starts at or after `total`, including offsets too large to
    /// represent. Such pages are empty and must not reach the paginator.
    pub fn is_past_end(&self, total: u64) -> bool {
        match self.index().checked_mul(self.limit) {
            Some(offset) => offset >= total,
            None => true,
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// One page of items plus the totals needed to navigate the rest.
#[derive(Debug, Clone, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    /// Total number of items across all pages.
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            page: request.page,
            limit: request.limit,
            total_pages: total.div_ceil(request.limit),
        }
    }

    pub fn meta(&self) -> PaginationMeta {
        PaginationMeta {
            total: self.total,
            page: self.page,
            limit: self.limit,
            total_pages: self.total_pages,
        }
    }

    /// Converts every item, keeping the pagination totals.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
            total_pages: self.total_pages,
        }
    }
}

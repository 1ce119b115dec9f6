//! Pagination utilities for list endpoints
//!
//! Lists are windowed with `limit`/`offset`; both are optional on the wire.

use serde::{Deserialize, Serialize};

pub const DEFAULT_LIMIT: u64 = 50;
pub const MAX_LIMIT: u64 = 1000;
/// SQL binds offsets as signed 64-bit integers.
pub const MAX_OFFSET: u64 = i64::MAX as u64;

/// Pagination parameters as received from the query string
#[derive(Clone, Copy, Debug, Default, Deserialize)]
pub struct Pagination {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl Pagination {
    /// Clamp to sane bounds, returning `(offset, limit)`
    pub fn normalize(self) -> (u64, u64) {
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        (self.offset.unwrap_or(0).min(MAX_OFFSET), limit)
    }
}

/// One window of a list, with the total row count.
#[derive(Clone, Debug, Serialize)]
pub struct Page<T> {
    pub count: u64,
    pub results: Vec<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_use_defaults() {
        assert_eq!(Pagination::default().normalize(), (0, DEFAULT_LIMIT));
    }

    #[test]
    fn normalize_clamps_limit() {
        let p = Pagination { limit: Some(0), offset: Some(10) };
        assert_eq!(p.normalize(), (10, 1));
        let p = Pagination { limit: Some(50_000), offset: None };
        assert_eq!(p.normalize(), (0, MAX_LIMIT));
    }

    #[test]
    fn normalize_bounds_offset() {
        let p = Pagination { limit: None, offset: Some(u64::MAX) };
        assert_eq!(p.normalize(), (MAX_OFFSET, DEFAULT_LIMIT));
    }
}

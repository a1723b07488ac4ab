//! # Pagination Math
//!
//! Fixed-size pagination for the catalog lookup endpoints.
//!
//! ## The Two-Query Contract
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │  page fetch:  LIMIT 25 OFFSET (page-1)×25, filter F              │
//! │  row count:   COUNT(*) over the whole table, same filter F       │
//! │                                                                  │
//! │  total_pages = ceil(count / 25)   ← this module                  │
//! │  page < 1    → treated as page 1  ← this module                  │
//! │                                                                  │
//! │  The filter MUST be identical in both queries; the SQL side      │
//! │  owns that, this module owns the arithmetic.                     │
//! └──────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Fixed page size for every catalog lookup. Not configurable.
pub const PAGE_SIZE: i64 = 25;

/// Clamps a 1-based page number: anything below 1 means page 1.
#[inline]
pub fn normalize_page(page: i64) -> i64 {
    if page < 1 {
        1
    } else {
        page
    }
}

/// Row offset for a (normalized) 1-based page number.
#[inline]
pub fn page_offset(page: i64) -> i64 {
    (normalize_page(page) - 1) * PAGE_SIZE
}

/// Number of pages needed for `total_count` rows: `ceil(count / PAGE_SIZE)`.
///
/// Zero rows means zero pages.
#[inline]
pub fn total_pages(total_count: i64) -> i64 {
    (total_count + PAGE_SIZE - 1) / PAGE_SIZE
}

// =============================================================================
// Lookup Envelope
// =============================================================================

/// One page of catalog rows plus pagination metadata.
///
/// ## Serialization
/// This is the lookup response body the frontend receives:
/// ```json
/// {
///   "num_rows": 25,
///   "data": [ ... ],
///   "total_pages": 2,
///   "is_empty": false
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LookupPage<T> {
    /// Count of rows returned on this page (not the total match count).
    pub num_rows: usize,
    /// The page of rows, ordered by the entity's code ascending.
    pub data: Vec<T>,
    /// Total pages for the filtered row set at [`PAGE_SIZE`] rows per page.
    pub total_pages: i64,
    /// Whether this page came back with no rows.
    pub is_empty: bool,
}

impl<T> LookupPage<T> {
    /// Builds the envelope from a fetched page and the independent row count.
    pub fn new(data: Vec<T>, total_count: i64) -> Self {
        LookupPage {
            num_rows: data.len(),
            is_empty: data.is_empty(),
            total_pages: total_pages(total_count),
            data,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

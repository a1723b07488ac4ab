//! # Customer Repository
//!
//! Paginated lookups against the customer reference table.
//!
//! ## Lookup Contract
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │  lookup(filter, page)                                            │
//! │       │                                                          │
//! │       ├── page fetch: WHERE name LIKE ?1                         │
//! │       │               ORDER BY customer_code                     │
//! │       │               LIMIT 25 OFFSET (page-1)×25                │
//! │       │                                                          │
//! │       └── row count:  WHERE name LIKE ?1   (same argument!)      │
//! │                                                                  │
//! │  ?1 is always bound: "ace%" for a filter, "%" for none.          │
//! │  No conditional SQL assembly, so the two queries cannot          │
//! │  apply different filter semantics.                               │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The deterministic `ORDER BY customer_code` keeps pages from overlapping
//! or skipping rows while the table is not concurrently mutated. The fetch
//! and the count are two independent statements: under a concurrent insert
//! the page count may be momentarily out of sync, which is accepted.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use crate::repository::prefix_pattern;
use orderdesk_core::{page, Customer, LookupPage, PAGE_SIZE};

/// Repository for customer reference data.
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: SqlitePool,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CustomerRepository { pool }
    }

    /// Returns one page of customers plus pagination metadata.
    ///
    /// ## Arguments
    /// * `name_prefix` - Optional case-insensitive name prefix; empty means
    ///   unfiltered
    /// * `page` - 1-based page number; values below 1 behave as page 1
    pub async fn lookup(
        &self,
        name_prefix: Option<&str>,
        page: i64,
    ) -> DbResult<LookupPage<Customer>> {
        let pattern = prefix_pattern(name_prefix);
        let offset = page::page_offset(page);

        debug!(pattern = %pattern, page = page, "Customer lookup");

        let rows: Vec<Customer> = sqlx::query_as(
            r#"
            SELECT customer_code, customer_name
            FROM customers
            WHERE customer_name LIKE ?1
            ORDER BY customer_code
            LIMIT ?2 OFFSET ?3
            "#,
        )
        .bind(&pattern)
        .bind(PAGE_SIZE)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let total_count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM customers WHERE customer_name LIKE ?1")
                .bind(&pattern)
                .fetch_one(&self.pool)
                .await?;

        Ok(LookupPage::new(rows, total_count))
    }

    /// Inserts a customer reference row (seed/import use).
    pub async fn insert(&self, customer: &Customer) -> DbResult<()> {
        sqlx::query("INSERT INTO customers (customer_code, customer_name) VALUES (?1, ?2)")
            .bind(&customer.customer_code)
            .bind(&customer.customer_name)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Counts customer rows (seed/diagnostics use).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

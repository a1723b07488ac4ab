//! # Product Repository
//!
//! Paginated lookups against the product reference table.
//!
//! Same two-query contract as the customer lookup: a fixed page fetch and an
//! independent count, both bound to the one always-present filter argument
//! (see [`crate::repository::customer`] for the full picture). Products
//! additionally carry the unit price the order-entry UI shows next to each
//! row.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use crate::repository::prefix_pattern;
use orderdesk_core::{page, LookupPage, Product, PAGE_SIZE};

/// Repository for product reference data.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Returns one page of products plus pagination metadata.
    ///
    /// ## Arguments
    /// * `name_prefix` - Optional case-insensitive name prefix; empty means
    ///   unfiltered
    /// * `page` - 1-based page number; values below 1 behave as page 1
    pub async fn lookup(
        &self,
        name_prefix: Option<&str>,
        page: i64,
    ) -> DbResult<LookupPage<Product>> {
        let pattern = prefix_pattern(name_prefix);
        let offset = page::page_offset(page);

        debug!(pattern = %pattern, page = page, "Product lookup");

        let rows: Vec<Product> = sqlx::query_as(
            r#"
            SELECT product_code, product_name, product_price
            FROM products
            WHERE product_name LIKE ?1
            ORDER BY product_code
            LIMIT ?2 OFFSET ?3
            "#,
        )
        .bind(&pattern)
        .bind(PAGE_SIZE)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let total_count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE product_name LIKE ?1")
                .bind(&pattern)
                .fetch_one(&self.pool)
                .await?;

        Ok(LookupPage::new(rows, total_count))
    }

    /// Inserts a product reference row (seed/import use).
    pub async fn insert(&self, product: &Product) -> DbResult<()> {
        sqlx::query(
            "INSERT INTO products (product_code, product_name, product_price) VALUES (?1, ?2, ?3)",
        )
        .bind(&product.product_code)
        .bind(&product.product_name)
        .bind(product.product_price)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Counts product rows (seed/diagnostics use).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn db_with_products(count: usize) -> Database {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        for i in 0..count {
            db.products()
                .insert(&Product {
                    product_code: format!("P{:03}", i),
                    product_name: format!("Widget {:03}", i),
                    product_price: 1.0 + i as f64,
                })
                .await
                .unwrap();
        }
        db
    }

    #[tokio::test]
    async fn test_pagination_metadata() {
        let db = db_with_products(26).await;

        let page1 = db.products().lookup(None, 1).await.unwrap();
        assert_eq!(page1.num_rows, 25);
        assert_eq!(page1.total_pages, 2);
        assert!(!page1.is_empty);

        let page2 = db.products().lookup(None, 2).await.unwrap();
        assert_eq!(page2.num_rows, 1);
        assert!(!page2.is_empty);
    }

    #[tokio::test]
    async fn test_prefix_filter_applies_to_fetch_and_count_alike() {
        let db = db_with_products(5).await;
        db.products()
            .insert(&Product {
                product_code: "Z999".to_string(),
                product_name: "Anvil".to_string(),
                product_price: 99.0,
            })
            .await
            .unwrap();

        let page = db.products().lookup(Some("widget"), 1).await.unwrap();
        assert_eq!(page.num_rows, 5);
        // total_pages derives from the filtered count, not the full table
        assert_eq!(page.total_pages, 1);

        let page = db.products().lookup(Some("an"), 1).await.unwrap();
        assert_eq!(page.num_rows, 1);
        assert_eq!(page.data[0].product_name, "Anvil");
        assert_eq!(page.data[0].product_price, 99.0);
    }

    #[tokio::test]
    async fn test_unmatched_filter_yields_empty_page() {
        let db = db_with_products(5).await;

        let page = db.products().lookup(Some("zzz"), 1).await.unwrap();
        assert!(page.is_empty);
        assert_eq!(page.num_rows, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[tokio::test]
    async fn test_empty_catalog() {
        let db = db_with_products(0).await;

        let page = db.products().lookup(None, 1).await.unwrap();
        assert!(page.is_empty);
        assert_eq!(page.total_pages, 0);
    }
}

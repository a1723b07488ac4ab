//! # Catalog Lookup Operations
//!
//! Paginated, prefix-filtered reads over the customer and product reference
//! tables, returned as the JSON envelope the order-entry UI pages through:
//!
//! ```json
//! {"num_rows": 25, "data": [...], "total_pages": 2, "is_empty": false}
//! ```
//!
//! Query parameters arrive already decoded from the transport: `page`
//! (absent means 1) and the optional name prefix. A failure in either the
//! page fetch or the count aborts the whole request as a server error;
//! there are no partial pages.

use tracing::debug;

use crate::error::ApiError;
use orderdesk_db::Database;

/// Returns one page of customers as a JSON response body.
///
/// ## Arguments
/// * `page` - 1-based page number; `None` (parameter absent) means page 1,
///   and values below 1 are treated as page 1
/// * `customer_name` - Optional case-insensitive name prefix
pub async fn lookup_customers(
    db: &Database,
    page: Option<i64>,
    customer_name: Option<&str>,
) -> Result<String, ApiError> {
    let page = page.unwrap_or(1);
    debug!(page = page, filter = ?customer_name, "Customer lookup request");

    let result = db.customers().lookup(customer_name, page).await?;

    serde_json::to_string(&result)
        .map_err(|e| ApiError::encoding(format!("Error encoding response: {}", e)))
}

/// Returns one page of products as a JSON response body.
///
/// ## Arguments
/// * `page` - 1-based page number; `None` (parameter absent) means page 1,
///   and values below 1 are treated as page 1
/// * `product_name` - Optional case-insensitive name prefix
pub async fn lookup_products(
    db: &Database,
    page: Option<i64>,
    product_name: Option<&str>,
) -> Result<String, ApiError> {
    let page = page.unwrap_or(1);
    debug!(page = page, filter = ?product_name, "Product lookup request");

    let result = db.products().lookup(product_name, page).await?;

    serde_json::to_string(&result)
        .map_err(|e| ApiError::encoding(format!("Error encoding response: {}", e)))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use orderdesk_core::{Customer, Product};
    use orderdesk_db::DbConfig;
    use serde_json::Value;

    async fn test_db() -> Database {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        for i in 0..30 {
            db.customers()
                .insert(&Customer {
                    customer_code: format!("C{:03}", i),
                    customer_name: format!("Customer {:03}", i),
                })
                .await
                .unwrap();
        }
        db.products()
            .insert(&Product {
                product_code: "P001".to_string(),
                product_name: "Widget".to_string(),
                product_price: 9.5,
            })
            .await
            .unwrap();
        db
    }

    #[tokio::test]
    async fn test_customer_lookup_envelope_shape() {
        let db = test_db().await;

        let response = lookup_customers(&db, Some(1), None).await.unwrap();
        let json: Value = serde_json::from_str(&response).unwrap();

        assert_eq!(json["num_rows"], 25);
        assert_eq!(json["total_pages"], 2);
        assert_eq!(json["is_empty"], false);
        assert_eq!(json["data"].as_array().unwrap().len(), 25);
        assert_eq!(json["data"][0]["customer_code"], "C000");
    }

    #[tokio::test]
    async fn test_absent_page_defaults_to_first() {
        let db = test_db().await;

        let defaulted = lookup_customers(&db, None, None).await.unwrap();
        let explicit = lookup_customers(&db, Some(1), None).await.unwrap();
        assert_eq!(defaulted, explicit);
    }

    #[tokio::test]
    async fn test_page_past_the_end_is_empty_but_counted() {
        let db = test_db().await;

        let response = lookup_customers(&db, Some(3), None).await.unwrap();
        let json: Value = serde_json::from_str(&response).unwrap();

        assert_eq!(json["num_rows"], 0);
        assert_eq!(json["is_empty"], true);
        assert_eq!(json["total_pages"], 2);
    }

    #[tokio::test]
    async fn test_product_lookup_with_filter() {
        let db = test_db().await;

        let response = lookup_products(&db, Some(1), Some("wid")).await.unwrap();
        let json: Value = serde_json::from_str(&response).unwrap();

        assert_eq!(json["num_rows"], 1);
        assert_eq!(json["data"][0]["product_name"], "Widget");
        assert_eq!(json["data"][0]["product_price"], 9.5);
        assert_eq!(json["total_pages"], 1);
    }

    #[tokio::test]
    async fn test_lookup_failure_aborts_whole_request() {
        let db = test_db().await;
        sqlx::query("DROP TABLE products")
            .execute(db.pool())
            .await
            .unwrap();

        let err = lookup_products(&db, Some(1), None).await.unwrap_err();
        assert_eq!(err.status(), 500);
    }
}

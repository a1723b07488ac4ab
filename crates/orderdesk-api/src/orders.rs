//! # Order Operations
//!
//! The order-creation workflow, end to end:
//!
//! ```text
//! JSON body ──decode──► Order ──price──► Order Writer ──encode──► JSON body
//!     │                                       │                      │
//!     └── client error (400),                 └── server error       └── server error (500),
//!         storage untouched                       (500), rolled          write already
//!                                                 back                   committed
//! ```

use tracing::{debug, info};

use crate::error::ApiError;
use orderdesk_core::{pricing, Order};
use orderdesk_db::Database;

/// Creates an order from a JSON request body and returns the persisted
/// order as a JSON response body.
///
/// ## Flow
/// 1. Decode the payload. An unparseable body or a malformed `order_date`
///    is a client error; storage is never touched.
/// 2. Compute the derived fields (detail subtotals, order total),
///    overwriting anything the caller may have supplied for them.
/// 3. Persist header + details atomically. Any storage failure is a server
///    error; the transaction is rolled back before it surfaces here.
/// 4. Encode the persisted order, `order_id` included. An encoding failure
///    at this point is a server error *after* the commit: the caller must
///    treat it as "order likely persisted, confirmation not delivered".
pub async fn create_order(db: &Database, body: &str) -> Result<String, ApiError> {
    let mut order: Order = serde_json::from_str(body)
        .map_err(|e| ApiError::validation(format!("Invalid request body: {}", e)))?;

    debug!(
        customer_code = %order.customer_code,
        details = order.details.len(),
        "Received order"
    );

    pricing::price_order(&mut order);

    let order = db.orders().create(order).await?;

    info!(
        order_id = ?order.order_id,
        total = order.total,
        "Order created"
    );

    serde_json::to_string(&order)
        .map_err(|e| ApiError::encoding(format!("Error encoding response: {}", e)))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use orderdesk_db::DbConfig;
    use serde_json::Value;

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_create_order_end_to_end() {
        let db = test_db().await;

        let body = r#"{
            "order_date": "2024-01-15",
            "description": "test",
            "customer_code": "C1",
            "details": [
                {"order_no": 1, "product_code": "P1", "product_name": "Widget",
                 "unit_price": 10.0, "qty": 3}
            ]
        }"#;

        let response = create_order(&db, body).await.unwrap();
        let json: Value = serde_json::from_str(&response).unwrap();

        assert_eq!(json["total"], 30.0);
        assert_eq!(json["details"][0]["subtotal"], 30.0);
        assert!(json["order_id"].as_i64().is_some());
        assert_eq!(json["order_date"], "2024-01-15");
    }

    #[tokio::test]
    async fn test_malformed_body_is_client_error_without_storage_access() {
        let db = test_db().await;

        let err = create_order(&db, "{not json").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(err.is_client_error());

        let headers: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(headers, 0);
    }

    #[tokio::test]
    async fn test_bad_date_is_client_error() {
        let db = test_db().await;

        let body = r#"{
            "order_date": "01/15/2024",
            "description": "test",
            "customer_code": "C1",
            "details": []
        }"#;

        let err = create_order(&db, body).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.status(), 400);
    }

    #[tokio::test]
    async fn test_storage_failure_is_server_error() {
        let db = test_db().await;
        sqlx::query("DROP TABLE orders")
            .execute(db.pool())
            .await
            .unwrap();

        let body = r#"{
            "order_date": "2024-01-15",
            "description": "test",
            "customer_code": "C1",
            "details": []
        }"#;

        let err = create_order(&db, body).await.unwrap_err();
        assert_eq!(err.status(), 500);
        assert!(!err.is_client_error());
    }

    #[tokio::test]
    async fn test_caller_supplied_totals_are_ignored() {
        let db = test_db().await;

        let body = r#"{
            "order_date": "2024-01-15",
            "description": "test",
            "customer_code": "C1",
            "total": 99999.0,
            "details": [
                {"order_no": 1, "product_code": "P1", "product_name": "Widget",
                 "unit_price": 2.0, "qty": 2, "subtotal": 7777.0}
            ]
        }"#;

        let response = create_order(&db, body).await.unwrap();
        let json: Value = serde_json::from_str(&response).unwrap();

        assert_eq!(json["total"], 4.0);
        assert_eq!(json["details"][0]["subtotal"], 4.0);
    }

    #[tokio::test]
    async fn test_zero_detail_order() {
        let db = test_db().await;

        let body = r#"{
            "order_date": "2024-01-15",
            "description": "empty",
            "customer_code": "C1",
            "details": []
        }"#;

        let response = create_order(&db, body).await.unwrap();
        let json: Value = serde_json::from_str(&response).unwrap();

        assert_eq!(json["total"], 0.0);
        assert_eq!(json["details"].as_array().unwrap().len(), 0);

        let detail_rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM order_details")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(detail_rows, 0);
    }
}

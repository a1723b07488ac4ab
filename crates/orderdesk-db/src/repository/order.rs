//! # Order Repository
//!
//! Atomic persistence for orders and their line items.
//!
//! ## Write Path
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                       Order Write Path                           │
//! │                                                                  │
//! │  create(priced order)                                            │
//! │       │                                                          │
//! │       ▼                                                          │
//! │  BEGIN ─► INSERT header ─► order_id = last_insert_rowid()        │
//! │       │                                                          │
//! │       ▼                                                          │
//! │  for each detail (submission order):                             │
//! │      stamp detail.order_id ─► INSERT detail                      │
//! │       │                                                          │
//! │       ├── every insert ok ──► COMMIT ──► echo persisted order    │
//! │       │                                                          │
//! │       └── any failure ─────► ROLLBACK ─► surface the error       │
//! │                              (rollback failure is logged)        │
//! │                                                                  │
//! │  Readers never observe a header without its details.             │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The order must already be priced (`orderdesk_core::pricing`) when it
//! reaches this repository; nothing here recomputes derived fields. No
//! retries: a transient storage failure is surfaced immediately.

use sqlx::{Sqlite, SqlitePool, Transaction};
use tracing::{debug, error};

use crate::error::{DbError, DbResult};
use orderdesk_core::{Order, OrderDetail};

/// Repository for order database operations.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: SqlitePool,
}

impl OrderRepository {
    /// Creates a new OrderRepository.
    pub fn new(pool: SqlitePool) -> Self {
        OrderRepository { pool }
    }

    /// Persists a priced order as an atomic unit.
    ///
    /// Inserts the header row, stamps each detail with the generated
    /// `order_id` and inserts the details in submission order. Commits only
    /// if every insert succeeded; any failure rolls the whole transaction
    /// back so no partial order is ever visible.
    ///
    /// ## Returns
    /// The order with `order_id` populated on the header and every detail,
    /// suitable for direct echo back to the caller.
    pub async fn create(&self, order: Order) -> DbResult<Order> {
        debug!(
            customer_code = %order.customer_code,
            details = order.details.len(),
            "Creating order"
        );

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        match insert_order_tx(&mut tx, order).await {
            Ok(order) => {
                tx.commit()
                    .await
                    .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

                debug!(order_id = ?order.order_id, total = order.total, "Order committed");
                Ok(order)
            }
            Err(err) => {
                // A rollback failure cannot be recovered from here; log it
                // and surface the original insert error.
                if let Err(rollback_err) = tx.rollback().await {
                    error!(error = %rollback_err, "Rollback failed after aborted order write");
                }
                Err(err)
            }
        }
    }

    /// Gets an order header with its details by ID.
    ///
    /// Details come back in the order they were submitted.
    pub async fn get_by_id(&self, order_id: i64) -> DbResult<Option<Order>> {
        let header: Option<Order> = sqlx::query_as(
            r#"
            SELECT order_id, order_date, description, customer_code, total
            FROM orders
            WHERE order_id = ?1
            "#,
        )
        .bind(order_id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(mut order) = header else {
            return Ok(None);
        };

        order.details = self.get_details(order_id).await?;

        Ok(Some(order))
    }

    /// Gets all details for an order, in submission order.
    pub async fn get_details(&self, order_id: i64) -> DbResult<Vec<OrderDetail>> {
        let details: Vec<OrderDetail> = sqlx::query_as(
            r#"
            SELECT order_id, order_no, product_code, product_name, unit_price, qty, subtotal
            FROM order_details
            WHERE order_id = ?1
            ORDER BY rowid
            "#,
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(details)
    }
}

/// Runs the header + detail inserts inside the open transaction.
///
/// Split out of [`OrderRepository::create`] so the commit/rollback decision
/// sits in exactly one place.
async fn insert_order_tx(tx: &mut Transaction<'_, Sqlite>, mut order: Order) -> DbResult<Order> {
    let result = sqlx::query(
        r#"
        INSERT INTO orders (order_date, description, customer_code, total)
        VALUES (?1, ?2, ?3, ?4)
        "#,
    )
    .bind(order.order_date)
    .bind(&order.description)
    .bind(&order.customer_code)
    .bind(order.total)
    .execute(&mut **tx)
    .await?;

    let order_id = result.last_insert_rowid();
    order.order_id = Some(order_id);

    for detail in order.details.iter_mut() {
        detail.order_id = Some(order_id);

        sqlx::query(
            r#"
            INSERT INTO order_details
                (order_id, order_no, product_code, product_name, unit_price, qty, subtotal)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(order_id)
        .bind(detail.order_no)
        .bind(&detail.product_code)
        .bind(&detail.product_name)
        .bind(detail.unit_price)
        .bind(detail.qty)
        .bind(detail.subtotal)
        .execute(&mut **tx)
        .await?;
    }

    Ok(order)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use chrono::NaiveDate;
    use orderdesk_core::pricing;

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn sample_order(details: Vec<OrderDetail>) -> Order {
        let mut order = Order {
            order_id: None,
            order_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            description: "test".to_string(),
            customer_code: "C1".to_string(),
            total: 0.0,
            details,
        };
        pricing::price_order(&mut order);
        order
    }

    fn detail(order_no: i64, unit_price: f64, qty: f64) -> OrderDetail {
        OrderDetail {
            order_id: None,
            order_no,
            product_code: format!("P{}", order_no),
            product_name: format!("Product {}", order_no),
            unit_price,
            qty,
            subtotal: 0.0,
        }
    }

    #[tokio::test]
    async fn test_create_populates_ids_and_echoes_totals() {
        let db = test_db().await;

        let created = db
            .orders()
            .create(sample_order(vec![detail(1, 10.0, 3.0)]))
            .await
            .unwrap();

        let order_id = created.order_id.expect("order_id assigned by storage");
        assert_eq!(created.total, 30.0);
        assert_eq!(created.details[0].subtotal, 30.0);
        assert_eq!(created.details[0].order_id, Some(order_id));
    }

    #[tokio::test]
    async fn test_create_persists_header_and_details() {
        let db = test_db().await;

        let created = db
            .orders()
            .create(sample_order(vec![detail(1, 2.5, 4.0), detail(2, 1.0, 1.0)]))
            .await
            .unwrap();

        let fetched = db
            .orders()
            .get_by_id(created.order_id.unwrap())
            .await
            .unwrap()
            .expect("order present after commit");

        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_create_with_zero_details() {
        let db = test_db().await;

        let created = db.orders().create(sample_order(vec![])).await.unwrap();

        assert_eq!(created.total, 0.0);
        let details = db
            .orders()
            .get_details(created.order_id.unwrap())
            .await
            .unwrap();
        assert!(details.is_empty());
    }

    #[tokio::test]
    async fn test_details_come_back_in_submission_order() {
        let db = test_db().await;

        // order_no values deliberately out of sequence
        let created = db
            .orders()
            .create(sample_order(vec![
                detail(3, 1.0, 1.0),
                detail(1, 1.0, 1.0),
                detail(2, 1.0, 1.0),
            ]))
            .await
            .unwrap();

        let details = db
            .orders()
            .get_details(created.order_id.unwrap())
            .await
            .unwrap();
        let order_nos: Vec<i64> = details.iter().map(|d| d.order_no).collect();
        assert_eq!(order_nos, vec![3, 1, 2]);
    }

    #[tokio::test]
    async fn test_failed_detail_insert_rolls_back_header() {
        let db = test_db().await;

        // Force the detail insert to fail after the header insert succeeded.
        sqlx::query("DROP TABLE order_details")
            .execute(db.pool())
            .await
            .unwrap();

        let result = db
            .orders()
            .create(sample_order(vec![detail(1, 10.0, 3.0)]))
            .await;
        assert!(result.is_err());

        // The header insert must have been rolled back with it.
        let headers: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(headers, 0);
    }

    #[tokio::test]
    async fn test_get_by_id_missing_order() {
        let db = test_db().await;

        let fetched = db.orders().get_by_id(999).await.unwrap();
        assert!(fetched.is_none());
    }
}

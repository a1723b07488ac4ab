//! # Domain Types
//!
//! Core domain types used throughout Orderdesk.
//!
//! ## Type Hierarchy
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                             │
//! │                                                                  │
//! │  ┌──────────────────┐        ┌──────────────────┐                │
//! │  │      Order       │ 1    N │   OrderDetail    │                │
//! │  │  ──────────────  │───────►│  ──────────────  │                │
//! │  │  order_id        │        │  order_id (FK)   │                │
//! │  │  order_date      │        │  order_no        │                │
//! │  │  customer_code   │        │  product_code    │                │
//! │  │  total (derived) │        │  subtotal(der.)  │                │
//! │  └──────────────────┘        └──────────────────┘                │
//! │                                                                  │
//! │  ┌──────────────────┐        ┌──────────────────┐                │
//! │  │     Customer     │        │     Product      │                │
//! │  │  ──────────────  │        │  ──────────────  │                │
//! │  │  customer_code   │        │  product_code    │                │
//! │  │  customer_name   │        │  product_name    │                │
//! │  │                  │        │  product_price   │                │
//! │  └──────────────────┘        └──────────────────┘                │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Compatibility
//! Field names are the JSON wire contract consumed by the order-entry
//! frontend. `order_id`, `subtotal` and `total` are generated server-side;
//! they are optional/ignored on input and always populated on output.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Order
// =============================================================================

/// An order header with its owned line items.
///
/// ## Derived Fields
/// `total` is never trusted from the caller: [`crate::pricing::price_order`]
/// recomputes it from the details before the order is persisted. `order_id`
/// is assigned by storage at creation and absent before it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Order {
    /// Storage-generated identifier. Absent until the order is persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<i64>,

    /// Calendar date of the order, `YYYY-MM-DD` on the wire.
    /// No time-of-day, no time zone.
    #[ts(as = "String")]
    pub order_date: NaiveDate,

    /// Free-text description.
    pub description: String,

    /// Reference to a customer. Not validated against the customer table
    /// at insert time.
    pub customer_code: String,

    /// Sum of all detail subtotals. Derived, never caller-supplied.
    #[serde(default)]
    pub total: f64,

    /// Line items, in submission order. Owned exclusively by this order.
    #[serde(default)]
    #[cfg_attr(feature = "sqlx", sqlx(skip))]
    pub details: Vec<OrderDetail>,
}

// =============================================================================
// Order Detail
// =============================================================================

/// A line item owned by exactly one order.
///
/// `product_name` is a snapshot taken at write time rather than joined at
/// read time, so the line survives later catalog edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct OrderDetail {
    /// Back-reference to the owning order. Stamped by the order writer at
    /// persist time, not by the caller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<i64>,

    /// Caller-supplied sequence number distinguishing lines within an order.
    pub order_no: i64,

    /// Denormalized product reference.
    pub product_code: String,
    pub product_name: String,

    /// Caller-supplied inputs. Zero and negative values are accepted.
    pub unit_price: f64,
    pub qty: f64,

    /// `unit_price * qty`. Derived, never caller-supplied.
    #[serde(default)]
    pub subtotal: f64,
}

// =============================================================================
// Reference Entities
// =============================================================================

/// A customer reference row. Read-only from this backend's perspective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Customer {
    pub customer_code: String,
    pub customer_name: String,
}

/// A product reference row. Read-only from this backend's perspective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Product {
    pub product_code: String,
    pub product_name: String,
    pub product_price: f64,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_deserializes_without_generated_fields() {
        let body = r#"{
            "order_date": "2024-01-15",
            "description": "test",
            "customer_code": "C1",
            "details": [
                {"order_no": 1, "product_code": "P1", "product_name": "Widget",
                 "unit_price": 10.0, "qty": 3}
            ]
        }"#;

        let order: Order = serde_json::from_str(body).unwrap();
        assert_eq!(order.order_id, None);
        assert_eq!(order.order_date.to_string(), "2024-01-15");
        assert_eq!(order.total, 0.0);
        assert_eq!(order.details.len(), 1);
        assert_eq!(order.details[0].order_id, None);
        assert_eq!(order.details[0].subtotal, 0.0);
    }

    #[test]
    fn test_order_date_rejects_bad_format() {
        let body = r#"{
            "order_date": "15/01/2024",
            "description": "test",
            "customer_code": "C1",
            "details": []
        }"#;

        assert!(serde_json::from_str::<Order>(body).is_err());
    }

    #[test]
    fn test_order_id_omitted_until_assigned() {
        let order = Order {
            order_id: None,
            order_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            description: "test".to_string(),
            customer_code: "C1".to_string(),
            total: 0.0,
            details: vec![],
        };

        let json = serde_json::to_string(&order).unwrap();
        assert!(!json.contains("order_id"));

        let persisted = Order {
            order_id: Some(42),
            ..order
        };
        let json = serde_json::to_string(&persisted).unwrap();
        assert!(json.contains("\"order_id\":42"));
    }

    #[test]
    fn test_order_date_serializes_as_plain_date() {
        let order = Order {
            order_id: None,
            order_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            description: String::new(),
            customer_code: "C1".to_string(),
            total: 0.0,
            details: vec![],
        };

        let json = serde_json::to_string(&order).unwrap();
        assert!(json.contains("\"order_date\":\"2024-01-15\""));
    }
}

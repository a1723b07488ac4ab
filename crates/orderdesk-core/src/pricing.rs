//! # Pricing Engine
//!
//! Derives line subtotals and the order total from caller-supplied
//! quantities and unit prices.
//!
//! ## Where Pricing Happens
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                                                                  │
//! │  Caller payload          price_order()           Order Writer    │
//! │  ─────────────          ──────────────          ─────────────    │
//! │  unit_price, qty  ───►  subtotal = p × q  ───►  persisted with   │
//! │  (subtotal/total        total = Σ subtotal      derived fields   │
//! │   ignored if sent)                              frozen forever   │
//! │                                                                  │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pricing runs exactly once, before the write. There is no update path,
//! so the derived fields are never recomputed afterwards.

use crate::types::Order;

/// Computes every detail's `subtotal` and the order's `total` in place.
///
/// Whatever the caller put in `subtotal`/`total` is overwritten; derived
/// fields are never trusted from the outside.
///
/// ## Properties
/// - Pure: no I/O, no side effects beyond the passed order.
/// - Idempotent: repricing the same inputs yields the same output.
/// - Stable: details are summed in their given sequence order, so the
///   floating-point total is reproducible.
/// - Permissive: zero and negative `unit_price`/`qty` pass through
///   unrejected.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use orderdesk_core::{pricing, Order, OrderDetail};
///
/// let mut order = Order {
///     order_id: None,
///     order_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
///     description: "test".to_string(),
///     customer_code: "C1".to_string(),
///     total: 0.0,
///     details: vec![OrderDetail {
///         order_id: None,
///         order_no: 1,
///         product_code: "P1".to_string(),
///         product_name: "Widget".to_string(),
///         unit_price: 10.0,
///         qty: 3.0,
///         subtotal: 0.0,
///     }],
/// };
///
/// pricing::price_order(&mut order);
/// assert_eq!(order.details[0].subtotal, 30.0);
/// assert_eq!(order.total, 30.0);
/// ```
pub fn price_order(order: &mut Order) {
    let mut total = 0.0;
    for detail in order.details.iter_mut() {
        detail.subtotal = detail.unit_price * detail.qty;
        total += detail.subtotal;
    }
    order.total = total;
}

// =============================================================================
// Unit Tests
// =============================================================================

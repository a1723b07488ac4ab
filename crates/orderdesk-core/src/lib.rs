//! # orderdesk-core: Pure Domain Logic for Orderdesk
//!
//! This crate is the **heart** of the order-management backend. It contains
//! the domain shapes and all derived-value math as pure functions with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                     Orderdesk Architecture                       │
//! │                                                                  │
//! │  ┌────────────────────────────────────────────────────────────┐  │
//! │  │                   orderdesk-api                            │  │
//! │  │    create_order, lookup_customers, lookup_products         │  │
//! │  └────────────────────────────┬───────────────────────────────┘  │
//! │                               │                                  │
//! │  ┌────────────────────────────▼───────────────────────────────┐  │
//! │  │            ★ orderdesk-core (THIS CRATE) ★                 │  │
//! │  │                                                            │  │
//! │  │   ┌───────────┐   ┌───────────┐   ┌───────────┐            │  │
//! │  │   │   types   │   │  pricing  │   │   page    │            │  │
//! │  │   │   Order   │   │ subtotals │   │ PAGE_SIZE │            │  │
//! │  │   │  Customer │   │   total   │   │ envelope  │            │  │
//! │  │   └───────────┘   └───────────┘   └───────────┘            │  │
//! │  │                                                            │  │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS       │  │
//! │  └────────────────────────────┬───────────────────────────────┘  │
//! │                               │                                  │
//! │  ┌────────────────────────────▼───────────────────────────────┐  │
//! │  │                 orderdesk-db (Database Layer)               │  │
//! │  │          SQLite queries, migrations, repositories           │  │
//! │  └────────────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Order, OrderDetail, Customer, Product)
//! - [`pricing`] - Derived line subtotals and order totals
//! - [`page`] - Fixed-size pagination math and the lookup envelope
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Derived Fields Are Ours**: `subtotal` and `total` are always computed
//!    here and never trusted from a caller

// =============================================================================
// Module Declarations
// =============================================================================

pub mod page;
pub mod pricing;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use orderdesk_core::Order` instead of
// `use orderdesk_core::types::Order`

pub use page::{LookupPage, PAGE_SIZE};
pub use types::{Customer, Order, OrderDetail, Product};

//! # orderdesk-db: Database Layer for Orderdesk
//!
//! This crate provides database access for the order-management backend.
//! It uses SQLite for storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                      Orderdesk Data Flow                         │
//! │                                                                  │
//! │  orderdesk-api operation (create_order, lookup_customers)        │
//! │       │                                                          │
//! │       ▼                                                          │
//! │  ┌────────────────────────────────────────────────────────────┐  │
//! │  │                 orderdesk-db (THIS CRATE)                  │  │
//! │  │                                                            │  │
//! │  │  ┌─────────────┐   ┌───────────────┐   ┌──────────────┐    │  │
//! │  │  │  Database   │   │ Repositories  │   │  Migrations  │    │  │
//! │  │  │  (pool.rs)  │   │ (order.rs,    │   │  (embedded)  │    │  │
//! │  │  │             │◄──│  customer.rs, │   │              │    │  │
//! │  │  │ SqlitePool  │   │  product.rs)  │   │ 001_init.sql │    │  │
//! │  │  └─────────────┘   └───────────────┘   └──────────────┘    │  │
//! │  │                                                            │  │
//! │  └────────────────────────────────────────────────────────────┘  │
//! │       │                                                          │
//! │       ▼                                                          │
//! │  SQLite database file (WAL mode)                                 │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (order, customer, product)

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::DbError;
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::customer::CustomerRepository;
pub use repository::order::OrderRepository;
pub use repository::product::ProductRepository;

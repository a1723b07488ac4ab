//! # orderdesk-api: JSON Operation Layer for Orderdesk
//!
//! The edge of the order-management backend. Each operation takes the
//! injected [`Database`](orderdesk_db::Database) handle plus decoded request
//! inputs, and produces a JSON response body or an [`ApiError`] whose
//! client/server class the transport can report.
//!
//! ## Operations
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                        orderdesk-api                             │
//! │                                                                  │
//! │  create_order(db, body)          POST-shaped: decode ► price ►   │
//! │                                  atomic write ► echo             │
//! │                                                                  │
//! │  lookup_customers(db, page, q)   GET-shaped: page + count ►      │
//! │  lookup_products(db, page, q)    envelope                        │
//! │                                                                  │
//! │  Errors: ValidationError (400) vs Database/Encoding (500)        │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Routing, CORS, and process startup live in the embedding transport, not
//! here. Each request is handled independently; the only shared state is
//! the connection pool inside `Database`.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod lookup;
pub mod orders;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{ApiError, ErrorCode};
pub use lookup::{lookup_customers, lookup_products};
pub use orders::create_order;

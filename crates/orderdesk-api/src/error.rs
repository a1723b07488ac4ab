//! # API Error Type
//!
//! Unified error type for the JSON operations.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                  Error Flow in Orderdesk                         │
//! │                                                                  │
//! │  Operation (create_order, lookup_*)                              │
//! │  Result<String, ApiError>                                        │
//! │         │                                                        │
//! │         ├── serde_json decode failed ──► ValidationError (400)   │
//! │         │    (storage never touched)                             │
//! │         │                                                        │
//! │         ├── DbError ──────────────────► DatabaseError (500)      │
//! │         │    (transaction already rolled back)                   │
//! │         │                                                        │
//! │         └── serde_json encode failed ──► EncodingError (500)     │
//! │              (write may have committed: "order likely            │
//! │               persisted, confirmation not delivered")            │
//! │                                                                  │
//! │  The transport maps status() onto its own status mechanism;      │
//! │  client errors and server errors stay distinguishable.           │
//! └──────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use orderdesk_db::DbError;

/// API error returned from operations.
///
/// ## Serialization
/// This is what the caller receives when an operation fails:
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "Invalid request body: missing field `order_date`"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input validation failed (client error)
    ValidationError,

    /// Resource not found (client error)
    NotFound,

    /// Database operation failed (server error)
    DatabaseError,

    /// Response encoding failed (server error)
    EncodingError,

    /// Internal error (server error)
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation (client) error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates an encoding (server) error.
    pub fn encoding(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::EncodingError, message)
    }

    /// Creates an internal (server) error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    /// HTTP-style status for the transport to report.
    pub fn status(&self) -> u16 {
        match self.code {
            ErrorCode::ValidationError => 400,
            ErrorCode::NotFound => 404,
            ErrorCode::DatabaseError | ErrorCode::EncodingError | ErrorCode::Internal => 500,
        }
    }

    /// Whether this error is the caller's fault (4xx class).
    pub fn is_client_error(&self) -> bool {
        self.status() < 500
    }
}

/// Converts database errors to API errors.
///
/// Everything that reaches storage and fails is a server error; the actual
/// failure is logged, the caller gets a generic message.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => ApiError::not_found(&entity, &id),
            DbError::ConnectionFailed(e) => {
                tracing::error!("Database connection failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database connection failed")
            }
            DbError::MigrationFailed(e) => {
                tracing::error!("Database migration failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database migration failed")
            }
            DbError::QueryFailed(e) => {
                tracing::error!("Database query failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
            DbError::TransactionFailed(e) => {
                tracing::error!("Transaction failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database transaction failed")
            }
            DbError::UniqueViolation { field } => {
                ApiError::new(ErrorCode::DatabaseError, format!("Duplicate {}", field))
            }
            DbError::ForeignKeyViolation { message } => {
                tracing::error!("Foreign key violation: {}", message);
                ApiError::new(ErrorCode::DatabaseError, "Invalid reference")
            }
            DbError::PoolExhausted => {
                ApiError::new(ErrorCode::DatabaseError, "Database pool exhausted")
            }
            DbError::Internal(e) => {
                tracing::error!("Internal database error: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Unit Tests
// =============================================================================

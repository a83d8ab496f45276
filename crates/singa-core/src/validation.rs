//! # Validation Module
//!
//! Input validation for the few places where input is rejected rather than
//! defaulted.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Where Input Is Checked                             │
//! │                                                                         │
//! │  Totals / documents / filters                                          │
//! │  └── never rejected: missing numbers → 0, missing dates → ""           │
//! │                                                                         │
//! │  THIS MODULE                                                           │
//! │  ├── schedule creation: order chosen + delivery date                   │
//! │  ├── order submission: SO number + customer name                       │
//! │  ├── search query length                                               │
//! │  └── record ids used in API paths                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use singa_core::validation::{validate_delivery_date, validate_search_query};
//!
//! assert!(validate_delivery_date("2024-03-05").is_ok());
//! assert!(validate_delivery_date("").is_err());
//! assert_eq!(validate_search_query("  paku ").unwrap(), "paku");
//! ```

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::types::Order;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted search query.
pub const MAX_SEARCH_QUERY_LEN: usize = 100;

// =============================================================================
// Delivery Schedules
// =============================================================================

/// Validates a delivery date typed as `YYYY-MM-DD`.
pub fn validate_delivery_date(date: &str) -> ValidationResult<NaiveDate> {
    let date = date.trim();

    if date.is_empty() {
        return Err(ValidationError::Required {
            field: "delivery date".to_string(),
        });
    }

    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| ValidationError::InvalidFormat {
        field: "delivery date".to_string(),
        reason: "expected YYYY-MM-DD".to_string(),
    })
}

/// Validates a new delivery schedule: an order must be chosen and a
/// delivery date entered.
///
/// Returns the chosen order's id and the parsed date.
pub fn validate_schedule_request(
    order: Option<&Order>,
    delivery_date: &str,
) -> ValidationResult<(String, NaiveDate)> {
    let order = order.ok_or_else(|| ValidationError::Required {
        field: "sales order".to_string(),
    })?;

    let order_id = order
        .id
        .as_deref()
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| ValidationError::Required {
            field: "sales order id".to_string(),
        })?;

    let date = validate_delivery_date(delivery_date)?;
    Ok((order_id.to_string(), date))
}

// =============================================================================
// Orders
// =============================================================================

/// Validates an order before it is sent to the API.
pub fn validate_order_submission(order: &Order) -> ValidationResult<()> {
    if order.so_number.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "so number".to_string(),
        });
    }

    if order.customer_name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "customer name".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Lists & Identifiers
// =============================================================================

/// Validates a search query.
///
/// ## Rules
/// - Can be empty (matches everything)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > MAX_SEARCH_QUERY_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_SEARCH_QUERY_LEN,
        });
    }

    Ok(query.to_string())
}

/// Validates a record id before it is placed in an API path.
pub fn validate_record_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if id.contains('/') || id.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidFormat {
            field: "id".to_string(),
            reason: "must not contain '/' or whitespace".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

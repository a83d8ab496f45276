//! # List Filters
//!
//! Search and date filtering behind the order and schedule lists.
//!
//! - Search text matches case-insensitively as a substring, spaces
//!   included. An empty query matches everything. Callers trim user input.
//! - A date filter keeps records whose date falls on that calendar day
//!   (timestamps are read in WIB, see [`crate::format::parse_business_date`]).
//!   Records without a readable date never match a date filter.
//! - Results keep the input order.

use chrono::NaiveDate;

use crate::format::parse_business_date;
use crate::types::{DeliverySchedule, Order};

/// Filters orders by customer name, SO number or PO number, and by PO date.
///
/// ## Example
/// ```rust
/// use singa_core::{filter_orders, Order};
///
/// let orders = vec![
///     Order { customer_name: "Toko Makmur".into(), so_number: "SO-001".into(), ..Order::default() },
///     Order { customer_name: "CV Sentosa".into(), so_number: "SO-002".into(), ..Order::default() },
/// ];
///
/// let hits = filter_orders(&orders, "makmur", None);
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].so_number, "SO-001");
/// ```
pub fn filter_orders<'a>(
    orders: &'a [Order],
    search_text: &str,
    date_filter: Option<NaiveDate>,
) -> Vec<&'a Order> {
    let needle = search_text.to_lowercase();

    orders
        .iter()
        .filter(|order| {
            needle.is_empty()
                || contains_folded(&order.customer_name, &needle)
                || contains_folded(&order.so_number, &needle)
                || contains_folded(&order.po_number, &needle)
        })
        .filter(|order| same_day(order.po_date.as_deref(), date_filter))
        .collect()
}

/// Filters delivery schedules by customer name and delivery date.
pub fn filter_schedules<'a>(
    schedules: &'a [DeliverySchedule],
    search_text: &str,
    date_filter: Option<NaiveDate>,
) -> Vec<&'a DeliverySchedule> {
    let needle = search_text.to_lowercase();

    schedules
        .iter()
        .filter(|schedule| needle.is_empty() || contains_folded(&schedule.customer_name, &needle))
        .filter(|schedule| same_day(schedule.delivery_date.as_deref(), date_filter))
        .collect()
}

fn contains_folded(haystack: &str, lowercase_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowercase_needle)
}

fn same_day(date: Option<&str>, filter: Option<NaiveDate>) -> bool {
    match filter {
        None => true,
        Some(wanted) => date.and_then(parse_business_date) == Some(wanted),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

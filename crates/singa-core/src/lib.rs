//! # singa-core: Pure Business Logic for Singa Sales
//!
//! This crate is the **heart** of Singa Sales. It holds the order-total rules,
//! the currency and date formatters and the document assembler as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Singa Sales Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Screens / CLI (Display Components)                 │   │
//! │  │   Order list ──► Order form ──► Schedule list ──► Export        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ singa-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐          │   │
//! │  │   │  totals  │ │  format  │ │ document │ │  filter  │          │   │
//! │  │   │ Sub/Tax/ │ │ Rp / tgl │ │ header / │ │ search / │          │   │
//! │  │   │  Grand   │ │          │ │ summary  │ │  date    │          │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────┘          │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               singa-api (Order Data Provider)                   │   │
//! │  │          HTTP calls, wire records, normalization                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Order, LineItem, DeliverySchedule, ...)
//! - [`money`] - The `Rupiah` amount type
//! - [`totals`] - Sub total, discount, tax and grand total
//! - [`format`] - Currency and Indonesian date formatting
//! - [`document`] - Printable document payload assembly
//! - [`render`] - Plain-text document renderer
//! - [`filter`] - Search/date filtering for list views
//! - [`catalog`] - Standard price list used by the order form
//! - [`form`] - Sales-order form state
//! - [`validation`] - Input validation rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use singa_core::{compute_totals, DiscountType, LineItem, OrderAdjustments, Rupiah};
//!
//! let items = vec![
//!     LineItem::new(2, Rupiah::new(500_000.0)),
//!     LineItem::new(1, Rupiah::new(1_000_000.0)),
//! ];
//! let adjustments = OrderAdjustments {
//!     discount_value: 10.0,
//!     discount_type: DiscountType::Percentage,
//!     down_payment: Rupiah::new(100_000.0),
//!     tax_rate_percent: 11.0,
//! };
//!
//! let totals = compute_totals(&items, &adjustments);
//! assert_eq!(totals.grand_total.value(), 1_920_000.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod document;
pub mod error;
pub mod filter;
pub mod form;
pub mod format;
pub mod money;
pub mod render;
pub mod totals;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use document::{
    build_delivery_document, build_order_document, DocumentKind, DocumentSettings, Language,
    OrderDocument,
};
pub use error::{CoreError, CoreResult, ValidationError};
pub use filter::{filter_orders, filter_schedules};
pub use format::{format_currency, format_date, CurrencyStyle};
pub use money::Rupiah;
pub use totals::{compute_totals, OrderTotals};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Company name printed on documents when none is configured.
pub const DEFAULT_COMPANY_NAME: &str = "PT Singa Perkasa";

/// Offset of the business time zone (WIB, UTC+07:00) in seconds.
///
/// Timestamps from the API are converted to this zone before their
/// calendar day is displayed or compared.
pub const BUSINESS_UTC_OFFSET_SECS: i32 = 7 * 3600;

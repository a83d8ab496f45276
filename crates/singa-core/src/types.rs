//! # Domain Types
//!
//! Core domain types used throughout Singa Sales.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Order       │   │    LineItem     │   │ DeliverySchedule│       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  so_number      │──►│  quantity       │   │  customer_name  │       │
//! │  │  po_number      │   │  unit_price     │   │  linked_order_id│       │
//! │  │  customer_*     │   │  packing_type   │   │  delivery_date  │       │
//! │  │  adjustments ─┐ │   │  item_name      │   │  order (snapshot)│      │
//! │  └───────────────┼─┘   └─────────────────┘   └─────────────────┘       │
//! │                  ▼                                                      │
//! │  ┌─────────────────────┐   ┌─────────────────┐                          │
//! │  │  OrderAdjustments   │   │  DiscountType   │                          │
//! │  │  discount_value     │──►│  Amount         │                          │
//! │  │  down_payment       │   │  Percentage     │                          │
//! │  │  tax_rate_percent   │   └─────────────────┘                          │
//! │  └─────────────────────┘                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Partial Records
//! Every field carries `#[serde(default)]`: a record with missing numbers
//! deserializes with zeros instead of failing. Totals are never stored on
//! these types; see [`crate::totals`].

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use ts_rs::TS;

use crate::money::Rupiah;
use crate::totals::{compute_totals, OrderTotals};

// =============================================================================
// Packing Type
// =============================================================================

/// How a line item is packed ("Jenis Barang" on documents).
///
/// Labels other than `Box` and `Piece` are preserved verbatim, including
/// the empty label of records that never had one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum PackingType {
    /// Sold by the box.
    #[default]
    Box,
    /// Sold per piece.
    Piece,
    /// Any other label.
    Other(String),
}

impl PackingType {
    /// Returns the label shown on screens and documents.
    pub fn label(&self) -> &str {
        match self {
            PackingType::Box => "Box",
            PackingType::Piece => "Piece",
            PackingType::Other(label) => label,
        }
    }
}

impl From<&str> for PackingType {
    fn from(label: &str) -> Self {
        match label {
            "Box" => PackingType::Box,
            "Piece" => PackingType::Piece,
            other => PackingType::Other(other.to_string()),
        }
    }
}

impl fmt::Display for PackingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for PackingType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for PackingType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = Option::<String>::deserialize(deserializer)?;
        Ok(PackingType::from(label.as_deref().unwrap_or("")))
    }
}

// =============================================================================
// Discount Type
// =============================================================================

/// How `OrderAdjustments::discount_value` is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    /// Flat amount in rupiah.
    #[default]
    Amount,
    /// Percentage of the sub total.
    Percentage,
}

impl DiscountType {
    /// Parses a stored label. Anything other than `"percentage"` is a flat
    /// amount, including unknown labels.
    ///
    /// ## Example
    /// ```rust
    /// use singa_core::DiscountType;
    ///
    /// assert_eq!(DiscountType::from_label("percentage"), DiscountType::Percentage);
    /// assert_eq!(DiscountType::from_label("bogus"), DiscountType::Amount);
    /// ```
    pub fn from_label(label: &str) -> Self {
        match label {
            "percentage" => DiscountType::Percentage,
            _ => DiscountType::Amount,
        }
    }

    /// Unit indicator printed next to the discount on documents.
    pub fn indicator(&self) -> &'static str {
        match self {
            DiscountType::Amount => "IDR",
            DiscountType::Percentage => "%",
        }
    }
}

impl<'de> Deserialize<'de> for DiscountType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = Option::<String>::deserialize(deserializer)?;
        Ok(label
            .as_deref()
            .map(DiscountType::from_label)
            .unwrap_or_default())
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// A line on a sales order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct LineItem {
    /// Number of units ordered.
    pub quantity: u32,

    /// Price of one unit.
    pub unit_price: Rupiah,

    /// Packing label ("Box", "Piece", ...).
    #[ts(as = "String")]
    pub packing_type: PackingType,

    /// Item label ("Paku", "Baja Ringan", ...).
    pub item_name: String,
}

impl LineItem {
    /// Creates an unnamed boxed line.
    pub fn new(quantity: u32, unit_price: Rupiah) -> Self {
        LineItem {
            quantity,
            unit_price,
            ..LineItem::default()
        }
    }

    /// Sets the item name.
    pub fn named(mut self, item_name: impl Into<String>) -> Self {
        self.item_name = item_name.into();
        self
    }

    /// Sets the packing type.
    pub fn packed(mut self, packing_type: PackingType) -> Self {
        self.packing_type = packing_type;
        self
    }

    /// `quantity × unit_price`, always recomputed.
    #[inline]
    pub fn line_total(&self) -> Rupiah {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Order Adjustments
// =============================================================================

/// Discount, down payment and tax applied on top of the line items.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderAdjustments {
    /// Discount value; a flat amount or a percentage per `discount_type`.
    pub discount_value: f64,

    /// How to read `discount_value`.
    pub discount_type: DiscountType,

    /// Down payment ("uang muka") already received.
    pub down_payment: Rupiah,

    /// PPN rate in percent (11.0 = 11%).
    pub tax_rate_percent: f64,
}

// =============================================================================
// Order
// =============================================================================

/// A sales order as held by a screen.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct Order {
    /// Remote identifier, absent for orders not yet saved.
    pub id: Option<String>,

    pub customer_name: String,
    pub customer_address: String,

    /// ISO-8601 date of the customer's purchase order.
    pub po_date: Option<String>,

    pub po_number: String,
    pub so_number: String,

    /// Lines in display order.
    pub items: Vec<LineItem>,

    pub adjustments: OrderAdjustments,

    /// Free-text payment terms ("Transfer", "Tempo 30 hari", ...).
    pub payment_type: String,

    /// ISO-8601 date the payment is due.
    pub payment_date: Option<String>,
}

impl Order {
    /// Recomputes this order's totals.
    pub fn totals(&self) -> OrderTotals {
        compute_totals(&self.items, &self.adjustments)
    }
}

// =============================================================================
// Delivery Schedule
// =============================================================================

/// A delivery date booked against a sales order.
///
/// `order` is a snapshot of the linked order taken when the record was
/// fetched; it is `None` when the API returned only the order id.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct DeliverySchedule {
    pub id: Option<String>,
    pub customer_name: String,
    pub linked_order_id: String,

    /// ISO-8601 delivery date.
    pub delivery_date: Option<String>,

    pub order: Option<Order>,
}

impl DeliverySchedule {
    /// SO number of the linked order, or `""` without a snapshot.
    pub fn so_number(&self) -> &str {
        self.order
            .as_ref()
            .map(|order| order.so_number.as_str())
            .unwrap_or("")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

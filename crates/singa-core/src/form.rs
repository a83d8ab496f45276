//! # Sales Order Form
//!
//! Owned state behind the create/edit order screens. Every edit goes
//! through a method; totals are recomputed on demand and never stored.
//!
//! ## Edit Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Screen Action            Form Method              State Change         │
//! │  ─────────────            ───────────              ────────────         │
//! │                                                                         │
//! │  "Tambah Barang" ────────► add_item() ───────────► items.push(blank)   │
//! │                                                                         │
//! │  Pick item name ─────────► set_item_name(i) ─────► name + price list   │
//! │                                                                         │
//! │  Pick packing ───────────► set_packing(i) ───────► packing + price list│
//! │                                                                         │
//! │  Type a price ───────────► set_unit_price(i) ────► unit_price          │
//! │                                                                         │
//! │  Change quantity ────────► set_quantity(i) ──────► quantity            │
//! │                                                                         │
//! │  Click remove ───────────► remove_item(i) ───────► items.remove(i)     │
//! │                                                                         │
//! │  Submit ─────────────────► to_order() ───────────► (read only)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::catalog::PriceList;
use crate::error::{CoreError, CoreResult};
use crate::money::Rupiah;
use crate::totals::OrderTotals;
use crate::types::{DiscountType, LineItem, Order, PackingType};
use crate::validation::{validate_order_submission, ValidationResult};

/// Editable sales order.
#[derive(Debug, Clone, Default)]
pub struct SalesOrderForm {
    order: Order,
    prices: PriceList,
}

impl SalesOrderForm {
    /// Creates an empty form priced from the standard price list.
    pub fn new() -> Self {
        SalesOrderForm::default()
    }

    /// Creates an empty form priced from `prices`.
    pub fn with_price_list(prices: PriceList) -> Self {
        SalesOrderForm {
            order: Order::default(),
            prices,
        }
    }

    /// Loads an existing order for editing. Stored unit prices are kept.
    pub fn from_order(order: Order) -> Self {
        SalesOrderForm {
            order,
            prices: PriceList::default(),
        }
    }

    /// Snapshot of the form as an order.
    pub fn to_order(&self) -> Order {
        self.order.clone()
    }

    /// Validates the required fields and returns the order to submit.
    pub fn submit(&self) -> ValidationResult<Order> {
        validate_order_submission(&self.order)?;
        Ok(self.to_order())
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn items(&self) -> &[LineItem] {
        &self.order.items
    }

    pub fn totals(&self) -> OrderTotals {
        self.order.totals()
    }

    // -------------------------------------------------------------------------
    // Header & payment fields
    // -------------------------------------------------------------------------

    pub fn set_customer(&mut self, name: impl Into<String>, address: impl Into<String>) {
        self.order.customer_name = name.into();
        self.order.customer_address = address.into();
    }

    pub fn set_numbers(&mut self, po_number: impl Into<String>, so_number: impl Into<String>) {
        self.order.po_number = po_number.into();
        self.order.so_number = so_number.into();
    }

    pub fn set_po_date(&mut self, date: Option<String>) {
        self.order.po_date = date;
    }

    pub fn set_payment(&mut self, payment_type: impl Into<String>, payment_date: Option<String>) {
        self.order.payment_type = payment_type.into();
        self.order.payment_date = payment_date;
    }

    pub fn set_discount(&mut self, value: f64, discount_type: DiscountType) {
        self.order.adjustments.discount_value = value;
        self.order.adjustments.discount_type = discount_type;
    }

    pub fn set_down_payment(&mut self, amount: Rupiah) {
        self.order.adjustments.down_payment = amount;
    }

    pub fn set_tax_rate(&mut self, percent: f64) {
        self.order.adjustments.tax_rate_percent = percent;
    }

    // -------------------------------------------------------------------------
    // Line items
    // -------------------------------------------------------------------------

    /// Appends a blank line (quantity 0, Box, no name, price 0) and
    /// returns its index.
    pub fn add_item(&mut self) -> usize {
        self.order.items.push(LineItem::default());
        self.order.items.len() - 1
    }

    /// Removes and returns the line at `index`.
    pub fn remove_item(&mut self, index: usize) -> CoreResult<LineItem> {
        self.check_index(index)?;
        Ok(self.order.items.remove(index))
    }

    pub fn set_quantity(&mut self, index: usize, quantity: u32) -> CoreResult<()> {
        self.line_mut(index)?.quantity = quantity;
        Ok(())
    }

    /// Renames a line and re-prices it from the price list.
    pub fn set_item_name(&mut self, index: usize, name: impl Into<String>) -> CoreResult<()> {
        let name = name.into();
        let price = {
            let line = self.line(index)?;
            self.prices.unit_price(&name, &line.packing_type)
        };

        let line = self.line_mut(index)?;
        line.item_name = name;
        line.unit_price = price;
        Ok(())
    }

    /// Changes a line's packing and re-prices it from the price list.
    pub fn set_packing(&mut self, index: usize, packing: PackingType) -> CoreResult<()> {
        let price = {
            let line = self.line(index)?;
            self.prices.unit_price(&line.item_name, &packing)
        };

        let line = self.line_mut(index)?;
        line.packing_type = packing;
        line.unit_price = price;
        Ok(())
    }

    /// Overrides a line's unit price.
    pub fn set_unit_price(&mut self, index: usize, price: Rupiah) -> CoreResult<()> {
        self.line_mut(index)?.unit_price = price;
        Ok(())
    }

    fn check_index(&self, index: usize) -> CoreResult<()> {
        if index < self.order.items.len() {
            Ok(())
        } else {
            Err(CoreError::LineOutOfRange {
                index,
                len: self.order.items.len(),
            })
        }
    }

    fn line(&self, index: usize) -> CoreResult<&LineItem> {
        self.check_index(index)?;
        Ok(&self.order.items[index])
    }

    fn line_mut(&mut self, index: usize) -> CoreResult<&mut LineItem> {
        self.check_index(index)?;
        Ok(&mut self.order.items[index])
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

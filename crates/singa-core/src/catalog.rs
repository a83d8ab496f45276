//! # Price List
//!
//! Standard unit prices the order form fills in when an item's name or
//! packing changes. A price entered by hand afterwards is kept until the
//! next name/packing change.
//!
//! ```text
//! ┌──────────────┬─────────┬──────────────┐
//! │ Item         │ Packing │ Unit price   │
//! ├──────────────┼─────────┼──────────────┤
//! │ Paku         │ Box     │      500.000 │
//! │ Paku         │ other   │            0 │
//! │ Baja Ringan  │ Box     │    1.000.000 │
//! │ Baja Ringan  │ other   │      100.000 │
//! │ anything else│         │            0 │
//! └──────────────┴─────────┴──────────────┘
//! ```

use crate::money::Rupiah;
use crate::types::PackingType;

/// Prices for one catalog item.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub item_name: String,
    /// Price when sold by the box.
    pub box_price: Rupiah,
    /// Price for any other packing.
    pub unit_price: Rupiah,
}

/// Lookup table from item name and packing to unit price.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceList {
    entries: Vec<CatalogEntry>,
}

impl Default for PriceList {
    fn default() -> Self {
        PriceList::new(vec![
            CatalogEntry {
                item_name: "Paku".to_string(),
                box_price: Rupiah::new(500_000.0),
                unit_price: Rupiah::zero(),
            },
            CatalogEntry {
                item_name: "Baja Ringan".to_string(),
                box_price: Rupiah::new(1_000_000.0),
                unit_price: Rupiah::new(100_000.0),
            },
        ])
    }
}

impl PriceList {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        PriceList { entries }
    }

    /// Item names offered by the order form, in catalog order.
    pub fn item_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.item_name.as_str())
    }

    /// Standard price of `item_name` packed as `packing`. Unknown items cost 0.
    ///
    /// ## Example
    /// ```rust
    /// use singa_core::catalog::PriceList;
    /// use singa_core::PackingType;
    ///
    /// let prices = PriceList::default();
    /// assert_eq!(prices.unit_price("Paku", &PackingType::Box).value(), 500_000.0);
    /// assert_eq!(prices.unit_price("Baja Ringan", &PackingType::Piece).value(), 100_000.0);
    /// assert!(prices.unit_price("Semen", &PackingType::Box).is_zero());
    /// ```
    pub fn unit_price(&self, item_name: &str, packing: &PackingType) -> Rupiah {
        self.entries
            .iter()
            .find(|entry| entry.item_name == item_name)
            .map(|entry| match packing {
                PackingType::Box => entry.box_price,
                _ => entry.unit_price,
            })
            .unwrap_or_default()
    }
}

//! # Record Normalization
//!
//! Turns loosely typed wire records into `singa_core` domain types.
//!
//! ## Coercion Rules
//! ```text
//! ┌──────────────────────┬───────────────────────────────────────────────┐
//! │ JSON value           │ number()           │ text()                   │
//! ├──────────────────────┼────────────────────┼──────────────────────────┤
//! │ 1500 / 1500.5        │ 1500 / 1500.5      │ "1500" / "1500.5"        │
//! │ "1500" / " 12.5 "    │ 1500 / 12.5        │ as is                    │
//! │ "abc" / ""           │ 0                  │ as is                    │
//! │ null / absent        │ 0                  │ ""                       │
//! │ true / [] / {}       │ 0                  │ ""                       │
//! └──────────────────────┴────────────────────┴──────────────────────────┘
//! ```
//!
//! Quantities are truncated to whole units; negative or unreadable
//! quantities become 0.
//!
//! Stored totals are never trusted. After normalization the totals are
//! recomputed, and a stored `totalBayar` that disagrees is logged.

use serde_json::Value;
use tracing::warn;

use singa_core::{
    DeliverySchedule, DiscountType, LineItem, Order, OrderAdjustments, PackingType, Rupiah,
};

use crate::wire::{BarangRecord, DeliveryScheduleRecord, LinkedOrder, SalesOrderRecord};

/// Stored and recomputed grand totals closer than this are considered equal.
pub const DRIFT_TOLERANCE: f64 = 0.005;

// =============================================================================
// Scalars
// =============================================================================

/// Reads a JSON number or numeric string; anything else is 0.
pub fn number(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed.filter(|n| n.is_finite()).unwrap_or(0.0)
}

/// Reads a quantity as whole units.
pub fn quantity(value: Option<&Value>) -> u32 {
    let n = number(value).trunc();
    if n <= 0.0 {
        0
    } else if n >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        n as u32
    }
}

/// Reads a string or number as text; anything else is `""`.
pub fn text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Reads an id or date field, treating empty text as absent.
pub fn optional_text(value: Option<&Value>) -> Option<String> {
    let text = text(value);
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

fn first_present<'a>(primary: Option<&'a Value>, fallback: Option<&'a Value>) -> Option<&'a Value> {
    match primary {
        Some(Value::Null) | None => fallback,
        present => present,
    }
}

// =============================================================================
// Records
// =============================================================================

/// Converts a stored line.
pub fn line_from_record(record: &BarangRecord) -> LineItem {
    let packing = text(first_present(
        record.jenis_packing.as_ref(),
        record.jenis.as_ref(),
    ));

    LineItem {
        quantity: quantity(record.kuantitas.as_ref()),
        unit_price: Rupiah::new(number(record.harga.as_ref())),
        packing_type: PackingType::from(packing.as_str()),
        item_name: text(record.nama_barang.as_ref()),
    }
}

/// Converts a stored sales order and checks its stored total.
///
/// Adjustments come from `subTotal`, falling back to the top-level
/// `diskon`/`uangMuka`. The tax rate is read only from `subTotal.ppn`; the
/// top-level `ppn` holds an amount and is ignored.
pub fn order_from_record(record: &SalesOrderRecord) -> Order {
    let sub_total = record.sub_total.as_ref();

    let adjustments = OrderAdjustments {
        discount_value: number(first_present(
            sub_total.and_then(|s| s.diskon.as_ref()),
            record.diskon.as_ref(),
        )),
        discount_type: DiscountType::from_label(&text(record.discount_type.as_ref())),
        down_payment: Rupiah::new(number(first_present(
            sub_total.and_then(|s| s.uang_muka.as_ref()),
            record.uang_muka.as_ref(),
        ))),
        tax_rate_percent: number(sub_total.and_then(|s| s.ppn.as_ref())),
    };

    let order = Order {
        id: optional_text(record.id.as_ref()),
        customer_name: text(record.nama_pelanggan.as_ref()),
        customer_address: text(record.alamat_pelanggan.as_ref()),
        po_date: optional_text(record.tanggal_po.as_ref()),
        po_number: text(record.nomor_po.as_ref()),
        so_number: text(record.nomor_so.as_ref()),
        items: record
            .barang
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(line_from_record)
            .collect(),
        adjustments,
        payment_type: text(first_present(
            record.tipe_pembayaran.as_ref(),
            record.tipe_pemabayran.as_ref(),
        )),
        payment_date: optional_text(record.jadwal_pembayaran.as_ref()),
    };

    check_stored_total(&order, record.total_bayar.as_ref());
    order
}

/// Logs a stored grand total that disagrees with the recomputed one, and
/// orders whose balance is a credit.
fn check_stored_total(order: &Order, stored: Option<&Value>) {
    let totals = order.totals();

    if let Some(stored) = stored.filter(|v| !v.is_null()) {
        let stored = number(Some(stored));
        let computed = totals.grand_total.value();
        if (stored - computed).abs() > DRIFT_TOLERANCE {
            warn!(
                so_number = %order.so_number,
                stored,
                computed,
                "Stored totalBayar differs from recomputed grand total"
            );
        }
    }

    if totals.is_credit_balance() {
        warn!(
            so_number = %order.so_number,
            grand_total = totals.grand_total.value(),
            "Order has a negative grand total (credit balance)"
        );
    }
}

/// Converts a stored delivery schedule.
///
/// When the backend populated `pilihNomorSo`, the order becomes the
/// schedule's snapshot; a bare id leaves the snapshot empty.
pub fn schedule_from_record(record: &DeliveryScheduleRecord) -> DeliverySchedule {
    let (linked_order_id, order) = match &record.pilih_nomor_so {
        Some(LinkedOrder::Id(id)) => (id.clone(), None),
        Some(LinkedOrder::Populated(populated)) => {
            let order = order_from_record(populated);
            (order.id.clone().unwrap_or_default(), Some(order))
        }
        None => (String::new(), None),
    };

    DeliverySchedule {
        id: optional_text(record.id.as_ref()),
        customer_name: text(record.pilih_customer.as_ref()),
        linked_order_id,
        delivery_date: optional_text(record.pilih_tanggal.as_ref()),
        order,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> SalesOrderRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_number_coercion() {
        assert_eq!(number(Some(&json!(1500))), 1500.0);
        assert_eq!(number(Some(&json!(12.5))), 12.5);
        assert_eq!(number(Some(&json!(" 250000 "))), 250_000.0);
        assert_eq!(number(Some(&json!("abc"))), 0.0);
        assert_eq!(number(Some(&json!(""))), 0.0);
        assert_eq!(number(Some(&json!(null))), 0.0);
        assert_eq!(number(Some(&json!(true))), 0.0);
        assert_eq!(number(Some(&json!("NaN"))), 0.0);
        assert_eq!(number(None), 0.0);
    }

    #[test]
    fn test_quantity_coercion() {
        assert_eq!(quantity(Some(&json!(3))), 3);
        assert_eq!(quantity(Some(&json!("2"))), 2);
        assert_eq!(quantity(Some(&json!(2.9))), 2);
        assert_eq!(quantity(Some(&json!(-4))), 0);
        assert_eq!(quantity(Some(&json!("lots"))), 0);
    }

    #[test]
    fn test_text_and_optional_text() {
        assert_eq!(text(Some(&json!("SO-1"))), "SO-1");
        assert_eq!(text(Some(&json!(77))), "77");
        assert_eq!(text(Some(&json!(null))), "");
        assert_eq!(optional_text(Some(&json!(""))), None);
        assert_eq!(optional_text(Some(&json!("2024-03-05"))), Some("2024-03-05".to_string()));
    }

    #[test]
    fn test_order_from_full_record() {
        let order = order_from_record(&record(json!({
            "_id": "65f0",
            "namaPelanggan": "Toko Makmur",
            "alamatPelanggan": "Jl. Merdeka 1",
            "tanggalPO": "2024-03-05T00:00:00.000Z",
            "nomorPO": "PO-77",
            "nomorSO": "SO-001",
            "barang": [
                { "kuantitas": 2, "jenisPacking": "Box", "namaBarang": "Paku", "harga": 500000, "total": 1000000 },
                { "kuantitas": "1", "jenis": "Piece", "namaBarang": "Baja Ringan", "harga": "1000000" }
            ],
            "subTotal": { "uangMuka": 100000, "diskon": 10, "ppn": 11 },
            "totalBayar": 1920000,
            "diskon": 10,
            "uangMuka": 100000,
            "ppn": 220000,
            "discountType": "percentage",
            "tipePembayaran": "Transfer",
            "jadwalPembayaran": "2024-04-01"
        })));

        assert_eq!(order.id.as_deref(), Some("65f0"));
        assert_eq!(order.so_number, "SO-001");
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.items[1].quantity, 1);
        assert_eq!(order.items[1].packing_type, PackingType::Piece);
        assert_eq!(order.items[1].unit_price.value(), 1_000_000.0);
        assert_eq!(order.adjustments.discount_type, DiscountType::Percentage);
        assert_eq!(order.adjustments.tax_rate_percent, 11.0);
        assert_eq!(order.payment_type, "Transfer");
        assert_eq!(order.totals().grand_total.value(), 1_920_000.0);
    }

    #[test]
    fn test_adjustments_fall_back_to_top_level() {
        let order = order_from_record(&record(json!({
            "diskon": "50000",
            "uangMuka": 25000,
            "ppn": 220000
        })));

        assert_eq!(order.adjustments.discount_value, 50_000.0);
        assert_eq!(order.adjustments.discount_type, DiscountType::Amount);
        assert_eq!(order.adjustments.down_payment.value(), 25_000.0);
        // top-level ppn is an amount, never a rate
        assert_eq!(order.adjustments.tax_rate_percent, 0.0);
    }

    #[test]
    fn test_sub_total_wins_over_top_level() {
        let order = order_from_record(&record(json!({
            "subTotal": { "diskon": 5, "uangMuka": null },
            "diskon": 99,
            "uangMuka": 1000
        })));

        assert_eq!(order.adjustments.discount_value, 5.0);
        assert_eq!(order.adjustments.down_payment.value(), 1000.0);
    }

    #[test]
    fn test_misspelled_payment_type() {
        let order = order_from_record(&record(json!({ "tipePemabayran": "Tempo 30 hari" })));
        assert_eq!(order.payment_type, "Tempo 30 hari");
    }

    #[test]
    fn test_empty_record() {
        let order = order_from_record(&SalesOrderRecord::default());
        assert_eq!(order, Order::default());
    }

    #[test]
    fn test_schedule_with_populated_order() {
        let record: DeliveryScheduleRecord = serde_json::from_value(json!({
            "_id": "j1",
            "pilihCustomer": "Toko Makmur",
            "pilihNomorSo": { "_id": "65f0", "nomorSO": "SO-001" },
            "pilihTanggal": "2024-03-10T00:00:00.000Z"
        }))
        .unwrap();

        let schedule = schedule_from_record(&record);
        assert_eq!(schedule.id.as_deref(), Some("j1"));
        assert_eq!(schedule.customer_name, "Toko Makmur");
        assert_eq!(schedule.linked_order_id, "65f0");
        assert_eq!(schedule.so_number(), "SO-001");
        assert_eq!(
            schedule.delivery_date.as_deref(),
            Some("2024-03-10T00:00:00.000Z")
        );
    }

    #[test]
    fn test_schedule_with_bare_order_id() {
        let record: DeliveryScheduleRecord = serde_json::from_value(json!({
            "_id": "j2",
            "pilihCustomer": "CV Sentosa",
            "pilihNomorSo": "65f1"
        }))
        .unwrap();

        let schedule = schedule_from_record(&record);
        assert_eq!(schedule.linked_order_id, "65f1");
        assert!(schedule.order.is_none());
        assert!(schedule.delivery_date.is_none());
    }
}

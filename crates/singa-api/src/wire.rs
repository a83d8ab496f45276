//! # Wire Records
//!
//! JSON shapes exchanged with the backend, keyed the way the backend keys
//! them (Indonesian camelCase, Mongo `_id`).
//!
//! ## Inbound vs Outbound
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Inbound (*Record)                    Outbound (*Payload)               │
//! │  ─────────────────                    ───────────────────               │
//! │  every scalar is Option<Value>:       typed, complete:                  │
//! │  numbers may be numbers, numeric      numbers are numbers,              │
//! │  strings, null or absent              totals freshly computed           │
//! │                                                                         │
//! │        │                                       ▲                        │
//! │        ▼  normalize::order_from_record         │  SalesOrderPayload::   │
//! │     singa_core::Order  ────────────────────────┘  from_order           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Records written by older front ends carry misspelled or alternate keys
//! (`tipePemabayran`, `jenis`). Both spellings are kept as separate fields
//! so a record holding both still decodes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use singa_core::{DiscountType, Order};

// =============================================================================
// Inbound
// =============================================================================

/// Body of `GET /salesorder`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SalesOrderListResponse {
    pub penjualan_app: DataEnvelope<SalesOrderRecord>,
}

/// `{ "data": [...] }`, the body of `GET /jadwalkirim`.
#[derive(Debug, Clone, Deserialize)]
pub struct DataEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

impl<T> Default for DataEnvelope<T> {
    fn default() -> Self {
        DataEnvelope { data: Vec::new() }
    }
}

/// A stored sales order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SalesOrderRecord {
    #[serde(rename = "_id")]
    pub id: Option<Value>,
    pub nama_pelanggan: Option<Value>,
    pub alamat_pelanggan: Option<Value>,
    #[serde(rename = "tanggalPO")]
    pub tanggal_po: Option<Value>,
    #[serde(rename = "nomorPO")]
    pub nomor_po: Option<Value>,
    #[serde(rename = "nomorSO")]
    pub nomor_so: Option<Value>,
    pub barang: Option<Vec<BarangRecord>>,
    pub sub_total: Option<SubTotalRecord>,
    /// Grand total as last computed by whoever wrote the record.
    pub total_bayar: Option<Value>,
    pub diskon: Option<Value>,
    pub uang_muka: Option<Value>,
    /// Tax AMOUNT (the rate lives in `subTotal.ppn`).
    pub ppn: Option<Value>,
    pub discount_type: Option<Value>,
    pub tipe_pembayaran: Option<Value>,
    pub tipe_pemabayran: Option<Value>,
    pub jadwal_pembayaran: Option<Value>,
}

/// A stored line item.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BarangRecord {
    pub kuantitas: Option<Value>,
    pub jenis_packing: Option<Value>,
    pub jenis: Option<Value>,
    pub nama_barang: Option<Value>,
    pub harga: Option<Value>,
    pub total: Option<Value>,
}

/// The `subTotal` object; despite the name it holds the adjustments.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubTotalRecord {
    pub uang_muka: Option<Value>,
    pub diskon: Option<Value>,
    /// Tax RATE in percent.
    pub ppn: Option<Value>,
}

/// A stored delivery schedule.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeliveryScheduleRecord {
    #[serde(rename = "_id")]
    pub id: Option<Value>,
    pub pilih_customer: Option<Value>,
    pub pilih_nomor_so: Option<LinkedOrder>,
    pub pilih_tanggal: Option<Value>,
}

/// `pilihNomorSo` is either the populated order or its bare id.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LinkedOrder {
    Id(String),
    Populated(Box<SalesOrderRecord>),
}

// =============================================================================
// Outbound
// =============================================================================

/// Body of `POST /salesorder` and `PUT /salesorder/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesOrderPayload {
    pub nama_pelanggan: String,
    pub alamat_pelanggan: String,
    #[serde(rename = "tanggalPO")]
    pub tanggal_po: Option<String>,
    #[serde(rename = "nomorPO")]
    pub nomor_po: String,
    #[serde(rename = "nomorSO")]
    pub nomor_so: String,
    pub barang: Vec<BarangPayload>,
    pub sub_total: SubTotalPayload,
    pub total_bayar: f64,
    pub diskon: f64,
    pub uang_muka: f64,
    pub ppn: f64,
    pub discount_type: DiscountType,
    pub tipe_pembayaran: String,
    pub jadwal_pembayaran: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarangPayload {
    pub kuantitas: u32,
    pub jenis_packing: String,
    pub nama_barang: String,
    pub harga: f64,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubTotalPayload {
    pub uang_muka: f64,
    pub diskon: f64,
    pub ppn: f64,
}

impl SalesOrderPayload {
    /// Builds the payload for `order` with freshly computed totals.
    pub fn from_order(order: &Order) -> Self {
        let totals = order.totals();
        let adjustments = &order.adjustments;

        SalesOrderPayload {
            nama_pelanggan: order.customer_name.clone(),
            alamat_pelanggan: order.customer_address.clone(),
            tanggal_po: order.po_date.clone(),
            nomor_po: order.po_number.clone(),
            nomor_so: order.so_number.clone(),
            barang: order
                .items
                .iter()
                .map(|item| BarangPayload {
                    kuantitas: item.quantity,
                    jenis_packing: item.packing_type.label().to_string(),
                    nama_barang: item.item_name.clone(),
                    harga: item.unit_price.value(),
                    total: item.line_total().value(),
                })
                .collect(),
            sub_total: SubTotalPayload {
                uang_muka: adjustments.down_payment.value(),
                diskon: adjustments.discount_value,
                ppn: adjustments.tax_rate_percent,
            },
            total_bayar: totals.grand_total.value(),
            diskon: adjustments.discount_value,
            uang_muka: adjustments.down_payment.value(),
            ppn: totals.tax_amount.value(),
            discount_type: adjustments.discount_type,
            tipe_pembayaran: order.payment_type.clone(),
            jadwal_pembayaran: order.payment_date.clone(),
        }
    }
}

/// Body of `POST /jadwalkirim`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSchedulePayload {
    pub pilih_customer: String,
    /// Id of the linked sales order.
    pub pilih_nomor_so: String,
    /// `YYYY-MM-DD`
    pub pilih_tanggal: String,
}

/// Body of `PUT /jadwalkirim/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReschedulePayload {
    pub pilih_tanggal: String,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use singa_core::{LineItem, OrderAdjustments, Rupiah};

    #[test]
    fn test_list_response_decodes() {
        let body = json!({
            "penjualanApp": {
                "data": [
                    { "_id": "a1", "nomorSO": "SO-1", "tipePemabayran": "Tunai" },
                    { "_id": "a2", "nomorSO": 42, "barang": null }
                ]
            }
        });

        let response: SalesOrderListResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.penjualan_app.data.len(), 2);
        assert_eq!(
            response.penjualan_app.data[0].tipe_pemabayran,
            Some(json!("Tunai"))
        );
        assert!(response.penjualan_app.data[1].barang.is_none());
    }

    #[test]
    fn test_both_payment_spellings_decode() {
        let record: SalesOrderRecord = serde_json::from_value(json!({
            "tipePembayaran": "Transfer",
            "tipePemabayran": "Tunai"
        }))
        .unwrap();
        assert_eq!(record.tipe_pembayaran, Some(json!("Transfer")));
        assert_eq!(record.tipe_pemabayran, Some(json!("Tunai")));
    }

    #[test]
    fn test_linked_order_shapes() {
        let bare: DeliveryScheduleRecord =
            serde_json::from_value(json!({ "_id": "j1", "pilihNomorSo": "a1" })).unwrap();
        assert!(matches!(bare.pilih_nomor_so, Some(LinkedOrder::Id(ref id)) if id == "a1"));

        let populated: DeliveryScheduleRecord = serde_json::from_value(json!({
            "_id": "j2",
            "pilihNomorSo": { "_id": "a1", "nomorSO": "SO-1" }
        }))
        .unwrap();
        assert!(matches!(
            populated.pilih_nomor_so,
            Some(LinkedOrder::Populated(_))
        ));

        let missing: DeliveryScheduleRecord =
            serde_json::from_value(json!({ "pilihNomorSo": null })).unwrap();
        assert!(missing.pilih_nomor_so.is_none());
    }

    #[test]
    fn test_payload_from_order() {
        let order = Order {
            customer_name: "Toko Makmur".to_string(),
            so_number: "SO-001".to_string(),
            items: vec![
                LineItem::new(2, Rupiah::new(500_000.0)).named("Paku"),
                LineItem::new(1, Rupiah::new(1_000_000.0)).named("Baja Ringan"),
            ],
            adjustments: OrderAdjustments {
                discount_value: 10.0,
                discount_type: DiscountType::Percentage,
                down_payment: Rupiah::new(100_000.0),
                tax_rate_percent: 11.0,
            },
            ..Order::default()
        };

        let json = serde_json::to_value(SalesOrderPayload::from_order(&order)).unwrap();

        assert_eq!(json["namaPelanggan"], "Toko Makmur");
        assert_eq!(json["nomorSO"], "SO-001");
        assert_eq!(json["barang"][0]["kuantitas"], 2);
        assert_eq!(json["barang"][0]["jenisPacking"], "Box");
        assert_eq!(json["barang"][0]["total"], 1_000_000.0);
        assert_eq!(json["subTotal"]["ppn"], 11.0);
        assert_eq!(json["subTotal"]["uangMuka"], 100_000.0);
        assert_eq!(json["totalBayar"], 1_920_000.0);
        assert_eq!(json["ppn"], 220_000.0);
        assert_eq!(json["discountType"], "percentage");
    }
}

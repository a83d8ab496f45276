//! # Document Assembler
//!
//! Builds the exact payload a printer/PDF renderer receives. Layout,
//! fonts and pagination are the renderer's business; the text, order of
//! rows and formatting of every cell are decided here.
//!
//! ## Document Structure
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        PT Singa Perkasa                                 │ ← company_name
//! │                      Sales Order Report                                 │ ← title
//! │                                                                         │
//! │  Customer Name: Toko Makmur                                             │
//! │  Customer Address: Jl. Merdeka 1                                        │ ← header
//! │  PO Date: 5 Maret 2024                                                  │
//! │  PO Number: PO-77        SO Number: SO-001                              │
//! │  ─────────────────────────────────────────────────────────────────────  │
//! │  Qty │ Jenis Barang │ Item  │ Price              │ Total               │ ← items
//! │  2   │ Box          │ Paku  │ Rp 500.000,00      │ Rp 1.000.000,00     │
//! │                                                                         │
//! │                            Summary                                      │ ← summary_title
//! │  Description              │ Amount                                      │
//! │  Sub Total                │ Rp 2.000.000,00                             │ ← summary
//! │  Discount                 │ Rp 10,00 (%)                                │
//! │  ...                                                                    │
//! │                        PT Singa Perkasa                                 │ ← footer
//! └─────────────────────────────────────────────────────────────────────────┘
//!   file_name: SalesOrder_SO-001.pdf
//! ```
//!
//! The discount row prints the raw discount value through the currency
//! formatter followed by its unit, so a 10% discount reads `Rp 10,00 (%)`.
//! Printed documents have always looked like this.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::format::{format_currency, format_date, CurrencyStyle};
use crate::totals::OrderTotals;
use crate::types::{DeliverySchedule, Order};
use crate::DEFAULT_COMPANY_NAME;

// =============================================================================
// Settings
// =============================================================================

/// Label language of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "id")]
    Indonesian,
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "id" | "indonesian" | "indonesia" => Ok(Language::Indonesian),
            other => Err(format!("unknown document language '{other}' (expected en or id)")),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::English => f.write_str("en"),
            Language::Indonesian => f.write_str("id"),
        }
    }
}

/// Presentation settings shared by every document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSettings {
    /// Printed in the title block and the footer.
    pub company_name: String,
    pub language: Language,
    pub currency_style: CurrencyStyle,
}

impl Default for DocumentSettings {
    fn default() -> Self {
        DocumentSettings {
            company_name: DEFAULT_COMPANY_NAME.to_string(),
            language: Language::English,
            currency_style: CurrencyStyle::Locale,
        }
    }
}

// =============================================================================
// Document Kind
// =============================================================================

/// Which document is being produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum DocumentKind {
    /// Sales order report ("Laporan Sales Order" in Indonesian).
    SalesOrder,
    /// Delivery schedule ("Jadwal Pengiriman").
    DeliverySchedule,
}

impl DocumentKind {
    /// File name the renderer saves the document under.
    ///
    /// ## Example
    /// ```rust
    /// use singa_core::DocumentKind;
    ///
    /// assert_eq!(DocumentKind::SalesOrder.file_name("SO-001"), "SalesOrder_SO-001.pdf");
    /// assert_eq!(
    ///     DocumentKind::DeliverySchedule.file_name("SO-001"),
    ///     "JadwalPengiriman_SO-001.pdf"
    /// );
    /// ```
    pub fn file_name(&self, so_number: &str) -> String {
        match self {
            DocumentKind::SalesOrder => format!("SalesOrder_{so_number}.pdf"),
            DocumentKind::DeliverySchedule => format!("JadwalPengiriman_{so_number}.pdf"),
        }
    }

    fn title(&self, labels: &Labels) -> &'static str {
        match self {
            DocumentKind::SalesOrder => labels.sales_order_title,
            DocumentKind::DeliverySchedule => "Jadwal Pengiriman",
        }
    }
}

// =============================================================================
// Payload
// =============================================================================

/// One `Label: value` line of the header block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HeaderField {
    pub label: String,
    pub value: String,
}

impl HeaderField {
    fn new(label: &str, value: impl Into<String>) -> Self {
        HeaderField {
            label: label.to_string(),
            value: value.into(),
        }
    }
}

/// A table with a head row and body rows of preformatted cells.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Everything a renderer needs to print an order or delivery document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderDocument {
    pub kind: DocumentKind,
    pub company_name: String,
    pub title: String,
    pub header: Vec<HeaderField>,
    pub items: Table,
    pub summary_title: String,
    pub summary: Table,
    pub footer: String,
    pub file_name: String,
}

impl OrderDocument {
    /// Looks up a header value by label.
    pub fn header_value(&self, label: &str) -> Option<&str> {
        self.header
            .iter()
            .find(|field| field.label == label)
            .map(|field| field.value.as_str())
    }

    /// Looks up a summary amount by its description.
    pub fn summary_value(&self, description: &str) -> Option<&str> {
        self.summary
            .rows
            .iter()
            .find(|row| row.first().map(String::as_str) == Some(description))
            .and_then(|row| row.get(1))
            .map(String::as_str)
    }
}

// =============================================================================
// Labels
// =============================================================================

struct Labels {
    sales_order_title: &'static str,
    customer_name: &'static str,
    customer_address: &'static str,
    po_date: &'static str,
    po_number: &'static str,
    so_number: &'static str,
    delivery_date: &'static str,
    item_columns: [&'static str; 5],
    summary_title: &'static str,
    summary_columns: [&'static str; 2],
    sub_total: &'static str,
    discount: &'static str,
    down_payment: &'static str,
    tax: &'static str,
    grand_total: &'static str,
    payment_type: &'static str,
    payment_date: &'static str,
}

static ENGLISH: Labels = Labels {
    sales_order_title: "Sales Order Report",
    customer_name: "Customer Name",
    customer_address: "Customer Address",
    po_date: "PO Date",
    po_number: "PO Number",
    so_number: "SO Number",
    delivery_date: "Delivery Date",
    item_columns: ["Qty", "Jenis Barang", "Item", "Price", "Total"],
    summary_title: "Summary",
    summary_columns: ["Description", "Amount"],
    sub_total: "Sub Total",
    discount: "Discount",
    down_payment: "Down Payment",
    tax: "Tax",
    grand_total: "Grand Total",
    payment_type: "Payment Type",
    payment_date: "Payment Date",
};

static INDONESIAN: Labels = Labels {
    sales_order_title: "Laporan Sales Order",
    customer_name: "Nama Pelanggan",
    customer_address: "Alamat Pelanggan",
    po_date: "Tanggal PO",
    po_number: "Nomor PO",
    so_number: "Nomor SO",
    delivery_date: "Tanggal Kirim",
    item_columns: ["Qty", "Jenis Barang", "Item", "Harga", "Total"],
    summary_title: "Ringkasan",
    summary_columns: ["Deskripsi", "Jumlah"],
    sub_total: "Sub Total",
    discount: "Diskon",
    down_payment: "Uang Muka",
    tax: "Pajak",
    grand_total: "Grand Total",
    payment_type: "Tipe Pembayaran",
    payment_date: "Jadwal Pembayaran",
};

fn labels(language: Language) -> &'static Labels {
    match language {
        Language::English => &ENGLISH,
        Language::Indonesian => &INDONESIAN,
    }
}

// =============================================================================
// Builders
// =============================================================================

/// Builds the sales order document for `order` with precomputed `totals`.
///
/// ## Example
/// ```rust
/// use singa_core::{build_order_document, DocumentSettings, LineItem, Order, Rupiah};
///
/// let order = Order {
///     so_number: "SO-001".to_string(),
///     items: vec![LineItem::new(2, Rupiah::new(500_000.0)).named("Paku")],
///     ..Order::default()
/// };
///
/// let doc = build_order_document(&order, &order.totals(), &DocumentSettings::default());
/// assert_eq!(doc.title, "Sales Order Report");
/// assert_eq!(doc.file_name, "SalesOrder_SO-001.pdf");
/// assert_eq!(doc.summary_value("Grand Total"), Some("Rp\u{a0}1.000.000,00"));
/// ```
pub fn build_order_document(
    order: &Order,
    totals: &OrderTotals,
    settings: &DocumentSettings,
) -> OrderDocument {
    assemble(
        DocumentKind::SalesOrder,
        order,
        &order.customer_name,
        None,
        totals,
        settings,
    )
}

/// Builds the delivery document of a schedule from its order snapshot.
///
/// The customer shown is the one recorded on the schedule. Without a
/// snapshot the document has empty order fields and zero totals.
pub fn build_delivery_document(
    schedule: &DeliverySchedule,
    settings: &DocumentSettings,
) -> OrderDocument {
    let empty = Order::default();
    let order = schedule.order.as_ref().unwrap_or(&empty);
    let totals = order.totals();

    assemble(
        DocumentKind::DeliverySchedule,
        order,
        &schedule.customer_name,
        Some(schedule.delivery_date.as_deref()),
        &totals,
        settings,
    )
}

fn assemble(
    kind: DocumentKind,
    order: &Order,
    customer_name: &str,
    delivery_date: Option<Option<&str>>,
    totals: &OrderTotals,
    settings: &DocumentSettings,
) -> OrderDocument {
    let labels = labels(settings.language);
    let style = settings.currency_style;
    let money = |amount: f64| format_currency(amount, style);

    let mut header = vec![
        HeaderField::new(labels.customer_name, customer_name),
        HeaderField::new(labels.customer_address, order.customer_address.as_str()),
        HeaderField::new(labels.po_date, format_date(order.po_date.as_deref())),
        HeaderField::new(labels.po_number, order.po_number.as_str()),
        HeaderField::new(labels.so_number, order.so_number.as_str()),
    ];
    if let Some(date) = delivery_date {
        header.push(HeaderField::new(labels.delivery_date, format_date(date)));
    }

    let items = Table {
        columns: to_strings(&labels.item_columns),
        rows: order
            .items
            .iter()
            .map(|item| {
                vec![
                    item.quantity.to_string(),
                    item.packing_type.label().to_string(),
                    item.item_name.clone(),
                    money(item.unit_price.value()),
                    money(item.line_total().value()),
                ]
            })
            .collect(),
    };

    let adjustments = &order.adjustments;
    let summary_rows = [
        (labels.sub_total, money(totals.sub_total.value())),
        (
            labels.discount,
            format!(
                "{} ({})",
                money(adjustments.discount_value),
                adjustments.discount_type.indicator()
            ),
        ),
        (labels.down_payment, money(adjustments.down_payment.value())),
        (labels.tax, money(totals.tax_amount.value())),
        (labels.grand_total, money(totals.grand_total.value())),
        (labels.payment_type, order.payment_type.clone()),
        (
            labels.payment_date,
            format_date(order.payment_date.as_deref()),
        ),
    ];

    let summary = Table {
        columns: to_strings(&labels.summary_columns),
        rows: summary_rows
            .into_iter()
            .map(|(description, amount)| vec![description.to_string(), amount])
            .collect(),
    };

    OrderDocument {
        kind,
        company_name: settings.company_name.clone(),
        title: kind.title(labels).to_string(),
        header,
        items,
        summary_title: labels.summary_title.to_string(),
        summary,
        footer: settings.company_name.clone(),
        file_name: kind.file_name(&order.so_number),
    }
}

fn to_strings(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|label| label.to_string()).collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Rupiah;
    use crate::types::{DiscountType, LineItem, OrderAdjustments, PackingType};

    fn sample_order() -> Order {
        Order {
            id: Some("abc123".to_string()),
            customer_name: "Toko Makmur".to_string(),
            customer_address: "Jl. Merdeka 1, Bandung".to_string(),
            po_date: Some("2024-03-05".to_string()),
            po_number: "PO-77".to_string(),
            so_number: "SO-001".to_string(),
            items: vec![
                LineItem::new(2, Rupiah::new(500_000.0)).named("Paku"),
                LineItem::new(1, Rupiah::new(1_000_000.0))
                    .named("Baja Ringan")
                    .packed(PackingType::Piece),
            ],
            adjustments: OrderAdjustments {
                discount_value: 10.0,
                discount_type: DiscountType::Percentage,
                down_payment: Rupiah::new(100_000.0),
                tax_rate_percent: 11.0,
            },
            payment_type: "Transfer".to_string(),
            payment_date: Some("2024-04-01".to_string()),
        }
    }

    #[test]
    fn test_english_sales_order_document() {
        let order = sample_order();
        let doc = build_order_document(&order, &order.totals(), &DocumentSettings::default());

        assert_eq!(doc.kind, DocumentKind::SalesOrder);
        assert_eq!(doc.company_name, "PT Singa Perkasa");
        assert_eq!(doc.title, "Sales Order Report");
        assert_eq!(doc.footer, "PT Singa Perkasa");
        assert_eq!(doc.file_name, "SalesOrder_SO-001.pdf");

        assert_eq!(doc.header_value("Customer Name"), Some("Toko Makmur"));
        assert_eq!(doc.header_value("PO Date"), Some("5 Maret 2024"));
        assert_eq!(doc.header_value("SO Number"), Some("SO-001"));
        assert_eq!(doc.header_value("Delivery Date"), None);
        assert_eq!(doc.header.len(), 5);

        assert_eq!(doc.items.columns, vec!["Qty", "Jenis Barang", "Item", "Price", "Total"]);
        assert_eq!(
            doc.items.rows[0],
            vec![
                "2",
                "Box",
                "Paku",
                "Rp\u{a0}500.000,00",
                "Rp\u{a0}1.000.000,00"
            ]
        );
        assert_eq!(doc.items.rows[1][1], "Piece");
        assert_eq!(doc.items.rows[1][2], "Baja Ringan");
    }

    #[test]
    fn test_summary_rows() {
        let order = sample_order();
        let doc = build_order_document(&order, &order.totals(), &DocumentSettings::default());

        assert_eq!(doc.summary_title, "Summary");
        assert_eq!(doc.summary.columns, vec!["Description", "Amount"]);

        let descriptions: Vec<&str> = doc.summary.rows.iter().map(|r| r[0].as_str()).collect();
        assert_eq!(
            descriptions,
            vec![
                "Sub Total",
                "Discount",
                "Down Payment",
                "Tax",
                "Grand Total",
                "Payment Type",
                "Payment Date"
            ]
        );

        assert_eq!(doc.summary_value("Sub Total"), Some("Rp\u{a0}2.000.000,00"));
        assert_eq!(doc.summary_value("Discount"), Some("Rp\u{a0}10,00 (%)"));
        assert_eq!(doc.summary_value("Down Payment"), Some("Rp\u{a0}100.000,00"));
        assert_eq!(doc.summary_value("Tax"), Some("Rp\u{a0}220.000,00"));
        assert_eq!(doc.summary_value("Grand Total"), Some("Rp\u{a0}1.920.000,00"));
        assert_eq!(doc.summary_value("Payment Type"), Some("Transfer"));
        assert_eq!(doc.summary_value("Payment Date"), Some("1 April 2024"));
    }

    #[test]
    fn test_indonesian_labels_and_grouped_currency() {
        let order = sample_order();
        let settings = DocumentSettings {
            language: Language::Indonesian,
            currency_style: CurrencyStyle::Grouped,
            ..DocumentSettings::default()
        };
        let doc = build_order_document(&order, &order.totals(), &settings);

        assert_eq!(doc.title, "Laporan Sales Order");
        assert_eq!(doc.file_name, "SalesOrder_SO-001.pdf");
        assert_eq!(doc.header_value("Nama Pelanggan"), Some("Toko Makmur"));
        assert_eq!(doc.items.columns[3], "Harga");
        assert_eq!(doc.summary_title, "Ringkasan");
        assert_eq!(doc.summary.columns, vec!["Deskripsi", "Jumlah"]);
        assert_eq!(doc.summary_value("Uang Muka"), Some("Rp 100.000"));
        assert_eq!(doc.summary_value("Pajak"), Some("Rp 220.000"));
        assert_eq!(doc.summary_value("Jadwal Pembayaran"), Some("1 April 2024"));
    }

    #[test]
    fn test_flat_discount_indicator() {
        let mut order = sample_order();
        order.adjustments.discount_type = DiscountType::Amount;
        order.adjustments.discount_value = 50_000.0;

        let doc = build_order_document(&order, &order.totals(), &DocumentSettings::default());
        assert_eq!(doc.summary_value("Discount"), Some("Rp\u{a0}50.000,00 (IDR)"));
    }

    #[test]
    fn test_missing_fields_render_empty() {
        let order = Order::default();
        let doc = build_order_document(&order, &order.totals(), &DocumentSettings::default());

        assert_eq!(doc.header_value("PO Date"), Some(""));
        assert_eq!(doc.summary_value("Payment Date"), Some(""));
        assert_eq!(doc.summary_value("Grand Total"), Some("Rp\u{a0}0,00"));
        assert!(doc.items.rows.is_empty());
        assert_eq!(doc.file_name, "SalesOrder_.pdf");
    }

    #[test]
    fn test_delivery_document() {
        let schedule = DeliverySchedule {
            id: Some("jk-1".to_string()),
            customer_name: "Toko Makmur Cabang 2".to_string(),
            linked_order_id: "abc123".to_string(),
            delivery_date: Some("2024-03-10".to_string()),
            order: Some(sample_order()),
        };

        let doc = build_delivery_document(&schedule, &DocumentSettings::default());

        assert_eq!(doc.kind, DocumentKind::DeliverySchedule);
        assert_eq!(doc.title, "Jadwal Pengiriman");
        assert_eq!(doc.file_name, "JadwalPengiriman_SO-001.pdf");
        assert_eq!(doc.header_value("Customer Name"), Some("Toko Makmur Cabang 2"));
        assert_eq!(doc.header_value("Delivery Date"), Some("10 Maret 2024"));
        assert_eq!(doc.items.rows.len(), 2);
        assert_eq!(doc.summary_value("Grand Total"), Some("Rp\u{a0}1.920.000,00"));
    }

    #[test]
    fn test_delivery_document_without_snapshot() {
        let schedule = DeliverySchedule {
            customer_name: "Toko Baru".to_string(),
            linked_order_id: "zzz".to_string(),
            ..DeliverySchedule::default()
        };

        let doc = build_delivery_document(&schedule, &DocumentSettings::default());
        assert_eq!(doc.file_name, "JadwalPengiriman_.pdf");
        assert_eq!(doc.header_value("Delivery Date"), Some(""));
        assert_eq!(doc.summary_value("Sub Total"), Some("Rp\u{a0}0,00"));
    }

    #[test]
    fn test_document_serializes_camel_case() {
        let order = sample_order();
        let doc = build_order_document(&order, &order.totals(), &DocumentSettings::default());
        let json = serde_json::to_value(&doc).unwrap();

        assert_eq!(json["kind"], "salesOrder");
        assert_eq!(json["fileName"], "SalesOrder_SO-001.pdf");
        assert_eq!(json["summaryTitle"], "Summary");
    }

    #[test]
    fn test_language_parse() {
        assert_eq!("id".parse::<Language>(), Ok(Language::Indonesian));
        assert_eq!("EN".parse::<Language>(), Ok(Language::English));
        assert!("fr".parse::<Language>().is_err());
    }
}

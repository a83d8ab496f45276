//! # Document Renderers
//!
//! A renderer turns an [`OrderDocument`] into something printable. The PDF
//! renderer lives outside this crate; [`TextRenderer`] produces a fixed
//! width plain-text page for terminals and logs.

use crate::document::{OrderDocument, Table};

/// Turns an assembled document into an output format.
pub trait DocumentRenderer {
    type Output;

    fn render(&self, document: &OrderDocument) -> Self::Output;
}

/// Default page width of [`TextRenderer`] in characters.
pub const DEFAULT_TEXT_WIDTH: usize = 72;

/// Plain-text renderer.
///
/// ## Example
/// ```rust
/// use singa_core::render::{DocumentRenderer, TextRenderer};
/// use singa_core::{build_order_document, DocumentSettings, Order};
///
/// let order = Order { so_number: "SO-1".into(), ..Order::default() };
/// let doc = build_order_document(&order, &order.totals(), &DocumentSettings::default());
/// let text = TextRenderer::default().render(&doc);
///
/// assert!(text.contains("Sales Order Report"));
/// assert!(text.contains("SO Number: SO-1"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    pub width: usize,
}

impl Default for TextRenderer {
    fn default() -> Self {
        TextRenderer {
            width: DEFAULT_TEXT_WIDTH,
        }
    }
}

impl TextRenderer {
    pub fn new(width: usize) -> Self {
        TextRenderer { width }
    }

    fn centered(&self, text: &str) -> String {
        let len = text.chars().count();
        if len >= self.width {
            return text.to_string();
        }
        format!("{}{}", " ".repeat((self.width - len) / 2), text)
    }

    fn rule(&self) -> String {
        "-".repeat(self.width)
    }
}

impl DocumentRenderer for TextRenderer {
    type Output = String;

    fn render(&self, document: &OrderDocument) -> String {
        let mut lines = vec![
            self.centered(&document.company_name),
            self.centered(&document.title),
            String::new(),
        ];

        lines.extend(
            document
                .header
                .iter()
                .map(|field| format!("{}: {}", field.label, field.value)),
        );

        lines.push(self.rule());
        lines.extend(table_lines(&document.items));
        lines.push(self.rule());
        lines.push(String::new());

        lines.push(self.centered(&document.summary_title));
        lines.extend(table_lines(&document.summary));
        lines.push(String::new());

        lines.push(self.centered(&document.footer));

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

/// Lays a table out with left-aligned, padded columns.
pub fn table_lines(table: &Table) -> Vec<String> {
    let mut widths: Vec<usize> = table.columns.iter().map(|c| c.chars().count()).collect();
    for row in &table.rows {
        for (i, cell) in row.iter().enumerate() {
            let len = cell.chars().count();
            match widths.get_mut(i) {
                Some(width) => *width = (*width).max(len),
                None => widths.push(len),
            }
        }
    }

    let format_row = |cells: &[String]| -> String {
        let padded: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let pad = widths[i].saturating_sub(cell.chars().count());
                format!("{cell}{}", " ".repeat(pad))
            })
            .collect();
        padded.join(" | ").trim_end().to_string()
    };

    let mut lines = Vec::with_capacity(table.rows.len() + 2);
    lines.push(format_row(table.columns.as_slice()));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    lines.extend(table.rows.iter().map(|row| format_row(row.as_slice())));
    lines
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{build_order_document, DocumentSettings};
    use crate::money::Rupiah;
    use crate::types::{LineItem, Order};

    fn sample_document() -> OrderDocument {
        let order = Order {
            customer_name: "Toko Makmur".to_string(),
            so_number: "SO-001".to_string(),
            po_date: Some("2024-03-05".to_string()),
            items: vec![LineItem::new(2, Rupiah::new(500_000.0)).named("Paku")],
            ..Order::default()
        };
        build_order_document(&order, &order.totals(), &DocumentSettings::default())
    }

    #[test]
    fn test_text_contains_all_sections() {
        let text = TextRenderer::default().render(&sample_document());

        assert!(text.contains("PT Singa Perkasa"));
        assert!(text.contains("Sales Order Report"));
        assert!(text.contains("Customer Name: Toko Makmur"));
        assert!(text.contains("PO Date: 5 Maret 2024"));
        assert!(text.contains("Summary"));
        assert!(text.contains("Rp\u{a0}1.000.000,00"));
        assert!(text.ends_with("PT Singa Perkasa\n"));
    }

    #[test]
    fn test_table_columns_are_aligned() {
        let table = Table {
            columns: vec!["Qty".to_string(), "Item".to_string()],
            rows: vec![
                vec!["12".to_string(), "Baja Ringan".to_string()],
                vec!["1".to_string(), "Paku".to_string()],
            ],
        };

        let lines = table_lines(&table);
        assert_eq!(lines[0], "Qty | Item");
        assert_eq!(lines[1], "----+------------");
        assert_eq!(lines[2], "12  | Baja Ringan");
        assert_eq!(lines[3], "1   | Paku");
    }

    #[test]
    fn test_centering_respects_width() {
        let renderer = TextRenderer::new(10);
        assert_eq!(renderer.centered("abcd"), "   abcd");
        assert_eq!(renderer.centered("abcdefghijkl"), "abcdefghijkl");
    }
}

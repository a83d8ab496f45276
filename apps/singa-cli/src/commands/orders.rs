//! `singa orders ...`: the sales order list, detail and export screens.

use anyhow::{bail, Context as _, Result};
use chrono::NaiveDate;
use clap::Subcommand;
use tracing::warn;

use singa_core::validation::validate_search_query;
use singa_core::{
    build_order_document, filter_orders, format_currency, format_date, CurrencyStyle,
    DocumentSettings, Language, Order,
};

use super::{parse_date, print_document, print_table, Context};

#[derive(Debug, Subcommand)]
pub enum OrdersCommand {
    /// List sales orders
    List {
        /// Match customer name, SO number or PO number
        #[arg(short, long, default_value = "")]
        search: String,

        /// Only orders whose PO date is this day (YYYY-MM-DD)
        #[arg(short, long, value_parser = parse_date)]
        date: Option<NaiveDate>,

        /// Currency style for amounts (locale or grouped)
        #[arg(long)]
        style: Option<CurrencyStyle>,
    },

    /// Show one sales order with its totals
    Show {
        /// SO number
        so_number: String,
    },

    /// Print the sales order report document
    Export {
        /// SO number
        so_number: String,

        /// Label language (en or id)
        #[arg(short, long)]
        lang: Option<Language>,

        /// Print as plain text instead of JSON
        #[arg(long)]
        text: bool,
    },

    /// Delete a sales order
    Delete {
        /// SO number
        so_number: String,
    },
}

pub async fn run(command: OrdersCommand, ctx: &Context) -> Result<()> {
    match command {
        OrdersCommand::List {
            search,
            date,
            style,
        } => list(ctx, &search, date, style.unwrap_or(ctx.settings.currency_style)).await,
        OrdersCommand::Show { so_number } => show(ctx, &so_number).await,
        OrdersCommand::Export {
            so_number,
            lang,
            text,
        } => export(ctx, &so_number, lang, text).await,
        OrdersCommand::Delete { so_number } => delete(ctx, &so_number).await,
    }
}

async fn list(
    ctx: &Context,
    search: &str,
    date: Option<NaiveDate>,
    style: CurrencyStyle,
) -> Result<()> {
    let search = validate_search_query(search)?;
    let orders = ctx.backend.orders.list().await?;

    let rows = filter_orders(&orders, &search, date)
        .into_iter()
        .map(|order| {
            vec![
                order.so_number.clone(),
                order.po_number.clone(),
                order.customer_name.clone(),
                format_date(order.po_date.as_deref()),
                format_currency(order.totals().grand_total.value(), style),
            ]
        })
        .collect();

    print_table(
        &["SO", "PO", "Customer", "PO Date", "Grand Total"],
        rows,
        "No sales orders found.",
    );
    Ok(())
}

async fn show(ctx: &Context, so_number: &str) -> Result<()> {
    let order = ctx.backend.orders.find_by_so_number(so_number).await?;
    let style = ctx.settings.currency_style;
    let totals = order.totals();
    let money = |amount: f64| format_currency(amount, style);

    println!("SO Number:        {}", order.so_number);
    println!("PO Number:        {}", order.po_number);
    println!("PO Date:          {}", format_date(order.po_date.as_deref()));
    println!("Customer:         {}", order.customer_name);
    println!("Address:          {}", order.customer_address);
    println!("Payment Type:     {}", order.payment_type);
    println!("Payment Date:     {}", format_date(order.payment_date.as_deref()));
    println!();

    let rows = order
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
        .collect();
    print_table(
        &["Qty", "Packing", "Item", "Price", "Total"],
        rows,
        "(no items)",
    );
    println!();

    println!("Sub Total:        {}", money(totals.sub_total.value()));
    println!("Discount:         {}", money(totals.discount_amount.value()));
    println!("Tax:              {}", money(totals.tax_amount.value()));
    println!("Down Payment:     {}", money(order.adjustments.down_payment.value()));
    println!("Grand Total:      {}", money(totals.grand_total.value()));

    if totals.is_credit_balance() {
        warn!(so_number = %order.so_number, "Grand total is negative (credit balance)");
    }
    Ok(())
}

async fn export(ctx: &Context, so_number: &str, lang: Option<Language>, as_text: bool) -> Result<()> {
    let order = ctx.backend.orders.find_by_so_number(so_number).await?;
    let settings = settings_for(&ctx.settings, lang);

    let document = build_order_document(&order, &order.totals(), &settings);
    print_document(&document, as_text)
}

async fn delete(ctx: &Context, so_number: &str) -> Result<()> {
    let order = ctx.backend.orders.find_by_so_number(so_number).await?;
    let id = order_id(&order)?;

    ctx.backend
        .orders
        .delete(id)
        .await
        .with_context(|| format!("deleting sales order {so_number}"))?;

    println!("Deleted sales order {so_number}.");
    Ok(())
}

pub(crate) fn order_id(order: &Order) -> Result<&str> {
    match order.id.as_deref() {
        Some(id) if !id.is_empty() => Ok(id),
        _ => bail!("sales order {} has no backend id", order.so_number),
    }
}

pub(crate) fn settings_for(base: &DocumentSettings, lang: Option<Language>) -> DocumentSettings {
    DocumentSettings {
        language: lang.unwrap_or(base.language),
        ..base.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_flag_overrides_settings() {
        let base = DocumentSettings::default();
        assert_eq!(settings_for(&base, None), base);
        assert_eq!(
            settings_for(&base, Some(Language::Indonesian)).language,
            Language::Indonesian
        );
    }

    #[test]
    fn test_order_id_required() {
        let order = Order {
            so_number: "SO-1".to_string(),
            ..Order::default()
        };
        assert!(order_id(&order).is_err());

        let order = Order {
            id: Some("65f0".to_string()),
            ..order
        };
        assert_eq!(order_id(&order).unwrap(), "65f0");
    }
}

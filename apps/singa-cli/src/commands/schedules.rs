//! `singa schedules ...`: the delivery schedule screens.

use anyhow::{Context as _, Result};
use chrono::NaiveDate;
use clap::Subcommand;

use singa_api::repository::delivery_schedule::link_orders;
use singa_core::validation::validate_search_query;
use singa_core::{
    build_delivery_document, build_order_document, filter_schedules, format_currency,
    format_date, CurrencyStyle, DeliverySchedule, Language,
};

use super::orders::settings_for;
use super::{parse_date, print_document, print_table, Context};

#[derive(Debug, Subcommand)]
pub enum SchedulesCommand {
    /// List delivery schedules
    List {
        /// Match customer name
        #[arg(short, long, default_value = "")]
        search: String,

        /// Only deliveries on this day (YYYY-MM-DD)
        #[arg(short, long, value_parser = parse_date)]
        date: Option<NaiveDate>,

        /// Currency style for amounts (locale or grouped)
        #[arg(long)]
        style: Option<CurrencyStyle>,
    },

    /// Book a delivery for a sales order
    Create {
        /// SO number of the order to deliver
        #[arg(short = 'o', long = "order")]
        so_number: String,

        /// Delivery date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,
    },

    /// Move a delivery to another date
    Reschedule {
        /// Schedule id
        id: String,

        /// New delivery date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,
    },

    /// Print the delivery document of a schedule
    Export {
        /// Schedule id
        id: String,

        /// Print the sales order report of the linked order instead
        #[arg(long)]
        report: bool,

        /// Label language (en or id)
        #[arg(short, long)]
        lang: Option<Language>,

        /// Print as plain text instead of JSON
        #[arg(long)]
        text: bool,
    },

    /// Delete a delivery schedule
    Delete {
        /// Schedule id
        id: String,
    },
}

pub async fn run(command: SchedulesCommand, ctx: &Context) -> Result<()> {
    match command {
        SchedulesCommand::List {
            search,
            date,
            style,
        } => list(ctx, &search, date, style.unwrap_or(ctx.settings.currency_style)).await,
        SchedulesCommand::Create { so_number, date } => create(ctx, &so_number, &date).await,
        SchedulesCommand::Reschedule { id, date } => {
            ctx.backend.schedules.reschedule(&id, &date).await?;
            println!("Schedule {id} moved to {}.", format_date(Some(date.trim())));
            Ok(())
        }
        SchedulesCommand::Export {
            id,
            report,
            lang,
            text,
        } => export(ctx, &id, report, lang, text).await,
        SchedulesCommand::Delete { id } => {
            ctx.backend.schedules.delete(&id).await?;
            println!("Deleted schedule {id}.");
            Ok(())
        }
    }
}

/// Lists schedules with their order snapshots attached.
async fn load_schedules(ctx: &Context) -> Result<Vec<DeliverySchedule>> {
    let mut schedules = ctx.backend.schedules.list().await?;
    attach_orders(ctx, &mut schedules).await?;
    Ok(schedules)
}

/// Fetches orders only when some record carried a bare order id.
async fn attach_orders(ctx: &Context, schedules: &mut [DeliverySchedule]) -> Result<()> {
    if schedules.iter().any(|s| s.order.is_none() && !s.linked_order_id.is_empty()) {
        let orders = ctx.backend.orders.list().await?;
        link_orders(schedules, &orders);
    }
    Ok(())
}

async fn list(
    ctx: &Context,
    search: &str,
    date: Option<NaiveDate>,
    style: CurrencyStyle,
) -> Result<()> {
    let search = validate_search_query(search)?;
    let schedules = load_schedules(ctx).await?;

    let rows = filter_schedules(&schedules, &search, date)
        .into_iter()
        .map(|schedule| {
            let (items, total) = match &schedule.order {
                Some(order) => (
                    order
                        .items
                        .iter()
                        .map(|item| format!("{} {}", item.quantity, item.item_name))
                        .collect::<Vec<_>>()
                        .join(", "),
                    format_currency(order.totals().grand_total.value(), style),
                ),
                None => (String::new(), String::new()),
            };

            vec![
                schedule.id.clone().unwrap_or_default(),
                format_date(schedule.delivery_date.as_deref()),
                schedule.customer_name.clone(),
                schedule.so_number().to_string(),
                items,
                total,
            ]
        })
        .collect();

    print_table(
        &["ID", "Delivery Date", "Customer", "SO", "Items", "Total"],
        rows,
        "No delivery schedules found.",
    );
    Ok(())
}

async fn create(ctx: &Context, so_number: &str, date: &str) -> Result<()> {
    let order = ctx.backend.orders.find_by_so_number(so_number).await?;

    ctx.backend
        .schedules
        .create(&order, date)
        .await
        .with_context(|| format!("scheduling delivery for {so_number}"))?;

    println!(
        "Delivery for {} scheduled on {}.",
        order.so_number,
        format_date(Some(date.trim()))
    );
    Ok(())
}

async fn export(
    ctx: &Context,
    id: &str,
    report: bool,
    lang: Option<Language>,
    as_text: bool,
) -> Result<()> {
    let mut schedule = ctx.backend.schedules.find(id).await?;
    attach_orders(ctx, std::slice::from_mut(&mut schedule)).await?;

    let settings = settings_for(&ctx.settings, lang);

    let document = if report {
        let order = schedule
            .order
            .as_ref()
            .with_context(|| format!("schedule {id} has no linked sales order"))?;
        build_order_document(order, &order.totals(), &settings)
    } else {
        build_delivery_document(&schedule, &settings)
    };

    print_document(&document, as_text)
}

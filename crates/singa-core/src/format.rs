//! # Currency & Date Formatters
//!
//! ## Two Currency Conventions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CurrencyStyle::Locale                CurrencyStyle::Grouped            │
//! │  ─────────────────────                ──────────────────────            │
//! │  id-ID locale currency text           "Rp " + id-ID grouped number      │
//! │                                                                         │
//! │  Rp␣1.920.000,00                      Rp 1.920.000                      │
//! │  Rp␣12,50                             Rp 12,5                           │
//! │  -Rp␣5.000,00                         Rp -5.000                         │
//! │                                                                         │
//! │  ␣ = U+00A0 no-break space            ordinary space, ≤ 3 decimals      │
//! │  always 2 decimals                    trailing zeros dropped            │
//! │                                                                         │
//! │  Used by: documents, order screens    Used by: schedule screens         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both stay available by name: swapping one for the other would change
//! text customers already see on printed documents.
//!
//! ## Dates
//! Dates render as `D MonthName YYYY` with Indonesian month names
//! ("5 Maret 2024"). Missing or unreadable input renders as `""`.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::BUSINESS_UTC_OFFSET_SECS;

// =============================================================================
// Currency
// =============================================================================

/// Named currency formatting conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyStyle {
    /// id-ID locale currency style, two decimals.
    #[default]
    Locale,
    /// Manual `"Rp "` prefix with id-ID digit grouping.
    Grouped,
}

impl FromStr for CurrencyStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "locale" => Ok(CurrencyStyle::Locale),
            "grouped" => Ok(CurrencyStyle::Grouped),
            other => Err(format!("unknown currency style '{other}' (expected locale or grouped)")),
        }
    }
}

impl fmt::Display for CurrencyStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurrencyStyle::Locale => f.write_str("locale"),
            CurrencyStyle::Grouped => f.write_str("grouped"),
        }
    }
}

/// No-break space the id-ID locale puts between `Rp` and the number.
const NBSP: char = '\u{a0}';

/// Formats an amount as rupiah text.
///
/// Non-finite amounts format as zero. A value that rounds to zero never
/// carries a minus sign.
///
/// ## Example
/// ```rust
/// use singa_core::format::{format_currency, CurrencyStyle};
///
/// assert_eq!(format_currency(1_920_000.0, CurrencyStyle::Locale), "Rp\u{a0}1.920.000,00");
/// assert_eq!(format_currency(1_920_000.0, CurrencyStyle::Grouped), "Rp 1.920.000");
/// ```
pub fn format_currency(amount: f64, style: CurrencyStyle) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };

    match style {
        CurrencyStyle::Locale => {
            let (int_part, frac_part) = split_fixed(amount.abs(), 2);
            let sign = if is_visibly_negative(amount, &int_part, &frac_part) {
                "-"
            } else {
                ""
            };
            format!("{sign}Rp{NBSP}{},{frac_part}", group_thousands(&int_part))
        }
        CurrencyStyle::Grouped => {
            let (int_part, frac_part) = split_fixed(amount.abs(), 3);
            let frac_part = frac_part.trim_end_matches('0');
            let sign = if is_visibly_negative(amount, &int_part, frac_part) {
                "-"
            } else {
                ""
            };

            let mut out = format!("Rp {sign}{}", group_thousands(&int_part));
            if !frac_part.is_empty() {
                out.push(',');
                out.push_str(frac_part);
            }
            out
        }
    }
}

/// Rounds `value` to `decimals` fraction digits, ties away from zero, and
/// splits at the point. The fraction is zero-padded to `decimals` digits.
fn split_fixed(value: f64, decimals: u32) -> (String, String) {
    let fixed = match Decimal::from_f64_retain(value) {
        Some(exact) => exact
            .round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero)
            .to_string(),
        // beyond Decimal's range there are no fraction digits left to round
        None => format!("{value:.0}"),
    };

    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let width = decimals as usize;
    (int_part.to_string(), format!("{frac_part:0<width$}"))
}

fn is_visibly_negative(amount: f64, int_part: &str, frac_part: &str) -> bool {
    amount < 0.0
        && int_part
            .chars()
            .chain(frac_part.chars())
            .any(|c| c != '0')
}

/// Inserts `.` between groups of three digits.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

// =============================================================================
// Dates
// =============================================================================

/// Indonesian month names, January first.
pub const INDONESIAN_MONTHS: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Reads the calendar day of an API date.
///
/// ## Accepted Shapes
/// - `2024-03-05` (date inputs)
/// - `2024-03-04T17:00:00.000Z` (RFC 3339; converted to WIB first, so
///   this one is 5 March)
/// - `2024-03-05T10:30:00.000` (naive timestamps, taken as-is)
///
/// Returns `None` for empty or unreadable input.
pub fn parse_business_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(input) {
        let wib = FixedOffset::east_opt(BUSINESS_UTC_OFFSET_SECS)?;
        return Some(timestamp.with_timezone(&wib).date_naive());
    }

    NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S"))
        .ok()
        .map(|timestamp| timestamp.date())
}

/// Formats an optional API date as `D MonthName YYYY`.
///
/// ## Example
/// ```rust
/// use singa_core::format::format_date;
///
/// assert_eq!(format_date(Some("2024-03-05")), "5 Maret 2024");
/// assert_eq!(format_date(None), "");
/// assert_eq!(format_date(Some("not a date")), "");
/// ```
pub fn format_date(input: Option<&str>) -> String {
    input
        .and_then(parse_business_date)
        .map(format_naive_date)
        .unwrap_or_default()
}

/// Formats a calendar day as `D MonthName YYYY`.
pub fn format_naive_date(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        INDONESIAN_MONTHS[date.month0() as usize],
        date.year()
    )
}

// =============================================================================
// Unit Tests
// =============================================================================

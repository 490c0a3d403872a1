//! Static-rate currency conversion and amount formatting.
//!
//! Rates are a fixed table quoted in rupees per unit and are refreshed by
//! editing this file, not fetched at runtime. Every conversion pivots through
//! INR so the table needs one entry per currency.

#[cfg(test)]
#[path = "currency_test.rs"]
mod currency_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ToolError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Inr,
    Usd,
    Gbp,
    Eur,
    Cad,
    Aud,
    Nzd,
    Sgd,
    Aed,
}

impl Currency {
    pub const ALL: [Currency; 9] = [
        Currency::Inr,
        Currency::Usd,
        Currency::Gbp,
        Currency::Eur,
        Currency::Cad,
        Currency::Aud,
        Currency::Nzd,
        Currency::Sgd,
        Currency::Aed,
    ];

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Inr => "INR",
            Self::Usd => "USD",
            Self::Gbp => "GBP",
            Self::Eur => "EUR",
            Self::Cad => "CAD",
            Self::Aud => "AUD",
            Self::Nzd => "NZD",
            Self::Sgd => "SGD",
            Self::Aed => "AED",
        }
    }

    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Inr => "₹",
            Self::Usd => "$",
            Self::Gbp => "£",
            Self::Eur => "€",
            Self::Cad => "C$",
            Self::Aud => "A$",
            Self::Nzd => "NZ$",
            Self::Sgd => "S$",
            Self::Aed => "AED ",
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Inr => "Indian Rupee",
            Self::Usd => "US Dollar",
            Self::Gbp => "British Pound",
            Self::Eur => "Euro",
            Self::Cad => "Canadian Dollar",
            Self::Aud => "Australian Dollar",
            Self::Nzd => "New Zealand Dollar",
            Self::Sgd => "Singapore Dollar",
            Self::Aed => "UAE Dirham",
        }
    }

    /// Rupees per one unit of this currency.
    #[must_use]
    pub fn inr_per_unit(self) -> f64 {
        match self {
            Self::Inr => 1.0,
            Self::Usd => 83.2,
            Self::Gbp => 105.6,
            Self::Eur => 90.4,
            Self::Cad => 61.3,
            Self::Aud => 54.9,
            Self::Nzd => 50.2,
            Self::Sgd => 61.8,
            Self::Aed => 22.65,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| ToolError::UnknownCurrency(code.to_owned()))
    }
}

/// Convert `amount` between two currencies using the static table.
#[must_use]
pub fn convert(amount: f64, from: Currency, to: Currency) -> f64 {
    if from == to {
        return amount;
    }
    amount * from.inr_per_unit() / to.inr_per_unit()
}

/// Parse a user-typed amount. Anything unusable becomes zero.
#[must_use]
pub fn parse_amount(raw: &str) -> f64 {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',' && *c != '_').collect();
    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => v,
        _ => 0.0,
    }
}

/// Format with the currency symbol, grouping and two decimals.
#[must_use]
pub fn format_amount(amount: f64, currency: Currency) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let sign = if amount < 0.0 { "-" } else { "" };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;
    let grouped = if currency == Currency::Inr { group_indian(whole) } else { group_thousands(whole) };
    format!("{sign}{}{grouped}.{fraction:02}", currency.symbol())
}

/// Short rupee label for slider captions, e.g. `₹12.5 L` or `₹1.2 Cr`.
#[must_use]
pub fn format_compact_inr(amount: f64) -> String {
    const LAKH: f64 = 100_000.0;
    const CRORE: f64 = 10_000_000.0;
    if amount >= CRORE {
        format!("₹{} Cr", trim_one_decimal(amount / CRORE))
    } else if amount >= LAKH {
        format!("₹{} L", trim_one_decimal(amount / LAKH))
    } else {
        let mut full = format_amount(amount, Currency::Inr);
        full.truncate(full.len() - 3);
        full
    }
}

fn trim_one_decimal(value: f64) -> String {
    let text = format!("{value:.1}");
    text.strip_suffix(".0").map_or(text.clone(), str::to_owned)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Lakh/crore grouping: the last three digits, then pairs.
fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut out = String::with_capacity(digits.len() + digits.len() / 2);
    for (i, ch) in head.chars().enumerate() {
        if i > 0 && (head.len() - i) % 2 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push(',');
    out.push_str(tail);
    out
}

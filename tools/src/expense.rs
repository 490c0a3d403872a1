//! Study-abroad expense sheet with conversion into a display currency.

#[cfg(test)]
#[path = "expense_test.rs"]
mod expense_test;

use serde::{Deserialize, Serialize};

use crate::currency::{self, Currency};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    Tuition,
    Accommodation,
    Food,
    Transport,
    Insurance,
    Miscellaneous,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 6] = [
        ExpenseCategory::Tuition,
        ExpenseCategory::Accommodation,
        ExpenseCategory::Food,
        ExpenseCategory::Transport,
        ExpenseCategory::Insurance,
        ExpenseCategory::Miscellaneous,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Tuition => "Tuition",
            Self::Accommodation => "Accommodation",
            Self::Food => "Food & groceries",
            Self::Transport => "Transport",
            Self::Insurance => "Health insurance",
            Self::Miscellaneous => "Miscellaneous",
        }
    }
}

/// Typical monthly costs for one destination, in its local currency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostProfile {
    pub currency: Currency,
    pub tuition: f64,
    pub accommodation: f64,
    pub food: f64,
    pub transport: f64,
    pub insurance: f64,
    pub miscellaneous: f64,
}

impl CostProfile {
    #[must_use]
    pub fn monthly(&self, category: ExpenseCategory) -> f64 {
        match category {
            ExpenseCategory::Tuition => self.tuition,
            ExpenseCategory::Accommodation => self.accommodation,
            ExpenseCategory::Food => self.food,
            ExpenseCategory::Transport => self.transport,
            ExpenseCategory::Insurance => self.insurance,
            ExpenseCategory::Miscellaneous => self.miscellaneous,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExpenseItem {
    pub category: ExpenseCategory,
    pub monthly: f64,
}

/// Editable monthly expenses, all in one source currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseSheet {
    pub currency: Currency,
    pub items: Vec<ExpenseItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExpenseSummary {
    pub currency: Currency,
    pub monthly: f64,
    pub annual: f64,
}

impl ExpenseSheet {
    /// Sheet with every category at zero.
    #[must_use]
    pub fn empty(currency: Currency) -> Self {
        Self {
            currency,
            items: ExpenseCategory::ALL.into_iter().map(|category| ExpenseItem { category, monthly: 0.0 }).collect(),
        }
    }

    /// Sheet seeded from a destination's typical costs.
    #[must_use]
    pub fn for_profile(profile: &CostProfile) -> Self {
        Self {
            currency: profile.currency,
            items: ExpenseCategory::ALL
                .into_iter()
                .map(|category| ExpenseItem { category, monthly: profile.monthly(category) })
                .collect(),
        }
    }

    /// Update one category from raw user input; unusable input stores zero.
    pub fn set_raw(&mut self, category: ExpenseCategory, raw: &str) {
        let value = currency::parse_amount(raw);
        if let Some(item) = self.items.iter_mut().find(|i| i.category == category) {
            item.monthly = value;
        } else {
            self.items.push(ExpenseItem { category, monthly: value });
        }
    }

    #[must_use]
    pub fn monthly_total(&self) -> f64 {
        self.items.iter().map(|i| i.monthly).sum()
    }

    #[must_use]
    pub fn annual_total(&self) -> f64 {
        self.monthly_total() * 12.0
    }

    /// Totals expressed in `target`.
    #[must_use]
    pub fn converted(&self, target: Currency) -> ExpenseSummary {
        let monthly = currency::convert(self.monthly_total(), self.currency, target);
        ExpenseSummary { currency: target, monthly, annual: monthly * 12.0 }
    }
}

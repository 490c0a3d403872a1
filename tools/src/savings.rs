//! Savings goal planner: how much to set aside each month.

#[cfg(test)]
#[path = "savings_test.rs"]
mod savings_test;

use serde::{Deserialize, Serialize};

use crate::emi::monthly_rate;

pub const MONTHS_MAX: u32 = 120;
pub const RETURN_MAX_PCT: f64 = 15.0;

/// Monthly deposit (end of month) that grows to `goal` after `months`.
#[must_use]
pub fn monthly_contribution(goal: f64, months: u32, annual_return_pct: f64) -> f64 {
    if months == 0 {
        return goal;
    }
    let r = monthly_rate(annual_return_pct);
    let n = f64::from(months);
    if r.abs() < f64::EPSILON {
        return goal / n;
    }
    goal * r / ((1.0 + r).powf(n) - 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavingsPlan {
    pub goal: f64,
    pub months: u32,
    pub annual_return_pct: f64,
}

impl SavingsPlan {
    /// Build a plan with inputs clamped to the planner's ranges.
    #[must_use]
    pub fn new(goal: f64, months: u32, annual_return_pct: f64) -> Self {
        Self {
            goal: if goal.is_finite() { goal.max(0.0) } else { 0.0 },
            months: months.clamp(1, MONTHS_MAX),
            annual_return_pct: crate::emi::clamp_finite(annual_return_pct, 0.0, RETURN_MAX_PCT),
        }
    }

    #[must_use]
    pub fn contribution(&self) -> f64 {
        monthly_contribution(self.goal, self.months, self.annual_return_pct)
    }

    /// Balance after `month` deposits.
    #[must_use]
    pub fn projected_balance(&self, month: u32) -> f64 {
        let month = month.min(self.months);
        let c = self.contribution();
        let r = monthly_rate(self.annual_return_pct);
        if r.abs() < f64::EPSILON {
            return c * f64::from(month);
        }
        c * ((1.0 + r).powf(f64::from(month)) - 1.0) / r
    }

    #[must_use]
    pub fn total_contributed(&self) -> f64 {
        self.contribution() * f64::from(self.months)
    }

    #[must_use]
    pub fn returns_earned(&self) -> f64 {
        (self.goal - self.total_contributed()).max(0.0)
    }
}

//! EMI and amortization math for the loan calculators.
//!
//! DESIGN
//! ======
//! Repayment uses the standard fixed-rate amortization formula on a monthly
//! rate. When a course (moratorium) period is given, simple interest accrues
//! on the disbursed principal for that period and is capitalized before the
//! first installment. Out-of-range input is clamped, never rejected.

#[cfg(test)]
#[path = "emi_test.rs"]
mod emi_test;

use serde::{Deserialize, Serialize};

pub const PRINCIPAL_MIN: f64 = 100_000.0;
pub const PRINCIPAL_MAX: f64 = 30_000_000.0;
pub const RATE_MIN_PCT: f64 = 8.0;
pub const RATE_MAX_PCT: f64 = 20.0;
pub const TENURE_MIN_YEARS: u32 = 1;
pub const TENURE_MAX_YEARS: u32 = 15;
pub const COURSE_MAX_MONTHS: u32 = 60;

/// Raw calculator input as held by a page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanInput {
    pub principal: f64,
    pub annual_rate_pct: f64,
    pub tenure_years: u32,
    /// Moratorium length in months; zero for a plain EMI calculation.
    pub course_months: u32,
}

impl Default for LoanInput {
    fn default() -> Self {
        Self { principal: 2_000_000.0, annual_rate_pct: 10.5, tenure_years: 10, course_months: 0 }
    }
}

impl LoanInput {
    /// Clamp every field to the calculator bounds.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            principal: clamp_finite(self.principal, PRINCIPAL_MIN, PRINCIPAL_MAX),
            annual_rate_pct: clamp_finite(self.annual_rate_pct, RATE_MIN_PCT, RATE_MAX_PCT),
            tenure_years: self.tenure_years.clamp(TENURE_MIN_YEARS, TENURE_MAX_YEARS),
            course_months: self.course_months.min(COURSE_MAX_MONTHS),
        }
    }

    #[must_use]
    pub fn tenure_months(&self) -> u32 {
        self.tenure_years * 12
    }
}

/// Clamp to `[min, max]`, sending NaN and infinities to `min`.
#[must_use]
pub fn clamp_finite(value: f64, min: f64, max: f64) -> f64 {
    if value.is_finite() { value.clamp(min, max) } else { min }
}

/// Totals for a single amortized loan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmiBreakdown {
    pub principal: f64,
    pub emi: f64,
    pub total_interest: f64,
    pub total_payment: f64,
}

/// Result of the repayment calculator with a moratorium period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RepaymentPlan {
    /// Simple interest accrued while studying.
    pub accrued_interest: f64,
    /// Principal plus accrued interest, the amount actually amortized.
    pub effective_principal: f64,
    pub breakdown: EmiBreakdown,
}

/// One year of an amortization schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub year: u32,
    pub principal_paid: f64,
    pub interest_paid: f64,
    pub closing_balance: f64,
}

#[must_use]
pub fn monthly_rate(annual_rate_pct: f64) -> f64 {
    annual_rate_pct / 12.0 / 100.0
}

/// Equated monthly installment for `principal` over `months` installments.
#[must_use]
pub fn emi(principal: f64, annual_rate_pct: f64, months: u32) -> f64 {
    if months == 0 {
        return principal;
    }
    let n = f64::from(months);
    let r = monthly_rate(annual_rate_pct);
    if r.abs() < f64::EPSILON {
        return principal / n;
    }
    let growth = (1.0 + r).powf(n);
    principal * r * growth / (growth - 1.0)
}

#[must_use]
pub fn breakdown(principal: f64, annual_rate_pct: f64, months: u32) -> EmiBreakdown {
    let emi = emi(principal, annual_rate_pct, months);
    let total_payment = emi * f64::from(months.max(1));
    EmiBreakdown { principal, emi, total_interest: total_payment - principal, total_payment }
}

/// Simple interest accrued on `principal` over `course_months`.
#[must_use]
pub fn course_interest(principal: f64, annual_rate_pct: f64, course_months: u32) -> f64 {
    principal * (annual_rate_pct / 100.0) * (f64::from(course_months) / 12.0)
}

/// Full repayment calculation: clamp, capitalize moratorium interest, amortize.
#[must_use]
pub fn repayment_plan(input: &LoanInput) -> RepaymentPlan {
    let input = input.clamped();
    let accrued_interest = course_interest(input.principal, input.annual_rate_pct, input.course_months);
    let effective_principal = input.principal + accrued_interest;
    RepaymentPlan {
        accrued_interest,
        effective_principal,
        breakdown: breakdown(effective_principal, input.annual_rate_pct, input.tenure_months()),
    }
}

/// Fraction of the total payment that goes to interest.
#[must_use]
pub fn interest_share(breakdown: &EmiBreakdown) -> f64 {
    if breakdown.total_payment <= 0.0 {
        return 0.0;
    }
    (breakdown.total_interest / breakdown.total_payment).clamp(0.0, 1.0)
}

/// Amortization schedule rolled up per year.
#[must_use]
pub fn yearly_schedule(principal: f64, annual_rate_pct: f64, months: u32) -> Vec<ScheduleRow> {
    let installment = emi(principal, annual_rate_pct, months);
    let r = monthly_rate(annual_rate_pct);
    let mut balance = principal;
    let mut rows = Vec::with_capacity(months.div_ceil(12) as usize);
    let mut current = ScheduleRow { year: 1, principal_paid: 0.0, interest_paid: 0.0, closing_balance: balance };

    for month in 1..=months {
        let interest = balance * r;
        let principal_part = (installment - interest).min(balance);
        balance -= principal_part;
        current.interest_paid += interest;
        current.principal_paid += principal_part;
        current.closing_balance = balance.max(0.0);

        if month % 12 == 0 || month == months {
            rows.push(current);
            current = ScheduleRow {
                year: current.year + 1,
                principal_paid: 0.0,
                interest_paid: 0.0,
                closing_balance: current.closing_balance,
            };
        }
    }
    rows
}

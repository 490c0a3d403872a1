//! Repayment calculator with a moratorium (course duration).
//!
//! Simple interest accrues on the full principal while the student is
//! studying; the accrued amount is capitalized before the EMI starts.

#[cfg(test)]
#[path = "loan_repayment_test.rs"]
mod loan_repayment_test;

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use tools::currency::{Currency, format_amount, format_compact_inr};
use tools::emi::{
    COURSE_MAX_MONTHS, LoanInput, PRINCIPAL_MAX, PRINCIPAL_MIN, RATE_MAX_PCT, RATE_MIN_PCT, TENURE_MAX_YEARS,
    TENURE_MIN_YEARS, interest_share, repayment_plan, yearly_schedule,
};

use crate::components::range_field::RangeField;
use crate::components::schedule_table::ScheduleTable;
use crate::components::split_bar::SplitBar;
use crate::pages::emi_calculator::{format_rate, format_years};
use crate::pages::page_title;

/// Two-year master's, the most common course length for borrowers.
const DEFAULT_COURSE_MONTHS: f64 = 24.0;

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn format_months(value: f64) -> String {
    match value.round() as u32 {
        0 => "None".to_owned(),
        1 => "1 month".to_owned(),
        n => format!("{n} months"),
    }
}

#[component]
pub fn LoanRepaymentPage() -> impl IntoView {
    let defaults = LoanInput::default();
    let principal = RwSignal::new(defaults.principal);
    let rate = RwSignal::new(defaults.annual_rate_pct);
    let years = RwSignal::new(f64::from(defaults.tenure_years));
    let course = RwSignal::new(DEFAULT_COURSE_MONTHS);

    let input = Memo::new(move |_| {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let (tenure_years, course_months) = (years.get().round() as u32, course.get().round() as u32);
        LoanInput { principal: principal.get(), annual_rate_pct: rate.get(), tenure_years, course_months }.clamped()
    });
    let plan = Memo::new(move |_| repayment_plan(&input.get()));
    let schedule = Signal::derive(move || {
        let input = input.get();
        yearly_schedule(plan.get().effective_principal, input.annual_rate_pct, input.tenure_months())
    });
    let inr = |v: f64| format_amount(v, Currency::Inr);

    view! {
        <Title text=page_title("Loan repayment calculator")/>
        <Meta name="description" content="See how interest during your course adds to what you repay on an education loan."/>
        <section class="calculator">
            <header class="calculator__header">
                <h1>"Loan repayment calculator"</h1>
                <p>
                    "Most education loans let you pause repayment while you study. Interest still accrues, and it is added to your loan before EMIs begin."
                </p>
            </header>
            <div class="calculator__body">
                <div class="calculator__inputs">
                    <RangeField id="repay-principal" label="Loan amount (₹)" min=PRINCIPAL_MIN max=PRINCIPAL_MAX step=50_000.0 value=principal format=format_compact_inr/>
                    <RangeField id="repay-rate" label="Interest rate (% p.a.)" min=RATE_MIN_PCT max=RATE_MAX_PCT step=0.05 value=rate format=format_rate/>
                    <RangeField id="repay-course" label="Course duration" min=0.0 max=f64::from(COURSE_MAX_MONTHS) step=1.0 value=course format=format_months/>
                    <RangeField
                        id="repay-tenure"
                        label="Repayment tenure (years)"
                        min=f64::from(TENURE_MIN_YEARS)
                        max=f64::from(TENURE_MAX_YEARS)
                        step=1.0
                        value=years
                        format=format_years
                    />
                </div>
                <div class="calculator__results">
                    <div class="result-card result-card--primary">
                        <span class="result-card__label">"EMI after course"</span>
                        <span class="result-card__value">{move || inr(plan.get().breakdown.emi)}</span>
                    </div>
                    <div class="result-card">
                        <span class="result-card__label">"Interest during course"</span>
                        <span class="result-card__value">{move || inr(plan.get().accrued_interest)}</span>
                    </div>
                    <div class="result-card">
                        <span class="result-card__label">"Amount to repay from"</span>
                        <span class="result-card__value">{move || inr(plan.get().effective_principal)}</span>
                    </div>
                    <div class="result-card">
                        <span class="result-card__label">"Total payment"</span>
                        <span class="result-card__value">{move || inr(plan.get().breakdown.total_payment)}</span>
                        <span class="result-card__note">
                            {move || format!("{:.0}% of it is interest", interest_share(&plan.get().breakdown) * 100.0)}
                        </span>
                    </div>
                    <SplitBar
                        principal=Signal::derive(move || input.get().principal)
                        interest=Signal::derive(move || plan.get().breakdown.total_payment - input.get().principal)
                    />
                </div>
            </div>
            <details class="calculator__schedule">
                <summary>"Year-wise repayment schedule"</summary>
                <ScheduleTable rows=schedule/>
            </details>
        </section>
    }
}

//! EMI calculator: principal, rate and tenure sliders with live results.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use tools::currency::{Currency, format_amount, format_compact_inr};
use tools::emi::{
    LoanInput, PRINCIPAL_MAX, PRINCIPAL_MIN, RATE_MAX_PCT, RATE_MIN_PCT, TENURE_MAX_YEARS, TENURE_MIN_YEARS,
    breakdown, yearly_schedule,
};

use crate::components::range_field::RangeField;
use crate::components::schedule_button::ScheduleButton;
use crate::components::schedule_table::ScheduleTable;
use crate::components::split_bar::SplitBar;
use crate::pages::page_title;

pub(crate) fn format_rate(value: f64) -> String {
    format!("{value:.1}%")
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn format_years(value: f64) -> String {
    match value.round() as u32 {
        1 => "1 yr".to_owned(),
        n => format!("{n} yrs"),
    }
}

#[component]
pub fn EmiCalculatorPage() -> impl IntoView {
    let defaults = LoanInput::default();
    let principal = RwSignal::new(defaults.principal);
    let rate = RwSignal::new(defaults.annual_rate_pct);
    let years = RwSignal::new(f64::from(defaults.tenure_years));

    let input = Memo::new(move |_| {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let tenure_years = years.get().round() as u32;
        LoanInput { principal: principal.get(), annual_rate_pct: rate.get(), tenure_years, course_months: 0 }.clamped()
    });
    let result = Memo::new(move |_| {
        let input = input.get();
        breakdown(input.principal, input.annual_rate_pct, input.tenure_months())
    });
    let schedule = Signal::derive(move || {
        let input = input.get();
        yearly_schedule(input.principal, input.annual_rate_pct, input.tenure_months())
    });

    view! {
        <Title text=page_title("Education loan EMI calculator")/>
        <Meta name="description" content="Calculate the monthly EMI, total interest and total repayment on an education loan."/>
        <section class="calculator">
            <header class="calculator__header">
                <h1>"Education loan EMI calculator"</h1>
                <p>"Move the sliders or type a value. Results update as you go."</p>
            </header>
            <div class="calculator__body">
                <div class="calculator__inputs">
                    <RangeField
                        id="emi-principal"
                        label="Loan amount (₹)"
                        min=PRINCIPAL_MIN
                        max=PRINCIPAL_MAX
                        step=50_000.0
                        value=principal
                        format=format_compact_inr
                    />
                    <RangeField
                        id="emi-rate"
                        label="Interest rate (% p.a.)"
                        min=RATE_MIN_PCT
                        max=RATE_MAX_PCT
                        step=0.05
                        value=rate
                        format=format_rate
                    />
                    <RangeField
                        id="emi-tenure"
                        label="Tenure (years)"
                        min=f64::from(TENURE_MIN_YEARS)
                        max=f64::from(TENURE_MAX_YEARS)
                        step=1.0
                        value=years
                        format=format_years
                    />
                </div>
                <div class="calculator__results">
                    <div class="result-card result-card--primary">
                        <span class="result-card__label">"Monthly EMI"</span>
                        <span class="result-card__value">{move || format_amount(result.get().emi, Currency::Inr)}</span>
                    </div>
                    <div class="result-card">
                        <span class="result-card__label">"Total interest"</span>
                        <span class="result-card__value">{move || format_amount(result.get().total_interest, Currency::Inr)}</span>
                    </div>
                    <div class="result-card">
                        <span class="result-card__label">"Total payment"</span>
                        <span class="result-card__value">{move || format_amount(result.get().total_payment, Currency::Inr)}</span>
                    </div>
                    <SplitBar
                        principal=Signal::derive(move || result.get().principal)
                        interest=Signal::derive(move || result.get().total_interest)
                    />
                    <ScheduleButton label="Talk to a loan expert"/>
                </div>
            </div>
            <details class="calculator__schedule">
                <summary>"Year-wise repayment schedule"</summary>
                <ScheduleTable rows=schedule/>
            </details>
        </section>
    }
}

//! Savings planner: monthly deposit needed to reach a goal.

#[cfg(test)]
#[path = "savings_calculator_test.rs"]
mod savings_calculator_test;

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use tools::currency::{Currency, format_amount, format_compact_inr};
use tools::savings::{MONTHS_MAX, RETURN_MAX_PCT, SavingsPlan};

use crate::components::range_field::RangeField;
use crate::pages::emi_calculator::format_rate;
use crate::pages::page_title;

const GOAL_MIN: f64 = 50_000.0;
const GOAL_MAX: f64 = 10_000_000.0;
const DEFAULT_GOAL: f64 = 1_500_000.0;
const DEFAULT_MONTHS: f64 = 24.0;
const DEFAULT_RETURN_PCT: f64 = 6.5;

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn format_months(value: f64) -> String {
    format!("{} mo", value.round() as u32)
}

/// Month numbers for the milestone table: every 12th month plus the last.
fn milestones(months: u32) -> Vec<u32> {
    let mut out: Vec<u32> = (12..months).step_by(12).collect();
    out.push(months);
    out
}

#[component]
pub fn SavingsCalculatorPage() -> impl IntoView {
    let goal = RwSignal::new(DEFAULT_GOAL);
    let months = RwSignal::new(DEFAULT_MONTHS);
    let rate = RwSignal::new(DEFAULT_RETURN_PCT);

    let plan = Memo::new(move |_| {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let months = months.get().round() as u32;
        SavingsPlan::new(goal.get(), months, rate.get())
    });
    let inr = |v: f64| format_amount(v, Currency::Inr);

    view! {
        <Title text=page_title("Savings planner")/>
        <Meta name="description" content="Work out how much to save every month for tuition, deposits and flights."/>
        <section class="calculator">
            <header class="calculator__header">
                <h1>"Savings planner"</h1>
                <p>"Set a target and a timeline. We assume monthly deposits earning a fixed annual return."</p>
            </header>
            <div class="calculator__body">
                <div class="calculator__inputs">
                    <RangeField id="save-goal" label="Savings goal (₹)" min=GOAL_MIN max=GOAL_MAX step=10_000.0 value=goal format=format_compact_inr/>
                    <RangeField id="save-months" label="Months to save" min=1.0 max=f64::from(MONTHS_MAX) step=1.0 value=months format=format_months/>
                    <RangeField id="save-rate" label="Expected return (% p.a.)" min=0.0 max=RETURN_MAX_PCT step=0.25 value=rate format=format_rate/>
                </div>
                <div class="calculator__results">
                    <div class="result-card result-card--primary">
                        <span class="result-card__label">"Save every month"</span>
                        <span class="result-card__value">{move || inr(plan.get().contribution())}</span>
                    </div>
                    <div class="result-card">
                        <span class="result-card__label">"You deposit"</span>
                        <span class="result-card__value">{move || inr(plan.get().total_contributed())}</span>
                    </div>
                    <div class="result-card">
                        <span class="result-card__label">"Returns earned"</span>
                        <span class="result-card__value">{move || inr(plan.get().returns_earned())}</span>
                    </div>
                </div>
            </div>
            <table class="rate-table">
                <caption>"Projected balance"</caption>
                <tbody>
                    {move || {
                        let plan = plan.get();
                        milestones(plan.months)
                            .into_iter()
                            .map(|month| {
                                view! {
                                    <tr>
                                        <th scope="row">{format!("Month {month}")}</th>
                                        <td>{inr(plan.projected_balance(month))}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </section>
    }
}

//! Cost-of-living calculator.
//!
//! Picking a destination seeds every category with that country's typical
//! monthly cost; the visitor can then overwrite any figure. Totals are shown
//! in local currency and in the display currency (rupees by default).

use content::countries::{COUNTRIES, find_country};
use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::hooks::use_query_map;
use tools::currency::{Currency, format_amount};
use tools::expense::{ExpenseCategory, ExpenseSheet};

use crate::pages::currency_converter::CurrencySelect;
use crate::pages::page_title;

fn sheet_for(slug: &str) -> ExpenseSheet {
    find_country(slug).map_or_else(|| ExpenseSheet::empty(Currency::Usd), |c| ExpenseSheet::for_profile(&c.costs))
}

#[component]
pub fn ExpenseCalculatorPage() -> impl IntoView {
    // `?country=<slug>` preselects a destination (linked from country pages).
    let first = use_query_map()
        .with_untracked(|q| q.get("country"))
        .filter(|slug| find_country(slug).is_some())
        .unwrap_or_else(|| COUNTRIES.first().map_or_else(String::new, |c| c.slug.to_owned()));
    let sheet = RwSignal::new(sheet_for(&first));
    let country = RwSignal::new(first);
    let display = RwSignal::new(Currency::Inr);

    let local_currency = move || sheet.with(|s| s.currency);
    let summary = move || sheet.with(|s| s.converted(display.get()));

    view! {
        <Title text=page_title("Cost of living calculator")/>
        <Meta name="description" content="Estimate monthly and yearly student living costs abroad in rupees."/>
        <section class="calculator">
            <header class="calculator__header">
                <h1>"Cost of living calculator"</h1>
                <p>"Typical monthly costs for a student. Edit any line to match your plans."</p>
            </header>
            <div class="calculator__body">
                <div class="calculator__inputs">
                    <div class="field">
                        <label class="field__label" for="expense-country">"Destination"</label>
                        <select
                            id="expense-country"
                            class="field__select"
                            prop:value=move || country.get()
                            on:change=move |ev| {
                                let slug = event_target_value(&ev);
                                sheet.set(sheet_for(&slug));
                                country.set(slug);
                            }
                        >
                            {COUNTRIES
                                .iter()
                                .map(|c| view! { <option value=c.slug>{format!("{} {}", c.flag, c.name)}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    {ExpenseCategory::ALL
                        .into_iter()
                        .map(|category| {
                            let id = format!("expense-{category:?}").to_lowercase();
                            let current = move || {
                                sheet.with(|s| {
                                    s.items
                                        .iter()
                                        .find(|i| i.category == category)
                                        .map_or(0.0, |i| i.monthly)
                                })
                            };
                            view! {
                                <div class="field field--inline">
                                    <label class="field__label" for=id.clone()>
                                        {category.label()}
                                        <span class="field__hint">{move || format!(" ({}/month)", local_currency().code())}</span>
                                    </label>
                                    <input
                                        id=id
                                        class="field__input"
                                        type="text"
                                        inputmode="decimal"
                                        prop:value=move || format!("{:.0}", current())
                                        on:change=move |ev| sheet.update(|s| s.set_raw(category, &event_target_value(&ev)))
                                    />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="calculator__results">
                    <div class="field">
                        <label class="field__label" for="expense-display">"Show totals in"</label>
                        <CurrencySelect id="expense-display" value=display/>
                    </div>
                    <div class="result-card result-card--primary">
                        <span class="result-card__label">"Per month"</span>
                        <span class="result-card__value">{move || format_amount(summary().monthly, summary().currency)}</span>
                        <span class="result-card__note">
                            {move || sheet.with(|s| format_amount(s.monthly_total(), s.currency))}
                        </span>
                    </div>
                    <div class="result-card">
                        <span class="result-card__label">"Per year"</span>
                        <span class="result-card__value">{move || format_amount(summary().annual, summary().currency)}</span>
                        <span class="result-card__note">
                            {move || sheet.with(|s| format_amount(s.annual_total(), s.currency))}
                        </span>
                    </div>
                    <a class="btn btn--ghost" href="/tools/emi-calculator">"See what a loan for this would cost"</a>
                </div>
            </div>
        </section>
    }
}

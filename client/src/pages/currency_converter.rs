//! Currency converter over a fixed reference-rate table.

use std::str::FromStr;

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use tools::currency::{Currency, convert, format_amount, parse_amount};

use crate::pages::page_title;

/// `<select>` over every supported currency, bound to `value`.
#[component]
pub(crate) fn CurrencySelect(#[prop(into)] id: String, value: RwSignal<Currency>) -> impl IntoView {
    view! {
        <select
            id=id
            class="field__select"
            prop:value=move || value.get().code()
            on:change=move |ev| {
                if let Ok(currency) = Currency::from_str(&event_target_value(&ev)) {
                    value.set(currency);
                }
            }
        >
            {Currency::ALL
                .into_iter()
                .map(|c| view! { <option value=c.code()>{format!("{} ({})", c.name(), c.code())}</option> })
                .collect_view()}
        </select>
    }
}

#[component]
pub fn CurrencyConverterPage() -> impl IntoView {
    let raw_amount = RwSignal::new("1000".to_owned());
    let from = RwSignal::new(Currency::Usd);
    let to = RwSignal::new(Currency::Inr);

    let converted = move || convert(parse_amount(&raw_amount.get()), from.get(), to.get());
    let unit_rate = move || convert(1.0, from.get(), to.get());

    view! {
        <Title text=page_title("Currency converter")/>
        <Meta name="description" content="Convert between Indian rupees and the currencies of popular study destinations."/>
        <section class="calculator calculator--narrow">
            <header class="calculator__header">
                <h1>"Currency converter"</h1>
                <p>"Indicative reference rates for budgeting. Your bank's rate on the day will differ."</p>
            </header>
            <div class="converter">
                <div class="field">
                    <label class="field__label" for="fx-amount">"Amount"</label>
                    <input
                        id="fx-amount"
                        class="field__input"
                        type="text"
                        inputmode="decimal"
                        prop:value=move || raw_amount.get()
                        on:input=move |ev| raw_amount.set(event_target_value(&ev))
                    />
                </div>
                <div class="field">
                    <label class="field__label" for="fx-from">"From"</label>
                    <CurrencySelect id="fx-from" value=from/>
                </div>
                <button
                    class="converter__swap"
                    type="button"
                    aria-label="Swap currencies"
                    on:click=move |_| {
                        let (a, b) = (from.get_untracked(), to.get_untracked());
                        from.set(b);
                        to.set(a);
                    }
                >
                    "⇄"
                </button>
                <div class="field">
                    <label class="field__label" for="fx-to">"To"</label>
                    <CurrencySelect id="fx-to" value=to/>
                </div>
            </div>
            <div class="result-card result-card--primary">
                <span class="result-card__label">
                    {move || format_amount(parse_amount(&raw_amount.get()), from.get())} " ="
                </span>
                <span class="result-card__value">{move || format_amount(converted(), to.get())}</span>
                <span class="result-card__note">
                    {move || format!("1 {} = {}", from.get().code(), format_amount(unit_rate(), to.get()))}
                </span>
            </div>
            <table class="rate-table">
                <caption>"Reference rates"</caption>
                <tbody>
                    {Currency::ALL
                        .into_iter()
                        .filter(|c| *c != Currency::Inr)
                        .map(|c| {
                            view! {
                                <tr>
                                    <th scope="row">{format!("1 {}", c.code())}</th>
                                    <td>{format_amount(c.inr_per_unit(), Currency::Inr)}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </section>
    }
}

//! Study destination guide, rendered from the static country catalogue.

use content::countries::{Country, find_country};
use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::hooks::use_params_map;
use tools::currency::{Currency, convert, format_amount, format_compact_inr};
use tools::expense::ExpenseSheet;

use crate::components::hero::Hero;
use crate::components::reveal::Reveal;
use crate::components::section_heading::SectionHeading;
use crate::pages::not_found::NotFoundCopy;
use crate::pages::page_title;

#[component]
pub fn CountryPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.with(|p| p.get("slug").unwrap_or_default());

    move || match find_country(&slug()) {
        Some(country) => view! { <CountryGuide country/> }.into_any(),
        None => view! {
            <Title text=page_title("Destination not found")/>
            <NotFoundCopy heading="Destination not found" back_href="/tools/expense-calculator" back_label="Compare living costs"/>
        }
        .into_any(),
    }
}

#[component]
fn CountryGuide(country: &'static Country) -> impl IntoView {
    let (low, high) = country.tuition_range;
    let tuition = format!("{} – {}", format_amount(low, country.currency), format_amount(high, country.currency));
    let tuition_inr = format!(
        "{} – {} a year",
        format_compact_inr(convert(low, country.currency, Currency::Inr)),
        format_compact_inr(convert(high, country.currency, Currency::Inr)),
    );
    let monthly = ExpenseSheet::for_profile(&country.costs).monthly_total();
    let living = format!(
        "{} a month ({})",
        format_amount(monthly, country.currency),
        format_compact_inr(convert(monthly, country.currency, Currency::Inr)),
    );
    let heading = format!("{} Study in {}", country.flag, country.name);

    view! {
        <Title text=page_title(&format!("Study in {}", country.name))/>
        <Meta name="description" content=format!("Tuition, living costs, intakes and visa basics for studying in {}.", country.name)/>
        <Hero
            heading=heading
            subheading=format!("Costs, intakes and visa basics for {}.", country.name)
            cta_label="Estimate your loan EMI"
            cta_href="/tools/emi-calculator"
        />
        <section class="section">
            <Reveal>
                <dl class="stats">
                    <div class="stats__item">
                        <dt class="stats__label">"Annual tuition"</dt>
                        <dd class="stats__value">{tuition}</dd>
                        <dd class="stats__note">{tuition_inr}</dd>
                    </div>
                    <div class="stats__item">
                        <dt class="stats__label">"Typical living cost"</dt>
                        <dd class="stats__value">{living}</dd>
                    </div>
                    <div class="stats__item">
                        <dt class="stats__label">"Currency"</dt>
                        <dd class="stats__value">{format!("{} ({})", country.currency.name(), country.currency.code())}</dd>
                    </div>
                </dl>
            </Reveal>
        </section>
        <section class="section country-guide">
            <div>
                <SectionHeading title="Intakes"/>
                <ul class="pill-list">
                    {country.intakes.iter().map(|intake| view! { <li class="pill">{*intake}</li> }).collect_view()}
                </ul>
            </div>
            <div>
                <SectionHeading title="Popular courses"/>
                <ul class="pill-list">
                    {country.popular_courses.iter().map(|course| view! { <li class="pill">{*course}</li> }).collect_view()}
                </ul>
            </div>
            <div>
                <SectionHeading title="Visa"/>
                <p>{country.visa}</p>
            </div>
            <div>
                <SectionHeading title="Working while you study"/>
                <p>{country.work_rights}</p>
            </div>
        </section>
        <section class="section section--cta">
            <p>"Want the full month-by-month picture?"</p>
            <a class="btn btn--primary" href=format!("/tools/expense-calculator?country={}", country.slug)>
                "Open the cost of living calculator"
            </a>
        </section>
    }
}

//! IST-anchored time zone converter.
//!
//! The slider picks a time of day in IST; every selected zone shows the
//! same instant. The zone list is session-local and starts from the usual
//! study destinations.

use chrono::NaiveDate;
use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use tools::timezone::{
    MINUTES_PER_DAY, POPULAR_ZONES, SLIDER_STEP, ZoneCard, ZoneSelection, city_name, clamp_slider,
    format_slider_label, ist_card, ist_today, parse_zone, slider_seed, zone_cards,
};

use crate::pages::page_title;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[component]
fn ZoneCardView(card: ZoneCard, #[prop(optional)] on_remove: Option<Callback<String>>) -> impl IntoView {
    let day_label = card.day_label();
    let zone = card.zone.clone();

    view! {
        <article class="zone-card" class:zone-card--shifted=!day_label.is_empty()>
            <header class="zone-card__header">
                <span class="zone-card__city">{card.city}</span>
                {on_remove.map(|remove| {
                    view! {
                        <button
                            class="zone-card__remove"
                            type="button"
                            aria-label="Remove time zone"
                            on:click=move |_| remove.run(zone.clone())
                        >
                            "✕"
                        </button>
                    }
                })}
            </header>
            <span class="zone-card__time">{card.time}</span>
            <span class="zone-card__meta">{format!("{} · UTC{}", card.abbreviation, card.utc_offset)}</span>
            <span class="zone-card__day">{day_label}</span>
        </article>
    }
}

#[component]
pub fn TimeZonePage() -> impl IntoView {
    let now = chrono::Utc::now();
    let date = RwSignal::new(ist_today(now));
    let slider = RwSignal::new(slider_seed(now));

    // Server markup can lag the browser clock; re-read it once hydrated.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let now = chrono::Utc::now();
        date.set(ist_today(now));
        slider.set(slider_seed(now));
    });
    let selection = RwSignal::new(ZoneSelection::default());
    let picker = RwSignal::new(String::new());

    let on_remove = Callback::new(move |zone: String| {
        if let Ok(tz) = parse_zone(&zone) {
            selection.update(|s| {
                s.remove(tz);
            });
        }
    });

    let on_add = move || {
        let Ok(tz) = parse_zone(&picker.get_untracked()) else {
            return;
        };
        selection.update(|s| {
            s.add(tz);
        });
        picker.set(String::new());
    };

    view! {
        <Title text=page_title("Time zone converter")/>
        <Meta name="description" content="Convert India Standard Time to the time zones of popular study destinations."/>
        <section class="calculator">
            <header class="calculator__header">
                <h1>"Time zone converter"</h1>
                <p>"Pick a time in India to see what time it is at your university."</p>
            </header>
            <div class="tz-controls">
                <div class="field">
                    <label class="field__label" for="tz-date">"Date (IST)"</label>
                    <input
                        id="tz-date"
                        class="field__input"
                        type="date"
                        prop:value=move || date.get().format(DATE_FORMAT).to_string()
                        on:change=move |ev| {
                            if let Ok(parsed) = NaiveDate::parse_from_str(&event_target_value(&ev), DATE_FORMAT) {
                                date.set(parsed);
                            }
                        }
                    />
                </div>
                <div class="field field--grow">
                    <label class="field__label" for="tz-slider">
                        "Time in India: " <strong>{move || format_slider_label(slider.get())}</strong>
                    </label>
                    <input
                        id="tz-slider"
                        class="range-field__slider"
                        type="range"
                        min="0"
                        max=(MINUTES_PER_DAY - 1).to_string()
                        step=SLIDER_STEP.to_string()
                        prop:value=move || slider.get().to_string()
                        on:input=move |ev| {
                            let minutes = event_target_value(&ev).parse::<u16>().unwrap_or(0);
                            slider.set(clamp_slider(minutes));
                        }
                    />
                </div>
            </div>
            <div class="zone-grid">
                {move || view! { <ZoneCardView card=ist_card(date.get(), slider.get())/> }}
                {move || {
                    selection.with(|s| zone_cards(date.get(), slider.get(), s))
                        .into_iter()
                        .map(|card| view! { <ZoneCardView card on_remove/> })
                        .collect_view()
                }}
            </div>
            <form class="tz-add" on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                on_add();
            }>
                <label class="field__label" for="tz-add">"Add a city"</label>
                <select
                    id="tz-add"
                    class="field__select"
                    prop:value=move || picker.get()
                    on:change=move |ev| picker.set(event_target_value(&ev))
                >
                    <option value="">"Choose a time zone"</option>
                    {move || {
                        POPULAR_ZONES
                            .iter()
                            .filter(|name| parse_zone(name).is_ok_and(|tz| !selection.with(|s| s.contains(tz))))
                            .map(|name| view! { <option value=*name>{city_name(name)}</option> })
                            .collect_view()
                    }}
                </select>
                <button class="btn btn--primary" type="submit" disabled=move || picker.get().is_empty()>
                    "Add"
                </button>
            </form>
        </section>
    }
}
